use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Student resources admin console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging (written to <temp dir>/resadmin.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// API root URL, overrides base_url from the config file
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start an admin session
    Login {
        #[arg(long)]
        token: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// End the current admin session
    Logout,
}

mod app;
mod handlers;
mod ui;

use resadmin::api::ResourceClient;
use resadmin::config::{self, Config};
use resadmin::model::Model;
use resadmin::services::{self, ApiRequest, ApiResponse};
use resadmin::session::{AdminProfile, SessionStore};

pub struct App {
    pub model: Model,

    client: ResourceClient,
    api_tx: UnboundedSender<ApiRequest>,
    api_rx: UnboundedReceiver<ApiResponse>,
    session_store: SessionStore,
    open_command: Option<String>,
}

impl App {
    fn new(config: Config, session_store: SessionStore) -> Result<Self> {
        let client = ResourceClient::new(config.base_url.clone(), config.request_timeout())?;
        let (api_tx, api_rx) = services::spawn_api_service(client.clone());

        let mut model = Model::new(config.catalog, config.vim_mode);
        match session_store.load() {
            Ok(Some(session)) => model.ui.admin_name = Some(session.profile.name),
            Ok(None) => tracing::info!("No admin session; run `resadmin login` to start one"),
            Err(e) => tracing::warn!("Ignoring unreadable session: {}", e),
        }

        tracing::info!("Using resource service at {}", client.base_url());

        Ok(Self {
            model,
            client,
            api_tx,
            api_rx,
            session_store,
            open_command: config.open_command,
        })
    }

    /// Queue a request produced by a model update
    pub(crate) fn dispatch(&mut self, request: Option<ApiRequest>) {
        let Some(request) = request else {
            return;
        };

        tracing::debug!("Dispatching {} request", request.kind());
        if self.api_tx.send(request).is_err() {
            tracing::error!("API service stopped; request dropped");
            self.model
                .show_toast("Error: background service stopped".to_string());
        }
    }

    /// Handle API responses from background worker
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) {
        handlers::handle_key(self, key);
    }
}

fn run_command(command: Command, store: &SessionStore) -> Result<()> {
    match command {
        Command::Login { token, name, email } => {
            let session = store.init(&token, AdminProfile { name, email })?;
            println!(
                "Signed in as {} (session at {})",
                session.profile.name,
                store.path().display()
            );
        }
        Command::Logout => {
            if store.teardown()? {
                println!("Signed out");
            } else {
                println!("No active session");
            }
        }
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let config_path = config::find_config_path(args.config.as_deref(), args.base_url.is_some())?;
    tracing::debug!("Loading config from: {:?}", config_path);

    let mut config = match (config_path, &args.base_url) {
        (Some(path), _) => Config::load(&path)?,
        (None, Some(base_url)) => Config::with_base_url(base_url.clone()),
        (None, None) => anyhow::bail!("No config file and no --base-url given"),
    };

    // Override config with CLI flags
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if args.vim {
        config.vim_mode = true;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = Args::parse();
    let store = SessionStore::new(SessionStore::default_path());

    if let Some(command) = args.command.take() {
        return run_command(command, &store);
    }

    let _log_guard = resadmin::logging::init_tui(args.debug);
    if args.debug {
        tracing::debug!("Debug mode enabled");
    }

    let config = load_config(&args)?;
    let mut app = App::new(config, store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("Exiting with error: {:#}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal
            .draw(|f| {
                ui::render(f, app);
            })
            .context("Failed to draw frame")?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Yield so the API service task gets scheduled between polls
        tokio::task::yield_now().await;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
