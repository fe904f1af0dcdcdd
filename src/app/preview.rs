use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tokio::task::JoinHandle;

use crate::App;

/// Launch `open_cmd path` detached from the terminal. The returned task waits
/// on the child so it is reaped when the viewer exits.
pub(crate) fn spawn_viewer(
    open_cmd: &str,
    path: &Path,
) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = Command::new(open_cmd)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let open_cmd = open_cmd.to_string();
    Ok(tokio::spawn(async move {
        match child.wait().await {
            Ok(status) => {
                tracing::debug!("open_command: {} exited with {}", open_cmd, status);
                Some(status)
            }
            Err(e) => {
                tracing::warn!("open_command: failed to wait on {}: {}", open_cmd, e);
                None
            }
        }
    }))
}

impl App {
    /// Open the preview modal for the selected resource
    pub(crate) fn preview_selected(&mut self) {
        let Some(pdf) = self.model.selected_pdf().cloned() else {
            return;
        };

        let url = self.client.resolve_url(&pdf.url);
        tracing::debug!("Previewing {} from {}", pdf.name, url);
        let request = self.model.open_preview(&pdf.name, url);
        self.dispatch(Some(request));
    }

    /// Hand the downloaded preview copy to `open_command`
    pub(crate) fn open_preview_externally(&mut self) {
        let Some(ref open_cmd) = self.open_command else {
            self.model
                .show_toast("Error: open_command not configured".to_string());
            return;
        };

        let Some(document) = self
            .model
            .ui
            .preview
            .as_ref()
            .and_then(|preview| preview.document())
        else {
            self.model
                .show_toast("Error: preview not downloaded yet".to_string());
            return;
        };
        let local_path = document.local_path.clone();

        let result = spawn_viewer(open_cmd, &local_path);

        match result {
            Ok(_waiter) => {
                tracing::debug!("open_command: spawned {} {}", open_cmd, local_path.display());
                self.model
                    .show_toast(format!("Opened: {}", local_path.display()));
            }
            Err(e) => {
                tracing::warn!("Failed to execute open_command '{}': {}", open_cmd, e);
                self.model
                    .show_toast(format!("Error: Failed to open with '{}'", open_cmd));
            }
        }
    }
}
