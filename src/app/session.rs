use crate::App;

impl App {
    /// Tear down the admin session and quit
    pub(crate) fn logout(&mut self) {
        match self.session_store.teardown() {
            Ok(existed) => {
                if !existed {
                    tracing::info!("Logout requested without an active session");
                }
                self.model.ui.close_all_modals();
                self.model.ui.admin_name = None;
                self.model.ui.should_quit = true;
            }
            Err(e) => {
                tracing::warn!("Failed to clear session: {}", e);
                self.model.ui.show_alert(format!("Error signing out: {}", e));
            }
        }
    }
}
