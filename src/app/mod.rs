//! App Orchestration Methods
//!
//! App implementation methods that need more than the pure model:
//! the HTTP client (URL resolution), the session store, or a spawned
//! external command. Grouped by domain, kept as `impl App`.

pub(crate) mod preview;
pub(crate) mod session;
