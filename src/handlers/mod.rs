//! Event Handlers
//!
//! - api: responses from the background API service
//! - keyboard: user keyboard input
//!
//! Handlers take `&mut App`, apply the event to the model and dispatch
//! whatever request the model update returns.

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
