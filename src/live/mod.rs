//! Live home screen: per-tab sessions driven over a WebSocket.

pub mod debounce;
pub mod messages;
pub mod session;

pub use debounce::Debouncer;
pub use messages::{ClientMessage, ServerMessage};
pub use session::{BrowseSession, SessionSettings, SessionStart};
