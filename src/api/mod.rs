//! HTTP surface: page handlers, the live session socket and the router.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod ws;

pub use routes::create_router;
pub use state::AppState;
