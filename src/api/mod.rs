pub mod routes;
mod server;
pub use server::{app, cors, init_tracing, serve};
pub mod public;
mod state;
pub use state::{AppState, SharedState};
