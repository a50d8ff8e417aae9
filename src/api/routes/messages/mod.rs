pub mod public;
mod router;
pub use router::{fetch_messages, router};
