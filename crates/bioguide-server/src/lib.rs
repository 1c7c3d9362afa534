//! BioGuide server: HTTP API and terminal REPL over the scripted advisor.

pub mod knowledge;
pub mod repl;
pub mod routes;
pub mod session_store;
pub mod state;

pub use knowledge::{load_knowledge, Knowledge};
pub use routes::build_router;
pub use state::AppState;
