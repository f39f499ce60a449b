// In-memory sessions: account state, profile and chat histories per visitor.
// Nothing survives a restart.

pub mod handlers;
pub mod store;

pub use store::{Session, SessionStore};
