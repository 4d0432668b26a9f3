//! API layer - translation form endpoints and static UI

pub mod health;
pub mod router;
pub mod state;
pub mod translate;
pub mod types;

pub use router::create_router;
pub use state::AppState;
