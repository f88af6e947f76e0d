//! Public API surface exposed to clients of the runtime.
//!
//! Re-exports the handle, wire types and error types that downstream crates
//! use to drive sessions.
mod errors;
mod events;
mod handle;
mod request;
mod snapshot;

pub use errors::{RepositoryError, RequestError, Result, RuntimeError};
pub use events::{ActionReply, SessionEvent};
pub use handle::SessionHandle;
pub use request::ActionRequest;
pub use snapshot::{
    BuffView, CatalogSnapshot, CombatantView, EnemyView, PlayerView, StateSnapshot,
};
