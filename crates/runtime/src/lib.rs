//! Session orchestration for the deck battler engine.
//!
//! This crate wires the content oracles, per-player session workers and
//! persistence into a cohesive API. Consumers build a [`SessionManager`],
//! send actions for a player id and subscribe to that session's updates
//! through [`SessionHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the session manager and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`oracle`] and [`repository`] provide data adapters
//! - workers keep background tasks internal to the crate
pub mod api;
pub mod oracle;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{
    ActionReply, ActionRequest, CatalogSnapshot, RequestError, Result, RuntimeError,
    SessionEvent, SessionHandle, StateSnapshot,
};
pub use oracle::OracleManager;
pub use repository::{FileStateRepository, InMemoryStateRepo, RepositoryError, StateRepository};
pub use runtime::{RuntimeConfig, SessionManager, SessionManagerBuilder};
