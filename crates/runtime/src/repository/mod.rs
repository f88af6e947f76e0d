//! Persistence adapters for session state.
//!
//! Sessions live in worker memory; a [`StateRepository`] keeps a copy so a
//! restarted process can resume them.
mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use traits::StateRepository;
