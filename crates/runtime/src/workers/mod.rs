//! Background workers owned by the runtime.
mod session;

pub(crate) use session::{Command, SessionWorker};
