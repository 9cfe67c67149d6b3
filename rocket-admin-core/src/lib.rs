//! rocket-admin-core - remote administrative actions for the Rocket
//! Engine Backend
//!
//! This crate provides:
//! - Target resolution (production vs. `--local` backend)
//! - The six reseed / Truth Ledger sync routes and their flag-driven
//!   selection
//! - The HTTP invoker (single POST, JSON response)
//! - Human-readable summary rendering of backend responses
//!
//! CLI parsing and process concerns live in the binary crate.

pub mod error;
pub mod invoker;
pub mod routes;
pub mod summary;
pub mod target;

pub use error::{InvokeError, Result};
pub use invoker::{ActionInvoker, InvocationRequest, InvocationResult};
pub use routes::{EntityScope, Operation, Route};
pub use target::Target;
