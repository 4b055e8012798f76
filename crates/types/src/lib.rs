//! Shared domain primitives for HYGIA.
//!
//! Contains:
//! - [`Role`] - the closed set of dashboard roles
//! - [`NonEmptyText`] - presence-checked text (clinical note content)
//!
//! Used by `hygia-core`, `api-rest`, and `hygia-cli` so all surfaces agree on
//! the same primitive contracts.

mod role;
mod text;

pub use role::{Role, RoleError};
pub use text::{NonEmptyText, TextError};
