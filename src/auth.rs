//! Credential, base-address, and per-call target models.

pub mod credential;
pub mod secret;
pub mod target;

pub use credential::*;
pub use secret::*;
pub use target::*;
