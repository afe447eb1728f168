//! Buzzy API operations grouped by resource.
//!
//! Each submodule contributes request types plus an `impl Client` block. Every method exists
//! once; calling it on a [`Client::throttled`](crate::client::Client::throttled) view is the
//! throttled form.

pub mod children;
pub mod login;
pub mod organization;
pub mod rows;
pub mod team;

pub use children::*;
pub use login::*;
pub use organization::*;
pub use rows::*;
pub use team::*;
