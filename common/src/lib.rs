//! Types and rules shared by the intake backend and frontend.
//!
//! Everything here is plain Rust with no browser or server dependency, so the
//! form and data-browser behavior is unit tested natively.

pub mod error;
pub mod form_state;
pub mod model;
pub mod notification;
pub mod requests;
pub mod session;
pub mod submission;
pub mod table;
pub mod templates;
