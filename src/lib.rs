//! Client-side helpers for smoke testing an authentication service.
//!
//! The service under test is external and assumed to be running already; this
//! crate only ships the request body types, the base URL / cookie constants,
//! and a format-only token decoder used by the black-box tests under
//! `tests/api`.

pub mod domain;
pub mod token;
pub mod utils;
