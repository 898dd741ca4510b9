//! Typed shapes for the JSON payloads of the Spotify Web API.
//!
//! The [`models`] module holds the shapes themselves. [`response`] decodes
//! an already received body into a shape or its [`models::ErrorResponse`],
//! [`conformance`] checks the documented relations between fields, and
//! [`registry`] names every top-level shape for the `shape-check` tool.

pub mod config;
pub mod conformance;
pub mod error;
pub mod models;
pub mod registry;
pub mod response;

pub use conformance::Conformance;
pub use error::{Result, ShapeError, Violation};
pub use registry::{check_file, decode, CheckReport, Payload, ShapeKind};
pub use response::{decode_error, decode_response};
