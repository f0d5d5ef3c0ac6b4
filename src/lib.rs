//! Derives typed client method signatures from OpenAPI documents.
//!
//! For every `(path, verb, endpoint)` of a [`Document`](openapi::Document)
//! the crate computes a method name ([`naming::method_name`]) and an ordered
//! argument list ([`params::func_parameters`]) whose types come from
//! [`resolve::derive_type`]. [`plan::build_plan`] collects them for the
//! emission layer.

pub mod config;
pub mod error;
pub mod loader;
pub mod naming;
pub mod openapi;
pub mod params;
pub mod plan;
pub mod resolve;

pub use error::{Error, Result};
