//! HTTP plumbing shared by all services.

mod json;
pub(crate) use json::Json;
