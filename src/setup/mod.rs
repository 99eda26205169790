//! Setting up the HTTP server.

mod error;
pub use error::Error;
