//! Gateway services.
//!
//! Every service maps to a set of HTTP routes and implements `Into<axum::Router>`.

mod health;
pub use health::HealthService;

pub mod rcon;
pub use rcon::RconService;

pub mod state;
pub use state::StateService;
