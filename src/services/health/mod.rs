//! A very basic service that acts as a healthcheck.

mod http;

/// A service that simply responds if the gateway is up.
#[derive(Debug, Default, Clone, Copy)]
pub struct HealthService;

impl HealthService
{
	/// Create a new [`HealthService`].
	pub fn new() -> Self
	{
		Self
	}

	/// Says hello to the world.
	#[tracing::instrument(level = "trace", skip(self))]
	pub fn hello(&self) -> &'static str
	{
		"Hello!"
	}
}
