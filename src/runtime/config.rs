//! Runtime configuration for the gateway.
//!
//! This module contains the [`Config`] struct, which is assembled from command line arguments
//! and environment variables on startup.

use std::fmt;
use std::sync::Arc;

use crate::rcon::Target;

/// The gateway's runtime configuration.
///
/// See [module level docs] for more details.
///
/// [module level docs]: crate::runtime::config
#[derive(Clone)]
pub struct Config
{
	/// [`Inner`] actually contains all the values, we just wrap it so
	/// [`Config`] is cheap to clone.
	inner: Arc<Inner>,
}

impl Config
{
	/// Creates a new [`Config`].
	///
	/// If `status_target` is [`None`], the status endpoint is not served.
	pub fn new(bind_addr: impl Into<String>, status_target: Option<Target>) -> Self
	{
		Self { inner: Arc::new(Inner { bind_addr: bind_addr.into(), status_target }) }
	}

	/// Returns the address the HTTP server should listen on.
	pub fn bind_addr(&self) -> &str
	{
		&self.inner.bind_addr
	}

	/// Returns the server queried by the status endpoint.
	pub fn status_target(&self) -> Option<&Target>
	{
		self.inner.status_target.as_ref()
	}
}

impl fmt::Debug for Config
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Config")
			.field("bind_addr", &self.bind_addr())
			.field("status_target", &self.status_target())
			.finish()
	}
}

#[allow(clippy::missing_docs_in_private_items)]
struct Inner
{
	/// `host:port` to bind the TCP listener to.
	bind_addr: String,

	/// The game server queried by `GET /v1/state/status`.
	status_target: Option<Target>,
}
