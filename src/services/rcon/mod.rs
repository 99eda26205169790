//! Executing RCON commands on behalf of web clients.
//!
//! There are two ways to do this:
//!
//! - `POST /rcon` runs a single command. Every request dials the game server, runs the command,
//!   and hangs up again.
//! - `GET /rcon_ws` upgrades to a WebSocket, over which a client can connect once and then run
//!   any number of commands on the same RCON connection. See [`websocket`] for the protocol.
//!
//! Both routes are also served under the `/v1` prefix.

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::rcon::{self, RconClient, RconError};

mod models;
pub use models::{ExecuteRequest, ExecuteResponse, RconRequest, RconResponse};

mod http;

pub mod websocket;

#[cfg(test)]
mod tests;

/// A service for executing RCON commands.
#[derive(Debug, Clone)]
pub struct RconService<C>
{
	/// Used to dial game servers.
	client: C,

	/// Cancelled when the server is shutting down, so open WebSockets can be closed.
	cancellation_token: CancellationToken,

	/// Tracks open WebSockets so shutdown can wait for them to close.
	task_tracker: TaskTracker,
}

impl<C> RconService<C>
where
	C: RconClient,
{
	/// Create a new [`RconService`].
	pub fn new(client: C, cancellation_token: CancellationToken, task_tracker: TaskTracker) -> Self
	{
		Self { client, cancellation_token, task_tracker }
	}

	/// Runs a single command on a fresh RCON connection.
	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	pub async fn execute(&self, request: RconRequest) -> Result<RconResponse, RconError>
	{
		let output =
			rcon::execute_once(&self.client, &request.address, &request.password, &request.command)
				.await?;

		Ok(RconResponse { output })
	}
}
