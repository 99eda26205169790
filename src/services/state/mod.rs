//! Reporting the state of the game server the gateway was configured with.
//!
//! This service is only registered if an RCON address was passed on startup.

use srcds::Status;
use srcds::status::ParseStatusError;
use thiserror::Error;

use crate::rcon::{self, RconClient, RconError, Target};

mod http;

#[cfg(test)]
mod tests;

/// The console command whose output we parse.
const STATUS_COMMAND: &str = "status";

/// A service for querying a single game server.
#[derive(Debug, Clone)]
pub struct StateService<C>
{
	/// Used to dial the game server.
	client: C,

	/// The game server.
	target: Target,
}

/// Errors that can occur while fetching a server's status.
#[derive(Debug, Error)]
pub enum FetchStatusError
{
	/// We could not run the `status` command.
	#[error(transparent)]
	Rcon(#[from] RconError),

	/// The server answered with something we could not parse.
	#[error("failed to parse status output: {0}")]
	Parse(#[from] ParseStatusError),
}

impl<C> StateService<C>
where
	C: RconClient,
{
	/// Create a new [`StateService`].
	pub fn new(client: C, target: Target) -> Self
	{
		Self { client, target }
	}

	/// Runs `status` on a fresh RCON connection and parses the output.
	#[tracing::instrument(
		level = "debug",
		skip(self),
		fields(address = %self.target.address),
		err(Debug, level = "debug"),
	)]
	pub async fn fetch_status(&self) -> Result<Status, FetchStatusError>
	{
		let output = rcon::execute_once(
			&self.client,
			&self.target.address,
			&self.target.password,
			STATUS_COMMAND,
		)
		.await?;

		Ok(Status::parse(&output)?)
	}
}
