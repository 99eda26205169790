//! Request / Response types for this service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body for `POST /rcon`.
///
/// Missing fields are empty, so passwordless servers can omit `password`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExecuteRequest
{
	/// The command to run.
	pub rcon_request: RconRequest,
}

/// A command to run on a specific server.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct RconRequest
{
	/// `host:port` of the game server.
	pub address: String,

	/// The RCON password.
	pub password: String,

	/// The command to execute.
	pub command: String,
}

impl fmt::Debug for RconRequest
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("RconRequest")
			.field("address", &self.address)
			.field("password", &"*****")
			.field("command", &self.command)
			.finish()
	}
}

/// Response body for `POST /rcon`.
#[derive(Debug, Serialize)]
pub struct ExecuteResponse
{
	/// The command's result.
	pub rcon_response: RconResponse,
}

/// The raw output of a command.
#[derive(Debug, Serialize)]
pub struct RconResponse
{
	/// Whatever the server answered, unparsed.
	pub output: String,
}
