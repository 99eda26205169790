//! RCON over TCP, as spoken by Source dedicated servers.
//!
//! Framing and authentication are handled by the [`rcon`] crate.

use std::fmt;

use tokio::net::TcpStream;

use super::{RconClient, RconError, RconSession};

/// Dials game servers over TCP.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpRconClient;

impl TcpRconClient
{
	/// Creates a new [`TcpRconClient`].
	pub fn new() -> Self
	{
		Self
	}
}

impl RconClient for TcpRconClient
{
	type Session = TcpRconSession;

	#[tracing::instrument(level = "debug", skip(self, password), err(Debug, level = "debug"))]
	async fn connect(&self, address: &str, password: &str) -> Result<Self::Session, RconError>
	{
		let connection = <rcon::Connection<TcpStream>>::builder()
			.connect(address, password)
			.await
			.map_err(|error| RconError::Connect {
				address: address.to_owned(),
				source: error.into(),
			})?;

		tracing::debug!("authenticated");

		Ok(TcpRconSession { address: address.to_owned(), connection })
	}
}

/// A live TCP RCON connection.
///
/// Dropping the session closes the socket.
pub struct TcpRconSession
{
	/// The address we dialed.
	address: String,

	/// The authenticated connection.
	connection: rcon::Connection<TcpStream>,
}

impl RconSession for TcpRconSession
{
	#[tracing::instrument(
		level = "debug",
		skip(self),
		fields(address = %self.address),
		err(Debug, level = "debug"),
	)]
	async fn execute(&mut self, command: &str) -> Result<String, RconError>
	{
		self.connection
			.cmd(command)
			.await
			.map_err(|error| RconError::Execute(error.into()))
	}
}

impl fmt::Debug for TcpRconSession
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("TcpRconSession")
			.field("address", &self.address)
			.finish_non_exhaustive()
	}
}
