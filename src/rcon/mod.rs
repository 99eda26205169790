//! The RCON capability.
//!
//! Everything in this crate that talks to a game server goes through the [`RconClient`] and
//! [`RconSession`] traits. The production implementation lives in [`tcp`]; tests swap in an
//! in-memory client.

use std::fmt;

use thiserror::Error;

pub mod tcp;
pub use tcp::TcpRconClient;

#[cfg(test)]
pub(crate) mod mock;

/// Convenience type alias.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Something that can open RCON sessions.
///
/// Implementations are cloned into every request handler and WebSocket connection.
pub trait RconClient: Clone + Send + Sync + 'static
{
	/// An authenticated connection to a single server.
	type Session: RconSession;

	/// Dials `address` and authenticates with `password`.
	fn connect(
		&self,
		address: &str,
		password: &str,
	) -> impl Future<Output = Result<Self::Session, RconError>> + Send;
}

/// An authenticated RCON connection.
pub trait RconSession: Send + 'static
{
	/// Executes `command` and returns the server's raw output.
	fn execute(&mut self, command: &str) -> impl Future<Output = Result<String, RconError>> + Send;

	/// Releases the underlying connection.
	fn close(self) -> impl Future<Output = ()> + Send
	where
		Self: Sized,
	{
		async move { drop(self) }
	}
}

/// Errors returned by [`RconClient`] and [`RconSession`] operations.
#[derive(Debug, Error)]
pub enum RconError
{
	/// We could not connect or authenticate.
	#[error("failed to connect to `{address}`: {source}")]
	Connect
	{
		/// The address we tried to dial.
		address: String,

		/// The underlying transport / authentication error.
		#[source]
		source: BoxError,
	},

	/// The server did not answer a command.
	#[error("failed to execute command: {0}")]
	Execute(#[source] BoxError),
}

/// A server we can send RCON commands to.
#[derive(Clone, PartialEq, Eq)]
pub struct Target
{
	/// `host:port` of the server.
	pub address: String,

	/// The RCON password.
	pub password: String,
}

impl fmt::Debug for Target
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Target")
			.field("address", &self.address)
			.field("password", &"*****")
			.finish()
	}
}

/// Opens a session, runs a single command, and closes the session again.
///
/// The session is closed whether or not the command succeeded.
#[tracing::instrument(level = "debug", skip(client, password), err(Debug, level = "debug"))]
pub async fn execute_once<C>(
	client: &C,
	address: &str,
	password: &str,
	command: &str,
) -> Result<String, RconError>
where
	C: RconClient,
{
	let mut session = client.connect(address, password).await?;
	let result = session.execute(command).await;

	session.close().await;

	result
}
