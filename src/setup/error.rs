//! Errors that can occur while starting or running the server.

use std::io;

use thiserror::Error;

/// The different errors that can happen in [`run()`] and [`serve()`].
///
/// [`run()`]: crate::run
/// [`serve()`]: crate::serve
#[derive(Debug, Error)]
pub enum Error
{
	/// We could not bind the TCP listener.
	#[error("failed to bind to `{addr}`: {source}")]
	Bind
	{
		/// The address we tried to bind to.
		addr: String,

		/// The underlying I/O error.
		#[source]
		source: io::Error,
	},

	/// We could not determine the local address of the TCP listener.
	#[error("failed to get local address: {0}")]
	LocalAddr(#[source] io::Error),

	/// The server stopped because of an I/O error.
	#[error("failed to run server: {0}")]
	Serve(#[source] io::Error),
}
