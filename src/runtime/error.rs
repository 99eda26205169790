//! The main error type.
//!
//! This is returned by all fallible HTTP handlers and middlewares.

use std::fmt;
use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::rcon::RconError;

/// Type alias that defaults to our [`Error`] as the default error type, but is
/// still overridable and therefore compatible with [`std::result::Result`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The main runtime error type.
///
/// This is the only error type allowed to reach users!
pub struct Error
{
	/// We box this so our error type is only 1 pointer wide.
	inner: Box<Inner>,
}

/// The different kinds of errors that can occur at runtime.
#[derive(Debug, thiserror::Error)]
enum ErrorKind
{
	/// Talking to the game server failed.
	#[error(transparent)]
	Rcon(#[from] RconError),

	/// We could not serialize a response body.
	#[error("failed to serialize response: {0}")]
	EncodeResponse(#[source] serde_json::Error),

	/// An HTTP handler panicked, but was caught by middleware.
	#[error("handler panicked")]
	Panic,
}

impl Error
{
	/// Create a new [`Error`].
	#[track_caller]
	fn new(kind: ErrorKind) -> Self
	{
		Self { inner: Box::new(Inner { kind, source_location: *Location::caller() }) }
	}

	/// Returns the original error source.
	pub fn source(&self) -> &(dyn std::error::Error + Send + Sync + 'static)
	{
		&self.inner.kind
	}

	/// Returns the source code location of the original error source.
	pub fn source_location(&self) -> Location<'static>
	{
		self.inner.source_location
	}

	/// Returns the message we send to clients.
	///
	/// This never includes details about the underlying error.
	fn public_message(&self) -> &'static str
	{
		match self.inner.kind {
			ErrorKind::Rcon(_) => "Internal Error, command failed.",
			ErrorKind::EncodeResponse(_) => "Internal Error, failed to marshall response.",
			ErrorKind::Panic => "Internal Error.",
		}
	}

	/// Returns the appropriate HTTP status code to use in an error response.
	fn status(&self) -> StatusCode
	{
		match self.inner.kind {
			ErrorKind::Rcon(_) | ErrorKind::EncodeResponse(_) | ErrorKind::Panic => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	/// Indicate that an HTTP handler panicked but the panic was caught.
	#[track_caller]
	pub(crate) fn panic() -> Self
	{
		Self::new(ErrorKind::Panic)
	}

	/// Indicate that a response body could not be serialized.
	#[track_caller]
	pub(crate) fn encode_response(error: serde_json::Error) -> Self
	{
		Self::new(ErrorKind::EncodeResponse(error))
	}
}

impl fmt::Debug for Error
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "[{}]: {}", self.source_location(), self.source())
	}
}

impl fmt::Display for Error
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(self.source(), f)
	}
}

impl IntoResponse for Error
{
	fn into_response(self) -> Response
	{
		let status = self.status();

		tracing::error! {
			target: "rcon_web_api::audit_log",
			%status,
			kind = ?self.inner.kind,
			source_location = %self.source_location(),
			"internal server error: \"{self}\"",
		};

		(status, self.public_message()).into_response()
	}
}

impl From<RconError> for Error
{
	#[track_caller]
	fn from(value: RconError) -> Self
	{
		Self::new(value.into())
	}
}

/// The actual representation of [`Error`].
struct Inner
{
	/// Which particular error we're dealing with.
	kind: ErrorKind,

	/// The source code location of where this [`Error`] was created.
	source_location: Location<'static>,
}
