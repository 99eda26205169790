//! Reasons why we want to close a WebSocket connection.

use axum::extract::ws::{self, Utf8Bytes, close_code};

/// Reasons why we want to close a WebSocket connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason
{
	/// The server is shutting down, so we have to close all connections.
	ServerShutdown,

	/// The client sent a frame we could not decode.
	InvalidMessage,
}

impl CloseReason
{
	/// Returns the close code sent to the client.
	///
	/// See: <https://developer.mozilla.org/en-US/docs/Web/API/CloseEvent/code#value>
	pub const fn code(self) -> ws::CloseCode
	{
		match self {
			Self::ServerShutdown => close_code::RESTART,
			Self::InvalidMessage => close_code::INVALID,
		}
	}

	/// Encodes this [`CloseReason`] as a [`ws::CloseFrame`].
	pub(super) fn as_close_frame(self) -> ws::CloseFrame
	{
		let reason = match self {
			Self::ServerShutdown => "server is shutting down",
			Self::InvalidMessage => "invalid message",
		};

		ws::CloseFrame { code: self.code(), reason: Utf8Bytes::from_static(reason) }
	}
}
