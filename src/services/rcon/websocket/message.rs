//! WebSocket messages.
//!
//! Incoming messages are decoded in two steps: first the [`Envelope`], which only tells us what
//! kind of request we got, and then its payload, once we know which type to decode it as. A
//! broken envelope is fatal to the connection, a broken payload only to the request.

use std::fmt;

use axum::extract::ws;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A message we received.
#[derive(Deserialize)]
pub struct Envelope
{
	/// Determines how [`request`] is decoded.
	///
	/// [`request`]: Envelope::request
	#[serde(default)]
	pub request_type: RequestType,

	/// The undecoded payload.
	///
	/// This is `null` if the client did not send one.
	#[serde(default)]
	pub request: serde_json::Value,
}

/// The kinds of requests a client can send.
///
/// `null` is treated like a missing tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum RequestType
{
	/// See [`ConnectRequest`].
	Connect,

	/// See [`CommandRequest`].
	Command,

	/// Anything else; these are ignored.
	Other(String),
}

/// Payload of a `connect` request.
///
/// Missing fields are empty, so passwordless servers can omit `password`.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct ConnectRequest
{
	/// `host:port` of the game server.
	pub address: String,

	/// The RCON password.
	pub password: String,
}

/// Payload of a `command` request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommandRequest
{
	/// The command to execute.
	pub command: String,
}

/// A message we send.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "response_type", content = "response", rename_all = "lowercase")]
pub enum Response
{
	/// The result of a `command` request.
	Command(CommandResponse),
}

/// Payload of a `command` response.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse
{
	/// The command's raw output.
	pub output: String,
}

impl Envelope
{
	/// Decodes a raw message we received from a client.
	///
	/// Returns [`None`] for ping / pong frames, which carry no request.
	#[tracing::instrument(level = "trace", skip_all, err(Debug, level = "debug"))]
	pub fn decode(raw: ws::Message) -> Result<Option<Self>, DecodeMessageError>
	{
		match raw {
			ws::Message::Text(text) => serde_json::from_str(text.as_str())
				.map(Some)
				.map_err(Into::into),
			ws::Message::Binary(bytes) => serde_json::from_slice(&bytes)
				.map(Some)
				.map_err(Into::into),
			ws::Message::Ping(_) | ws::Message::Pong(_) => Ok(None),
			ws::Message::Close(close_frame) => {
				Err(DecodeMessageError::ConnectionClosed { close_frame })
			}
		}
	}

	/// Decodes the payload as `T`.
	pub fn payload<T>(&self) -> Result<T, serde_json::Error>
	where
		T: DeserializeOwned,
	{
		T::deserialize(&self.request)
	}
}

impl fmt::Debug for Envelope
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		// The payload may contain credentials.
		f.debug_struct("Envelope")
			.field("request_type", &self.request_type)
			.finish_non_exhaustive()
	}
}

impl From<Option<String>> for RequestType
{
	fn from(value: Option<String>) -> Self
	{
		let value = value.unwrap_or_default();

		match value.as_str() {
			"connect" => Self::Connect,
			"command" => Self::Command,
			_ => Self::Other(value),
		}
	}
}

impl Default for RequestType
{
	fn default() -> Self
	{
		Self::Other(String::new())
	}
}

impl fmt::Debug for ConnectRequest
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("ConnectRequest")
			.field("address", &self.address)
			.field("password", &"*****")
			.finish()
	}
}

impl Response
{
	/// Encodes a message so we can send it to a client.
	#[tracing::instrument(level = "trace", err(Debug, level = "debug"))]
	pub fn encode(&self) -> Result<ws::Message, EncodeMessageError>
	{
		let json = serde_json::to_string(self)?;

		Ok(ws::Message::Text(json.into()))
	}
}

/// Errors that can occur when decoding incoming messages.
#[derive(Debug, Error)]
pub enum DecodeMessageError
{
	/// We failed to parse the message as an [`Envelope`].
	#[error("failed to parse message: {0}")]
	ParseJson(#[from] serde_json::Error),

	/// The message was a close message.
	#[error("client closed connection")]
	ConnectionClosed
	{
		/// The close frame that was included in the message, if any.
		close_frame: Option<ws::CloseFrame>,
	},
}

/// Errors that can occur when encoding an outgoing message.
#[derive(Debug, Error)]
#[error("failed to encode message: {0}")]
pub struct EncodeMessageError(#[from] serde_json::Error);
