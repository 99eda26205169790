//! A single WebSocket connection and the RCON session it owns.

use std::error::Error;
use std::fmt;
use std::ops::ControlFlow;

use axum::extract::ws;
use futures::{Sink, SinkExt, Stream, StreamExt};
use thiserror::Error;
use tokio::select;
use tokio_util::sync::CancellationToken;

use super::message::{
	CommandRequest,
	CommandResponse,
	ConnectRequest,
	DecodeMessageError,
	EncodeMessageError,
	Envelope,
	RequestType,
	Response,
};
use super::CloseReason;
use crate::rcon::{BoxError, RconClient, RconSession};

/// A live WebSocket connection.
///
/// Generic over the underlying socket so tests can drive it without a real network connection.
pub struct Session<S, C>
where
	C: RconClient,
{
	/// The underlying WebSocket.
	socket: S,

	/// Used to dial the game server on `connect`.
	client: C,

	/// The RCON session, once a `connect` request succeeded.
	rcon: Option<C::Session>,

	/// A cancellation token so we can gracefully close connections when the
	/// server is shutting down.
	cancellation_token: CancellationToken,
}

/// Errors that can occur when receiving messages.
#[derive(Debug, Error)]
pub enum ReceiveMessageError
{
	/// The socket failed.
	#[error("failed to receive message: {0}")]
	Io(#[source] BoxError),

	/// The client closed the connection.
	#[error("client closed connection")]
	ConnectionClosed
	{
		/// The close frame that was included in the message, if any.
		close_frame: Option<ws::CloseFrame>,
	},

	/// The message was not a valid envelope.
	#[error(transparent)]
	Decode(#[from] DecodeMessageError),
}

/// Errors that can occur when sending messages.
#[derive(Debug, Error)]
pub enum SendMessageError
{
	/// The message could not be encoded.
	#[error(transparent)]
	Encode(#[from] EncodeMessageError),

	/// The socket failed.
	#[error("failed to send message: {0}")]
	Io(#[source] BoxError),
}

impl<S, E, C> Session<S, C>
where
	S: Stream<Item = Result<ws::Message, E>>,
	S: Sink<ws::Message>,
	S: Send + Unpin,
	E: Into<BoxError>,
	<S as Sink<ws::Message>>::Error: Into<BoxError>,
	C: RconClient,
{
	/// Creates a new, unconnected session.
	pub fn new(socket: S, client: C, cancellation_token: CancellationToken) -> Self
	{
		Self { socket, client, rcon: None, cancellation_token }
	}

	/// Serves the connection until either side closes it.
	///
	/// The RCON session, if any, is closed before this returns.
	#[tracing::instrument(skip(self))]
	pub async fn serve(mut self)
	{
		let cancellation_token = self.cancellation_token.clone();

		let close_reason = loop {
			let result = select! {
				biased;

				() = cancellation_token.cancelled() => break Some(CloseReason::ServerShutdown),
				result = self.recv_message() => result,
			};

			match result {
				Ok(None) => {
					tracing::trace!("received ping / pong");
				}
				Ok(Some(envelope)) => {
					if self.on_message(envelope).await.is_break() {
						break None;
					}
				}
				Err(ReceiveMessageError::ConnectionClosed { close_frame }) => {
					tracing::debug!(?close_frame, "client closed connection");
					break None;
				}
				Err(ReceiveMessageError::Decode(error)) => {
					tracing::warn!(error = &error as &dyn Error, "received invalid message");
					break Some(CloseReason::InvalidMessage);
				}
				Err(ReceiveMessageError::Io(error)) => {
					tracing::debug!(error = &*error as &dyn Error, "failed to receive message");
					break None;
				}
			}
		};

		self.close(close_reason).await;
	}

	/// Callback for received messages.
	///
	/// Breaks if the connection is no longer usable.
	#[tracing::instrument(level = "debug", skip(self))]
	async fn on_message(&mut self, envelope: Envelope) -> ControlFlow<()>
	{
		match envelope.request_type {
			RequestType::Connect => {
				self.on_connect(&envelope).await;
				ControlFlow::Continue(())
			}
			RequestType::Command => self.on_command(&envelope).await,
			RequestType::Other(ref request_type) => {
				tracing::debug!(%request_type, "ignoring unknown request type");
				ControlFlow::Continue(())
			}
		}
	}

	/// Handles a `connect` request.
	async fn on_connect(&mut self, envelope: &Envelope)
	{
		if self.rcon.is_some() {
			tracing::warn!("already connected; ignoring connect request");
			return;
		}

		let request = match envelope.payload::<ConnectRequest>() {
			Ok(request) => request,
			Err(error) => {
				tracing::warn!(error = &error as &dyn Error, "failed to decode connect request");
				return;
			}
		};

		match self.client.connect(&request.address, &request.password).await {
			Ok(rcon) => {
				tracing::info!(address = %request.address, "connected to game server");
				self.rcon = Some(rcon);
			}
			Err(error) => {
				tracing::warn!(error = &error as &dyn Error, "failed to connect to game server");
			}
		}
	}

	/// Handles a `command` request.
	///
	/// Breaks if the response could not be written to the socket.
	async fn on_command(&mut self, envelope: &Envelope) -> ControlFlow<()>
	{
		let Some(rcon) = self.rcon.as_mut() else {
			tracing::warn!("unconnected; ignoring command request");
			return ControlFlow::Continue(());
		};

		let request = match envelope.payload::<CommandRequest>() {
			Ok(request) => request,
			Err(error) => {
				tracing::warn!(error = &error as &dyn Error, "failed to decode command request");
				return ControlFlow::Continue(());
			}
		};

		let output = match rcon.execute(&request.command).await {
			Ok(output) => output,
			Err(error) => {
				tracing::warn!(
					command = %request.command,
					error = &error as &dyn Error,
					"failed to execute command",
				);
				return ControlFlow::Continue(());
			}
		};

		match self.send_message(Response::Command(CommandResponse { output })).await {
			Ok(()) => ControlFlow::Continue(()),
			Err(SendMessageError::Encode(error)) => {
				tracing::error!(error = &error as &dyn Error, "failed to encode response");
				ControlFlow::Continue(())
			}
			Err(SendMessageError::Io(error)) => {
				tracing::debug!(error = &*error as &dyn Error, "failed to send response");
				ControlFlow::Break(())
			}
		}
	}

	/// Receives and decodes a message from the underlying socket.
	///
	/// Returns [`None`] for frames that carry no request.
	async fn recv_message(&mut self) -> Result<Option<Envelope>, ReceiveMessageError>
	{
		match self.socket.next().await {
			None => Err(ReceiveMessageError::ConnectionClosed { close_frame: None }),
			Some(Err(error)) => Err(ReceiveMessageError::Io(error.into())),
			Some(Ok(raw)) => match Envelope::decode(raw) {
				Err(DecodeMessageError::ConnectionClosed { close_frame }) => {
					Err(ReceiveMessageError::ConnectionClosed { close_frame })
				}
				result => result.map_err(Into::into),
			},
		}
	}

	/// Encodes and sends a message over the underlying socket.
	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	async fn send_message(&mut self, response: Response) -> Result<(), SendMessageError>
	{
		let message = response.encode()?;

		self.socket
			.send(message)
			.await
			.map_err(|error| SendMessageError::Io(error.into()))
	}

	/// Closes the RCON session and then the WebSocket.
	///
	/// If `reason` is [`Some`], a close frame is sent first.
	#[tracing::instrument(level = "debug", skip(self))]
	async fn close(mut self, reason: Option<CloseReason>)
	{
		if let Some(rcon) = self.rcon.take() {
			rcon.close().await;
			tracing::debug!("closed rcon session");
		}

		if let Some(reason) = reason {
			let close_frame = ws::Message::Close(Some(reason.as_close_frame()));

			if let Err(error) = self.socket.send(close_frame).await {
				let error: BoxError = error.into();
				tracing::debug!(error = &*error as &dyn Error, "failed to send close frame");
			}
		}

		if let Err(error) = self.socket.close().await {
			let error: BoxError = error.into();
			tracing::trace!(error = &*error as &dyn Error, "failed to close socket");
		}
	}
}

impl<S, C> fmt::Debug for Session<S, C>
where
	C: RconClient,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Session")
			.field("connected", &self.rcon.is_some())
			.finish_non_exhaustive()
	}
}
