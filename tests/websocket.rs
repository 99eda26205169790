//! End-to-end tests for the WebSocket protocol, over a real TCP listener.

use std::net::SocketAddr;
use std::time::Duration;

use assert_matches::assert_matches;
use color_eyre::eyre::{OptionExt, eyre};
use futures::{SinkExt, StreamExt};
use rcon_web_api::rcon::{RconClient, RconError, RconSession};
use rcon_web_api::runtime::Config;
use rcon_web_api::setup;
use serde_json::json;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

type Result<T = (), E = color_eyre::Report> = std::result::Result<T, E>;
type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Accepts the password `hunter2` and echoes every command back.
#[derive(Debug, Clone)]
struct EchoClient;

#[derive(Debug)]
struct EchoSession;

impl RconClient for EchoClient
{
	type Session = EchoSession;

	async fn connect(&self, address: &str, password: &str) -> Result<Self::Session, RconError>
	{
		if password != "hunter2" {
			return Err(RconError::Connect {
				address: address.to_owned(),
				source: "bad password".into(),
			});
		}

		Ok(EchoSession)
	}
}

impl RconSession for EchoSession
{
	async fn execute(&mut self, command: &str) -> Result<String, RconError>
	{
		Ok(format!("> {command}\n"))
	}
}

struct Server
{
	addr: SocketAddr,
	shutdown: oneshot::Sender<()>,
	task: JoinHandle<Result<(), setup::Error>>,
}

impl Server
{
	async fn spawn() -> Result<Self>
	{
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let config = Config::new(addr.to_string(), None);
		let (shutdown, shutdown_rx) = oneshot::channel::<()>();

		let task = tokio::spawn(async move {
			let signal = async move {
				// A dropped sender also means "shut down".
				let _ = shutdown_rx.await;
			};

			rcon_web_api::serve(listener, &config, EchoClient, signal).await
		});

		Ok(Self { addr, shutdown, task })
	}

	async fn connect(&self, path: &str) -> Result<Socket>
	{
		let (socket, _) = connect_async(format!("ws://{}{path}", self.addr)).await?;

		Ok(socket)
	}

	async fn shutdown(self) -> Result
	{
		self.shutdown
			.send(())
			.map_err(|()| eyre!("server stopped early"))?;

		tokio::time::timeout(TIMEOUT, self.task).await???;

		Ok(())
	}
}

async fn send_json(socket: &mut Socket, json: serde_json::Value) -> Result
{
	socket.send(Message::text(json.to_string())).await?;

	Ok(())
}

async fn recv(socket: &mut Socket) -> Result<Message>
{
	let message = tokio::time::timeout(TIMEOUT, socket.next())
		.await?
		.ok_or_eyre("connection closed")??;

	Ok(message)
}

#[tokio::test]
async fn commands_over_websocket() -> Result
{
	let server = Server::spawn().await?;
	let mut socket = server.connect("/rcon_ws").await?;

	send_json(&mut socket, json!({
		"request_type": "connect",
		"request": { "address": "127.0.0.1:27015", "password": "hunter2" },
	}))
	.await?;

	for command in ["status", "sv_cheats 1"] {
		send_json(&mut socket, json!({
			"request_type": "command",
			"request": { "command": command },
		}))
		.await?;

		let reply = recv(&mut socket).await?;

		assert_eq!(
			serde_json::from_str::<serde_json::Value>(reply.to_text()?)?,
			json!({ "response_type": "command", "response": { "output": format!("> {command}\n") } }),
		);
	}

	let shutdown = tokio::spawn(server.shutdown());

	assert_matches!(
		recv(&mut socket).await?,
		Message::Close(Some(frame)) if frame.code == CloseCode::Restart
	);

	drop(socket);
	shutdown.await??;

	Ok(())
}

#[tokio::test]
async fn failed_connect_yields_no_responses() -> Result
{
	let server = Server::spawn().await?;
	let mut socket = server.connect("/v1/rcon_ws").await?;

	send_json(&mut socket, json!({
		"request_type": "connect",
		"request": { "address": "127.0.0.1:27015", "password": "wrong" },
	}))
	.await?;

	send_json(&mut socket, json!({
		"request_type": "command",
		"request": { "command": "status" },
	}))
	.await?;

	let shutdown = tokio::spawn(server.shutdown());

	// The first thing we hear back is the server going away.
	assert_matches!(
		recv(&mut socket).await?,
		Message::Close(Some(frame)) if frame.code == CloseCode::Restart
	);

	drop(socket);
	shutdown.await??;

	Ok(())
}

#[tokio::test]
async fn invalid_envelope_closes_connection() -> Result
{
	let server = Server::spawn().await?;
	let mut socket = server.connect("/rcon_ws").await?;

	socket.send(Message::text("{not json")).await?;

	assert_matches!(
		recv(&mut socket).await?,
		Message::Close(Some(frame)) if frame.code == CloseCode::Invalid
	);

	drop(socket);
	server.shutdown().await?;

	Ok(())
}
