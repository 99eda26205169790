//! RCON sessions over WebSocket.
//!
//! Each WebSocket connection owns at most one RCON connection. The flow is as follows:
//!
//! 1. The client makes an HTTP GET request to `/rcon_ws` and the connection is upgraded.
//! 2. The client sends a `connect` request with the game server's address and RCON password.
//!    The server dials the game server; nothing is sent back, whether this succeeds or not.
//! 3. The client sends `command` requests. For every command that succeeds, the server replies
//!    with a `command` response carrying the raw output. Failed commands are dropped.
//!
//! Every message is a JSON object with a type tag and a payload:
//!
//! ```json
//! { "request_type": "connect", "request": { "address": "127.0.0.1:27015", "password": "…" } }
//! { "request_type": "command", "request": { "command": "status" } }
//! { "response_type": "command", "response": { "output": "…" } }
//! ```
//!
//! Requests are handled one at a time, in the order they arrive, and responses are sent in the
//! same order. Requests that cannot be handled (unknown types, malformed payloads, `connect`
//! while already connected, `command` before connecting) are logged and ignored. A frame that
//! is not a JSON object of the shape above closes the connection.

mod close_reason;
pub use close_reason::CloseReason;

mod message;
pub use message::{
	CommandRequest,
	CommandResponse,
	ConnectRequest,
	DecodeMessageError,
	EncodeMessageError,
	Envelope,
	RequestType,
	Response,
};

mod session;
pub use session::{ReceiveMessageError, SendMessageError, Session};
