//! An in-memory [`RconClient`] for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{RconClient, RconError, RconSession};

/// A fake RCON client that records every call made through it.
///
/// Commands are echoed back as their output unless a fixed output was configured.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockClient
{
	state: Arc<State>,
}

#[derive(Debug, Default)]
struct State
{
	fail_connect: AtomicBool,
	fail_execute: AtomicBool,
	output: Mutex<Option<String>>,
	dials: AtomicUsize,
	closes: AtomicUsize,
	connections: Mutex<Vec<(String, String)>>,
	executed: Mutex<Vec<String>>,
}

impl MockClient
{
	pub(crate) fn new() -> Self
	{
		Self::default()
	}

	/// Makes every dial fail.
	pub(crate) fn failing_connect(self) -> Self
	{
		self.state.fail_connect.store(true, Ordering::SeqCst);
		self
	}

	/// Makes every command fail.
	pub(crate) fn failing_execute(self) -> Self
	{
		self.state.fail_execute.store(true, Ordering::SeqCst);
		self
	}

	/// Returns `output` for every command.
	pub(crate) fn with_output(self, output: impl Into<String>) -> Self
	{
		*self.state.output.lock().unwrap() = Some(output.into());
		self
	}

	/// How many times [`connect()`] was called.
	///
	/// [`connect()`]: RconClient::connect
	pub(crate) fn dials(&self) -> usize
	{
		self.state.dials.load(Ordering::SeqCst)
	}

	/// How many sessions were closed.
	pub(crate) fn closes(&self) -> usize
	{
		self.state.closes.load(Ordering::SeqCst)
	}

	/// `(address, password)` of every successful dial.
	pub(crate) fn connections(&self) -> Vec<(String, String)>
	{
		self.state.connections.lock().unwrap().clone()
	}

	/// Every command that was executed, in order.
	pub(crate) fn executed(&self) -> Vec<String>
	{
		self.state.executed.lock().unwrap().clone()
	}
}

impl RconClient for MockClient
{
	type Session = MockSession;

	async fn connect(&self, address: &str, password: &str) -> Result<Self::Session, RconError>
	{
		self.state.dials.fetch_add(1, Ordering::SeqCst);

		if self.state.fail_connect.load(Ordering::SeqCst) {
			return Err(RconError::Connect {
				address: address.to_owned(),
				source: "connection refused".into(),
			});
		}

		self.state
			.connections
			.lock()
			.unwrap()
			.push((address.to_owned(), password.to_owned()));

		Ok(MockSession { state: Arc::clone(&self.state) })
	}
}

#[derive(Debug)]
pub(crate) struct MockSession
{
	state: Arc<State>,
}

impl RconSession for MockSession
{
	async fn execute(&mut self, command: &str) -> Result<String, RconError>
	{
		if self.state.fail_execute.load(Ordering::SeqCst) {
			return Err(RconError::Execute("connection reset".into()));
		}

		self.state.executed.lock().unwrap().push(command.to_owned());

		let output = self.state.output.lock().unwrap().clone();

		Ok(output.unwrap_or_else(|| command.to_owned()))
	}

	async fn close(self)
	{
		self.state.closes.fetch_add(1, Ordering::SeqCst);
	}
}
