//! OS signal handling.

use std::error::Error;
use std::io;

use tokio::select;
use tokio::signal::ctrl_c;

/// Resolves once the OS asks us to shut down.
///
/// Listens for SIGINT everywhere, and additionally for SIGTERM on unix. If we fail to install
/// a signal listener, that listener is ignored and we keep waiting on the other one.
#[tracing::instrument(level = "debug")]
pub(crate) async fn shutdown()
{
	select! {
		() = wait_for("SIGINT", async { ctrl_c().await.map(Some) }) => {},
		() = wait_for("SIGTERM", terminate()) => {},
	}
}

/// Waits for `listener` to fire and logs the outcome.
///
/// Waits forever if the listener failed, so the other branch of [`shutdown()`] can still fire.
async fn wait_for(signal: &'static str, listener: impl Future<Output = io::Result<Option<()>>>)
{
	match listener.await {
		Ok(Some(())) => tracing::info!(signal, "received shutdown signal"),
		Ok(None) => {
			tracing::warn!(signal, "cannot receive more signals");
			std::future::pending::<()>().await;
		}
		Err(error) => {
			tracing::error!(signal, error = &error as &dyn Error, "failed to listen for signal");
			std::future::pending::<()>().await;
		}
	}
}

#[cfg(unix)]
async fn terminate() -> io::Result<Option<()>>
{
	use tokio::signal::unix::{SignalKind, signal};

	Ok(signal(SignalKind::terminate())?.recv().await)
}

#[cfg(not(unix))]
async fn terminate() -> io::Result<Option<()>>
{
	std::future::pending().await
}
