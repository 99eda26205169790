//! Custom global panic hook to log runtime panics.
//!
//! See [`std::panic::set_hook()`] for more details.

use std::backtrace::Backtrace;
use std::{panic, thread};

/// Installs the gateway's custom global panic hook.
///
/// Panics are logged with a backtrace before the previously installed hook runs.
pub fn install()
{
	let old_hook = panic::take_hook();

	panic::set_hook(Box::new(move |info| {
		let backtrace = Backtrace::force_capture();
		let current_thread = thread::current();

		tracing::error! {
			target: "rcon_web_api::audit_log",
			thread = current_thread.name().unwrap_or("<unnamed>"),
			location = ?info.location(),
			"{info}\n---\nbacktrace:\n{backtrace}",
		};

		old_hook(info)
	}));
}
