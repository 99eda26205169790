//! Logging setup.

use clap::ValueEnum;
use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

/// Used if `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "rcon_web_api=info,srcds=info";

/// Output formats for log lines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormat
{
	/// Multi-line, human readable output.
	#[default]
	Pretty,

	/// Single-line, human readable output.
	Compact,

	/// Newline-delimited JSON.
	Json,
}

/// Installs the global tracing subscriber.
pub(crate) fn init(format: LogFormat) -> color_eyre::Result<()>
{
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

	let subscriber = tracing_subscriber::fmt()
		.with_timer(UtcTime::rfc_3339())
		.with_env_filter(env_filter);

	match format {
		LogFormat::Pretty => subscriber.pretty().try_init(),
		LogFormat::Compact => subscriber.compact().try_init(),
		LogFormat::Json => subscriber.json().try_init(),
	}
	.map_err(|error| eyre!(error))
}
