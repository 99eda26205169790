//! rcon-web-api - an HTTP and WebSocket gateway for game server RCON.
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::error::Error;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use rcon_web_api::rcon::Target;
use rcon_web_api::runtime::{self, Config};

mod logging;

/// The main entrypoint for the gateway.
#[tokio::main]
async fn main() -> color_eyre::Result<()>
{
	color_eyre::install()?;

	// Loaded before parsing arguments so the file can fill in `env` values.
	let dotenv = dotenvy::dotenv();
	let args = Args::parse();

	logging::init(args.log_format).wrap_err("initialize logging")?;
	runtime::panic_hook::install();

	match dotenv {
		Ok(path) => tracing::debug!(path = %path.display(), "loaded `.env` file"),
		Err(error) if error.not_found() => tracing::debug!("no `.env` file found"),
		Err(error) => tracing::warn!(error = &error as &dyn Error, "failed to load `.env` file"),
	}

	let config = args.into_config();

	tracing::debug!(?config, "loaded configuration");

	rcon_web_api::run(config).await.wrap_err("run gateway")?;

	Ok(())
}

/// HTTP and WebSocket gateway for game server RCON.
#[derive(Parser)]
#[command(version, about)]
struct Args
{
	/// The address to listen on.
	#[arg(long, env = "RCON_WEB_API_HOST", default_value = "127.0.0.1:8099")]
	host: String,

	/// The game server queried by `GET /v1/state/status`.
	///
	/// The endpoint is not served if this is omitted.
	#[arg(long, env = "RCON_WEB_API_RCON_ADDRESS")]
	rcon_address: Option<String>,

	/// The RCON password for `--rcon-address`.
	#[arg(long, env = "RCON_WEB_API_RCON_PASSWORD", default_value = "", hide_env_values = true)]
	rcon_password: String,

	/// How log output is formatted.
	#[arg(long, value_enum, default_value_t)]
	log_format: logging::LogFormat,
}

impl Args
{
	fn into_config(self) -> Config
	{
		let status_target = self
			.rcon_address
			.map(|address| Target { address, password: self.rcon_password });

		Config::new(self.host, status_target)
	}
}
