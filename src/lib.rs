#![doc = include_str!("../README.md")]

/*
 * rcon-web-api - an HTTP and WebSocket gateway for game server RCON.
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

pub mod rcon;
pub mod runtime;
pub mod services;
pub mod setup;

mod http;
mod middleware;
mod signal;

#[cfg(test)]
mod testing;

use self::rcon::{RconClient, TcpRconClient};
use self::runtime::Config;
use self::services::{HealthService, RconService, StateService};

/// Builds the gateway's router.
///
/// `cancellation_token` is cancelled on shutdown, and every WebSocket session is tracked by
/// `task_tracker`.
pub fn router<C>(
	config: &Config,
	client: C,
	cancellation_token: CancellationToken,
	task_tracker: TaskTracker,
) -> Router
where
	C: RconClient,
{
	let health_svc = HealthService::new();
	let rcon_svc = RconService::new(client.clone(), cancellation_token, task_tracker);

	let mut router = Router::new().merge(health_svc).merge(rcon_svc);

	if let Some(target) = config.status_target() {
		router = router.merge(StateService::new(client, target.clone()));
	} else {
		tracing::warn!("no RCON address configured; not serving `/v1/state/status`");
	}

	router
		.layer(middleware::trace::layer())
		.layer(middleware::panic_handler::layer())
		.layer(middleware::request_id::layers())
}

/// Serves the gateway on `listener` until `shutdown` resolves.
///
/// Open WebSocket sessions are told to close once `shutdown` resolves, and this function only
/// returns after all of them have.
pub async fn serve<C>(
	listener: TcpListener,
	config: &Config,
	client: C,
	shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), setup::Error>
where
	C: RconClient,
{
	let cancellation_token = CancellationToken::new();
	let task_tracker = TaskTracker::new();
	let router = router(config, client, cancellation_token.clone(), task_tracker.clone());

	axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
		.with_graceful_shutdown(async move {
			shutdown.await;
			tracing::info!("shutting down");
			cancellation_token.cancel();
		})
		.await
		.map_err(setup::Error::Serve)?;

	task_tracker.close();

	tracing::debug!(sessions = task_tracker.len(), "waiting for websocket sessions to close");

	task_tracker.wait().await;

	Ok(())
}

/// Runs the gateway until the process receives SIGINT or SIGTERM.
pub async fn run(config: Config) -> Result<(), setup::Error>
{
	let listener = TcpListener::bind(config.bind_addr())
		.await
		.map_err(|source| setup::Error::Bind { addr: config.bind_addr().to_owned(), source })?;

	let local_addr = listener.local_addr().map_err(setup::Error::LocalAddr)?;

	tracing::info!(%local_addr, "listening for requests");

	serve(listener, &config, TcpRconClient::new(), signal::shutdown()).await
}
