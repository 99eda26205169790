//! HTTP handlers for this service.

use std::error::Error;

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::Response;
use axum::{Router, routing};

use super::websocket::Session;
use super::{ExecuteRequest, ExecuteResponse, RconService};
use crate::http::Json;
use crate::rcon::RconClient;
use crate::runtime;

impl<C> From<RconService<C>> for Router
where
	C: RconClient,
{
	fn from(svc: RconService<C>) -> Self
	{
		Router::new()
			.route("/rcon", routing::post(execute::<C>))
			.route("/v1/rcon", routing::post(execute::<C>))
			.route("/rcon_ws", routing::get(websocket::<C>))
			.route("/v1/rcon_ws", routing::get(websocket::<C>))
			.with_state(svc)
	}
}

#[tracing::instrument(skip(svc), err(Debug, level = "debug"))]
async fn execute<C>(
	State(svc): State<RconService<C>>,
	Json(ExecuteRequest { rcon_request }): Json<ExecuteRequest>,
) -> runtime::Result<Json<ExecuteResponse>>
where
	C: RconClient,
{
	let rcon_response = svc.execute(rcon_request).await?;

	Ok(Json(ExecuteResponse { rcon_response }))
}

#[tracing::instrument(skip_all)]
async fn websocket<C>(State(svc): State<RconService<C>>, upgrade: WebSocketUpgrade) -> Response
where
	C: RconClient,
{
	upgrade
		.on_failed_upgrade(|error| {
			tracing::warn!(error = &error as &dyn Error, "failed to upgrade connection");
		})
		.on_upgrade(move |socket| async move {
			let session = Session::new(socket, svc.client, svc.cancellation_token.child_token());

			svc.task_tracker.track_future(session.serve()).await;
		})
}
