//! HTTP handlers for this service.

use std::error::Error;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};

use super::StateService;
use crate::http::Json;
use crate::rcon::RconClient;

impl<C> From<StateService<C>> for Router
where
	C: RconClient,
{
	fn from(svc: StateService<C>) -> Self
	{
		Router::new()
			.route("/v1/state/status", routing::get(get_status::<C>))
			.with_state(svc)
	}
}

/// Failures are only logged; the client gets an empty `200`.
#[tracing::instrument(skip(svc))]
async fn get_status<C>(State(svc): State<StateService<C>>) -> Response
where
	C: RconClient,
{
	match svc.fetch_status().await {
		Ok(status) => Json(status).into_response(),
		Err(error) => {
			tracing::error!(
				target: "rcon_web_api::audit_log",
				error = &error as &dyn Error,
				"failed to fetch server status",
			);

			http::StatusCode::OK.into_response()
		}
	}
}
