//! Request tracing.
//!
//! Every request gets its own `request` span carrying the request ID, method, URI and peer
//! address. The response status is recorded on the same span once it is known.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::extract::ConnectInfo;
use http::{Request, Response};
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::RequestId;
use tower_http::trace::{
	DefaultOnBodyChunk,
	DefaultOnEos,
	HttpMakeClassifier,
	MakeSpan,
	OnFailure,
	OnRequest,
	OnResponse,
	TraceLayer,
};

/// Creates the tracing layer.
pub(crate) fn layer() -> TraceLayer<
	HttpMakeClassifier,
	impl MakeSpan<Body> + Clone,
	impl OnRequest<Body> + Clone,
	impl OnResponse<Body> + Clone,
	DefaultOnBodyChunk,
	DefaultOnEos,
	impl OnFailure<ServerErrorsFailureClass> + Clone,
>
{
	TraceLayer::new_for_http()
		.make_span_with(make_span::<Body>)
		.on_request(on_request::<Body>)
		.on_response(on_response::<Body>)
		.on_failure(on_failure)
}

fn make_span<B>(req: &Request<B>) -> tracing::Span
{
	let span = tracing::info_span!(
		target: "rcon_web_api::http",
		"request",
		req.id = tracing::field::Empty,
		req.method = %req.method(),
		req.uri = %req.uri(),
		req.addr = tracing::field::Empty,
		res.status = tracing::field::Empty,
	);

	if let Some(request_id) = req.extensions().get::<RequestId>() {
		span.record("req.id", tracing::field::debug(request_id.header_value()));
	}

	if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
		span.record("req.addr", tracing::field::display(addr));
	}

	span
}

fn on_request<B>(_req: &Request<B>, _span: &tracing::Span)
{
	tracing::debug!(target: "rcon_web_api::http", "starting to process request");
}

fn on_response<B>(res: &Response<B>, latency: Duration, span: &tracing::Span)
{
	span.record("res.status", res.status().as_u16());

	tracing::info!(target: "rcon_web_api::http", ?latency, "finished processing request");
}

fn on_failure(failure_class: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span)
{
	match failure_class {
		ServerErrorsFailureClass::StatusCode(status) => {
			tracing::error!(
				target: "rcon_web_api::http",
				status = status.as_u16(),
				?latency,
				"failed to handle request",
			);
		}
		ServerErrorsFailureClass::Error(error) => {
			tracing::error!(
				target: "rcon_web_api::http",
				%error,
				?latency,
				"failed to handle request",
			);
		}
	}
}
