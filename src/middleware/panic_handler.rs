//! A middleware for catching panics.
//!
//! Normally, if an HTTP handler panics, the connection will simply be closed.
//! This middleware will catch panics and return a proper HTTP response.

use std::any::Any;

use axum::response::IntoResponse;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::runtime;

/// Creates a middleware layer for catching panics and turning them into
/// `500 Internal Server Error` responses.
pub(crate) fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

/// A custom panic handler for [`CatchPanicLayer`].
#[derive(Debug, Clone)]
pub(crate) struct PanicHandler;

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	fn response_for_panic(
		&mut self,
		_payload: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		// The panic hook already logged the payload and a backtrace.
		runtime::Error::panic().into_response()
	}
}

#[cfg(test)]
mod tests
{
	use axum::body::Body;
	use axum::{Router, routing};
	use tower::ServiceExt;

	use super::*;
	use crate::testing;

	#[tokio::test]
	async fn panics_become_500() -> testing::Result
	{
		async fn whoops() -> &'static str
		{
			panic!("whoops")
		}

		let router = Router::new()
			.route("/", routing::get(whoops))
			.layer(layer());

		let request = http::Request::get("/").body(Body::empty())?;
		let response = router.oneshot(request).await?;

		assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

		Ok(())
	}
}
