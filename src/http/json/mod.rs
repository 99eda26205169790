//! A JSON extractor and response type.
//!
//! Unlike [`axum::Json`], requests whose `Content-Type` is not exactly `application/json` are
//! rejected with `406 Not Acceptable`, and bodies that fail to deserialize with
//! `400 Bad Request`. Both rejections carry a plain-text body.

use std::fmt;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use headers::HeaderMapExt;
use serde::{Deserialize, Serialize};

use crate::runtime;

mod rejection;
pub(crate) use rejection::JsonRejection;

/// JSON request / response body.
#[derive(Debug)]
pub(crate) struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T>
{
	fn into_response(self) -> Response
	{
		let body = match serde_json::to_vec(&self.0) {
			Ok(body) => body,
			Err(error) => return runtime::Error::encode_response(error).into_response(),
		};

		let mut response = Response::new(body.into());
		response.headers_mut().typed_insert(headers::ContentType::json());
		response
	}
}

impl<T, S> FromRequest<S> for Json<T>
where
	T: for<'de> Deserialize<'de> + fmt::Debug,
	S: Send + Sync,
{
	type Rejection = JsonRejection;

	#[tracing::instrument(level = "debug", skip_all, ret(level = "debug"), err(level = "debug"))]
	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		if !has_json_content_type(req.headers()) {
			return Err(JsonRejection::MissingContentType);
		}

		let body = Bytes::from_request(req, state).await?;

		serde_json::from_slice(&body[..])
			.map(Self)
			.map_err(JsonRejection::Deserialize)
	}
}

#[tracing::instrument(level = "trace", ret(level = "trace"))]
fn has_json_content_type(headers: &http::HeaderMap) -> bool
{
	let Some(content_type) = headers.get(http::header::CONTENT_TYPE) else {
		tracing::debug!("request headers do not contain a `Content-Type` header");
		return false;
	};

	let Ok(content_type) = content_type.to_str() else {
		tracing::debug!("request headers contain a `Content-Type` header, but it's not UTF-8");
		return false;
	};

	if content_type != mime::APPLICATION_JSON.essence_str() {
		tracing::debug!(content_type, "request `Content-Type` is not exactly `application/json`");
		return false;
	}

	true
}
