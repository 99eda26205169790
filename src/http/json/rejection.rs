//! Rejections for the [`Json`] extractor.
//!
//! [`Json`]: super::Json

use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Reasons a request body could not be extracted as JSON.
#[derive(Debug, Error)]
pub(crate) enum JsonRejection
{
	/// The request did not declare a JSON `Content-Type`.
	#[error("missing or invalid `Content-Type` header")]
	MissingContentType,

	/// We could not buffer the request body.
	#[error(transparent)]
	BufferBody(#[from] BytesRejection),

	/// The body was not valid JSON of the expected shape.
	#[error("failed to deserialize request body: {0}")]
	Deserialize(#[source] serde_json::Error),
}

impl IntoResponse for JsonRejection
{
	fn into_response(self) -> Response
	{
		match self {
			Self::MissingContentType => (
				StatusCode::NOT_ACCEPTABLE,
				"Invalid Content-Type, only application/json allowed.",
			)
				.into_response(),
			Self::BufferBody(rejection) => rejection.into_response(),
			Self::Deserialize(_) => (
				StatusCode::BAD_REQUEST,
				"Invalid Request, unable to parse request body.",
			)
				.into_response(),
		}
	}
}
