//! Helpers for unit tests.

use axum::response::Response;

pub(crate) type Error = color_eyre::Report;
pub(crate) type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Buffers the body of `response` into a string.
pub(crate) async fn collect_body(response: Response) -> Result<String>
{
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

	Ok(String::from_utf8(bytes.to_vec())?)
}

/// Buffers the body of `response` and parses it as JSON.
pub(crate) async fn collect_json(response: Response) -> Result<serde_json::Value>
{
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

	Ok(serde_json::from_slice(&bytes)?)
}
