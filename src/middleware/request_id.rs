//! Request IDs.
//!
//! Every request is tagged with a UUIDv7 in the `x-request-id` header, which is echoed back in
//! the response and recorded on the request's tracing span.

use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use uuid::Uuid;

/// Returns the layers that set and propagate the `x-request-id` header.
///
/// Incoming requests that already carry an ID keep it.
pub(crate) fn layers() -> (SetRequestIdLayer<MakeUuidv7RequestId>, PropagateRequestIdLayer)
{
	(SetRequestIdLayer::x_request_id(MakeUuidv7RequestId), PropagateRequestIdLayer::x_request_id())
}

/// Generates time-ordered request IDs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MakeUuidv7RequestId;

impl MakeRequestId for MakeUuidv7RequestId
{
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId>
	{
		let id = Uuid::now_v7().hyphenated().to_string();

		http::HeaderValue::try_from(id)
			.inspect_err(|error| tracing::warn!(%error, "generated invalid request id"))
			.map(RequestId::new)
			.ok()
	}
}
