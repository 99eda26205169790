use axum::Router;
use axum::body::Body;
use axum::response::Response;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tower::ServiceExt;

use super::RconService;
use crate::rcon::mock::MockClient;
use crate::testing;

fn router(client: MockClient) -> Router
{
	Router::from(RconService::new(client, CancellationToken::new(), TaskTracker::new()))
}

fn request_body() -> String
{
	json!({
		"rcon_request": {
			"address": "127.0.0.1:27015",
			"password": "hunter2",
			"command": "status",
		},
	})
	.to_string()
}

async fn post(
	router: Router,
	uri: &str,
	content_type: Option<&str>,
	body: String,
) -> testing::Result<Response>
{
	let mut request = http::Request::post(uri);

	if let Some(content_type) = content_type {
		request = request.header(http::header::CONTENT_TYPE, content_type);
	}

	Ok(router.oneshot(request.body(Body::from(body))?).await?)
}

#[tokio::test]
async fn execute_works() -> testing::Result
{
	let client = MockClient::new().with_output("hostname: KZ\n");
	let response =
		post(router(client.clone()), "/rcon", Some("application/json"), request_body()).await?;

	assert_eq!(response.status(), http::StatusCode::OK);
	assert_eq!(
		response.headers().get(http::header::CONTENT_TYPE),
		Some(&http::HeaderValue::from_static("application/json")),
	);
	assert_eq!(
		testing::collect_json(response).await?,
		json!({ "rcon_response": { "output": "hostname: KZ\n" } }),
	);

	assert_eq!(client.connections(), [(String::from("127.0.0.1:27015"), String::from("hunter2"))]);
	assert_eq!(client.executed(), ["status"]);
	assert_eq!(client.closes(), 1);

	Ok(())
}

#[tokio::test]
async fn versioned_route_works() -> testing::Result
{
	let response =
		post(router(MockClient::new()), "/v1/rcon", Some("application/json"), request_body())
			.await?;

	assert_eq!(response.status(), http::StatusCode::OK);
	assert_eq!(
		testing::collect_json(response).await?,
		json!({ "rcon_response": { "output": "status" } }),
	);

	Ok(())
}

#[tokio::test]
async fn wrong_content_type_is_not_acceptable() -> testing::Result
{
	let client = MockClient::new();
	let response = post(router(client.clone()), "/rcon", Some("text/plain"), request_body()).await?;

	assert_eq!(response.status(), http::StatusCode::NOT_ACCEPTABLE);
	assert_eq!(
		testing::collect_body(response).await?,
		"Invalid Content-Type, only application/json allowed.",
	);
	assert_eq!(client.dials(), 0);

	Ok(())
}

#[tokio::test]
async fn missing_content_type_is_not_acceptable() -> testing::Result
{
	let response = post(router(MockClient::new()), "/rcon", None, request_body()).await?;

	assert_eq!(response.status(), http::StatusCode::NOT_ACCEPTABLE);

	Ok(())
}

#[tokio::test]
async fn malformed_body_is_bad_request() -> testing::Result
{
	let client = MockClient::new();

	for body in ["{", r#"{"rcon_request":"status"}"#, r#"{"rcon_request":{"address":27015}}"#] {
		let response =
			post(router(client.clone()), "/rcon", Some("application/json"), body.to_owned())
				.await?;

		assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
		assert_eq!(
			testing::collect_body(response).await?,
			"Invalid Request, unable to parse request body.",
		);
	}

	assert_eq!(client.dials(), 0);

	Ok(())
}

#[tokio::test]
async fn missing_fields_are_empty() -> testing::Result
{
	let client = MockClient::new();
	let body = json!({ "rcon_request": { "address": "127.0.0.1:27015", "command": "status" } });
	let response =
		post(router(client.clone()), "/rcon", Some("application/json"), body.to_string()).await?;

	assert_eq!(response.status(), http::StatusCode::OK);
	assert_eq!(client.connections(), [(String::from("127.0.0.1:27015"), String::new())]);
	assert_eq!(client.executed(), ["status"]);

	Ok(())
}

#[tokio::test]
async fn failed_dial_is_internal_error() -> testing::Result
{
	let client = MockClient::new().failing_connect();
	let response =
		post(router(client.clone()), "/rcon", Some("application/json"), request_body()).await?;

	assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(testing::collect_body(response).await?, "Internal Error, command failed.");
	assert_eq!(client.dials(), 1);

	Ok(())
}

#[tokio::test]
async fn failed_command_is_internal_error() -> testing::Result
{
	let client = MockClient::new().failing_execute();
	let response =
		post(router(client.clone()), "/rcon", Some("application/json"), request_body()).await?;

	assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(testing::collect_body(response).await?, "Internal Error, command failed.");
	assert_eq!(client.closes(), 1);

	Ok(())
}

#[tokio::test]
async fn get_is_not_allowed() -> testing::Result
{
	let request = http::Request::get("/rcon").body(Body::empty())?;
	let response = router(MockClient::new()).oneshot(request).await?;

	assert_eq!(response.status(), http::StatusCode::METHOD_NOT_ALLOWED);

	Ok(())
}

#[tokio::test]
async fn websocket_route_requires_upgrade() -> testing::Result
{
	let request = http::Request::get("/rcon_ws").body(Body::empty())?;
	let response = router(MockClient::new()).oneshot(request).await?;

	assert!(response.status().is_client_error());

	Ok(())
}
