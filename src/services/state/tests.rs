use assert_matches::assert_matches;
use axum::Router;
use axum::body::Body;
use axum::response::Response;
use serde_json::json;
use tower::ServiceExt;

use super::{FetchStatusError, StateService};
use crate::rcon::mock::MockClient;
use crate::rcon::{RconError, Target};
use crate::testing;

const STATUS: &str = "hostname: Alpha's KZ\n\
	version : 1.40.2.1/14021 10064/8853 secure  [G:1:4132457]\n\
	udp/ip  : 0.0.0.0:27015  (public ip: 203.0.113.7)\n\
	os      :  Linux\n\
	type    :  community dedicated\n\
	map     : kz_grotto\n\
	players : 1 humans, 1 bots (16/0 max) (not hibernating)\n\
	\n\
	# userid name uniqueid connected ping loss state rate adr\n\
	# 2 BOT kzbot BOT 00:00 0 0 active 0 loopback\n\
	# 3 4 alice STEAM_1:0:1234 01:23 45 0 active 786432 203.0.113.8:27005\n\
	#end\n";

fn service(client: MockClient) -> StateService<MockClient>
{
	StateService::new(client, Target {
		address: String::from("127.0.0.1:27015"),
		password: String::from("hunter2"),
	})
}

async fn get_status(client: MockClient) -> testing::Result<Response>
{
	let request = http::Request::get("/v1/state/status").body(Body::empty())?;

	Ok(Router::from(service(client)).oneshot(request).await?)
}

#[tokio::test]
async fn status_works() -> testing::Result
{
	let client = MockClient::new().with_output(STATUS);
	let response = get_status(client.clone()).await?;

	assert_eq!(response.status(), http::StatusCode::OK);
	assert_eq!(
		response.headers().get(http::header::CONTENT_TYPE),
		Some(&http::HeaderValue::from_static("application/json")),
	);
	assert_eq!(
		testing::collect_json(response).await?,
		json!({
			"hostname": "Alpha's KZ",
			"version": "1.40.2.1/14021 10064/8853 secure  [G:1:4132457]",
			"map": "kz_grotto",
			"players": {
				"human_players": 1,
				"bot_players": 1,
				"players": [{
					"user_id": "3",
					"name": "alice",
					"unique_id": "STEAM_1:0:1234",
					"time_connected": "01:23",
					"ping": 45,
					"loss": 0,
					"state": "active",
					"rate": "786432",
					"address": "203.0.113.8:27005",
				}],
			},
		}),
	);

	assert_eq!(client.connections(), [(String::from("127.0.0.1:27015"), String::from("hunter2"))]);
	assert_eq!(client.executed(), ["status"]);
	assert_eq!(client.closes(), 1);

	Ok(())
}

#[tokio::test]
async fn malformed_output_yields_empty_body() -> testing::Result
{
	let client = MockClient::new().with_output("Unknown command \"status\"\n");
	let response = get_status(client.clone()).await?;

	assert_eq!(response.status(), http::StatusCode::OK);
	assert_eq!(response.headers().get(http::header::CONTENT_TYPE), None);
	assert_eq!(testing::collect_body(response).await?, "");
	assert_eq!(client.closes(), 1);

	Ok(())
}

#[tokio::test]
async fn failed_dial_yields_empty_body() -> testing::Result
{
	let response = get_status(MockClient::new().failing_connect()).await?;

	assert_eq!(response.status(), http::StatusCode::OK);
	assert_eq!(testing::collect_body(response).await?, "");

	Ok(())
}

#[tokio::test]
async fn fetch_status_reports_the_cause() -> testing::Result
{
	assert_matches!(
		service(MockClient::new().failing_connect()).fetch_status().await,
		Err(FetchStatusError::Rcon(RconError::Connect { .. }))
	);

	assert_matches!(
		service(MockClient::new().with_output("")).fetch_status().await,
		Err(FetchStatusError::Parse(_))
	);

	Ok(())
}

#[tokio::test]
async fn post_is_not_allowed() -> testing::Result
{
	let request = http::Request::post("/v1/state/status").body(Body::empty())?;
	let response = Router::from(service(MockClient::new())).oneshot(request).await?;

	assert_eq!(response.status(), http::StatusCode::METHOD_NOT_ALLOWED);

	Ok(())
}
