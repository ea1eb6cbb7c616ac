//! Demonstrates creating and deleting a query profile through the default reqwest transport,
//! with a local mock server standing in for the service.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use time::{Duration, OffsetDateTime};
// self
use hod_client::{
	auth::{AuthenticationToken, EntityType, TokenKind},
	client::HodClient,
	config::ServiceConfig,
	params::QueryProfileParams,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/2/api/sync/queryprofile/search-profile/v1")
				.header_exists("token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"message\":\"query profile created\",\"query_profile\":\"search-profile\"}");
		})
		.await;
	let delete_mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/2/api/sync/queryprofile/search-profile/v1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"message\":\"query profile deleted\",\"query_profile\":\"search-profile\"}");
		})
		.await;
	let config =
		ServiceConfig::builder().endpoint_str(&server.base_url())?.allow_http(true).build()?;
	let client = HodClient::new(config);
	let now = OffsetDateTime::now_utc();
	let token = AuthenticationToken::new(
		EntityType::Combined,
		TokenKind::HmacSha1,
		now,
		"demo-token-id",
		"demo-token-secret",
		now + Duration::hours(1),
	)?;
	let params = QueryProfileParams::builder()
		.description("Demo profile")
		.promotions_enabled(true)
		.promotion_categories(["Seasonal"])
		.build();
	let created = client
		.create_query_profile(&token, "search-profile", "DEMO-DOMAIN:qmi", &params)
		.await?;

	println!("{}: {}.", created.query_profile, created.message);

	let deleted = client.delete_query_profile(&token, "search-profile").await?;

	println!("{}: {}.", deleted.query_profile, deleted.message);

	create_mock.assert_async().await;
	delete_mock.assert_async().await;

	Ok(())
}
