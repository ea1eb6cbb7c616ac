#![cfg(all(feature = "reqwest", feature = "test"))]

// crates.io
use httpmock::prelude::*;
// self
use hod_client::{
	_preludet::*,
	auth::{EntityType, TokenKind},
	error::InvalidTokenError,
	params::QueryProfileParams,
};

#[tokio::test]
async fn combined_get_sends_token_header_and_repeated_origins() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/2/authenticate/combined")
				.query_param("allowed_origins", "https://example.com")
				.query_param("allowed_origins", "http://other.example.com")
				.header("token", "UNB:HMAC_SHA1:my-token-id::p2-F40KgkBYr4dSBpkDeHulZyRw");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"applications\":[],\"users\":[]}");
		})
		.await;
	let request = client
		.authentication()
		.combined_get_request(
			["https://example.com", "http://other.example.com"],
			&fixture_token(TokenKind::HmacSha1),
		)
		.expect("Combined GET should build.");
	let body = client
		.execute_json::<serde_json::Value>(request)
		.await
		.expect("Combined GET should succeed.");

	mock.assert_async().await;

	assert_eq!(body["applications"], serde_json::json!([]));
}

#[tokio::test]
async fn query_profile_create_posts_form_body() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/2/api/sync/queryprofile/search-profile/v1")
				.header("content-type", "application/x-www-form-urlencoded")
				.header_exists("token")
				.body("query_manipulation_index=MY-DOMAIN%3Aqmi&promotions_enabled=true");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"message\":\"created\",\"query_profile\":\"search-profile\"}");
		})
		.await;
	let token = live_token(EntityType::Combined, TokenKind::HmacSha1);
	let params = QueryProfileParams::builder().promotions_enabled(true).build();
	let response = client
		.create_query_profile(&token, "search-profile", "MY-DOMAIN:qmi", &params)
		.await
		.expect("Query profile creation should succeed.");

	mock.assert_async().await;

	assert_eq!(response.message, "created");
	assert_eq!(response.query_profile, "search-profile");
}

#[tokio::test]
async fn error_statuses_surface_service_reason() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/2/api/sync/queryprofile/missing/v1");
			then.status(404)
				.header("content-type", "application/json")
				.body("{\"error\":4004,\"reason\":\"Query profile not found\"}");
		})
		.await;
	let token = live_token(EntityType::Combined, TokenKind::Simple);
	let err = client
		.delete_query_profile(&token, "missing")
		.await
		.expect_err("Missing profile should fail.");

	mock.assert_async().await;

	assert!(matches!(
		err,
		Error::Api { status: 404, ref reason } if reason == "Query profile not found"
	));
}

#[tokio::test]
async fn malformed_json_reports_decode_error() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());

	server
		.mock_async(|when, then| {
			when.method(PUT).path("/2/api/sync/queryprofile/p/v1");
			then.status(200).header("content-type", "application/json").body("{\"message\":1}");
		})
		.await;

	let token = live_token(EntityType::Combined, TokenKind::HmacSha1);
	let err = client
		.update_query_profile(&token, "p", "qmi", &QueryProfileParams::default())
		.await
		.expect_err("Mistyped payload should fail.");

	assert!(matches!(err, Error::Decode { status: Some(200), .. }));
}

#[tokio::test]
async fn expired_tokens_are_rejected_before_dispatch() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let err = client
		.delete_query_profile(&fixture_token(TokenKind::HmacSha1), "any")
		.await
		.expect_err("Expired token should be rejected.");

	assert!(matches!(err, Error::InvalidToken(InvalidTokenError::Expired { .. })));
}
