//! Demonstrates plugging a custom transport into [`HodClient`] without reqwest.
//!
//! The transport answers every request with a canned document and prints what it would have
//! sent, which is how request building can be inspected offline.

// crates.io
use color_eyre::Result;
use time::{Duration, OffsetDateTime};
// self
use hod_client::{
	auth::{AuthenticationToken, EntityType, TokenKind},
	client::HodClient,
	config::ServiceConfig,
	http::{HodHttpClient, TOKEN_HEADER, TransportFuture, TransportResponse},
	params::{QueryTextIndexParams, Summary},
	request::SignedRequest,
};

#[derive(Debug)]
struct EchoTransport;
impl HodHttpClient for EchoTransport {
	fn execute(&self, request: SignedRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			println!("{} {}", request.verb(), request.url());
			println!("{TOKEN_HEADER}: {}", request.token());

			Ok(TransportResponse {
				status: 200,
				retry_after: None,
				body: b"{\"documents\":[],\"totalhits\":0}".to_vec(),
			})
		})
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let client = HodClient::with_http_client(ServiceConfig::default(), EchoTransport);
	let now = OffsetDateTime::now_utc();
	let token = AuthenticationToken::new(
		EntityType::Application,
		TokenKind::HmacSha1,
		now,
		"demo-token-id",
		"demo-token-secret",
		now + Duration::minutes(30),
	)?;
	let params = QueryTextIndexParams::builder()
		.summary(Summary::Context)
		.max_date_days(7)
		.total_results(true)
		.build();
	let response = client
		.call_json::<serde_json::Value, _>(&token, |client| {
			client.text_index().query_text_index("haven", ["wiki_eng"], &params, &token)
		})
		.await?;

	println!("Total hits: {}.", response["totalhits"]);

	Ok(())
}
