//! Client facade binding a [`ServiceConfig`] to a transport.
//!
//! [`HodClient`] is the only async surface of the crate. It checks token expiry, builds
//! requests through the services, dispatches them via [`HodHttpClient`], maps non-success
//! statuses to [`Error::Api`], and decodes JSON bodies with path-aware diagnostics.

// crates.io
use serde::de::DeserializeOwned;
// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use crate::{
	_prelude::*,
	auth::AuthenticationToken,
	config::ServiceConfig,
	http::{HodHttpClient, TransportResponse},
	obs::{self, RequestOutcome, RequestSpan, RequestStage},
	params::QueryProfileParams,
	request::SignedRequest,
	service::{
		AuthenticationService, QueryProfileService, QueryProfileStatusResponse, TextIndexService,
	},
};

/// Async client over a pluggable transport.
#[derive(Clone, Debug)]
pub struct HodClient<C>
where
	C: HodHttpClient,
{
	config: ServiceConfig,
	http_client: C,
}
impl<C> HodClient<C>
where
	C: HodHttpClient,
{
	/// Binds `config` to a transport.
	pub fn with_http_client(config: ServiceConfig, http_client: C) -> Self {
		Self { config, http_client }
	}

	/// Service configuration.
	pub fn config(&self) -> &ServiceConfig {
		&self.config
	}

	/// Underlying transport.
	pub fn http_client(&self) -> &C {
		&self.http_client
	}

	/// Authentication request builders bound to this client's endpoint.
	pub fn authentication(&self) -> AuthenticationService {
		AuthenticationService::new(&self.config)
	}

	/// Query-profile request builders bound to this client's endpoint.
	pub fn query_profiles(&self) -> QueryProfileService {
		QueryProfileService::new(&self.config)
	}

	/// Text-index request builders bound to this client's endpoint.
	pub fn text_index(&self) -> TextIndexService {
		TextIndexService::new(&self.config)
	}

	/// Dispatches a built request and returns the raw successful response.
	///
	/// Non-2xx statuses become [`Error::Api`]; the reason is taken from the JSON `reason` or
	/// `message` field when present, otherwise from the body text.
	pub async fn execute(&self, request: SignedRequest) -> Result<TransportResponse> {
		let verb = request.verb();
		let span = RequestSpan::new(RequestStage::Dispatch, verb, request.path());

		obs::record_request_outcome(RequestStage::Dispatch, verb, RequestOutcome::Attempt);

		let result = span
			.instrument(async {
				let response = self.http_client.execute(request).await?;

				span.record_status(response.status);

				if response.is_success() {
					Ok(response)
				} else {
					Err(api_error(&response))
				}
			})
			.await;
		let outcome =
			if result.is_ok() { RequestOutcome::Success } else { RequestOutcome::Failure };

		obs::record_request_outcome(RequestStage::Dispatch, verb, outcome);

		result
	}

	/// Dispatches a built request and decodes the JSON body into `T`.
	pub async fn execute_json<T>(&self, request: SignedRequest) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let response = self.execute(request).await?;

		decode_json(&response)
	}

	/// Checks `token` against the current clock, builds a request with `build`, and decodes the
	/// JSON response.
	pub async fn call_json<T, F>(&self, token: &AuthenticationToken, build: F) -> Result<T>
	where
		T: DeserializeOwned,
		F: FnOnce(&Self) -> Result<SignedRequest>,
	{
		token.ensure_unexpired_at(OffsetDateTime::now_utc())?;

		self.execute_json(build(self)?).await
	}

	/// Creates a query profile.
	pub async fn create_query_profile(
		&self,
		token: &AuthenticationToken,
		name: &str,
		query_manipulation_index: &str,
		params: &QueryProfileParams,
	) -> Result<QueryProfileStatusResponse> {
		self.call_json(token, |client| {
			client.query_profiles().create(name, query_manipulation_index, params, token)
		})
		.await
	}

	/// Replaces a query profile's configuration.
	pub async fn update_query_profile(
		&self,
		token: &AuthenticationToken,
		name: &str,
		query_manipulation_index: &str,
		params: &QueryProfileParams,
	) -> Result<QueryProfileStatusResponse> {
		self.call_json(token, |client| {
			client.query_profiles().update(name, query_manipulation_index, params, token)
		})
		.await
	}

	/// Deletes a query profile.
	pub async fn delete_query_profile(
		&self,
		token: &AuthenticationToken,
		name: &str,
	) -> Result<QueryProfileStatusResponse> {
		self.call_json(token, |client| client.query_profiles().delete(name, token)).await
	}
}
#[cfg(feature = "reqwest")]
impl HodClient<ReqwestHttpClient> {
	/// Builds a client over a default reqwest transport.
	pub fn new(config: ServiceConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}
}

fn decode_json<T>(response: &TransportResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut de)
		.map_err(|source| Error::Decode { source, status: Some(response.status) })
}

fn api_error(response: &TransportResponse) -> Error {
	#[derive(Deserialize)]
	struct ErrorDocument {
		reason: Option<String>,
		message: Option<String>,
	}

	let reason = serde_json::from_slice::<ErrorDocument>(&response.body)
		.ok()
		.and_then(|doc| doc.reason.or(doc.message))
		.unwrap_or_else(|| String::from_utf8_lossy(&response.body).trim().to_owned());

	Error::Api { status: response.status, reason }
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(status: u16, body: &str) -> TransportResponse {
		TransportResponse { status, retry_after: None, body: body.as_bytes().to_vec() }
	}

	#[test]
	fn api_errors_prefer_reason_fields() {
		assert!(matches!(
			api_error(&response(401, r#"{"error":4010,"reason":"Invalid token"}"#)),
			Error::Api { status: 401, reason } if reason == "Invalid token"
		));
		assert!(matches!(
			api_error(&response(500, " upstream down \n")),
			Error::Api { status: 500, reason } if reason == "upstream down"
		));
	}

	#[test]
	fn decode_errors_carry_path_and_status() {
		let err = decode_json::<QueryProfileStatusResponse>(&response(
			200,
			r#"{"message":"ok","query_profile":7}"#,
		))
		.expect_err("Mistyped field should fail.");

		match err {
			Error::Decode { source, status } => {
				assert_eq!(status, Some(200));
				assert_eq!(source.path().to_string(), "query_profile");
			},
			other => panic!("Unexpected error: {other:?}"),
		}
	}
}
