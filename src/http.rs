//! Transport primitives for dispatching signed requests.
//!
//! [`HodHttpClient`] is the client's only dependency on an HTTP stack. It receives a fully
//! built [`SignedRequest`] by value and answers with the raw [`TransportResponse`]; status
//! mapping and JSON decoding stay in [`crate::client`]. Implementations must send the composite
//! token in the [`TOKEN_HEADER`] header and must not alter the URL or body.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::{
	Method,
	header::{HeaderMap, RETRY_AFTER},
};
#[cfg(feature = "reqwest")] use time::format_description::well_known::Rfc2822;
// self
#[cfg(feature = "reqwest")] use crate::request::Verb;
use crate::{_prelude::*, error::TransportError, request::SignedRequest};

/// Header carrying the composite token string.
pub const TOKEN_HEADER: &str = "token";

/// Boxed future returned by [`HodHttpClient::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing signed requests.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can back many
/// [`crate::client::HodClient`] handles, and the returned future must be `Send`.
pub trait HodHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` exactly as built and collects the response.
	fn execute(&self, request: SignedRequest) -> TransportFuture<'_>;
}
impl<T> HodHttpClient for Arc<T>
where
	T: HodHttpClient,
{
	fn execute(&self, request: SignedRequest) -> TransportFuture<'_> {
		(**self).execute(request)
	}
}

/// Raw response captured by a transport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl TransportResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HodHttpClient for ReqwestHttpClient {
	fn execute(&self, request: SignedRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client
				.request(method(request.verb()), request.url().clone())
				.header(TOKEN_HEADER, request.token());

			for (name, value) in request.headers() {
				builder = builder.header(name.as_str(), value.as_str());
			}
			if let Some(body) = request.body() {
				builder = builder.body(body.to_vec());
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let retry_after = parse_retry_after(response.headers());
			let body = response.bytes().await?.to_vec();

			Ok(TransportResponse { status, retry_after, body })
		})
	}
}

#[cfg(feature = "reqwest")]
fn method(verb: Verb) -> Method {
	match verb {
		Verb::Get => Method::GET,
		Verb::Post => Method::POST,
		Verb::Patch => Method::PATCH,
		Verb::Put => Method::PUT,
		Verb::Delete => Method::DELETE,
	}
}

#[cfg(feature = "reqwest")]
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(secs as i64));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// crates.io
	use reqwest::header::HeaderValue;
	// self
	use super::*;

	#[test]
	fn retry_after_accepts_seconds_and_ignores_garbage() {
		let mut headers = HeaderMap::new();

		assert_eq!(parse_retry_after(&headers), None);

		headers.insert(RETRY_AFTER, HeaderValue::from_static("30"));

		assert_eq!(parse_retry_after(&headers), Some(Duration::seconds(30)));

		headers.insert(RETRY_AFTER, HeaderValue::from_static("soon"));

		assert_eq!(parse_retry_after(&headers), None);
	}

	#[test]
	fn verbs_map_to_methods() {
		assert_eq!(method(Verb::Patch), Method::PATCH);
		assert_eq!(method(Verb::Delete), Method::DELETE);
	}
}
