//! HMAC-SHA1 request signing over a canonical request message.
//!
//! The canonical message joins, with `\n`: the upper-case verb, the percent-encoded request
//! path, the query string exactly as sent, the form body exactly as sent, the token id, and
//! (when present) the nonce. Absent query strings and bodies contribute empty lines. Both are
//! `application/x-www-form-urlencoded`, so neither can contain a raw `\n`, and every parameter
//! the service receives is covered by the signature. The HMAC key is the UTF-8 token secret and
//! the digest is encoded URL-safe base64 without padding, so identical inputs always produce the
//! identical 27-character signature.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	auth::{Nonce, TokenId, TokenSecret},
	error::SigningError,
	request::Verb,
};

type HmacSha1 = Hmac<Sha1>;

const MESSAGE_DELIMITER: char = '\n';

/// Wire-level facts of a request that a composite token is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTarget<'a> {
	/// HTTP verb of the request.
	pub verb: Verb,
	/// Percent-encoded path after template substitution, without the query string.
	pub path: &'a str,
	/// Encoded query string without the leading `?`; empty when the URL has none.
	pub query: &'a str,
	/// Encoded form body; empty when the request has none.
	pub body: &'a str,
}
impl<'a> RequestTarget<'a> {
	/// Describes a request without query string or body.
	pub fn new(verb: Verb, path: &'a str) -> Self {
		Self { verb, path, query: "", body: "" }
	}

	/// Sets the encoded query string.
	pub fn with_query(mut self, query: &'a str) -> Self {
		self.query = query;

		self
	}

	/// Sets the encoded form body.
	pub fn with_body(mut self, body: &'a str) -> Self {
		self.body = body;

		self
	}
}

/// Request facts covered by a signature.
#[derive(Clone, Copy, Debug)]
pub struct CanonicalRequest<'a> {
	/// Request the signature is bound to.
	pub target: RequestTarget<'a>,
	/// Identifier of the signing token.
	pub token_id: &'a TokenId,
	/// Nonce signed alongside the request, if any.
	pub nonce: Option<&'a Nonce>,
}
impl<'a> CanonicalRequest<'a> {
	/// Describes a request without a nonce.
	pub fn new(target: RequestTarget<'a>, token_id: &'a TokenId) -> Self {
		Self { target, token_id, nonce: None }
	}

	/// Attaches the nonce that will be signed and transmitted.
	pub fn with_nonce(mut self, nonce: Option<&'a Nonce>) -> Self {
		self.nonce = nonce;

		self
	}

	/// Renders the exact string fed to the HMAC.
	pub fn message(&self) -> String {
		let d = MESSAGE_DELIMITER;
		let Self { target: RequestTarget { verb, path, query, body }, token_id, nonce } = self;
		let message = format!("{verb}{d}{path}{d}{query}{d}{body}{d}{token_id}");

		match nonce {
			Some(nonce) => format!("{message}{d}{nonce}"),
			None => message,
		}
	}

	/// Signs the canonical message with `secret`.
	pub fn sign(&self, secret: &TokenSecret) -> Result<String, SigningError> {
		sign_message(secret, &self.message())
	}
}

/// Computes `base64url_nopad(HMAC-SHA1(secret, message))`.
pub fn sign_message(secret: &TokenSecret, message: &str) -> Result<String, SigningError> {
	let mut mac = HmacSha1::new_from_slice(secret.expose().as_bytes())
		.map_err(|_| SigningError::InvalidKey)?;

	mac.update(message.as_bytes());

	Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const PATH: &str = "/2/authenticate/combined";

	fn token_id() -> TokenId {
		TokenId::new("my-token-id").expect("Token id fixture should be valid.")
	}

	#[test]
	fn hmac_matches_rfc_2202_vectors() {
		let key = TokenSecret::new("Jefe");

		assert_eq!(
			sign_message(&key, "what do ya want for nothing?")
				.expect("RFC 2202 vector should sign."),
			"7_zfauXrL6LSdBbV8YTfnCWafHk"
		);
	}

	#[test]
	fn canonical_message_joins_fields_with_newlines() {
		let id = token_id();
		let nonce = Nonce::from_value("wJkMexQxgEhW13IAeN6i6A").expect("Nonce should be valid.");
		let plain = CanonicalRequest::new(RequestTarget::new(Verb::Get, PATH), &id);

		assert_eq!(plain.message(), "GET\n/2/authenticate/combined\n\n\nmy-token-id");
		assert_eq!(
			plain.with_nonce(Some(&nonce)).message(),
			"GET\n/2/authenticate/combined\n\n\nmy-token-id\nwJkMexQxgEhW13IAeN6i6A"
		);

		let target = RequestTarget::new(Verb::Post, PATH).with_query("a=1&a=2").with_body("b=3");

		assert_eq!(
			CanonicalRequest::new(target, &id).message(),
			"POST\n/2/authenticate/combined\na=1&a=2\nb=3\nmy-token-id"
		);
	}

	#[test]
	fn signatures_are_deterministic_and_verb_sensitive() {
		let id = token_id();
		let secret = TokenSecret::new("my-token-secret");
		let get = CanonicalRequest::new(RequestTarget::new(Verb::Get, PATH), &id);
		let first = get.sign(&secret).expect("Signing should succeed.");
		let second = get.sign(&secret).expect("Signing should succeed.");

		assert_eq!(first, "FxlGdXGLXorVrBEDy0JKPmPglNs");
		assert_eq!(first, second);
		assert_eq!(
			CanonicalRequest::new(RequestTarget::new(Verb::Patch, PATH), &id)
				.sign(&secret)
				.expect("Signing should succeed."),
			"XHErDTlD8ijwMKQtqcaf-tnB-8Q"
		);
		assert!(!first.ends_with('='));
	}

	#[test]
	fn query_and_body_are_covered() {
		let id = token_id();
		let secret = TokenSecret::new("my-token-secret");
		let sign = |target| {
			CanonicalRequest::new(target, &id).sign(&secret).expect("Signing should succeed.")
		};
		let query = RequestTarget::new(Verb::Get, PATH)
			.with_query("allowed_origins=https%3A%2F%2Fexample.com");
		let body = RequestTarget::new(Verb::Post, PATH).with_body("domain=MY-DOMAIN");

		assert_eq!(sign(query), "MzHmjv9iuQRFBkhIMlm-gZMkkn0");
		assert_ne!(sign(query), sign(RequestTarget::new(Verb::Get, PATH)));
		assert_eq!(sign(body), "EkRS3w_Q78355TRcLlUxQZvyw3I");
		assert_eq!(
			sign(RequestTarget::new(Verb::Post, PATH).with_body("domain=OTHER-DOMAIN")),
			"F91HuMQrw4SuRAXjNiNjjaSoSO0"
		);
	}
}
