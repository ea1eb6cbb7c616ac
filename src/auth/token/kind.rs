//! Entity-type and token-kind tags carried by every composite token.

// self
use crate::_prelude::*;

/// Credential scope a token was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
	/// Token not yet bound to an application or user.
	#[serde(rename = "UNB")]
	Unbound,
	/// Token bound to both an application and a user.
	#[serde(rename = "CMB")]
	Combined,
	/// Application-only token.
	#[serde(rename = "APP")]
	Application,
	/// User-only token.
	#[serde(rename = "USER")]
	User,
	/// Developer token used for account administration.
	#[serde(rename = "DEV")]
	Developer,
}
impl EntityType {
	/// Returns the tag used as the first composite token segment.
	pub const fn as_str(self) -> &'static str {
		match self {
			EntityType::Unbound => "UNB",
			EntityType::Combined => "CMB",
			EntityType::Application => "APP",
			EntityType::User => "USER",
			EntityType::Developer => "DEV",
		}
	}
}
impl Display for EntityType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Selects how the trailing composite segment is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
	/// The raw secret travels as the trailing segment.
	#[serde(rename = "SIMPLE")]
	Simple,
	/// The trailing segment is an HMAC-SHA1 signature over the request.
	#[serde(rename = "HMAC_SHA1")]
	HmacSha1,
}
impl TokenKind {
	/// Returns the tag used as the second composite token segment.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenKind::Simple => "SIMPLE",
			TokenKind::HmacSha1 => "HMAC_SHA1",
		}
	}

	/// Returns the value sent as the `token_type` request parameter.
	pub const fn parameter(self) -> &'static str {
		match self {
			TokenKind::Simple => "simple",
			TokenKind::HmacSha1 => "hmac_sha1",
		}
	}

	/// Returns `true` when the kind replaces the secret with a signature.
	pub const fn is_signed(self) -> bool {
		matches!(self, TokenKind::HmacSha1)
	}
}
impl Display for TokenKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
