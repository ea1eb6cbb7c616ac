//! Replay-protection nonces attached to signed requests.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;
// self
use crate::{
	_prelude::*,
	auth::{IdentifierError, id},
};

const NONCE_BYTES: usize = 16;

/// Random value signed into a request and echoed in its parameters.
///
/// Uniqueness is not tracked locally; the service rejects replays.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nonce(String);
impl Nonce {
	/// Draws 16 bytes from the thread-local CSPRNG and encodes them URL-safe without padding.
	pub fn generate() -> Self {
		let bytes = rand::rng().random::<[u8; NONCE_BYTES]>();

		Self(URL_SAFE_NO_PAD.encode(bytes))
	}

	/// Wraps a caller-chosen value, typically a fixed vector in tests.
	///
	/// The value occupies its own composite token segment, so it must be non-empty and free of
	/// whitespace and `:`.
	pub fn from_value(value: impl Into<String>) -> Result<Self, IdentifierError> {
		let value = value.into();

		id::validate_view("Nonce", &value)?;

		Ok(Self(value))
	}

	/// Returns the encoded nonce.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl From<Nonce> for String {
	fn from(value: Nonce) -> Self {
		value.0
	}
}
impl TryFrom<String> for Nonce {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::from_value(value)
	}
}
impl Debug for Nonce {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Nonce({})", self.0)
	}
}
impl Display for Nonce {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn generated_nonces_are_url_safe_and_distinct() {
		let first = Nonce::generate();
		let second = Nonce::generate();

		assert_eq!(first.as_str().len(), 22);
		assert!(first.as_str().chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
		assert_ne!(first, second);
	}

	#[test]
	fn fixed_values_must_fit_one_segment() {
		assert_eq!(Nonce::from_value(""), Err(IdentifierError::Empty { kind: "Nonce" }));
		assert_eq!(
			Nonce::from_value("a:b"),
			Err(IdentifierError::ContainsDelimiter { kind: "Nonce" })
		);
		assert!(serde_json::from_str::<Nonce>("\"\"").is_err());

		let nonce =
			Nonce::from_value("wJkMexQxgEhW13IAeN6i6A").expect("Fixed nonce should be valid.");

		assert_eq!(nonce.as_str(), "wJkMexQxgEhW13IAeN6i6A");
	}
}
