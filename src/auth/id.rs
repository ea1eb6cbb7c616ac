//! Strongly typed identifiers used in composite tokens and resource names.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 256;
const SEGMENT_DELIMITER: char = ':';

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (token, domain, resource).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (token, domain, resource).
		kind: &'static str,
	},
	/// The identifier contains the `:` segment delimiter.
	#[error("{kind} identifier contains the `:` delimiter.")]
	ContainsDelimiter {
		/// Kind of identifier (token, domain, resource).
		kind: &'static str,
	},
	/// A qualified resource name lacks the `domain:name` separator.
	#[error("Resource name must use the `domain:name` form.")]
	MissingDelimiter,
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (token, domain, resource).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! { TokenId, "Identifier of an issued authentication token.", "Token" }
def_id! { Domain, "Domain that owns applications, user stores, and resources.", "Domain" }
def_id! {
	ResourceId,
	"Name of a resource (index, query profile, application) within a domain.",
	"Resource"
}

/// Fully qualified resource reference rendered as `domain:name` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceName {
	/// Owning domain.
	pub domain: Domain,
	/// Resource name inside the domain.
	pub name: ResourceId,
}
impl ResourceName {
	/// Builds a resource name from already validated parts.
	pub fn new(domain: Domain, name: ResourceId) -> Self {
		Self { domain, name }
	}

	/// Validates both parts and builds a resource name.
	pub fn parse_parts(
		domain: impl AsRef<str>,
		name: impl AsRef<str>,
	) -> Result<Self, IdentifierError> {
		Ok(Self { domain: Domain::new(domain)?, name: ResourceId::new(name)? })
	}
}
impl Display for ResourceName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}{SEGMENT_DELIMITER}{}", self.domain, self.name)
	}
}
impl FromStr for ResourceName {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.split_once(SEGMENT_DELIMITER) {
			Some((domain, name)) => Self::parse_parts(domain, name),
			None => Err(IdentifierError::MissingDelimiter),
		}
	}
}

pub(crate) fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.contains(SEGMENT_DELIMITER) {
		return Err(IdentifierError::ContainsDelimiter { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_reject_delimiters_and_whitespace() {
		assert!(TokenId::new(" token").is_err(), "Leading whitespace must be rejected.");
		assert_eq!(
			TokenId::new("abc:def"),
			Err(IdentifierError::ContainsDelimiter { kind: "Token" })
		);
		assert_eq!(Domain::new(""), Err(IdentifierError::Empty { kind: "Domain" }));

		let id = TokenId::new("my-token-id").expect("Token id fixture should be valid.");

		assert_eq!(id.as_ref(), "my-token-id");
		assert_eq!(format!("{id:?}"), "Token(my-token-id)");
	}

	#[test]
	fn resource_names_render_and_parse() {
		let name = ResourceName::parse_parts("MY-DOMAIN", "wiki_eng")
			.expect("Resource name fixture should be valid.");

		assert_eq!(name.to_string(), "MY-DOMAIN:wiki_eng");
		assert_eq!(
			"MY-DOMAIN:wiki_eng".parse::<ResourceName>().expect("Rendered name should parse."),
			name
		);
		assert!("no-delimiter".parse::<ResourceName>().is_err());
		assert!("a:b:c".parse::<ResourceName>().is_err());
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let id: TokenId =
			serde_json::from_str("\"token-42\"").expect("Token id should deserialize.");

		assert_eq!(id.as_ref(), "token-42");
		assert!(serde_json::from_str::<TokenId>("\"with space\"").is_err());
		assert!(serde_json::from_str::<TokenId>("\"with:colon\"").is_err());
	}

	#[test]
	fn length_limits() {
		Domain::new("a".repeat(IDENTIFIER_MAX_LEN)).expect("Exact length should succeed.");

		assert!(Domain::new("a".repeat(IDENTIFIER_MAX_LEN + 1)).is_err());
	}
}
