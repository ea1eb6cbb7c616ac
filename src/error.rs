//! Client-level error types shared across tokens, signing, parameters, and transports.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Credential is malformed or no longer usable.
	#[error(transparent)]
	InvalidToken(#[from] InvalidTokenError),
	/// Cryptographic primitive rejected the signing input.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Parameter rendering failed.
	#[error(transparent)]
	ParameterResolution(#[from] ParameterResolutionError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Service answered with a non-success status.
	#[error("Service rejected the request with status {status}: {reason}.")]
	Api {
		/// HTTP status code returned by the service.
		status: u16,
		/// Service-supplied reason, or the raw body when no reason field exists.
		reason: String,
	},
	/// Service responded with JSON that does not match the expected model.
	#[error("Service returned malformed JSON.")]
	Decode {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}

/// Credential validation failures.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum InvalidTokenError {
	/// Token identifier was empty.
	#[error("Token id cannot be empty.")]
	EmptyId,
	/// Token secret was empty.
	#[error("Token secret cannot be empty.")]
	EmptySecret,
	/// Token identifier failed validation.
	#[error("Token id is invalid.")]
	InvalidId(#[from] crate::auth::IdentifierError),
	/// Token claims to be created after it expires.
	#[error("Token creation instant {created_at} is after its expiry {expires_at}.")]
	CreationAfterExpiry {
		/// Creation instant carried by the token.
		created_at: OffsetDateTime,
		/// Expiry instant carried by the token.
		expires_at: OffsetDateTime,
	},
	/// Token expired before the request was dispatched.
	#[error("Token expired at {expires_at}.")]
	Expired {
		/// Expiry instant carried by the token.
		expires_at: OffsetDateTime,
	},
}

/// Failures raised by the signing primitive.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SigningError {
	/// HMAC rejected the key material.
	#[error("HMAC key was rejected by the signing primitive.")]
	InvalidKey,
}

/// Parameter rendering failures.
///
/// Contradictory input is settled by precedence rules; only unrenderable values fail.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ParameterResolutionError {
	/// A field carried a value that cannot be rendered.
	#[error("Parameter `{field}` cannot be rendered: {reason}.")]
	InvalidField {
		/// Wire name of the offending field.
		field: &'static str,
		/// Human-readable reason.
		reason: String,
	},
}

/// Configuration and request-template failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Endpoint URL is unusable as a request base.
	#[error("Endpoint `{url}` is invalid: {reason}.")]
	InvalidEndpoint {
		/// Endpoint that failed validation.
		url: String,
		/// Validation failure summary.
		reason: &'static str,
	},
	/// Path template contains an unterminated placeholder.
	#[error("Path template `{template}` is malformed.")]
	InvalidPathTemplate {
		/// Offending template.
		template: String,
	},
	/// Path template references a parameter that was not supplied.
	#[error("Path parameter `{name}` is missing.")]
	MissingPathParameter {
		/// Placeholder name.
		name: String,
	},
	/// A supplied path parameter is not referenced by the template.
	#[error("Path parameter `{name}` is not used by the template.")]
	UnusedPathParameter {
		/// Supplied parameter name.
		name: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the service.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the service.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
