//! Service configuration: the validated API endpoint every request is built against.

// self
use crate::{_prelude::*, error::ConfigError};

/// Production API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.havenondemand.com";

/// Immutable service configuration consumed by the operation builders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
	/// Base URL; request paths are appended to it.
	pub endpoint: Url,
}
impl ServiceConfig {
	/// Creates a builder seeded with [`DEFAULT_ENDPOINT`].
	pub fn builder() -> ServiceConfigBuilder {
		ServiceConfigBuilder::default()
	}
}
impl Default for ServiceConfig {
	fn default() -> Self {
		Self { endpoint: default_endpoint() }
	}
}

/// Builder for [`ServiceConfig`] values.
#[derive(Clone, Debug)]
pub struct ServiceConfigBuilder {
	endpoint: Url,
	allow_http: bool,
}
impl ServiceConfigBuilder {
	/// Overrides the endpoint.
	pub fn endpoint(mut self, url: Url) -> Self {
		self.endpoint = url;

		self
	}

	/// Parses and overrides the endpoint.
	pub fn endpoint_str(self, url: &str) -> Result<Self, ConfigError> {
		let endpoint = Url::parse(url).map_err(|_| ConfigError::InvalidEndpoint {
			url: url.to_owned(),
			reason: "not an absolute URL",
		})?;

		Ok(self.endpoint(endpoint))
	}

	/// Permits plain `http` endpoints, e.g. local mock servers.
	pub fn allow_http(mut self, allow: bool) -> Self {
		self.allow_http = allow;

		self
	}

	/// Consumes the builder and validates the endpoint.
	pub fn build(self) -> Result<ServiceConfig, ConfigError> {
		validate_endpoint(&self.endpoint, self.allow_http)?;

		Ok(ServiceConfig { endpoint: self.endpoint })
	}
}
impl Default for ServiceConfigBuilder {
	fn default() -> Self {
		Self { endpoint: default_endpoint(), allow_http: false }
	}
}

fn default_endpoint() -> Url {
	Url::parse(DEFAULT_ENDPOINT)
		.unwrap_or_else(|_| unreachable!("Default endpoint is a valid URL."))
}

fn validate_endpoint(url: &Url, allow_http: bool) -> Result<(), ConfigError> {
	let invalid = |reason| ConfigError::InvalidEndpoint { url: url.to_string(), reason };

	match url.scheme() {
		"https" => {},
		"http" if allow_http => {},
		"http" => return Err(invalid("plain HTTP requires `allow_http`")),
		_ => return Err(invalid("scheme must be http or https")),
	}

	if url.host_str().is_none_or(str::is_empty) {
		return Err(invalid("host is required"));
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(invalid("query and fragment are not allowed"));
	}

	Ok(())
}
