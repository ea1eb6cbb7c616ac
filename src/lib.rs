//! Typed request builders, HMAC-SHA1 request signing, and precedence-aware parameter
//! resolution for the Haven OnDemand REST API, with a pluggable async transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod params;
pub mod request;
pub mod service;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	#[cfg(feature = "reqwest")] use crate::{client::HodClient, http::ReqwestHttpClient};
	use crate::{
		auth::{AuthenticationToken, EntityType, TokenKind},
		config::ServiceConfig,
	};

	/// Identifier used by fixed-vector tests.
	pub const FIXTURE_TOKEN_ID: &str = "my-token-id";
	/// Secret used by fixed-vector tests.
	pub const FIXTURE_TOKEN_SECRET: &str = "my-token-secret";

	/// Unbound token with the fixture id and secret, valid for the Unix epoch's first second.
	pub fn fixture_token(kind: TokenKind) -> AuthenticationToken {
		AuthenticationToken::new(
			EntityType::Unbound,
			kind,
			OffsetDateTime::UNIX_EPOCH,
			FIXTURE_TOKEN_ID,
			FIXTURE_TOKEN_SECRET,
			OffsetDateTime::UNIX_EPOCH + Duration::seconds(1),
		)
		.expect("Fixture token should be valid.")
	}

	/// Token of `entity_type` that stays valid for an hour from now.
	pub fn live_token(entity_type: EntityType, kind: TokenKind) -> AuthenticationToken {
		let now = OffsetDateTime::now_utc();

		AuthenticationToken::new(
			entity_type,
			kind,
			now,
			FIXTURE_TOKEN_ID,
			FIXTURE_TOKEN_SECRET,
			now + Duration::hours(1),
		)
		.expect("Live token should be valid.")
	}

	/// Default production configuration; request building never touches the network.
	pub fn production_config() -> ServiceConfig {
		ServiceConfig::default()
	}

	/// Configuration pointing at a local mock server over plain HTTP.
	pub fn mock_config(base_url: &str) -> ServiceConfig {
		ServiceConfig::builder()
			.endpoint_str(base_url)
			.and_then(|builder| builder.allow_http(true).build())
			.expect("Mock endpoint should be valid.")
	}

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	#[cfg(feature = "reqwest")]
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`HodClient`] against a mock server using the test reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn build_reqwest_test_client(base_url: &str) -> HodClient<ReqwestHttpClient> {
		HodClient::with_http_client(mock_config(base_url), test_reqwest_http_client())
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
