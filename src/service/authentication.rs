//! Combined (application + user) authentication requests.

// self
use crate::{
	_prelude::*,
	auth::{AuthenticationToken, Domain, ResourceId, TokenKind},
	config::ServiceConfig,
	params::{ParameterSet, ToParameter},
	request::{NoncePolicy, SignOptions, SignedRequest, SignedRequestBuilder, Verb},
	service::{ServiceContext, repeated},
};

/// Path of the combined authentication endpoint.
pub const COMBINED_PATH: &str = "/2/authenticate/combined";

const ALLOWED_ORIGINS: &str = "allowed_origins";

/// Body of the combined token exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedTokenRequest {
	/// Domain of the application.
	pub domain: Domain,
	/// Application name.
	pub application: ResourceId,
	/// Domain of the user store.
	pub userstore_domain: Domain,
	/// User store name.
	pub userstore_name: ResourceId,
	/// Kind of token to issue.
	pub token_type: TokenKind,
}
impl CombinedTokenRequest {
	/// Renders the body parameters in wire order.
	pub fn to_params(&self) -> ParameterSet {
		ParameterSet::new()
			.with("domain", &self.domain)
			.with("application", &self.application)
			.with("userstore_domain", &self.userstore_domain)
			.with("userstore_name", &self.userstore_name)
			.with("token_type", self.token_type.parameter())
	}
}

/// Builders for `/2/authenticate/combined`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticationService {
	context: ServiceContext,
}
impl AuthenticationService {
	/// Creates a service bound to `config`.
	pub fn new(config: &ServiceConfig) -> Self {
		Self { context: ServiceContext::new(config) }
	}

	/// Signs every request built by this service with `nonce`.
	pub fn with_nonce(mut self, nonce: NoncePolicy) -> Self {
		self.context.nonce = nonce;

		self
	}

	/// Lists the applications and users a token may combine.
	///
	/// Origins travel as repeated `allowed_origins` query pairs in input order.
	pub fn combined_get_request<I, S>(
		&self,
		allowed_origins: I,
		token: &AuthenticationToken,
	) -> Result<SignedRequest>
	where
		I: IntoIterator<Item = S>,
		S: ToParameter,
	{
		self.builder(Verb::Get).query(repeated(ALLOWED_ORIGINS, allowed_origins)).sign(token)
	}

	/// Requests the combined exchange over `PATCH`.
	///
	/// When present, `redirect_url` follows the origins as the last query pair.
	pub fn combined_patch_request<I, S>(
		&self,
		allowed_origins: I,
		redirect_url: Option<&Url>,
		token: &AuthenticationToken,
	) -> Result<SignedRequest>
	where
		I: IntoIterator<Item = S>,
		S: ToParameter,
	{
		let builder =
			self.builder(Verb::Patch).query(repeated(ALLOWED_ORIGINS, allowed_origins));

		match redirect_url {
			Some(redirect_url) => builder.redirect_url(redirect_url.clone()),
			None => builder,
		}
		.sign(token)
	}

	/// Exchanges the token for a combined token.
	///
	/// Origins stay in the query string; the exchange details (and the nonce, when enabled)
	/// form the body.
	pub fn combined_request<I, S>(
		&self,
		allowed_origins: I,
		token: &AuthenticationToken,
		request: &CombinedTokenRequest,
		nonce: NoncePolicy,
	) -> Result<SignedRequest>
	where
		I: IntoIterator<Item = S>,
		S: ToParameter,
	{
		self.builder(Verb::Post)
			.query(repeated(ALLOWED_ORIGINS, allowed_origins))
			.params(request.to_params())
			.nonce(nonce)
			.sign(token)
	}

	fn builder(&self, verb: Verb) -> SignedRequestBuilder {
		SignedRequestBuilder::new(&self.context.config.endpoint, verb, COMBINED_PATH)
			.options(SignOptions::default().with_nonce(self.context.nonce.clone()))
	}
}
