//! Query-profile management requests.

// self
use crate::{
	_prelude::*,
	auth::AuthenticationToken,
	config::ServiceConfig,
	params::{ParameterSet, QueryProfileParams, resolve_parameters},
	request::{NoncePolicy, SignOptions, SignedRequest, SignedRequestBuilder, Verb},
	service::ServiceContext,
};

/// Path template shared by every query-profile operation.
pub const QUERY_PROFILE_PATH: &str = "/2/api/sync/queryprofile/{queryProfileName}/v1";

const NAME_PARAMETER: &str = "queryProfileName";

/// Status document returned by create, update, and delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfileStatusResponse {
	/// Human-readable status message.
	pub message: String,
	/// Name of the affected query profile.
	pub query_profile: String,
}

/// Builders for `/2/api/sync/queryprofile/{queryProfileName}/v1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryProfileService {
	context: ServiceContext,
}
impl QueryProfileService {
	/// Creates a service bound to `config`.
	pub fn new(config: &ServiceConfig) -> Self {
		Self { context: ServiceContext::new(config) }
	}

	/// Signs every request built by this service with `nonce`.
	pub fn with_nonce(mut self, nonce: NoncePolicy) -> Self {
		self.context.nonce = nonce;

		self
	}

	/// `POST`: creates `name` over `query_manipulation_index`.
	pub fn create(
		&self,
		name: &str,
		query_manipulation_index: &str,
		params: &QueryProfileParams,
		token: &AuthenticationToken,
	) -> Result<SignedRequest> {
		let body = configuration(query_manipulation_index, params)?;

		self.builder(Verb::Post, name).params(body).sign(token)
	}

	/// `GET`: fetches the configuration of `name`.
	pub fn retrieve(&self, name: &str, token: &AuthenticationToken) -> Result<SignedRequest> {
		self.builder(Verb::Get, name).sign(token)
	}

	/// `PUT`: replaces the configuration of `name`.
	pub fn update(
		&self,
		name: &str,
		query_manipulation_index: &str,
		params: &QueryProfileParams,
		token: &AuthenticationToken,
	) -> Result<SignedRequest> {
		let body = configuration(query_manipulation_index, params)?;

		self.builder(Verb::Put, name).params(body).sign(token)
	}

	/// `DELETE`: removes `name`.
	pub fn delete(&self, name: &str, token: &AuthenticationToken) -> Result<SignedRequest> {
		self.builder(Verb::Delete, name).sign(token)
	}

	fn builder(&self, verb: Verb, name: &str) -> SignedRequestBuilder {
		SignedRequestBuilder::new(&self.context.config.endpoint, verb, QUERY_PROFILE_PATH)
			.path_param(NAME_PARAMETER, name)
			.options(SignOptions::default().with_nonce(self.context.nonce.clone()))
	}
}

fn configuration(
	query_manipulation_index: &str,
	params: &QueryProfileParams,
) -> Result<ParameterSet> {
	let mut body = ParameterSet::new().with("query_manipulation_index", query_manipulation_index);

	body.append(resolve_parameters(params)?);

	Ok(body)
}
