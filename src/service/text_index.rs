//! Text-index query requests.

// self
use crate::{
	_prelude::*,
	auth::AuthenticationToken,
	config::ServiceConfig,
	params::{
		ParameterSet, ParametricValuesParams, QueryTextIndexParams, ToParameter, resolve_parameters,
	},
	request::{NoncePolicy, SignOptions, SignedRequest, SignedRequestBuilder, Verb},
	service::{ServiceContext, repeated},
};

/// Path of the Query Text Index operation.
pub const QUERY_TEXT_INDEX_PATH: &str = "/2/api/sync/textindex/query/search/v1";
/// Path of the Get Parametric Values operation.
pub const PARAMETRIC_VALUES_PATH: &str = "/2/api/sync/textindex/query/parametricvalues/v1";

/// Builders for text-index queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextIndexService {
	context: ServiceContext,
}
impl TextIndexService {
	/// Creates a service bound to `config`.
	pub fn new(config: &ServiceConfig) -> Self {
		Self { context: ServiceContext::new(config) }
	}

	/// Signs every request built by this service with `nonce`.
	pub fn with_nonce(mut self, nonce: NoncePolicy) -> Self {
		self.context.nonce = nonce;

		self
	}

	/// Searches `indexes` for `text`.
	///
	/// Renders `text`, one `indexes` pair per index, then the optional parameters.
	pub fn query_text_index<I, S>(
		&self,
		text: &str,
		indexes: I,
		params: &QueryTextIndexParams,
		token: &AuthenticationToken,
	) -> Result<SignedRequest>
	where
		I: IntoIterator<Item = S>,
		S: ToParameter,
	{
		let mut query = ParameterSet::new().with("text", text);

		query.append(repeated("indexes", indexes)).append(resolve_parameters(params)?);

		self.builder(QUERY_TEXT_INDEX_PATH).params(query).sign(token)
	}

	/// Lists the values of `field_names` across `indexes`.
	pub fn parametric_values<F, FS, I, IS>(
		&self,
		field_names: F,
		indexes: I,
		params: &ParametricValuesParams,
		token: &AuthenticationToken,
	) -> Result<SignedRequest>
	where
		F: IntoIterator<Item = FS>,
		FS: ToParameter,
		I: IntoIterator<Item = IS>,
		IS: ToParameter,
	{
		let mut query = repeated("field_name", field_names);

		query.append(repeated("indexes", indexes)).append(resolve_parameters(params)?);

		self.builder(PARAMETRIC_VALUES_PATH).params(query).sign(token)
	}

	fn builder(&self, path: &str) -> SignedRequestBuilder {
		SignedRequestBuilder::new(&self.context.config.endpoint, Verb::Get, path)
			.options(SignOptions::default().with_nonce(self.context.nonce.clone()))
	}
}
