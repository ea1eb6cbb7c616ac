//! Signed request assembly.
//!
//! [`SignedRequestBuilder`] turns an endpoint, a `{name}` path template, and resolved
//! parameters into a [`SignedRequest`]: the final URL, an optional form body, headers, and the
//! composite token string computed from the verb and the canonical path. The builder performs
//! no I/O; the transport consumes the result by value.

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::{AuthenticationToken, Nonce, RequestTarget},
	error::ConfigError,
	obs::{self, RequestOutcome, RequestSpan, RequestStage},
	params::ParameterSet,
};

/// Header naming the body encoding.
pub const CONTENT_TYPE: &str = "content-type";
/// Media type used for every request body.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

const NONCE_PARAMETER: &str = "nonce";
const REDIRECT_URL_PARAMETER: &str = "redirect_url";

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PATCH`
	Patch,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl Verb {
	/// Upper-case method name, as signed.
	pub const fn as_str(self) -> &'static str {
		match self {
			Verb::Get => "GET",
			Verb::Post => "POST",
			Verb::Patch => "PATCH",
			Verb::Put => "PUT",
			Verb::Delete => "DELETE",
		}
	}

	/// Returns `true` when request parameters travel in a form body instead of the query.
	pub const fn carries_body(self) -> bool {
		matches!(self, Verb::Post | Verb::Patch | Verb::Put)
	}
}
impl Display for Verb {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Controls whether a nonce is signed into the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NoncePolicy {
	/// No nonce; the composite keeps an empty nonce slot.
	#[default]
	Disabled,
	/// Draw a fresh nonce per request.
	Generate,
	/// Use the supplied nonce, typically for reproducible tests.
	Fixed(Nonce),
}
impl NoncePolicy {
	/// Produces the nonce to use for one request, if any.
	pub fn resolve(&self) -> Option<Nonce> {
		match self {
			NoncePolicy::Disabled => None,
			NoncePolicy::Generate => Some(Nonce::generate()),
			NoncePolicy::Fixed(nonce) => Some(nonce.clone()),
		}
	}
}

/// Per-request signing options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignOptions {
	/// Nonce behavior.
	pub nonce: NoncePolicy,
	/// Redirect target appended to the query string after every other parameter.
	pub redirect_url: Option<Url>,
}
impl SignOptions {
	/// Overrides the nonce policy.
	pub fn with_nonce(mut self, nonce: NoncePolicy) -> Self {
		self.nonce = nonce;

		self
	}

	/// Sets the redirect URL.
	pub fn with_redirect_url(mut self, redirect_url: Url) -> Self {
		self.redirect_url = Some(redirect_url);

		self
	}
}

/// Fully assembled request ready for a transport.
///
/// The token signs the path, the query string, and the body exactly as stored here, so none of
/// them can change after signing.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedRequest {
	verb: Verb,
	url: Url,
	body: Option<Vec<u8>>,
	headers: BTreeMap<String, String>,
	token: String,
	nonce: Option<Nonce>,
}
impl SignedRequest {
	/// HTTP verb.
	pub fn verb(&self) -> Verb {
		self.verb
	}

	/// Final URL including the query string.
	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Canonical path that was signed.
	pub fn path(&self) -> &str {
		self.url.path()
	}

	/// Form-encoded body, absent when no parameter travels in the body.
	pub fn body(&self) -> Option<&[u8]> {
		self.body.as_deref()
	}

	/// Decodes the form body back into ordered pairs.
	pub fn body_params(&self) -> ParameterSet {
		self.body
			.as_deref()
			.map(|body| form_urlencoded::parse(body).into_owned().collect())
			.unwrap_or_default()
	}

	/// Decodes the query string into ordered pairs.
	pub fn query_params(&self) -> ParameterSet {
		self.url.query_pairs().into_owned().collect()
	}

	/// Headers the transport must send, besides the token.
	pub fn headers(&self) -> &BTreeMap<String, String> {
		&self.headers
	}

	/// Composite token string; simple tokens expose their secret here.
	pub fn token(&self) -> &str {
		&self.token
	}

	/// Nonce signed into the request, if any.
	pub fn nonce(&self) -> Option<&Nonce> {
		self.nonce.as_ref()
	}
}
impl Debug for SignedRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SignedRequest")
			.field("verb", &self.verb)
			.field("url", &self.url.as_str())
			.field("body_len", &self.body.as_ref().map(Vec::len))
			.field("headers", &self.headers)
			.field("token", &"<redacted>")
			.field("nonce", &self.nonce)
			.finish()
	}
}

/// Staged builder for [`SignedRequest`].
#[derive(Clone, Debug)]
pub struct SignedRequestBuilder {
	endpoint: Url,
	verb: Verb,
	template: String,
	path_params: Vec<(String, String)>,
	query: ParameterSet,
	params: ParameterSet,
	options: SignOptions,
}
impl SignedRequestBuilder {
	/// Starts a request against `endpoint` using a `{name}` path template.
	pub fn new(endpoint: &Url, verb: Verb, template: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.clone(),
			verb,
			template: template.into(),
			path_params: Vec::new(),
			query: ParameterSet::new(),
			params: ParameterSet::new(),
			options: SignOptions::default(),
		}
	}

	/// Supplies the value of a `{name}` placeholder; it is percent-encoded as one segment.
	pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.path_params.push((name.into(), value.into()));

		self
	}

	/// Appends parameters that always travel in the query string.
	pub fn query(mut self, query: ParameterSet) -> Self {
		self.query.append(query);

		self
	}

	/// Appends request parameters; they go to the body for body verbs and to the query otherwise.
	pub fn params(mut self, params: ParameterSet) -> Self {
		self.params.append(params);

		self
	}

	/// Replaces the signing options.
	pub fn options(mut self, options: SignOptions) -> Self {
		self.options = options;

		self
	}

	/// Overrides the nonce policy only.
	pub fn nonce(mut self, nonce: NoncePolicy) -> Self {
		self.options.nonce = nonce;

		self
	}

	/// Sets the redirect URL only.
	pub fn redirect_url(mut self, redirect_url: Url) -> Self {
		self.options.redirect_url = Some(redirect_url);

		self
	}

	/// Assembles and signs the request.
	///
	/// Expiry is not checked here; see [`AuthenticationToken::ensure_unexpired_at`].
	pub fn sign(self, token: &AuthenticationToken) -> Result<SignedRequest> {
		let verb = self.verb;
		let _guard = RequestSpan::new(RequestStage::Sign, verb, &self.template).entered();

		obs::record_request_outcome(RequestStage::Sign, verb, RequestOutcome::Attempt);

		let result = self.assemble(token);
		let outcome =
			if result.is_ok() { RequestOutcome::Success } else { RequestOutcome::Failure };

		obs::record_request_outcome(RequestStage::Sign, verb, outcome);

		result
	}

	fn assemble(self, token: &AuthenticationToken) -> Result<SignedRequest> {
		let Self { endpoint, verb, template, path_params, mut query, params, options } = self;
		let mut url = render_url(&endpoint, &template, &path_params)?;
		// Simple tokens carry no signature to bind a nonce to.
		let nonce = if token.kind().is_signed() { options.nonce.resolve() } else { None };
		let mut body = ParameterSet::new();

		if verb.carries_body() {
			body.append(params);
		} else {
			query.append(params);
		}
		if let Some(nonce) = &nonce {
			if verb.carries_body() {
				body.push(NONCE_PARAMETER, nonce.as_str());
			} else {
				query.push(NONCE_PARAMETER, nonce.as_str());
			}
		}
		if let Some(redirect_url) = &options.redirect_url {
			query.push(REDIRECT_URL_PARAMETER, redirect_url);
		}
		if !query.is_empty() {
			url.query_pairs_mut().extend_pairs(query.iter());
		}

		let body = (!body.is_empty()).then(|| body.to_form_urlencoded());
		let target = RequestTarget::new(verb, url.path())
			.with_query(url.query().unwrap_or_default())
			.with_body(body.as_deref().unwrap_or_default());
		let token = token.composite(target, nonce.as_ref())?;
		let mut headers = BTreeMap::new();

		if body.is_some() {
			headers.insert(CONTENT_TYPE.to_owned(), FORM_URLENCODED.to_owned());
		}

		Ok(SignedRequest { verb, url, body: body.map(String::into_bytes), headers, token, nonce })
	}
}

/// Builds and signs a request in one call.
///
/// `params` are request parameters: query string for `GET`/`DELETE`, form body otherwise.
pub fn build_signed_request(
	endpoint: &Url,
	verb: Verb,
	template: &str,
	path_params: &[(&str, &str)],
	params: &ParameterSet,
	token: &AuthenticationToken,
	options: SignOptions,
) -> Result<SignedRequest> {
	path_params
		.iter()
		.fold(SignedRequestBuilder::new(endpoint, verb, template), |builder, (name, value)| {
			builder.path_param(*name, *value)
		})
		.params(params.clone())
		.options(options)
		.sign(token)
}

fn render_url(
	endpoint: &Url,
	template: &str,
	path_params: &[(String, String)],
) -> Result<Url, ConfigError> {
	let mut used = vec![false; path_params.len()];
	let segments = template
		.split('/')
		.filter(|segment| !segment.is_empty())
		.map(|segment| substitute(template, segment, path_params, &mut used))
		.collect::<Result<Vec<_>, _>>()?;

	if let Some(index) = used.iter().position(|used| !used) {
		return Err(ConfigError::UnusedPathParameter { name: path_params[index].0.clone() });
	}

	let mut url = endpoint.clone();

	url.set_query(None);
	url.set_fragment(None);
	url.path_segments_mut()
		.map_err(|_| ConfigError::InvalidEndpoint {
			url: endpoint.to_string(),
			reason: "URL cannot be used as a base",
		})?
		.pop_if_empty()
		.extend(&segments);

	Ok(url)
}

fn substitute(
	template: &str,
	segment: &str,
	path_params: &[(String, String)],
	used: &mut [bool],
) -> Result<String, ConfigError> {
	let malformed = || ConfigError::InvalidPathTemplate { template: template.to_owned() };
	let mut rendered = String::with_capacity(segment.len());
	let mut rest = segment;

	while let Some(open) = rest.find('{') {
		let (literal, tail) = rest.split_at(open);

		if literal.contains('}') {
			return Err(malformed());
		}

		rendered.push_str(literal);

		let (name, tail) = tail[1..].split_once('}').ok_or_else(malformed)?;

		if name.is_empty() || name.contains('{') {
			return Err(malformed());
		}

		let index = path_params
			.iter()
			.position(|(key, value)| key == name && !value.is_empty())
			.ok_or_else(|| ConfigError::MissingPathParameter { name: name.to_owned() })?;

		used[index] = true;
		rendered.push_str(&path_params[index].1);
		rest = tail;
	}

	if rest.contains('}') {
		return Err(malformed());
	}

	rendered.push_str(rest);

	Ok(rendered)
}
