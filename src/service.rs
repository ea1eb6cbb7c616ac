//! One explicit request-building function per remote operation.
//!
//! Services are cheap views over a [`ServiceConfig`]; every method validates its inputs,
//! resolves parameters, and returns a [`crate::request::SignedRequest`] without performing I/O.

pub mod authentication;
pub mod query_profile;
pub mod text_index;

pub use authentication::*;
pub use query_profile::*;
pub use text_index::*;

// self
use crate::{config::ServiceConfig, params::ParameterSet, request::NoncePolicy};

/// Shared state for service request builders.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ServiceContext {
	config: ServiceConfig,
	nonce: NoncePolicy,
}
impl ServiceContext {
	fn new(config: &ServiceConfig) -> Self {
		Self { config: config.clone(), nonce: NoncePolicy::Disabled }
	}
}

fn repeated<I, S>(key: &str, values: I) -> ParameterSet
where
	I: IntoIterator<Item = S>,
	S: crate::params::ToParameter,
{
	let mut set = ParameterSet::new();

	set.push_repeated(key, values);

	set
}
