//! Parameter resolution: optional builder state rendered into ordered wire parameters.
//!
//! Builders collect optional fields through consuming setters and freeze into immutable
//! snapshots. A snapshot implements [`ResolveParameters`], which emits a [`ParameterSet`]
//! holding only the fields that carry a value. Field groups that express one logical value in
//! several forms settle on a single candidate through [`first_present`].

macro_rules! def_wire_enum {
	($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
		pub enum $name {
			$(
				$(#[$vmeta])*
				#[serde(rename = $wire)]
				$variant,
			)+
		}
		impl $name {
			/// Returns the wire value.
			pub const fn as_str(self) -> &'static str {
				match self {
					$($name::$variant => $wire,)+
				}
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.as_str())
			}
		}
		impl ToParameter for $name {
			fn to_parameter(&self) -> String {
				self.as_str().to_owned()
			}
		}
	};
}

pub mod date;
pub mod parametric;
pub mod query_profile;
pub mod query_text_index;

pub use date::*;
pub use parametric::*;
pub use query_profile::*;
pub use query_text_index::*;

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::{Domain, ResourceId, ResourceName, TokenId},
	error::ParameterResolutionError,
};

/// Delimiter used when a list renders as one joined value.
pub const LIST_DELIMITER: char = ',';

/// Converts a field value into its wire string.
pub trait ToParameter {
	/// Renders the value exactly as the service expects it.
	fn to_parameter(&self) -> String;
}
impl ToParameter for str {
	fn to_parameter(&self) -> String {
		self.to_owned()
	}
}
impl ToParameter for String {
	fn to_parameter(&self) -> String {
		self.clone()
	}
}
impl ToParameter for bool {
	fn to_parameter(&self) -> String {
		self.to_string()
	}
}
impl ToParameter for Url {
	fn to_parameter(&self) -> String {
		self.as_str().to_owned()
	}
}
impl<T> ToParameter for &T
where
	T: ?Sized + ToParameter,
{
	fn to_parameter(&self) -> String {
		(**self).to_parameter()
	}
}

macro_rules! impl_to_parameter_display {
	($($ty:ty),+ $(,)?) => {
		$(
			impl ToParameter for $ty {
				fn to_parameter(&self) -> String {
					self.to_string()
				}
			}
		)+
	};
}

impl_to_parameter_display!(i32, i64, u32, u64, usize, f64);
impl_to_parameter_display!(TokenId, Domain, ResourceId, ResourceName);

/// Snapshot types that can render themselves into a [`ParameterSet`].
pub trait ResolveParameters {
	/// Renders every present field, in schema order.
	fn resolve(&self) -> Result<ParameterSet, ParameterResolutionError>;
}

/// Resolves any parameter snapshot into its flat wire form.
pub fn resolve_parameters<R>(source: &R) -> Result<ParameterSet, ParameterResolutionError>
where
	R: ?Sized + ResolveParameters,
{
	source.resolve()
}

/// Returns the first present candidate in declaration order.
pub fn first_present<T, I>(candidates: I) -> Option<T>
where
	I: IntoIterator<Item = Option<T>>,
{
	candidates.into_iter().flatten().next()
}

/// Ordered multi-map of wire parameters.
///
/// Keys may repeat; pairs keep their insertion order so multi-valued parameters serialize as
/// repeated `key=value` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterSet(Vec<(String, String)>);
impl ParameterSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a pair unconditionally.
	pub fn push(&mut self, key: impl Into<String>, value: impl ToParameter) -> &mut Self {
		self.0.push((key.into(), value.to_parameter()));

		self
	}

	/// Appends a pair only when `value` is present.
	pub fn push_opt<V>(&mut self, key: &str, value: Option<V>) -> &mut Self
	where
		V: ToParameter,
	{
		if let Some(value) = value {
			self.push(key, value);
		}

		self
	}

	/// Appends one comma-joined pair; empty lists are omitted.
	pub fn push_joined<I, V>(&mut self, key: &str, values: I) -> &mut Self
	where
		I: IntoIterator<Item = V>,
		V: ToParameter,
	{
		let joined = values
			.into_iter()
			.map(|value| value.to_parameter())
			.collect::<Vec<_>>()
			.join(&LIST_DELIMITER.to_string());

		if !joined.is_empty() {
			self.push(key, joined);
		}

		self
	}

	/// Appends one pair per value, preserving order and multiplicity.
	pub fn push_repeated<I, V>(&mut self, key: &str, values: I) -> &mut Self
	where
		I: IntoIterator<Item = V>,
		V: ToParameter,
	{
		for value in values {
			self.push(key, value);
		}

		self
	}

	/// Chainable variant of [`Self::push`] for owned sets.
	pub fn with(mut self, key: impl Into<String>, value: impl ToParameter) -> Self {
		self.push(key, value);

		self
	}

	/// Moves every pair of `other` to the end of this set.
	pub fn append(&mut self, other: ParameterSet) -> &mut Self {
		self.0.extend(other.0);

		self
	}

	/// First value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Every value stored under `key`, in insertion order.
	pub fn get_all<'a, 'k>(
		&'a self,
		key: &'k str,
	) -> impl Iterator<Item = &'a str> + use<'a, 'k> {
		self.0.iter().filter(move |(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Returns `true` if at least one pair uses `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.iter().any(|(k, _)| k == key)
	}

	/// Iterator over pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Iterator over keys in insertion order, repeats included.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|(k, _)| k.as_str())
	}

	/// Number of pairs.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the set holds no pairs.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Serializes the pairs as `application/x-www-form-urlencoded`.
	pub fn to_form_urlencoded(&self) -> String {
		form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish()
	}
}
impl<K, V> FromIterator<(K, V)> for ParameterSet
where
	K: Into<String>,
	V: ToParameter,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.to_parameter())).collect())
	}
}
impl IntoIterator for ParameterSet {
	type IntoIter = std::vec::IntoIter<(String, String)>;
	type Item = (String, String);

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
impl ResolveParameters for ParameterSet {
	fn resolve(&self) -> Result<ParameterSet, ParameterResolutionError> {
		Ok(self.clone())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn first_present_prefers_declaration_order() {
		assert_eq!(first_present([None, Some(2), Some(3)]), Some(2));
		assert_eq!(first_present([Some(1), None, Some(3)]), Some(1));
		assert_eq!(first_present::<i32, _>([None, None]), None);
	}

	#[test]
	fn repeated_values_keep_order_and_multiplicity() {
		let mut set = ParameterSet::new();

		set.push_repeated("allowed_origins", ["https://b.example", "https://a.example"])
			.push_repeated("allowed_origins", ["https://b.example"]);

		assert_eq!(
			set.get_all("allowed_origins").collect::<Vec<_>>(),
			["https://b.example", "https://a.example", "https://b.example"]
		);
		assert_eq!(set.len(), 3);
	}

	#[test]
	fn joined_lists_use_commas_and_skip_empty_lists() {
		let mut set = ParameterSet::new();

		set.push_joined("print_fields", ["title", "author"])
			.push_joined("empty", Vec::<String>::new())
			.push_opt("missing", None::<bool>)
			.push_opt("present", Some(false));

		assert_eq!(set.get("print_fields"), Some("title,author"));
		assert!(!set.contains_key("empty"));
		assert!(!set.contains_key("missing"));
		assert_eq!(set.get("present"), Some("false"));
	}

	#[test]
	fn lookups_outlive_the_key() {
		let set = ParameterSet::new().with("indexes", "wiki_eng").with("indexes", "news_eng");
		let first = {
			let key = String::from("indexes");

			set.get(&key)
		};

		assert_eq!(first, Some("wiki_eng"));
		assert_eq!(set.get("missing"), None);
	}

	#[test]
	fn form_encoding_preserves_duplicates() {
		let set = ParameterSet::new()
			.with("allowed_origins", "https://example.com")
			.with("allowed_origins", "http://other.example.com")
			.with("text", "cats & dogs");

		assert_eq!(
			set.to_form_urlencoded(),
			"allowed_origins=https%3A%2F%2Fexample.com&allowed_origins=http%3A%2F%2Fother.example.com&text=cats+%26+dogs"
		);
	}
}
