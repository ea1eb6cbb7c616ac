//! Configuration parameters sent when creating or updating a query profile.

// self
use crate::{
	error::ParameterResolutionError,
	params::{ParameterSet, ResolveParameters},
};

/// Immutable snapshot of query-profile configuration.
///
/// Category lists are multi-valued and render as one pair per category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryProfileParams {
	description: Option<String>,
	promotions_enabled: Option<bool>,
	promotions_every_page: Option<bool>,
	promotions_identified: Option<bool>,
	promotion_categories: Vec<String>,
	synonyms_enabled: Option<bool>,
	synonym_categories: Vec<String>,
	blacklists_enabled: Option<bool>,
	blacklist_categories: Vec<String>,
}
impl QueryProfileParams {
	/// Starts a new builder with every field unset.
	pub fn builder() -> QueryProfileParamsBuilder {
		QueryProfileParamsBuilder::default()
	}
}
impl ResolveParameters for QueryProfileParams {
	fn resolve(&self) -> Result<ParameterSet, ParameterResolutionError> {
		let mut set = ParameterSet::new();

		set.push_opt("description", self.description.as_ref())
			.push_opt("promotions_enabled", self.promotions_enabled)
			.push_opt("promotions_every_page", self.promotions_every_page)
			.push_opt("promotions_identified", self.promotions_identified)
			.push_repeated("promotion_categories", &self.promotion_categories)
			.push_opt("synonyms_enabled", self.synonyms_enabled)
			.push_repeated("synonym_categories", &self.synonym_categories)
			.push_opt("blacklists_enabled", self.blacklists_enabled)
			.push_repeated("blacklist_categories", &self.blacklist_categories);

		Ok(set)
	}
}

/// Consuming builder for [`QueryProfileParams`].
#[derive(Clone, Debug, Default)]
pub struct QueryProfileParamsBuilder {
	params: QueryProfileParams,
}
impl QueryProfileParamsBuilder {
	/// Sets `description`.
	pub fn description(mut self, value: impl Into<String>) -> Self {
		self.params.description = Some(value.into());

		self
	}

	/// Sets `promotions_enabled`.
	pub fn promotions_enabled(mut self, value: bool) -> Self {
		self.params.promotions_enabled = Some(value);

		self
	}

	/// Sets `promotions_every_page`: show promotions on every results page, not just the first.
	pub fn promotions_every_page(mut self, value: bool) -> Self {
		self.params.promotions_every_page = Some(value);

		self
	}

	/// Sets `promotions_identified`.
	pub fn promotions_identified(mut self, value: bool) -> Self {
		self.params.promotions_identified = Some(value);

		self
	}

	/// Replaces `promotion_categories`.
	pub fn promotion_categories<I, S>(mut self, categories: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.params.promotion_categories = categories.into_iter().map(Into::into).collect();

		self
	}

	/// Sets `synonyms_enabled`.
	pub fn synonyms_enabled(mut self, value: bool) -> Self {
		self.params.synonyms_enabled = Some(value);

		self
	}

	/// Replaces `synonym_categories`.
	pub fn synonym_categories<I, S>(mut self, categories: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.params.synonym_categories = categories.into_iter().map(Into::into).collect();

		self
	}

	/// Sets `blacklists_enabled`.
	pub fn blacklists_enabled(mut self, value: bool) -> Self {
		self.params.blacklists_enabled = Some(value);

		self
	}

	/// Replaces `blacklist_categories`.
	pub fn blacklist_categories<I, S>(mut self, categories: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.params.blacklist_categories = categories.into_iter().map(Into::into).collect();

		self
	}

	/// Freezes the builder into an immutable snapshot.
	pub fn build(self) -> QueryProfileParams {
		self.params
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn categories_repeat_and_empty_lists_vanish() {
		let set = QueryProfileParams::builder()
			.blacklist_categories(["spam"])
			.synonym_categories(Vec::<String>::new())
			.promotion_categories(["Promotions", "Seasonal"])
			.promotions_identified(false)
			.promotions_every_page(false)
			.promotions_enabled(true)
			.build()
			.resolve()
			.expect("Profile params should resolve.");

		assert_eq!(
			set.iter().collect::<Vec<_>>(),
			[
				("promotions_enabled", "true"),
				("promotions_every_page", "false"),
				("promotions_identified", "false"),
				("promotion_categories", "Promotions"),
				("promotion_categories", "Seasonal"),
				("blacklist_categories", "spam"),
			]
		);
		assert!(!set.contains_key("synonym_categories"));
	}
}
