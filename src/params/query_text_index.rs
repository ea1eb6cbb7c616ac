//! Optional parameters of the Query Text Index operation.

// self
use crate::{
	_prelude::*,
	error::ParameterResolutionError,
	params::{DateBound, ParameterSet, ResolveParameters, ToParameter},
};

def_wire_enum! {
	/// Values of the `print` parameter.
	Print {
		/// Every field.
		All => "all",
		/// Every section of every document.
		AllSections => "all_sections",
		/// Date fields only.
		Date => "date",
		/// Fields named by `print_fields`.
		Fields => "fields",
		/// No fields.
		None => "none",
		/// No result documents.
		NoResults => "no_results",
		/// Parametric fields only.
		Parametric => "parametric",
		/// Reference field only.
		Reference => "reference",
	}
}

def_wire_enum! {
	/// Values of the `highlight` parameter.
	Highlight {
		/// No highlighting.
		Off => "off",
		/// Highlight matching terms.
		Terms => "terms",
		/// Highlight matching sentences.
		Sentences => "sentences",
	}
}

def_wire_enum! {
	/// Values of the `sort` parameter.
	Sort {
		/// Native engine ranking.
		AutnRank => "autn_rank",
		/// Newest first.
		Date => "date",
		/// Unsorted.
		Off => "off",
		/// Most relevant first.
		Relevance => "relevance",
		/// Oldest first.
		ReverseDate => "reverse_date",
		/// Least relevant first.
		ReverseRelevance => "reverse_relevance",
	}
}

def_wire_enum! {
	/// Values of the `summary` parameter.
	Summary {
		/// Summary built around the query terms.
		Context => "context",
		/// Summary of the document's main concepts.
		Concept => "concept",
		/// Leading sentences of the document.
		Quick => "quick",
		/// No summary.
		Off => "off",
	}
}

/// Immutable snapshot of Query Text Index parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryTextIndexParams {
	end_tag: Option<String>,
	field_text: Option<String>,
	highlight: Option<Highlight>,
	absolute_max_results: Option<u32>,
	max_page_results: Option<u32>,
	min_score: Option<u32>,
	print: Option<Print>,
	print_fields: Vec<String>,
	sort: Option<Sort>,
	start: Option<u32>,
	start_tag: Option<String>,
	summary: Option<Summary>,
	total_results: Option<bool>,
	min_date: DateBound,
	max_date: DateBound,
}
impl QueryTextIndexParams {
	/// Starts a new builder with every field unset.
	pub fn builder() -> QueryTextIndexParamsBuilder {
		QueryTextIndexParamsBuilder::default()
	}
}
impl ResolveParameters for QueryTextIndexParams {
	fn resolve(&self) -> Result<ParameterSet, ParameterResolutionError> {
		let mut set = ParameterSet::new();

		set.push_opt("end_tag", self.end_tag.as_ref())
			.push_opt("field_text", self.field_text.as_ref())
			.push_opt("highlight", self.highlight)
			.push_opt("absolute_max_results", self.absolute_max_results)
			.push_opt("max_page_results", self.max_page_results)
			.push_opt("min_score", self.min_score)
			.push_opt("print", self.print)
			.push_joined("print_fields", &self.print_fields)
			.push_opt("sort", self.sort)
			.push_opt("start", self.start)
			.push_opt("start_tag", self.start_tag.as_ref())
			.push_opt("summary", self.summary)
			.push_opt("total_results", self.total_results)
			.push_opt("min_date", self.min_date.resolve().map(|window| window.render()))
			.push_opt("max_date", self.max_date.resolve().map(|window| window.render()));

		Ok(set)
	}
}

/// Consuming builder for [`QueryTextIndexParams`]; setters may be called in any order.
#[derive(Clone, Debug, Default)]
pub struct QueryTextIndexParamsBuilder {
	params: QueryTextIndexParams,
}
impl QueryTextIndexParamsBuilder {
	/// Sets `end_tag`.
	pub fn end_tag(mut self, value: impl Into<String>) -> Self {
		self.params.end_tag = Some(value.into());

		self
	}

	/// Sets `field_text`.
	pub fn field_text(mut self, value: impl Into<String>) -> Self {
		self.params.field_text = Some(value.into());

		self
	}

	/// Sets `highlight`.
	pub fn highlight(mut self, value: Highlight) -> Self {
		self.params.highlight = Some(value);

		self
	}

	/// Sets `absolute_max_results`.
	pub fn absolute_max_results(mut self, value: u32) -> Self {
		self.params.absolute_max_results = Some(value);

		self
	}

	/// Sets `max_page_results`.
	pub fn max_page_results(mut self, value: u32) -> Self {
		self.params.max_page_results = Some(value);

		self
	}

	/// Sets `min_score`.
	pub fn min_score(mut self, value: u32) -> Self {
		self.params.min_score = Some(value);

		self
	}

	/// Sets `print`.
	pub fn print(mut self, value: Print) -> Self {
		self.params.print = Some(value);

		self
	}

	/// Sets `print_fields`; the list is sent comma-joined and omitted when empty.
	pub fn print_fields<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.params.print_fields = fields.into_iter().map(Into::into).collect();

		self
	}

	/// Sets `sort`.
	pub fn sort(mut self, value: Sort) -> Self {
		self.params.sort = Some(value);

		self
	}

	/// Sets `start`.
	pub fn start(mut self, value: u32) -> Self {
		self.params.start = Some(value);

		self
	}

	/// Sets `start_tag`.
	pub fn start_tag(mut self, value: impl Into<String>) -> Self {
		self.params.start_tag = Some(value.into());

		self
	}

	/// Sets `summary`.
	pub fn summary(mut self, value: Summary) -> Self {
		self.params.summary = Some(value);

		self
	}

	/// Sets `total_results`.
	pub fn total_results(mut self, value: bool) -> Self {
		self.params.total_results = Some(value);

		self
	}

	/// Absolute lower bound; beats [`Self::min_date_days`] and [`Self::min_date_seconds`].
	pub fn min_date(mut self, at: OffsetDateTime) -> Self {
		self.params.min_date.at = Some(at);

		self
	}

	/// Lower bound in days; beats [`Self::min_date_seconds`].
	pub fn min_date_days(mut self, days: u64) -> Self {
		self.params.min_date.days = Some(days);

		self
	}

	/// Lower bound in seconds.
	pub fn min_date_seconds(mut self, seconds: u64) -> Self {
		self.params.min_date.seconds = Some(seconds);

		self
	}

	/// Absolute upper bound; beats [`Self::max_date_days`] and [`Self::max_date_seconds`].
	pub fn max_date(mut self, at: OffsetDateTime) -> Self {
		self.params.max_date.at = Some(at);

		self
	}

	/// Upper bound in days; beats [`Self::max_date_seconds`].
	pub fn max_date_days(mut self, days: u64) -> Self {
		self.params.max_date.days = Some(days);

		self
	}

	/// Upper bound in seconds.
	pub fn max_date_seconds(mut self, seconds: u64) -> Self {
		self.params.max_date.seconds = Some(seconds);

		self
	}

	/// Freezes the builder into an immutable snapshot.
	pub fn build(self) -> QueryTextIndexParams {
		self.params
	}
}
