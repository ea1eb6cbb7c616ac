//! Optional parameters of the Get Parametric Values operation.

// self
use crate::{
	_prelude::*,
	auth::ResourceName,
	error::ParameterResolutionError,
	params::{ParameterSet, ResolveParameters, ToParameter},
};

def_wire_enum! {
	/// Values of the parametric `sort` parameter.
	ParametricSort {
		/// Most frequent values first.
		DocumentCount => "document_count",
		/// Alphabetical order.
		Alphabetical => "alphabetical",
		/// Reverse alphabetical order.
		ReverseAlphabetical => "reverse_alphabetical",
		/// Ascending numeric order.
		NumberIncreasing => "number_increasing",
		/// Descending numeric order.
		NumberDecreasing => "number_decreasing",
		/// Unsorted.
		Off => "off",
	}
}

def_wire_enum! {
	/// Values of the `date_period` parameter.
	DatePeriod {
		/// Bucket by second.
		Second => "second",
		/// Bucket by minute.
		Minute => "minute",
		/// Bucket by hour.
		Hour => "hour",
		/// Bucket by day.
		Day => "day",
		/// Bucket by week.
		Week => "week",
		/// Bucket by month.
		Month => "month",
		/// Bucket by year.
		Year => "year",
	}
}

/// `min_score` accepts either an integer or a decimal.
///
/// Decimals always render with a fractional part (`1.0`), integers never do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MinScore {
	/// Whole-number score.
	Integer(i64),
	/// Fractional score.
	Decimal(f64),
}
impl From<i64> for MinScore {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}
impl From<i32> for MinScore {
	fn from(value: i32) -> Self {
		Self::Integer(value.into())
	}
}
impl From<f64> for MinScore {
	fn from(value: f64) -> Self {
		Self::Decimal(value)
	}
}
impl ToParameter for MinScore {
	fn to_parameter(&self) -> String {
		match self {
			MinScore::Integer(value) => value.to_string(),
			MinScore::Decimal(value) if value.fract() == 0.0 => format!("{value:.1}"),
			MinScore::Decimal(value) => value.to_string(),
		}
	}
}

/// Immutable snapshot of Get Parametric Values parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParametricValuesParams {
	text: Option<String>,
	field_text: Option<String>,
	max_values: Option<u32>,
	min_score: Option<MinScore>,
	document_count: Option<bool>,
	sort: Option<ParametricSort>,
	query_profile: Option<ResourceName>,
	security_info: Option<String>,
	total_values: Option<bool>,
	nest_field_results: Option<bool>,
	date_period: Option<DatePeriod>,
}
impl ParametricValuesParams {
	/// Starts a new builder with every field unset.
	pub fn builder() -> ParametricValuesParamsBuilder {
		ParametricValuesParamsBuilder::default()
	}
}
impl ResolveParameters for ParametricValuesParams {
	fn resolve(&self) -> Result<ParameterSet, ParameterResolutionError> {
		if let Some(MinScore::Decimal(value)) = self.min_score
			&& !value.is_finite()
		{
			return Err(ParameterResolutionError::InvalidField {
				field: "min_score",
				reason: format!("{value} is not a finite number"),
			});
		}

		let mut set = ParameterSet::new();

		set.push_opt("text", self.text.as_ref())
			.push_opt("field_text", self.field_text.as_ref())
			.push_opt("max_values", self.max_values)
			.push_opt("min_score", self.min_score)
			.push_opt("document_count", self.document_count)
			.push_opt("sort", self.sort)
			.push_opt("query_profile", self.query_profile.as_ref())
			.push_opt("security_info", self.security_info.as_ref())
			.push_opt("total_values", self.total_values)
			.push_opt("nest_field_results", self.nest_field_results)
			.push_opt("date_period", self.date_period);

		Ok(set)
	}
}

/// Consuming builder for [`ParametricValuesParams`].
#[derive(Clone, Debug, Default)]
pub struct ParametricValuesParamsBuilder {
	params: ParametricValuesParams,
}
impl ParametricValuesParamsBuilder {
	/// Sets `text`.
	pub fn text(mut self, value: impl Into<String>) -> Self {
		self.params.text = Some(value.into());

		self
	}

	/// Sets `field_text`.
	pub fn field_text(mut self, value: impl Into<String>) -> Self {
		self.params.field_text = Some(value.into());

		self
	}

	/// Sets `max_values`.
	pub fn max_values(mut self, value: u32) -> Self {
		self.params.max_values = Some(value);

		self
	}

	/// Sets `min_score` from an integer or a decimal.
	pub fn min_score(mut self, value: impl Into<MinScore>) -> Self {
		self.params.min_score = Some(value.into());

		self
	}

	/// Sets `document_count`.
	pub fn document_count(mut self, value: bool) -> Self {
		self.params.document_count = Some(value);

		self
	}

	/// Sets `sort`.
	pub fn sort(mut self, value: ParametricSort) -> Self {
		self.params.sort = Some(value);

		self
	}

	/// Sets `query_profile`.
	pub fn query_profile(mut self, value: ResourceName) -> Self {
		self.params.query_profile = Some(value);

		self
	}

	/// Sets `security_info`.
	pub fn security_info(mut self, value: impl Into<String>) -> Self {
		self.params.security_info = Some(value.into());

		self
	}

	/// Sets `total_values`.
	pub fn total_values(mut self, value: bool) -> Self {
		self.params.total_values = Some(value);

		self
	}

	/// Sets `nest_field_results`.
	pub fn nest_field_results(mut self, value: bool) -> Self {
		self.params.nest_field_results = Some(value);

		self
	}

	/// Sets `date_period`.
	pub fn date_period(mut self, value: DatePeriod) -> Self {
		self.params.date_period = Some(value);

		self
	}

	/// Freezes the builder into an immutable snapshot.
	pub fn build(self) -> ParametricValuesParams {
		self.params
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn min_score_accepts_integers_and_decimals() {
		let integer = ParametricValuesParams::builder()
			.min_score(5_i64)
			.build()
			.resolve()
			.expect("Integer score should resolve.");
		let decimal = ParametricValuesParams::builder()
			.min_score(0.25)
			.build()
			.resolve()
			.expect("Decimal score should resolve.");

		assert_eq!(integer.get("min_score"), Some("5"));
		assert_eq!(decimal.get("min_score"), Some("0.25"));
	}

	#[test]
	fn whole_decimals_keep_their_fraction() {
		assert_eq!(MinScore::Decimal(1.0).to_parameter(), "1.0");
		assert_eq!(MinScore::Decimal(-3.0).to_parameter(), "-3.0");
		assert_eq!(MinScore::Integer(1).to_parameter(), "1");
	}

	#[test]
	fn non_finite_scores_are_rejected() {
		let err = ParametricValuesParams::builder()
			.min_score(f64::NAN)
			.build()
			.resolve()
			.expect_err("NaN should be rejected.");

		assert!(matches!(err, ParameterResolutionError::InvalidField { field: "min_score", .. }));
	}

	#[test]
	fn fields_render_in_schema_order() {
		let profile = ResourceName::parse_parts("MY-DOMAIN", "profile")
			.expect("Resource name fixture should be valid.");
		let set = ParametricValuesParams::builder()
			.date_period(DatePeriod::Month)
			.query_profile(profile)
			.sort(ParametricSort::ReverseAlphabetical)
			.text("cats")
			.max_values(10)
			.build()
			.resolve()
			.expect("Params should resolve.");

		assert_eq!(
			set.iter().collect::<Vec<_>>(),
			[
				("text", "cats"),
				("max_values", "10"),
				("sort", "reverse_alphabetical"),
				("query_profile", "MY-DOMAIN:profile"),
				("date_period", "month"),
			]
		);
	}
}
