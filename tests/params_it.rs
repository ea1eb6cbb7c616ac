#![cfg(feature = "test")]

// crates.io
use time::macros;
// self
use hod_client::{
	_preludet::*,
	auth::{ResourceName, TokenKind},
	params::{
		DatePeriod, Highlight, ParameterSet, ParametricSort, ParametricValuesParams, Print,
		QueryProfileParams, QueryTextIndexParams, Sort, Summary, resolve_parameters,
	},
	request::Verb,
	service::{QueryProfileService, TextIndexService},
};

fn text_index() -> TextIndexService {
	TextIndexService::new(&production_config())
}

fn query_profiles() -> QueryProfileService {
	QueryProfileService::new(&production_config())
}

fn resolve(params: &QueryTextIndexParams) -> ParameterSet {
	resolve_parameters(params).expect("Query text index params should resolve.")
}

#[test]
fn absolute_date_beats_day_count() {
	let set = resolve(
		&QueryTextIndexParams::builder()
			.min_date_days(30)
			.min_date(macros::datetime!(2014-06-01 12:30:00 UTC))
			.min_date_seconds(5)
			.build(),
	);

	assert_eq!(set.get("min_date"), Some("12:30:00 01/06/2014 AD"));
	assert_eq!(set.get_all("min_date").count(), 1);
	assert!(!set.contains_key("max_date"));
}

#[test]
fn day_count_beats_second_count() {
	let set =
		resolve(&QueryTextIndexParams::builder().max_date_seconds(60).max_date_days(2).build());

	assert_eq!(set.get("max_date"), Some("2"));
}

#[test]
fn only_second_counts_carry_a_suffix() {
	let set = resolve(&QueryTextIndexParams::builder().max_date_seconds(86_400).build());

	assert_eq!(set.get("max_date"), Some("86400s"));
	assert!(!set.contains_key("min_date"));

	let set = resolve(&QueryTextIndexParams::builder().min_date_seconds(86_400).build());

	assert_eq!(set.get("min_date"), Some("86400s"));
	assert!(!set.contains_key("max_date"));
}

#[test]
fn unset_fields_never_appear() {
	let set = resolve(&QueryTextIndexParams::builder().print(Print::Fields).build());

	assert_eq!(set.iter().collect::<Vec<_>>(), [("print", "fields")]);
}

#[test]
fn builder_order_does_not_matter() {
	let forward = QueryTextIndexParams::builder()
		.sort(Sort::Date)
		.summary(Summary::Context)
		.highlight(Highlight::Sentences)
		.build();
	let backward = QueryTextIndexParams::builder()
		.highlight(Highlight::Sentences)
		.summary(Summary::Context)
		.sort(Sort::Date)
		.build();

	assert_eq!(forward, backward);
	assert_eq!(resolve(&forward), resolve(&backward));
}

#[test]
fn query_text_index_request_renders_text_indexes_then_params() {
	let params = QueryTextIndexParams::builder()
		.absolute_max_results(50)
		.print_fields(["title", "url"])
		.total_results(true)
		.build();
	let request = text_index()
		.query_text_index(
			"cats & dogs",
			["wiki_eng", "news_eng"],
			&params,
			&fixture_token(TokenKind::HmacSha1),
		)
		.expect("Query text index request should build.");

	assert_eq!(request.verb(), Verb::Get);
	assert_eq!(request.path(), "/2/api/sync/textindex/query/search/v1");
	assert_eq!(
		request.query_params().iter().collect::<Vec<_>>(),
		[
			("text", "cats & dogs"),
			("indexes", "wiki_eng"),
			("indexes", "news_eng"),
			("absolute_max_results", "50"),
			("print_fields", "title,url"),
			("total_results", "true"),
		]
	);
	assert!(request.body().is_none());
	assert!(request.token().starts_with("UNB:HMAC_SHA1:my-token-id::"));
}

#[test]
fn parametric_values_request_repeats_fields_and_indexes() {
	let profile = ResourceName::parse_parts("MY-DOMAIN", "my-profile")
		.expect("Resource name fixture should be valid.");
	let params = ParametricValuesParams::builder()
		.sort(ParametricSort::DocumentCount)
		.min_score(0.5)
		.query_profile(profile)
		.date_period(DatePeriod::Week)
		.build();
	let request = text_index()
		.parametric_values(
			["CATEGORY", "AUTHOR"],
			[ResourceName::parse_parts("MY-DOMAIN", "index").expect("Index name should be valid.")],
			&params,
			&fixture_token(TokenKind::Simple),
		)
		.expect("Parametric values request should build.");

	assert_eq!(request.path(), "/2/api/sync/textindex/query/parametricvalues/v1");
	assert_eq!(
		request.query_params().iter().collect::<Vec<_>>(),
		[
			("field_name", "CATEGORY"),
			("field_name", "AUTHOR"),
			("indexes", "MY-DOMAIN:index"),
			("min_score", "0.5"),
			("sort", "document_count"),
			("query_profile", "MY-DOMAIN:my-profile"),
			("date_period", "week"),
		]
	);
}

#[test]
fn query_profile_update_sends_form_body_over_put() {
	let params = QueryProfileParams::builder()
		.description("Search profile")
		.promotions_enabled(true)
		.promotion_categories(["Promotions"])
		.build();
	let request = query_profiles()
		.update("search-profile", "MY-DOMAIN:qmi", &params, &fixture_token(TokenKind::HmacSha1))
		.expect("Update request should build.");

	assert_eq!(request.verb(), Verb::Put);
	assert_eq!(request.path(), "/2/api/sync/queryprofile/search-profile/v1");
	assert_eq!(request.token(), "UNB:HMAC_SHA1:my-token-id::EeDR3SMBYkWeyOiLNEQtLmGLgQA");
	assert_eq!(
		request.body_params().iter().collect::<Vec<_>>(),
		[
			("query_manipulation_index", "MY-DOMAIN:qmi"),
			("description", "Search profile"),
			("promotions_enabled", "true"),
			("promotion_categories", "Promotions"),
		]
	);
	assert!(request.url().query().is_none());
}

#[test]
fn query_profile_names_are_percent_encoded_before_signing() {
	let token = fixture_token(TokenKind::HmacSha1);
	let delete = query_profiles().delete("my profile", &token).expect("Delete should build.");
	let retrieve = query_profiles().retrieve("my profile", &token).expect("Retrieve should build.");

	assert_eq!(delete.path(), "/2/api/sync/queryprofile/my%20profile/v1");
	assert_eq!(delete.token(), "UNB:HMAC_SHA1:my-token-id::kqtfS0tQMaNzKn8w7fy57prBOCE");
	assert_eq!(retrieve.verb(), Verb::Get);
	assert_ne!(retrieve.token(), delete.token());

	let create = query_profiles()
		.create("my profile", "qmi", &QueryProfileParams::default(), &token)
		.expect("Create should build.");

	assert_eq!(create.verb(), Verb::Post);
	assert_eq!(
		create.body_params().iter().collect::<Vec<_>>(),
		[("query_manipulation_index", "qmi")]
	);
}
