/// A literal search/replace pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
	/// Text to find.
	pub search: &'static str,

	/// Text substituted for every occurrence of `search`.
	pub replace: &'static str,
}

impl Replacement {
	pub const fn new(search: &'static str, replace: &'static str) -> Self {
		Replacement { search, replace }
	}

	/// Replace every occurrence of this rule's search text in `input`.
	pub fn apply(&self, input: &str) -> String {
		input.replace(self.search, self.replace)
	}

	/// Whether this rule would change `input`.
	pub fn matches(&self, input: &str) -> bool {
		input.contains(self.search)
	}
}

/// Rules that point hardcoded development endpoints at `API_BASE_URL`.
///
/// Order matters: each rule scans the output of the previous one.
pub const API_REPLACEMENTS: [Replacement; 6] = [
	Replacement::new("fetch('/api", "fetch(API_BASE_URL + '/api"),
	Replacement::new("fetch(\"/api", "fetch(API_BASE_URL + \"/api"),
	Replacement::new("fetch('http://localhost:5000", "fetch(API_BASE_URL + '"),
	Replacement::new("fetch(\"http://localhost:5000", "fetch(API_BASE_URL + \""),
	Replacement::new("url: 'http://localhost:5000", "url: API_BASE_URL + '"),
	Replacement::new("url: \"http://localhost:5000", "url: API_BASE_URL + \""),
];

/// Apply `rules` left to right, each over the current content.
pub fn apply_replacements(content: &str, rules: &[Replacement]) -> String {
	rules.iter().fold(content.to_string(), |acc, rule| {
		if rule.matches(&acc) {
			rule.apply(&acc)
		} else {
			acc
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fetch_relative_api_single_quote() {
		let out = apply_replacements("fetch('/api/users')", &API_REPLACEMENTS);
		assert_eq!(out, "fetch(API_BASE_URL + '/api/users')");
	}

	#[test]
	fn test_fetch_relative_api_double_quote() {
		let out = apply_replacements(r#"fetch("/api/users")"#, &API_REPLACEMENTS);
		assert_eq!(out, r#"fetch(API_BASE_URL + "/api/users")"#);
	}

	#[test]
	fn test_fetch_localhost_drops_origin() {
		let out = apply_replacements(
			r#"fetch("http://localhost:5000/status")"#,
			&API_REPLACEMENTS,
		);
		assert_eq!(out, r#"fetch(API_BASE_URL + "/status")"#);

		let out = apply_replacements("fetch('http://localhost:5000/api/x')", &API_REPLACEMENTS);
		assert_eq!(out, "fetch(API_BASE_URL + '/api/x')");
	}

	#[test]
	fn test_url_property() {
		let input = "$.ajax({ url: 'http://localhost:5000/api/items', method: 'GET' });\n\
		             $.ajax({ url: \"http://localhost:5000/api/other\" });";
		let out = apply_replacements(input, &API_REPLACEMENTS);
		assert_eq!(
			out,
			"$.ajax({ url: API_BASE_URL + '/api/items', method: 'GET' });\n\
			 $.ajax({ url: API_BASE_URL + \"/api/other\" });"
		);
	}

	#[test]
	fn test_replaces_every_occurrence() {
		let input = "fetch('/api/a'); fetch('/api/b'); fetch('/api/c');";
		let out = apply_replacements(input, &API_REPLACEMENTS);
		assert_eq!(out.matches("API_BASE_URL").count(), 3);
	}

	#[test]
	fn test_no_match_leaves_content_unchanged() {
		let input = "const x = 5;";
		assert_eq!(apply_replacements(input, &API_REPLACEMENTS), input);
		assert!(API_REPLACEMENTS.iter().all(|r| !r.matches(input)));
	}

	#[test]
	fn test_localhost_mid_string_still_replaced_literally() {
		// The literal fires wherever it appears after the prefix, port path included.
		let out = apply_replacements("fetch('http://localhost:50001/x')", &API_REPLACEMENTS);
		assert_eq!(out, "fetch(API_BASE_URL + '1/x')");
	}

	#[test]
	fn test_unrelated_localhost_untouched() {
		let input = "const base = 'http://localhost:5000';";
		assert_eq!(apply_replacements(input, &API_REPLACEMENTS), input);
	}

	#[test]
	fn test_replacements_are_idempotent() {
		let input = "fetch('/api/a');\nfetch(\"http://localhost:5000/b\");\nurl: 'http://localhost:5000/c'";
		let once = apply_replacements(input, &API_REPLACEMENTS);
		let twice = apply_replacements(&once, &API_REPLACEMENTS);
		assert_eq!(once, twice);
	}

	#[test]
	fn test_rules_apply_in_order() {
		let rules = [Replacement::new("a", "b"), Replacement::new("b", "c")];
		assert_eq!(apply_replacements("a", &rules), "c");

		let reversed = [Replacement::new("b", "c"), Replacement::new("a", "b")];
		assert_eq!(apply_replacements("a", &reversed), "b");
	}
}
