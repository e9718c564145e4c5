use regex::Regex;
use std::sync::OnceLock;

// Opening h1/h2 tags with an id attribute, capture terminated at the first
// quote. Matching is purely syntactic: tags with attributes before the id
// (e.g. `<h1 class="x" id="y">`) do not match and pass through untouched.
static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();

fn heading_regex() -> &'static Regex {
    HEADING_REGEX.get_or_init(|| {
        Regex::new(r#"<h([12]) id="([^"]*)">"#).expect("Invalid heading regex")
    })
}

/// Insert a clickable anchor-link icon after every `<h1 id="...">` and
/// `<h2 id="...">` opening tag, addressed to the heading's own id.
///
/// Pure function of its input: no I/O, no shared state, never fails.
/// NOT idempotent - re-applying to already-decorated output inserts a
/// second anchor, so it must run exactly once per document.
pub fn decorate(html: &str) -> String {
    heading_regex()
        .replace_all(
            html,
            "<h${1} id=\"${2}\"><a class=\"anchor\" aria-hidden=\"true\" href=\"#${2}\">🔗</a>",
        )
        .into_owned()
}
