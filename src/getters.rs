use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an abstract getter declaration in the base localization class,
/// e.g. `  String get appTitle;`. The whole line must match, modulo
/// surrounding whitespace; getters with a body never end in `;` on the
/// declaration line and are therefore excluded.
static ABSTRACT_GETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*String get (\w+);\s*$").expect("Invalid regex"));

/// Returns the names of all abstract getters declared in the base file,
/// in document order. An empty result is not an error.
pub fn parse_abstract_getters(base_text: &str) -> Vec<String> {
    ABSTRACT_GETTER_RE
        .captures_iter(base_text)
        .map(|cap| cap[1].to_string())
        .collect()
}
