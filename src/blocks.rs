//! Extracts verbatim `@override` getter blocks from the English reference
//! localization file.
//!
//! Generated files mix two styles:
//! - single-line: `@override String get foo => 'bar';`
//! - wrapped: `@override` on its own line, with the getter signature (and
//!   possibly the value expression) continuing on the following lines.
//!
//! The scan is deliberately kept as three explicit phases (find the
//! `@override` marker, find the name-bearing line, find the terminating
//! `;`) rather than one combined regex, so each wrapped style stays
//! independently testable.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PatchError;

/// Matches the name-bearing line of a getter implementation,
/// e.g. `String get appTitle =>`.
pub static GETTER_IMPL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"String get (\w+)\s*=>").expect("Invalid regex"));

/// Returns a map from getter name to its full `@override` block, taken
/// verbatim from the reference text (trailing whitespace trimmed).
///
/// An `@override` marker with no getter signature after it is skipped (it
/// may annotate a non-getter member). A block whose value expression never
/// reaches a `;` before the end of the file is a structural defect in the
/// reference data and fails the run.
pub fn parse_fallback_blocks(reference_text: &str) -> Result<HashMap<String, String>, PatchError> {
    let mut blocks = HashMap::new();
    let lines: Vec<&str> = reference_text.lines().collect();

    let mut i = 0;
    while i < lines.len() {
        if !lines[i].contains("@override") {
            i += 1;
            continue;
        }

        // Phase 2: the getter signature may sit on this line or a later one.
        let start = i;
        let mut name = None;
        let mut j = i;
        while j < lines.len() {
            if let Some(cap) = GETTER_IMPL_NAME_RE.captures(lines[j]) {
                name = Some(cap[1].to_string());
                break;
            }
            j += 1;
        }
        let Some(name) = name else {
            i += 1;
            continue;
        };

        // Phase 3: the value expression may wrap over several lines.
        let mut k = j;
        while k < lines.len() && !lines[k].contains(';') {
            k += 1;
        }
        if k >= lines.len() {
            return Err(PatchError::UnterminatedBlock { name });
        }

        let block = lines[start..=k].join("\n").trim_end().to_string();
        blocks.insert(name, block);
        i = k + 1;
    }

    Ok(blocks)
}
