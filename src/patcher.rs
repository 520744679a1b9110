//! Patches a single locale file: makes an accidentally-abstract locale
//! class concrete, finds which required getters it is missing, and splices
//! the English fallback blocks in just before the class closing brace.
//!
//! The patcher only ever adds getters that are provably absent by name
//! scan; it never removes or rewrites an existing implementation, so a
//! second run over an already-patched file is a no-op.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::blocks::GETTER_IMPL_NAME_RE;
use crate::error::PatchError;

/// Matches a generated per-locale class that was erroneously left
/// abstract, e.g. `abstract class AppLocalizationsDe extends
/// AppLocalizations {`. Deliberately keyed on the generated naming
/// pattern; this is not a general abstractness toggle.
static ABSTRACT_CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^abstract class (AppLocalizations\w+) extends AppLocalizations \{$")
        .expect("Invalid regex")
});

/// Rewrites an abstract per-locale class declaration to the concrete
/// form. Idempotent: the pattern only matches the abstract form.
fn make_concrete(text: &str) -> String {
    ABSTRACT_CLASS_RE
        .replace_all(text, "class $1 extends AppLocalizations {")
        .into_owned()
}

/// Names of all getter implementations already present in the text,
/// found with the same pattern the block extractor keys on.
fn existing_getters(text: &str) -> HashSet<String> {
    GETTER_IMPL_NAME_RE
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Indents a fallback block by one class-body level.
fn indent_block(block: &str) -> String {
    format!("  {}", block.replace('\n', "\n  "))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Patches one locale file and returns how many getters were added.
///
/// Missing getters are resolved against `fallback_blocks` before anything
/// is written; if any have no block, the error names every unresolved
/// getter for this file at once. Under `dry_run` all detection and
/// validation still runs, but nothing is written.
pub fn patch_locale_file(
    path: &Path,
    base_getters: &[String],
    fallback_blocks: &HashMap<String, String>,
    dry_run: bool,
) -> Result<usize> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file {}", path.display()))?;

    let text = make_concrete(&text);

    let existing = existing_getters(&text);
    let missing: Vec<&String> = base_getters
        .iter()
        .filter(|getter| !existing.contains(getter.as_str()))
        .collect();

    if missing.is_empty() {
        if !dry_run {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        return Ok(0);
    }

    let mut missing_blocks = Vec::new();
    let mut unresolved = Vec::new();
    for getter in &missing {
        match fallback_blocks.get(getter.as_str()) {
            Some(block) => missing_blocks.push(indent_block(block)),
            None => unresolved.push((*getter).clone()),
        }
    }

    if !unresolved.is_empty() {
        return Err(PatchError::UnresolvedGetters {
            file: display_name(path),
            names: unresolved,
        }
        .into());
    }

    let insert_at = text.rfind('}').ok_or_else(|| PatchError::MissingClosingBrace {
        file: display_name(path),
    })?;

    let addition = format!("\n\n{}\n", missing_blocks.join("\n\n"));
    let new_text = format!(
        "{}{}{}",
        text[..insert_at].trim_end(),
        addition,
        &text[insert_at..]
    );

    if !dry_run {
        fs::write(path, &new_text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(missing.len())
}
