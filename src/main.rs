use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use l10n_fallback::cli::Cli;
use l10n_fallback::{blocks, discovery, getters, patcher};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_path = cli.l10n_dir.join(discovery::BASE_FILE_NAME);
    let reference_path = cli.l10n_dir.join(discovery::REFERENCE_FILE_NAME);

    let base_text = fs::read_to_string(&base_path)
        .with_context(|| format!("Failed to read base file {}", base_path.display()))?;
    let reference_text = fs::read_to_string(&reference_path)
        .with_context(|| format!("Failed to read reference file {}", reference_path.display()))?;

    let base_getters = getters::parse_abstract_getters(&base_text);
    let fallback_blocks = blocks::parse_fallback_blocks(&reference_text)
        .with_context(|| format!("Failed to parse {}", reference_path.display()))?;

    let mut total_added = 0;
    let mut changed_files = 0;
    for path in discovery::target_locale_files(&cli.l10n_dir)? {
        let added = patcher::patch_locale_file(&path, &base_getters, &fallback_blocks, cli.dry_run)?;
        if added > 0 {
            changed_files += 1;
            total_added += added;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            println!(
                "{}: added {added} fallback getter(s)",
                style(name).cyan()
            );
        }
    }

    if changed_files == 0 {
        println!("All locale files already implement the current AppLocalizations getters.");
    } else {
        let mode = if cli.dry_run { "would add" } else { "added" };
        println!("Summary: {mode} {total_added} getter(s) across {changed_files} file(s).");
    }

    Ok(())
}
