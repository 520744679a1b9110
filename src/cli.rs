use std::path::PathBuf;

use clap::Parser;

use crate::discovery;

/// Adds English fallback getters to non-English localization files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Report missing getters without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Directory containing the generated localization files
    #[arg(long, default_value = discovery::DEFAULT_L10N_DIR)]
    pub l10n_dir: PathBuf,
}
