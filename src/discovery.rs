use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Declaration file defining the required getters.
pub const BASE_FILE_NAME: &str = "app_localizations.dart";
/// Reference file providing the English fallback blocks.
pub const REFERENCE_FILE_NAME: &str = "app_localizations_en.dart";

/// Default location of the generated localization files.
pub const DEFAULT_L10N_DIR: &str = "lib/l10n";

/// Lists the per-locale files to patch, sorted by filename so repeated
/// runs process them in the same order. The base declaration file and the
/// English reference file are never patch targets.
pub fn target_locale_files(l10n_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(l10n_dir)
        .with_context(|| format!("Failed to list localization dir {}", l10n_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with("app_localizations_") || !name.ends_with(".dart") {
            continue;
        }
        if name == BASE_FILE_NAME || name == REFERENCE_FILE_NAME {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::Builder;

    fn setup_l10n_dir(names: &[&str]) -> tempfile::TempDir {
        let tmp_dir = Builder::new().prefix("test-discovery").tempdir().unwrap();
        for name in names {
            fs::write(tmp_dir.path().join(name), "").unwrap();
        }
        tmp_dir
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_finds_locale_files_sorted() {
        let tmp_dir = setup_l10n_dir(&[
            "app_localizations_fr.dart",
            "app_localizations_de.dart",
            "app_localizations_es.dart",
        ]);

        let files = target_locale_files(tmp_dir.path()).unwrap();
        assert_eq!(
            file_names(&files),
            vec![
                "app_localizations_de.dart",
                "app_localizations_es.dart",
                "app_localizations_fr.dart",
            ]
        );
    }

    #[test]
    fn test_excludes_base_and_reference_files() {
        let tmp_dir = setup_l10n_dir(&[
            "app_localizations.dart",
            "app_localizations_en.dart",
            "app_localizations_de.dart",
        ]);

        let files = target_locale_files(tmp_dir.path()).unwrap();
        assert_eq!(file_names(&files), vec!["app_localizations_de.dart"]);
    }

    #[test]
    fn test_ignores_unrelated_files() {
        let tmp_dir = setup_l10n_dir(&[
            "app_localizations_de.dart",
            "other_localizations_de.dart",
            "app_localizations_de.dart.bak",
            "README.md",
        ]);

        let files = target_locale_files(tmp_dir.path()).unwrap();
        assert_eq!(file_names(&files), vec!["app_localizations_de.dart"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp_dir = setup_l10n_dir(&[]);
        let missing = tmp_dir.path().join("no_such_dir");
        let result = target_locale_files(&missing);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to list localization dir")
        );
    }

    #[test]
    fn test_empty_directory_yields_no_targets() {
        let tmp_dir = setup_l10n_dir(&[]);
        assert!(target_locale_files(tmp_dir.path()).unwrap().is_empty());
    }
}
