//! Local download of generated text
//!
//! The server never stores generated artifacts for the client; saving the
//! returned text to disk is the client-side "Download Result" action.

use crate::model::Feature;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Save generated text under the download directory
///
/// The filename combines the patent stem, the feature key, and a timestamp,
/// e.g. `my_patent_swot_analysis_20260826_141503.txt`.
pub fn save_generated_text(
    download_dir: &Path,
    patent: &str,
    feature: Feature,
    text: &str,
) -> Result<PathBuf> {
    if !download_dir.exists() {
        fs::create_dir_all(download_dir).with_context(|| {
            format!(
                "Failed to create download directory: {}",
                download_dir.display()
            )
        })?;
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!(
        "{}_{}_{}.txt",
        sanitize_stem(patent),
        feature.key(),
        timestamp
    );

    let path = download_dir.join(filename);
    fs::write(&path, text)
        .with_context(|| format!("Failed to write result file: {}", path.display()))?;

    Ok(path)
}

/// Reduce a patent filename to a filesystem-safe stem
fn sanitize_stem(patent: &str) -> String {
    let stem = patent
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(patent);

    let cleaned: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if cleaned.trim_matches('_').is_empty() {
        "patent".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_sanitize_stem() {
        assert_eq!(sanitize_stem("my patent (v2).pdf"), "my_patent__v2_");
        assert_eq!(sanitize_stem("simple.pdf"), "simple");
        assert_eq!(sanitize_stem("no_extension"), "no_extension");
        assert_eq!(sanitize_stem("...."), "patent");
    }

    #[test]
    fn test_save_generated_text_writes_file() {
        let dir = env::temp_dir().join("patent-tui-test-download");
        let path = save_generated_text(&dir, "foo.pdf", Feature::OnePager, "generated body")
            .expect("save should succeed");

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("foo_one_pager_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "generated body");

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }
}
