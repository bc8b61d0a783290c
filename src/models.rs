//! Data structures exchanged between the bundler, the asset resolver and the injector.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata describing one output chunk produced by the bundling pass.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChunkDescriptor {
    /// Numeric chunk identifier assigned by the bundler.
    pub id: i64,
    /// Candidate names for the chunk; the first one is the canonical name.
    pub names: Vec<String>,
    /// Whether the chunk corresponds to a top-level build entry point.
    pub entry: bool,
    /// Total byte size of the chunk.
    pub size: u64,
    /// Output file paths in emission order; the first is the entry file.
    /// Files may carry query-string cache tokens (`main.css?1e7cac4e`).
    pub files: Vec<String>,
}

/// Snapshot of a completed build, as dumped by the bundler after compiling.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BuildStats {
    /// Hash of the whole compilation, used for cache busting.
    pub hash: String,
    /// Every chunk produced by the build.
    pub chunks: Vec<ChunkDescriptor>,
    /// Every output filename produced by the build, chunk-owned or not.
    pub assets: Vec<String>,
}

impl BuildStats {
    /// Load a stats snapshot from a JSON dump on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read build stats at {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse build stats at {}", path.display()))
    }
}

/// Assets belonging to a single named chunk.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChunkAssets {
    /// Canonical entry file for the chunk, public-path qualified.
    pub entry: String,
    /// Byte size of the chunk.
    pub size: u64,
    /// Stylesheets emitted for the chunk.
    pub css: Vec<String>,
    /// Localization resources emitted for the chunk.
    pub l20n: Vec<String>,
}

/// Normalized view of a build's assets, rebuilt fresh on every template render.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssetManifest {
    /// Per-chunk assets, keyed by chunk name in resolved chunk order.
    pub chunks: IndexMap<String, ChunkAssets>,
    /// Entry files of every included chunk, in resolved chunk order.
    pub js: Vec<String>,
    /// All stylesheets across chunks, deduplicated, first occurrence first.
    pub css: Vec<String>,
    /// All localization resources across chunks, deduplicated.
    pub l20n: Vec<String>,
    /// Public-path-qualified favicon location, when one is configured.
    pub favicon: Option<String>,
    /// Appcache manifest filename, when the build produced one.
    pub manifest: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::BuildStats;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_stats_dump_with_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.json");
        fs::write(
            &path,
            r#"{"hash":"abc123","chunks":[{"id":0,"names":["main"],"files":["main.js"]}]}"#,
        )
        .unwrap();

        let stats = BuildStats::from_path(&path).unwrap();
        assert_eq!(stats.hash, "abc123");
        assert_eq!(stats.chunks.len(), 1);
        assert!(!stats.chunks[0].entry);
        assert!(stats.assets.is_empty());
    }

    #[test]
    fn missing_stats_file_names_path_in_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = BuildStats::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}
