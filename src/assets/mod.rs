//! Resolution of build output metadata into a normalized asset manifest.
//!
//! The responsibilities are split into focused submodules so that public path
//! derivation and file classification can be tested independently of the main
//! transform. [`resolve_assets`] runs once per template render and its result
//! is discarded after injection.

mod classify;
mod public_path;

use std::collections::BTreeSet;
use std::path::Path;

use crate::config::InjectorConfig;
use crate::models::{AssetManifest, BuildStats, ChunkAssets, ChunkDescriptor};

pub use classify::{is_appcache, is_localization, is_stylesheet, L20N_MARKER};
pub use public_path::compute_public_path;

/// Derive the asset manifest for one render of the template.
///
/// Chunks are visited with non-entry chunks first and entry chunks last, each
/// group ordered by descending id, so that entry files render last in the
/// flattened lists. Chunks without a name cannot be referenced and are
/// skipped, as are chunks rejected by the optional include/exclude name
/// filters. Malformed input degrades to omitted values; this is a best-effort
/// transform, not a validating parser.
pub fn resolve_assets(
    stats: &BuildStats,
    config: &InjectorConfig,
    included: Option<&[String]>,
    excluded: Option<&[String]>,
) -> AssetManifest {
    let public_path = compute_public_path(config, &stats.hash);

    let mut manifest = AssetManifest {
        favicon: config
            .favicon
            .as_deref()
            .map(|favicon| format!("{public_path}{}", file_basename(favicon))),
        manifest: stats
            .assets
            .iter()
            .find(|asset| is_appcache(asset))
            .cloned(),
        ..AssetManifest::default()
    };

    if config.hash {
        manifest.favicon = manifest
            .favicon
            .take()
            .map(|path| append_hash(path, &stats.hash));
        manifest.manifest = manifest
            .manifest
            .take()
            .map(|path| append_hash(path, &stats.hash));
    }

    let mut chunks: Vec<&ChunkDescriptor> = stats.chunks.iter().collect();
    chunks.sort_by(|a, b| a.entry.cmp(&b.entry).then(b.id.cmp(&a.id)));

    for chunk in chunks {
        // A chunk without a name cannot be referenced from a template.
        let Some(name) = chunk.names.first() else {
            continue;
        };
        if included.is_some_and(|names| !names.contains(name)) {
            continue;
        }
        if excluded.is_some_and(|names| names.contains(name)) {
            continue;
        }

        let files: Vec<String> = chunk
            .files
            .iter()
            .map(|file| {
                let qualified = format!("{public_path}{file}");
                if config.hash {
                    append_hash(qualified, &stats.hash)
                } else {
                    qualified
                }
            })
            .collect();

        // The bundler emits one file per chunk plus adjacent artifacts such
        // as source maps; only the first file is the runnable entry.
        let Some(entry) = files.first().cloned() else {
            continue;
        };

        let css: Vec<String> = files
            .iter()
            .filter(|file| is_stylesheet(file))
            .cloned()
            .collect();
        let l20n: Vec<String> = files
            .iter()
            .filter(|file| is_localization(file))
            .cloned()
            .collect();

        manifest.js.push(entry.clone());
        manifest.css.extend(css.iter().cloned());
        manifest.l20n.extend(l20n.iter().cloned());
        manifest.chunks.insert(
            name.clone(),
            ChunkAssets {
                entry,
                size: chunk.size,
                css,
                l20n,
            },
        );
    }

    // More than one chunk may pull in the same stylesheet or resource.
    manifest.css = dedup_preserving_order(manifest.css);
    manifest.l20n = dedup_preserving_order(manifest.l20n);

    manifest
}

/// Append the build hash as a query-string cache-busting token.
fn append_hash(path: String, hash: &str) -> String {
    format!("{path}?{hash}")
}

fn file_basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
