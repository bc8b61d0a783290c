//! Injection of resolved assets into an HTML template string.

mod splice;
mod tags;

use crate::config::{InjectTarget, InjectorConfig};
use crate::models::AssetManifest;

pub use splice::{set_manifest_attribute, splice_into_body, splice_into_head};
pub use tags::{favicon_tag, l20n_tag, script_tag, style_tag};

/// Splice the manifest's assets into the template and return the new HTML.
///
/// Statically configured extra files render before any chunk assets; chunks
/// contribute in manifest insertion order. The favicon, localization and
/// stylesheet tags always land in the head. Script tags land in the head or
/// the body according to `config.inject`, never both.
pub fn inject_assets_into_html(
    manifest: &AssetManifest,
    config: &InjectorConfig,
    html: &str,
) -> String {
    let mut styles = config.files.css.clone();
    let mut scripts = config.files.js.clone();
    let mut l20ns = config.files.l20n.clone();

    for assets in manifest.chunks.values() {
        l20ns.extend(assets.l20n.iter().cloned());
        styles.extend(assets.css.iter().cloned());
        scripts.push(assets.entry.clone());
    }

    let script_tags: Vec<String> = scripts.iter().map(|path| script_tag(path)).collect();

    let mut head: Vec<String> = Vec::new();
    if let Some(favicon) = &manifest.favicon {
        head.push(favicon_tag(favicon));
    }
    head.extend(l20ns.iter().map(|path| l20n_tag(path)));
    head.extend(styles.iter().map(|path| style_tag(path)));

    let mut body: Vec<String> = Vec::new();
    if config.inject == InjectTarget::Head {
        head.extend(script_tags);
    } else {
        body.extend(script_tags);
    }

    let mut html = splice_into_head(html, &head.concat());
    html = splice_into_body(&html, &body.concat());

    if let Some(manifest_path) = &manifest.manifest {
        html = set_manifest_attribute(&html, manifest_path);
    }

    html
}
