//! Public base path computation for qualifying emitted asset paths.

use std::path::{Component, Path};

use crate::config::InjectorConfig;

/// Compute the base path prepended to every emitted asset path.
///
/// An explicitly configured public path wins; it is resolved for the current
/// render by substituting a literal `[hash]` placeholder with the build hash.
/// Otherwise the path is derived by walking from the template's output
/// directory back up to the build root. The result is either empty or ends in
/// exactly one `/`.
pub fn compute_public_path(config: &InjectorConfig, build_hash: &str) -> String {
    let raw = match &config.public_path {
        Some(configured) => configured.replace("[hash]", build_hash),
        None => relative_to_build_root(&config.filename),
    };
    normalize_trailing_slash(raw)
}

/// Relative path from the template's output directory back to the build root:
/// one `..` per real directory component of the template's parent.
fn relative_to_build_root(filename: &str) -> String {
    let Some(parent) = Path::new(filename).parent() else {
        return String::new();
    };

    let ups: Vec<&str> = parent
        .components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .map(|_| "..")
        .collect();
    ups.join("/")
}

fn normalize_trailing_slash(mut path: String) -> String {
    if path.is_empty() {
        return path;
    }
    while path.ends_with('/') {
        path.pop();
    }
    path.push('/');
    path
}
