//! Rendering of asset paths into markup fragments.

use crate::assets::L20N_MARKER;

/// Render a script path as a script tag.
pub fn script_tag(path: &str) -> String {
    format!(r#"<script src="{path}"></script>"#)
}

/// Render a stylesheet path as a link tag.
pub fn style_tag(path: &str) -> String {
    format!(r#"<link href="{path}" rel="stylesheet">"#)
}

/// Render a favicon path as a shortcut icon link tag.
pub fn favicon_tag(path: &str) -> String {
    format!(r#"<link rel="shortcut icon" href="{path}">"#)
}

/// Render a localization resource as markup.
///
/// Inline `l20n!name=value` directives become meta tags; the remainder after
/// the marker is split on the first `=`, and a missing value renders as empty
/// content. Everything else becomes a localization link tag.
pub fn l20n_tag(path: &str) -> String {
    match path.strip_prefix(L20N_MARKER) {
        Some(directive) => {
            let (name, content) = directive.split_once('=').unwrap_or((directive, ""));
            format!(r#"<meta name="{name}" content="{content}">"#)
        }
        None => format!(r#"<link rel="localization" href="{path}">"#),
    }
}
