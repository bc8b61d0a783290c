//! Classification of chunk output files into stylesheets and localization resources.

use std::sync::OnceLock;

use regex::Regex;

/// Marker prefix for inline localization directives (`l20n!name=value`).
pub const L20N_MARKER: &str = "l20n!";

fn css_extension() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Emitted names may carry a content-hash query, e.g. `main.css?1e7cac4e`.
    PATTERN.get_or_init(|| Regex::new(r"\.css($|\?)").expect("invalid css regex"))
}

fn json_extension() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\.json($|\?)").expect("invalid json regex"))
}

/// Whether an emitted file is a stylesheet, tolerating a trailing query string.
pub fn is_stylesheet(file: &str) -> bool {
    css_extension().is_match(file)
}

/// Whether an emitted file is a localization resource.
///
/// Matches JSON resource files by extension, and inline directives by the
/// `l20n!` marker prefix. The prefix check runs against the public-path
/// qualified value, so a non-empty public path defeats it; this mirrors the
/// upstream plugin behaviour and is kept as-is for compatibility.
pub fn is_localization(file: &str) -> bool {
    json_extension().is_match(file) || file.starts_with(L20N_MARKER)
}

/// Whether a produced asset filename is an appcache manifest.
pub fn is_appcache(asset: &str) -> bool {
    std::path::Path::new(asset)
        .extension()
        .is_some_and(|ext| ext == "appcache")
}
