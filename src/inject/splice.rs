//! Regex-driven splicing of markup fragments into an HTML template string.
//!
//! The insertion-point contract is literal and kept for compatibility with the
//! upstream plugin: fragments land immediately before the first
//! case-insensitive `</head>` or `</body>`, and the appcache manifest is
//! declared on the first `<html...>` opening tag. Templates missing a target
//! tag are returned with that fragment silently dropped; the template is never
//! validated as well-formed markup.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn head_close() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)</head>").expect("invalid head regex"))
}

fn body_close() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)</body>").expect("invalid body regex"))
}

fn html_open() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)(<html[^>]*)(>)").expect("invalid html regex"))
}

fn manifest_attribute() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\smanifest\s*=").expect("invalid manifest regex"))
}

/// Insert a fragment immediately before the first `</head>`.
pub fn splice_into_head(html: &str, fragment: &str) -> String {
    splice_before(head_close(), html, fragment)
}

/// Insert a fragment immediately before the first `</body>`.
pub fn splice_into_body(html: &str, fragment: &str) -> String {
    splice_before(body_close(), html, fragment)
}

fn splice_before(pattern: &Regex, html: &str, fragment: &str) -> String {
    if fragment.is_empty() {
        return html.to_string();
    }
    pattern
        .replacen(html, 1, |caps: &Captures| format!("{fragment}{}", &caps[0]))
        .into_owned()
}

/// Declare the appcache manifest on the opening `<html>` tag.
///
/// A tag that already carries a `manifest` attribute is left untouched rather
/// than overwritten.
pub fn set_manifest_attribute(html: &str, manifest_path: &str) -> String {
    html_open()
        .replacen(html, 1, |caps: &Captures| {
            if manifest_attribute().is_match(&caps[0]) {
                caps[0].to_string()
            } else {
                format!(r#"{} manifest="{manifest_path}"{}"#, &caps[1], &caps[2])
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::{set_manifest_attribute, splice_into_body, splice_into_head};

    #[test]
    fn head_fragment_lands_before_first_closing_head() {
        let html = "<html><head></head><body></body></html>";
        let out = splice_into_head(html, "<link href=\"a.css\" rel=\"stylesheet\">");
        assert_eq!(
            out,
            "<html><head><link href=\"a.css\" rel=\"stylesheet\"></head><body></body></html>"
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let html = "<HTML><HEAD></HEAD><BODY></BODY></HTML>";
        let out = splice_into_body(html, "<script src=\"a.js\"></script>");
        assert_eq!(
            out,
            "<HTML><HEAD></HEAD><BODY><script src=\"a.js\"></script></BODY></HTML>"
        );
    }

    #[test]
    fn missing_target_tag_drops_the_fragment() {
        let html = "<p>fragment only</p>";
        assert_eq!(splice_into_head(html, "<x>"), html);
        assert_eq!(splice_into_body(html, "<x>"), html);
    }

    #[test]
    fn manifest_attribute_joins_existing_html_attributes() {
        let html = r#"<html lang="en"><head></head></html>"#;
        let out = set_manifest_attribute(html, "offline.appcache");
        assert_eq!(
            out,
            r#"<html lang="en" manifest="offline.appcache"><head></head></html>"#
        );
    }

    #[test]
    fn existing_manifest_attribute_is_not_overwritten() {
        let html = r#"<html manifest="legacy.appcache"><head></head></html>"#;
        let out = set_manifest_attribute(html, "offline.appcache");
        assert_eq!(out, html);
    }
}
