//! Injector configuration describing template location, injection target and extras.

use std::fs;
use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "injector.config.json";

/// Where generated script tags are spliced into the template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectTarget {
    /// Script tags join the stylesheet and localization tags before `</head>`.
    Head,
    /// Script tags are spliced before `</body>`.
    #[default]
    Body,
}

/// Manually configured extra assets injected alongside the resolved ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StaticFiles {
    /// Stylesheet paths injected before any chunk stylesheets.
    pub css: Vec<String>,
    /// Script paths injected before any chunk entry files.
    pub js: Vec<String>,
    /// Localization resources injected before any chunk resources.
    pub l20n: Vec<String>,
}

/// Immutable configuration threaded through the resolver and the injector.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// Output path of the HTML template, relative to the build root.
    pub filename: String,
    /// Append the build hash to every emitted asset path for cache busting.
    pub hash: bool,
    /// Where generated script tags land in the template.
    pub inject: InjectTarget,
    /// Source path of a favicon to link from the template head.
    pub favicon: Option<String>,
    /// Explicitly configured public path; a literal `[hash]` placeholder is
    /// substituted with the build hash at resolve time. When unset, a relative
    /// path is derived from the template's output directory instead.
    pub public_path: Option<String>,
    /// Extra assets to inject in addition to the resolved chunk assets.
    pub files: StaticFiles,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            filename: "index.html".into(),
            hash: false,
            inject: InjectTarget::default(),
            favicon: None,
            public_path: None,
            files: StaticFiles::default(),
        }
    }
}

impl InjectorConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to
    /// default values so downstream callers can continue operating with sensible
    /// assumptions.
    pub fn discover(build_dir: &Path) -> Self {
        let candidate = build_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}
