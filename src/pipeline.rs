//! Build-pipeline integration composing the resolver and the injector.
//!
//! This layer stands in for a build-tool plugin hook: after the bundler has
//! written its output (including the rendered template), the pipeline patches
//! the template in place with the resolved asset markup. Configuration is an
//! explicit value rather than shared plugin state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::assets::resolve_assets;
use crate::config::InjectorConfig;
use crate::inject::inject_assets_into_html;
use crate::models::BuildStats;

/// Explicit composition of asset resolution and HTML injection over a build
/// output directory.
pub struct InjectionPipeline {
    config: InjectorConfig,
    build_dir: PathBuf,
    included: Option<Vec<String>>,
    excluded: Option<Vec<String>>,
}

impl InjectionPipeline {
    /// Create a pipeline for the given configuration and build output directory.
    pub fn new(config: InjectorConfig, build_dir: PathBuf) -> Self {
        Self {
            config,
            build_dir,
            included: None,
            excluded: None,
        }
    }

    /// Restrict injection to the named chunks.
    pub fn include_chunks(mut self, names: Vec<String>) -> Self {
        self.included = Some(names);
        self
    }

    /// Exclude the named chunks from injection.
    pub fn exclude_chunks(mut self, names: Vec<String>) -> Self {
        self.excluded = Some(names);
        self
    }

    /// Path of the HTML template inside the build output directory.
    pub fn template_path(&self) -> PathBuf {
        self.build_dir.join(&self.config.filename)
    }

    /// Resolve the build's assets and return the injected template HTML.
    pub fn run(&self, stats: &BuildStats) -> Result<String> {
        let template_path = self.template_path();
        let template = fs::read_to_string(&template_path)
            .with_context(|| format!("failed to read template at {}", template_path.display()))?;

        let manifest = resolve_assets(
            stats,
            &self.config,
            self.included.as_deref(),
            self.excluded.as_deref(),
        );
        debug!(
            chunks = manifest.chunks.len(),
            scripts = manifest.js.len(),
            stylesheets = manifest.css.len(),
            "resolved asset manifest"
        );

        Ok(inject_assets_into_html(&manifest, &self.config, &template))
    }

    /// Run the pipeline and write the injected template back in place.
    pub fn write(&self, stats: &BuildStats) -> Result<PathBuf> {
        let html = self.run(stats)?;
        let template_path = self.template_path();
        write_template(&template_path, &html)?;
        debug!(path = %template_path.display(), "wrote injected template");
        Ok(template_path)
    }
}

fn write_template(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)
        .with_context(|| format!("failed to write template to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::InjectionPipeline;
    use crate::config::InjectorConfig;
    use crate::models::{BuildStats, ChunkDescriptor};
    use std::fs;
    use tempfile::tempdir;

    fn stats() -> BuildStats {
        BuildStats {
            hash: "abc123".into(),
            chunks: vec![
                ChunkDescriptor {
                    id: 1,
                    names: vec!["vendor".into()],
                    entry: false,
                    size: 2048,
                    files: vec!["vendor.js".into()],
                },
                ChunkDescriptor {
                    id: 2,
                    names: vec!["main".into()],
                    entry: true,
                    size: 4096,
                    files: vec!["main.js".into(), "main.css".into()],
                },
            ],
            assets: Vec::new(),
        }
    }

    #[test]
    fn patches_template_in_place() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("index.html");
        fs::write(&template, "<html><head></head><body></body></html>").unwrap();

        let pipeline =
            InjectionPipeline::new(InjectorConfig::default(), dir.path().to_path_buf());
        let written = pipeline.write(&stats()).unwrap();
        assert_eq!(written, template);

        let html = fs::read_to_string(&template).unwrap();
        let head_end = html.find("</head>").unwrap();
        assert!(html[..head_end].contains(r#"<link href="main.css" rel="stylesheet">"#));
        let vendor = html.find(r#"<script src="vendor.js">"#).unwrap();
        let main = html.find(r#"<script src="main.js">"#).unwrap();
        assert!(head_end < vendor && vendor < main);
    }

    #[test]
    fn chunk_filters_reach_the_resolver() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.html"),
            "<html><head></head><body></body></html>",
        )
        .unwrap();

        let pipeline =
            InjectionPipeline::new(InjectorConfig::default(), dir.path().to_path_buf())
                .exclude_chunks(vec!["vendor".into()]);
        let html = pipeline.run(&stats()).unwrap();
        assert!(!html.contains("vendor.js"));
        assert!(html.contains("main.js"));
    }

    #[test]
    fn hashed_favicon_reaches_the_head() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.html"),
            "<html><head></head><body></body></html>",
        )
        .unwrap();

        let config = InjectorConfig {
            hash: true,
            favicon: Some("art/icon.ico".into()),
            ..InjectorConfig::default()
        };
        let pipeline = InjectionPipeline::new(config, dir.path().to_path_buf());
        let html = pipeline.run(&stats()).unwrap();

        let head_end = html.find("</head>").unwrap();
        assert!(html[..head_end].contains(r#"<link rel="shortcut icon" href="icon.ico?abc123">"#));
        assert!(html.contains(r#"<script src="main.js?abc123"></script>"#));
    }

    #[test]
    fn missing_template_names_path_in_error() {
        let dir = tempdir().unwrap();
        let pipeline =
            InjectionPipeline::new(InjectorConfig::default(), dir.path().to_path_buf());
        let err = pipeline.run(&stats()).unwrap_err();
        assert!(err.to_string().contains("index.html"));
    }
}
