#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod assets;
pub mod config;
pub mod inject;
pub mod models;
pub mod pipeline;

pub use assets::resolve_assets;
pub use config::{InjectTarget, InjectorConfig, StaticFiles};
pub use inject::inject_assets_into_html;
pub use models::{AssetManifest, BuildStats, ChunkAssets, ChunkDescriptor};
pub use pipeline::InjectionPipeline;
