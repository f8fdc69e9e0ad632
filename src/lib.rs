pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use app::pipelines::blog_pipeline::BlogPipeline;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::etl::EtlEngine;
pub use utils::error::{EtlError, Result};
