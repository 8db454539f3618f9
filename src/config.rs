use std::path::{Path, PathBuf};

use citymap_core::prelude::*;
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::AppError;

const DEFAULT_CONFIG_FILE: &str = "citymap.toml";

/// Contents of `citymap.toml`
///
/// ```toml
/// log_level = "info"
/// default_weight = "time"
///
/// [graph]
/// sample = 2
/// # edges = "city.csv"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_level: String,
    /// Weight dimension used when `--by` is omitted
    pub default_weight: String,
    pub graph: GraphConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub sample: Option<SampleGraph>,
    pub edges: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: "warn".to_string(),
            default_weight: WeightDimension::Distance.to_string(),
            graph: GraphConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(text: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(text)?;
        if config.graph.sample.is_some() && config.graph.edges.is_some() {
            return Err(AppError::InvalidInput(
                "config [graph] sets both `sample` and `edges`".to_string(),
            ));
        }
        Ok(config)
    }

    /// Reads an explicit config file, or `citymap.toml` if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };
        let text = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read config '{}': {}", path.display(), e),
            )
        })?;
        Self::from_toml(&text)
    }

    /// Graph source from the command line, falling back to the file.
    /// `None` means nothing was chosen and the session menu should ask.
    pub fn graph_source(&self, cli: &Cli) -> Result<Option<GraphSource>, AppError> {
        if let Some(path) = &cli.edges {
            return Ok(Some(GraphSource::EdgeList(path.clone())));
        }
        if let Some(choice) = cli.graph {
            let sample = SampleGraph::from_choice(choice).ok_or_else(|| {
                AppError::InvalidInput(format!("--graph must be 1, 2 or 3, got {choice}"))
            })?;
            return Ok(Some(GraphSource::Sample(sample)));
        }
        Ok(match (&self.graph.edges, self.graph.sample) {
            (Some(path), _) => Some(GraphSource::EdgeList(path.clone())),
            (None, Some(sample)) => Some(GraphSource::Sample(sample)),
            (None, None) => None,
        })
    }

    /// `--by` value if given, otherwise the configured default
    pub fn dimension(&self, by: Option<&str>) -> Result<WeightDimension, AppError> {
        let name = by.unwrap_or(self.default_weight.as_str());
        Ok(name.parse::<WeightDimension>()?)
    }
}
