//! Weight configuration: per-colour overrides, the cost of changing floors,
//! and the sizing of the search worker pool.
//!
//! The configuration is read once from a JSON document of the form
//!
//! ```json
//! {
//!   "graph_config": { "lightgray_weight": 5, "between_floors_weight": 3 },
//!   "dispatch": { "pool_size": 10, "batch_size": 10, "warn_threshold": 5 }
//! }
//! ```
//!
//! and is then an immutable value owned by the graph.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Edge weight. Always finite and strictly positive.
pub type Weight = f64;

/// Weight used whenever no override applies.
pub const DEFAULT_WEIGHT: Weight = 1.0;

const BETWEEN_FLOORS_KEY: &str = "between_floors_weight";

// ---------------------------------------------------------------------------
// DispatchOptions
// ---------------------------------------------------------------------------

/// Sizing of the multi-target search fan-out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchOptions {
    /// Number of worker threads.
    pub pool_size: usize,
    /// End candidates handled sequentially by one worker task.
    pub batch_size: usize,
    /// Candidate count above which a performance warning is logged.
    pub warn_threshold: usize,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            pool_size: 10,
            batch_size: 10,
            warn_threshold: 5,
        }
    }
}

impl DispatchOptions {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidDispatch(
                "pool_size must be at least 1".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidDispatch(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GraphConfig
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ConfigDocument {
    graph_config: Option<BTreeMap<String, Weight>>,
    #[serde(default)]
    dispatch: DispatchOptions,
}

/// Read-only weight table consulted while building a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    color_weights: BTreeMap<String, Weight>,
    between_floors_weight: Weight,
    dispatch: DispatchOptions,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            color_weights: BTreeMap::new(),
            between_floors_weight: DEFAULT_WEIGHT,
            dispatch: DispatchOptions::default(),
        }
    }
}

impl GraphConfig {
    /// Load the configuration from `path`, or return the default (every
    /// weight 1) when no path is given.
    ///
    /// A path that cannot be read or parsed is an error; nothing is
    /// partially applied.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, Some(path))?;
        log::info!(
            "Loaded graph config from {} ({} colour overrides, between floors {})",
            path.display(),
            config.color_weights.len(),
            config.between_floors_weight
        );
        Ok(config)
    }

    /// Parse a configuration document held in memory.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, None)
    }

    fn parse(text: &str, path: Option<&Path>) -> Result<Self, ConfigError> {
        let doc: ConfigDocument =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse {
                path: path.map(Path::to_path_buf),
                message: e.to_string(),
            })?;
        let Some(mut color_weights) = doc.graph_config else {
            return Err(ConfigError::MissingSection(path.map(Path::to_path_buf)));
        };
        for (key, &value) in &color_weights {
            check_weight(key, value)?;
        }
        doc.dispatch.validate()?;

        let between_floors_weight = color_weights
            .remove(BETWEEN_FLOORS_KEY)
            .unwrap_or(DEFAULT_WEIGHT);

        Ok(Self {
            color_weights,
            between_floors_weight,
            dispatch: doc.dispatch,
        })
    }

    /// Set the weight override for `color` (builder).
    pub fn with_color_weight(mut self, color: &Color, weight: Weight) -> Result<Self, ConfigError> {
        let key = color.config_key();
        check_weight(&key, weight)?;
        self.color_weights.insert(key, weight);
        Ok(self)
    }

    /// Set the cost of moving between adjacent floors (builder).
    pub fn with_between_floors_weight(mut self, weight: Weight) -> Result<Self, ConfigError> {
        check_weight(BETWEEN_FLOORS_KEY, weight)?;
        self.between_floors_weight = weight;
        Ok(self)
    }

    /// Replace the dispatch sizing (builder).
    pub fn with_dispatch(mut self, dispatch: DispatchOptions) -> Result<Self, ConfigError> {
        dispatch.validate()?;
        self.dispatch = dispatch;
        Ok(self)
    }

    /// The override stored under `{color}_weight`, or [`DEFAULT_WEIGHT`].
    pub fn color_weight(&self, color: &Color) -> Weight {
        self.color_weights
            .get(&color.config_key())
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }

    #[inline]
    pub fn between_floors_weight(&self) -> Weight {
        self.between_floors_weight
    }

    #[inline]
    pub fn dispatch(&self) -> DispatchOptions {
        self.dispatch
    }
}

fn check_weight(key: &str, value: Weight) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeight {
            key: key.to_string(),
            value,
        })
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a [`GraphConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The document could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is not valid JSON or has the wrong shape.
    Parse {
        path: Option<PathBuf>,
        message: String,
    },
    /// The document has no `graph_config` section.
    MissingSection(Option<PathBuf>),
    /// A weight is zero, negative or not finite.
    InvalidWeight { key: String, value: Weight },
    /// The `dispatch` section describes an unusable worker pool.
    InvalidDispatch(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Parse { path, message } => match path {
                Some(p) => write!(f, "malformed config {}: {message}", p.display()),
                None => write!(f, "malformed config: {message}"),
            },
            Self::MissingSection(path) => match path {
                Some(p) => write!(f, "config {} has no graph_config section", p.display()),
                None => f.write_str("config has no graph_config section"),
            },
            Self::InvalidWeight { key, value } => {
                write!(f, "config weight {key} must be a positive number, got {value}")
            }
            Self::InvalidDispatch(msg) => write!(f, "invalid dispatch settings: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_falls_back_to_one() {
        let cfg = GraphConfig::load(None).unwrap();
        assert_eq!(cfg.color_weight(&Color::LightGray), 1.0);
        assert_eq!(cfg.color_weight(&Color::Other("blue".into())), 1.0);
        assert_eq!(cfg.between_floors_weight(), 1.0);
        assert_eq!(cfg.dispatch(), DispatchOptions::default());
    }

    #[test]
    fn parse_document() {
        let cfg = GraphConfig::from_json_str(
            r#"{
                "graph_config": {
                    "lightgray_weight": 5,
                    "darkgray_weight": 7.5,
                    "between_floors_weight": 3
                },
                "dispatch": { "pool_size": 4 }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.color_weight(&Color::LightGray), 5.0);
        assert_eq!(cfg.color_weight(&Color::DarkGray), 7.5);
        assert_eq!(cfg.color_weight(&Color::White), 1.0);
        assert_eq!(cfg.between_floors_weight(), 3.0);
        // between_floors_weight is not a colour override.
        assert_eq!(cfg.color_weight(&Color::Other("between_floors".into())), 1.0);
        assert_eq!(cfg.dispatch().pool_size, 4);
        assert_eq!(cfg.dispatch().batch_size, 10);
        assert_eq!(cfg.dispatch().warn_threshold, 5);
    }

    #[test]
    fn missing_section_is_an_error() {
        let err = GraphConfig::from_json_str(r#"{"other": {}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSection(None)));
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = GraphConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let err = GraphConfig::from_json_str(r#"{"graph_config": {"red_weight": "x"}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn non_positive_weights_are_rejected() {
        let err = GraphConfig::from_json_str(r#"{"graph_config": {"lightgray_weight": 0}}"#)
            .unwrap_err();
        match err {
            ConfigError::InvalidWeight { key, value } => {
                assert_eq!(key, "lightgray_weight");
                assert_eq!(value, 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(
            GraphConfig::default()
                .with_between_floors_weight(-2.0)
                .is_err()
        );
    }

    #[test]
    fn zero_pool_is_rejected() {
        let err = GraphConfig::from_json_str(
            r#"{"graph_config": {}, "dispatch": {"batch_size": 0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDispatch(_)));
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let path = std::env::temp_dir().join("gridroute-core-missing-config.json");
        let _ = std::fs::remove_file(&path);
        let err = GraphConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "gridroute-core-config-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"graph_config": {"darkgray_weight": 4, "between_floors_weight": 2}}"#,
        )
        .unwrap();
        let cfg = GraphConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.color_weight(&Color::DarkGray), 4.0);
        assert_eq!(cfg.between_floors_weight(), 2.0);
    }

    #[test]
    fn builder_overrides() {
        let cfg = GraphConfig::default()
            .with_color_weight(&Color::LightGray, 5.0)
            .unwrap()
            .with_between_floors_weight(2.0)
            .unwrap();
        assert_eq!(cfg.color_weight(&Color::LightGray), 5.0);
        assert_eq!(cfg.between_floors_weight(), 2.0);
    }
}
