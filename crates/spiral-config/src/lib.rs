//! Spirals configuration system
//!
//! Loads settings from `spirals.toml`, with environment variables layered on top.
//! Every value has a default, so an empty or missing file is a valid configuration.

use serde::{Deserialize, Serialize};
use spiral_core::{BasicTransform, Color, FieldParams, SpiralParams};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "spirals.toml";

/// Errors that can occur while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Spiral(#[from] spiral_core::SpiralError),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpiralConfig {
    /// Shape of a single spiral
    pub spiral: SpiralSection,
    /// Grid of spirals
    pub field: FieldSection,
    /// Basic transformation page
    pub basic: BasicSection,
    /// What to render and where
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralSection {
    /// Side length of the outermost square
    pub edge_length: f64,
    /// How far along each edge the next square's corner sits, in percent
    pub inner_rotation_percentage: f64,
    /// Number of nested squares
    pub iterations: i32,
    pub corner_radius: f64,
    pub line_width: f64,
    /// Stroke color as `#rrggbb`
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSection {
    pub rows: u32,
    pub columns: u32,
    /// Swap every other cell for the opposite turning spiral
    pub alternating: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicSection {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation_deg: f64,
    /// Side length of the reference square
    pub edge_length: f64,
}

/// Which page is rendered by the `spirals` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// A grid of spirals
    #[default]
    Field,
    /// A single spiral and its step matrix
    Inner,
    /// Translation, scale and rotation of one square
    Basic,
}

impl Page {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "field" => Some(Self::Field),
            "inner" | "inner_rotation" | "inner-rotation" => Some(Self::Inner),
            "basic" | "simple" => Some(Self::Basic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub page: Page,
    /// SVG output file; stdout when unset
    pub path: Option<PathBuf>,
    /// Background fill as `#rrggbb`; transparent when unset
    pub background: Option<String>,
}

impl Default for SpiralSection {
    fn default() -> Self {
        Self {
            edge_length: 250.0,
            inner_rotation_percentage: 17.0,
            iterations: 17,
            corner_radius: 0.0,
            line_width: 1.0,
            color: "#ff9500".to_string(),
        }
    }
}

impl Default for FieldSection {
    fn default() -> Self {
        Self {
            rows: 1,
            columns: 1,
            alternating: false,
        }
    }
}

impl Default for BasicSection {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation_deg: 0.0,
            edge_length: 100.0,
        }
    }
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl SpiralConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from `spirals.toml` in the current directory,
    /// or return the default configuration if the file can't be loaded
    pub fn load_or_default() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that don't parse are ignored.
    pub fn merge_with_env(&mut self) {
        // Spiral settings
        if let Ok(val) = std::env::var("SPIRAL_EDGE_LENGTH") {
            if let Ok(edge) = val.parse::<f64>() {
                self.spiral.edge_length = edge;
            }
        }
        if let Ok(val) = std::env::var("SPIRAL_INNER_ROTATION") {
            if let Ok(pct) = val.parse::<f64>() {
                self.spiral.inner_rotation_percentage = pct;
            }
        }
        if let Ok(val) = std::env::var("SPIRAL_ITERATIONS") {
            if let Ok(n) = val.parse::<i32>() {
                self.spiral.iterations = n;
            }
        }
        if let Ok(val) = std::env::var("SPIRAL_CORNER_RADIUS") {
            if let Ok(radius) = val.parse::<f64>() {
                self.spiral.corner_radius = radius;
            }
        }
        if let Ok(val) = std::env::var("SPIRAL_LINE_WIDTH") {
            if let Ok(width) = val.parse::<f64>() {
                self.spiral.line_width = width;
            }
        }
        if let Ok(color) = std::env::var("SPIRAL_COLOR") {
            self.spiral.color = color;
        }

        // Field settings
        if let Ok(val) = std::env::var("SPIRAL_ROWS") {
            if let Ok(rows) = val.parse::<u32>() {
                self.field.rows = rows;
            }
        }
        if let Ok(val) = std::env::var("SPIRAL_COLUMNS") {
            if let Ok(columns) = val.parse::<u32>() {
                self.field.columns = columns;
            }
        }
        if let Ok(val) = std::env::var("SPIRAL_ALTERNATING") {
            self.field.alternating = parse_bool(&val);
        }

        // Output settings
        if let Ok(val) = std::env::var("SPIRAL_PAGE") {
            if let Some(page) = Page::parse(&val) {
                self.output.page = page;
            }
        }
        if let Ok(path) = std::env::var("SPIRAL_OUTPUT") {
            self.output.path = Some(PathBuf::from(path));
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from spirals.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    /// Spiral parameters, with the percentage turned into an offset ratio.
    pub fn spiral_params(&self) -> Result<SpiralParams, ConfigError> {
        let s = &self.spiral;
        Ok(SpiralParams::new(
            s.iterations,
            s.inner_rotation_percentage / 100.0,
            s.edge_length,
        )
        .with_corner_radius(s.corner_radius)
        .with_line_width(s.line_width)
        .with_color(Color::from_hex(&s.color)?))
    }

    pub fn field_params(&self) -> Result<FieldParams, ConfigError> {
        Ok(FieldParams {
            spiral: self.spiral_params()?,
            rows: self.field.rows,
            columns: self.field.columns,
            alternating: self.field.alternating,
        })
    }

    pub fn basic_transform(&self) -> BasicTransform {
        let b = &self.basic;
        BasicTransform {
            offset_x: b.offset_x,
            offset_y: b.offset_y,
            scale_x: b.scale_x,
            scale_y: b.scale_y,
            rotation_deg: b.rotation_deg,
        }
    }

    pub fn background(&self) -> Result<Option<Color>, ConfigError> {
        match &self.output.background {
            Some(hex) => Ok(Some(Color::from_hex(hex)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SpiralConfig::default();
        assert_eq!(config.spiral.edge_length, 250.0);
        assert_eq!(config.spiral.iterations, 17);
        assert_eq!(config.field.rows, 1);
        assert!(!config.field.alternating);
        assert_eq!(config.output.page, Page::Field);
    }

    #[test]
    fn test_toml_serialization() {
        let config = SpiralConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: SpiralConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.spiral.color, "#ff9500");
        assert_eq!(parsed.basic.scale_x, 1.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[spiral]\ninner_rotation_percentage = 25.0\n\n[field]\nrows = 3\nalternating = true\n\n[output]\npage = \"inner\""
        )
        .unwrap();

        let config = SpiralConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.spiral.inner_rotation_percentage, 25.0);
        assert_eq!(config.spiral.edge_length, 250.0);
        assert_eq!(config.field.rows, 3);
        assert_eq!(config.field.columns, 1);
        assert!(config.field.alternating);
        assert_eq!(config.output.page, Page::Inner);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SpiralConfig::load_from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[spiral]\niterations = \"many\"").unwrap();
        let err = SpiralConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if spirals.toml doesn't exist
        let config = SpiralConfig::load_or_default();
        assert_eq!(config.spiral.edge_length, 250.0);
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn test_spiral_params_conversion() {
        let mut config = SpiralConfig::default();
        config.spiral.inner_rotation_percentage = 50.0;
        config.spiral.corner_radius = 9.0;
        let params = config.spiral_params().unwrap();
        assert_eq!(params.offset_ratio, 0.5);
        assert_eq!(params.steps, 17);
        assert_eq!(params.corner_radius, 9.0);
        assert_eq!(params.color, Color::orange());

        config.field.columns = 4;
        let field = config.field_params().unwrap();
        assert_eq!(field.columns, 4);
        assert_eq!(field.spiral, params);
    }

    #[test]
    fn test_bad_color_is_reported() {
        let mut config = SpiralConfig::default();
        config.spiral.color = "teal".to_string();
        assert!(matches!(
            config.spiral_params(),
            Err(ConfigError::Spiral(spiral_core::SpiralError::InvalidColor(_)))
        ));
    }

    #[test]
    fn test_page_parse() {
        assert_eq!(Page::parse("Field"), Some(Page::Field));
        assert_eq!(Page::parse("inner-rotation"), Some(Page::Inner));
        assert_eq!(Page::parse("simple"), Some(Page::Basic));
        assert_eq!(Page::parse("gallery"), None);
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("SPIRAL_ITERATIONS", "33");
            std::env::set_var("SPIRAL_ALTERNATING", "true");
            std::env::set_var("SPIRAL_PAGE", "basic");
            std::env::set_var("SPIRAL_ROWS", "not-a-number");
        }

        let mut config = SpiralConfig::default();
        config.merge_with_env();

        assert_eq!(config.spiral.iterations, 33);
        assert!(config.field.alternating);
        assert_eq!(config.output.page, Page::Basic);
        assert_eq!(config.field.rows, 1);

        unsafe {
            std::env::remove_var("SPIRAL_ITERATIONS");
            std::env::remove_var("SPIRAL_ALTERNATING");
            std::env::remove_var("SPIRAL_PAGE");
            std::env::remove_var("SPIRAL_ROWS");
        }
    }
}
