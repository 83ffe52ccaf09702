//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HW_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

use hyperwire_core::{
    CompoundRotation, CubeLayer, DepthStyle, EngineParams, GeometryError, HypercubeLayout,
    PlaneSpin,
};
use hyperwire_math::{DEFAULT_RATE_DENOMINATOR, DEFAULT_SPINS};
use hyperwire_render::StrokeStyle;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output selection
    #[serde(default)]
    pub display: DisplayConfig,
    /// Terminal output configuration
    #[serde(default)]
    pub terminal: TerminalConfig,
    /// SVG output configuration
    #[serde(default)]
    pub svg: SvgConfig,
    /// Animation clock
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Tesseract geometry and projection
    #[serde(default)]
    pub geometry: GeometryConfig,
    /// Depth weighting and line style
    #[serde(default)]
    pub style: StyleConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional local overrides
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HW_ANIMATION__STEP=0.01 -> animation.step = 0.01
        figment = figment.merge(Env::prefixed("HW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Where frames are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Animate in the terminal
    Terminal,
    /// Write numbered SVG files
    Svg,
}

/// Output selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Output mode
    pub mode: DisplayMode,
    /// Frames to produce (0 = run until interrupted; a single file for SVG)
    pub frames: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Terminal,
            frames: 0,
        }
    }
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Grid width in character cells
    pub cols: u16,
    /// Grid height in character cells
    pub rows: u16,
    /// Show the angle readout below the grid
    pub show_status: bool,
    /// Show the composed rotation matrix below the status line
    pub show_matrix: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 40,
            show_status: true,
            show_matrix: false,
        }
    }
}

/// SVG output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Document width in pixels
    pub width: f64,
    /// Document height in pixels
    pub height: f64,
    /// Directory the frames are written to
    pub output_dir: String,
    /// Background fill
    pub background: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            output_dir: "frames".to_string(),
            background: "#000000".to_string(),
        }
    }
}

/// Animation clock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Angle increment per tick, in radians
    pub step: f64,
    /// Ticks per second
    pub tick_hz: f64,
    /// Angle of the first frame
    pub start_angle: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step: 0.02,
            tick_hz: 120.0,
            start_angle: 0.0,
        }
    }
}

impl AnimationConfig {
    /// Duration of one tick
    pub fn tick_interval(&self) -> Result<Duration, ConfigError> {
        if !self.tick_hz.is_finite() || self.tick_hz <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "animation.tick_hz must be positive, got {}",
                self.tick_hz
            )));
        }
        Ok(Duration::from_secs_f64(1.0 / self.tick_hz))
    }

    /// Check that the clock can run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step.is_finite() || !self.start_angle.is_finite() {
            return Err(ConfigError::invalid(
                "animation.step and animation.start_angle must be finite".to_string(),
            ));
        }
        self.tick_interval().map(|_| ())
    }
}

/// Tesseract geometry and projection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Half side length of the inner cube
    pub inner_half_extent: f64,
    /// W position of the inner cube
    pub inner_w: f64,
    /// Half side length of the outer cube
    pub outer_half_extent: f64,
    /// W position of the outer cube
    pub outer_w: f64,
    /// 4D eye distance (D4)
    pub w_distance: f64,
    /// 3D camera distance (D3)
    pub view_distance: f64,
    /// View scale as a multiple of the smaller surface side
    pub view_scale_factor: f64,
    /// Shared denominator of the plane rates
    pub rate_denominator: u32,
    /// Rotation planes in application order
    pub planes: Vec<PlaneSpin>,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        let layout = HypercubeLayout::default();
        let engine = EngineParams::default();
        Self {
            inner_half_extent: layout.inner.half_extent,
            inner_w: layout.inner.w_offset,
            outer_half_extent: layout.outer.half_extent,
            outer_w: layout.outer.w_offset,
            w_distance: engine.w_distance,
            view_distance: engine.view_distance,
            view_scale_factor: engine.view_scale_factor,
            rate_denominator: DEFAULT_RATE_DENOMINATOR,
            planes: DEFAULT_SPINS.to_vec(),
        }
    }
}

impl GeometryConfig {
    /// Convert to engine parameters
    pub fn to_engine_params(&self, style: &StyleConfig) -> Result<EngineParams, GeometryError> {
        let rotation = CompoundRotation::new(self.rate_denominator, self.planes.clone())?;
        Ok(EngineParams {
            layout: HypercubeLayout {
                inner: CubeLayer::new(self.inner_half_extent, self.inner_w),
                outer: CubeLayer::new(self.outer_half_extent, self.outer_w),
            },
            rotation,
            w_distance: self.w_distance,
            view_distance: self.view_distance,
            style: style.to_depth_style(),
            view_scale_factor: self.view_scale_factor,
        })
    }
}

/// Depth weighting and line style
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Weight at zero depth
    pub base: f64,
    /// Weight added per unit of depth
    pub gain: f64,
    /// Lower clamp of the weight
    pub min_weight: f64,
    /// Upper clamp of the weight
    pub max_weight: f64,
    /// Stroke width in surface units (SVG)
    pub line_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let depth = DepthStyle::default();
        Self {
            base: depth.base,
            gain: depth.gain,
            min_weight: depth.min_weight,
            max_weight: depth.max_weight,
            line_width: StrokeStyle::default().line_width,
        }
    }
}

impl StyleConfig {
    pub fn to_depth_style(&self) -> DepthStyle {
        DepthStyle {
            base: self.base,
            gain: self.gain,
            min_weight: self.min_weight,
            max_weight: self.max_weight,
        }
    }

    pub fn to_stroke_style(&self) -> StrokeStyle {
        StrokeStyle::default().with_line_width(self.line_width)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    /// A value that parsed but cannot be used
    pub fn invalid(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
