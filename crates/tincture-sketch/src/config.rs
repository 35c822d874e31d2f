use std::fmt;

use glam::Vec3;

use tincture_engine::coords::Rect;
use tincture_engine::paint::{Color, ColorParseError};
use tincture_engine::playback::PlaybackState;
use tincture_engine::render::{PlaneMaterial, PALETTE_LEN};
use tincture_engine::scene::{PerspectiveCamera, PlaneGeometry};
use tincture_engine::time::DEFAULT_TIME_STEP;

use crate::palettes::{self, PALETTES};

/// Error produced while building a [`SketchConfig`] from user input.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Color(ColorParseError),
    PaletteLength { found: usize },
    UnknownPalette { index: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Color(err) => write!(f, "{err}"),
            ConfigError::PaletteLength { found } => {
                write!(f, "palette needs exactly {PALETTE_LEN} colors, got {found}")
            }
            ConfigError::UnknownPalette { index } => {
                write!(f, "no palette {index}; built-in palettes are 0..{}", PALETTES.len())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Color(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ColorParseError> for ConfigError {
    fn from(err: ColorParseError) -> Self {
        ConfigError::Color(err)
    }
}

/// Subdivided plane the shader is drawn on.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneConfig {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub uv_rate: [f32; 2],
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            width: 1.5,
            height: 1.5,
            width_segments: 300,
            height_segments: 300,
            uv_rate: [1.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 70.0,
            near: 0.001,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 0.52),
            target: Vec3::ZERO,
        }
    }
}

/// Cursor overlay look and motion, in logical px.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorConfig {
    pub radius: f32,
    /// Radius while the pointer is over a hover region.
    pub hover_radius: f32,
    /// Exponential approach rate toward the target radius, per second.
    pub grow_rate: f32,
    pub fill: Color,
    pub ring: Color,
    pub ring_width: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            hover_radius: 36.0,
            grow_rate: 14.0,
            fill: Color::from_srgb_hex(0x1E352F).with_alpha_scaled(0.85),
            ring: Color::from_srgb_hex(0xFFFFFF).with_alpha_scaled(0.6),
            ring_width: 1.5,
        }
    }
}

/// Everything the scene needs at creation; no global palette or time state.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    pub palette: [Color; PALETTE_LEN],
    pub clear: Color,
    pub time_step: f32,
    pub plane: PlaneConfig,
    pub camera: CameraConfig,
    pub cursor: CursorConfig,
    /// Screen regions (logical px) over which the cursor grows.
    pub hover_regions: Vec<Rect>,
    pub initial_state: PlaybackState,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            palette: PALETTES[0].map(Color::from_srgb_hex),
            clear: Color::from_srgb_hex(0xEEEEEE),
            time_step: DEFAULT_TIME_STEP,
            plane: PlaneConfig::default(),
            camera: CameraConfig::default(),
            cursor: CursorConfig::default(),
            hover_regions: Vec::new(),
            initial_state: PlaybackState::Playing,
        }
    }
}

impl SketchConfig {
    /// Selects a built-in palette by index.
    pub fn with_palette_index(mut self, index: usize) -> Result<Self, ConfigError> {
        self.palette = palettes::palette(index).ok_or(ConfigError::UnknownPalette { index })?;
        Ok(self)
    }

    /// Uses a comma-separated list of exactly five hex colors.
    pub fn with_palette_hex(mut self, list: &str) -> Result<Self, ConfigError> {
        self.palette = parse_palette(list)?;
        Ok(self)
    }

    pub fn plane_geometry(&self) -> PlaneGeometry {
        let p = &self.plane;
        PlaneGeometry::new(p.width, p.height, p.width_segments, p.height_segments)
    }

    pub fn plane_material(&self) -> PlaneMaterial {
        PlaneMaterial {
            palette: self.palette,
            uv_rate: self.plane.uv_rate,
        }
    }

    /// Builds the camera; the viewport adapter sets the real aspect on start.
    pub fn camera(&self) -> PerspectiveCamera {
        let c = &self.camera;
        let mut camera = PerspectiveCamera::new(c.fov_y_degrees, 1.0, c.near, c.far);
        camera.position = c.position;
        camera.target = c.target;
        camera.update_projection_matrix();
        camera
    }
}

/// Parses `"#aabbcc, #112233, ..."` into a full palette.
pub fn parse_palette(list: &str) -> Result<[Color; PALETTE_LEN], ConfigError> {
    let colors = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Color::parse_hex)
        .collect::<Result<Vec<_>, _>>()?;

    let found = colors.len();
    colors
        .try_into()
        .map_err(|_| ConfigError::PaletteLength { found })
}
