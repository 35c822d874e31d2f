use clap::Parser;
use winit::dpi::LogicalSize;

use tincture_engine::coords::Rect;
use tincture_engine::device::GpuInit;
use tincture_engine::logging::LoggingConfig;
use tincture_engine::playback::PlaybackState;
use tincture_engine::window::RuntimeConfig;

use crate::config::{ConfigError, SketchConfig};

/// Animated shader plane with a custom cursor.
#[derive(Debug, Parser)]
#[command(name = "tincture", version, about)]
pub struct Args {
    /// Initial window width in logical px.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Initial window height in logical px.
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    #[arg(long, default_value = "tincture")]
    pub title: String,

    /// Built-in palette index.
    #[arg(long, conflicts_with = "colors")]
    pub palette: Option<usize>,

    /// Five comma-separated hex colors, e.g. "#BEEF9E,#6E8898,#A6C36F,#1E352F,#5A2328".
    #[arg(long, value_name = "HEX,...")]
    pub colors: Option<String>,

    /// Region (logical px) over which the cursor grows; repeatable.
    #[arg(long = "hover", value_name = "X,Y,W,H", value_parser = parse_rect)]
    pub hover: Vec<Rect>,

    /// Start with playback stopped (Space toggles).
    #[arg(long)]
    pub paused: bool,

    /// Present without vsync (frame pacing then depends on the GPU alone).
    #[arg(long)]
    pub no_vsync: bool,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Args {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width.max(1.0), self.height.max(1.0)),
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        if self.no_vsync {
            GpuInit::unthrottled()
        } else {
            GpuInit::default()
        }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        match &self.log {
            Some(filter) => LoggingConfig::with_filter(filter.clone()),
            None => LoggingConfig::default(),
        }
    }

    pub fn sketch_config(&self) -> Result<SketchConfig, ConfigError> {
        let mut config = SketchConfig::default();

        if let Some(index) = self.palette {
            config = config.with_palette_index(index)?;
        }
        if let Some(list) = &self.colors {
            config = config.with_palette_hex(list)?;
        }
        config.hover_regions.extend(self.hover.iter().copied());
        if self.paused {
            config.initial_state = PlaybackState::Stopped;
        }

        Ok(config)
    }
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    match parts[..] {
        [x, y, w, h] => Ok(Rect::new(x, y, w, h)),
        _ => Err(format!("expected X,Y,W,H, got {} values", parts.len())),
    }
}
