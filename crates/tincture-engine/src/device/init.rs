/// Options for adapter, device and surface creation.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends the instance may pick from.
    pub backends: wgpu::Backends,

    /// Adapter selection hint; the plane is vertex-heavy, so discrete GPUs win.
    pub power_preference: wgpu::PowerPreference,

    /// Pick an sRGB surface format when one exists.
    ///
    /// Palette colors are linear, so an sRGB target reproduces the authored
    /// hex values on screen.
    pub prefer_srgb: bool,

    /// FIFO paces the redraw chain to the display refresh.
    pub present_mode: wgpu::PresentMode,

    /// Falls back to a supported mode when `None` or unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint only; backends may ignore it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    /// Uncapped presentation, for measuring how fast the loop can produce frames.
    pub fn unthrottled() -> Self {
        Self {
            present_mode: wgpu::PresentMode::AutoNoVsync,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_vsynced_srgb() {
        let init = GpuInit::default();
        assert!(init.prefer_srgb);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert!(init.required_features.is_empty());
    }

    #[test]
    fn unthrottled_only_changes_present_mode() {
        let init = GpuInit::unthrottled();
        assert_eq!(init.present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(init.power_preference, GpuInit::default().power_preference);
    }
}
