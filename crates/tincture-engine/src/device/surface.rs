use crate::viewport::ViewportDimensions;

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        if let Some(f) = caps.formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(f);
        }
    }

    Some(caps.formats[0])
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Applies a new size to the surface configuration.
///
/// wgpu rejects 0x0 surfaces; in that case only the tracked size changes and
/// configuration waits for the next non-empty size. Returns whether the
/// surface must be reconfigured.
pub(crate) fn apply_resize(
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut ViewportDimensions,
    new_size: ViewportDimensions,
) -> bool {
    *size = new_size;
    if new_size.is_empty() {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: wgpu::TextureFormat::Bgra8UnormSrgb,
            width: 800,
            height: 600,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    #[test]
    fn resize_updates_config() {
        let mut cfg = config();
        let mut size = ViewportDimensions::new(800, 600);
        assert!(apply_resize(&mut cfg, &mut size, ViewportDimensions::new(1600, 900)));
        assert_eq!((cfg.width, cfg.height), (1600, 900));
        assert_eq!(size, ViewportDimensions::new(1600, 900));
    }

    #[test]
    fn zero_size_defers_configuration() {
        let mut cfg = config();
        let mut size = ViewportDimensions::new(800, 600);
        assert!(!apply_resize(&mut cfg, &mut size, ViewportDimensions::new(0, 600)));
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert!(size.is_empty());
    }
}
