use crate::error::ConfigError;

/// Upper bound of the speed slider. `set_speed` accepts anything above it.
pub const MAX_SPEED: u32 = 100;

/// Largest surface edge in pixels; the window texture is addressed with u16.
pub const MAX_SURFACE_EDGE: u32 = u16::MAX as u32;

/// Startup parameters, overridable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub speed: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 4,
            speed: 50,
        }
    }
}

/// Grid dimensions derived from a pixel surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub cols: usize,
    pub rows: usize,
    pub cell_size: u32,
}

impl Layout {
    /// Fit as many whole cells as possible into `width x height` pixels.
    pub fn from_surface(width: u32, height: u32, cell_size: u32) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if width > MAX_SURFACE_EDGE || height > MAX_SURFACE_EDGE {
            return Err(ConfigError::SurfaceTooLarge { width, height, max: MAX_SURFACE_EDGE });
        }

        let cols = (width / cell_size) as usize;
        let rows = (height / cell_size) as usize;
        if cols == 0 || rows == 0 {
            return Err(ConfigError::DegenerateSurface { width, height, cell_size });
        }

        Ok(Self { cols, rows, cell_size })
    }
}
