use thiserror::Error;

/// Errors raised while sizing the grid from a pixel surface.
///
/// Stepping and rendering never fail once construction succeeded, so this is
/// the only error type in the crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,

    #[error("surface {width}x{height} is smaller than one {cell_size}px cell")]
    DegenerateSurface {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("surface {width}x{height} exceeds the {max}px edge limit")]
    SurfaceTooLarge { width: u32, height: u32, max: u32 },

    #[error("grid needs at least one column and one row, got {cols}x{rows}")]
    EmptyGrid { cols: usize, rows: usize },
}
