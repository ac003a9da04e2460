/// RGBA8 color
pub type Rgba = [u8; 4];

pub const TRAIL_COLOR: Rgba = [44, 62, 80, 255]; // #2c3e50
pub const ANT_COLOR: Rgba = [231, 76, 60, 255]; // #e74c3c
pub const BACKGROUND_COLOR: Rgba = [236, 240, 241, 255]; // #ecf0f1

/// Axis-aligned pixel rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Pixel square covered by grid cell (x, y)
    pub const fn cell(x: usize, y: usize, cell_size: u32) -> Self {
        Self::new(x as u32 * cell_size, y as u32 * cell_size, cell_size, cell_size)
    }

    /// Smallest region covering both
    pub fn union(self, other: Region) -> Self {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.x.saturating_add(self.width).max(other.x.saturating_add(other.width));
        let y1 = self.y.saturating_add(self.height).max(other.y.saturating_add(other.height));
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// Anything the renderer can draw on.
pub trait Surface {
    /// Size in pixels as (width, height)
    fn size(&self) -> (u32, u32);

    /// Reallocate to a new size. Contents afterwards are unspecified.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill `region` with `color`
    fn paint(&mut self, region: Region, color: Rgba);

    /// Return `region` to the background
    fn clear(&mut self, region: Region);

    /// Return the whole surface to the background
    fn clear_all(&mut self) {
        let (width, height) = self.size();
        self.clear(Region::new(0, 0, width, height));
    }
}
