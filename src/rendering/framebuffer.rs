use rayon::prelude::*;

use super::surface::{BACKGROUND_COLOR, Region, Rgba, Surface};

/// In-memory RGBA8 surface, row-major, 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    background: Rgba,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, BACKGROUND_COLOR)
    }

    pub fn with_background(width: u32, height: u32, background: Rgba) -> Self {
        let mut buffer = Self {
            width,
            height,
            background,
            pixels: vec![0; width as usize * height as usize * 4],
        };
        buffer.clear_all();
        buffer
    }

    /// Raw RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Clip `region` to the buffer, `None` if nothing is left
    fn clip(&self, region: Region) -> Option<(usize, usize, usize, usize)> {
        let x0 = region.x.min(self.width);
        let y0 = region.y.min(self.height);
        let x1 = region.x.saturating_add(region.width).min(self.width);
        let y1 = region.y.saturating_add(region.height).min(self.height);
        (x0 < x1 && y0 < y1).then_some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }

    /// Copy the clipped part of `region` out as tightly packed RGBA rows.
    /// Returns the clipped region alongside its bytes.
    pub fn copy_region(&self, region: Region) -> Option<(Region, Vec<u8>)> {
        let (x0, y0, x1, y1) = self.clip(region)?;
        let stride = self.width as usize * 4;
        let bytes = self.pixels[y0 * stride..y1 * stride]
            .chunks_exact(stride)
            .flat_map(|row| &row[x0 * 4..x1 * 4])
            .copied()
            .collect();
        let clipped = Region::new(x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32);
        Some((clipped, bytes))
    }

    fn fill(&mut self, region: Region, color: Rgba) {
        let Some((x0, y0, x1, y1)) = self.clip(region) else {
            return;
        };
        let stride = self.width as usize * 4;

        // Whole-surface fills dominate reset cost; split them across rows
        if x0 == 0 && y0 == 0 && x1 == self.width as usize && y1 == self.height as usize {
            self.pixels.par_chunks_mut(stride).for_each(|row| {
                row.chunks_exact_mut(4).for_each(|px| px.copy_from_slice(&color));
            });
            return;
        }

        for row in self.pixels[y0 * stride..y1 * stride].chunks_exact_mut(stride) {
            row[x0 * 4..x1 * 4]
                .chunks_exact_mut(4)
                .for_each(|px| px.copy_from_slice(&color));
        }
    }
}

impl Surface for FrameBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        *self = Self::with_background(width, height, self.background);
    }

    fn paint(&mut self, region: Region, color: Rgba) {
        self.fill(region, color);
    }

    fn clear(&mut self, region: Region) {
        self.fill(region, self.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = [255, 0, 0, 255];

    #[test]
    fn test_new_buffer_is_background() {
        let fb = FrameBuffer::new(3, 2);
        assert_eq!(fb.pixels().len(), 24);
        assert_eq!(fb.pixel(2, 1), Some(BACKGROUND_COLOR));
        assert_eq!(fb.pixel(3, 0), None);
    }

    #[test]
    fn test_paint_and_clear_region() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.paint(Region::new(2, 2, 2, 3), RED);
        assert_eq!(fb.pixel(2, 2), Some(RED));
        assert_eq!(fb.pixel(3, 4), Some(RED));
        assert_eq!(fb.pixel(4, 2), Some(BACKGROUND_COLOR));
        assert_eq!(fb.pixel(2, 5), Some(BACKGROUND_COLOR));

        fb.clear(Region::new(3, 3, 1, 1));
        assert_eq!(fb.pixel(3, 3), Some(BACKGROUND_COLOR));
        assert_eq!(fb.pixel(2, 3), Some(RED));
    }

    #[test]
    fn test_paint_clips_to_bounds() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.paint(Region::new(3, 3, 10, 10), RED);
        fb.paint(Region::new(9, 9, 2, 2), RED);
        assert_eq!(fb.pixel(3, 3), Some(RED));
        assert_eq!(fb.pixel(2, 3), Some(BACKGROUND_COLOR));
    }

    #[test]
    fn test_clear_all() {
        let mut fb = FrameBuffer::new(5, 5);
        fb.paint(Region::new(0, 0, 5, 5), RED);
        fb.clear_all();
        assert_eq!(fb, FrameBuffer::new(5, 5));
    }

    #[test]
    fn test_resize_keeps_background() {
        let mut fb = FrameBuffer::with_background(2, 2, RED);
        fb.resize(6, 1);
        assert_eq!(fb.size(), (6, 1));
        assert_eq!(fb.pixel(5, 0), Some(RED));
    }

    #[test]
    fn test_copy_region_packs_rows() {
        let mut fb = FrameBuffer::new(5, 4);
        fb.paint(Region::new(1, 1, 1, 1), RED);

        let (clipped, bytes) = fb.copy_region(Region::new(1, 1, 2, 2)).unwrap();
        assert_eq!(clipped, Region::new(1, 1, 2, 2));
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[0..4], &RED);
        assert_eq!(&bytes[4..8], &BACKGROUND_COLOR);
        assert_eq!(&bytes[8..12], &BACKGROUND_COLOR);
    }

    #[test]
    fn test_copy_region_clips() {
        let fb = FrameBuffer::new(4, 4);
        let (clipped, bytes) = fb.copy_region(Region::new(3, 2, 10, 10)).unwrap();
        assert_eq!(clipped, Region::new(3, 2, 1, 2));
        assert_eq!(bytes.len(), 8);
        assert!(fb.copy_region(Region::new(4, 0, 1, 1)).is_none());
    }

    #[test]
    fn test_zero_sized_buffer() {
        let mut fb = FrameBuffer::new(0, 0);
        fb.clear_all();
        fb.paint(Region::new(0, 0, 1, 1), RED);
        assert!(fb.pixels().is_empty());
    }
}
