use macroquad::prelude::*;
use tracing::warn;

use super::framebuffer::FrameBuffer;
use super::surface::{Region, Rgba, Surface};

/// Screen is the on-window surface.
///
/// Painting goes into a CPU-side [`FrameBuffer`] that persists between
/// frames, so only dirty cells are touched per tick. Painted areas are
/// accumulated into one damage rectangle and `present` uploads just that
/// part of the texture.
pub struct Screen {
    buffer: FrameBuffer,
    texture: Option<Texture2D>,
    damage: Option<Region>,
}

impl Screen {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: FrameBuffer::new(width, height),
            texture: None,
            damage: None,
        }
    }

    fn mark_damaged(&mut self, region: Region) {
        self.damage = Some(match self.damage {
            Some(damage) => damage.union(region),
            None => region,
        });
    }

    /// Upload pending changes and draw at (x, y)
    pub fn present(&mut self, x: f32, y: f32) {
        let (width, height) = self.buffer.size();
        let (Ok(w16), Ok(h16)) = (u16::try_from(width), u16::try_from(height)) else {
            warn!(width, height, "surface exceeds texture limits, not presenting");
            return;
        };
        if width == 0 || height == 0 {
            return;
        }

        let matches = self
            .texture
            .as_ref()
            .is_some_and(|t| t.width() as u32 == width && t.height() as u32 == height);

        if !matches {
            let texture = Texture2D::from_rgba8(w16, h16, self.buffer.pixels());
            texture.set_filter(FilterMode::Nearest);
            self.texture = Some(texture);
            self.damage = None;
        } else if let Some(damage) = self.damage.take() {
            if let (Some(texture), Some((part, bytes))) = (&self.texture, self.buffer.copy_region(damage)) {
                let image = Image {
                    bytes,
                    width: part.width as u16,
                    height: part.height as u16,
                };
                texture.update_part(
                    &image,
                    part.x as i32,
                    part.y as i32,
                    part.width as i32,
                    part.height as i32,
                );
            }
        }

        if let Some(texture) = &self.texture {
            draw_texture(texture, x, y, WHITE);
        }
    }
}

impl Surface for Screen {
    fn size(&self) -> (u32, u32) {
        self.buffer.size()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.buffer.resize(width, height);
        self.damage = Some(Region::new(0, 0, width, height));
    }

    fn paint(&mut self, region: Region, color: Rgba) {
        self.buffer.paint(region, color);
        self.mark_damaged(region);
    }

    fn clear(&mut self, region: Region) {
        self.buffer.clear(region);
        self.mark_damaged(region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::TRAIL_COLOR;

    #[test]
    fn test_damage_grows_to_cover_painted_cells() {
        let mut screen = Screen::new(64, 64);
        assert_eq!(screen.damage, None);

        screen.paint(Region::cell(2, 3, 4), TRAIL_COLOR);
        assert_eq!(screen.damage, Some(Region::new(8, 12, 4, 4)));

        screen.clear(Region::cell(5, 1, 4));
        assert_eq!(screen.damage, Some(Region::new(8, 4, 16, 12)));
    }

    #[test]
    fn test_damage_stays_small_for_incremental_tick() {
        use crate::domain::Simulation;
        use crate::rendering::Renderer;

        let mut sim = Simulation::new(100, 100).unwrap();
        let renderer = Renderer::new(4);
        let mut screen = Screen::new(400, 400);
        renderer.full_redraw(&mut screen, sim.grid(), sim.ant());
        screen.damage = None;

        sim.step_many(6);
        let dirty = sim.drain_dirty();
        renderer.incremental_redraw(&mut screen, sim.grid(), sim.ant(), &dirty);

        let damage = screen.damage.unwrap();
        assert!(damage.width <= 16 && damage.height <= 16, "{damage:?}");
    }
}
