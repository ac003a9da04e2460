use std::collections::HashSet;

use super::surface::{ANT_COLOR, Region, Rgba, Surface, TRAIL_COLOR};
use crate::domain::{Ant, Grid};

/// Renderer paints grid state onto a [`Surface`].
///
/// A full redraw touches every cell. An incremental redraw only repaints the
/// cells handed to it, which keeps per-frame cost proportional to how much
/// the ant changed rather than to the grid size. Both end by stamping the
/// ant marker, which is an overlay and never part of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    cell_size: u32,
    trail: Rgba,
    marker: Rgba,
}

impl Renderer {
    pub const fn new(cell_size: u32) -> Self {
        Self::with_colors(cell_size, TRAIL_COLOR, ANT_COLOR)
    }

    pub const fn with_colors(cell_size: u32, trail: Rgba, marker: Rgba) -> Self {
        Self { cell_size, trail, marker }
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Clear everything, then paint every filled cell and the ant.
    /// Returns the number of cells painted.
    pub fn full_redraw<S: Surface + ?Sized>(&self, surface: &mut S, grid: &Grid, ant: Ant) -> usize {
        surface.clear_all();

        let mut painted = 0;
        for (x, y, _) in grid.iter_cells().filter(|(_, _, cell)| cell.is_filled()) {
            surface.paint(Region::cell(x, y, self.cell_size), self.trail);
            painted += 1;
        }

        self.draw_ant(surface, ant);
        painted
    }

    /// Repaint only the cells in `dirty`, then the ant.
    /// Returns the number of cells repainted.
    pub fn incremental_redraw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        grid: &Grid,
        ant: Ant,
        dirty: &HashSet<usize>,
    ) -> usize {
        for &index in dirty {
            let (x, y) = grid.decode(index);
            let region = Region::cell(x, y, self.cell_size);
            surface.clear(region);
            if grid.at(index).is_filled() {
                surface.paint(region, self.trail);
            }
        }

        self.draw_ant(surface, ant);
        dirty.len()
    }

    fn draw_ant<S: Surface + ?Sized>(&self, surface: &mut S, ant: Ant) {
        surface.paint(Region::cell(ant.x, ant.y, self.cell_size), self.marker);
    }
}
