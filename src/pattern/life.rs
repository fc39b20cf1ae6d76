//! Game of Life with fading trails
//!
//! Rule B3/S23 on a toroidal world. Life state and rendering state are kept
//! apart: a cell that dies keeps its hue and loses brightness over the
//! following generations, leaving an afterglow.
//!
//! Each generation runs in two passes. The first computes every `alive`
//! from the frozen `prev_alive` snapshot, the second copies `alive` back
//! into `prev_alive`, so results never depend on iteration order.

use embassy_time::Instant;
use rand::{Rng, RngCore};

use super::Pattern;
use crate::{
    color::hsv,
    config::{DENSITY_SCALE, LifeConfig},
    grid::PixelGrid,
    timer::Timer,
};

/// Below this population B3/S23 cannot sustain itself
pub const MIN_POPULATION: usize = 3;

/// One world site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    /// `alive` as of the end of the previous generation
    pub prev_alive: bool,
    /// Hue captured at birth
    pub hue: u8,
    pub saturation: u8,
    pub brightness: u8,
}

impl Cell {
    fn spawn(&mut self, hue: u8, saturation: u8) {
        self.alive = true;
        self.hue = hue;
        self.saturation = saturation;
        self.brightness = 255;
    }
}

/// Distinct toroidal offsets `-1, 0, +1` along an axis of `len` cells.
///
/// On axes shorter than three cells the offsets coincide and would count
/// the same neighbor (or the cell itself) more than once.
const fn wrap_offsets(len: usize) -> ([usize; 3], usize) {
    match len {
        0 | 1 => ([0, 0, 0], 1),
        2 => ([0, 1, 0], 2),
        _ => ([len - 1, 0, 1], 3),
    }
}

#[derive(Debug, Clone)]
pub struct LifeSimulation<const N: usize, const W: usize, const H: usize> {
    /// Column-major: `x * H + y`
    cells: [Cell; N],
    hue: u8,
    /// Next generation refills the world at bootstrap density
    starting: bool,
    step_timer: Timer,
    config: LifeConfig,
}

impl<const N: usize, const W: usize, const H: usize> LifeSimulation<N, W, H> {
    /// Create an empty world that seeds itself on its first generation
    pub fn new(config: &LifeConfig, now: Instant) -> Self {
        Self {
            cells: [Cell::default(); N],
            hue: 0,
            starting: true,
            step_timer: Timer::new(now, config.speed),
            config: *config,
        }
    }

    #[inline]
    const fn cell_index(x: usize, y: usize) -> usize {
        x * H + y
    }

    /// Cell at a logical coordinate
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[Self::cell_index(x, y)]
    }

    /// Current global hue given to newborn cells
    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub const fn is_starting(&self) -> bool {
        self.starting
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Kill every cell and drop all trails
    pub fn clear(&mut self) {
        self.cells = [Cell::default(); N];
        self.starting = false;
    }

    /// Bring the given coordinates to life. Out-of-range points are ignored.
    pub fn seed(&mut self, points: &[(usize, usize)]) {
        for &(x, y) in points {
            if x < W && y < H {
                let cell = &mut self.cells[Self::cell_index(x, y)];
                cell.spawn(self.hue, self.config.saturation);
                cell.prev_alive = true;
            }
        }
        self.starting = false;
    }

    /// Request a bootstrap refill on the next generation
    pub fn restart(&mut self) {
        self.starting = true;
    }

    /// Live neighbors in the previous generation, wrapping at every edge
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (xs, x_len) = wrap_offsets(W);
        let (ys, y_len) = wrap_offsets(H);
        let mut count = 0;
        for &dx in &xs[..x_len] {
            for &dy in &ys[..y_len] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x + dx) % W;
                let ny = (y + dy) % H;
                if self.cells[Self::cell_index(nx, ny)].prev_alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance the world by one generation
    pub fn step(&mut self, rng: &mut dyn RngCore) {
        if N == 0 {
            return;
        }

        let density = if self.starting {
            self.config.bootstrap_density
        } else {
            self.config.density
        };
        self.starting = false;
        self.hue = self.hue.wrapping_add(self.config.hue_speed);

        let decay = 255 - self.config.trail_length;
        let saturation = self.config.saturation;
        let hue = self.hue;

        for x in 0..W {
            for y in 0..H {
                let neighbors = self.live_neighbors(x, y);
                let cell = &mut self.cells[Self::cell_index(x, y)];

                if cell.prev_alive {
                    if !(2..=3).contains(&neighbors) {
                        cell.alive = false;
                    }
                } else if neighbors == 3 {
                    cell.spawn(hue, saturation);
                } else {
                    cell.brightness = cell.brightness.saturating_sub(decay);
                }

                // Spontaneous sparks keep the world from dying out
                if density > 0 && rng.gen_range(0..DENSITY_SCALE) < density && !cell.alive {
                    cell.spawn(hue, saturation);
                }
            }
        }

        let mut population = 0;
        for cell in &mut self.cells {
            cell.prev_alive = cell.alive;
            if cell.alive {
                population += 1;
            }
        }

        if population < MIN_POPULATION {
            self.starting = true;
        }
    }

    /// Write every cell into the grid
    pub fn draw(&self, grid: &mut PixelGrid<N, W, H>) {
        for x in 0..W {
            for y in 0..H {
                let cell = self.cells[Self::cell_index(x, y)];
                grid.set(x, y, hsv(cell.hue, cell.saturation, cell.brightness));
            }
        }
    }
}

impl<const N: usize, const W: usize, const H: usize> Pattern<N, W, H> for LifeSimulation<N, W, H> {
    fn render(&mut self, now: Instant, grid: &mut PixelGrid<N, W, H>, rng: &mut dyn RngCore) {
        if self.step_timer.poll(now) {
            self.step(rng);
        }
        self.draw(grid);
    }
}
