pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod neighborhood;
pub mod render;
pub mod rng;
pub mod rule;
pub mod seed;
pub mod simulation;

use log::debug;

use cell::FloatPair;
use config::Params;
use error::Result;
use rule::RuleKind;
use simulation::Simulation;

pub use error::Error;

/// A running automaton, tagged by the rule that drives it.
#[derive(Clone, Debug)]
pub enum World {
    Life(Simulation<u32>),
    Lifelike(Simulation<FloatPair>),
}

impl World {
    /// Build and seed the grid described by `params`.
    pub fn new(params: &Params) -> Result<Self> {
        let world = match params.kind {
            RuleKind::Life => {
                let alive = seed::glider(params.glider_origin);
                let grid = seed::life_grid(params.width, params.height, &alive)?;
                World::Life(Simulation::new(grid, rule::life)?)
            }
            RuleKind::Lifelike => {
                let grid =
                    seed::lifelike_grid(params.width, params.height, params.block(), params.seed)?;
                World::Lifelike(Simulation::new(grid, rule::lifelike)?)
            }
        };
        debug!("created {} world {}x{}", params.kind, params.width, params.height);
        Ok(world)
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            World::Life(_) => RuleKind::Life,
            World::Lifelike(_) => RuleKind::Lifelike,
        }
    }

    pub fn step(&mut self) {
        match self {
            World::Life(sim) => sim.step(),
            World::Lifelike(sim) => sim.step(),
        }
    }

    pub fn step_par(&mut self) {
        match self {
            World::Life(sim) => sim.step_par(),
            World::Lifelike(sim) => sim.step_par(),
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            World::Life(sim) => sim.generation(),
            World::Lifelike(sim) => sim.generation(),
        }
    }

    pub fn population(&self) -> usize {
        match self {
            World::Life(sim) => sim.population(),
            World::Lifelike(sim) => sim.population(),
        }
    }

    /// Grid `(width, height)` in cells.
    pub fn size(&self) -> (usize, usize) {
        match self {
            World::Life(sim) => (sim.grid().w, sim.grid().h),
            World::Lifelike(sim) => (sim.grid().w, sim.grid().h),
        }
    }

    /// RGBA pixels, `cell_size` pixels per cell side.
    pub fn render(&self, cell_size: usize) -> Vec<u8> {
        match self {
            World::Life(sim) => render::render_life(sim.grid(), cell_size),
            World::Lifelike(sim) => render::render_lifelike(sim.grid(), cell_size),
        }
    }
}

/// A world plus the driver policy: how many steps make one visible tick,
/// and whether steps run on the rayon pool.
#[derive(Clone, Debug)]
pub struct Engine {
    pub world: World,
    pub params: Params,
}

impl Engine {
    pub fn new(params: Params) -> Result<Self> {
        let world = World::new(&params)?;
        Ok(Self { world, params })
    }

    /// Run `steps_per_tick` generations.
    pub fn tick(&mut self) {
        for _ in 0..self.params.steps_per_tick {
            if self.params.parallel {
                self.world.step_par();
            } else {
                self.world.step();
            }
        }
    }

    pub fn render(&self) -> Vec<u8> {
        self.world.render(self.params.cell_size)
    }

    /// Frame `(width, height)` in pixels.
    pub fn frame_size(&self) -> (usize, usize) {
        let (w, h) = self.world.size();
        let s = self.params.cell_size.max(1);
        (w * s, h * s)
    }
}
