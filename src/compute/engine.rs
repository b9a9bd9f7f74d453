//! Simulation engine - advances the alive set one generation at a time.
//!
//! Only alive cells and their neighbors are evaluated each step. A cell that
//! is neither alive nor adjacent to an alive cell has zero live neighbors and
//! cannot be born, so the infinite dead remainder of the plane is skipped.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Bounds, CellSet, Coord, live_neighbor_count, neighbors};
use crate::schema::{Seed, Stamp};

/// Conway's B3/S23 rule for a single cell.
#[inline]
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the generation following `prev`.
///
/// Candidates are `prev` plus every neighbor of `prev`; every other cell
/// stays dead. Cells on the `i64` edge are stepped with the neighbors that
/// exist, so the whole `i64` range is usable without overflow.
pub fn step_cells(prev: &CellSet) -> CellSet {
    let mut candidates: HashSet<Coord> = HashSet::with_capacity(prev.len() * 9);
    for &c in prev {
        candidates.insert(c);
        candidates.extend(neighbors(c));
    }
    log::trace!(
        "evaluating {} candidates for {} alive cells",
        candidates.len(),
        prev.len()
    );

    candidates
        .into_iter()
        .filter(|&c| next_state(prev.contains(c), live_neighbor_count(prev, c)))
        .collect()
}

/// Owns the current generation and tracks convergence.
///
/// `finished` is recomputed by every [`step`](Self::step): it is `true`
/// when the step left the alive set unchanged (a still life) or emptied it
/// (extinction). Oscillators never report finished.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    cells: CellSet,
    generation: u64,
    finished: bool,
}

impl SimulationEngine {
    /// Empty plane at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine starting from `cells` at generation 0.
    pub fn from_cells(cells: CellSet) -> Self {
        Self {
            cells,
            generation: 0,
            finished: false,
        }
    }

    /// Engine starting from the cells produced by `seed`.
    pub fn from_seed(seed: &Seed) -> Self {
        Self::from_cells(seed.to_cells())
    }

    /// Flip one cell. Does not touch the generation counter or `finished`.
    pub fn toggle(&mut self, c: Coord) {
        self.cells.toggle(c);
    }

    /// Toggle every cell of `stamp`.
    pub fn stamp(&mut self, stamp: &Stamp) {
        log::debug!(
            "stamping {} at ({}, {})",
            stamp.pattern.name(),
            stamp.anchor.0,
            stamp.anchor.1
        );
        stamp.apply(&mut self.cells);
    }

    /// Apply every stamp of `seed` in order.
    pub fn seed(&mut self, seed: &Seed) {
        for stamp in &seed.stamps {
            self.stamp(stamp);
        }
    }

    /// Advance exactly one generation.
    pub fn step(&mut self) {
        let next = step_cells(&self.cells);
        let prev = std::mem::replace(&mut self.cells, next);

        self.finished = self.cells.is_empty() || self.cells == prev;
        self.generation += 1;

        log::debug!(
            "generation {}: {} alive{}",
            self.generation,
            self.cells.len(),
            if self.finished { " (converged)" } else { "" }
        );
    }

    /// Step until converged or `max_steps` steps have run.
    ///
    /// Returns the number of steps taken.
    pub fn run(&mut self, max_steps: u64) -> u64 {
        let mut taken = 0;
        while taken < max_steps {
            self.step();
            taken += 1;
            if self.finished {
                break;
            }
        }
        taken
    }

    /// Current alive set.
    #[inline]
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// Number of steps taken since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the most recent step produced an unchanged or empty alive set.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.cells.len()
    }
}

/// Simulation statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub generation: u64,
    pub population: usize,
    pub finished: bool,
    pub bounds: Option<Bounds>,
}

impl SimulationStats {
    /// Compute statistics from the engine's current state.
    pub fn from_engine(engine: &SimulationEngine) -> Self {
        Self {
            generation: engine.generation(),
            population: engine.population(),
            finished: engine.is_finished(),
            bounds: engine.cells().bounds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Pattern;
    use proptest::prelude::*;

    fn stamped(pattern: Pattern, row: i64, col: i64) -> SimulationEngine {
        let mut engine = SimulationEngine::new();
        engine.stamp(&Stamp::new(pattern, row, col));
        engine
    }

    /// Rule evaluated over every cell of the padded bounding box.
    fn step_brute_force(prev: &CellSet) -> CellSet {
        let Some(bounds) = prev.bounds() else {
            return CellSet::new();
        };
        let area = bounds.padded(1);
        let mut next = CellSet::new();
        for row in area.min_row..=area.max_row {
            for col in area.min_col..=area.max_col {
                let c = Coord::new(row, col);
                let mut count = 0;
                for d_row in -1..=1 {
                    for d_col in -1..=1 {
                        if (d_row, d_col) != (0, 0) && prev.contains(c.offset(d_row, d_col)) {
                            count += 1;
                        }
                    }
                }
                if next_state(prev.contains(c), count) {
                    next.insert(c);
                }
            }
        }
        next
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "survival with {n}");
            assert_eq!(next_state(false, n), n == 3, "birth with {n}");
        }
    }

    #[test]
    fn test_empty_engine_converges_immediately() {
        let mut engine = SimulationEngine::new();
        assert_eq!(engine.generation(), 0);
        assert!(!engine.is_finished());

        engine.step();
        assert!(engine.cells().is_empty());
        assert!(engine.is_finished());
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_toggle_does_not_touch_counters() {
        let mut engine = SimulationEngine::new();
        engine.toggle(Coord::new(0, 0));
        engine.toggle(Coord::new(9, 9));
        assert_eq!(engine.population(), 2);
        assert_eq!(engine.generation(), 0);
        assert!(!engine.is_finished());

        engine.step();
        assert!(engine.cells().is_empty());
        assert!(engine.is_finished());

        engine.toggle(Coord::new(1, 1));
        assert!(engine.is_finished());
        assert_eq!(engine.generation(), 1);

        // The next step recomputes the flag from scratch.
        engine.toggle(Coord::new(1, 2));
        engine.toggle(Coord::new(2, 1));
        engine.step();
        assert!(!engine.is_finished());
        assert_eq!(engine.population(), 4);
    }

    #[test]
    fn test_block_is_fixed_point() {
        for (row, col) in [(0, 0), (-100, 37), (1_i64 << 40, -(1_i64 << 40))] {
            let mut engine = stamped(Pattern::Block, row, col);
            let before = engine.cells().clone();

            engine.step();
            assert_eq!(engine.cells(), &before);
            assert!(engine.is_finished());

            // Stepping a converged engine keeps it converged.
            engine.step();
            assert_eq!(engine.cells(), &before);
            assert!(engine.is_finished());
            assert_eq!(engine.generation(), 2);
        }
    }

    #[test]
    fn test_blinker_oscillates_without_converging() {
        let mut engine = stamped(Pattern::Blinker, 5, 1);
        let original = engine.cells().clone();

        engine.step();
        assert!(!engine.is_finished());
        let vertical: CellSet = [Coord::new(4, 1), Coord::new(5, 1), Coord::new(6, 1)]
            .into_iter()
            .collect();
        assert_eq!(engine.cells(), &vertical);

        engine.step();
        assert!(!engine.is_finished());
        assert_eq!(engine.cells(), &original);
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let mut engine = stamped(Pattern::Glider, 1, 5);
        let original = engine.cells().clone();

        for _ in 0..4 {
            engine.step();
            assert_eq!(engine.population(), 5);
            assert!(!engine.is_finished());
        }
        assert_eq!(engine.cells(), &original.translated(1, 1));
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut engine = SimulationEngine::new();
        engine.toggle(Coord::new(-3, 8));

        engine.step();
        assert!(engine.cells().is_empty());
        assert!(engine.is_finished());
    }

    #[test]
    fn test_step_at_lattice_edge() {
        let mut engine = SimulationEngine::new();
        engine.toggle(Coord::new(i64::MAX, 0));
        engine.step();
        assert!(engine.cells().is_empty());
        assert!(engine.is_finished());

        // A block in the corner still holds.
        let corner: CellSet = [
            Coord::new(i64::MAX, i64::MAX),
            Coord::new(i64::MAX, i64::MAX - 1),
            Coord::new(i64::MAX - 1, i64::MAX),
            Coord::new(i64::MAX - 1, i64::MAX - 1),
        ]
        .into_iter()
        .collect();
        let mut engine = SimulationEngine::from_cells(corner.clone());
        engine.step();
        assert_eq!(engine.cells(), &corner);
        assert!(engine.is_finished());
    }

    #[test]
    fn test_run_stops_on_convergence() {
        // An L-tromino becomes a block after one step, then holds.
        let mut engine = SimulationEngine::from_cells(
            [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0)]
                .into_iter()
                .collect(),
        );
        let taken = engine.run(100);
        assert_eq!(taken, 2);
        assert!(engine.is_finished());
        assert_eq!(engine.population(), 4);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_run_respects_step_limit() {
        let mut engine = stamped(Pattern::Blinker, 0, 0);
        assert_eq!(engine.run(7), 7);
        assert_eq!(engine.generation(), 7);
        assert!(!engine.is_finished());
    }

    #[test]
    fn test_r_pentomino_stabilizes() {
        let mut engine = stamped(Pattern::RPentomino, 0, 0);
        let taken = engine.run(1200);

        // Settles by generation 1103 into blinkers, still lifes and six
        // escaping gliders, so the fixed-point check never fires.
        assert_eq!(taken, 1200);
        assert!(!engine.is_finished());
        assert_eq!(engine.population(), 116);
    }

    #[test]
    fn test_stats() {
        let engine = stamped(Pattern::Block, 2, 3);
        let stats = SimulationStats::from_engine(&engine);
        assert_eq!(stats.generation, 0);
        assert_eq!(stats.population, 4);
        assert!(!stats.finished);
        assert_eq!(
            stats.bounds,
            Some(Bounds {
                min_row: 2,
                max_row: 3,
                min_col: 3,
                max_col: 4,
            })
        );
    }

    #[test]
    fn test_default_seed_runs() {
        let mut engine = SimulationEngine::from_seed(&Seed::default());
        assert_eq!(engine.population(), 17);

        let mut seeded = SimulationEngine::new();
        seeded.seed(&Seed::default());
        assert_eq!(seeded.cells(), engine.cells());

        engine.run(10);
        assert_eq!(engine.generation(), 10);
    }

    proptest! {
        #[test]
        fn prop_step_matches_brute_force(
            cells in prop::collection::vec((-12i64..12, -12i64..12), 0..80),
        ) {
            let prev: CellSet = cells.into_iter().collect();
            prop_assert_eq!(step_cells(&prev), step_brute_force(&prev));
        }

        #[test]
        fn prop_step_is_deterministic(
            cells in prop::collection::vec((-8i64..8, -8i64..8), 0..40),
        ) {
            let prev: CellSet = cells.into_iter().collect();
            let mut a = SimulationEngine::from_cells(prev.clone());
            let mut b = SimulationEngine::from_cells(prev);
            a.step();
            b.step();
            prop_assert_eq!(a.cells(), b.cells());
            prop_assert_eq!(a.is_finished(), b.is_finished());
        }
    }
}
