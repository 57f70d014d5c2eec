//! Random level generation.
//!
//! Levels are an empty walled room with a player, goals anywhere on the floor, and boxes kept
//! off the walls. Keeping boxes away from walls avoids the most obvious corner locks but does
//! not prove the level can be solved.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::errors::GenerationError;
use crate::core::grid::Grid;
use crate::core::models::{Puzzle, Tile, Vec2};

pub const MAX_SIDE: i32 = 1024;

pub fn generate<R: Rng + ?Sized>(
    width: i32,
    height: i32,
    num_goals: usize,
    rng: &mut R,
) -> Result<Puzzle, GenerationError> {
    if !(3..=MAX_SIDE).contains(&width) || !(3..=MAX_SIDE).contains(&height) {
        return Err(GenerationError::InvalidDimensions { width, height });
    }
    if num_goals == 0 {
        return Err(GenerationError::NoGoals);
    }

    let mut grid = Grid::bordered(width, height);

    let mut free_spaces = floor_positions(&grid, |_| true);
    let not_enough_floor = GenerationError::NotEnoughFloor {
        requested: num_goals + 1,
        available: free_spaces.len(),
    };
    free_spaces.shuffle(rng);

    let Some(player) = free_spaces.pop() else {
        return Err(not_enough_floor);
    };
    grid[&player] = Tile::Player;

    for _ in 0..num_goals {
        let Some(goal) = free_spaces.pop() else {
            return Err(not_enough_floor);
        };
        grid[&goal] = Tile::Goal;
    }

    let mut box_spaces = floor_positions(&grid, |pos| !grid.is_adjacent_to(pos, Tile::Wall));
    if box_spaces.len() < num_goals {
        return Err(GenerationError::NotEnoughBoxSpace {
            requested: num_goals,
            available: box_spaces.len(),
        });
    }
    box_spaces.shuffle(rng);
    for pos in box_spaces.into_iter().take(num_goals) {
        grid[&pos] = Tile::Box;
    }

    debug!("generated {}x{} level with {} goals, player at {:?}", width, height, num_goals, player);
    Ok(Puzzle::new(grid, player))
}

fn floor_positions(grid: &Grid, keep: impl Fn(&Vec2) -> bool) -> Vec<Vec2> {
    grid.positions()
        .filter(|pos| grid[pos] == Tile::Floor && keep(pos))
        .collect()
}
