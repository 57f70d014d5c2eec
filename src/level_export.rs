use serde::Serialize;

use crate::core::{Puzzle, Vec2, render_level_to_string};

#[derive(Serialize, Debug)]
struct JsonLevel {
    width: i32,
    height: i32,
    player: Vec2,
    goals: usize,
    rows: Vec<String>,
}

pub fn get_json_level(puzzle: &Puzzle) -> Result<String, serde_json::Error> {
    let rows = render_level_to_string(&puzzle.grid)
        .lines()
        .map(str::to_string)
        .collect();
    let json_level = JsonLevel {
        width: puzzle.grid.width(),
        height: puzzle.grid.height(),
        player: puzzle.player,
        goals: puzzle.total_goals,
        rows,
    };
    serde_json::to_string_pretty(&json_level)
}
