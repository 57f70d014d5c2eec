use crate::core::grid::Grid;
use crate::core::models::{Puzzle, Tile, Vec2};

/// Reads a level in the usual Sokoban text notation.
///
/// Blank lines are skipped, short rows are padded with floor and unknown characters read as
/// floor. When several player tiles are present the last one wins.
pub fn parse_level(s: &str) -> Puzzle {
    let mut rows: Vec<Vec<Tile>> = Vec::new();
    let mut player = Vec2 { i: 0, j: 0 };
    let max_width = s.lines().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut i = 0;
    for line in s.lines() {
        let line = line.trim_matches('\n');
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(max_width);
        for (j, ch) in line.chars().enumerate() {
            let tile = Tile::from_char(ch).unwrap_or(Tile::Floor);
            if tile.has_player() {
                player = Vec2 {
                    i: i as i32,
                    j: j as i32,
                };
            }
            row.push(tile);
        }
        // Pad row to max width with Floor
        while row.len() < max_width {
            row.push(Tile::Floor);
        }
        rows.push(row);
        i += 1;
    }

    let grid = Grid::from_rows(rows).unwrap_or_else(|| Grid::new_with_size(0, 0, Tile::Floor));
    Puzzle::new(grid, player)
}

pub fn render_level_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        for tile in row {
            result.push(tile.to_char());
        }
        result.push('\n');
    }
    result
}
