use crate::core::grid::Grid;
use crate::core::models::{Puzzle, Tile, Vec2};

impl Tile {
    /// Tiles the player may step onto, and a box may be pushed onto.
    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Floor | Tile::Goal)
    }

    pub fn has_box(self) -> bool {
        matches!(self, Tile::Box | Tile::BoxOnGoal)
    }

    pub fn has_player(self) -> bool {
        matches!(self, Tile::Player | Tile::PlayerOnGoal)
    }

    pub fn is_goal(self) -> bool {
        matches!(self, Tile::Goal | Tile::BoxOnGoal | Tile::PlayerOnGoal)
    }

    pub fn with_player(self) -> Tile {
        match self {
            Tile::Floor => Tile::Player,
            Tile::Goal => Tile::PlayerOnGoal,
            other => other,
        }
    }

    pub fn without_player(self) -> Tile {
        match self {
            Tile::Player => Tile::Floor,
            Tile::PlayerOnGoal => Tile::Goal,
            other => other,
        }
    }

    pub fn with_box(self) -> Tile {
        match self {
            Tile::Floor => Tile::Box,
            Tile::Goal => Tile::BoxOnGoal,
            other => other,
        }
    }

    pub fn without_box(self) -> Tile {
        match self {
            Tile::Box => Tile::Floor,
            Tile::BoxOnGoal => Tile::Goal,
            other => other,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => ' ',
            Tile::Player => '@',
            Tile::Box => '$',
            Tile::Goal => '.',
            Tile::BoxOnGoal => '*',
            Tile::PlayerOnGoal => '+',
        }
    }

    pub fn from_char(ch: char) -> Option<Tile> {
        Some(match ch {
            '#' => Tile::Wall,
            ' ' => Tile::Floor,
            '@' => Tile::Player,
            '$' => Tile::Box,
            '.' => Tile::Goal,
            '*' => Tile::BoxOnGoal,
            '+' => Tile::PlayerOnGoal,
            _ => return None,
        })
    }
}

impl Puzzle {
    /// Wraps a grid with fresh goal bookkeeping and an empty history.
    pub fn new(grid: Grid, player: Vec2) -> Puzzle {
        let total_goals = grid.positions().filter(|p| grid[p].is_goal()).count();
        let remaining_goals = total_goals - grid.count(Tile::BoxOnGoal);
        Puzzle {
            grid,
            player,
            total_goals,
            remaining_goals,
            history: Vec::new(),
        }
    }

    pub fn boxes_on_goals(&self) -> usize {
        self.grid.count(Tile::BoxOnGoal)
    }

    pub fn is_won(&self) -> bool {
        self.boxes_on_goals() == self.total_goals
    }
}
