use serde::Serialize;
use std::ops::Add;

use crate::core::grid::Grid;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Tile {
    Wall,
    Floor,
    Player,
    Box,
    Goal,
    BoxOnGoal,
    PlayerOnGoal,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub const fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

/// A box displaced by a single push, recorded so undo can put it back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoxPush {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HistoryEntry {
    pub player: Vec2,
    pub push: Option<BoxPush>,
}

/// The board being played: tiles, where the player stands, goal bookkeeping and undo history.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub grid: Grid,
    pub player: Vec2,
    pub total_goals: usize,
    pub remaining_goals: usize,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUpdate {
    Moved(GameChangeType),
    Rejected(MoveRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    Wall,
    BoxBlocked,
    OutOfBounds,
}
