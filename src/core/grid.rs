use crate::core::models::{Direction, Tile, Vec2};

/// A rectangular tile array stored row-major, sized once at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Tile>,
}

impl Grid {
    pub fn new_with_size(width: i32, height: i32, default: Tile) -> Self {
        let cells = vec![default; (width.max(0) * height.max(0)) as usize];
        Grid {
            width,
            height,
            cells,
        }
    }

    /// Walls around the outer ring, floor everywhere inside.
    pub fn bordered(width: i32, height: i32) -> Self {
        let mut grid = Grid::new_with_size(width, height, Tile::Floor);
        for pos in grid.positions().collect::<Vec<_>>() {
            if grid.is_border(&pos) {
                grid[&pos] = Tile::Wall;
            }
        }
        grid
    }

    /// Builds a grid from equal-length rows. Returns None when rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Option<Self> {
        let height = rows.len() as i32;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as i32;
        if rows.iter().any(|r| r.len() as i32 != width) {
            return None;
        }
        Some(Grid {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.height && pos.j >= 0 && pos.j < self.width
    }

    pub fn get(&self, pos: &Vec2) -> Option<Tile> {
        if !self.contains(pos) {
            return None;
        }
        Some(self[pos])
    }

    pub fn is_border(&self, pos: &Vec2) -> bool {
        pos.i == 0 || pos.j == 0 || pos.i == self.height - 1 || pos.j == self.width - 1
    }

    /// True when any of the four orthogonal neighbours holds `tile`.
    pub fn is_adjacent_to(&self, pos: &Vec2, tile: Tile) -> bool {
        Direction::ALL
            .iter()
            .any(|dir| self.get(&(*pos + dir.offset())) == Some(tile))
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |i| (0..width).map(move |j| Vec2 { i, j }))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&c| c == tile).count()
    }
}

impl std::ops::Index<&Vec2> for Grid {
    type Output = Tile;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.i * self.width + index.j) as usize]
    }
}

impl std::ops::IndexMut<&Vec2> for Grid {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.i * self.width + index.j) as usize]
    }
}
