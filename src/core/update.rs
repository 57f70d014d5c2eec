use log::debug;

use crate::core::{BoxPush, Direction, GameChangeType, GameUpdate, HistoryEntry, MoveRejection, Puzzle};

pub fn step(puzzle: &mut Puzzle, direction: Direction) -> GameUpdate {
    let dir = direction.offset();
    let dest = puzzle.player + dir;
    let Some(dest_tile) = puzzle.grid.get(&dest) else {
        return GameUpdate::Rejected(MoveRejection::OutOfBounds);
    };

    let push = if dest_tile.has_box() {
        let beyond = dest + dir;
        let Some(beyond_tile) = puzzle.grid.get(&beyond) else {
            return GameUpdate::Rejected(MoveRejection::OutOfBounds);
        };
        if !beyond_tile.is_walkable() {
            return GameUpdate::Rejected(MoveRejection::BoxBlocked);
        }

        // Move box
        if dest_tile.is_goal() {
            puzzle.remaining_goals += 1;
        }
        if beyond_tile.is_goal() {
            puzzle.remaining_goals -= 1;
        }
        puzzle.grid[&beyond] = beyond_tile.with_box();
        puzzle.grid[&dest] = dest_tile.without_box();
        Some(BoxPush {
            from: dest,
            to: beyond,
        })
    } else if dest_tile.is_walkable() {
        None
    } else {
        return GameUpdate::Rejected(MoveRejection::Wall);
    };

    // Move player
    let origin = puzzle.player;
    puzzle.grid[&origin] = puzzle.grid[&origin].without_player();
    puzzle.grid[&dest] = puzzle.grid[&dest].with_player();
    puzzle.player = dest;
    puzzle.history.push(HistoryEntry {
        player: origin,
        push,
    });

    if push.is_some() {
        GameUpdate::Moved(GameChangeType::PlayerAndBoxMove)
    } else {
        GameUpdate::Moved(GameChangeType::PlayerMove)
    }
}

/// Steps back one move. A push is reverted along with the player, so goal counts stay in line
/// with the board. Does nothing once the history is empty.
pub fn undo(puzzle: &mut Puzzle) -> Option<HistoryEntry> {
    let entry = puzzle.history.pop()?;

    let current = puzzle.player;
    puzzle.grid[&current] = puzzle.grid[&current].without_player();

    if let Some(push) = entry.push {
        let pushed = puzzle.grid[&push.to];
        if pushed.is_goal() {
            puzzle.remaining_goals += 1;
        }
        puzzle.grid[&push.to] = pushed.without_box();

        let origin = puzzle.grid[&push.from];
        if origin.is_goal() {
            puzzle.remaining_goals -= 1;
        }
        puzzle.grid[&push.from] = origin.with_box();
    }

    puzzle.grid[&entry.player] = puzzle.grid[&entry.player].with_player();
    puzzle.player = entry.player;
    debug!("undo to {:?}, reverted push: {:?}", entry.player, entry.push);
    Some(entry)
}
