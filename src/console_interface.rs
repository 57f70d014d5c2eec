use crate::core::{Direction, GameState, Grid, InputEvent, RoundOutcome, Tile};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io;
use std::time::{Duration, Instant};

pub const MENU_LINES: [&str; 2] = ["Press Enter To Start Game", "To See How To Play, Press H"];

pub const CONTROLS_LINES: [&str; 7] = [
    "Sokoban Rules",
    "1. Objective: Push all the boxes onto the goals.",
    "2. How to play: Move with the arrow keys or W/A/S/D.",
    "3. Winning Condition: Cover every goal with a box before the timer runs out.",
    "4. New Map: A new map is generated a few seconds after you win or lose.",
    "5. Undo: Press Backspace or U to undo the last movement.",
    "To return to main menu, Press 'Esc'",
];

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| match state.session.state() {
        GameState::Menu => render_text_screen(f, "Sokoban", &MENU_LINES),
        GameState::Controls => render_text_screen(f, "How To Play", &CONTROLS_LINES),
        GameState::Playing => render_playing(f, state),
    })?;
    Ok(())
}

fn render_text_screen(f: &mut Frame, title: &str, lines: &[&str]) {
    let area = centered_rect(f.area(), 84, lines.len() as u16 + 4);
    let text: Vec<Line> = lines.iter().map(|&l| Line::from(l)).collect();
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_playing(f: &mut Frame, state: &GameRenderState) {
    let session = state.session;
    let puzzle = session.puzzle();
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let status = format!(
        "Time left: {} seconds | Difficulty: {} | Goals left: {}/{}",
        session.remaining_secs(state.now),
        session.config().difficulty.label(),
        puzzle.remaining_goals,
        puzzle.total_goals,
    );
    let status_paragraph = Paragraph::new(status)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    f.render_widget(status_paragraph, chunks[0]);

    // Game area
    let game_paragraph = Paragraph::new(render_grid_lines(&puzzle.grid))
        .block(Block::default().borders(Borders::ALL).title("Sokoban"))
        .alignment(Alignment::Center);
    f.render_widget(game_paragraph, chunks[1]);

    let instructions = "Arrows/WASD: move | Backspace/U: undo | Esc: menu | Q: quit";
    let instruction_paragraph = Paragraph::new(instructions)
        .block(Block::default().borders(Borders::ALL).title("Instructions"))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(instruction_paragraph, chunks[2]);

    if let Some(outcome) = state.banner {
        render_banner(f, outcome);
    }
}

fn render_banner(f: &mut Frame, outcome: RoundOutcome) {
    let message = banner_text(outcome);
    let area = centered_rect(f.area(), message.len() as u16 + 8, 3);
    let paragraph = Paragraph::new(message)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn banner_text(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Won => "YOU WIN!",
        RoundOutcome::TimeUp => "Time's Up! You Lose!",
    }
}

fn render_grid_lines(grid: &Grid) -> Vec<Line<'static>> {
    grid.rows()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&tile| Span::styled(tile.to_char().to_string(), tile_style(tile)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn tile_style(tile: Tile) -> Style {
    match tile {
        Tile::Wall => Style::default().fg(Color::DarkGray),
        Tile::Floor => Style::default(),
        Tile::Player | Tile::PlayerOnGoal => {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        }
        Tile::Box => Style::default().fg(Color::Yellow),
        Tile::Goal => Style::default().fg(Color::Red),
        Tile::BoxOnGoal => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Drains every key press already waiting, blocking at most `timeout` for the first one.
pub fn poll_inputs(timeout: Duration) -> Result<Vec<InputEvent>, Box<dyn std::error::Error>> {
    let mut inputs = Vec::new();
    let mut wait = timeout;
    while event::poll(wait)? {
        if let Event::Key(key) = event::read()? {
            if let Some(input) = map_key(key) {
                inputs.push(input);
            }
        }
        wait = Duration::ZERO;
    }
    Ok(inputs)
}

pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputEvent::Quit),
            _ => None,
        };
    }
    Some(match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Quit,
        KeyCode::Enter => InputEvent::Confirm,
        KeyCode::Char('h') | KeyCode::Char('H') => InputEvent::Help,
        KeyCode::Esc => InputEvent::Cancel,
        KeyCode::Backspace | KeyCode::Char('u') | KeyCode::Char('U') => InputEvent::Undo,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => InputEvent::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            InputEvent::Move(Direction::Down)
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            InputEvent::Move(Direction::Left)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            InputEvent::Move(Direction::Right)
        }
        _ => return None,
    })
}

/// Caps the main loop at a fixed number of frames per second.
pub struct FrameClock {
    frame: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> FrameClock {
        FrameClock {
            frame,
            last_tick: Instant::now(),
        }
    }

    /// Sleeps out whatever is left of the current frame.
    pub fn tick(&mut self) {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        self.last_tick = Instant::now();
    }
}
