//! Terminal front end for flowgrid boards.
//!
//! [`Game`] owns a board backed by a [`SpritePool`], turns [`Input`]s into
//! board edits, and renders the board as text: one status line followed by
//! one row per board row, two columns per cell.

pub mod pool;
pub mod terminal;

use flowgrid_core::{BoardConfig, ContentType, Point};
use flowgrid_paths::{Board, BoardError, Toggle};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

pub use pool::SpritePool;

/// Screen rows above the board.
pub const STATUS_ROWS: u16 = 1;

/// Screen columns per board cell.
pub const CELL_COLUMNS: u16 = 2;

/// Wall toggles attempted by one scatter.
pub const SCATTER_COUNT: usize = 8;

/// A user request, already mapped to board coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    ToggleWall(Point),
    ToggleDestination(Point),
    TogglePaths,
    ToggleGrid,
    Scatter,
    Quit,
}

/// Editor state: the board plus host-side display settings.
pub struct Game {
    board: Board<SpritePool>,
    show_grid: bool,
    last: Option<(Point, Toggle)>,
    rng: StdRng,
}

impl Game {
    /// Build a game for `config`, seeding scatter placement with `seed`.
    pub fn new(config: &BoardConfig, seed: u64) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::from_config(config, SpritePool::new())?,
            show_grid: false,
            last: None,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn board(&self) -> &Board<SpritePool> {
        &self.board
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Map a screen cell to the board coordinate under it.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Point> {
        let row = row.checked_sub(STATUS_ROWS)?;
        let p = Point::new((column / CELL_COLUMNS) as i32, row as i32);
        self.board.range().contains(p).then_some(p)
    }

    /// Apply an input. Returns `false` once the game should end.
    pub fn update(&mut self, input: Input) -> bool {
        match input {
            Input::ToggleWall(p) => self.last = Some((p, self.board.toggle_wall(p))),
            Input::ToggleDestination(p) => {
                self.last = Some((p, self.board.toggle_destination(p)));
            }
            Input::TogglePaths => {
                let show = !self.board.show_paths();
                self.board.set_show_paths(show);
            }
            Input::ToggleGrid => self.show_grid = !self.show_grid,
            Input::Scatter => self.scatter(SCATTER_COUNT),
            Input::Quit => return false,
        }
        true
    }

    /// Toggle walls at `n` random cells.
    pub fn scatter(&mut self, n: usize) {
        let size = self.board.size();
        let mut kept = 0;
        for _ in 0..n {
            let p = Point::new(
                self.rng.random_range(0..size.x),
                self.rng.random_range(0..size.y),
            );
            if self.board.toggle_wall(p) == Toggle::Applied {
                kept += 1;
            }
        }
        log::info!("scatter: {kept} of {n} wall toggles applied");
    }

    /// Render the status line and board rows.
    pub fn render(&self) -> Vec<String> {
        let size = self.board.size();
        let mut lines = Vec::with_capacity(size.y as usize + STATUS_ROWS as usize);
        lines.push(self.status());
        for y in 0..size.y {
            let mut line = String::with_capacity(size.x as usize * CELL_COLUMNS as usize);
            for x in 0..size.x {
                let p = Point::new(x, y);
                let Some(node) = self.board.at(p) else {
                    continue;
                };
                let pad = if self.show_grid { '·' } else { ' ' };
                match (node.content(), self.board.path_indicator(p)) {
                    (ContentType::Wall, Some(dir)) => {
                        line.push('█');
                        line.push(dir.arrow());
                    }
                    (ContentType::Wall, None) => line.push_str("██"),
                    (ContentType::Destination, _) => {
                        line.push('◆');
                        line.push(pad);
                    }
                    (ContentType::Empty, dir) => {
                        line.push(dir.map_or(pad, |d| d.arrow()));
                        line.push(pad);
                    }
                }
            }
            lines.push(line);
        }
        lines
    }

    fn status(&self) -> String {
        let pool = self.board.pool();
        let last = match self.last {
            Some((p, Toggle::Rejected)) => format!("  blocked at {p}"),
            _ => String::new(),
        };
        format!(
            "dest {} wall {} sprites {}{}  [v]paths [g]grid [r]scatter [q]uit",
            pool.live(ContentType::Destination),
            pool.live(ContentType::Wall),
            pool.created(),
            last
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(w: i32, h: i32) -> Game {
        Game::new(&BoardConfig::with_size(w, h), 1).unwrap()
    }

    #[test]
    fn cell_at_maps_screen_to_board() {
        let g = game(4, 3);
        assert_eq!(g.cell_at(0, 0), None);
        assert_eq!(g.cell_at(0, 1), Some(Point::new(0, 0)));
        assert_eq!(g.cell_at(3, 1), Some(Point::new(1, 0)));
        assert_eq!(g.cell_at(7, 3), Some(Point::new(3, 2)));
        assert_eq!(g.cell_at(8, 1), None);
        assert_eq!(g.cell_at(0, 4), None);
    }

    #[test]
    fn renders_arrows_towards_destination() {
        let g = game(3, 3);
        let lines = g.render();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("dest 1 wall 0"));
        assert_eq!(lines[1], "↓ ↓ ↓ ");
        assert_eq!(lines[2], "→ ◆ ← ");
        assert_eq!(lines[3], "↑ ↑ ↑ ");
    }

    #[test]
    fn walls_render_without_arrows_by_default() {
        let mut g = game(3, 3);
        assert!(g.update(Input::ToggleWall(Point::new(1, 0))));
        assert_eq!(g.render()[1], "↓ ██↓ ");
    }

    #[test]
    fn hidden_paths_and_grid_overlay() {
        let mut g = game(3, 3);
        g.update(Input::TogglePaths);
        g.update(Input::ToggleGrid);
        assert!(g.show_grid());
        assert_eq!(g.render()[2], "··◆···");
        g.update(Input::TogglePaths);
        assert_eq!(g.render()[2], "→·◆·←·");
    }

    #[test]
    fn rejected_toggle_shows_in_status() {
        let mut g = game(3, 3);
        g.update(Input::ToggleWall(Point::new(1, 0)));
        g.update(Input::ToggleWall(Point::new(0, 1)));
        assert!(g.render()[0].contains("blocked at (0, 1)"));
        assert_eq!(g.board().count(ContentType::Wall), 1);
    }

    #[test]
    fn scatter_keeps_board_solved() {
        let mut g = game(9, 7);
        for _ in 0..10 {
            assert!(g.update(Input::Scatter));
            assert!(g.board().is_solved());
        }
        let walls = g.board().count(ContentType::Wall);
        assert_eq!(g.board().pool().live(ContentType::Wall), walls);
    }

    #[test]
    fn quit_ends_the_game() {
        let mut g = game(2, 2);
        assert!(!g.update(Input::Quit));
    }
}
