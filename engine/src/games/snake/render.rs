use super::game_state::SnakeEngine;
use super::types::CellState;

const EMPTY: char = '.';

fn glyph(state: CellState) -> char {
    match state {
        CellState::Head => '@',
        CellState::Body => 'o',
        CellState::Food => '*',
    }
}

impl SnakeEngine {
    /// One character per cell, rows top to bottom. Where cells overlap the
    /// earlier entry of `current_state` wins.
    pub fn render_text(&self) -> String {
        let width = self.field_size().width() as usize;
        let height = self.field_size().height() as usize;
        let mut grid = vec![vec![EMPTY; width]; height];

        for cell in self.current_state() {
            let slot = &mut grid[cell.coord.y as usize][cell.coord.x as usize];
            if *slot == EMPTY {
                *slot = glyph(cell.state);
            }
        }

        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
