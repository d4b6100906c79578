//! Text rendering of a board.

use core::fmt;

use crate::board::Board;
use crate::common::CellState;
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;

const FOG: char = '~';
const SHIP: char = 'O';
const HIT: char = 'X';
const MISS: char = 'M';

/// Glyph for a cell. Under fog of war undamaged ship segments look like water.
pub fn glyph(cell: CellState, fog_of_war: bool) -> char {
    match cell {
        CellState::Fog => FOG,
        CellState::Ship if fog_of_war => FOG,
        CellState::Ship => SHIP,
        CellState::Hit => HIT,
        CellState::Miss => MISS,
    }
}

/// Grid with column numbers across the top and row letters down the side.
///
/// ```text
///   1 2 3 4 5 6 7 8 9 10
/// A O O ~ ~ ~ ~ ~ ~ ~ ~
/// B ~ ~ ~ M ~ ~ ~ ~ ~ ~
/// ```
pub struct BoardView<'a> {
    board: &'a Board,
    fog_of_war: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, fog_of_war: bool) -> Self {
        Self { board, fog_of_war }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = BOARD_SIZE as usize;
        write!(f, " ")?;
        for column in 1..=size {
            write!(f, " {}", column)?;
        }
        writeln!(f)?;
        for row in 0..size {
            write!(f, "{}", Coordinate::row_label(row))?;
            for column in 0..size {
                let coord = Coordinate::from_parts(row as u8, column as u8);
                write!(f, " {}", glyph(self.board.cell(coord), self.fog_of_war))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render `board` to a string.
#[cfg(feature = "std")]
pub fn render(board: &Board, fog_of_war: bool) -> String {
    board.view(fog_of_war).to_string()
}
