//! Ship shapes, fleet classes and placement text parsing.

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::BOARD_SIZE;
use crate::coordinate::{parse_coordinate, Coordinate};

pub(crate) type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Ends share a row.
    Horizontal,
    /// Ends share a column.
    Vertical,
}

/// Class of ship in the fleet: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A straight run of cells between two ends, with its remaining health.
///
/// The shape never changes after construction. Only the board that owns the
/// ship lowers `remaining_hits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    begin: Coordinate,
    end: Coordinate,
    length: usize,
    remaining_hits: usize,
}

impl Ship {
    /// Build a ship spanning `a` to `b`, in either order.
    ///
    /// Fails with [`GameError::InvalidShipShape`] unless the ends share
    /// exactly one of row or column.
    pub fn new(a: Coordinate, b: Coordinate) -> Result<Self, GameError> {
        let orientation = match (a.row() == b.row(), a.column() == b.column()) {
            (true, false) => Orientation::Horizontal,
            (false, true) => Orientation::Vertical,
            _ => return Err(GameError::InvalidShipShape),
        };
        let (begin, end) = if a <= b { (a, b) } else { (b, a) };
        let length = match orientation {
            Orientation::Horizontal => end.column() - begin.column(),
            Orientation::Vertical => end.row() - begin.row(),
        } + 1;
        Ok(Ship {
            orientation,
            begin,
            end,
            length,
            remaining_hits: length,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn begin(&self) -> Coordinate {
        self.begin
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Undamaged segments left.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Cells covered by the ship, from `begin` to `end`.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (row, col) = (self.begin.row() as u8, self.begin.column() as u8);
        let orientation = self.orientation;
        (0..self.length as u8).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::from_parts(row, col + i),
            Orientation::Vertical => Coordinate::from_parts(row + i, col),
        })
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                coord.row() == self.begin.row()
                    && (self.begin.column()..=self.end.column()).contains(&coord.column())
            }
            Orientation::Vertical => {
                coord.column() == self.begin.column()
                    && (self.begin.row()..=self.end.row()).contains(&coord.row())
            }
        }
    }

    /// Occupancy mask of the ship.
    pub(crate) fn footprint(&self) -> BB {
        let mut mask = BB::new();
        for cell in self.cells() {
            mask.insert(cell.row(), cell.column());
        }
        mask
    }

    /// Footprint plus a one-cell margin on every side, diagonals and both
    /// ends included, clipped to the board.
    pub(crate) fn buffer_zone(&self) -> BB {
        self.footprint().dilate()
    }

    /// Record one hit. Panics if the ship is already sunk.
    pub(crate) fn take_hit(&mut self) {
        assert!(
            self.remaining_hits > 0,
            "hit registered on sunk ship {}..{}",
            self.begin,
            self.end
        );
        self.remaining_hits -= 1;
    }
}

/// Parse placement input: two coordinates separated by a single space,
/// e.g. `A1 A5`.
pub fn parse_ship(text: &str) -> Result<Ship, GameError> {
    let mut parts = text.split(' ');
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GameError::InvalidCoordinate);
    };
    Ship::new(parse_coordinate(first)?, parse_coordinate(second)?)
}
