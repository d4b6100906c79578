//! Board coordinates and their `<row letter><column number>` text form.

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::BOARD_SIZE;

/// A cell on the board. Rows are lettered `A..J`, columns numbered `1..10`
/// in text and zero-based internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// Build a coordinate from zero-based indices.
    pub fn new(row: usize, column: usize) -> Result<Self, GameError> {
        let size = BOARD_SIZE as usize;
        if row >= size || column >= size {
            return Err(GameError::InvalidCoordinate);
        }
        Ok(Self::from_parts(row as u8, column as u8))
    }

    /// Caller guarantees both indices are on the board.
    pub(crate) const fn from_parts(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn column(&self) -> usize {
        self.column as usize
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |column| Self::from_parts(row, column)))
    }

    /// Letter labelling the given zero-based row.
    pub fn row_label(row: usize) -> char {
        (b'A' + row as u8) as char
    }
}

/// Parse `<row letter><column digits>`, e.g. `B7` or `J10`.
pub fn parse_coordinate(text: &str) -> Result<Coordinate, GameError> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 {
        return Err(GameError::InvalidCoordinate);
    }
    let letter = bytes[0];
    if !(b'A'..b'A' + BOARD_SIZE).contains(&letter) {
        return Err(GameError::InvalidCoordinate);
    }
    let digits = &text[1..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::InvalidCoordinate);
    }
    let number: usize = digits.parse().map_err(|_| GameError::InvalidCoordinate)?;
    if number == 0 {
        return Err(GameError::InvalidCoordinate);
    }
    Coordinate::new((letter - b'A') as usize, number - 1)
}

impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::row_label(self.row()), self.column + 1)
    }
}

#[cfg(feature = "std")]
impl TryFrom<String> for Coordinate {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(feature = "std")]
impl From<Coordinate> for String {
    fn from(coord: Coordinate) -> Self {
        coord.to_string()
    }
}
