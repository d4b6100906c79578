#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod coordinate;
#[cfg(feature = "std")]
mod logging;
mod session;
mod ship;
mod view;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::Console;
pub use coordinate::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use session::*;
pub use ship::{parse_ship, Orientation, Ship, ShipType};
pub use view::*;
