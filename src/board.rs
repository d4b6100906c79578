//! Game board state: fleet placement and shot resolution.

use crate::common::{CellState, GameError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::coordinate::Coordinate;
use crate::view::BoardView;
use crate::ship::{Orientation, Ship, ShipType, BB};
use rand::Rng;

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PlacedShip {
    class: ShipType,
    ship: Ship,
}

/// One player's waters: placed ships, which ship owns each cell, and
/// every shot received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    ships: [Option<PlacedShip>; NUM_SHIPS],
    placed: usize,
    /// Fleet slot owning each cell, indexed row-major.
    ship_at: [Option<u8>; CELLS],
    ship_map: BB,
    hits: BB,
    misses: BB,
    fleet_remaining: usize,
}

#[inline]
fn index(coord: Coordinate) -> usize {
    coord.row() * BOARD_SIZE as usize + coord.column()
}

impl Board {
    /// Create an empty board (no ships placed, no shots fired).
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            placed: 0,
            ship_at: [None; CELLS],
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
            fleet_remaining: 0,
        }
    }

    /// State of a single cell.
    pub fn cell(&self, coord: Coordinate) -> CellState {
        let (r, c) = (coord.row(), coord.column());
        if self.hits.contains(r, c) {
            CellState::Hit
        } else if self.misses.contains(r, c) {
            CellState::Miss
        } else if self.ship_map.contains(r, c) {
            CellState::Ship
        } else {
            CellState::Fog
        }
    }

    /// Ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        let slot = self.ship_at[index(coord)]?;
        self.ships[slot as usize].as_ref().map(|ps| &ps.ship)
    }

    /// Placed ships with their fleet class, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = (ShipType, &Ship)> {
        self.ships.iter().flatten().map(|ps| (ps.class, &ps.ship))
    }

    /// Number of ships placed so far.
    pub fn placed_count(&self) -> usize {
        self.placed
    }

    /// Class of the next ship to place, or `None` once the fleet is complete.
    pub fn required_ship(&self) -> Option<ShipType> {
        SHIPS.get(self.placed).copied()
    }

    /// Ships still afloat.
    pub fn fleet_remaining(&self) -> usize {
        self.fleet_remaining
    }

    /// Returns `true` when every placed ship has been sunk.
    pub fn is_fleet_destroyed(&self) -> bool {
        self.fleet_remaining == 0
    }

    /// Check `ship` against the length of `required` and the no-touch rule
    /// without modifying the board.
    pub fn can_place(&self, ship: &Ship, required: ShipType) -> Result<(), GameError> {
        if ship.length() != required.length() {
            return Err(GameError::LengthMismatch {
                class: required.name(),
                expected: required.length(),
                actual: ship.length(),
            });
        }
        if !(ship.buffer_zone() & self.ship_map).is_empty() {
            return Err(GameError::TooClose);
        }
        Ok(())
    }

    /// Commit `ship` into the next fleet slot.
    ///
    /// Placement rules are not checked here; call [`can_place`](Self::can_place)
    /// first. Fails only when the fleet is already complete.
    pub fn place_ship(&mut self, ship: Ship) -> Result<ShipType, GameError> {
        let class = self.required_ship().ok_or(GameError::FleetComplete)?;
        let slot = self.placed;
        for cell in ship.cells() {
            self.ship_at[index(cell)] = Some(slot as u8);
        }
        self.ship_map |= ship.footprint();
        self.ships[slot] = Some(PlacedShip { class, ship });
        self.placed += 1;
        self.fleet_remaining += 1;
        log::debug!("placed {} at {}..{}", class.name(), ship.begin(), ship.end());
        Ok(class)
    }

    /// Validate `ship` for the current slot and commit it. On error the
    /// board is left untouched.
    pub fn place_next(&mut self, ship: Ship) -> Result<ShipType, GameError> {
        let class = self.required_ship().ok_or(GameError::FleetComplete)?;
        self.can_place(&ship, class)?;
        self.place_ship(ship)
    }

    /// Every legal placement of a `class` ship on the current board.
    fn candidates(&self, class: ShipType) -> impl Iterator<Item = Ship> + '_ {
        let size = BOARD_SIZE as usize;
        let span = class.length().saturating_sub(1);
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .flat_map(move |orientation| {
                (0..size).flat_map(move |row| {
                    (0..size).filter_map(move |col| {
                        let (end_row, end_col) = match orientation {
                            Orientation::Horizontal => (row, col + span),
                            Orientation::Vertical => (row + span, col),
                        };
                        let begin = Coordinate::new(row, col).ok()?;
                        let end = Coordinate::new(end_row, end_col).ok()?;
                        Ship::new(begin, end).ok()
                    })
                })
            })
            .filter(move |ship| self.can_place(ship, class).is_ok())
    }

    /// Pick a legal placement for the current slot uniformly at random.
    pub fn random_placement<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Ship, GameError> {
        let class = self.required_ship().ok_or(GameError::FleetComplete)?;
        let count = self.candidates(class).count();
        if count == 0 {
            return Err(GameError::UnableToPlaceShip);
        }
        let pick = rng.random_range(0..count);
        self.candidates(class)
            .nth(pick)
            .ok_or(GameError::UnableToPlaceShip)
    }

    /// Fire at `target`, marking the hit or miss and reporting the outcome.
    pub fn resolve_shot(&mut self, target: Coordinate) -> ShotOutcome {
        let (r, c) = (target.row(), target.column());
        if self.hits.contains(r, c) || self.misses.contains(r, c) {
            return ShotOutcome::AlreadyShot;
        }
        if !self.ship_map.contains(r, c) {
            self.misses.insert(r, c);
            log::debug!("shot at {} missed", target);
            return ShotOutcome::Miss;
        }

        self.hits.insert(r, c);
        let slot = self.ship_at[index(target)].expect("ship cell without an owning ship") as usize;
        let placed = self.ships[slot]
            .as_mut()
            .expect("ship cell owned by an empty slot");
        placed.ship.take_hit();
        if placed.ship.is_sunk() {
            self.fleet_remaining -= 1;
            log::debug!(
                "shot at {} sank the {}, {} ships left",
                target,
                placed.class.name(),
                self.fleet_remaining
            );
            ShotOutcome::Sunk {
                class: placed.class,
                ship: placed.ship,
            }
        } else {
            log::debug!("shot at {} hit the {}", target, placed.class.name());
            ShotOutcome::Hit
        }
    }

    /// Text view of the board; with `fog_of_war` undamaged ships are hidden.
    pub fn view(&self, fog_of_war: bool) -> BoardView<'_> {
        BoardView::new(self, fog_of_war)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
