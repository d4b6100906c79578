//! Turn order for one or two boards: placement, combat and game over.

use crate::board::Board;
use crate::common::{GameError, ShotOutcome};
use crate::coordinate::{parse_coordinate, Coordinate};
use crate::ship::{parse_ship, Ship, ShipType};
use rand::Rng;

/// How many boards take part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// One player places a fleet and then sinks it.
    Solo,
    /// Two players, each firing at the other's board.
    Duel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Current phase, carrying the player expected to act (or the winner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement(PlayerId),
    Combat(PlayerId),
    GameOver(PlayerId),
}

/// A ship accepted during placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementReport {
    pub player: PlayerId,
    pub class: ShipType,
    pub ship: Ship,
    /// Phase after the placement.
    pub phase: Phase,
}

/// A shot that consumed the shooter's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: PlayerId,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Phase after the shot.
    pub phase: Phase,
}

/// Owns the boards of a game and enforces whose move it is.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: Mode,
    boards: [Board; 2],
    phase: Phase,
}

impl GameSession {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            boards: [Board::new(), Board::new()],
            phase: Phase::Placement(PlayerId::One),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    /// Board owned by `player`. In solo mode both ids refer to the one board.
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[self.owner(player).index()]
    }

    /// Player whose board `player` fires at.
    pub fn target_of(&self, player: PlayerId) -> PlayerId {
        match self.mode {
            Mode::Solo => PlayerId::One,
            Mode::Duel => player.other(),
        }
    }

    fn owner(&self, player: PlayerId) -> PlayerId {
        match self.mode {
            Mode::Solo => PlayerId::One,
            Mode::Duel => player,
        }
    }

    /// Class of the ship the placing player must enter next.
    pub fn required_ship(&self) -> Option<ShipType> {
        match self.phase {
            Phase::Placement(player) => self.board(player).required_ship(),
            _ => None,
        }
    }

    /// Parse `"<coord> <coord>"` and place it for the current player.
    pub fn place(&mut self, input: &str) -> Result<PlacementReport, GameError> {
        if !matches!(self.phase, Phase::Placement(_)) {
            return Err(GameError::OutOfPhase);
        }
        let ship = parse_ship(input)?;
        self.place_ship(ship)
    }

    /// Place `ship` into the current player's next fleet slot.
    pub fn place_ship(&mut self, ship: Ship) -> Result<PlacementReport, GameError> {
        let Phase::Placement(player) = self.phase else {
            return Err(GameError::OutOfPhase);
        };
        let board = &mut self.boards[player.index()];
        let class = board.place_next(ship)?;
        if board.required_ship().is_none() {
            self.advance_placement(player);
        }
        Ok(PlacementReport {
            player,
            class,
            ship,
            phase: self.phase,
        })
    }

    /// Fill the rest of the current player's fleet with random placements.
    pub fn auto_place<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PlayerId, GameError> {
        let Phase::Placement(player) = self.phase else {
            return Err(GameError::OutOfPhase);
        };
        while self.phase == Phase::Placement(player) {
            let ship = self.boards[player.index()].random_placement(rng)?;
            self.place_ship(ship)?;
        }
        Ok(player)
    }

    fn advance_placement(&mut self, player: PlayerId) {
        self.phase = match (self.mode, player) {
            (Mode::Duel, PlayerId::One) => Phase::Placement(PlayerId::Two),
            _ => Phase::Combat(PlayerId::One),
        };
        log::info!("{} finished placing ships, now {:?}", player, self.phase);
    }

    /// Parse a coordinate and fire it for the current player.
    pub fn fire(&mut self, input: &str) -> Result<ShotReport, GameError> {
        self.check_combat()?;
        let target = parse_coordinate(input)?;
        self.fire_at(target)
    }

    fn check_combat(&self) -> Result<PlayerId, GameError> {
        match self.phase {
            Phase::Combat(player) => Ok(player),
            Phase::GameOver(_) => Err(GameError::GameOver),
            Phase::Placement(_) => Err(GameError::OutOfPhase),
        }
    }

    /// Fire at `target` on the current player's target board.
    ///
    /// A cell that was already fired at yields [`GameError::AlreadyShot`]
    /// and the same player keeps the turn.
    pub fn fire_at(&mut self, target: Coordinate) -> Result<ShotReport, GameError> {
        let shooter = self.check_combat()?;
        let defender = self.target_of(shooter);
        let board = &mut self.boards[defender.index()];
        let outcome = board.resolve_shot(target);
        if !outcome.is_resolved() {
            return Err(GameError::AlreadyShot);
        }
        self.phase = if board.is_fleet_destroyed() {
            log::info!("{} destroyed the fleet of {}", shooter, defender);
            Phase::GameOver(shooter)
        } else {
            match self.mode {
                Mode::Solo => Phase::Combat(shooter),
                Mode::Duel => Phase::Combat(shooter.other()),
            }
        };
        Ok(ShotReport {
            shooter,
            target,
            outcome,
            phase: self.phase,
        })
    }
}
