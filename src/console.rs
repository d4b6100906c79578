#![cfg(feature = "std")]

//! Line-oriented driver that plays a [`GameSession`] over any reader/writer
//! pair: stdin/stdout in the binary, in-memory buffers in tests.

use std::io::{BufRead, Write};

use anyhow::bail;
use rand::Rng;

use crate::common::ShotOutcome;
use crate::session::{GameSession, Mode, Phase, PlayerId};

const DIVIDER: &str = "---------------------";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play `session` to the end and return the winner.
    ///
    /// With `rng` every fleet is placed randomly instead of being read from
    /// input.
    pub fn run<G: Rng + ?Sized>(
        &mut self,
        session: &mut GameSession,
        mut rng: Option<&mut G>,
    ) -> anyhow::Result<PlayerId> {
        while let Phase::Placement(player) = session.phase() {
            self.say(player, "place your ships on the game field")?;
            match rng.as_deref_mut() {
                Some(rng) => {
                    session.auto_place(rng)?;
                    write!(self.output, "{}", session.board(player).view(false))?;
                }
                None => self.place_fleet(session, player)?,
            }
            if session.mode() == Mode::Duel {
                self.pass_move()?;
            } else {
                writeln!(self.output, "The game starts!")?;
            }
        }
        loop {
            match session.phase() {
                Phase::Combat(player) => self.take_turn(session, player)?,
                Phase::GameOver(winner) => return Ok(winner),
                Phase::Placement(player) => bail!("{} is still placing ships", player),
            }
        }
    }

    fn place_fleet(&mut self, session: &mut GameSession, player: PlayerId) -> anyhow::Result<()> {
        write!(self.output, "{}", session.board(player).view(false))?;
        while let Some(class) = session.required_ship() {
            writeln!(
                self.output,
                "Enter the coordinates of the {} ({} cells):",
                class.name(),
                class.length()
            )?;
            loop {
                let line = self.read_line()?;
                match session.place(&line) {
                    Ok(_) => break,
                    Err(e) => writeln!(self.output, "Error! {} Try again:", e)?,
                }
            }
            write!(self.output, "{}", session.board(player).view(false))?;
        }
        Ok(())
    }

    fn take_turn(&mut self, session: &mut GameSession, player: PlayerId) -> anyhow::Result<()> {
        let target = session.target_of(player);
        write!(self.output, "{}", session.board(target).view(true))?;
        match session.mode() {
            Mode::Duel => {
                writeln!(self.output, "{}", DIVIDER)?;
                write!(self.output, "{}", session.board(player).view(false))?;
                self.say(player, "it's your turn:")?;
            }
            Mode::Solo => writeln!(self.output, "Take a shot!")?,
        }

        let report = loop {
            let line = self.read_line()?;
            match session.fire(&line) {
                Ok(report) => break report,
                Err(e) => writeln!(self.output, "Error! {} Try again:", e)?,
            }
        };

        write!(self.output, "{}", session.board(target).view(true))?;
        match report.outcome {
            ShotOutcome::Miss => writeln!(self.output, "You missed!")?,
            ShotOutcome::Hit => writeln!(self.output, "You hit a ship!")?,
            ShotOutcome::Sunk { class, .. } => {
                writeln!(self.output, "You sank the {}!", class.name())?
            }
            ShotOutcome::AlreadyShot => bail!("unresolved shot reported as a turn"),
        }
        if let Phase::GameOver(_) = report.phase {
            writeln!(self.output, "You sank the last ship. You won. Congratulations!")?;
        } else if session.mode() == Mode::Duel {
            self.pass_move()?;
        }
        Ok(())
    }

    fn say(&mut self, player: PlayerId, msg: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}, {}", player, msg)?;
        Ok(())
    }

    fn pass_move(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Press Enter and pass the move to another player")?;
        writeln!(self.output, "...")?;
        self.read_line()?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
