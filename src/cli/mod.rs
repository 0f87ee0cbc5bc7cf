//! Hot-seat terminal play: two humans sharing one keyboard.
//!
//! The runner only drives `Game`. Every rule, including turn order, is
//! enforced by the engine, and rejected commands are reported and re-prompted.

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;

use std::io::{BufRead, Write};

use anyhow::anyhow;
use rand::Rng;

use crate::{Game, Phase, Player, ShotOutcome};

pub struct HotSeat<R, W> {
    input: R,
    output: W,
    auto_place: bool,
}

impl<R: BufRead, W: Write> HotSeat<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            auto_place: false,
        }
    }

    /// Place both fleets at random instead of prompting.
    pub fn auto_place(mut self, auto_place: bool) -> Self {
        self.auto_place = auto_place;
        self
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(anyhow!("input closed"));
        }
        Ok(buf.trim().to_string())
    }

    /// Play `game` from placement to victory and return the winner.
    pub fn run<G: Rng>(&mut self, game: &mut Game, rng: &mut G) -> anyhow::Result<Player> {
        if game.state() < Phase::InProgress {
            for _ in 0..2 {
                self.place_fleet(game, rng)?;
                game.change_active_player();
            }
            game.start()?;
        }

        while game.winner().is_none() {
            self.take_turn(game)?;
        }
        let winner = game.winner().ok_or_else(|| anyhow!("game ended without a winner"))?;

        writeln!(self.output, "\n=== GAME OVER: {} wins ===", winner)?;
        for player in [Player::One, Player::Two] {
            let score = game.score(player);
            writeln!(
                self.output,
                "  {}: {} shots, {} hits, {} ships sunk",
                player, score.shots, score.hits, score.kills
            )?;
        }
        Ok(winner)
    }

    fn place_fleet<G: Rng>(&mut self, game: &mut Game, rng: &mut G) -> anyhow::Result<()> {
        let player = game.active_player();
        if self.auto_place {
            game.place_fleet_randomly(rng)?;
            writeln!(self.output, "{} fleet placed at random.", player)?;
            return Ok(());
        }
        writeln!(self.output, "\n=== {}: place your fleet ===", player)?;
        loop {
            let awaiting = game.ships_awaiting_placement(player);
            let Some((length, count)) = awaiting.iter().last() else {
                return Ok(());
            };
            write!(self.output, "{}", render_grid(game.active_player_grid(), true))?;
            let prompt = format!(
                "Place a ship of length {} ({} left), e.g. B2 p or B2 l: ",
                length, count
            );
            let line = self.read_line(&prompt)?;
            let (x, y, orientation) = match parse_placement(&line, game.columns(), game.rows()) {
                Ok(p) => p,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            if let Err(e) = game.place_ship(x, y, length, orientation) {
                writeln!(self.output, "{}", e)?;
            }
        }
    }

    fn take_turn(&mut self, game: &mut Game) -> anyhow::Result<()> {
        let player = game.active_player();
        writeln!(self.output, "\n=== {}: your turn ===", player)?;
        write!(self.output, "{}", render_grid(game.inactive_player_grid(), false))?;
        loop {
            let line = self.read_line("Target (e.g. C4): ")?;
            let (x, y) = match parse_coord(&line, game.columns(), game.rows()) {
                Ok(c) => c,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            match game.fire(x, y) {
                Ok(outcome) => {
                    let target = coord_to_string(x, y);
                    match outcome {
                        ShotOutcome::Miss => writeln!(self.output, "{}: miss.", target)?,
                        ShotOutcome::Hit => writeln!(self.output, "{}: hit!", target)?,
                        ShotOutcome::Sunk(id) => {
                            let length = game.inactive_player_ships()[id.0].length();
                            writeln!(self.output, "{}: hit and sunk a {}-ship!", target, length)?
                        }
                    }
                    break;
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        if game.winner().is_none() {
            game.change_active_player();
        }
        Ok(())
    }
}
