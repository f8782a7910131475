//! Console front end: prompts, board printing and the play-again loop.
//!
//! Everything is generic over `BufRead`/`Write` so the session can be driven
//! from a script or an in-memory buffer as well as a terminal.

#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use rand::Rng;

use crate::{
    board::Board,
    common::{Event, GameStatus},
    config::{GameConfig, MAX_ROW_LABEL, MIN_ROW_LABEL, NUM_COLS},
    coordinate::{row_index, Coordinate},
    game::{Game, RoundSummary},
};

/// Front-end switches that do not affect the rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub config: GameConfig,
    /// Print a JSON [`RoundSummary`] line after each round.
    pub json_summary: bool,
}

/// Tally over every round of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
}

/// Line-oriented prompt/response helper.
pub struct Console<R, W> {
    input: R,
    output: W,
    buf: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<&str>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(self.buf.trim()))
    }

    /// Ask for a row label until one in range is given. A full coordinate
    /// such as `C4` is accepted too and skips the column prompt.
    fn read_row(&mut self) -> io::Result<Option<RowInput>> {
        loop {
            let line = match self.prompt("Enter a row: ")? {
                Some(line) => line,
                None => return Ok(None),
            };
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(label), None) => {
                    if let Ok(row) = row_index(label) {
                        return Ok(Some(RowInput::Row(row)));
                    }
                }
                (Some(_), Some(_)) => {
                    if let Ok(coord) = line.parse::<Coordinate>() {
                        return Ok(Some(RowInput::Full(coord)));
                    }
                }
                _ => {}
            }
            debug!("rejected row input {:?}", line);
            writeln!(
                self.output,
                "Rows run from {} to {}.",
                MIN_ROW_LABEL, MAX_ROW_LABEL
            )?;
        }
    }

    /// Ask for a column in `row` until the cell is on the grid.
    fn read_column(&mut self, row: usize) -> io::Result<Option<Coordinate>> {
        loop {
            let line = match self.prompt("Enter a column: ")? {
                Some(line) => line,
                None => return Ok(None),
            };
            match line.parse::<usize>().map(|col| Coordinate::new(row, col)) {
                Ok(Ok(coord)) => return Ok(Some(coord)),
                _ => {
                    debug!("rejected column input {:?}", line);
                    writeln!(self.output, "Columns run from 0 to {}.", NUM_COLS - 1)?;
                }
            }
        }
    }

    /// Read one in-bounds guess. `None` if input ran out.
    pub fn read_guess(&mut self) -> io::Result<Option<Coordinate>> {
        match self.read_row()? {
            Some(RowInput::Full(coord)) => Ok(Some(coord)),
            Some(RowInput::Row(row)) => self.read_column(row),
            None => Ok(None),
        }
    }

    /// Ask "Play again (Y/N)?" until a valid answer. End of input means no.
    pub fn play_again(&mut self) -> io::Result<bool> {
        loop {
            match self.prompt("Play again (Y/N)? ")? {
                None => return Ok(false),
                Some("Y") | Some("y") => return Ok(true),
                Some("N") | Some("n") => return Ok(false),
                Some(_) => {}
            }
        }
    }

    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", board)?;
        writeln!(self.output)
    }

    pub fn announce(&mut self, event: Event) -> io::Result<()> {
        writeln!(self.output, "{}", event)
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

enum RowInput {
    Row(usize),
    Full(Coordinate),
}

/// Play one round. Returns `None` if input ended before the round did.
pub fn play_round<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
    config: GameConfig,
) -> anyhow::Result<Option<RoundSummary>>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let mut game = Game::with_config(rng, config)?;
    console.show_board(game.board())?;

    while !game.is_complete() {
        let position = match console.read_guess()? {
            Some(position) => position,
            None => {
                warn!("input ended mid-round");
                return Ok(None);
            }
        };
        game.resolve_guess(position)?;

        let events: Vec<Event> = game.drain_events().collect();
        let (terminal, sinks): (Vec<Event>, Vec<Event>) = events
            .into_iter()
            .partition(|e| matches!(e, Event::Win | Event::Loss));
        for event in sinks {
            console.announce(event)?;
        }
        console.show_board(game.board())?;
        for event in terminal {
            console.announce(event)?;
        }
    }
    Ok(Some(game.summary()))
}

/// Run rounds until the player declines another one or input ends.
pub fn run_session<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
    options: SessionOptions,
) -> anyhow::Result<SessionStats>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let mut stats = SessionStats::default();
    console.say("Let's Play Battleship!\n")?;

    loop {
        let summary = match play_round(console, rng, options.config)? {
            Some(summary) => summary,
            None => break,
        };
        stats.rounds += 1;
        match summary.status {
            GameStatus::Won => stats.wins += 1,
            GameStatus::Lost => stats.losses += 1,
            GameStatus::InProgress => {}
        }
        if options.json_summary {
            console.say(&serde_json::to_string(&summary)?)?;
        }
        if !console.play_again()? {
            break;
        }
    }

    console.say("Goodbye.")?;
    Ok(stats)
}
