//! Hot-seat command loop: both players share one terminal.

use super::error::CenterError;
use super::handle::GameHandle;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_checkers::{Message, Move, Notice};
use tracing::{debug, instrument};

const HELP: &str = "\
commands:
  move R C R C   try a move (also: m)
  back           undo your last pending move (also: b)
  submit         commit your turn (also: s)
  resign         give up the game
  board          show the board
  help           show this text (also: ?)
  quit           leave without finishing (also: q)";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Try a move.
    Move(Move),
    /// Undo the last pending move.
    Backup,
    /// Commit the turn.
    Submit,
    /// Give up.
    Resign,
    /// Show the board.
    Board,
    /// Show the command list.
    Help,
    /// Leave the loop.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// Nothing was typed.
    #[display("Type a command, or 'help'")]
    Empty,
    /// The first word is not a command.
    #[display("Unknown command '{_0}'")]
    UnknownCommand(#[error(not(source))] String),
    /// A move needs four whole-number coordinates.
    #[display("A move needs four coordinates: start row, start cell, end row, end cell")]
    BadCoordinates,
}

impl FromStr for ReplCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseError::Empty)?.to_ascii_lowercase();
        match command.as_str() {
            "move" | "m" => {
                let coords = words
                    .map(str::parse::<i32>)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| ParseError::BadCoordinates)?;
                match coords.as_slice() {
                    [sr, sc, er, ec] => {
                        Ok(ReplCommand::Move(Move::from_coords(*sr, *sc, *er, *ec)))
                    }
                    _ => Err(ParseError::BadCoordinates),
                }
            }
            "back" | "b" => Ok(ReplCommand::Backup),
            "submit" | "s" => Ok(ReplCommand::Submit),
            "resign" => Ok(ReplCommand::Resign),
            "board" => Ok(ReplCommand::Board),
            "help" | "?" => Ok(ReplCommand::Help),
            "quit" | "q" => Ok(ReplCommand::Quit),
            _ => Err(ParseError::UnknownCommand(command)),
        }
    }
}

fn to_message(result: Result<Notice, CenterError>) -> Message {
    match result {
        Ok(notice) => notice.into(),
        Err(err) => err.into(),
    }
}

/// Runs the command loop until the game ends, the player quits, or input
/// runs out.
#[instrument(skip_all, fields(game_id = %handle.id()))]
pub fn run<R: BufRead, W: Write>(
    handle: &GameHandle,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    let (red, white) = handle.players();
    writeln!(output, "{red} (Red) vs {white} (White)")?;
    writeln!(output, "{HELP}")?;

    let mut show_board = true;
    let mut lines = input.lines();
    loop {
        let (player, color) =
            handle.read(|game| (game.current_player().clone(), game.current_color()));
        if show_board {
            if let Ok(view) = handle.snapshot_for(player.name()) {
                writeln!(output, "\n{view}")?;
            }
            show_board = false;
        }
        write!(output, "{player} ({color})> ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(());
        };
        let command = match line.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        debug!(?command, "Command read");

        let result = match command {
            ReplCommand::Move(mv) => handle.test_move(player.name(), mv),
            ReplCommand::Backup => handle.backup_move(player.name()),
            ReplCommand::Submit => {
                show_board = true;
                handle.submit_turn(player.name())
            }
            ReplCommand::Resign => handle.resign(player.name()),
            ReplCommand::Board => {
                show_board = true;
                continue;
            }
            ReplCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            ReplCommand::Quit => return Ok(()),
        };
        let message = to_message(result);
        if !message.is_successful() {
            show_board = false;
        }
        writeln!(output, "{message}")?;

        if let Some(text) = handle.game_over_message() {
            writeln!(output, "\n{}\n{text}", handle.spectator_snapshot())?;
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(
            "m 5 0 4 1".parse::<ReplCommand>(),
            Ok(ReplCommand::Move(Move::from_coords(5, 0, 4, 1)))
        );
        assert_eq!(
            "MOVE 2 1 3 0".parse::<ReplCommand>(),
            Ok(ReplCommand::Move(Move::from_coords(2, 1, 3, 0)))
        );
        assert_eq!("m 5 0 4".parse::<ReplCommand>(), Err(ParseError::BadCoordinates));
        assert_eq!("m 5 0 4 x".parse::<ReplCommand>(), Err(ParseError::BadCoordinates));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("  submit ".parse::<ReplCommand>(), Ok(ReplCommand::Submit));
        assert_eq!("b".parse::<ReplCommand>(), Ok(ReplCommand::Backup));
        assert_eq!("?".parse::<ReplCommand>(), Ok(ReplCommand::Help));
        assert_eq!("".parse::<ReplCommand>(), Err(ParseError::Empty));
        assert_eq!(
            "jump".parse::<ReplCommand>(),
            Err(ParseError::UnknownCommand("jump".to_string()))
        );
    }
}
