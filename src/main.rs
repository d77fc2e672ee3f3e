use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use reversi::ai::GreedySelector;
use reversi::game::Game;
use reversi::types::{Outcome, Player, Position};

/// Reversi against a greedy computer opponent.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Board dimension (even, 3-26). Prompted for when omitted.
    #[arg(long)]
    size: Option<usize>,

    /// Color the computer plays. Prompted for when omitted.
    #[arg(long, value_enum)]
    computer: Option<ColorArg>,

    /// Print the final game state as JSON after the result.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    B,
    W,
}

impl From<ColorArg> for Player {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::B => Player::Black,
            ColorArg::W => Player::White,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let size = match args.size {
        Some(size) => size,
        None => prompt(&mut input, "Enter the board dimension: ")?
            .parse()
            .context("board dimension must be a number")?,
    };
    let computer = match args.computer {
        Some(color) => color.into(),
        None => {
            let line = prompt(&mut input, "Computer plays (B/W): ")?;
            match line.as_str() {
                "B" | "b" => Player::Black,
                "W" | "w" => Player::White,
                other => bail!("expected B or W, got {other:?}"),
            }
        }
    };

    let mut game = Game::new(size, computer, Box::new(GreedySelector))?;
    print!("{}", game.board());

    while game.outcome() == Outcome::Ongoing {
        let player = game.current_player();

        if !game.current_player_has_move() {
            println!("{player} player has no valid move.");
            game.pass();
            continue;
        }

        if player == computer {
            let position = game.play_computer_move()?;
            println!("Computer places {player} at {position}.");
        } else {
            let line = prompt(&mut input, &format!("Enter move for colour {player} (RowCol): "))?;
            let legal = parse_move(&line)
                .map(|position| game.place(position).is_ok())
                .unwrap_or(false);

            // Game rule: an invalid move forfeits in the computer's favor.
            if !legal {
                println!("Invalid move.");
                game.forfeit(player);
                break;
            }
        }

        print!("{}", game.board());
    }

    match game.outcome() {
        Outcome::BlackWin => println!("B player wins."),
        Outcome::WhiteWin => println!("W player wins."),
        Outcome::Draw => println!("Draw!"),
        Outcome::Ongoing => unreachable!("loop exits only on a decided game"),
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.to_game_state())?);
    }

    Ok(())
}

/// Translates a two-letter move ("cd" = row 2, col 3) via the offset from
/// 'a'. Rejects anything else; bounds are the engine's concern.
fn parse_move(line: &str) -> Option<Position> {
    let mut chars = line.trim().chars();
    let row = chars.next()?;
    let col = chars.next()?;
    if chars.next().is_some() || !row.is_ascii_lowercase() || !col.is_ascii_lowercase() {
        return None;
    }
    Some(Position::new(row as u8 - b'a', col as u8 - b'a'))
}

fn prompt(input: &mut impl BufRead, message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}
