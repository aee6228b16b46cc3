use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use archess::core::{init_logging, load_settings, load_settings_from, save_settings, save_settings_to};
use archess::game::ai::{effective_depth, Difficulty};
use archess::game::display::{board_to_string, board_with_marks};
use archess::game::notation::{parse_move, parse_promotion, parse_square};
use archess::{CoreError, GameSession, Settings};
use chess_engine::{CastlingRule, Color, GameStatus, MoveOutcome, MoveRecord, PromotionMode};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

#[derive(Parser)]
#[command(name = "archess", version, about = "Play chess against the alpha-beta engine in the terminal")]
struct Cli {
    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file to use instead of the per-user one
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive game (the default)
    Play(Overrides),
    /// Computer against itself
    SelfPlay {
        #[arg(long)]
        depth: Option<u32>,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
    },
    /// Show the effective settings, optionally saving them
    Settings {
        #[command(flatten)]
        overrides: Overrides,
        #[arg(long)]
        save: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Seat {
    White,
    Black,
    None,
}

#[derive(Args, Default)]
struct Overrides {
    /// Side the computer plays
    #[arg(long, value_enum)]
    ai: Option<Seat>,
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
    /// Search depth, overriding the difficulty
    #[arg(long)]
    depth: Option<u32>,
    /// Ask for the promotion piece instead of queening
    #[arg(long)]
    deferred_promotion: bool,
    /// Castling only checks occupancy, not attacked squares
    #[arg(long)]
    occupancy_castling: bool,
}

impl Overrides {
    fn apply(&self, settings: &mut Settings) {
        if let Some(seat) = self.ai {
            settings.ai_color = match seat {
                Seat::White => Some(Color::White),
                Seat::Black => Some(Color::Black),
                Seat::None => None,
            };
        }
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if self.depth.is_some() {
            settings.depth = self.depth;
        }
        if self.deferred_promotion {
            settings.promotion = PromotionMode::Deferred;
        }
        if self.occupancy_castling {
            settings.castling = CastlingRule::OccupancyOnly;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut settings = match &cli.settings {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };

    match cli.command.unwrap_or(Command::Play(Overrides::default())) {
        Command::Play(overrides) => {
            overrides.apply(&mut settings);
            let session = GameSession::from_settings(&settings)?;
            run_interactive(session)
        }
        Command::SelfPlay { depth, max_plies } => {
            let depth = effective_depth(settings.difficulty, depth.or(settings.depth));
            let mut session = GameSession::self_play(settings.game_config(), depth)?;
            let status = session.run_self_play(max_plies)?;
            println!("{}", board_to_string(&session.game().state().board));
            println!("{}", describe_end(status, session.game().winner(), session.game().state().ply()));
            Ok(())
        }
        Command::Settings { overrides, save } => {
            overrides.apply(&mut settings);
            println!("{}", serde_json::to_string_pretty(&settings)?);
            if save {
                let path = match &cli.settings {
                    Some(path) => save_settings_to(&settings, path).map(|_| path.clone()),
                    None => save_settings(&settings),
                }
                .context("saving settings")?;
                println!("saved to {}", path.display());
            }
            Ok(())
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

const HELP: &str = "\
commands:
  e2e4 / e2 e4 / e7e8q   play a move
  moves e2               show where the piece on e2 can go
  promote q              finish a pending promotion (q, r, b, n)
  board                  print the board
  reset                  start over
  quit                   leave";

fn run_interactive(mut session: GameSession) -> anyhow::Result<()> {
    info!("[GAME] Interactive game, computer plays {:?}", session.ai_colors());
    session.start()?;
    println!("{}\n", board_to_string(&session.game().state().board));
    println!("type 'help' for commands");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        while session.is_thinking() {
            match session.await_ai_move()? {
                Some(record) => {
                    println!("{} plays {}", record.color, describe_move(&record));
                    print_position(&session);
                }
                None => break,
            }
        }

        print!("{} > ", session.game().side_to_move());
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if let Flow::Quit = handle_line(&mut session, line.trim())? {
            break;
        }
    }
    Ok(())
}

fn handle_line(session: &mut GameSession, line: &str) -> anyhow::Result<Flow> {
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let result = match command {
        "" => Ok(()),
        "quit" | "exit" => return Ok(Flow::Quit),
        "help" => {
            println!("{}", HELP);
            Ok(())
        }
        "board" => {
            print_position(session);
            Ok(())
        }
        "reset" => session.reset().map(|_| print_position(session)),
        "moves" => parse_square(rest).map(|square| {
            let targets = session.game().legal_moves(square);
            println!("{}", board_with_marks(&session.game().state().board, &targets));
        }),
        "promote" => parse_promotion(rest)
            .and_then(|kind| session.choose_promotion(kind))
            .map(|outcome| report_outcome(session, outcome)),
        _ => parse_move(line)
            .and_then(|input| session.play_human(input.from, input.to, input.promotion))
            .map(|outcome| report_outcome(session, outcome)),
    };

    match result {
        Ok(()) => Ok(Flow::Continue),
        Err(err) if is_recoverable(&err) => {
            println!("error: {}", err);
            Ok(Flow::Continue)
        }
        Err(err) => Err(err.into()),
    }
}

fn is_recoverable(err: &CoreError) -> bool {
    match err {
        CoreError::Input { .. } | CoreError::NotHumanTurn { .. } => true,
        CoreError::Engine(engine) => !engine.is_fatal(),
        _ => false,
    }
}

fn report_outcome(session: &GameSession, outcome: MoveOutcome) {
    match outcome {
        MoveOutcome::Completed { .. } => print_position(session),
        MoveOutcome::AwaitingPromotion(pending) => {
            println!("promote the pawn on {}: promote q|r|b|n", pending.to)
        }
    }
}

fn print_position(session: &GameSession) {
    let game = session.game();
    println!("{}\n", board_to_string(&game.state().board));
    match game.status() {
        GameStatus::Check => println!("{} is in check", game.side_to_move()),
        GameStatus::Ongoing => {}
        status => println!("{}", describe_end(status, game.winner(), game.state().ply())),
    }
}

fn describe_move(record: &MoveRecord) -> String {
    let promotion = record
        .promotion
        .map(|kind| format!("={}", kind.symbol()))
        .unwrap_or_default();
    let capture = if record.captured.is_some() { "x" } else { "-" };
    format!("{}{}{}{}{}", record.kind.symbol(), record.from, capture, record.to, promotion)
}

fn describe_end(status: GameStatus, winner: Option<Color>, ply: usize) -> String {
    match (status, winner) {
        (GameStatus::Checkmate, Some(winner)) => format!("checkmate after {} plies, {} wins", ply, winner),
        (GameStatus::Stalemate, _) => format!("stalemate after {} plies", ply),
        (status, _) => format!("stopped after {} plies ({:?})", ply, status),
    }
}
