mod config;
mod render;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use tictactoe_engine::session::{GameSession, OutcomeSink, SessionPhase};
use tictactoe_engine::types::{GRID_SIZE, Player, Position, WinningLine};
use tictactoe_engine::{log, logger};

use config::{Config, DEFAULT_CONFIG_FILE, load_config};
use render::{describe_line, render_board};

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

struct ConsoleSink;

impl OutcomeSink for ConsoleSink {
    fn on_player_won(&mut self, line: &WinningLine) {
        println!("You won: {}", describe_line(line));
    }

    fn on_draw(&mut self) {
        println!("Draw game.");
    }

    fn on_engine_move(&mut self, pos: Position) {
        println!("Engine plays ({}, {})", pos.col, pos.row);
    }

    fn on_engine_won(&mut self, line: &WinningLine) {
        println!("Engine won: {}", describe_line(line));
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args.config)?;
    log!("Loaded config: thinking delay {} ms", config.thinking_delay_ms);

    loop {
        let human_mark = config.resolve_human_mark();
        log!(
            "New game: you play {}, the engine plays {}",
            human_mark,
            human_mark.opponent()
        );

        run_game(human_mark, &config).await?;

        if !prompt_yes_no("Play again? [y/n] ")? {
            break;
        }
    }

    Ok(())
}

async fn run_game(human_mark: Player, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = GameSession::new(human_mark);
    let mut sink = ConsoleSink;

    loop {
        println!("\n{}", render_board(session.board()));

        match session.phase() {
            SessionPhase::Playing => {
                let pos = prompt_move(human_mark)?;
                if let Err(e) = session.place_human_mark(pos) {
                    println!("Move rejected: {}", e);
                }
            }
            SessionPhase::Thinking => {
                log!("Engine is thinking...");
                tokio::time::sleep(Duration::from_millis(config.thinking_delay_ms)).await;
                session.play_engine_turn(&mut sink)?;
            }
            SessionPhase::Finished => break,
        }
    }

    Ok(())
}

fn prompt_move(human_mark: Player) -> Result<Position, Box<dyn std::error::Error>> {
    loop {
        print!("Your move as col,row (you are {}): ", human_mark);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Err("stdin closed".into());
        }

        match parse_position(line.trim()) {
            Ok(pos) => return Ok(pos),
            Err(e) => println!("{}", e),
        }
    }
}

fn parse_position(input: &str) -> Result<Position, String> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err("expected two coordinates, e.g. 0,2".to_string());
    }

    let col: usize = parts[0]
        .parse()
        .map_err(|_| format!("invalid column: {}", parts[0]))?;
    let row: usize = parts[1]
        .parse()
        .map_err(|_| format!("invalid row: {}", parts[1]))?;

    if col >= GRID_SIZE || row >= GRID_SIZE {
        return Err("coordinates must be in 0..3".to_string());
    }

    Ok(Position::new(col, row))
}

fn prompt_yes_no(prompt: &str) -> Result<bool, Box<dyn std::error::Error>> {
    loop {
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}
