#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use regicide::{
    cli::{print_banner, print_stats},
    init_logging, CliPlayer, GameEngine, Session, SessionEnd, StorageConfig,
};

#[derive(Parser)]
#[command(author, version, about = "Solo Regicide card game", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Save file used by `continue` and by saving mid-game.
    #[arg(long, global = true, default_value = regicide::storage::DEFAULT_SAVE_FILE)]
    save_file: PathBuf,
    /// Append-only statistics log.
    #[arg(long, global = true, default_value = regicide::storage::DEFAULT_STATS_FILE)]
    stats_file: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Start a new game.
    New {
        #[arg(long, default_value = "Player")]
        name: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Hand refills available when the hand runs out")]
        jokers: u32,
    },
    /// Continue the saved game, or start a new one if there is none.
    Continue {
        #[arg(long, default_value_t = 0)]
        jokers: u32,
    },
    /// Show statistics of finished games.
    Stats,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let storage = StorageConfig::new(cli.save_file, cli.stats_file);

    match cli.command {
        Some(Commands::New { name, seed, jokers }) => {
            let engine = new_engine(&name, seed);
            play(engine, &storage, jokers)?;
        }
        Some(Commands::Continue { jokers }) => {
            let engine = load_or_new(&storage, "Player");
            play(engine, &storage, jokers)?;
        }
        Some(Commands::Stats) => {
            print_stats(&storage.stats_log().read_all()?);
        }
        None => menu(&storage)?,
    }
    Ok(())
}

#[cfg(feature = "std")]
fn new_engine(name: &str, seed: Option<u64>) -> GameEngine {
    let mut rng = if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    GameEngine::new_game(name, &mut rng)
}

#[cfg(feature = "std")]
fn load_or_new(storage: &StorageConfig, name: &str) -> GameEngine {
    match storage.save_store().load() {
        Some(state) => {
            println!("Saved game loaded.");
            GameEngine::from_state(state)
        }
        None => {
            println!("No saved game found, starting a new one...");
            new_engine(name, None)
        }
    }
}

#[cfg(feature = "std")]
fn play(engine: GameEngine, storage: &StorageConfig, jokers: u32) -> anyhow::Result<()> {
    print_banner();
    let mut session = Session::new(Box::new(CliPlayer::new()), engine, storage.clone())
        .with_jokers(jokers);
    match session.run()? {
        SessionEnd::Saved => println!("Game saved to {}", storage.save_path.display()),
        SessionEnd::Finished(outcome) => println!("Game recorded: {}", outcome),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn prompt(text: &str) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Interactive main menu, used when no subcommand is given.
#[cfg(feature = "std")]
fn menu(storage: &StorageConfig) -> anyhow::Result<()> {
    loop {
        println!("\nMAIN MENU - REGICIDE");
        println!("\t1. New game");
        println!("\t2. Continue saved game");
        println!("\t3. Statistics");
        println!("\t4. Quit");
        let Some(choice) = prompt("Choose an option: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => {
                let name = prompt("Your name: ")?.unwrap_or_default();
                let name = if name.is_empty() { "Player".to_string() } else { name };
                play(new_engine(&name, None), storage, 0)?;
            }
            "2" => play(load_or_new(storage, "Player"), storage, 0)?,
            "3" => print_stats(&storage.stats_log().read_all()?),
            "4" => break,
            other => println!("Invalid option '{}'", other),
        }
    }
    println!("Goodbye.");
    Ok(())
}
