#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{init_logging, Console, GameSession, Mode};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players at one terminal, passing the move between turns.
    Duel(GameArgs),
    /// Place a fleet, then sink it yourself.
    Solo(GameArgs),
}

#[derive(Args)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, help = "Place every fleet randomly instead of asking for coordinates")]
    random_fleet: bool,
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (mode, args) = match cli.command {
        Commands::Duel(args) => (Mode::Duel, args),
        Commands::Solo(args) => (Mode::Solo, args),
    };

    let mut rng = if let Some(s) = args.seed {
        println!("Using fixed seed: {} (fleets will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut session = GameSession::new(mode);
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let placement = if args.random_fleet { Some(&mut rng) } else { None };
    let winner = console.run(&mut session, placement)?;
    log::info!("game finished, winner: {}", winner);
    Ok(())
}
