#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{
    cli::{HotSeat, MAX_COLUMNS},
    init_logging, FleetComposition, Game, DEFAULT_COLUMNS, DEFAULT_ROWS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player hot-seat Battleships in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Grid width (5 to 26).
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,
    /// Grid height (at least 5).
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, help = "Ships per player as length:count pairs (e.g., --fleet 2:1,3:2,5:1)")]
    fleet: Option<FleetComposition>,
    /// Place both fleets at random instead of prompting.
    #[arg(long)]
    auto_place: bool,
    #[arg(long, help = "Fix RNG seed for reproducible placement (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.columns > MAX_COLUMNS {
        anyhow::bail!("at most {} columns can be addressed by letter", MAX_COLUMNS);
    }
    let mut game = Game::new(cli.columns, cli.rows)?;
    if let Some(fleet) = cli.fleet {
        game.set_fleet_composition(fleet)?;
    }

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (placement will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    println!(
        "Battleships on a {}x{} grid, fleet {}",
        game.columns(),
        game.rows(),
        game.fleet_composition()
    );
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    HotSeat::new(stdin.lock(), stdout.lock())
        .auto_place(cli.auto_place)
        .run(&mut game, &mut rng)?;
    Ok(())
}
