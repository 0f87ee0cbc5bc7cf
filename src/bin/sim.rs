use battleships::{Game, Player};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 && args.len() != 4 {
        eprintln!("Usage: {} <seed> [columns rows]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let (columns, rows) = if args.len() == 4 {
        (args[2].parse()?, args[3].parse()?)
    } else {
        (battleships::DEFAULT_COLUMNS, battleships::DEFAULT_ROWS)
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(columns, rows)?;
    game.place_fleet_randomly(&mut rng)?
        .change_active_player()
        .place_fleet_randomly(&mut rng)?;
    game.start()?;

    // Each player fires at every cell once, in an independently shuffled order.
    let cells: Vec<(usize, usize)> = (0..rows)
        .flat_map(|y| (0..columns).map(move |x| (x, y)))
        .collect();
    let mut orders = [cells.clone(), cells];
    for order in orders.iter_mut() {
        order.shuffle(&mut rng);
    }

    let mut turns = 0usize;
    while game.winner().is_none() {
        let slot = match game.active_player() {
            Player::One => 0,
            Player::Two => 1,
        };
        let (x, y) = orders[slot]
            .pop()
            .ok_or_else(|| anyhow::anyhow!("{} ran out of targets", game.active_player()))?;
        game.shoot(x, y)?;
        turns += 1;
        if game.winner().is_none() {
            game.change_active_player();
        }
    }

    let winner = match game.winner() {
        Some(Player::One) => "player1",
        Some(Player::Two) => "player2",
        None => anyhow::bail!("game stopped without a winner"),
    };
    let result = json!({
        "winner": winner,
        "turns": turns,
        "score": {
            "player1": game.score(Player::One),
            "player2": game.score(Player::Two),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
