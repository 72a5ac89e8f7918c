use bship::{init_logging, prelude::*};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed_a> <seed_b>", args[0]);
        std::process::exit(1);
    }
    let seed_a: u64 = args[1].parse()?;
    let seed_b: u64 = args[2].parse()?;

    let mut a = HunterBot::new("player A", seed_a);
    let mut b = HunterBot::new("player B", seed_b);
    let summary = run_match(&MatchConfig::default(), &mut a, &mut b, None)?;

    let result = json!({
        "player_a": {"seed": seed_a, "shots": summary.shots_a},
        "player_b": {"seed": seed_b, "shots": summary.shots_b},
        "total_shots": summary.total_shots,
        "winner": summary.winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
