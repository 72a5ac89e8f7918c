#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use bship::{
    console::{build_bot, BotKind},
    init_logging,
    prelude::*,
    ui, PlayError,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Args, Parser};
#[cfg(feature = "std")]
use rand::Rng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct MatchArgs {
    #[arg(long, help = "Load the match configuration from a JSON file")]
    config: Option<std::path::PathBuf>,
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=26))]
    width: Option<u16>,
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=26))]
    height: Option<u16>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Let peeking bots read the opponent's ship grid")]
    allow_peeking: bool,
    #[arg(long, default_value_t = PeekingBot::DEFAULT_PEEK_PROBABILITY)]
    peek_probability: f64,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against a bot in the terminal.
    Play {
        #[command(flatten)]
        game: MatchArgs,
        #[arg(long, value_enum, default_value_t = BotKind::Hunter)]
        opponent: BotKind,
        #[arg(long, value_enum, default_value_t = OutputMode::Quiet)]
        mode: OutputMode,
    },
    /// Watch two bots play each other.
    Watch {
        #[command(flatten)]
        game: MatchArgs,
        #[arg(long, value_enum, default_value_t = BotKind::Hunter)]
        a: BotKind,
        #[arg(long, value_enum, default_value_t = BotKind::Random)]
        b: BotKind,
        #[arg(long, value_enum, default_value_t = OutputMode::Both)]
        mode: OutputMode,
    },
}

#[cfg(feature = "std")]
impl MatchArgs {
    fn match_config(&self) -> anyhow::Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                MatchConfig::from_json_str(&json)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => MatchConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width.into();
        }
        if let Some(height) = self.height {
            config.height = height.into();
        }
        if self.allow_peeking {
            config.allow_peeking = true;
        }
        anyhow::ensure!(
            ui::fits_labels(config.width, config.height),
            "grid {}x{} is too large, width and height are limited to {}",
            config.width,
            config.height,
            ui::MAX_LABELLED_DIMENSION
        );
        Ok(config)
    }

    fn seed(&self) -> u64 {
        match self.seed {
            Some(s) => {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                s
            }
            None => rand::rng().random(),
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            game,
            opponent,
            mode,
        } => {
            let config = game.match_config()?;
            let seed = game.seed();
            let stdin = std::io::stdin();
            let mut human = HumanPlayer::new("You", stdin.lock(), std::io::stdout(), seed);
            let mut bot = build_bot(opponent, "Computer", seed.wrapping_add(1), game.peek_probability);
            let mut observer = ConsoleObserver::new(std::io::stdout(), mode);
            match run_match(&config, &mut human, bot.as_mut(), Some(&mut observer)) {
                Ok(summary) => println!(
                    "Shots fired: you {}, computer {}",
                    summary.shots_a, summary.shots_b
                ),
                Err(PlayError::Abandoned { .. }) => println!("Goodbye!"),
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Watch { game, a, b, mode } => {
            let config = game.match_config()?;
            let seed = game.seed();
            let mut bot_a = build_bot(a, "Bot A", seed, game.peek_probability);
            let mut bot_b = build_bot(b, "Bot B", seed.wrapping_add(1), game.peek_probability);
            let mut observer = ConsoleObserver::new(std::io::stdout(), mode);
            let summary = run_match(&config, bot_a.as_mut(), bot_b.as_mut(), Some(&mut observer))?;
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}
