// src/bin/freecell_cli.rs

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{LevelFilter, Log, Metadata, Record};

use freecell_engine::api::build_game_view;
use freecell_engine::controller::{play_game, ControllerError, SessionOutcome};
use freecell_engine::domain::{parse_deck, Card, GameConfig};
use freecell_engine::engine::{FreecellEngine, MoveVariant, RandomSource};
use freecell_engine::infra::{DeterministicRng, SystemRng};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantOpt {
    Basic,
    Supermove,
}

impl From<VariantOpt> for MoveVariant {
    fn from(v: VariantOpt) -> Self {
        match v {
            VariantOpt::Basic => MoveVariant::Basic,
            VariantOpt::Supermove => MoveVariant::Supermove,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "freecell_cli", about = "FreeCell в терминале: ход = `C1 7 F1`, выход — `q`")]
struct Args {
    /// Число каскадов (минимум 4)
    #[arg(long, default_value_t = 8)]
    cascades: usize,

    /// Число свободных ячеек (минимум 1)
    #[arg(long, default_value_t = 4)]
    opens: usize,

    /// Вариант правил
    #[arg(long, value_enum, default_value_t = VariantOpt::Basic)]
    variant: VariantOpt,

    /// Перемешать колоду перед раздачей
    #[arg(long)]
    shuffle: bool,

    /// Seed для детерминированного перемешивания (вместе с --shuffle)
    #[arg(long)]
    seed: Option<u64>,

    /// Файл с колодой: 52 карты через пробелы/запятые (`A♣ 2♣ ...` или `Ac 2c ...`)
    #[arg(long)]
    deck: Option<PathBuf>,

    /// В конце напечатать состояние партии в JSON
    #[arg(long)]
    json: bool,

    /// Логи движка в stderr
    #[arg(long)]
    verbose: bool,
}

/// Минимальный логгер в stderr для --verbose.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    let deck = match &args.deck {
        Some(path) => match load_deck(path) {
            Ok(cards) => Some(cards),
            Err(msg) => {
                eprintln!("{msg}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let config = GameConfig::new(args.cascades, args.opens);
    let variant = MoveVariant::from(args.variant);

    let result = match args.seed {
        Some(seed) => run(
            FreecellEngine::with_rng(config, variant, DeterministicRng::from_seed(seed)),
            deck.as_deref(),
            &args,
        ),
        None => run(
            FreecellEngine::with_rng(config, variant, SystemRng),
            deck.as_deref(),
            &args,
        ),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn load_deck(path: &Path) -> Result<Vec<Card>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Не удалось прочитать {}: {e}", path.display()))?;
    let deck = parse_deck(&text).map_err(|e| format!("Колода {}: {e}", path.display()))?;
    Ok(deck.cards)
}

fn run<R: RandomSource>(
    mut engine: FreecellEngine<R>,
    deck: Option<&[Card]>,
    args: &Args,
) -> Result<SessionOutcome, ControllerError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let outcome = play_game(&mut engine, deck, args.shuffle, stdin.lock(), &mut stdout)?;

    if args.json {
        let view = build_game_view(engine.state(), engine.variant());
        match serde_json::to_string_pretty(&view) {
            Ok(json) => writeln!(stdout, "{json}")?,
            Err(err) => eprintln!("JSON: {err}"),
        }
    }
    stdout.flush()?;
    Ok(outcome)
}
