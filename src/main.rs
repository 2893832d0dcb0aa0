use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use capitals_quiz::{Difficulty, Quiz, QuizError};
use env_logger::{Env, Target};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Start right away at this level (principiante, intermedio, avanzado)
    #[arg(short, long)]
    difficulty: Option<String>,

    /// Milliseconds between timer updates
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(10..))]
    tick_ms: u64,

    /// Seed for a reproducible question order
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    if let Some(path) = &args.log_file {
        init_logger(path)?;
    }

    let quiz = match args.seed {
        Some(seed) => Quiz::with_seed(seed)?,
        None => Quiz::new()?,
    };
    let mut quiz = quiz.tick_rate(Duration::from_millis(args.tick_ms));

    if let Some(name) = &args.difficulty {
        quiz = quiz.start(Difficulty::resolve(name))?;
    }

    quiz.run()
}

// The terminal belongs to the quiz screens, so logs can only go to a file.
fn init_logger(path: &Path) -> Result<(), QuizError> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
