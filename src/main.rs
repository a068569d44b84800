use std::path::PathBuf;

use clap::Parser;
use trivia::Quiz;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// SQLite database (or .json file) to load the questions from
    database: PathBuf,

    /// Seed for question order and answer shuffling
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if args.no_color {
        crossterm::style::force_color_output(false);
    }

    let quiz = Quiz::from_store(&args.database);

    if let Err(e) = quiz.run(args.seed) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
