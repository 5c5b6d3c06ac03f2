use clap::Parser;
use foldercheck::ranking;
use std::{error::Error, path::PathBuf};

/// Which directories hold the most files?
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory to analyze (default: current)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// List every directory instead of the top 10
    #[arg(short, long)]
    all: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let ranked = ranking::direct_file_counts(&args.path)?;

    let shown = if args.all {
        &ranked[..]
    } else {
        ranking::top_n(&ranked, ranking::DEFAULT_TOP_N)
    };

    println!("Top folders with the most files:");
    for (i, count) in shown.iter().enumerate() {
        println!("{}: {} - {} files", i + 1, count.path.display(), count.files);
    }

    Ok(())
}
