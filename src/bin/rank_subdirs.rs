use clap::Parser;
use foldercheck::ranking;
use std::{error::Error, path::PathBuf};

/// Ranks the immediate subdirectories of a path by how many files
/// their subtrees contain.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory to analyze (default: current)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// List every subdirectory instead of the top 10
    #[arg(short, long)]
    all: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let ranked = ranking::recursive_subdir_counts(&args.path)?;

    let shown = if args.all {
        &ranked[..]
    } else {
        ranking::top_n(&ranked, ranking::DEFAULT_TOP_N)
    };

    for count in shown {
        println!("{}: {} files", count.path.display(), count.files);
    }

    Ok(())
}
