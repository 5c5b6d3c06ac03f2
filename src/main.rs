use clap::Parser;
use foldercheck::{scan, ScanStats};
use std::{
    error::Error,
    path::{Path, PathBuf},
};

/// Counts files and directories under a path, recursively.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory to analyze (default: current)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Print only the directory count
    #[arg(short, long)]
    directories: bool,
}

fn report(stats: &ScanStats, path: &Path, directories_only: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if !directories_only {
        lines.push(format!("Files in \"{}\": {}", path.display(), stats.files));
    }
    lines.push(format!(
        "Directories in \"{}\": {}",
        path.display(),
        stats.directories
    ));

    lines
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let stats = scan(&args.path)?;

    for line in report(&stats, &args.path, args.directories) {
        println!("{line}");
    }

    Ok(())
}
