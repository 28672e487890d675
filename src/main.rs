use anyhow::Result;
use clap::Parser;

use semver_rollup::{rollup, ui};

#[derive(clap::Parser)]
#[command(
    name = "semver-rollup",
    version,
    about = "Bump a parent semantic version from its child products' version changes"
)]
struct Args {
    #[arg(help = "Current SemVer2 version of the parent")]
    parent: String,

    #[arg(help = "Child transitions as OLD=NEW, e.g. 1.2.3=1.3.0")]
    pairs: Vec<String>,

    #[arg(short, long, help = "Only print the resulting version")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Each OLD=NEW argument becomes one raw entry; an argument with no '='
    // (or more than one) fails the pair shape check downstream.
    let child_entries: Vec<Vec<String>> = args
        .pairs
        .iter()
        .map(|pair| pair.split('=').map(str::to_string).collect())
        .collect();

    match rollup::compute_parent_version(&args.parent, &child_entries) {
        Ok(updated) => {
            if !args.quiet {
                ui::display_rollup(&args.parent, &updated, child_entries.len());
            }
            ui::display_result(&updated);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
