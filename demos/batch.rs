//! Batch-expand a two-column (label, expression) tab-delimited file.
//!
//! Run with:
//! ```bash
//! cargo run --example batch -- data.tsv
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;

use dnf_rs::batch::records;
use dnf_rs::compile::{compile, Options};

#[derive(Debug, Parser)]
#[command(about = "Expand each named expression in a tab-delimited file")]
struct Cli {
    /// Path to the two-column (label, expression) file
    path: PathBuf,

    /// Merge all alternatives of each expression into one combined tuple
    #[arg(long)]
    combine_or: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();
    let options = Options {
        combine_or: cli.combine_or,
        ..Options::default()
    };

    let reader = BufReader::new(File::open(&cli.path)?);
    for record in records(reader) {
        let (label, expression) = match record {
            Ok(record) => record,
            Err(e) => {
                log::error!("skipping malformed record: {}", e);
                continue;
            }
        };
        println!("{}", label);
        // One bad expression does not stop the batch.
        match compile(&expression, &options) {
            Ok(compiled) => {
                for clause in compiled.clauses() {
                    println!("\t{}", clause.join(" & "));
                }
            }
            Err(e) => log::error!("{}: {}", label, e),
        }
    }

    Ok(())
}
