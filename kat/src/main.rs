// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! `p2lite-kat`: compute, persist and verify known-answer records.
//!
//! ```shell
//! RUST_LOG=debug p2lite-kat hash 123 456 --trace
//! p2lite-kat vectors --out-dir vectors/
//! p2lite-kat input 123 456 --out input.json
//! p2lite-kat verify vectors/*.json
//! p2lite-kat batch preimages.json --out records.json
//! ```

use std::{io::IsTerminal, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use jf_p2lite::{permute_with_trace, to_dec_strings};
use jf_p2lite_field::FieldElement;
use jf_p2lite_kat::{
    hash_records, read_preimages, read_record, write_record, write_vectors, KatRecord,
    PROVER_INPUT_FILE,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "p2lite-kat")]
#[command(about = "Known-answer vectors for the 5-round p2lite hash over BN254", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash one preimage and print its record as JSON
    Hash {
        /// First preimage element, decimal
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second preimage element, decimal
        #[arg(allow_hyphen_values = true)]
        b: String,
        /// Log the state after every layer of every round (debug level)
        #[arg(long)]
        trace: bool,
        /// Also write the record to this file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Write the built-in cases to test_<name>.json files
    Vectors {
        /// Output directory
        #[arg(short, long, env = "P2LITE_OUT_DIR", default_value = ".")]
        out_dir: PathBuf,
    },
    /// Write the prover input record for one preimage
    Input {
        /// First preimage element, decimal
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second preimage element, decimal
        #[arg(allow_hyphen_values = true)]
        b: String,
        /// Output file
        #[arg(short, long, default_value = PROVER_INPUT_FILE)]
        out: PathBuf,
    },
    /// Recompute and check records written by `hash`, `vectors` or `input`
    Verify {
        /// Record files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Hash a JSON list of preimages, e.g. [["1", "2"], ["3", "4"]]
    Batch {
        /// Preimage list
        input: PathBuf,
        /// Write the records here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // stdout carries JSON, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Hash { a, b, trace, out } => {
            if trace {
                log_trace(&a, &b)?;
            }
            let record = KatRecord::compute([a.as_str(), b.as_str()])?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            if let Some(path) = out {
                write_record(&path, &record)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
        },
        Commands::Vectors { out_dir } => {
            let paths = write_vectors(&out_dir)
                .with_context(|| format!("writing vectors to {}", out_dir.display()))?;
            info!(count = paths.len(), dir = %out_dir.display(), "vectors written");
        },
        Commands::Input { a, b, out } => {
            let record = KatRecord::compute([a.as_str(), b.as_str()])?;
            write_record(&out, &record).with_context(|| format!("writing {}", out.display()))?;
            info!(preimage = ?record.preimage, hash = ?record.hash, "prover input ready");
        },
        Commands::Verify { files } => {
            let mut failed = 0usize;
            for path in &files {
                let outcome = read_record(path)
                    .with_context(|| format!("reading {}", path.display()))
                    .and_then(|record| record.verify().map_err(Into::into));
                match outcome {
                    Ok(()) => info!(path = %path.display(), "ok"),
                    Err(e) => {
                        warn!(path = %path.display(), "{e:#}");
                        failed += 1;
                    },
                }
            }
            if failed > 0 {
                bail!("{failed} of {} records failed verification", files.len());
            }
        },
        Commands::Batch { input, out } => {
            let preimages = read_preimages(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let records = hash_records(&preimages)?;
            let json = serde_json::to_string_pretty(&records)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(count = records.len(), path = %path.display(), "batch written");
                },
                None => println!("{json}"),
            }
        },
    }
    Ok(())
}

fn log_trace(a: &str, b: &str) -> Result<()> {
    let preimage = [FieldElement::from_dec_str(a)?, FieldElement::from_dec_str(b)?];
    debug!(state = ?to_dec_strings(&[preimage[0], preimage[1], FieldElement::zero()]), "initial");
    let (_, rounds) = permute_with_trace(preimage);
    for r in &rounds {
        debug!(round = r.round, state = ?to_dec_strings(&r.after_constant), "after round constant");
        debug!(round = r.round, state = ?to_dec_strings(&r.after_sbox), "after sbox");
        debug!(round = r.round, state = ?to_dec_strings(&r.after_mix), "after mix");
    }
    Ok(())
}
