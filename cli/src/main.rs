use anyhow::Result;
use clap::{Parser, ValueEnum};
use jieba_cli::JiebaOptions;
use jieba_core::ModelPreset;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Command-line model selector: a local `clap::ValueEnum` wrapper, since
/// `jieba_core::ModelPreset` lives in a crate that has no `clap` dependency
/// and the orphan rule forbids implementing `ValueEnum` for it here.
/// Rejecting an unknown model name happens entirely inside `clap::parse`,
/// before any core or loader code runs.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelArg {
    Base,
    Small,
    Large,
}

impl From<ModelArg> for ModelPreset {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Base => ModelPreset::Base,
            ModelArg::Small => ModelPreset::Small,
            ModelArg::Large => ModelPreset::Large,
        }
    }
}

/// Chinese word segmentation over a dictionary-DAG + HMM model.
#[derive(Parser)]
#[command(name = "jieba", version, about)]
struct Args {
    /// Text to segment. If omitted, reads one sentence per line from stdin.
    text: Option<String>,

    /// Bundled model size.
    #[arg(long, value_enum, default_value = "base")]
    model: ModelArg,

    /// Directory containing model.<preset>.json and hmm.json.
    /// Defaults to $JIEBA_MODEL_DIR, or ./data if unset.
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Disable the HMM fallback for out-of-vocabulary runs.
    #[arg(long)]
    no_hmm: bool,

    /// Segment in query mode (expands long words into dictionary n-grams).
    #[arg(long)]
    query: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let dir = args.model_dir.unwrap_or_else(jieba_loader::model_dir);
    tracing::info!(model_dir = %dir.display(), model = ?args.model, hmm = !args.no_hmm, "starting up");
    let opts = JiebaOptions::load(&dir, args.model.into(), !args.no_hmm)?;

    let run = |line: &str| {
        let _span = tracing::debug_span!("segment", query = args.query, chars = line.chars().count()).entered();
        let words = if args.query {
            opts.cut_query(line)
        } else {
            opts.cut_text(line)
        };
        println!("{}", words.join(" / "));
    };

    match &args.text {
        Some(text) => run(text),
        None => {
            let stdin = io::stdin();
            print!("> ");
            io::stdout().flush().ok();
            for line in stdin.lock().lines() {
                let line = line?;
                if line.is_empty() {
                    continue;
                }
                run(&line);
                print!("> ");
                io::stdout().flush().ok();
            }
        }
    }

    Ok(())
}
