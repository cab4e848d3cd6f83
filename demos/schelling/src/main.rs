//! schelling — run one named experiment and draw it in the terminal.
//!
//! ```text
//! schelling --config default --file experiments.csv --seed 42 --pause
//! ```
//!
//! Logging goes to stderr and honors `RUST_LOG` (default `info`); frames go
//! to stdout.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sg_config::{DEFAULT_EXPERIMENT, load_experiment};
use sg_core::{Frame, SimRng};
use sg_render::TextRenderer;
use sg_sim::{SimBuilder, SimObserver};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "schelling", about = "Two-group residential segregation simulator")]
struct Args {
    /// Experiment to run, by name.
    #[arg(long, default_value = DEFAULT_EXPERIMENT)]
    config: String,

    /// CSV file of named experiments.
    #[arg(long, default_value = "experiments.csv")]
    file: PathBuf,

    /// RNG seed; the same seed reproduces the same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Wait for Enter after each rendered frame.
    #[arg(long)]
    pause: bool,

    /// Log per-frame progress instead of drawing the grid.
    #[arg(long, conflicts_with = "pause")]
    quiet: bool,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

// ── Progress observer for --quiet ─────────────────────────────────────────────

struct ProgressLog {
    total_moves: usize,
}

impl SimObserver for ProgressLog {
    fn on_frame_end(&mut self, frame: Frame, relocations: usize) {
        self.total_moves += relocations;
        info!(frame = frame.0, relocations, "frame");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = load_experiment(&args.file, &args.config)
        .with_context(|| format!("loading experiment {:?} from {}", args.config, args.file.display()))?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    info!(experiment = %args.config, seed = args.seed, "starting run");
    let start = Instant::now();

    let mut sim = SimBuilder::new(config.clone(), SimRng::new(args.seed))
        .build()
        .context("initializing simulation")?;
    let initial_similarity = sim.mean_similarity()?;

    if args.quiet {
        let mut progress = ProgressLog { total_moves: 0 };
        sim.run(&mut progress).context("simulation halted")?;
        info!(total_moves = progress.total_moves, "all frames done");
    } else {
        let mut renderer = TextRenderer::from_config(io::stdout().lock(), &config);
        if args.pause {
            renderer = renderer.with_pause(io::stdin().lock());
        }
        sim.run(&mut renderer).context("simulation halted")?;
        if let Some(e) = renderer.take_error() {
            tracing::warn!(error = %e, "some frames could not be drawn");
        }
    }

    let counts = sim.counts();
    info!(
        frames = sim.frame().0,
        type_a = counts.type_a,
        type_b = counts.type_b,
        empty = counts.empty,
        initial_similarity = initial_similarity.unwrap_or(f64::NAN),
        final_similarity = sim.mean_similarity()?.unwrap_or(f64::NAN),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(())
}
