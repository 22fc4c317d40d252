use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use battlegif::{
    FighterKind, PaletteKind, RenderConfig, SelectionAlgorithm, SimulateConfig, render_to_gif,
    run_simulation,
};

#[derive(Parser, Debug)]
#[command(name = "battlegif", version)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a directory of text documents into a looping GIF.
    Render(RenderArgs),
    /// Simulate a grid battle and write one document per round.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// JSON config; flags given here override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of documents, one frame per file in name order.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output GIF path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Palette characters are looked up in.
    #[arg(long, value_enum)]
    palette: Option<PaletteKind>,

    /// Frame width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Frame height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Frame display time in milliseconds.
    #[arg(long)]
    delay_ms: Option<u32>,

    /// Quantizer speed, 1 (best) to 30 (fastest).
    #[arg(long)]
    speed: Option<i32>,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// JSON config; flags given here override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fighter family.
    #[arg(long, value_enum)]
    fighter: Option<FighterKind>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u32>,

    /// Rounds to simulate.
    #[arg(long)]
    rounds: Option<u32>,

    /// Attack a random neighbour instead of the weakest one.
    #[arg(long)]
    random: bool,

    /// Let fighters attack their own type.
    #[arg(long)]
    fight_own: bool,

    /// RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory documents are written to.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        None => cmd_render(RenderArgs::default()),
        Some(Command::Render(args)) => cmd_render(args),
        Some(Command::Simulate(args)) => cmd_simulate(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => RenderConfig::from_path(path)?,
        None => RenderConfig::default(),
    };
    if let Some(input) = args.input {
        cfg.input_dir = input;
    }
    if let Some(out) = args.out {
        cfg.output = out;
    }
    if let Some(palette) = args.palette {
        cfg.palette = palette;
    }
    if let Some(width) = args.width {
        cfg.canvas.width = width;
    }
    if let Some(height) = args.height {
        cfg.canvas.height = height;
    }
    if let Some(delay) = args.delay_ms {
        cfg.frame_delay_ms = delay;
    }
    if let Some(speed) = args.speed {
        cfg.speed = speed;
    }

    let stats = render_to_gif(&cfg).with_context(|| {
        format!(
            "render '{}' -> '{}'",
            cfg.input_dir.display(),
            cfg.output.display()
        )
    })?;
    if stats.underfilled + stats.truncated > 0 {
        tracing::warn!(
            underfilled = stats.underfilled,
            truncated = stats.truncated,
            "some documents did not match the frame size"
        );
    }

    eprintln!("wrote {} ({} frames)", cfg.output.display(), stats.frames);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => SimulateConfig::from_path(path)?,
        None => SimulateConfig::default(),
    };
    if let Some(fighter) = args.fighter {
        cfg.fighter = fighter;
    }
    if let Some(width) = args.width {
        cfg.canvas.width = width;
    }
    if let Some(height) = args.height {
        cfg.canvas.height = height;
    }
    if let Some(rounds) = args.rounds {
        cfg.rounds = rounds;
    }
    if args.random {
        cfg.selection = SelectionAlgorithm::RandomNeighbour;
    }
    if args.fight_own {
        cfg.fight_own = true;
    }
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(dir) = args.out_dir {
        cfg.output_dir = dir;
    }

    let stats = run_simulation(&cfg)
        .with_context(|| format!("simulate into '{}'", cfg.output_dir.display()))?;

    eprintln!(
        "wrote {} documents to {} ({} deaths)",
        stats.documents,
        cfg.output_dir.display(),
        stats.deaths
    );
    Ok(())
}
