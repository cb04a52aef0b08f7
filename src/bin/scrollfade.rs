use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollfade", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the constants derived from a layout metric.
    Geometry(GeometryArgs),
    /// Scroll a simulated page top to bottom and stream controller output as JSON lines.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct GeometryArgs {
    /// Layout metric (text column width) in pixels.
    #[arg(long)]
    metric: f64,

    /// Row gap between slide sections in pixels.
    #[arg(long, default_value_t = 24.0)]
    row_gap: f64,

    /// Viewport height in pixels, used for the exclusivity check.
    #[arg(long, default_value_t = 900.0)]
    viewport: f64,

    /// Band start offset as a fraction of viewport height.
    #[arg(long, default_value_t = 0.5)]
    band_start: f64,

    /// Band end offset as a fraction of viewport height.
    #[arg(long, default_value_t = 0.5)]
    band_end: f64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input slideshow JSON. Defaults to the built-in demo deck.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Layout metric (text column width) in pixels.
    #[arg(long)]
    metric: f64,

    /// Viewport height in pixels.
    #[arg(long)]
    viewport: f64,

    /// Content height of every slide section in pixels.
    #[arg(long, default_value_t = 640.0)]
    section: f64,

    /// Height of the unrelated sections above and below the slideshow.
    #[arg(long, default_value_t = 500.0)]
    lead: f64,

    /// Number of scroll ticks from top to bottom.
    #[arg(long, default_value_t = 40)]
    steps: u32,

    /// Only emit activations and tick summaries.
    #[arg(long)]
    quiet_visuals: bool,

    /// Output path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Geometry(args) => cmd_geometry(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_slideshow_json(path: &Path) -> anyhow::Result<scrollfade::Slideshow> {
    let f = File::open(path).with_context(|| format!("open slideshow '{}'", path.display()))?;
    let r = BufReader::new(f);
    let show: scrollfade::Slideshow =
        serde_json::from_reader(r).with_context(|| "parse slideshow JSON")?;
    Ok(show)
}

fn cmd_geometry(args: GeometryArgs) -> anyhow::Result<()> {
    let metric = scrollfade::LayoutMetric::new(args.metric)?;
    let geometry = scrollfade::Geometry::with_row_gap(metric, args.row_gap);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let band = scrollfade::ViewportBand {
        start: args.band_start,
        end: args.band_end,
    };
    serde_json::to_writer_pretty(&mut out, &geometry.constants(band, args.viewport))?;
    writeln!(out)?;
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let show = match &args.in_path {
        Some(path) => read_slideshow_json(path)?,
        None => scrollfade::Slideshow::demo(),
    };
    show.validate()?;
    let band = show.config.band;
    let count = show.len();

    let mut controller = scrollfade::SlideshowController::new(show)?;
    let geometry = controller
        .on_resize(Some(args.metric))
        .with_context(|| format!("metric {} is not a usable width", args.metric))?;

    let spec = scrollfade::PageSpec {
        viewport_height: args.viewport,
        lead_in: args.lead,
        trail: args.lead,
        content_heights: vec![args.section; count],
    };
    let page = scrollfade::PageLayout::new(&spec, &geometry, band)?;

    let writer: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout())),
    };
    let mut sink = scrollfade::JsonLinesSink::new(writer);
    if args.quiet_visuals {
        sink = sink.without_visuals();
    }

    controller.on_load(&page.snapshot(0.0), &mut sink)?;

    let steps = args.steps.max(1);
    for i in 0..=steps {
        let scroll_y = page.max_scroll() * f64::from(i) / f64::from(steps);
        controller.on_scroll(&page.snapshot(scroll_y), &mut sink)?;
    }
    sink.into_inner()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
