//! Command-line front end for the primitive benchmark harness.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use primbench::{
    CATALOG, CpuSurface, LoopConfig, NullSink, PngDirSink, Renderable as _, RenderLoop,
    SceneGenerator, ScriptedEvents, ThroughputReporter, annotate, catalog, quadrants,
};

#[derive(Parser, Debug)]
#[command(name = "primbench", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cycle through the whole catalog headless, one case per frame.
    Cycle(CycleArgs),
    /// Run a single case by name.
    Case(CaseArgs),
    /// List the catalog in cycling order.
    List,
}

#[derive(Parser, Debug)]
struct SurfaceArgs {
    /// Surface width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Quadrant border inset in pixels.
    #[arg(long, default_value_t = 10)]
    border: i32,

    /// Records per generated scene.
    #[arg(long, default_value_t = 4096)]
    samples: usize,
}

#[derive(Parser, Debug)]
struct CycleArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Sleep between frames in milliseconds.
    #[arg(long, default_value_t = 25)]
    delay_ms: u64,

    /// Write each frame as a numbered PNG into this directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the run summary as JSON on stdout.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct CaseArgs {
    /// Case name, e.g. `FilledCircle` (case-insensitive).
    name: String,

    #[command(flatten)]
    surface: SurfaceArgs,

    /// Scene seed; defaults to the case's catalog index. Negative values
    /// seed from the clock.
    #[arg(long)]
    seed: Option<i64>,

    /// Output PNG path for the rendered frame.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the case result as JSON on stdout.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Cycle(args) => cmd_cycle(args),
        Command::Case(args) => cmd_case(args),
        Command::List => cmd_list(),
    }
}

fn cmd_cycle(args: CycleArgs) -> anyhow::Result<()> {
    let config = LoopConfig {
        width: args.surface.width,
        height: args.surface.height,
        border: args.surface.border,
        samples: args.surface.samples,
        frame_delay: Duration::from_millis(args.delay_ms),
    };

    let mut surface = CpuSurface::new(config.width, config.height)?;
    let mut events = ScriptedEvents::full_cycle(CATALOG.len());
    let mut render_loop = RenderLoop::new(config);

    let summary = match &args.out_dir {
        Some(dir) => {
            let mut sink = PngDirSink::new(dir)?;
            render_loop.run(&mut surface, &mut events, &mut sink)?
        }
        None => render_loop.run(&mut surface, &mut events, &mut NullSink)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        eprintln!(
            "{} frames in {} ms ({:.2} fps)",
            summary.frames, summary.elapsed_ms, summary.fps
        );
    }
    Ok(())
}

fn cmd_case(args: CaseArgs) -> anyhow::Result<()> {
    let (index, case) = catalog::find_case(&args.name)
        .with_context(|| format!("unknown case '{}'; see `primbench list`", args.name))?;

    let regions = quadrants(
        args.surface.width as i32,
        args.surface.height as i32,
        args.surface.border,
    )?;
    let scene = SceneGenerator::new(
        args.surface.width,
        args.surface.height,
        args.surface.samples,
    )
    .generate(args.seed.unwrap_or(index as i64));

    let mut surface = CpuSurface::new(args.surface.width, args.surface.height)?;
    annotate::clear_screen(&mut surface, case.name)?;
    let result = ThroughputReporter::new().measure(case, &mut surface, &regions, &scene)?;
    let frame = surface.render()?;

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            out,
            &frame.to_straight_alpha(),
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        match result.rate {
            Some(rate) => eprintln!("{:>20}: {:>10.1} /sec", result.name, rate),
            None => eprintln!("{:>20}: too fast to measure", result.name),
        }
    }
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    for (i, case) in CATALOG.iter().enumerate() {
        println!("{i:2}  {}", case.name);
    }
    Ok(())
}
