use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use prisma::{
    Canvas, Rgba8, SceneConfig, ShapeKind, VisualKind, frame_to_svg, generate, layer_stack,
    rasterize_svg, save_png,
};

#[derive(Parser, Debug)]
#[command(name = "prisma", version)]
struct Cli {
    /// Log verbosity on stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a visual at a point in time as SVG or PNG (chosen by the output extension).
    Frame(FrameArgs),
    /// Print the compositor's layer stack as JSON.
    Layers(SceneArgs),
    /// Print generated geometry as JSON.
    Shape(ShapeArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Scene config JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Visual to mount (`geometric_prism`, `prisma3d`, `logo`, `loader`).
    #[arg(long, value_parser = parse_visual)]
    visual: Option<VisualKind>,

    /// Container edge.
    #[arg(long)]
    size: Option<f64>,

    /// Stacked layers.
    #[arg(long)]
    layers: Option<u32>,

    /// Depth between layers.
    #[arg(long)]
    spacing: Option<f64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Seconds since mount.
    #[arg(long)]
    time: Option<f64>,

    /// Output path ending in `.svg` or `.png`.
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Background as `#rrggbb` or `#rrggbbaa`.
    #[arg(long, conflicts_with = "transparent")]
    background: Option<String>,

    /// Leave the background transparent.
    #[arg(long, default_value_t = false)]
    transparent: bool,

    /// Mount without channels (static end state).
    #[arg(long = "static", default_value_t = false)]
    still: bool,

    /// Mount for a host that requested reduced motion.
    #[arg(long, default_value_t = false)]
    reduced_motion: bool,
}

#[derive(Parser, Debug)]
struct ShapeArgs {
    /// Shape kind (`outer_triangle`, `inner_triangle`, `radial_spokes`, `concentric_rings`,
    /// `cross_bars`, `facet_diagonals`).
    #[arg(long, value_parser = parse_shape)]
    kind: ShapeKind,

    /// Prism base size.
    #[arg(long, default_value_t = 150.0)]
    base_size: f64,
}

fn parse_visual(s: &str) -> Result<VisualKind, String> {
    VisualKind::parse(s).map_err(|e| e.to_string())
}

fn parse_shape(s: &str) -> Result<ShapeKind, String> {
    ShapeKind::parse(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Layers(args) => cmd_layers(args),
        Command::Shape(args) => cmd_shape(args),
    }
}

fn scene(args: &SceneArgs) -> anyhow::Result<SceneConfig> {
    let mut cfg = match &args.config {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("load scene config '{}'", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(visual) = args.visual {
        cfg.visual = visual;
    }
    cfg.size = args.size.or(cfg.size);
    cfg.layers = args.layers.or(cfg.layers);
    cfg.layer_spacing = args.spacing.or(cfg.layer_spacing);
    Ok(cfg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut cfg = scene(&args.scene)?;
    if let Some(t) = args.time {
        cfg.time_secs = t;
    }
    cfg.canvas = Canvas {
        width: args.width.unwrap_or(cfg.canvas.width),
        height: args.height.unwrap_or(cfg.canvas.height),
    };
    if args.transparent {
        cfg.background = None;
    } else if let Some(hex) = &args.background {
        cfg.background = Some(Rgba8::from_hex(hex)?);
    }
    if args.still {
        cfg.animated = false;
    }
    if args.reduced_motion {
        cfg.host = cfg.host.with_reduced_motion(true);
    }

    let frame = cfg.frame()?;
    let svg = frame_to_svg(&frame, &cfg.svg_options())?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    match extension(&args.out).as_deref() {
        Some("svg") => std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?,
        Some("png") => {
            let img = rasterize_svg(&svg, cfg.canvas)?;
            save_png(&img, &args.out)?;
        }
        _ => anyhow::bail!(
            "output '{}' must end in .svg or .png",
            args.out.display()
        ),
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_layers(args: SceneArgs) -> anyhow::Result<()> {
    let cfg = scene(&args)?;
    cfg.validate()?;
    let (spec, falloff) = match cfg.visual {
        VisualKind::GeometricPrism => {
            let c = cfg.geometric_prism_config();
            (c.geometry()?, c.falloff)
        }
        VisualKind::Prisma3d => {
            let c = cfg.prisma3d_config();
            (c.geometry()?, c.falloff)
        }
        other => anyhow::bail!("visual '{}' has no layer stack", other.as_str()),
    };
    let stack = layer_stack(&spec, &falloff)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&stack).context("serialize layer stack")?
    );
    Ok(())
}

fn cmd_shape(args: ShapeArgs) -> anyhow::Result<()> {
    let points = generate(args.kind, args.base_size)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&points).context("serialize shape")?
    );
    Ok(())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}
