use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "phishflow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the composition descriptor as JSON.
    Describe(DescribeArgs),
    /// Print the computed state of one frame as JSON.
    Eval(EvalArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a range of frames as a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct CompArg {
    /// Composition descriptor JSON overriding the built-in one.
    #[arg(long = "comp")]
    comp_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    #[command(flatten)]
    comp: CompArg,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    #[command(flatten)]
    comp: CompArg,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    comp: CompArg,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the intermediate SVG next to the PNG.
    #[arg(long)]
    keep_svg: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    comp: CompArg,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Describe(args) => cmd_describe(args),
        Command::Eval(args) => cmd_eval(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_comp(arg: &CompArg) -> anyhow::Result<phishflow::CompositionDescriptor> {
    let comp = match &arg.comp_path {
        Some(path) => phishflow::CompositionDescriptor::from_path(path)
            .with_context(|| format!("load composition '{}'", path.display()))?,
        None => phishflow::CompositionDescriptor::phishing_flow(),
    };
    comp.validate()?;
    Ok(comp)
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let comp = load_comp(&args.comp)?;
    println!("{}", serde_json::to_string_pretty(&comp)?);
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let comp = load_comp(&args.comp)?;
    let state = comp.eval_frame(phishflow::FrameIndex(args.frame))?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load_comp(&args.comp)?;
    let state = comp.eval_frame(phishflow::FrameIndex(args.frame))?;
    let svg = phishflow::frame_to_svg(comp.canvas(), &state)?;

    if args.keep_svg {
        let svg_path = args.out.with_extension("svg");
        write_text(&svg_path, &svg)?;
        eprintln!("wrote {}", svg_path.display());
    }

    let frame = phishflow::rasterize_svg(&svg, comp.width, comp.height)?;
    phishflow::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let comp = load_comp(&args.comp)?;
    let end = args.end.unwrap_or(comp.duration_in_frames);
    let range = phishflow::FrameRange::new(
        phishflow::FrameIndex(args.start),
        phishflow::FrameIndex(end),
    )?;

    let n = phishflow::render_png_sequence(&comp, range, &args.out_dir)?;

    eprintln!("wrote {n} frames to {}", args.out_dir.display());
    Ok(())
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}
