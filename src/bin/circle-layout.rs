use std::path::{Path, PathBuf};

use anyhow::Context as _;
use circle_layout::{ClipStrategy, SceneDesc};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "circle-layout", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene as a PNG.
    Frame(FrameArgs),
    /// Print the index of the child a pointer down at (x, y) would reach.
    Hit(HitArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Disable the frame cache.
    #[arg(long)]
    no_cache: bool,

    /// Override the wedge clipping strategy.
    #[arg(long, value_enum)]
    clip: Option<ClipChoice>,
}

#[derive(Parser, Debug)]
struct HitArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pointer x in container pixels.
    #[arg(long, allow_negative_numbers = true)]
    x: f64,

    /// Pointer y in container pixels.
    #[arg(long, allow_negative_numbers = true)]
    y: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClipChoice {
    Mask,
    PathClip,
}

impl From<ClipChoice> for ClipStrategy {
    fn from(value: ClipChoice) -> Self {
        match value {
            ClipChoice::Mask => ClipStrategy::Mask,
            ClipChoice::PathClip => ClipStrategy::PathClip,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Hit(args) => cmd_hit(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<SceneDesc> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open scene '{}'", path.display()))?;
    let scene = SceneDesc::from_json(&text).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut scene = read_scene_json(&args.in_path)?;
    if args.no_cache {
        scene.config.render_cache = false;
    }
    if let Some(clip) = args.clip {
        scene.config.clip = clip.into();
    }

    let mut layout = scene.build()?;
    let frame = layout.render_frame()?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_hit(args: HitArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let layout = scene.build()?;
    match layout.hit_test(circle_layout::Point::new(args.x, args.y)) {
        Some(id) => println!("{}", id.get()),
        None => println!("none"),
    }
    Ok(())
}
