use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use vitra_engine::coords::Vec2;
use vitra_engine::logging::{LoggingConfig, init_logging};
use vitra_engine::scene::DrawList;
use vitra_glass::media::{FsFetcher, SourceFetcher};
use vitra_glass::{GlassSurface, MediaResolver, SurfaceConfig};

mod proportion;
mod scene;

use scene::Scene;

#[derive(Parser, Debug)]
#[command(name = "vitra-studio", version)]
#[command(about = "Glass surface renderer and proportion calculator")]
struct Cli {
    /// Log filter, e.g. `debug` or `vitra_glass=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log: Option<String>,

    /// Disable colored log output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a scene's background and print the derived surface.
    Render(RenderArgs),
    /// Solve A / B = C / X for X.
    Proportion {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Scene JSON. Relative media paths resolve against its directory.
    scene: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Pointer position the panel follows.
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pointer: Option<Vec<f32>>,

    /// Hide the fallback badge.
    #[arg(long, default_value_t = false)]
    no_badge: bool,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum Format {
    /// CSS declarations per layer.
    Css,
    /// Engine draw commands in paint order.
    DrawList,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = cli.log {
        logging = logging.filter(filter);
    }
    if cli.no_color {
        logging = logging.plain();
    }
    init_logging(logging);

    match cli.cmd {
        Command::Render(args) => cmd_render(args).await,
        Command::Proportion { a, b, c } => cmd_proportion(&a, &b, &c),
    }
}

async fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = Scene::from_path(&args.scene)?;
    let root = args.scene.parent().unwrap_or_else(|| Path::new("."));

    let config = if args.no_badge {
        SurfaceConfig::default().without_badge()
    } else {
        SurfaceConfig::default()
    };
    let mut surface = GlassSurface::new(scene.media, scene.uniforms)
        .with_config(config)
        .on_ready(|| log::info!("background ready"));
    if let Some([x, y]) = args.pointer.as_deref() {
        surface.move_to(Vec2::new(*x, *y));
    }

    let resolver = MediaResolver::new(SourceFetcher::new(FsFetcher::rooted(root)));
    surface.resolve_with(&resolver).await;

    match args.format {
        Format::Css => print!("{}", surface.css()),
        Format::DrawList => {
            let mut list = DrawList::new();
            surface.paint(&mut list, scene.viewport.into());
            for item in list.iter_in_paint_order() {
                println!("{:>3} {:<12} {:?}", item.key.z.0, item.cmd.kind(), item.cmd);
            }
            if let Some(badge) = surface.fallback_badge() {
                println!("badge: {badge}");
            }
        }
    }
    Ok(())
}

fn cmd_proportion(a: &str, b: &str, c: &str) -> anyhow::Result<()> {
    match proportion::solve(a, b, c).context("solve proportion")? {
        Some(x) => println!("{x}"),
        None => eprintln!("enter all three values"),
    }
    Ok(())
}
