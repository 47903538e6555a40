use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use genart::{ArtConfig, Artwork, GeneratorKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "genart", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scatter circles and line segments ("geometric storm").
    Storm(GenerateArgs),
    /// Scatter drifting circles, squares and triangles.
    Shapes(GenerateArgs),
    /// Render an artwork described by a JSON config.
    Render(RenderArgs),
    /// List the registered palettes.
    Palettes,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Number of primitives (generator default when omitted; <= 0 draws nothing).
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Palette name; unknown names fall back to the generator default.
    #[arg(long)]
    palette: Option<String>,

    /// Seed for a reproducible image.
    #[arg(long)]
    seed: Option<u64>,

    /// Background color as #RRGGBB.
    #[arg(long)]
    background: Option<String>,

    /// Output side length in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Resolution used to convert line widths from points to pixels.
    #[arg(long)]
    dpi: Option<f64>,

    /// Output PNG path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the generated primitives as JSON on stdout.
    #[arg(long)]
    dump_json: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Storm(args) => cmd_generate(GeneratorKind::Storm, args),
        Command::Shapes(args) => cmd_generate(GeneratorKind::Shapes, args),
        Command::Render(args) => cmd_render(args),
        Command::Palettes => {
            cmd_palettes();
            Ok(())
        }
    }
}

fn cmd_generate(kind: GeneratorKind, args: GenerateArgs) -> anyhow::Result<()> {
    if args.out.is_none() && !args.dump_json {
        anyhow::bail!("nothing to do: pass --out and/or --dump-json");
    }

    let base = ArtConfig::for_generator(kind);
    let cfg = ArtConfig {
        generator: kind,
        count: args.count.unwrap_or(base.count),
        palette: args.palette.unwrap_or(base.palette),
        seed: args.seed,
        background: args.background.unwrap_or(base.background),
        size_px: args.size.unwrap_or(base.size_px),
        dpi: args.dpi.unwrap_or(base.dpi),
    };
    cfg.validate()?;

    let art = match &args.out {
        Some(out) => {
            let art = genart::render_config_to_png(&cfg, out)?;
            eprintln!("wrote {}", out.display());
            art
        }
        None => Artwork::generate(&cfg),
    };

    if args.dump_json {
        let json = serde_json::to_string_pretty(&art).context("serialize artwork")?;
        println!("{json}");
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = ArtConfig::from_json_path(&args.config)
        .with_context(|| format!("load config '{}'", args.config.display()))?;
    genart::render_config_to_png(&cfg, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_palettes() {
    for p in genart::PALETTES {
        println!("{:<8} {}", p.name, p.colors.join(" "));
    }
}
