use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "storeframe", version)]
/// Composite localized App Store screenshot mockups. Renders the built-in jobs when no
/// subcommand is given.
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every job to a PNG.
    Render(RenderArgs),
    /// Report every missing template or screenshot without rendering.
    Check(SourceArgs),
    /// Print the built-in job manifest as JSON.
    Jobs,
}

#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Directory holding the device-frame templates; outputs are written here too.
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Directory holding the simulator screenshots (default: ~/Desktop).
    #[arg(long)]
    screenshots_dir: Option<PathBuf>,

    /// Job manifest JSON (layout + jobs) replacing the built-in Spanish iPad list.
    #[arg(long)]
    jobs: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    #[command(flatten)]
    sources: SourceArgs,

    /// Print which title font was resolved.
    #[arg(long)]
    dump_fonts: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        None => cmd_render(RenderArgs::default()),
        Some(Command::Render(args)) => cmd_render(args),
        Some(Command::Check(args)) => cmd_check(args),
        Some(Command::Jobs) => cmd_jobs(),
    }
}

fn resolve_sources(
    args: SourceArgs,
) -> anyhow::Result<(storeframe::JobManifest, storeframe::SourceDirs)> {
    let manifest = match &args.jobs {
        Some(path) => storeframe::JobManifest::from_json_file(path)
            .with_context(|| format!("load job manifest '{}'", path.display()))?,
        None => storeframe::JobManifest::spanish_ipad(),
    };

    let mut dirs = storeframe::SourceDirs::default_for_user();
    if let Some(d) = args.assets_dir {
        dirs.assets_dir = d;
    }
    if let Some(d) = args.screenshots_dir {
        dirs.screenshots_dir = d;
    }
    Ok((manifest, dirs))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (manifest, dirs) = resolve_sources(args.sources)?;

    let mut renderer = storeframe::MockupRenderer::with_default_font(manifest.layout)?;

    if args.dump_fonts {
        eprintln!("title font diagnostics:");
        eprintln!("  face: {}", renderer.title_face());
        eprintln!("  size: {}px", renderer.layout().title_size_px);
    }

    let written = renderer.render_all(&manifest.jobs, &dirs)?;
    tracing::info!(count = written.len(), "all mockups rendered");
    Ok(())
}

fn cmd_check(args: SourceArgs) -> anyhow::Result<()> {
    let (manifest, dirs) = resolve_sources(args)?;

    let missing = storeframe::missing_inputs(&manifest.jobs, &dirs);
    if missing.is_empty() {
        eprintln!("all inputs present for {} jobs", manifest.jobs.len());
        return Ok(());
    }

    for err in &missing {
        eprintln!("  {err}");
    }
    anyhow::bail!("{} input file(s) missing", missing.len());
}

fn cmd_jobs() -> anyhow::Result<()> {
    let json = storeframe::JobManifest::spanish_ipad().to_json_pretty()?;
    println!("{json}");
    Ok(())
}
