use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;

/// Remap a gradient texture to the (attack, normalized time) UV system using an erosion texture.
#[derive(Parser, Debug)]
#[command(name = "remap-gradient", version)]
struct Cli {
    /// Erosion texture (R = inverted attack, G = release).
    #[arg(default_value = "fxMapInOut-boost.png")]
    erosion: PathBuf,

    /// Input gradient texture.
    #[arg(default_value = "boom_ramp2D.png")]
    gradient: PathBuf,

    /// Output path for the remapped gradient (PNG).
    #[arg(default_value = "boom_ramp2D_remapped.png")]
    output: PathBuf,

    /// Fade-in duration.
    #[arg(long, default_value_t = 0.5)]
    fade_in: f64,

    /// Fade-out duration.
    #[arg(long, default_value_t = 2.0)]
    fade_out: f64,

    /// Total animation duration.
    #[arg(long, default_value_t = 2.0)]
    duration: f64,

    /// Remap columns in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Print the full attack->release table as JSON on stdout.
    #[arg(long)]
    dump_table: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let erosion = load(&cli.erosion, "erosion")?;
    let gradient = load(&cli.gradient, "gradient")?;

    let params = gradient_remap::TimingParams::new(cli.fade_in, cli.fade_out, cli.duration)
        .context("timing parameters")?;

    eprintln!("erosion texture:  {}", shape(&erosion));
    eprintln!("gradient texture: {}", shape(&gradient));
    eprintln!(
        "parameters: fade_in={}, fade_out={}, duration={}",
        params.fade_in, params.fade_out, params.animation_duration
    );

    let table = gradient_remap::AttackReleaseTable::build(&erosion)
        .with_context(|| format!("build attack/release table from '{}'", cli.erosion.display()))?;
    eprintln!(
        "red to green mapping (sample): R=0->{:.1}, R=127->{:.1}, R=255->{:.1} ({} of 256 observed)",
        table.get(0),
        table.get(127),
        table.get(255),
        table.resolved_count()
    );
    if cli.dump_table {
        dump_table(&table)?;
    }

    let opts = gradient_remap::RemapOpts {
        parallel: cli.parallel,
        threads: cli.threads,
    };
    let remapped = gradient_remap::remap_gradient(&gradient, &table, &params, &opts)
        .with_context(|| format!("remap gradient '{}'", cli.gradient.display()))?;

    gradient_remap::save_texture(&cli.output, &remapped)?;

    eprintln!("wrote {}", cli.output.display());
    Ok(())
}

fn load(path: &Path, what: &str) -> anyhow::Result<gradient_remap::Texture> {
    gradient_remap::load_texture(path).with_context(|| format!("load {what} texture"))
}

fn shape(tex: &gradient_remap::Texture) -> String {
    let (w, h, c) = tex.shape();
    format!("{w}x{h}x{c}")
}

fn dump_table(table: &gradient_remap::AttackReleaseTable) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&table.values().as_slice())
        .context("serialize attack/release table")?;
    println!("{json}");
    Ok(())
}
