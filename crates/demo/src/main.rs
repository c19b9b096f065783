// File: crates/demo/src/main.rs
// Summary: Demo loads the cyclist dataset (URL or local JSON/CSV), normalizes it and renders a PNG.

use anyhow::{Context, Result};
use clap::Parser;
use race_chart_core::source::file_source;
use race_chart_core::types::{HEIGHT, PADDING, WIDTH};
use race_chart_core::{
    format_duration, load_and_normalize, theme, DataSource, HttpSource, Layout, OverlayEvent, RenderOptions, ScatterChart,
    TooltipOverlay, DEFAULT_DATASET_URL,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "race-chart", version, about = "Scatter plot of cycling race times against year")]
struct Cli {
    /// Dataset URL (ignored when --input is given)
    #[arg(long, default_value = DEFAULT_DATASET_URL)]
    url: String,

    /// Local dataset copy (.json or .csv)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Output PNG path
    #[arg(long, short, default_value = "target/out/race_chart.png")]
    out: PathBuf,

    #[arg(long, default_value_t = WIDTH)]
    width: u32,

    #[arg(long, default_value_t = HEIGHT)]
    height: u32,

    #[arg(long, default_value_t = PADDING)]
    padding: u32,

    /// Theme preset: dark, light, high-contrast-dark
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Skip tick, legend and tooltip text
    #[arg(long)]
    no_labels: bool,

    /// Simulate a pointer at X,Y (pixels) to render the tooltip
    #[arg(long, value_parser = parse_point)]
    hover: Option<(f64, f64)>,

    /// Debug logging (RUST_LOG still applies otherwise)
    #[arg(long, short)]
    verbose: bool,
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad X in {s:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad Y in {s:?}: {e}"))?;
    Ok((x, y))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let layout = Layout::new(cli.width, cli.height, cli.padding);
    if !layout.has_plot_area() {
        anyhow::bail!("padding {} leaves no plot area in {}x{}", layout.padding, layout.width, layout.height);
    }

    let source: Box<dyn DataSource> = match &cli.input {
        Some(path) => file_source(path).with_context(|| format!("choosing loader for {}", path.display()))?,
        None => Box::new(HttpSource::new(cli.url.clone())),
    };
    let plot = load_and_normalize(source.as_ref(), layout).context("failed to prepare chart data")?;
    let flagged = plot.records().iter().filter(|r| r.has_doping_allegation()).count();
    println!("Loaded {} records ({} with doping allegations)", plot.records().len(), flagged);

    let overlay = TooltipOverlay::new();
    if let Some((x, y)) = cli.hover {
        overlay.handle_event(&OverlayEvent::PointerMove { x, y }, &plot);
        match overlay.current() {
            Some(state) => println!("Hovering: {}", state.tooltip.lines().join(" | ")),
            None => {
                let scales = plot.scales();
                let year = scales.x.invert(x).round();
                let ms = scales.y.invert(y).max(0.0) as u64;
                println!("No record under ({x}, {y}); year ~{year}, time ~{}", format_duration(ms));
            }
        }
    }

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&cli.theme);
    opts.draw_labels = !cli.no_labels;

    let chart = ScatterChart::new(plot);
    chart.render_to_png(&opts, Some(&overlay), &cli.out)?;
    println!("Wrote {}", cli.out.display());
    Ok(())
}
