use anyhow::Context;
use clap::Parser;
use gatecore::io::{read_gates, read_path, write_path};
use gatecore::prelude::LayoutConfig;
use gatecore::render::{PathKind, SceneBuilder, SceneRenderer};
use gatecore::telemetry::format_path;
use log::warn;
use render::bridge::RenderBridge;
use render::svg::SvgRenderer;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod render;
mod workflow;

const DEFAULT_GATES_FILE: &str = "gates.csv";

#[derive(Parser)]
#[command(author, version, about = "Plan flight-path waypoints through a racing-gate course")]
struct Args {
    /// Gates input file
    #[arg(long, default_value = DEFAULT_GATES_FILE)]
    gatesin: String,
    /// Existing path file to draw alongside the gates
    #[arg(long)]
    pathin: Option<PathBuf>,
    /// Path output file; computing the path is skipped without it
    #[arg(long)]
    pathout: Option<PathBuf>,
    /// Load the course layout from YAML instead of the flags below
    #[arg(long)]
    layout: Option<PathBuf>,
    #[arg(long, default_value_t = LayoutConfig::DEFAULT_ORIGIN_SHIFT.0, allow_negative_numbers = true)]
    origin_shift_x: f64,
    #[arg(long, default_value_t = LayoutConfig::DEFAULT_ORIGIN_SHIFT.1, allow_negative_numbers = true)]
    origin_shift_y: f64,
    #[arg(long, default_value_t = LayoutConfig::DEFAULT_GATE_WIDTH)]
    gate_width: f64,
    #[arg(long, default_value_t = LayoutConfig::DEFAULT_GATE_THICKNESS)]
    gate_thickness: f64,
    /// Render the course to this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,
    #[arg(long, default_value_t = 1280)]
    svg_width: u32,
    #[arg(long, default_value_t = 960)]
    svg_height: u32,
}

/// Resolves `--gatesin`; an empty value falls back to the default file.
fn gates_input_path(gatesin: &str) -> PathBuf {
    if gatesin.is_empty() {
        eprintln!(
            "Must specify gates input file (--gatesin), falling back to {}",
            DEFAULT_GATES_FILE
        );
        PathBuf::from(DEFAULT_GATES_FILE)
    } else {
        PathBuf::from(gatesin)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let gates_path = gates_input_path(&args.gatesin);

    let workflow_config = if let Some(path) = args.layout {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.origin_shift_x,
            args.origin_shift_y,
            args.gate_width,
            args.gate_thickness,
        )
    };

    let runner = Runner::new(workflow_config);
    let (svg_width, svg_height) = (args.svg_width, args.svg_height);
    let renderer = args.svg.map(|path| {
        let svg = SvgRenderer::new(path).with_size(svg_width, svg_height);
        Box::new(svg) as Box<dyn SceneRenderer>
    });
    let mut bridge = RenderBridge::new(renderer);

    let rows = read_gates(&gates_path)
        .with_context(|| format!("loading gates from {}", gates_path.display()))?;
    let gates = runner.parse_gates(&rows)?;
    let mut scene = SceneBuilder::new(runner.layout()).with_gates(&gates);

    if let Some(path_in) = args.pathin {
        if bridge.is_enabled() {
            let loaded = read_path(&path_in)
                .with_context(|| format!("loading path from {}", path_in.display()))?;
            scene = scene.with_path(PathKind::Loaded, &loaded);
        } else {
            warn!(
                "--pathin {} is only drawn when a renderer is configured (--svg)",
                path_in.display()
            );
        }
    }

    if let Some(path_out) = args.pathout {
        let result = runner.plan(&gates);
        for line in format_path(&result.waypoints) {
            println!("{}", line);
        }
        println!(
            "Planned {} waypoints through {} gates",
            result.summary.total(),
            result.summary.gates
        );
        scene = scene.with_path(PathKind::Computed, &result.waypoints);
        write_path(&path_out, &result.waypoints)
            .with_context(|| format!("writing path to {}", path_out.display()))?;
        println!("Wrote path to csv: {}", path_out.display());
    }

    bridge.publish(&scene.build());

    Ok(())
}
