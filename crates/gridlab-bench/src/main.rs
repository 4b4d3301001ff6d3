//! Render the scenario pool for a quick look at the test cases.
//!
//! Run: cargo run --bin gridlab-show -- 3
//!      cargo run --bin gridlab-show -- --all --out shots --scale 8

use std::path::PathBuf;

use clap::Parser;
use gridlab_bench::scenarios::{self, Scenario};
use gridlab_bench::{BenchConfig, SCENARIO_COUNT};
use gridlab_render::{DrawMode, DrawRequest, ImageSink, MAX_SCALE, RenderError};

#[derive(Parser, Debug)]
#[command(name = "gridlab-show", version, about = "Render gridlab test scenarios")]
struct Cli {
    /// Scenario index (0-24); a random one when omitted or out of range
    #[arg(allow_negative_numbers = true)]
    index: Option<i64>,

    /// Render every scenario
    #[arg(long, conflicts_with = "index")]
    all: bool,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Pixels per grid cell
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
    scale: Option<u32>,
}

fn main() {
    let cli = Cli::parse();
    let mut config = BenchConfig::default();
    if let Some(out) = cli.out {
        config.output_dir = out;
    }
    if let Some(scale) = cli.scale {
        config.scale = scale;
    }
    let mut sink = config.image_sink();

    let selected: Vec<Scenario> = if cli.all {
        scenarios::scenarios().collect()
    } else {
        vec![scenarios::get_scenario(cli.index)]
    };

    for s in &selected {
        if let Err(e) = show(&mut sink, s) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
    println!(
        "{} of {} scenarios written to {}",
        selected.len(),
        SCENARIO_COUNT,
        sink.dir().display()
    );
}

fn show(sink: &mut ImageSink, s: &Scenario) -> Result<(), RenderError> {
    let request = DrawRequest::new(DrawMode::Discrete, s.map()).with_endpoints(s.start, s.goal);
    let path = sink.save(&request)?;
    println!(
        "Scenario {}: {} -> {}, grid length {:.3}, any-angle length {:.3} ({})",
        s.index,
        s.start,
        s.goal,
        s.grid_length,
        s.any_angle_length,
        path.display()
    );
    Ok(())
}
