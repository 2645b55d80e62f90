//! Densify / generalize demo over the sample ship track.
//!
//! Usage:
//! ```text
//! cargo run --example densify_generalize                  # default sweep
//! cargo run --example densify_generalize -- densify 150   # single command
//! cargo run --example densify_generalize -- generalize 40
//! RUST_LOG=geosimp=debug cargo run --example densify_generalize
//! ```

use geosimp::operations::query::{Extent, Length};
use geosimp::pipeline::{SimplifyCommand, SimplifyParams, SimplifyPipeline, INITIAL_STATUS};
use geosimp::sample;

fn main() {
    // Default: WARN for everything, INFO for the demo and geosimp.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geosimp=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("densify_generalize=info".parse().unwrap_or_default())
        .add_directive("geosimp=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let track = sample::ship_track();
    if let Some(extent) = Extent::new(&track).execute() {
        let view = extent.expanded(1.1);
        tracing::info!(
            wkid = sample::SHIP_TRACK_SPATIAL_REFERENCE.wkid,
            width = view.width(),
            height = view.height(),
            length = Length::new(&track).execute(),
            "loaded ship track"
        );
    }

    let pipeline = SimplifyPipeline::new(track, SimplifyParams::default());
    tracing::info!("{INITIAL_STATUS}");

    for command in commands_from_args() {
        match pipeline.apply(&command) {
            Ok(outcome) => println!(
                "{:<32} parts={} vertices={}",
                outcome.label,
                outcome.polyline.part_count(),
                outcome.points.len()
            ),
            Err(err) => tracing::warn!(?command, %err, "command rejected"),
        }
    }
}

fn commands_from_args() -> Vec<SimplifyCommand> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [op, value] = args.as_slice() {
        if let Ok(value) = value.parse::<f64>() {
            let command = match op.as_str() {
                "densify" => Some(SimplifyCommand::Densify {
                    max_segment_length: value,
                }),
                "generalize" => Some(SimplifyCommand::Generalize {
                    max_deviation: value,
                }),
                _ => None,
            };
            if let Some(command) = command {
                return vec![command];
            }
        }
        tracing::warn!(?args, "unrecognised arguments, running default sweep");
    }

    let mut sweep: Vec<SimplifyCommand> = [100.0, 250.0, 500.0]
        .into_iter()
        .map(|max_segment_length| SimplifyCommand::Densify { max_segment_length })
        .collect();
    sweep.extend(
        [1.0, 50.0, 250.0]
            .into_iter()
            .map(|max_deviation| SimplifyCommand::Generalize { max_deviation }),
    );
    sweep
}
