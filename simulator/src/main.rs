use aadescore::Advisory;
use anyhow::Context;
use clap::Parser;
use gui_bridge::bridge::{gui_bind_address, GuiBridge};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Scenario driver for the AADES tracking core")]
struct Args {
    /// Run the configured scenario once and print a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load engine and scenario settings from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 60, conflicts_with = "workflow")]
    ticks: usize,
    #[arg(long, default_value_t = 0, conflicts_with = "workflow")]
    seed: u64,
    /// Probability of a missed detection per tick
    #[arg(long, default_value_t = 0.0, conflicts_with = "workflow")]
    dropout: f64,
    /// Use the colour-segmentation smoothing preset
    #[arg(long, default_value_t = false, conflicts_with = "workflow")]
    color_fed: bool,
    /// Append every advisory of the offline run as a JSON line
    #[arg(long)]
    report: Option<PathBuf>,
    /// Keep the telemetry bridge alive for live ingestion
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn append_report(path: &Path, advisories: &[Advisory]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening report {}", path.display()))?;
    for advisory in advisories {
        let line = serde_json::to_string(advisory).context("serializing advisory")?;
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.ticks, args.seed, args.dropout, args.color_fed)
    };

    let runner = Runner::new(workflow_config.clone());
    let gui_bridge = GuiBridge::new(Arc::new(runner.clone()))?;

    if args.offline {
        let result = runner.execute_scenario(&workflow_config.scenario)?;

        println!(
            "Offline run -> ticks {}, detections {}, gaps {}, collision alerts {}",
            result.counters.ticks,
            result.counters.detections,
            result.counters.gaps,
            result.counters.collision_alerts
        );
        for event in &result.status_events {
            println!("  {}", event);
        }
        if let Some(alert) = result.first_alert() {
            println!(
                "First alert at tick {}: {}",
                alert.tick,
                alert.vector_text()
            );
        }

        for advisory in &result.advisories {
            gui_bridge.publish(advisory);
        }
        gui_bridge.publish_status("Offline workflow results ready.");

        if let Some(report_path) = args.report.as_deref() {
            append_report(report_path, &result.advisories)?;
        }
    }
    if args.serve {
        gui_bridge.serve(gui_bind_address());
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn scenario_flags_conflict_with_workflow_file() {
        let err = Args::try_parse_from(["simulator", "--workflow", "run.yaml", "--ticks", "10"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let args = Args::try_parse_from(["simulator", "--workflow", "run.yaml", "--offline"]).unwrap();
        assert_eq!(args.workflow, Some(PathBuf::from("run.yaml")));
        assert_eq!(args.ticks, 60);
    }
}
