use aadescore::EngineConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::generator::profile::ScenarioConfig;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub engine: EngineConfig,
    pub scenario: ScenarioConfig,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        config
            .engine
            .validate()
            .with_context(|| format!("validating engine section of {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(ticks: usize, seed: u64, dropout: f64, color_fed: bool) -> Self {
        let engine = if color_fed {
            EngineConfig::color_fed()
        } else {
            EngineConfig::default()
        };
        Self {
            engine,
            scenario: ScenarioConfig {
                ticks,
                seed,
                dropout,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aadescore::prelude::HistoryCounting;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_selects_preset() {
        let cfg = WorkflowConfig::from_args(40, 3, 0.1, true);
        assert_eq!(cfg.scenario.ticks, 40);
        assert_eq!(cfg.engine.velocity_lookback, 10);
        assert_eq!(
            cfg.engine.velocity_min_history.counting,
            HistoryCounting::Total
        );
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"engine:\n  capacity: 16\n  reference: [200.0, 150.0]\n  growth_min_history:\n    samples: 8\n    counting: total\nscenario:\n  ticks: 25\n  dropout: 0.2\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.engine.capacity, 16);
        assert_eq!(cfg.engine.reference, (200.0, 150.0));
        assert_eq!(cfg.engine.growth_min_history.samples, 8);
        assert_eq!(cfg.engine.collision_radius, 80.0);
        assert_eq!(cfg.scenario.ticks, 25);
        assert_eq!(cfg.scenario.start_radius, 12.0);
    }

    #[test]
    fn config_load_rejects_invalid_engine() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"engine:\n  capacity: 0\n").unwrap();
        let path = temp.into_temp_path();
        let err = WorkflowConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("capacity"));
    }
}
