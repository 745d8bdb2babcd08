use anyhow::Context;
use gatecore::prelude::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Course layout as read from YAML or assembled from command-line flags.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkflowConfig {
    #[serde(flatten)]
    pub layout: LayoutConfig,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading layout config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing layout config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        origin_shift_x: f64,
        origin_shift_y: f64,
        gate_width: f64,
        gate_thickness: f64,
    ) -> Self {
        Self {
            layout: LayoutConfig {
                origin_shift_x,
                origin_shift_y,
                gate_width,
                gate_thickness,
            },
        }
    }

    pub fn to_layout_config(&self) -> LayoutConfig {
        self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_layout_config() {
        let cfg = WorkflowConfig::from_args(3.0, -1.0, 1.5, 0.1);
        let layout = cfg.to_layout_config();
        assert_eq!(layout.origin_shift_x, 3.0);
        assert_eq!(layout.gate_width, 1.5);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"origin_shift_x: 3.0\norigin_shift_y: 0.5\ngate_width: 1.6\ngate_thickness: 0.25\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.layout.origin_shift_y, 0.5);
        assert_eq!(cfg.layout.gate_thickness, 0.25);
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"origin_shift_x: 2.0\n").unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.layout.origin_shift_x, 2.0);
        assert_eq!(cfg.layout.gate_width, 1.3);
        assert_eq!(cfg.layout.gate_thickness, 0.2);
    }

    #[test]
    fn empty_yaml_mapping_uses_default_layout() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"{}\n").unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.to_layout_config(), LayoutConfig::default());
    }

    #[test]
    fn missing_config_is_an_error() {
        assert!(WorkflowConfig::load("no/such/layout.yaml").is_err());
    }
}
