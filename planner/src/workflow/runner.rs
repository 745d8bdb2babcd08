use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use gatecore::gate::{GateRecord, GateRow};
use gatecore::path::{plan_path, PathSummary, Waypoint};
use gatecore::prelude::LayoutConfig;
use gatecore::telemetry::LogManager;

pub struct WorkflowResult {
    pub waypoints: Vec<Waypoint>,
    pub summary: PathSummary,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn layout(&self) -> LayoutConfig {
        self.config.to_layout_config()
    }

    pub fn parse_gates(&self, rows: &[GateRow]) -> anyhow::Result<Vec<GateRecord>> {
        GateRecord::parse_all(rows).context("parsing gate course")
    }

    pub fn plan(&self, gates: &[GateRecord]) -> WorkflowResult {
        let layout = self.layout();
        let waypoints = plan_path(gates, &layout);
        let summary = PathSummary::of(gates);

        let logger = LogManager::new();
        logger.record(&format!(
            "Planned {} waypoints through {} gates ({} approach, {} exit)",
            waypoints.len(),
            summary.gates,
            summary.approach,
            summary.exit
        ));
        logger.record_path(&waypoints);

        WorkflowResult {
            waypoints,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatecore::io::read_gates_from;

    const COURSE: &str = "x,y,z,rotation,offset_y,waypoint_before,waypoint_after\n\
                          0,0,1.0,0,0,1,1\n\
                          6,-2,1.2,-90,0.4,1,0\n\
                          3,-6,1.4,-135,0,1.5,1.5\n";

    #[test]
    fn runner_executes_workflow() {
        let runner = Runner::new(WorkflowConfig::default());
        let rows = read_gates_from(COURSE.as_bytes()).unwrap();
        let gates = runner.parse_gates(&rows).unwrap();
        let result = runner.plan(&gates);
        assert_eq!(result.summary.gates, 3);
        assert_eq!(result.waypoints.len(), result.summary.total());
        assert_eq!(result.waypoints.len(), 3 + 2 + 3);
    }

    #[test]
    fn runner_honours_layout_shift() {
        let runner = Runner::new(WorkflowConfig::from_args(0.0, 0.0, 1.3, 0.2));
        let rows = read_gates_from(COURSE.as_bytes()).unwrap();
        let result = runner.plan(&runner.parse_gates(&rows).unwrap());
        assert_eq!(result.waypoints[1], Waypoint::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn runner_surfaces_parse_failure() {
        let runner = Runner::new(WorkflowConfig::default());
        let rows = read_gates_from(
            "x,y,z,rotation,offset_y,waypoint_before,waypoint_after\n0,0,high,0,0,1,1\n".as_bytes(),
        )
        .unwrap();
        let err = runner.parse_gates(&rows).unwrap_err();
        assert!(format!("{:#}", err).contains("`z`"));
    }
}
