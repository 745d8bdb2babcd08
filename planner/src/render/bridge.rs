use gatecore::render::{Scene, SceneRenderer};
use log::{info, warn};

/// Hands finished scenes to an optional renderer.
///
/// Rendering never aborts a run: a missing renderer is skipped and a failing
/// one is logged.
pub struct RenderBridge {
    renderer: Option<Box<dyn SceneRenderer>>,
}

impl RenderBridge {
    pub fn new(renderer: Option<Box<dyn SceneRenderer>>) -> Self {
        Self { renderer }
    }

    pub fn is_enabled(&self) -> bool {
        self.renderer.is_some()
    }

    /// Returns `true` when the scene was rendered.
    pub fn publish(&mut self, scene: &Scene) -> bool {
        let Some(renderer) = self.renderer.as_mut() else {
            info!("no renderer configured, skipping visualization");
            return false;
        };
        match renderer.render(scene) {
            Ok(()) => {
                self.publish_status(&format!(
                    "rendered {} gates, {} path layers",
                    scene.gates.len(),
                    scene.paths.len()
                ));
                true
            }
            Err(err) => {
                warn!("visualization unavailable: {}", err);
                false
            }
        }
    }

    pub fn publish_status(&self, message: &str) {
        println!("[PLOT] {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatecore::gate::GateRecord;
    use gatecore::prelude::{LayoutConfig, PlanError, PlanResult};
    use gatecore::render::SceneBuilder;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recording(Rc<RefCell<Vec<usize>>>);

    impl SceneRenderer for Recording {
        fn render(&mut self, scene: &Scene) -> PlanResult<()> {
            self.0.borrow_mut().push(scene.gates.len());
            Ok(())
        }
    }

    struct Broken;

    impl SceneRenderer for Broken {
        fn render(&mut self, _scene: &Scene) -> PlanResult<()> {
            Err(PlanError::Render("no display".into()))
        }
    }

    fn scene() -> Scene {
        SceneBuilder::new(LayoutConfig::default())
            .with_gates(&[GateRecord::new(0.0, 0.0, 1.0, 0.0)])
            .build()
    }

    #[test]
    fn bridge_forwards_scene_to_renderer() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bridge = RenderBridge::new(Some(Box::new(Recording(seen.clone()))));
        assert!(bridge.is_enabled());
        assert!(bridge.publish(&scene()));
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn bridge_without_renderer_is_a_no_op() {
        let mut bridge = RenderBridge::new(None);
        assert!(!bridge.is_enabled());
        assert!(!bridge.publish(&scene()));
    }

    #[test]
    fn renderer_failure_degrades_gracefully() {
        let mut bridge = RenderBridge::new(Some(Box::new(Broken)));
        assert!(!bridge.publish(&scene()));
    }
}
