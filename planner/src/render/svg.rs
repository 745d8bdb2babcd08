use gatecore::render::{Arrow, PathKind, Scene, SceneRenderer};
use gatecore::prelude::{PlanError, PlanResult};
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::{Path, PathBuf};

const GATE_COLOR: RGBColor = RGBColor(31, 119, 180);
const MARKER_COLOR: RGBColor = RGBColor(255, 0, 0);
const COMPUTED_COLOR: RGBColor = RGBColor(40, 90, 200);
const LOADED_COLOR: RGBColor = RGBColor(120, 120, 120);
const HEADING_COLOR: RGBColor = RGBColor(255, 102, 0);
const AXIS_COLOR: RGBColor = RGBColor(0, 255, 0);
const ARROW_HEAD: f64 = 0.3;

/// Writes the course scene to an SVG file.
pub struct SvgRenderer {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgRenderer {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            size: (1280, 960),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width.max(1), height.max(1));
        self
    }
}

impl SceneRenderer for SvgRenderer {
    fn render(&mut self, scene: &Scene) -> PlanResult<()> {
        draw_scene(&self.path, self.size, scene)
            .map_err(|err| PlanError::Render(format!("{:#}", err)))
    }
}

fn draw_scene(path: &Path, size: (u32, u32), scene: &Scene) -> anyhow::Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let bounds = scene
        .bounds()
        .with_aspect(size.0 as f64 / size.1 as f64);
    let pixels_per_meter = size.0 as f64 / bounds.width();

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(bounds.min_x..bounds.max_x, bounds.min_y..bounds.max_y)?;

    chart.draw_series(
        scene
            .gates
            .iter()
            .map(|gate| Polygon::new(gate.corners().to_vec(), GATE_COLOR.filled())),
    )?;
    chart.draw_series(scene.gates.iter().map(|gate| {
        let radius = (gate.marker_radius * pixels_per_meter).max(2.0) as u32;
        Circle::new(gate.origin, radius, MARKER_COLOR.filled())
    }))?;
    chart.draw_series(scene.gates.iter().map(|gate| {
        Text::new(
            gate.label.clone(),
            gate.label_position,
            FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Normal).color(&BLACK),
        )
    }))?;

    for layer in &scene.paths {
        let color = match layer.kind {
            PathKind::Computed => COMPUTED_COLOR,
            PathKind::Loaded => LOADED_COLOR,
        };
        chart.draw_series(
            layer
                .segments
                .iter()
                .flat_map(|arrow| arrow_elements(arrow, color.stroke_width(2))),
        )?;
        chart.draw_series(
            layer
                .headings
                .iter()
                .flat_map(|arrow| arrow_elements(arrow, HEADING_COLOR.stroke_width(3))),
        )?;
    }

    chart.draw_series(arrow_elements(&scene.axis.arrow, AXIS_COLOR.stroke_width(4)))?;
    chart.draw_series(std::iter::once(Text::new(
        scene.axis.label.clone(),
        scene.axis.label_position,
        FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Normal).color(&BLACK),
    )))?;

    root.present()?;
    Ok(())
}

fn arrow_elements(arrow: &Arrow, style: ShapeStyle) -> Vec<PathElement<(f64, f64)>> {
    let mut elements = vec![PathElement::new(vec![arrow.start, arrow.end], style)];
    if let Some((left, right)) = arrow.head(ARROW_HEAD) {
        elements.push(PathElement::new(vec![left, arrow.end, right], style));
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatecore::gate::GateRecord;
    use gatecore::path::plan_path;
    use gatecore::prelude::LayoutConfig;
    use gatecore::render::SceneBuilder;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn svg_renderer_writes_document() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("course.svg");
        let config = LayoutConfig::default();
        let gates = vec![
            GateRecord::new(0.0, 0.0, 1.0, 0.0).with_standoff(1.0, 1.0),
            GateRecord::new(5.0, -3.0, 1.0, -90.0).with_standoff(1.0, 1.0),
        ];
        let scene = SceneBuilder::new(config)
            .with_gates(&gates)
            .with_path(PathKind::Computed, &plan_path(&gates, &config))
            .build();

        let mut renderer = SvgRenderer::new(&target).with_size(640, 480);
        renderer.render(&scene).unwrap();

        let document = fs::read_to_string(&target).unwrap();
        assert!(document.contains("<svg"));
        assert!(document.contains("<polygon"));
    }

    #[test]
    fn unwritable_target_reports_render_error() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing").join("course.svg");
        let scene = SceneBuilder::new(LayoutConfig::default()).build();
        let err = SvgRenderer::new(target).render(&scene).unwrap_err();
        assert!(matches!(err, PlanError::Render(_)));
    }
}
