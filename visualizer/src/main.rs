use clap::Parser;
use gatecore::gate::GateRecord;
use gatecore::io::{read_gates, read_path};
use gatecore::math::Bounds;
use gatecore::path::plan_path;
use gatecore::prelude::LayoutConfig;
use gatecore::render::{Arrow, PathKind, Scene, SceneBuilder};
use iced::{
    mouse, time,
    widget::{
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, scrollable, text, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Subscription, Task, Theme,
};
use std::{fs, path::PathBuf, time::Duration};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Live view of a gate course and its planned path")]
struct Args {
    /// Gates input file
    #[arg(long, default_value = "gates.csv")]
    gatesin: PathBuf,
    /// Existing path file drawn under the planned path
    #[arg(long)]
    pathin: Option<PathBuf>,
    /// Course layout YAML (origin shift, gate size)
    #[arg(long)]
    layout: Option<PathBuf>,
}

fn main() -> iced::Result {
    let args = Args::parse();
    iced::application(
        move || Visualizer::boot(args.clone()),
        Visualizer::update,
        Visualizer::view,
    )
    .title(application_title)
    .subscription(application_subscription)
    .theme(application_theme)
    .run()
}

fn application_title(_: &Visualizer) -> String {
    "Gate Path Visualizer".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(|_| Message::Tick)
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Visualizer {
    source: CourseSource,
    snapshot: Option<CourseSnapshot>,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    CourseLoaded(Result<CourseSnapshot, String>),
}

#[derive(Debug, Clone)]
struct CourseSource {
    gates: PathBuf,
    path: Option<PathBuf>,
    layout: LayoutConfig,
}

#[derive(Debug, Clone)]
struct CourseSnapshot {
    scene: Scene,
    gate_count: usize,
    waypoint_count: usize,
}

impl Visualizer {
    fn boot(args: Args) -> (Self, Task<Message>) {
        let mut history = Vec::new();
        let layout = match args.layout.as_deref().map(load_layout).transpose() {
            Ok(layout) => layout.unwrap_or_default(),
            Err(err) => {
                history.push(format!("Layout error, using defaults: {err}"));
                LayoutConfig::default()
            }
        };
        let source = CourseSource {
            gates: args.gatesin,
            path: args.pathin,
            layout,
        };
        (
            Visualizer {
                source: source.clone(),
                snapshot: None,
                status: "Loading course...".into(),
                history,
            },
            Task::perform(load_course(source), Message::CourseLoaded),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                Task::perform(load_course(state.source.clone()), Message::CourseLoaded)
            }
            Message::CourseLoaded(Ok(snapshot)) => {
                let changed = state.snapshot.as_ref().map(|previous| {
                    previous.gate_count != snapshot.gate_count
                        || previous.waypoint_count != snapshot.waypoint_count
                });
                state.status = format!(
                    "{} gates / {} planned waypoints",
                    snapshot.gate_count, snapshot.waypoint_count
                );
                if changed.unwrap_or(true) {
                    state.push_history(format!(
                        "Course: {} gates / {} waypoints",
                        snapshot.gate_count, snapshot.waypoint_count
                    ));
                }
                state.snapshot = Some(snapshot);
                Task::none()
            }
            Message::CourseLoaded(Err(err)) => {
                state.status = format!("Load error: {err}");
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let source_path = state
            .source
            .path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "none".into());

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let side_column = column![
            text("Course").size(26),
            text(format!("Gates: {}", state.source.gates.display())).size(14),
            text(format!("Loaded path: {}", source_path)).size(14),
            text(format!(
                "Origin shift: ({:.2}, {:.2}) m",
                state.source.layout.origin_shift_x, state.source.layout.origin_shift_y
            ))
            .size(14),
            text(&state.status).size(14),
            column![
                text("Legend").size(16),
                text("Blue bars: gates, red dot at each gate origin").size(12),
                text("Light blue arrows: planned path").size(12),
                text("Grey arrows: loaded path").size(12),
                text("Orange arrows: heading at each waypoint").size(12),
                text("Green arrow: launch frame x axis").size(12),
            ]
            .spacing(4)
            .padding(6),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(160.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(320.0));

        let course_map = Canvas::new(CourseMap {
            scene: state.snapshot.as_ref().map(|snapshot| snapshot.scene.clone()),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let layout = row![side_column, course_map]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

fn load_layout(path: &std::path::Path) -> Result<LayoutConfig, String> {
    let contents = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    serde_yaml::from_str(&contents).map_err(|e| format!("{}: {}", path.display(), e))
}

async fn load_course(source: CourseSource) -> Result<CourseSnapshot, String> {
    build_snapshot(&source)
}

fn build_snapshot(source: &CourseSource) -> Result<CourseSnapshot, String> {
    let rows = read_gates(&source.gates).map_err(|e| e.to_string())?;
    let gates = GateRecord::parse_all(&rows).map_err(|e| e.to_string())?;
    let waypoints = plan_path(&gates, &source.layout);

    let mut builder = SceneBuilder::new(source.layout).with_gates(&gates);
    if let Some(path) = source.path.as_ref() {
        let loaded = read_path(path).map_err(|e| e.to_string())?;
        builder = builder.with_path(PathKind::Loaded, &loaded);
    }

    Ok(CourseSnapshot {
        scene: builder.with_path(PathKind::Computed, &waypoints).build(),
        gate_count: gates.len(),
        waypoint_count: waypoints.len(),
    })
}

#[derive(Clone)]
struct CourseMap {
    scene: Option<Scene>,
}

struct ScreenMap {
    bounds: Bounds,
    width: f64,
    height: f64,
}

impl ScreenMap {
    fn point(&self, world: (f64, f64)) -> Point {
        let (x, y) = self.bounds.to_screen(world, self.width, self.height);
        Point::new(x as f32, y as f32)
    }

    fn scale(&self) -> f32 {
        let fitted = self.bounds.with_aspect(self.width / self.height.max(1.0));
        (self.width / fitted.width()) as f32
    }
}

impl canvas::Program<Message> for CourseMap {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.04, 0.04, 0.06),
        );

        let Some(scene) = self.scene.as_ref() else {
            return vec![frame.into_geometry()];
        };

        let map = ScreenMap {
            bounds: scene.bounds(),
            width: bounds.width as f64,
            height: bounds.height as f64,
        };

        for gate in &scene.gates {
            let corners = gate.corners();
            let outline = Path::new(|builder| {
                builder.move_to(map.point(corners[0]));
                for corner in &corners[1..] {
                    builder.line_to(map.point(*corner));
                }
                builder.close();
            });
            frame.fill(&outline, Color::from_rgb(0.18, 0.45, 0.85));

            let marker_radius = (gate.marker_radius as f32 * map.scale()).max(2.0);
            let marker = Path::new(|builder| builder.circle(map.point(gate.origin), marker_radius));
            frame.fill(&marker, Color::from_rgb(0.95, 0.1, 0.1));

            frame.fill_text(canvas::Text {
                content: gate.label.clone(),
                position: map.point(gate.label_position),
                color: Color::from_rgb(0.9, 0.9, 0.9),
                size: iced::Pixels(14.0),
                ..canvas::Text::default()
            });
        }

        for layer in &scene.paths {
            let color = match layer.kind {
                PathKind::Computed => Color::from_rgb(0.35, 0.75, 0.95),
                PathKind::Loaded => Color::from_rgb(0.55, 0.55, 0.6),
            };
            for arrow in &layer.segments {
                stroke_arrow(&mut frame, &map, arrow, color, 2.0);
            }
            for arrow in &layer.headings {
                stroke_arrow(&mut frame, &map, arrow, Color::from_rgb(1.0, 0.4, 0.0), 3.0);
            }
        }

        stroke_arrow(
            &mut frame,
            &map,
            &scene.axis.arrow,
            Color::from_rgb(0.0, 1.0, 0.0),
            4.0,
        );
        frame.fill_text(canvas::Text {
            content: scene.axis.label.clone(),
            position: map.point(scene.axis.label_position),
            color: Color::from_rgb(0.0, 1.0, 0.0),
            size: iced::Pixels(14.0),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}

fn stroke_arrow(frame: &mut Frame, map: &ScreenMap, arrow: &Arrow, color: Color, width: f32) {
    let head = arrow.head(0.3);
    let path = Path::new(|builder| {
        builder.move_to(map.point(arrow.start));
        builder.line_to(map.point(arrow.end));
        if let Some((left, right)) = head {
            builder.move_to(map.point(left));
            builder.line_to(map.point(arrow.end));
            builder.line_to(map.point(right));
        }
    });
    frame.stroke(&path, Stroke::default().with_width(width).with_color(color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn snapshot_plans_course_from_disk() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"x,y,z,rotation,offset_y,waypoint_before,waypoint_after\n0,0,1,0,0,1,1\n4,-3,1,-90,0,1,0\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let source = CourseSource {
            gates: path.to_path_buf(),
            path: None,
            layout: LayoutConfig::default(),
        };

        let snapshot = build_snapshot(&source).unwrap();
        assert_eq!(snapshot.gate_count, 2);
        assert_eq!(snapshot.waypoint_count, 5);
        assert_eq!(snapshot.scene.paths.len(), 1);
    }

    #[test]
    fn snapshot_reports_missing_course() {
        let source = CourseSource {
            gates: PathBuf::from("no/such/gates.csv"),
            path: None,
            layout: LayoutConfig::default(),
        };
        let err = build_snapshot(&source).unwrap_err();
        assert!(err.contains("not found"));
    }
}
