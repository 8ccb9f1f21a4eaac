//! Interactive dollar game viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Game`] controller and
//! implements [`eframe::App`] to draw the graph and forward user input.

use dollar_core::{
    config::{Config, MIN_DIST, parse_count},
    game::{Game, GenerationReport},
    money::Mood,
    placement::CANVAS_SIZE,
    types::NodeId,
};
use eframe::App;
use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Node radius in percentage units. Below half the minimum spacing, so
/// discs of neighbouring nodes never overlap.
const NODE_RADIUS: f32 = MIN_DIST * 0.4;

/// Main application state for the viewer.
///
/// ### Fields
/// - `game` - Controller owning the current graph and configuration.
/// - `rng` - Random number generator used for every generation.
/// - `node_count_text` / `max_neighbors_text` - Contents of the two input
///   fields; rewritten with the clamped value once an edit is committed.
/// - `hovered` - Node under the pointer, whose edges are highlighted.
/// - `last_report` - Summary of the most recent generation.
pub struct Viewer {
    game: Game,
    rng: StdRng,

    node_count_text: String,
    max_neighbors_text: String,

    hovered: Option<NodeId>,
    last_report: GenerationReport,
}

impl Viewer {
    /// Creates a viewer and generates the first graph.
    ///
    /// With a `seed` the sequence of generated graphs is reproducible;
    /// otherwise the generator is seeded from the OS.
    pub fn new(cfg: Config, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let mut viewer = Self {
            node_count_text: cfg.node_count.to_string(),
            max_neighbors_text: cfg.max_neighbors.to_string(),
            game: Game::new(cfg),
            rng,
            hovered: None,
            last_report: GenerationReport::default(),
        };
        viewer.generate();
        viewer
    }

    fn generate(&mut self) {
        self.last_report = self.game.generate(&mut self.rng);
        self.hovered = None;
    }

    /// Commits the node count field and shows the value actually used.
    fn commit_node_count(&mut self) {
        let value = self.game.on_node_count_changed(parse_count(&self.node_count_text));
        self.node_count_text = value.to_string();
    }

    fn commit_max_neighbors(&mut self) {
        let value = self
            .game
            .on_max_neighbors_changed(parse_count(&self.max_neighbors_text));
        self.max_neighbors_text = value.to_string();
    }

    /// Fires the node under `pct`, if any, and returns its id.
    fn click_at(&mut self, pct: Vec2) -> Option<NodeId> {
        let id = self.game.graph().node_at(pct, NODE_RADIUS)?;
        if let Err(err) = self.game.on_node_activated(id) {
            tracing::warn!(%err, "ignoring click");
            return None;
        }
        Some(id)
    }

    /// Largest square centered in `rect`; the canvas is drawn into it.
    fn canvas_rect(rect: egui::Rect) -> egui::Rect {
        let side = rect.width().min(rect.height());
        egui::Rect::from_center_size(rect.center(), egui::vec2(side, side))
    }

    /// Converts a percentage-space position to screen-space.
    ///
    /// `(0, 0)` maps to the top-left corner of [`Viewer::canvas_rect`] and
    /// `(100, 100)` to its bottom-right corner.
    fn percent_to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let canvas = Self::canvas_rect(rect);
        let scale = canvas.width() / CANVAS_SIZE;
        egui::pos2(canvas.min.x + p.x * scale, canvas.min.y + p.y * scale)
    }

    /// Inverse of [`Viewer::percent_to_screen`].
    fn screen_to_percent(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let canvas = Self::canvas_rect(rect);
        let scale = canvas.width() / CANVAS_SIZE;
        Vec2::new((p.x - canvas.min.x) / scale, (p.y - canvas.min.y) / scale)
    }

    /// Builds the top panel (inputs and the generate button).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("People:");
                let r = ui.add(
                    egui::TextEdit::singleline(&mut self.node_count_text).desired_width(40.0),
                );
                if r.lost_focus() {
                    self.commit_node_count();
                }

                ui.label("Max neighbors:");
                let r = ui.add(
                    egui::TextEdit::singleline(&mut self.max_neighbors_text).desired_width(40.0),
                );
                if r.lost_focus() {
                    self.commit_max_neighbors();
                }

                if ui.button("Generate").clicked() {
                    self.generate();
                }
            });
        });
    }

    /// Builds the bottom status bar.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let graph = self.game.graph();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("in debt = {}", graph.sad_count()));
                ui.label(format!("total = ${}", graph.total_money()));
                ui.separator();
                ui.label(format!("edges = {}", graph.edges.len()));
                ui.label(format!(
                    "people = {} / {}",
                    self.last_report.placed, self.last_report.requested
                ));
            });
        });
    }

    /// Draws the graph and handles hover and clicks on nodes.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            let hover_pct = response.hover_pos().map(|p| Self::screen_to_percent(p, rect));
            self.hovered = hover_pct.and_then(|p| self.game.graph().node_at(p, NODE_RADIUS));

            if response.clicked()
                && let Some(pct) = hover_pct
            {
                self.click_at(pct);
            }

            let graph = self.game.graph();
            let highlighted = match self.hovered {
                Some(id) => graph.incident_edges(id),
                None => &[],
            };

            // Edges first so nodes are drawn on top.
            for (i, (a, b)) in graph.edge_segments().enumerate() {
                let stroke = if highlighted.contains(&i) {
                    egui::Stroke::new(3.0, egui::Color32::YELLOW)
                } else {
                    egui::Stroke::new(1.5, egui::Color32::GRAY)
                };
                painter.line_segment(
                    [Self::percent_to_screen(a, rect), Self::percent_to_screen(b, rect)],
                    stroke,
                );
            }

            let r = NODE_RADIUS * Self::canvas_rect(rect).width() / CANVAS_SIZE;
            for node in &graph.nodes {
                let p = Self::percent_to_screen(node.pos, rect);
                let fill = match node.mood() {
                    Mood::Happy => egui::Color32::from_rgb(70, 160, 90),
                    Mood::Sad => egui::Color32::from_rgb(190, 70, 70),
                };
                let stroke = if self.hovered == Some(node.id) {
                    egui::Stroke::new(2.0, egui::Color32::WHITE)
                } else {
                    egui::Stroke::NONE
                };
                painter.circle(p, r, fill, stroke);
                painter.text(
                    p,
                    egui::Align2::CENTER_CENTER,
                    format!("${}", node.money),
                    egui::FontId::proportional((r * 0.6).max(10.0)),
                    egui::Color32::WHITE,
                );
            }
        });
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    fn seeded() -> Viewer {
        Viewer::new(Config::default(), Some(17))
    }

    #[test]
    fn percent_to_screen_and_back_is_roundtrip() {
        let rect = test_rect();
        let eps = 1e-4;

        for p in [
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(12.5, 87.25),
        ] {
            let screen = Viewer::percent_to_screen(p, rect);
            let back = Viewer::screen_to_percent(screen, rect);
            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn canvas_is_centered_square() {
        let rect = test_rect();
        assert_eq!(Viewer::percent_to_screen(Vec2::ZERO, rect), egui::pos2(100.0, 0.0));
        assert_eq!(
            Viewer::percent_to_screen(Vec2::new(100.0, 100.0), rect),
            egui::pos2(700.0, 600.0)
        );
    }

    #[test]
    fn new_generates_first_graph() {
        let viewer = seeded();
        let graph = viewer.game.graph();
        assert!(!graph.nodes.is_empty());
        assert_eq!(viewer.last_report.placed, graph.nodes.len());
        assert!(graph.is_connected());
    }

    #[test]
    fn committed_inputs_are_clamped_and_written_back() {
        let mut viewer = seeded();

        viewer.node_count_text = "500".into();
        viewer.commit_node_count();
        assert_eq!(viewer.node_count_text, "50");
        assert_eq!(viewer.game.cfg.node_count, 50);

        viewer.node_count_text = "lots".into();
        viewer.commit_node_count();
        assert_eq!(viewer.node_count_text, "3");

        viewer.max_neighbors_text = "-1".into();
        viewer.commit_max_neighbors();
        assert_eq!(viewer.max_neighbors_text, "2");
        assert_eq!(viewer.game.cfg.max_neighbors, 2);
    }

    #[test]
    fn click_on_node_fires_it() {
        let mut viewer = seeded();
        let node = viewer.game.graph().nodes[0].clone();
        let total = viewer.game.graph().total_money();

        let fired = viewer.click_at(node.pos + Vec2::new(1.0, 0.0));
        assert_eq!(fired, Some(node.id));
        assert_eq!(
            viewer.game.graph().nodes[0].money,
            node.money - node.neighbor_count() as i64
        );
        assert_eq!(viewer.game.graph().total_money(), total);
    }

    #[test]
    fn node_discs_do_not_overlap() {
        assert!(2.0 * NODE_RADIUS < MIN_DIST);
        let viewer = seeded();
        let graph = viewer.game.graph();
        for node in &graph.nodes {
            assert_eq!(graph.node_at(node.pos, NODE_RADIUS), Some(node.id));
        }
    }

    #[test]
    fn click_on_empty_space_does_nothing() {
        let mut viewer = Viewer::new(Config::default(), Some(4));
        let before: Vec<i64> = viewer.game.graph().nodes.iter().map(|n| n.money).collect();
        // Outside the placement area, so no node can be within reach.
        assert_eq!(viewer.click_at(Vec2::new(1.0, 1.0)), None);
        let after: Vec<i64> = viewer.game.graph().nodes.iter().map(|n| n.money).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn generate_replaces_graph_and_clears_hover() {
        let mut viewer = seeded();
        viewer.hovered = Some(0);
        viewer.game.on_node_count_changed(Some(20));
        viewer.generate();
        assert!(viewer.hovered.is_none());
        assert_eq!(viewer.last_report.requested, 20);
        assert_eq!(viewer.game.graph().nodes[0].id, 0);
    }
}
