use wayfind_core::ar::overlay::{PRIMARY_BLUE, WHITE};
use wayfind_core::consts::ROUTE_DASH;
use wayfind_core::geometry::{Affine, Point};
use wayfind_core::screen::MapScene;
use wayfind_core::topology::Topology;

use crate::app::WayfindApp;
use crate::convert::{color, to_local, to_screen};

const FLOOR: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
const CORRIDOR: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
const ROOM_FILL: egui::Color32 = egui::Color32::WHITE;
const ROOM_BORDER: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);
const ROOM_TEXT: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
const EMERGENCY_FILL: egui::Color32 = egui::Color32::from_rgb(254, 242, 242);
const EMERGENCY_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
const TARGET: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

pub fn show(ctx: &egui::Context, app: &mut WayfindApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(FLOOR))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            handle_drag(ui, &response, app, rect);

            let size = Point::new(rect.width(), rect.height());
            let transform = app
                .screen
                .viewport()
                .screen_transform(size, app.screen.clock());
            let painter = ui.painter_at(rect);
            let topology = *app.screen.topology();
            let scene = app.screen.scene();

            draw_corridors(&painter, &transform, rect, &topology);
            draw_rooms(&painter, &transform, rect, &topology, &scene, app);
            draw_route(&painter, &transform, rect, &scene);
            draw_markers(&painter, &transform, rect, &scene);

            show_zoom_controls(ctx, app, rect);
        });
}

fn handle_drag(ui: &egui::Ui, response: &egui::Response, app: &mut WayfindApp, rect: egui::Rect) {
    if let Some(pos) = response.interact_pointer_pos() {
        if response.drag_started() {
            app.screen.pointer_down(to_local(rect, pos));
        } else if response.dragged() {
            app.screen.pointer_move(to_local(rect, pos));
        }
    }
    if response.drag_stopped() {
        app.screen.pointer_up();
    }

    // Leaving the map ends a drag.
    let outside = ui
        .input(|i| i.pointer.hover_pos())
        .map_or(true, |p| !rect.contains(p));
    if outside && app.screen.viewport().is_dragging() {
        app.screen.pointer_up();
    }
}

fn screen_rect(transform: &Affine, rect: egui::Rect, r: &wayfind_core::geometry::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        to_screen(transform, rect, r.min()),
        to_screen(transform, rect, r.max()),
    )
}

fn draw_corridors(painter: &egui::Painter, transform: &Affine, rect: egui::Rect, topology: &Topology) {
    let s = transform.scale_factor();
    for corridor in topology.corridors() {
        let a = to_screen(transform, rect, corridor.from);
        let b = to_screen(transform, rect, corridor.to);
        painter.line_segment([a, b], egui::Stroke::new(corridor.width * s, CORRIDOR));
    }
}

fn draw_rooms(
    painter: &egui::Painter,
    transform: &Affine,
    rect: egui::Rect,
    topology: &Topology,
    scene: &MapScene<'_>,
    app: &WayfindApp,
) {
    let s = transform.scale_factor();
    for room in topology.rooms() {
        let r = screen_rect(transform, rect, &room.rect);
        let highlighted = scene.highlighted_room.is_some_and(|h| std::ptr::eq(h, room));
        let (fill, text) = if room.emphasised {
            (EMERGENCY_FILL, EMERGENCY_TEXT)
        } else {
            (ROOM_FILL, ROOM_TEXT)
        };
        let border = if highlighted {
            egui::Stroke::new(2.0 * s, color(PRIMARY_BLUE))
        } else {
            egui::Stroke::new(1.0 * s, ROOM_BORDER)
        };
        let radius = room.corner_radius * s;
        painter.rect_filled(r, radius, fill);
        painter.rect_stroke(r, radius, border, egui::StrokeKind::Inside);
        painter.text(
            to_screen(transform, rect, room.label_anchor),
            egui::Align2::CENTER_CENTER,
            app.screen.text(room.label_key),
            egui::FontId::proportional(11.0 * s),
            if highlighted { color(PRIMARY_BLUE) } else { text },
        );
    }
}

fn draw_route(painter: &egui::Painter, transform: &Affine, rect: egui::Rect, scene: &MapScene<'_>) {
    let s = transform.scale_factor();
    let points: Vec<egui::Pos2> = scene
        .route
        .points()
        .into_iter()
        .map(|p| to_screen(transform, rect, p))
        .collect();

    if scene.route.segments.iter().all(|seg| seg.is_degenerate()) {
        if let Some(p) = points.first() {
            painter.circle_filled(*p, 3.0 * s, color(PRIMARY_BLUE));
        }
        return;
    }

    let period: f32 = ROUTE_DASH.iter().sum();
    let offset = scene.dash_offset.rem_euclid(period) * s;
    painter.extend(egui::Shape::dashed_line_with_offset(
        &points,
        egui::Stroke::new(4.0 * s, color(PRIMARY_BLUE)),
        &[ROUTE_DASH[0] * s],
        &[ROUTE_DASH[1] * s],
        offset,
    ));
}

fn draw_markers(painter: &egui::Painter, transform: &Affine, rect: egui::Rect, scene: &MapScene<'_>) {
    let s = transform.scale_factor();

    let start = to_screen(transform, rect, scene.start_marker);
    painter.circle_filled(start, 10.0 * s, color(PRIMARY_BLUE.with_alpha(60)));
    painter.circle(
        start,
        6.0 * s,
        color(PRIMARY_BLUE),
        egui::Stroke::new(2.0 * s, color(WHITE)),
    );

    let target = to_screen(transform, rect, scene.target);
    painter.circle_filled(target, 8.0 * s, TARGET);
    painter.circle_filled(target, 3.0 * s, egui::Color32::WHITE);
    painter.text(
        target - egui::vec2(0.0, 12.0 * s),
        egui::Align2::CENTER_BOTTOM,
        scene.destination_label,
        egui::FontId::proportional(12.0 * s),
        TARGET,
    );
}

fn show_zoom_controls(ctx: &egui::Context, app: &mut WayfindApp, rect: egui::Rect) {
    egui::Area::new(egui::Id::new("zoom_controls"))
        .fixed_pos(rect.right_top() + egui::vec2(-52.0, 12.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    if ui.button(egui::RichText::new("+").size(18.0)).clicked() {
                        app.screen.zoom_in();
                    }
                    ui.small(format!("{:.0}%", app.screen.viewport().zoom() * 100.0));
                    if ui.button(egui::RichText::new("\u{2212}").size(18.0)).clicked() {
                        app.screen.zoom_out();
                    }
                });
            });
        });
}
