use wayfind_core::ar::overlay::{ArrowCue, FloorGridCue, PathGlowCue, TurnBadgeCue, TurnCardCue};
use wayfind_core::ar::{ArSessionState, OverlayFrame};
use wayfind_core::screen::CameraErrorView;

use crate::app::WayfindApp;
use crate::convert::{color, faded};

const FEED_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(28, 30, 34);
/// Fraction of the view height where the floor starts.
const HORIZON: f32 = 0.45;
/// Rest position of the arrows, measured up from the bottom edge.
const ARROW_BASE: f32 = 160.0;
const ARROW_SIZE: f32 = 36.0;

pub fn show(ctx: &egui::Context, app: &mut WayfindApp) {
    let Some(view) = app.screen.ar_view() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(FEED_BACKGROUND))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            // Swallow pointer input so nothing underneath reacts.
            let _ = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            let painter = ui.painter_at(rect);

            if let Some(label) = app.screen.ar().stream_label() {
                painter.text(
                    rect.left_top() + egui::vec2(8.0, 8.0),
                    egui::Align2::LEFT_TOP,
                    label,
                    egui::FontId::monospace(11.0),
                    egui::Color32::from_white_alpha(120),
                );
            }

            match (&view.overlay, view.state) {
                (Some(frame), _) => draw_overlay(&painter, rect, frame, app),
                (None, ArSessionState::Acquiring { .. }) => {
                    ui.put(
                        egui::Rect::from_center_size(rect.center(), egui::vec2(48.0, 48.0)),
                        egui::Spinner::new().size(32.0),
                    );
                }
                _ => {}
            }
        });

    if let Some(error) = view.error {
        show_error(ctx, app, &error);
    }
}

fn draw_overlay(painter: &egui::Painter, rect: egui::Rect, frame: &OverlayFrame, app: &WayfindApp) {
    draw_floor_grid(painter, rect, &frame.floor_grid);
    draw_path_glow(painter, rect, &frame.path_glow);
    for arrow in &frame.arrows {
        draw_arrow(painter, rect, arrow);
    }
    draw_turn_card(painter, rect, &frame.turn_card, &frame.turn_badge, app);
}

fn draw_floor_grid(painter: &egui::Painter, rect: egui::Rect, grid: &FloorGridCue) {
    let top = rect.top() + rect.height() * HORIZON;
    let stroke = egui::Stroke::new(1.0, color(grid.color));

    let mut y = top + grid.offset;
    while y < rect.bottom() {
        painter.hline(rect.x_range(), y, stroke);
        y += grid.spacing;
    }
    let mut x = rect.left() + grid.spacing / 2.0;
    while x < rect.right() {
        painter.vline(x, top..=rect.bottom(), stroke);
        x += grid.spacing;
    }
}

fn draw_path_glow(painter: &egui::Painter, rect: egui::Rect, glow: &PathGlowCue) {
    let width = 120.0 * glow.scale_x;
    let band = egui::Rect::from_min_max(
        egui::pos2(rect.center().x - width / 2.0, rect.top() + rect.height() * HORIZON),
        egui::pos2(rect.center().x + width / 2.0, rect.bottom()),
    );
    painter.rect_filled(band, 24.0, faded(glow.color, glow.opacity));
}

fn chevron(center: egui::Pos2, size: f32) -> Vec<egui::Pos2> {
    let h = size / 2.0;
    vec![
        center + egui::vec2(-h, h * 0.5),
        center + egui::vec2(0.0, -h * 0.5),
        center + egui::vec2(h, h * 0.5),
    ]
}

fn draw_arrow(painter: &egui::Painter, rect: egui::Rect, arrow: &ArrowCue) {
    if arrow.opacity <= 0.0 {
        return;
    }
    let center = egui::pos2(rect.center().x, rect.bottom() - ARROW_BASE + arrow.offset_y);
    let size = ARROW_SIZE * arrow.scale;
    let width = size * 0.25;

    painter.add(egui::Shape::line(
        chevron(center, size),
        egui::Stroke::new(width + arrow.glow.radius, faded(arrow.glow.color, arrow.opacity * 0.5)),
    ));
    painter.add(egui::Shape::line(
        chevron(center, size),
        egui::Stroke::new(width, faded(arrow.color, arrow.opacity)),
    ));
}

fn draw_turn_card(
    painter: &egui::Painter,
    rect: egui::Rect,
    card: &TurnCardCue,
    badge: &TurnBadgeCue,
    app: &WayfindApp,
) {
    let card_rect = egui::Rect::from_min_size(
        rect.left_top() + egui::vec2(16.0, 32.0),
        egui::vec2(rect.width() - 32.0, 64.0),
    );
    painter.rect_filled(card_rect, 12.0, color(card.background));
    painter.rect_stroke(
        card_rect,
        12.0,
        egui::Stroke::new(card.border_width, color(card.border)),
        egui::StrokeKind::Inside,
    );

    let badge_center = card_rect.left_center() + egui::vec2(32.0, 0.0);
    painter.circle_filled(badge_center, 20.0, color(badge.fill));
    painter.text(
        badge_center,
        egui::Align2::CENTER_CENTER,
        "\u{21B1}",
        egui::FontId::proportional(22.0),
        color(badge.icon),
    );

    let text_left = badge_center.x + 32.0;
    painter.text(
        egui::pos2(text_left, card_rect.center().y - 2.0),
        egui::Align2::LEFT_BOTTOM,
        app.screen.text(card.title_key),
        egui::FontId::proportional(18.0),
        color(card.text),
    );
    painter.text(
        egui::pos2(text_left, card_rect.center().y + 2.0),
        egui::Align2::LEFT_TOP,
        app.screen.text(card.subtitle_key),
        egui::FontId::proportional(13.0),
        color(card.subtext),
    );
}

fn show_error(ctx: &egui::Context, app: &mut WayfindApp, error: &CameraErrorView) {
    egui::Window::new(error.title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(error.message.as_str());
                ui.add_space(8.0);
                if ui.button(error.action.as_str()).clicked() {
                    app.screen.dismiss_camera_error();
                }
            });
        });
}
