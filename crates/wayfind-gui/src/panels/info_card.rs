use crate::app::WayfindApp;

/// Destination card above the map: where the route goes and how far it is.
pub fn show(ctx: &egui::Context, app: &mut WayfindApp) {
    egui::TopBottomPanel::top("info_card").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.small(app.screen.text("go_to"));
                ui.heading(app.screen.destination_label());
                ui.small(app.screen.text("est_dist"));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(app.screen.mode_toggle_label()).clicked() {
                    app.toggle_ar();
                }
            });
        });
        ui.add_space(4.0);

        if app.ui_state.show_log {
            ui.separator();
            egui::ScrollArea::vertical()
                .max_height(80.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for msg in &app.ui_state.log_messages {
                        ui.small(msg);
                    }
                });
        }
    });
}
