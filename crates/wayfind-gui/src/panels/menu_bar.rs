use wayfind_core::i18n::Language;
use wayfind_core::nav::NavAction;

use crate::app::WayfindApp;

pub fn show(ctx: &egui::Context, app: &mut WayfindApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                ui.menu_button("Language", |ui| {
                    let current = app.store.state().language;
                    for lang in Language::ALL {
                        if ui.radio(current == lang, lang.native_name()).clicked() {
                            ui.close();
                            app.dispatch(NavAction::SetLanguage(lang));
                        }
                    }
                });

                let mut color_blind = app.store.state().color_blind_mode;
                if ui.checkbox(&mut color_blind, "High-contrast AR").changed() {
                    app.dispatch(NavAction::SetColorBlindMode(color_blind));
                }

                ui.separator();

                if ui.checkbox(&mut app.ui_state.show_log, "Event Log").changed() {
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
