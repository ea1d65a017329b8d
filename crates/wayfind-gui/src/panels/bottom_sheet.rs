use wayfind_core::nav::NavAction;
use wayfind_core::topology::QUICK_NAV_KEYS;

use crate::app::WayfindApp;

pub fn show(ctx: &egui::Context, app: &mut WayfindApp) {
    egui::TopBottomPanel::bottom("bottom_sheet").show(ctx, |ui| {
        // Grab handle
        let handle = ui.vertical_centered(|ui| {
            let arrow = if app.screen.sheet().collapsed { "\u{25B2}" } else { "\u{25BC}" };
            ui.add(egui::Button::new(arrow).frame(false))
        });
        if handle.inner.clicked() {
            app.screen.toggle_sheet();
        }

        if app.screen.sheet().collapsed {
            return;
        }

        ui.label(egui::RichText::new(app.screen.text("sheet_instruction")).strong().size(18.0));
        ui.small(app.screen.text("current_floor"));
        ui.add_space(6.0);

        ui.label(app.screen.text("quick_nav"));
        let current = app.store.state().destination_key.clone();
        let mut picked = None;
        ui.horizontal_wrapped(|ui| {
            for key in QUICK_NAV_KEYS {
                if ui
                    .selectable_label(current == *key, app.screen.text(key))
                    .clicked()
                {
                    picked = Some(*key);
                }
            }
        });
        if let Some(key) = picked {
            app.dispatch(NavAction::SelectDestination(key.to_string()));
        }
        ui.add_space(4.0);
    });
}
