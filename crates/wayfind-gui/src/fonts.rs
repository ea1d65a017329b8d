use std::sync::Arc;

/// System fonts tried in order for CJK and Thai labels.
const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msjh.ttc",
];

/// Append every available fallback font to the proportional family.
pub fn install_fallback_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let mut added = 0;
    for path in FALLBACK_FONTS {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        let name = format!("fallback-{added}");
        fonts
            .font_data
            .insert(name.clone(), Arc::new(egui::FontData::from_owned(bytes)));
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .push(name);
        added += 1;
    }
    if added == 0 {
        tracing::warn!("no CJK font found; non-Latin labels may not render");
        return;
    }
    tracing::debug!(count = added, "fallback fonts installed");
    ctx.set_fonts(fonts);
}
