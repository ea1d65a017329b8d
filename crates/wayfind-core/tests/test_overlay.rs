use std::time::Duration;

use approx::assert_relative_eq;

use wayfind_core::ar::overlay::{
    arrow_cue, overlay_frame, ArPalette, OverlayElement, PaletteKind, PRIMARY_BLUE, SIGNAL_YELLOW,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

// ---------------------------------------------------------------------------
// Palette swap
// ---------------------------------------------------------------------------

#[test]
fn test_default_frame_is_uniformly_default() {
    let frame = overlay_frame(ms(750), false);
    assert_eq!(frame.palette, PaletteKind::Default);
    assert!(frame.is_uniform());
    assert_eq!(frame.arrows[0].color, PRIMARY_BLUE);
}

#[test]
fn test_color_blind_frame_is_uniformly_high_contrast() {
    let frame = overlay_frame(ms(750), true);
    assert_eq!(frame.palette, PaletteKind::HighContrast);
    for (element, palette) in frame.elements() {
        assert_eq!(palette, PaletteKind::HighContrast, "{element:?}");
    }
    for arrow in &frame.arrows {
        assert_eq!(arrow.color, SIGNAL_YELLOW);
    }
    assert_eq!(frame.turn_card.border, SIGNAL_YELLOW);
    assert_eq!(frame.turn_card.text, SIGNAL_YELLOW);
    assert_eq!(frame.turn_badge.fill, SIGNAL_YELLOW);
}

#[test]
fn test_toggling_swaps_every_element_and_back() {
    let t = ms(1_234);
    let before = overlay_frame(t, false);
    let during = overlay_frame(t, true);
    let after = overlay_frame(t, false);

    assert_eq!(before, after);
    assert_eq!(before.elements().len(), during.elements().len());
    for (a, b) in before.arrows.iter().zip(&during.arrows) {
        assert_ne!(a.color, b.color);
        assert_ne!(a.glow, b.glow);
        // Motion is independent of the palette.
        assert_eq!(a.offset_y, b.offset_y);
        assert_eq!(a.opacity, b.opacity);
    }
    assert_ne!(before.path_glow.color, during.path_glow.color);
    assert_ne!(before.floor_grid.color, during.floor_grid.color);
    assert_ne!(before.turn_card.border, during.turn_card.border);
    assert_ne!(before.turn_card.text, during.turn_card.text);
    assert_ne!(before.turn_badge.fill, during.turn_badge.fill);
}

#[test]
fn test_high_contrast_palette_uses_single_signal_colour() {
    let p = ArPalette::HIGH_CONTRAST;
    for c in [p.arrow, p.path_glow, p.grid_line, p.card_border, p.card_text, p.badge] {
        assert_eq!((c.r, c.g, c.b), (0xFF, 0xEA, 0x00), "{}", c.to_hex());
    }
}

#[test]
fn test_frame_lists_every_element() {
    let frame = overlay_frame(ms(0), false);
    let kinds: Vec<_> = frame.elements().into_iter().map(|(e, _)| e).collect();
    assert_eq!(kinds.len(), 9);
    assert!(kinds.contains(&OverlayElement::Arrow(4)));
    assert!(kinds.contains(&OverlayElement::PathGlow));
    assert!(kinds.contains(&OverlayElement::FloorGrid));
    assert!(kinds.contains(&OverlayElement::TurnCard));
    assert!(kinds.contains(&OverlayElement::TurnBadge));
}

// ---------------------------------------------------------------------------
// Motion
// ---------------------------------------------------------------------------

#[test]
fn test_arrow_starts_invisible_at_bottom() {
    let a = arrow_cue(0, ms(0), &ArPalette::DEFAULT);
    assert_relative_eq!(a.offset_y, 100.0);
    assert_relative_eq!(a.scale, 0.8);
    assert_relative_eq!(a.opacity, 0.0);
}

#[test]
fn test_arrow_fully_visible_mid_flow() {
    let a = arrow_cue(0, ms(1_000), &ArPalette::DEFAULT);
    assert_relative_eq!(a.opacity, 1.0);
    assert!(a.offset_y < 100.0 && a.offset_y > -150.0);
    assert!(a.scale > 0.8 && a.scale < 1.2);
}

#[test]
fn test_arrow_loops_every_two_seconds() {
    let p = ArPalette::DEFAULT;
    assert_eq!(arrow_cue(0, ms(700), &p), arrow_cue(0, ms(2_700), &p));
    assert_eq!(arrow_cue(0, ms(700), &p), arrow_cue(0, ms(6_700), &p));
}

#[test]
fn test_arrows_are_staggered() {
    let p = ArPalette::DEFAULT;
    // Arrow 2 starts 800 ms after arrow 0.
    assert!(arrow_cue(2, ms(500), &p).opacity == 0.0);
    let a0 = arrow_cue(0, ms(1_000), &p);
    let a2 = arrow_cue(2, ms(1_800), &p);
    assert_relative_eq!(a0.offset_y, a2.offset_y, epsilon = 1e-4);
}

#[test]
fn test_path_pulse_peaks_halfway() {
    let lo = overlay_frame(ms(0), false).path_glow;
    let hi = overlay_frame(ms(1_500), false).path_glow;
    assert_relative_eq!(lo.opacity, 0.3);
    assert_relative_eq!(lo.scale_x, 0.9);
    assert_relative_eq!(hi.opacity, 0.7, epsilon = 1e-4);
    assert_relative_eq!(hi.scale_x, 1.05, epsilon = 1e-4);
}

#[test]
fn test_floor_grid_scrolls_in_reverse() {
    let g0 = overlay_frame(ms(0), false).floor_grid;
    let g1 = overlay_frame(ms(375), false).floor_grid;
    assert_relative_eq!(g0.offset, 0.0);
    assert_relative_eq!(g1.offset, 30.0, epsilon = 1e-3);
    assert!(g1.offset < g1.spacing);
}
