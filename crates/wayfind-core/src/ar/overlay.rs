//! Directional cues drawn over the camera feed.
//!
//! All cues are static guidance (no scene analysis). Their motion is sampled
//! from elapsed time and their colours come from a single [`ArPalette`], so
//! switching the accessibility palette restyles every element at once.

use std::time::Duration;

use crate::animation::{Cycle, Easing, Keyframes};
use crate::consts::{
    AR_ARROW_COUNT, AR_ARROW_PERIOD_MS, AR_ARROW_STAGGER_MS, AR_FLOOR_GRID_PERIOD_MS,
    AR_FLOOR_GRID_SPACING, AR_PATH_PULSE_PERIOD_MS,
};

/// 8-bit sRGB colour with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Same colour with alpha multiplied by `opacity` in `[0, 1]`.
    pub fn faded(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const PRIMARY_BLUE: Rgba = Rgba::rgb(0x13, 0x7f, 0xec);
pub const ROUTE_BLUE: Rgba = Rgba::rgb(59, 130, 246);
pub const SIGNAL_YELLOW: Rgba = Rgba::rgb(0xFF, 0xEA, 0x00);
pub const BADGE_YELLOW: Rgba = Rgba::rgb(250, 204, 21);
pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Default,
    HighContrast,
}

impl PaletteKind {
    pub fn for_color_blind_mode(on: bool) -> Self {
        if on {
            Self::HighContrast
        } else {
            Self::Default
        }
    }
}

/// Soft shadow drawn behind a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub radius: f32,
}

/// Every colour the AR overlay uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArPalette {
    pub kind: PaletteKind,
    pub arrow: Rgba,
    pub arrow_glow: Glow,
    pub path_glow: Rgba,
    pub grid_line: Rgba,
    pub card_background: Rgba,
    pub card_border: Rgba,
    pub card_border_width: f32,
    pub card_text: Rgba,
    pub card_subtext: Rgba,
    pub badge: Rgba,
    pub badge_icon: Rgba,
}

impl ArPalette {
    pub const DEFAULT: ArPalette = ArPalette {
        kind: PaletteKind::Default,
        arrow: PRIMARY_BLUE,
        arrow_glow: Glow {
            color: PRIMARY_BLUE.with_alpha(204),
            radius: 15.0,
        },
        path_glow: ROUTE_BLUE.with_alpha(77),
        grid_line: ROUTE_BLUE.with_alpha(102),
        card_background: BLACK.with_alpha(179),
        card_border: WHITE.with_alpha(51),
        card_border_width: 1.0,
        card_text: WHITE,
        card_subtext: Rgba::rgb(209, 213, 219),
        badge: BADGE_YELLOW,
        badge_icon: BLACK,
    };

    pub const HIGH_CONTRAST: ArPalette = ArPalette {
        kind: PaletteKind::HighContrast,
        arrow: SIGNAL_YELLOW,
        arrow_glow: Glow {
            color: BLACK,
            radius: 4.0,
        },
        path_glow: SIGNAL_YELLOW.with_alpha(51),
        grid_line: SIGNAL_YELLOW.with_alpha(102),
        card_background: BLACK.with_alpha(217),
        card_border: SIGNAL_YELLOW,
        card_border_width: 2.0,
        card_text: SIGNAL_YELLOW,
        card_subtext: SIGNAL_YELLOW,
        badge: SIGNAL_YELLOW,
        badge_icon: BLACK,
    };

    pub fn for_kind(kind: PaletteKind) -> Self {
        match kind {
            PaletteKind::Default => Self::DEFAULT,
            PaletteKind::HighContrast => Self::HIGH_CONTRAST,
        }
    }

    pub fn for_color_blind_mode(on: bool) -> Self {
        Self::for_kind(PaletteKind::for_color_blind_mode(on))
    }
}

/// One flowing chevron on the floor path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowCue {
    pub index: usize,
    /// Vertical offset from the arrow's rest position; negative is further ahead.
    pub offset_y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub color: Rgba,
    pub glow: Glow,
    pub palette: PaletteKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathGlowCue {
    pub opacity: f32,
    pub scale_x: f32,
    pub color: Rgba,
    pub palette: PaletteKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorGridCue {
    /// Scroll offset of the grid lines, in `[0, spacing)`.
    pub offset: f32,
    pub spacing: f32,
    pub color: Rgba,
    pub palette: PaletteKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnCardCue {
    pub title_key: &'static str,
    pub subtitle_key: &'static str,
    pub background: Rgba,
    pub border: Rgba,
    pub border_width: f32,
    pub text: Rgba,
    pub subtext: Rgba,
    pub palette: PaletteKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnBadgeCue {
    pub fill: Rgba,
    pub icon: Rgba,
    pub palette: PaletteKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayElement {
    Arrow(usize),
    PathGlow,
    FloorGrid,
    TurnCard,
    TurnBadge,
}

/// Everything the AR layer draws for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    pub palette: PaletteKind,
    pub arrows: Vec<ArrowCue>,
    pub path_glow: PathGlowCue,
    pub floor_grid: FloorGridCue,
    pub turn_card: TurnCardCue,
    pub turn_badge: TurnBadgeCue,
}

impl OverlayFrame {
    /// Each element with the palette it was styled from.
    pub fn elements(&self) -> Vec<(OverlayElement, PaletteKind)> {
        let mut out: Vec<_> = self
            .arrows
            .iter()
            .map(|a| (OverlayElement::Arrow(a.index), a.palette))
            .collect();
        out.push((OverlayElement::PathGlow, self.path_glow.palette));
        out.push((OverlayElement::FloorGrid, self.floor_grid.palette));
        out.push((OverlayElement::TurnCard, self.turn_card.palette));
        out.push((OverlayElement::TurnBadge, self.turn_badge.palette));
        out
    }

    pub fn is_uniform(&self) -> bool {
        self.elements().iter().all(|(_, p)| *p == self.palette)
    }
}

const ARROW_OFFSET: Keyframes<'static, f32> =
    Keyframes::new(&[(0.0, 100.0), (1.0, -150.0)], Easing::EaseOut);
const ARROW_SCALE: Keyframes<'static, f32> =
    Keyframes::new(&[(0.0, 0.8), (1.0, 1.2)], Easing::EaseOut);
const ARROW_OPACITY: Keyframes<'static, f32> = Keyframes::new(
    &[(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)],
    Easing::EaseOut,
);
const PULSE_OPACITY: Keyframes<'static, f32> =
    Keyframes::new(&[(0.0, 0.3), (0.5, 0.7), (1.0, 0.3)], Easing::EaseInOut);
const PULSE_SCALE: Keyframes<'static, f32> =
    Keyframes::new(&[(0.0, 0.9), (0.5, 1.05), (1.0, 0.9)], Easing::EaseInOut);

fn arrow_cycle(index: usize) -> Cycle {
    Cycle::new(Duration::from_millis(AR_ARROW_PERIOD_MS))
        .delayed(Duration::from_millis(AR_ARROW_STAGGER_MS * index as u64))
}

/// Sample one arrow. Arrows stay hidden until their stagger delay has passed.
pub fn arrow_cue(index: usize, elapsed: Duration, palette: &ArPalette) -> ArrowCue {
    let (offset_y, scale, opacity) = match arrow_cycle(index).phase_at(elapsed) {
        Some(t) => (
            ARROW_OFFSET.sample(t).unwrap_or(0.0),
            ARROW_SCALE.sample(t).unwrap_or(1.0),
            ARROW_OPACITY.sample(t).unwrap_or(0.0),
        ),
        None => (100.0, 0.8, 0.0),
    };
    ArrowCue {
        index,
        offset_y,
        scale,
        opacity,
        color: palette.arrow,
        glow: palette.arrow_glow,
        palette: palette.kind,
    }
}

pub fn path_glow_cue(elapsed: Duration, palette: &ArPalette) -> PathGlowCue {
    let t = Cycle::new(Duration::from_millis(AR_PATH_PULSE_PERIOD_MS))
        .phase_at(elapsed)
        .unwrap_or(0.0);
    PathGlowCue {
        opacity: PULSE_OPACITY.sample(t).unwrap_or(0.3),
        scale_x: PULSE_SCALE.sample(t).unwrap_or(0.9),
        color: palette.path_glow,
        palette: palette.kind,
    }
}

pub fn floor_grid_cue(elapsed: Duration, palette: &ArPalette) -> FloorGridCue {
    let t = Cycle::new(Duration::from_millis(AR_FLOOR_GRID_PERIOD_MS))
        .reversed()
        .phase_at(elapsed)
        .unwrap_or(0.0);
    FloorGridCue {
        offset: t * AR_FLOOR_GRID_SPACING,
        spacing: AR_FLOOR_GRID_SPACING,
        color: palette.grid_line,
        palette: palette.kind,
    }
}

/// Sample the whole overlay `elapsed` after the session became active.
pub fn overlay_frame(elapsed: Duration, color_blind_mode: bool) -> OverlayFrame {
    let palette = ArPalette::for_color_blind_mode(color_blind_mode);
    OverlayFrame {
        palette: palette.kind,
        arrows: (0..AR_ARROW_COUNT)
            .map(|i| arrow_cue(i, elapsed, &palette))
            .collect(),
        path_glow: path_glow_cue(elapsed, &palette),
        floor_grid: floor_grid_cue(elapsed, &palette),
        turn_card: TurnCardCue {
            title_key: "turn_right",
            subtitle_key: "turn_distance",
            background: palette.card_background,
            border: palette.card_border,
            border_width: palette.card_border_width,
            text: palette.card_text,
            subtext: palette.card_subtext,
            palette: palette.kind,
        },
        turn_badge: TurnBadgeCue {
            fill: palette.badge,
            icon: palette.badge_icon,
            palette: palette.kind,
        },
    }
}
