use wayfind_core::ar::overlay::Rgba;
use wayfind_core::geometry::{Affine, Point};

pub fn color(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

pub fn faded(c: Rgba, opacity: f32) -> egui::Color32 {
    color(c.faded(opacity))
}

/// Map-space point to an absolute screen position inside `rect`.
pub fn to_screen(transform: &Affine, rect: egui::Rect, p: Point) -> egui::Pos2 {
    let q = transform.apply(p);
    egui::pos2(rect.min.x + q.x, rect.min.y + q.y)
}

/// Screen position relative to the top-left of `rect`, in core coordinates.
pub fn to_local(rect: egui::Rect, pos: egui::Pos2) -> Point {
    Point::new(pos.x - rect.min.x, pos.y - rect.min.y)
}
