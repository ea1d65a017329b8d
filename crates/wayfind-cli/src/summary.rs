use console::Style;
use wayfind_core::ar::{ArSessionState, Completion, OverlayFrame};
use wayfind_core::route::Route;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    rule: Style,
    warn: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            rule: Style::new().green(),
            warn: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_route_summary(route: &Route, label: &str, known: bool) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Wayfind Route"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(13)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Destination"), s.value.apply_to(label));
    if !known {
        println!(
            "  {:<14}{}",
            s.label.apply_to(""),
            s.warn.apply_to("unknown key, using default target")
        );
    }
    println!("  {:<14}{}", s.label.apply_to("From"), s.value.apply_to(route.origin()));
    println!("  {:<14}{}", s.label.apply_to("Target"), s.value.apply_to(route.target));
    println!("  {:<14}{}", s.label.apply_to("Rule"), s.rule.apply_to(route.rule));
    println!();

    println!("  {}", s.header.apply_to("Segments"));
    for (i, seg) in route.segments.iter().enumerate() {
        println!(
            "    {:<4}{:<8}{} -> {}  {}",
            s.label.apply_to(i + 1),
            s.rule.apply_to(seg.direction()),
            seg.from,
            seg.to,
            s.label.apply_to(format!("{:.0}", seg.length()))
        );
    }
    println!();

    println!("  {:<14}{:.0}", s.label.apply_to("Length"), s.value.apply_to(route.length()));
    println!("  {:<14}{}", s.label.apply_to("Path"), s.path.apply_to(route.to_path_data()));
    println!();
}

pub fn print_transition(step: &str, state: ArSessionState) {
    let s = Styles::new();
    let styled = match state {
        ArSessionState::Failed(_) => s.warn.apply_to(state.to_string()),
        ArSessionState::Active => s.rule.apply_to(state.to_string()),
        _ => s.value.apply_to(state.to_string()),
    };
    println!("  {:<22}{}", s.label.apply_to(step), styled);
}

pub fn print_completion(completion: Completion) {
    let s = Styles::new();
    let text = match completion {
        Completion::Bound => s.rule.apply_to("stream bound".to_string()),
        Completion::Failed(reason) => s.warn.apply_to(format!("failed: {reason}")),
        Completion::Discarded => s.warn.apply_to("late stream released unbound".to_string()),
    };
    println!("  {:<22}{}", s.label.apply_to("camera answered"), text);
}

pub fn print_overlay(at_ms: u64, frame: &OverlayFrame) {
    let s = Styles::new();
    let arrows: Vec<String> = frame
        .arrows
        .iter()
        .map(|a| format!("{:>6.1}/{:.2}", a.offset_y, a.opacity))
        .collect();
    println!(
        "    {:<8}{:<14}arrows {}  glow {:.2}  grid {:>4.1}",
        s.label.apply_to(format!("{at_ms}ms")),
        s.rule.apply_to(format!("{:?}", frame.palette)),
        arrows.join(" "),
        frame.path_glow.opacity,
        frame.floor_grid.offset
    );
}
