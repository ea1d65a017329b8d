use std::time::Duration;

use approx::assert_relative_eq;

use wayfind_core::animation::{Cycle, Easing, Keyframes, Tween};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn test_tween_clamps_before_and_after() {
    let t = Tween::new(0.0f32, 10.0, ms(100), ms(200), Easing::Linear);
    assert_relative_eq!(t.value_at(ms(0)), 0.0);
    assert_relative_eq!(t.value_at(ms(200)), 5.0);
    assert_relative_eq!(t.value_at(ms(1_000)), 10.0);
    assert!(t.is_finished(ms(300)));
    assert!(!t.is_finished(ms(299)));
}

#[test]
fn test_zero_length_tween_jumps() {
    let t = Tween::new(1.0f32, 2.0, ms(50), Duration::ZERO, Easing::VIEWPORT);
    assert_relative_eq!(t.value_at(ms(50)), 2.0);
}

#[test]
fn test_cycle_wraps() {
    let c = Cycle::new(ms(1_000));
    assert_relative_eq!(c.phase_at(ms(250)).unwrap(), 0.25);
    assert_relative_eq!(c.phase_at(ms(3_250)).unwrap(), 0.25);
}

#[test]
fn test_cycle_respects_delay() {
    let c = Cycle::new(ms(1_000)).delayed(ms(400));
    assert!(c.phase_at(ms(399)).is_none());
    assert_relative_eq!(c.phase_at(ms(400)).unwrap(), 0.0);
    assert_relative_eq!(c.phase_at(ms(900)).unwrap(), 0.5);
}

#[test]
fn test_reversed_cycle_counts_down() {
    let c = Cycle::new(ms(1_000)).reversed();
    assert_relative_eq!(c.phase_at(ms(250)).unwrap(), 0.75);
    assert_relative_eq!(c.phase_at(ms(0)).unwrap(), 0.0);
}

#[test]
fn test_keyframes_hold_plateau() {
    let k = Keyframes::new(&[(0.0, 0.0f32), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)], Easing::Linear);
    assert_relative_eq!(k.sample(0.1).unwrap(), 0.5);
    assert_relative_eq!(k.sample(0.5).unwrap(), 1.0);
    assert_relative_eq!(k.sample(0.9).unwrap(), 0.5, epsilon = 1e-5);
    assert_relative_eq!(k.sample(1.0).unwrap(), 0.0);
}

#[test]
fn test_empty_keyframes_sample_to_none() {
    let k: Keyframes<'_, f32> = Keyframes::new(&[], Easing::Linear);
    assert!(k.sample(0.5).is_none());
}
