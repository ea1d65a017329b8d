use wayfind_core::i18n::Language;
use wayfind_core::nav::{reduce, NavAction, NavStore, NavigationState};

#[test]
fn test_default_state() {
    let s = NavigationState::default();
    assert_eq!(s.destination_key, "clinic_heart");
    assert_eq!(s.language, Language::ZhTw);
    assert!(!s.color_blind_mode);
}

#[test]
fn test_reducer_applies_each_action() {
    let mut s = NavigationState::default();
    assert!(reduce(&mut s, NavAction::SelectDestination("pharmacy".into())));
    assert!(reduce(&mut s, NavAction::SetLanguage(Language::En)));
    assert!(reduce(&mut s, NavAction::SetColorBlindMode(true)));
    assert_eq!(
        s,
        NavigationState {
            destination_key: "pharmacy".into(),
            language: Language::En,
            color_blind_mode: true,
        }
    );
}

#[test]
fn test_reducer_reports_no_op() {
    let mut s = NavigationState::default();
    assert!(!reduce(&mut s, NavAction::SelectDestination("clinic_heart".into())));
    assert!(!reduce(&mut s, NavAction::SetColorBlindMode(false)));
}

#[test]
fn test_store_counts_effective_revisions() {
    let mut store = NavStore::default();
    assert_eq!(store.revision(), 0);
    store.dispatch(NavAction::SelectDestination("exit".into()));
    store.dispatch(NavAction::SelectDestination("exit".into()));
    store.dispatch(NavAction::SetLanguage(Language::Ja));
    assert_eq!(store.revision(), 2);
    assert_eq!(store.state().destination_key, "exit");
}
