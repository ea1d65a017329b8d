//! Shared navigation state and its reducer.

use tracing::debug;

use crate::config::NavigationConfig;
use crate::i18n::Language;
use crate::topology::DEFAULT_DESTINATION;

/// State shared by every screen of the kiosk.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub destination_key: String,
    pub language: Language,
    pub color_blind_mode: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::from(&NavigationConfig::default())
    }
}

impl NavigationState {
    /// Selected destination; an empty selection means the default destination.
    pub fn destination(&self) -> &str {
        if self.destination_key.is_empty() {
            DEFAULT_DESTINATION
        } else {
            &self.destination_key
        }
    }
}

impl From<&NavigationConfig> for NavigationState {
    fn from(config: &NavigationConfig) -> Self {
        Self {
            destination_key: config.destination.clone(),
            language: config.language,
            color_blind_mode: config.color_blind_mode,
        }
    }
}

/// Every way a screen may change the shared state.
#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    SelectDestination(String),
    SetLanguage(Language),
    SetColorBlindMode(bool),
}

/// Apply `action` to `state`. Returns `true` if anything changed.
pub fn reduce(state: &mut NavigationState, action: NavAction) -> bool {
    match action {
        NavAction::SelectDestination(key) => {
            if state.destination_key == key {
                return false;
            }
            state.destination_key = key;
        }
        NavAction::SetLanguage(lang) => {
            if state.language == lang {
                return false;
            }
            state.language = lang;
        }
        NavAction::SetColorBlindMode(on) => {
            if state.color_blind_mode == on {
                return false;
            }
            state.color_blind_mode = on;
        }
    }
    true
}

/// Single source of truth for [`NavigationState`], passed by reference to readers.
#[derive(Clone, Debug, Default)]
pub struct NavStore {
    state: NavigationState,
    revision: u64,
}

impl NavStore {
    pub fn new(state: NavigationState) -> Self {
        Self { state, revision: 0 }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Incremented on every effective change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dispatch(&mut self, action: NavAction) -> bool {
        debug!(?action, "navigation action");
        let changed = reduce(&mut self.state, action);
        if changed {
            self.revision += 1;
        }
        changed
    }
}
