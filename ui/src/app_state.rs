use std::ops::Deref;
use std::sync::Arc;

use swap_types::prefs::SwapPrefs;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: SwapPrefs,
}

/// Immutable, session-wide state provided as a Dioxus context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: SwapPrefs) -> Self {
        Self(Arc::new(AppStateData { prefs }))
    }
}
