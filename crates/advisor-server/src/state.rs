//! Application State

use fund_advisor::{catalog, Fund, Recommender};

/// Shared application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Fund catalog served by the screener endpoints
    pub funds: &'static [Fund],

    /// Recommendation engine over the same catalog
    pub recommender: Recommender<'static>,
}

impl AppState {
    pub const fn new(funds: &'static [Fund]) -> Self {
        Self {
            funds,
            recommender: Recommender::new(funds),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(catalog::funds())
    }
}
