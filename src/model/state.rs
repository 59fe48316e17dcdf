use crate::model::advisory::{AdvisoryResult, Sport};
use crate::model::facility::BoardSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Status,
    Board,
}

/// Everything the web layer remembers between requests. Results are only ever
/// replaced whole; a failed scan or refresh leaves the prior value in place.
#[derive(Clone, Debug)]
pub struct AppState {
    pub active_view: View,
    pub selected_sport: Sport,
    pub last_advisory: Option<AdvisoryResult>,
    pub last_board: Option<BoardSnapshot>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_view: View::Status,
            selected_sport: Sport::AmericanFootball,
            last_advisory: None,
            last_board: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
