use serde::{Deserialize, Serialize};
use tracing::log;

use crate::error::StatsError;
use crate::formatting::PlayerTable;
use crate::models_api::player::{PlayerField, PlayerRecord};
use crate::models_api::team::TeamRecord;
use crate::sort::SortState;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Handed out by `begin_fetch`, only the latest ticket may complete the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone)]
pub struct StatsView<T> {
    state: ViewState<T>,
    generation: u64,
    mounted: bool,
}

impl<T: Default> Default for StatsView<T> {
    fn default() -> Self {
        StatsView::new()
    }
}

impl<T: Default> StatsView<T> {
    pub fn new() -> StatsView<T> {
        StatsView { state: ViewState::Loading, generation: 0, mounted: true }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        FetchTicket(self.generation)
    }

    /// Applies a finished fetch. Results for an unmounted view or a superseded
    /// ticket are dropped and `false` is returned.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T, StatsError>) -> bool {
        if !self.mounted || ticket.0 != self.generation {
            log::debug!("[VIEW] Drop stale fetch result {}", ticket.0);
            return false;
        }
        self.state = match result {
            Ok(data) => ViewState::Ready(data),
            // empty state, not an error
            Err(StatsError::NoData(_)) => ViewState::Ready(T::default()),
            Err(e @ StatsError::Fetch(_)) => {
                log::error!("[VIEW] Fetch failed: {e}");
                ViewState::Failed(format!("Failed to load data: {e}"))
            },
        };
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayersView {
    pub view: StatsView<Vec<PlayerRecord>>,
    pub sort: SortState,
}

impl PlayersView {
    pub fn new(sort: SortState) -> PlayersView {
        PlayersView { view: StatsView::new(), sort }
    }

    pub fn select_sort(&mut self, field: PlayerField) {
        self.sort.select(field);
    }

    /// Full re-sort of the current records, None unless ready.
    pub fn sorted(&self) -> Option<Vec<PlayerRecord>> {
        self.view.data().map(|e| self.sort.apply(e))
    }

    pub fn table(&self) -> Option<PlayerTable> {
        self.sorted().map(|e| PlayerTable::new(&e, self.sort))
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        match self.view.data() {
            Some(e) if e.is_empty() => Some("No player statistics found"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamView {
    pub view: StatsView<Option<TeamRecord>>,
}

impl TeamView {
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<TeamRecord, StatsError>) -> bool {
        self.view.complete(ticket, result.map(Some))
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        match self.view.data() {
            Some(None) => Some("No team statistics found"),
            _ => None,
        }
    }
}
