//! Top-level view state and its reducer.

use mcpdir_catalog::{Catalog, CategoryFilter, Filter, FilterResult};
use mcpdir_snippets::Platform;
use serde::{Deserialize, Serialize};

use crate::detail::DetailView;
use crate::error::Result;
use crate::toast::Toast;

/// Everything the browser shows, as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// Search text and active category chip.
    pub filter: Filter,

    /// Active platform tab.
    pub platform: Platform,

    /// Id of the record whose detail view is open.
    pub selected: Option<String>,

    /// Visible copy acknowledgment.
    pub toast: Option<Toast>,
}

/// A user-visible state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SetQuery(String),
    SetCategory(CategoryFilter),
    /// Restore the default query and category.
    ClearFilters,
    SetPlatform(Platform),
    Select(String),
    Dismiss,
    /// Copy `text` and acknowledge it at `now_ms`.
    Copy { text: String, now_ms: u64 },
    /// Advance the clock; expired acknowledgments are dismissed.
    Tick { now_ms: u64 },
}

/// Side effect requested by a transition. Performed by the front end,
/// fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    WriteClipboard(String),
}

/// What the results area shows.
#[derive(Debug)]
pub enum Listing<'a> {
    /// At least one record matched.
    Results(FilterResult<'a>),
    /// Nothing matched; offer the reset action.
    Empty { total: usize },
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on a specific platform tab.
    pub fn with_platform(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// Apply `action`. Selecting an id the catalog does not contain leaves
    /// the selection unchanged.
    pub fn reduce(&mut self, catalog: &Catalog, action: Action) -> Option<Effect> {
        tracing::debug!(?action, "Applying action");
        match action {
            Action::SetQuery(query) => self.filter.query = query,
            Action::SetCategory(category) => self.filter.category = category,
            Action::ClearFilters => self.filter.reset(),
            Action::SetPlatform(platform) => self.platform = platform,
            Action::Select(id) => {
                if catalog.contains(&id) {
                    self.selected = Some(id);
                } else {
                    tracing::warn!(id = %id, "Ignoring selection of unknown tool");
                }
            }
            Action::Dismiss => self.selected = None,
            Action::Copy { text, now_ms } => {
                self.toast = Some(Toast::copied(now_ms));
                return Some(Effect::WriteClipboard(text));
            }
            Action::Tick { now_ms } => {
                if self.toast.as_ref().is_some_and(|t| t.is_expired(now_ms)) {
                    self.toast = None;
                }
            }
        }
        None
    }

    /// Current results for the active filter.
    pub fn listing<'a>(&self, catalog: &'a Catalog) -> Listing<'a> {
        let result = catalog.filter(&self.filter);
        if result.is_empty() {
            Listing::Empty {
                total: result.total(),
            }
        } else {
            Listing::Results(result)
        }
    }

    /// Detail view for the selected record on the active platform.
    pub fn detail<'a>(&self, catalog: &'a Catalog) -> Option<DetailView<'a>> {
        let id = self.selected.as_deref()?;
        catalog
            .get(id)
            .map(|record| DetailView::new(record, self.platform))
    }

    pub fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
