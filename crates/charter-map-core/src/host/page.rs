//! Stakeholder map page state: query configuration, derived list, and the
//! add-stakeholder flow.

use tracing::{debug, info, warn};

use crate::errors::StakeholderMapResult;
use crate::host::collaborators::{CharterSource, StakeholderMutator};
use crate::host::dialog::AddStakeholderForm;
use crate::host::notifications::Notification;
use crate::models::{collection_fingerprint, Department, QueryConfig, SortDirection, SortKey};
use crate::query::engine::{list_charters, CharterListing};
use crate::query::planner::ListingCache;
use crate::settings::EngineSettings;

const ADD_SUCCESS_TITLE: &str = "Stakeholder added";
const ADD_FAILURE_TITLE: &str = "Could not add stakeholder";

/// Host-owned state for the stakeholder map page.
///
/// Holds the query configuration and re-derives the visible list from the
/// charter source whenever it is asked, serving repeats from the cache.
pub struct StakeholderMapPage<S, M> {
    source: S,
    mutator: M,
    config: QueryConfig,
    cache: ListingCache,
    add_dialog_open: bool,
    notifications: Vec<Notification>,
}

impl<S: CharterSource, M: StakeholderMutator> StakeholderMapPage<S, M> {
    pub fn new(source: S, mutator: M, settings: &EngineSettings) -> Self {
        let config = QueryConfig {
            date_ordering: settings.date_ordering,
            ..QueryConfig::default()
        };
        Self {
            source,
            mutator,
            config,
            cache: ListingCache::new(settings.cache_entries, settings.cache_ttl_seconds),
            add_dialog_open: false,
            notifications: Vec::new(),
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn set_search_text(&mut self, search_text: &str) {
        self.config.search_text = search_text.to_string();
    }

    pub fn set_department_filter(&mut self, department: Option<Department>) {
        self.config.department_filter = department;
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.config.sort_key = sort_key;
    }

    pub fn set_sort_direction(&mut self, sort_direction: SortDirection) {
        self.config.sort_direction = sort_direction;
    }

    /// Column-header behaviour: the active key flips direction, a new key
    /// starts ascending.
    pub fn toggle_sort(&mut self, sort_key: SortKey) {
        if self.config.sort_key == sort_key {
            self.config.sort_direction = self.config.sort_direction.flipped();
        } else {
            self.config.sort_key = sort_key;
            self.config.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn reset_filters(&mut self) {
        self.config = QueryConfig {
            date_ordering: self.config.date_ordering,
            ..QueryConfig::default()
        };
    }

    /// Derive the visible list for the current configuration.
    pub fn visible_charters(&self) -> StakeholderMapResult<CharterListing> {
        let feed = self.source.charter_feed();
        if feed.is_loading {
            debug!("charter feed still loading");
            return Ok(CharterListing::loading());
        }
        let fingerprint = match feed.version_token.as_deref() {
            Some(token) => format!("v:{token}"),
            None => collection_fingerprint(&feed.charters)?,
        };
        let (listing, mode, trace) = self.cache.get_or_compute(&fingerprint, &self.config, || {
            list_charters(&feed.charters, &self.config)
        })?;
        debug!(?mode, total_ms = trace.total_ms, "visible charters derived");
        Ok(listing)
    }

    pub fn is_add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    pub fn open_add_dialog(&mut self) {
        self.add_dialog_open = true;
    }

    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
    }

    /// Submit the add-stakeholder dialog.
    ///
    /// Failures are never fatal: validation errors, a declined request, and
    /// transport errors all become an error notification and leave the dialog
    /// open.  Success closes the dialog and drops cached listings.
    pub fn submit_add_stakeholder(&mut self, form: &AddStakeholderForm) -> Notification {
        let notification = match form.validate() {
            Err(err) => {
                debug!("add-stakeholder form rejected: {err}");
                Notification::error(ADD_FAILURE_TITLE, err.to_string())
            }
            Ok(request) => match self.mutator.add_stakeholder(&request) {
                Ok(true) => {
                    info!(
                        email = %request.email,
                        role = %request.role,
                        department = %request.department,
                        "stakeholder added"
                    );
                    self.add_dialog_open = false;
                    self.cache.clear();
                    Notification::success(
                        ADD_SUCCESS_TITLE,
                        format!("{} was added as {}", request.email, request.role),
                    )
                }
                Ok(false) => {
                    warn!(email = %request.email, "stakeholder mutation declined");
                    Notification::error(ADD_FAILURE_TITLE, "The request was not accepted.")
                }
                Err(err) => {
                    warn!(email = %request.email, "stakeholder mutation failed: {err}");
                    Notification::error(ADD_FAILURE_TITLE, err.to_string())
                }
            },
        };
        self.notifications.push(notification.clone());
        notification
    }

    /// Drain pending notifications for display.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
