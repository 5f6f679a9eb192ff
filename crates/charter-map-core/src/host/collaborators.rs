//! Contracts for the charter-listing and stakeholder-mutation collaborators.

use crate::errors::StakeholderMapResult;
use crate::models::{CharterSummary, NewStakeholder};

/// Snapshot from the charter-listing collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharterFeed {
    pub charters: Vec<CharterSummary>,
    pub is_loading: bool,
    /// Changes whenever `charters` changes.  When absent the page derives a
    /// fingerprint from the charters themselves.
    pub version_token: Option<String>,
}

pub trait CharterSource {
    fn charter_feed(&self) -> CharterFeed;
}

/// Backend call that attaches a stakeholder.
///
/// `Ok(false)` means the backend declined the request; `Err` means the call
/// itself failed.
pub trait StakeholderMutator {
    fn add_stakeholder(&self, request: &NewStakeholder) -> StakeholderMapResult<bool>;
}

impl<T: CharterSource + ?Sized> CharterSource for &T {
    fn charter_feed(&self) -> CharterFeed {
        (**self).charter_feed()
    }
}

impl<T: StakeholderMutator + ?Sized> StakeholderMutator for &T {
    fn add_stakeholder(&self, request: &NewStakeholder) -> StakeholderMapResult<bool> {
        (**self).add_stakeholder(request)
    }
}
