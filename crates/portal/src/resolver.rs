//! Dependent selector resolution: directorate → division options.
//!
//! Fetching is split into two phases so several fetches may be in flight on
//! one task. [`DivisionResolver::begin`] issues a sequence-numbered ticket,
//! [`DivisionResolver::complete`] applies a result only if its ticket is
//! still the latest one. Responses therefore land in issuance order, never
//! arrival order.

use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{Directorate, Division};

use crate::clients::EmployeeApi;

/// An issued division fetch awaiting its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    seq: u64,
    directorate_id: String,
}

impl PendingFetch {
    pub fn directorate_id(&self) -> &str {
        &self.directorate_id
    }
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result replaced the division options
    Applied,
    /// A newer request was issued; the result was discarded
    Stale,
}

/// Division option set for the currently selected directorate.
#[derive(Debug, Default)]
pub struct DivisionResolver {
    options: Vec<Division>,
    directorate_id: Option<String>,
    latest_seq: u64,
    loading: bool,
}

impl DivisionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[Division] {
        &self.options
    }

    /// Directorate the options belong to (or are being fetched for)
    pub fn directorate_id(&self) -> Option<&str> {
        self.directorate_id.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Phase one: record a parent change.
    ///
    /// The options are cleared at once. An empty parent returns `None`; any
    /// earlier ticket becomes stale either way.
    pub fn begin(&mut self, directorate_id: Option<&str>) -> Option<PendingFetch> {
        self.latest_seq += 1;

        match directorate_id.map(str::trim).filter(|id| !id.is_empty()) {
            None => {
                debug!("Directorate cleared; dropping division options");
                self.options.clear();
                self.directorate_id = None;
                self.loading = false;
                None
            }
            Some(id) => {
                // Options of the previous directorate are no longer selectable.
                self.options.clear();
                self.directorate_id = Some(id.to_string());
                self.loading = true;
                Some(PendingFetch {
                    seq: self.latest_seq,
                    directorate_id: id.to_string(),
                })
            }
        }
    }

    /// Phase two: apply a fetch result if it answers the latest request.
    ///
    /// A failed latest fetch leaves the options empty and hands the error
    /// back for notification.
    pub fn complete(
        &mut self,
        pending: PendingFetch,
        result: AppResult<Vec<Division>>,
    ) -> AppResult<Resolution> {
        if pending.seq != self.latest_seq {
            warn!(
                "Discarding stale divisions for directorate {} (request {}, latest {})",
                pending.directorate_id, pending.seq, self.latest_seq
            );
            return Ok(Resolution::Stale);
        }

        self.loading = false;
        match result {
            Ok(divisions) => {
                debug!(
                    "Loaded {} divisions for directorate {}",
                    divisions.len(),
                    pending.directorate_id
                );
                self.options = divisions;
                Ok(Resolution::Applied)
            }
            Err(e) => {
                warn!(
                    "Failed to fetch divisions for directorate {}: {}",
                    pending.directorate_id, e
                );
                self.options.clear();
                Err(e)
            }
        }
    }

    /// Both phases in one call.
    pub async fn change_directorate(
        &mut self,
        api: &dyn EmployeeApi,
        directorate_id: Option<&str>,
    ) -> AppResult<Resolution> {
        let Some(pending) = self.begin(directorate_id) else {
            return Ok(Resolution::Applied);
        };
        let result = api.divisions_by_directorate(pending.directorate_id()).await;
        self.complete(pending, result)
    }
}

/// Load the directorate option set.
///
/// On failure the caller gets an empty list alongside the error, so the
/// selector stays usable.
pub async fn load_directorates(api: &dyn EmployeeApi) -> (Vec<Directorate>, Option<AppError>) {
    match api.directorates().await {
        Ok(directorates) => (directorates, None),
        Err(e) => {
            warn!("Failed to fetch directorates: {}", e);
            (Vec::new(), Some(e))
        }
    }
}
