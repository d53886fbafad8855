use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::engine::{BillingEngine, BillingSummary};
use crate::storage::StorageBackend;

use super::ServiceResult;

pub struct SummaryService;

impl SummaryService {
    /// Loads the current snapshot and runs the billing pipeline against it.
    pub fn summarize(
        store: &dyn StorageBackend,
        config: &Config,
        reference: NaiveDate,
    ) -> ServiceResult<BillingSummary> {
        let subscriptions = store.load()?;
        Ok(BillingEngine::process(
            &subscriptions,
            config.upcoming_window_days,
            reference,
        ))
    }

    /// Wall-clock "now" truncated to the calendar day.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}
