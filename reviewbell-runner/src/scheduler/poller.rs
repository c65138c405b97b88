//! Status poller
//!
//! Polls the status endpoint with a server-issued cursor, formats the most
//! recent status change and delivers it once. Failures of a cycle are
//! reported to the recipient once per distinct message; the loop never
//! stops on its own.

use reviewbell_core::StatusFormatter;
use reviewbell_core::domain::Cursor;
use reviewbell_core::dto::validate_response;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::PollError;
use crate::repository::StatusRepository;
use crate::service::Notifier;

/// Result of the fetch-and-validate stage of a cycle
#[derive(Debug)]
pub enum Observation {
    /// Nothing changed since the cursor
    Empty { current_date: i64 },
    /// Most recent status change
    Record { record: Value, current_date: i64 },
    /// Fetch or validation failed; the cursor must stay where it is
    Failed(PollError),
}

/// Poller that tracks one work item's review status for one recipient
pub struct StatusPoller {
    repository: Arc<dyn StatusRepository>,
    notifier: Arc<dyn Notifier>,
    formatter: StatusFormatter,
    interval: Duration,
    cursor: Cursor,
    /// Last message the recipient actually received
    last_notified: Option<String>,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(
        config: &Config,
        repository: Arc<dyn StatusRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            notifier,
            formatter: StatusFormatter::default(),
            interval: config.retry_period,
            cursor: config.initial_cursor(),
            last_notified: None,
        }
    }

    /// Replaces the formatter (and with it the status lexicon)
    #[allow(dead_code)]
    pub fn with_formatter(mut self, formatter: StatusFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[allow(dead_code)]
    pub fn last_notified(&self) -> Option<&str> {
        self.last_notified.as_deref()
    }

    /// Runs the polling loop until `shutdown` resolves
    ///
    /// The fixed interval is slept after every cycle, successful or not.
    /// Shutdown is only observed while sleeping, so a running cycle always
    /// completes.
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            "Starting status poller (interval: {:?}, cursor: {})",
            self.interval, self.cursor
        );

        tokio::pin!(shutdown);

        loop {
            self.poll_once().await;

            tokio::select! {
                _ = time::sleep(self.interval) => {}
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping status poller");
                    return;
                }
            }
        }
    }

    /// Performs a single poll cycle, without the trailing sleep
    pub async fn poll_once(&mut self) {
        match self.observe().await {
            Observation::Empty { current_date } => {
                debug!("No new statuses since {}", self.cursor);
                self.advance(current_date);
            }
            Observation::Record {
                record,
                current_date,
            } => {
                self.advance(current_date);
                match self.formatter.format(&record) {
                    Ok(message) => self.notify_status(message).await,
                    Err(e) => self.report_failure(e.into()).await,
                }
            }
            Observation::Failed(e) => self.report_failure(e).await,
        }
    }

    /// Fetches and validates one page
    async fn observe(&self) -> Observation {
        debug!("Polling statuses from {}", self.cursor);

        let payload = match self.repository.fetch(self.cursor).await {
            Ok(payload) => payload,
            Err(e) => return Observation::Failed(e.into()),
        };

        let page = match validate_response(payload) {
            Ok(page) => page,
            Err(e) => return Observation::Failed(e.into()),
        };

        if page.homeworks.len() > 1 {
            debug!(
                "{} older status change(s) in this page are not reported",
                page.homeworks.len() - 1
            );
        }

        let current_date = page.current_date;
        match page.into_latest() {
            None => Observation::Empty { current_date },
            Some(record) => Observation::Record {
                record,
                current_date,
            },
        }
    }

    fn advance(&mut self, current_date: i64) {
        if !self.cursor.advance_to(current_date) {
            warn!(
                "Server returned current_date {} behind cursor {}, keeping cursor",
                current_date, self.cursor
            );
        }
    }

    fn already_notified(&self, message: &str) -> bool {
        self.last_notified.as_deref() == Some(message)
    }

    /// Delivers a status change unless it was the last thing delivered
    ///
    /// A delivery failure is only logged; it never turns into a failure
    /// notification of its own.
    async fn notify_status(&mut self, message: String) {
        if self.already_notified(&message) {
            debug!("Status unchanged since last notification");
            return;
        }

        match self.notifier.deliver(&message).await {
            Ok(()) => {
                info!("Status change delivered: {}", message);
                self.last_notified = Some(message);
            }
            Err(e) => error!("{}", e),
        }
    }

    /// Logs a cycle failure and tells the recipient about it once
    async fn report_failure(&mut self, error: PollError) {
        let message = error.notification();
        error!(kind = error.kind(), "{}", message);

        if self.already_notified(&message) {
            debug!("Failure already reported, not notifying again");
            return;
        }

        match self.notifier.deliver(&message).await {
            Ok(()) => self.last_notified = Some(message),
            Err(e) => error!("Could not report failure: {}", e),
        }
    }
}
