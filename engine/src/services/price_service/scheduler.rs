// Periodic refresh driven by an explicit timer. Failed cycles are reported
// to the caller and the loop simply waits for the next tick.
use super::PriceService;
use crate::error::EngineError;
use chrono::{Local, NaiveDate};
use shared::models::DailyPrices;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone)]
pub struct RefreshSchedule {
    pub interval: Duration,
    /// Treat this date as "today" instead of the local calendar date.
    pub date_override: Option<NaiveDate>,
}

impl PriceService {
    /// Single cycle stamped with the local wall clock.
    pub async fn refresh_now(&self, date_override: Option<NaiveDate>) -> Result<DailyPrices, EngineError> {
        let now = Local::now().naive_local();
        self.refresh(date_override.unwrap_or(now.date()), now).await
    }

    /// Runs a refresh on every tick (the first one immediately) until
    /// `shutdown` resolves. Returns the number of completed cycles.
    pub async fn run_scheduled<F, S>(&self, schedule: &RefreshSchedule, mut on_refresh: F, shutdown: S) -> usize
    where
        F: FnMut(Result<DailyPrices, EngineError>),
        S: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(schedule.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        tracing::info!(interval_secs = schedule.interval.as_secs(), "Starting refresh loop");
        let mut cycles = 0;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!(cycles, "Refresh loop stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let outcome = self.refresh_now(schedule.date_override).await;
                    match &outcome {
                        Err(e) if e.is_feed_failure() => {
                            tracing::warn!(error = %e, "Feed unavailable, waiting for next tick");
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Refresh cycle failed, waiting for next tick");
                        }
                        Ok(_) => {}
                    }
                    cycles += 1;
                    on_refresh(outcome);
                }
            }
        }
        cycles
    }
}
