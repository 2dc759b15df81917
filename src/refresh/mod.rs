//! Auto-refresh loop: re-runs the session's refresh cycle on a timer.
//!
//! Cooperative poll-and-rerun. Each tick calls `DashboardSession::refresh`
//! with the clock's current time; the loop ends when the shutdown future
//! resolves or after `max_cycles` ticks.

use crate::live::LiveUpdate;
use crate::session::DashboardSession;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of "now" for the live-update gap check.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

// ── Loop ──────────────────────────────────────────────────────────────────────

pub struct RefreshLoop {
    period: Duration,
    max_cycles: Option<u64>,
}

impl RefreshLoop {
    pub fn new(period: Duration) -> Self {
        Self { period, max_cycles: None }
    }

    pub fn with_max_cycles(mut self, cycles: u64) -> Self {
        self.max_cycles = Some(cycles);
        self
    }

    /// Tick until `shutdown` resolves or the cycle budget is spent.
    ///
    /// `on_cycle` runs after every refresh, e.g. to redraw the headline view.
    pub async fn run<C, S, F>(
        &self,
        session: &mut DashboardSession,
        clock: &C,
        shutdown: S,
        mut on_cycle: F,
    ) -> Result<RefreshStats>
    where
        C: Clock,
        S: Future<Output = ()>,
        F: FnMut(&DashboardSession, LiveUpdate),
    {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut stats = RefreshStats::default();
        info!("Auto-refresh every {:?} (max cycles: {:?})", self.period, self.max_cycles);

        loop {
            if self.max_cycles.is_some_and(|max| stats.cycles >= max) {
                break;
            }

            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping auto-refresh");
                    break;
                }
                _ = ticker.tick() => {
                    let now = clock.now();
                    let outcome = session
                        .refresh(now)
                        .with_context(|| format!("refresh cycle {} at {}", stats.cycles + 1, now))?;

                    stats.cycles += 1;
                    match outcome {
                        LiveUpdate::Appended => stats.appended += 1,
                        LiveUpdate::Skipped { days_since_last } => {
                            debug!(
                                "Cycle {}: nothing to append ({} days since last)",
                                stats.cycles, days_since_last
                            );
                        }
                    }
                    on_cycle(session, outcome);
                }
            }
        }

        info!(
            "Auto-refresh done: {} cycles, {} observations appended",
            stats.cycles, stats.appended
        );
        Ok(stats)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshStats {
    pub cycles: u64,
    pub appended: u64,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionSettings;
    use chrono::NaiveDate;
    use std::cell::Cell;

    /// Advances by a fixed step on every read.
    struct SteppingClock {
        now: Cell<NaiveDateTime>,
        step: chrono::Duration,
    }

    impl Clock for SteppingClock {
        fn now(&self) -> NaiveDateTime {
            let now = self.now.get();
            self.now.set(now + self.step);
            now
        }
    }

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn session() -> DashboardSession {
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        DashboardSession::generate(SessionSettings::until(end).with_seed(11)).unwrap()
    }

    fn start_of(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_fixed_clock_appends_once() {
        let mut session = session();
        let clock = FixedClock(start_of(2024, 3, 1));
        let stats = tokio_test::block_on(
            RefreshLoop::new(Duration::from_millis(1))
                .with_max_cycles(5)
                .run(&mut session, &clock, std::future::pending(), |_, _| {}),
        )
        .unwrap();

        assert_eq!(stats, RefreshStats { cycles: 5, appended: 1 });
        assert_eq!(session.stats().live_appends, 1);
    }

    #[test]
    fn test_advancing_clock_appends_every_threshold() {
        let mut session = session();
        let clock = SteppingClock {
            now: Cell::new(start_of(2024, 1, 1)),
            step: chrono::Duration::days(10),
        };
        let mut seen = Vec::new();
        let stats = tokio_test::block_on(
            RefreshLoop::new(Duration::from_millis(1))
                .with_max_cycles(9)
                .run(&mut session, &clock, std::future::pending(), |_, o| seen.push(o.appended())),
        )
        .unwrap();

        // Reads at day 0, 10, …, 80: appends on day 30 and day 60.
        assert_eq!(stats.cycles, 9);
        assert_eq!(stats.appended, 2);
        assert_eq!(seen.iter().filter(|a| **a).count(), 2);
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let mut session = session();
        let clock = FixedClock(start_of(2024, 1, 2));
        let stats = tokio_test::block_on(
            RefreshLoop::new(Duration::from_secs(3600))
                .run(&mut session, &clock, async {}, |_, _| {}),
        )
        .unwrap();

        // The shutdown future is ready immediately; at most the first
        // (immediate) tick can slip in before it.
        assert!(stats.cycles <= 1);
        assert_eq!(stats.appended, 0);
    }
}
