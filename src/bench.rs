//! Best-of-N timing of table generation.
//!
//! The harness generates the table once and verifies it against a known table,
//! then times a number of further generation passes and keeps every elapsed
//! time. Time comes from a [`Clock`] so the harness can be driven by a fake one.

use alloc::vec::Vec;

use crate::{
    generator::create_etc1_to_dxt1_6_conversion_table, reference::reference_table,
    table::SolutionTable, verify::verify_table, Result,
};

pub const DEFAULT_RUNS: usize = 10;

/// Millisecond time source.
pub trait Clock {
    fn now_millis(&mut self) -> u64;
}

/// Monotonic clock backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_millis(&mut self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// What to do when the generated table differs from the known one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Log the first difference and carry on timing.
    #[default]
    Warn,
    /// Stop before timing and return the mismatch.
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchReport {
    /// Outcome of the verification pass. Only an error under [`MismatchPolicy::Warn`].
    pub verification: Result<()>,
    /// Elapsed milliseconds of every timed run, in order.
    pub run_times: Vec<u64>,
}

impl BenchReport {
    /// Fastest run, `None` if nothing was timed.
    pub fn best(&self) -> Option<u64> {
        self.run_times.iter().copied().min()
    }

    pub fn verified(&self) -> bool {
        self.verification.is_ok()
    }
}

pub struct Harness<C> {
    clock: C,
    runs: usize,
    policy: MismatchPolicy,
}

impl<C: Clock> Harness<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            runs: DEFAULT_RUNS,
            policy: MismatchPolicy::default(),
        }
    }

    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn policy(mut self, policy: MismatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Verifies and times the real generator against the shipped table.
    pub fn run(&mut self) -> Result<BenchReport> {
        let known = reference_table()?;
        self.run_with(&known, create_etc1_to_dxt1_6_conversion_table)
    }

    pub fn run_with<F>(&mut self, known: &SolutionTable, mut generate: F) -> Result<BenchReport>
    where
        F: FnMut(&mut SolutionTable),
    {
        let mut table = SolutionTable::new();

        generate(&mut table);
        let verification = verify_table(&table, known);
        match &verification {
            Ok(()) => tracing::info!("generated table matches known values"),
            Err(err) => {
                tracing::warn!(%err, "generated results don't match known values");
                if self.policy == MismatchPolicy::Fail {
                    return Err(err.clone());
                }
            }
        }

        let mut run_times = Vec::with_capacity(self.runs);
        for run in 0..self.runs {
            let start = self.clock.now_millis();
            generate(&mut table);
            let elapsed = self.clock.now_millis().saturating_sub(start);
            tracing::debug!(run, elapsed, "timed run");
            run_times.push(elapsed);
        }

        Ok(BenchReport {
            verification,
            run_times,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        table::{SelectorRange, Solution, TableIndex},
        Error,
    };
    use alloc::{vec, vec::IntoIter};

    /// Replays a fixed sequence of timestamps.
    struct ScriptedClock(IntoIter<u64>);

    impl ScriptedClock {
        fn new(ticks: Vec<u64>) -> Self {
            Self(ticks.into_iter())
        }
    }

    impl Clock for ScriptedClock {
        fn now_millis(&mut self) -> u64 {
            self.0.next().unwrap()
        }
    }

    fn known() -> SolutionTable {
        let mut table = SolutionTable::new();
        table.update(TableIndex::new(1, 1, SelectorRange::All, 1), 2, 3, 4);
        table
    }

    #[test]
    fn test_best_of_runs() {
        let known = known();
        let clock = ScriptedClock::new(vec![0, 30, 30, 50, 100, 112]);
        let mut calls = 0;
        let report = Harness::new(clock)
            .runs(3)
            .run_with(&known, |table| {
                calls += 1;
                table.clone_from(&known);
            })
            .unwrap();

        assert_eq!(calls, 4);
        assert!(report.verified());
        assert_eq!(report.run_times, vec![30, 20, 12]);
        assert_eq!(report.best(), Some(12));
        assert!(report.run_times.iter().all(|&t| report.best().unwrap() <= t));
    }

    #[test]
    fn test_default_run_count() {
        let known = known();
        let ticks = (0..2 * DEFAULT_RUNS as u64).map(|t| t * t).collect();
        let report = Harness::new(ScriptedClock::new(ticks))
            .run_with(&known, |table| table.clone_from(&known))
            .unwrap();
        assert_eq!(report.run_times.len(), DEFAULT_RUNS);
        // Tick pairs (0, 1), (4, 9), ... grow apart, so the first run is the fastest
        assert_eq!(report.best(), Some(1));
    }

    #[test]
    fn test_clock_going_backwards_saturates() {
        let known = known();
        let report = Harness::new(ScriptedClock::new(vec![10, 5]))
            .runs(1)
            .run_with(&known, |table| table.clone_from(&known))
            .unwrap();
        assert_eq!(report.run_times, vec![0]);
    }

    #[test]
    fn test_mismatch_warns_and_continues() {
        let known = known();
        let report = Harness::new(ScriptedClock::new(vec![0, 7, 7, 9]))
            .runs(2)
            .run_with(&known, |table| table.reset())
            .unwrap();

        assert!(!report.verified());
        assert_eq!(
            report.verification,
            Err(Error::Mismatch {
                index: TableIndex::new(1, 1, SelectorRange::All, 1).flat(),
                expected: Solution { lo: 2, hi: 3, err: 4 },
                actual: Solution::UNSET,
            })
        );
        assert_eq!(report.best(), Some(2));
    }

    #[test]
    fn test_mismatch_fails_before_timing() {
        let known = known();
        let mut calls = 0;
        let result = Harness::new(ScriptedClock::new(vec![]))
            .policy(MismatchPolicy::Fail)
            .run_with(&known, |table| {
                calls += 1;
                table.reset();
            });

        assert!(matches!(result, Err(Error::Mismatch { .. })));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_zero_runs() {
        let known = known();
        let report = Harness::new(ScriptedClock::new(vec![]))
            .runs(0)
            .run_with(&known, |table| table.clone_from(&known))
            .unwrap();
        assert_eq!(report.best(), None);
    }
}
