//! Sequential replay of plans against the system under test.

use crate::core::{Configuration, Event};
use crate::coverage::{CoverageReport, CoverageTracker};
use crate::harness::adapters::{EventAction, StateCheck};
use crate::harness::error::{AdapterError, ReplayError};
use crate::harness::history::{ReplayHistory, ReplayStep};
use crate::explore::Path;
use crate::plan::Plan;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::Effect;

/// Outcome of running a batch of plans: every per-path failure collected,
/// plus the coverage achieved by whatever did run.
#[derive(Debug)]
pub struct RunReport {
    /// Per-path replay failures, in plan order. A failure aborts only the
    /// path it occurred on; the remaining plans still run.
    pub failures: Vec<ReplayError>,
    /// Coverage over the explored state space.
    pub coverage: CoverageReport,
}

impl RunReport {
    /// True iff nothing failed and every discovered configuration was
    /// visited.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.coverage.fully_covered
    }
}

/// Replays plans through injected adapters, strictly sequentially.
///
/// Executors and assertions are registered per event name and per state
/// name. Within a path each effect is awaited before the next event
/// fires; a failed assertion aborts the remaining steps of that path
/// only. The runner assumes sequential plan execution against a single
/// (reset or reused) system under test, which is what keeps context-based
/// coverage accounting meaningful.
///
/// `Env` is the handle to the system under test, supplied per run the
/// same way the machine's effects receive their environment.
pub struct PlanRunner<Env> {
    executors: HashMap<Event, EventAction<Env>>,
    assertions: HashMap<String, StateCheck<Env>>,
}

impl<Env> Default for PlanRunner<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Env> PlanRunner<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    /// Create a runner with no adapters registered.
    pub fn new() -> Self {
        Self {
            executors: HashMap::new(),
            assertions: HashMap::new(),
        }
    }

    /// Register the executor effect for an event.
    pub fn on_event<F>(mut self, event: impl Into<Event>, factory: F) -> Self
    where
        F: Fn() -> BoxedEffect<(), AdapterError, Env> + Send + Sync + 'static,
    {
        self.executors.insert(event.into(), Arc::new(factory));
        self
    }

    /// Register the assertion effect for a state.
    pub fn assert_state<F>(mut self, state: impl Into<String>, factory: F) -> Self
    where
        F: Fn(Configuration) -> BoxedEffect<(), AdapterError, Env> + Send + Sync + 'static,
    {
        self.assertions.insert(state.into(), Arc::new(factory));
        self
    }

    /// Replay one path: assert the initial configuration, then for each
    /// event execute it and assert the configuration after it, recording
    /// every visited configuration in the tracker.
    ///
    /// The first failure aborts the remaining steps of this path and
    /// reports the full event sequence fired plus the configuration where
    /// the divergence occurred.
    pub async fn run_path(
        &self,
        path: &Path,
        env: &Env,
        tracker: &mut CoverageTracker,
    ) -> Result<ReplayHistory, ReplayError> {
        let initial = path.initial();
        self.check_state(initial, &[], env).await?;
        tracker.record_visit(initial);

        let mut history = ReplayHistory::new();
        for (i, event) in path.events().iter().enumerate() {
            let fired = &path.events()[..=i];
            let expected = &path.configurations()[i + 1];

            self.fire_event(event, fired, expected, env).await?;
            self.check_state(expected, fired, env).await?;
            tracker.record_visit(expected);

            history = history.record(ReplayStep {
                event: event.clone(),
                configuration: expected.clone(),
                timestamp: Utc::now(),
            });
        }

        Ok(history)
    }

    /// Replay every path of a plan, in order.
    pub async fn run_plan(
        &self,
        plan: &Plan,
        env: &Env,
        tracker: &mut CoverageTracker,
    ) -> Result<Vec<ReplayHistory>, ReplayError> {
        let mut histories = Vec::with_capacity(plan.paths().len());
        for path in plan.paths() {
            histories.push(self.run_path(path, env, tracker).await?);
        }
        Ok(histories)
    }

    /// Replay a batch of plans, giving each a freshly-made environment.
    ///
    /// A failed plan is recorded and the remaining plans still run;
    /// coverage is computed over everything that executed.
    pub async fn run_all<F>(
        &self,
        plans: &[Plan],
        tracker: &mut CoverageTracker,
        mut make_env: F,
    ) -> RunReport
    where
        F: FnMut() -> Env,
    {
        let mut failures = Vec::new();
        for plan in plans {
            let env = make_env();
            if let Err(failure) = self.run_plan(plan, &env, tracker).await {
                failures.push(failure);
            }
        }

        RunReport {
            failures,
            coverage: tracker.compute(),
        }
    }

    async fn fire_event(
        &self,
        event: &Event,
        fired: &[Event],
        expected: &Configuration,
        env: &Env,
    ) -> Result<(), ReplayError> {
        let executor = self
            .executors
            .get(event)
            .ok_or_else(|| ReplayError::MissingExecutor {
                event: event.clone(),
            })?;

        executor().run(env).await.map_err(|source| ReplayError::Diverged {
            events: fired.to_vec(),
            expected: expected.clone(),
            source,
        })
    }

    async fn check_state(
        &self,
        expected: &Configuration,
        fired: &[Event],
        env: &Env,
    ) -> Result<(), ReplayError> {
        let assertion =
            self.assertions
                .get(expected.state())
                .ok_or_else(|| ReplayError::MissingAssertion {
                    state: expected.state().to_string(),
                })?;

        assertion(expected.clone())
            .run(env)
            .await
            .map_err(|source| ReplayError::Diverged {
                events: fired.to_vec(),
                expected: expected.clone(),
                source,
            })
    }
}
