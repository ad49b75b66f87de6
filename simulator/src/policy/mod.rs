//! Selection policies
//!
//! Two deliberately quirky behaviors are kept behind narrow trait seams so
//! they can be substituted without touching the engine:
//!
//! 1. **Lane selection**: which lane queue feeds the intake on an assign
//!    tick. The default, [`ExpeditedFirst`], drains the expedited queue
//!    before ever touching the regular one. It provides no fairness
//!    guarantee and can starve the regular lane under sustained load.
//! 2. **Agent selection**: which idle agent serves the intake head on a
//!    dispatch tick. The default, [`FirstIdle`], takes the first idle agent
//!    in fixed pool order; it is neither least-recently-used nor balanced.
//!
//! Both defaults are the modeled behavior. Substituting either changes
//! observable timings, so alternatives belong to intentional experiments
//! only.

use crate::models::agent::ScreeningAgent;
use crate::models::passenger::Lane;
use crate::models::router::QueueRouter;

/// Chooses which lane queue yields the next passenger for the intake.
pub trait LaneSelector {
    /// Lane to pull from, or `None` when both queues are empty.
    fn next_lane(&self, router: &QueueRouter) -> Option<Lane>;
}

/// Strict expedited-priority lane selection (default).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpeditedFirst;

impl LaneSelector for ExpeditedFirst {
    fn next_lane(&self, router: &QueueRouter) -> Option<Lane> {
        if router.queue_len(Lane::Expedited) > 0 {
            Some(Lane::Expedited)
        } else if router.queue_len(Lane::Regular) > 0 {
            Some(Lane::Regular)
        } else {
            None
        }
    }
}

/// Chooses which agent serves the next dispatched passenger.
pub trait AgentSelector {
    /// Pool index of the chosen idle agent, or `None` if all are busy.
    fn select(&self, agents: &[ScreeningAgent]) -> Option<usize>;
}

/// First idle agent in fixed pool order (default).
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstIdle;

impl AgentSelector for FirstIdle {
    fn select(&self, agents: &[ScreeningAgent]) -> Option<usize> {
        agents.iter().position(|agent| !agent.is_busy())
    }
}
