//! Transition policy for repeated start and end requests.

use serde::{Deserialize, Serialize};

/// How the store treats a start on a working employee or an end on an idle one.
///
/// # Example
///
/// ```
/// use shift_tracker::store::TransitionPolicy;
///
/// assert_eq!(TransitionPolicy::default(), TransitionPolicy::Idempotent);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Repeated requests are ignored. A double click cannot corrupt state.
    #[default]
    Idempotent,
    /// Repeated requests fail with `InvalidStateTransition`.
    Strict,
}
