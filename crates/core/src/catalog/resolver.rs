use thiserror::Error;

use super::{Transition, Transitions};

/// Why a catalog could not be narrowed to a single transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No edge leads to the target, e.g. the issue is already past it.
    #[error("no matching transition to status {to_status_id}, available transitions: {available}")]
    NoMatchingTransition {
        to_status_id: String,
        available: Transitions,
    },

    /// Several edges lead to the target; the tracker workflow is misconfigured.
    #[error("more than one transition to status {to_status_id}, matching transitions: {matches}")]
    AmbiguousTransition {
        to_status_id: String,
        matches: Transitions,
    },
}

/// Select the single transition whose destination is `to_status_id`.
///
/// Never falls back to the first of several matches.
pub fn resolve(catalog: &Transitions, to_status_id: &str) -> Result<Transition, ResolveError> {
    let mut matches: Vec<Transition> = catalog.leading_to(to_status_id).cloned().collect();

    match matches.len() {
        0 => Err(ResolveError::NoMatchingTransition {
            to_status_id: to_status_id.to_string(),
            available: catalog.clone(),
        }),
        1 => Ok(matches.remove(0)),
        _ => Err(ResolveError::AmbiguousTransition {
            to_status_id: to_status_id.to_string(),
            matches: Transitions::new(matches),
        }),
    }
}

impl Transitions {
    /// See [`resolve`].
    pub fn resolve(&self, to_status_id: &str) -> Result<Transition, ResolveError> {
        resolve(self, to_status_id)
    }
}
