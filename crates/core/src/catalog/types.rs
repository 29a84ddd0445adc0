//! Tracker workflow data as returned by the transitions endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A status in the tracker's workflow graph.
///
/// `id` is the stable key; `name` is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl StatusRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for StatusRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status(id={}, name={})", self.id, self.name)
    }
}

/// An edge from the issue's current status to `to`, invoked by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub to: StatusRef,
}

impl Transition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, to: StatusRef) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            to,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transition(id={}, name={}, to={})",
            self.id, self.name, self.to
        )
    }
}

/// Transitions available from an issue's current status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transitions {
    pub transitions: Vec<Transition>,
}

impl Transitions {
    pub fn new(transitions: Vec<Transition>) -> Self {
        Self { transitions }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Transitions whose destination status id equals `to_status_id`.
    pub fn leading_to<'a>(&'a self, to_status_id: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.iter().filter(move |t| t.to.id == to_status_id)
    }
}

impl From<Vec<Transition>> for Transitions {
    fn from(transitions: Vec<Transition>) -> Self {
        Self::new(transitions)
    }
}

impl fmt::Display for Transitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, transition) in self.transitions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", transition)?;
        }
        f.write_str("]")
    }
}

/// A transition attempt against a specific issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionIntent {
    pub issue_key: String,
    pub transition: Transition,
}

impl TransitionIntent {
    pub fn new(issue_key: impl Into<String>, transition: Transition) -> Self {
        Self {
            issue_key: issue_key.into(),
            transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tracker_response() {
        let json = r#"{
            "expand": "transitions",
            "transitions": [
                {"id": "11", "name": "To Do", "to": {"id": "10000", "name": "To Do", "self": "x"}},
                {"id": "21", "name": "Start", "hasScreen": false, "to": {"id": "3", "name": "In Progress"}}
            ]
        }"#;
        let catalog: Transitions = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.transitions[1].id, "21");
        assert_eq!(catalog.transitions[1].to, StatusRef::new("3", "In Progress"));
    }

    #[test]
    fn test_deserialize_without_transitions_fails() {
        let result: Result<Transitions, _> = serde_json::from_str(r#"{"errorMessages": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_lists_every_transition() {
        let catalog = Transitions::new(vec![
            Transition::new("1", "Start", StatusRef::new("3", "In Progress")),
            Transition::new("2", "Finish", StatusRef::new("31", "Done")),
        ]);
        assert_eq!(
            catalog.to_string(),
            "[Transition(id=1, name=Start, to=Status(id=3, name=In Progress)), \
             Transition(id=2, name=Finish, to=Status(id=31, name=Done))]"
        );
        assert_eq!(Transitions::default().to_string(), "[]");
    }

    #[test]
    fn test_leading_to_filters_by_destination_id() {
        let catalog = Transitions::new(vec![
            Transition::new("1", "Done", StatusRef::new("31", "Done")),
            Transition::new("2", "Done", StatusRef::new("41", "Done")),
        ]);
        let ids: Vec<_> = catalog.leading_to("41").map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }
}
