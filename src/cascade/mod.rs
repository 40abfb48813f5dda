//! Cascading selector core.
//!
//! Keeps dependent selection controls (faculty -> department -> topic) in sync
//! with their parent's current selection. The state machine is framework-free
//! so the Leptos components under `crate::admin` can drive it in the browser
//! while tests drive it directly. Each dependent control carries a generation
//! counter: a response is applied only when no newer change event superseded
//! the request that produced it.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Value of the always-present "no selection" option.
pub const EMPTY_VALUE: &str = "";
/// Label of the always-present "no selection" option.
pub const EMPTY_LABEL: &str = "---------";

/// One entry of a selection control: opaque id plus display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
  pub id: String,
  pub label: String,
}

impl SelectOption {
  /// The "no selection" sentinel every control keeps as its first entry.
  pub fn empty() -> Self {
    Self {
      id: EMPTY_VALUE.to_string(),
      label: EMPTY_LABEL.to_string(),
    }
  }
}

impl From<ChildRecord> for SelectOption {
  fn from(record: ChildRecord) -> Self {
    Self {
      id: record.id.to_string(),
      label: record.name,
    }
  }
}

/// Row shape returned by the catalog listing endpoints.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ChildRecord {
  pub id: i64,
  pub name: String,
}

/// Which parent control changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParentKind {
  Faculty,
  Department,
}

impl ParentKind {
  /// Name attribute of the control this parent repopulates.
  pub fn dependent_name(&self) -> &'static str {
    match self {
      ParentKind::Faculty => "department",
      ParentKind::Department => "topic",
    }
  }
}

/// Failure modes of a child lookup. All of them are terminal: the dependent
/// control stays in its post-reset state and the error goes to the log.
#[derive(Debug, Error)]
pub enum LookupError {
  #[error("transport error: {0}")]
  Transport(String),
  #[error("unexpected status {0}")]
  Status(u16),
  #[error("malformed response: {0}")]
  Decode(String),
}

/// Backend read for dependent options. Injected so the controller can run
/// against the live endpoints in the browser or a scripted mock in tests.
#[async_trait(?Send)]
pub trait ChildLookup {
  async fn children(
    &self,
    parent: ParentKind,
    parent_id: &str,
  ) -> Result<Vec<ChildRecord>, LookupError>;
}

/// Handle tying an in-flight request to the change event that issued it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
  pub kind: ParentKind,
  pub parent_id: String,
  generation: u64,
}

/// Option sets of the two dependent controls plus one generation counter per
/// control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CascadeState {
  departments: Vec<SelectOption>,
  topics: Vec<SelectOption>,
  department_gen: u64,
  topic_gen: u64,
}

impl CascadeState {
  pub fn new() -> Self {
    Self {
      departments: vec![SelectOption::empty()],
      topics: vec![SelectOption::empty()],
      department_gen: 0,
      topic_gen: 0,
    }
  }

  /// Current options of the department control, sentinel first.
  pub fn departments(&self) -> &[SelectOption] {
    &self.departments
  }

  /// Current options of the topic control, sentinel first.
  pub fn topics(&self) -> &[SelectOption] {
    &self.topics
  }

  /// Synchronous half of a parent change: reset the direct dependent to the
  /// sentinel only (a faculty change also resets the topic control), bump the
  /// dependent's generation, and hand back a ticket when a fetch is needed.
  ///
  /// Selecting the empty option never issues a fetch; the affected controls
  /// stay sentinel-only.
  pub fn parent_changed(&mut self, kind: ParentKind, parent_id: &str) -> Option<FetchTicket> {
    let generation = match kind {
      ParentKind::Faculty => {
        self.departments = vec![SelectOption::empty()];
        self.department_gen += 1;
        // The grandchild is invalidated too; bumping its generation keeps a
        // late topic response from an earlier department selection out.
        self.topics = vec![SelectOption::empty()];
        self.topic_gen += 1;
        self.department_gen
      }
      ParentKind::Department => {
        self.topics = vec![SelectOption::empty()];
        self.topic_gen += 1;
        self.topic_gen
      }
    };
    if parent_id == EMPTY_VALUE {
      return None;
    }
    Some(FetchTicket {
      kind,
      parent_id: parent_id.to_string(),
      generation,
    })
  }

  /// Asynchronous half: append the fetched records, in response order, after
  /// the sentinel. Returns `false` and leaves the control untouched when a
  /// newer change superseded the request that produced `ticket`.
  pub fn apply_children(&mut self, ticket: &FetchTicket, records: Vec<ChildRecord>) -> bool {
    let (target, current) = match ticket.kind {
      ParentKind::Faculty => (&mut self.departments, self.department_gen),
      ParentKind::Department => (&mut self.topics, self.topic_gen),
    };
    if ticket.generation != current {
      tracing::debug!(
        control = ticket.kind.dependent_name(),
        parent = %ticket.parent_id,
        "discarding stale child listing"
      );
      return false;
    }
    target.extend(records.into_iter().map(SelectOption::from));
    true
  }
}

impl Default for CascadeState {
  fn default() -> Self {
    Self::new()
  }
}

/// Drives one change event end to end: synchronous reset, backend read,
/// stale-safe apply. Lookup failures are logged and leave the dependent in
/// its post-reset state; nothing propagates to the caller.
pub struct CascadeController<L> {
  state: CascadeState,
  lookup: L,
}

impl<L: ChildLookup> CascadeController<L> {
  pub fn new(lookup: L) -> Self {
    Self {
      state: CascadeState::new(),
      lookup,
    }
  }

  pub fn state(&self) -> &CascadeState {
    &self.state
  }

  pub fn lookup(&self) -> &L {
    &self.lookup
  }

  pub async fn parent_changed(&mut self, kind: ParentKind, parent_id: &str) {
    let Some(ticket) = self.state.parent_changed(kind, parent_id) else {
      return;
    };
    match self.lookup.children(kind, &ticket.parent_id).await {
      Ok(records) => {
        self.state.apply_children(&ticket, records);
      }
      Err(err) => {
        tracing::warn!(
          control = kind.dependent_name(),
          parent = %ticket.parent_id,
          error = %err,
          "child listing failed"
        );
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn records(rows: &[(i64, &str)]) -> Vec<ChildRecord> {
    rows
      .iter()
      .map(|(id, name)| ChildRecord {
        id: *id,
        name: name.to_string(),
      })
      .collect()
  }

  fn ids(options: &[SelectOption]) -> Vec<&str> {
    options.iter().map(|o| o.id.as_str()).collect()
  }

  fn labels(options: &[SelectOption]) -> Vec<&str> {
    options.iter().map(|o| o.label.as_str()).collect()
  }

  #[test]
  fn test_faculty_selection_populates_departments() {
    let mut state = CascadeState::new();

    let ticket = state.parent_changed(ParentKind::Faculty, "1").unwrap();
    // Reset happens before the response lands
    assert_eq!(ids(state.departments()), vec![""]);
    assert_eq!(ids(state.topics()), vec![""]);

    assert!(state.apply_children(&ticket, records(&[(10, "Physics"), (11, "Chemistry")])));
    assert_eq!(ids(state.departments()), vec!["", "10", "11"]);
    assert_eq!(
      labels(state.departments()),
      vec!["---------", "Physics", "Chemistry"]
    );
    assert_eq!(labels(state.topics()), vec!["---------"]);
  }

  #[test]
  fn test_empty_selection_clears_without_ticket() {
    let mut state = CascadeState::new();
    let ticket = state.parent_changed(ParentKind::Faculty, "1").unwrap();
    state.apply_children(&ticket, records(&[(10, "Physics")]));

    assert!(state.parent_changed(ParentKind::Faculty, "").is_none());
    assert_eq!(ids(state.departments()), vec![""]);
    assert_eq!(ids(state.topics()), vec![""]);
  }

  #[test]
  fn test_faculty_change_resets_topics() {
    let mut state = CascadeState::new();
    let ticket = state.parent_changed(ParentKind::Department, "10").unwrap();
    state.apply_children(&ticket, records(&[(100, "Mechanics"), (101, "Optics")]));
    assert_eq!(ids(state.topics()), vec!["", "100", "101"]);

    state.parent_changed(ParentKind::Faculty, "2");
    assert_eq!(ids(state.topics()), vec![""]);
  }

  #[test]
  fn test_response_order_preserved() {
    let mut state = CascadeState::new();
    let ticket = state.parent_changed(ParentKind::Department, "10").unwrap();
    state.apply_children(&ticket, records(&[(3, "c"), (1, "a"), (2, "b")]));
    assert_eq!(ids(state.topics()), vec!["", "3", "1", "2"]);
  }

  #[test]
  fn test_stale_response_discarded() {
    let mut state = CascadeState::new();
    let first = state.parent_changed(ParentKind::Faculty, "1").unwrap();
    let second = state.parent_changed(ParentKind::Faculty, "2").unwrap();

    // The superseded response must not land
    assert!(!state.apply_children(&first, records(&[(10, "Physics")])));
    assert_eq!(ids(state.departments()), vec![""]);

    assert!(state.apply_children(&second, records(&[(20, "History")])));
    assert_eq!(ids(state.departments()), vec!["", "20"]);
  }

  #[test]
  fn test_faculty_change_invalidates_pending_topic_fetch() {
    let mut state = CascadeState::new();
    let topic_ticket = state.parent_changed(ParentKind::Department, "10").unwrap();

    state.parent_changed(ParentKind::Faculty, "2");
    assert!(!state.apply_children(&topic_ticket, records(&[(100, "Mechanics")])));
    assert_eq!(ids(state.topics()), vec![""]);
  }

  #[test]
  fn test_reselecting_same_parent_is_idempotent() {
    let mut state = CascadeState::new();
    let rows = [(10, "Physics"), (11, "Chemistry")];

    let first = state.parent_changed(ParentKind::Faculty, "1").unwrap();
    state.apply_children(&first, records(&rows));
    let after_first = state.departments().to_vec();

    let second = state.parent_changed(ParentKind::Faculty, "1").unwrap();
    state.apply_children(&second, records(&rows));
    assert_eq!(state.departments(), after_first.as_slice());
  }

  #[test]
  fn test_child_record_decodes_backend_row() {
    let rows: Vec<ChildRecord> =
      serde_json::from_str(r#"[{"id": 10, "name": "Physics"}, {"id": 11, "name": "Chemistry"}]"#)
        .unwrap();
    assert_eq!(rows, records(&[(10, "Physics"), (11, "Chemistry")]));
  }
}
