//! Global state management for the admin filter panel using Leptos signals

#[cfg(feature = "csr")]
use leptos::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
use crate::cascade::{CascadeState, SelectOption};

/// Toast notification
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Toast {
  pub id: u32,
  pub message: String,
  pub level: ToastLevel,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastLevel {
  Info,
  Success,
  Warning,
  Error,
}

#[cfg(feature = "csr")]
/// Global application state with reactive signals
#[derive(Clone)]
pub struct AppState {
  /// Options of the top-level faculty control, sentinel first.
  pub faculties: RwSignal<Vec<SelectOption>>,
  /// Option sets of the two dependent controls.
  pub cascade: RwSignal<CascadeState>,
  pub toasts: RwSignal<Vec<Toast>>,
  pub toast_counter: RwSignal<u32>,
}

#[cfg(feature = "csr")]
impl AppState {
  pub fn new() -> Self {
    Self {
      faculties: create_rw_signal(vec![SelectOption::empty()]),
      cascade: create_rw_signal(CascadeState::new()),
      toasts: create_rw_signal(Vec::new()),
      toast_counter: create_rw_signal(0),
    }
  }

  pub fn show_toast(&self, message: &str, level: ToastLevel) {
    let id = self.toast_counter.get() + 1;
    self.toast_counter.set(id);
    self.toasts.update(|toasts| {
      toasts.push(Toast {
        id,
        message: message.to_string(),
        level,
      });
    });
  }

  pub fn remove_toast(&self, id: u32) {
    self.toasts.update(|toasts| {
      toasts.retain(|t| t.id != id);
    });
  }
}

#[cfg(feature = "csr")]
impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}
