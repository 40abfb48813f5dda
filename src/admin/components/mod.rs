//! Admin UI Components

use crate::admin::apiclient;
use crate::admin::state::{AppState, ToastLevel};
use crate::cascade::SelectOption;
use leptos::*;

mod filters;
mod toast;

pub use filters::CascadeFilters;
pub use toast::ToastContainer;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
  // Create global state
  let state = AppState::new();
  provide_context(state.clone());

  // Fill the top-level control once on startup
  let state_init = state.clone();
  create_effect(move |_| {
    let state = state_init.clone();
    spawn_local(async move {
      match apiclient::fetch_faculties().await {
        Ok(records) => {
          state.faculties.update(|options| {
            options.extend(records.into_iter().map(SelectOption::from));
          });
        }
        Err(e) => {
          state.show_toast(&format!("Failed to load faculties: {}", e), ToastLevel::Error);
        }
      }
    });
  });

  view! {
    <div class="app-container">
      <main class="content">
        <section class="page active">
          <div class="page-header">
            <h2>"Catalog Filters"</h2>
          </div>
          <CascadeFilters/>
        </section>
      </main>
      <ToastContainer/>
    </div>
  }
}
