//! Cascading filter form: faculty -> department -> topic

use leptos::*;

use crate::admin::apiclient::HttpLookup;
use crate::admin::state::AppState;
use crate::cascade::{CascadeState, ChildLookup, ParentKind, SelectOption};

/// Reset the dependent control(s), then fetch and apply the new option set.
/// A stale response is discarded by the generation check inside
/// [`CascadeState::apply_children`], so nothing here cancels the request.
fn repopulate(cascade: RwSignal<CascadeState>, kind: ParentKind, parent_id: String) {
  let mut ticket = None;
  cascade.update(|c| ticket = c.parent_changed(kind, &parent_id));
  let Some(ticket) = ticket else {
    return;
  };
  spawn_local(async move {
    match HttpLookup.children(kind, &ticket.parent_id).await {
      Ok(records) => {
        cascade.update(|c| {
          c.apply_children(&ticket, records);
        });
      }
      Err(e) => {
        tracing::warn!(
          control = kind.dependent_name(),
          parent = %ticket.parent_id,
          error = %e,
          "child listing failed"
        );
      }
    }
  });
}

#[component]
pub fn CascadeFilters() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let faculties = state.faculties;
  let cascade = state.cascade;

  let on_faculty_change = move |ev: web_sys::Event| {
    repopulate(cascade, ParentKind::Faculty, event_target_value(&ev));
  };

  let on_department_change = move |ev: web_sys::Event| {
    repopulate(cascade, ParentKind::Department, event_target_value(&ev));
  };

  view! {
    <div class="filters-grid">
      <div class="filter-group">
        <label for="filter-faculty">"Faculty"</label>
        <select id="filter-faculty" name="faculty" on:change=on_faculty_change>
          <OptionList options=Signal::derive(move || faculties.get())/>
        </select>
      </div>
      <div class="filter-group">
        <label for="filter-department">"Department"</label>
        <select id="filter-department" name="department" on:change=on_department_change>
          <OptionList options=Signal::derive(move || cascade.get().departments().to_vec())/>
        </select>
      </div>
      <div class="filter-group">
        <label for="filter-topic">"Topic"</label>
        <select id="filter-topic" name="topic">
          <OptionList options=Signal::derive(move || cascade.get().topics().to_vec())/>
        </select>
      </div>
    </div>
  }
}

#[component]
fn OptionList(options: Signal<Vec<SelectOption>>) -> impl IntoView {
  view! {
    <For
      each=move || options.get()
      key=|o| o.id.clone()
      children=move |option| {
        view! { <option value=option.id.clone()>{option.label.clone()}</option> }
      }
    />
  }
}
