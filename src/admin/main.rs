//! CSR entry point for the admin filter panel

use catalog_admin::admin::App;
use leptos::*;

fn main() {
  console_error_panic_hook::set_once();
  mount_to_body(|| view! { <App/> });
}
