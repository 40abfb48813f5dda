pub mod state;

#[cfg(feature = "csr")]
pub mod apiclient;
#[cfg(feature = "csr")]
pub mod components;

#[cfg(feature = "csr")]
pub use components::App;
