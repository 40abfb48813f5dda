// Cascading selector core (framework-free, always compiled)
pub mod cascade;

// Admin module (CSR components depending on feature)
pub mod admin;
