//! Product catalog types.
//!
//! Records as the backend serves them; the catalog itself (storage,
//! CRUD, reporting) lives server-side.

mod product;

pub use product::Product;
