//! Browser host for [`PageController`](crate::controller::PageController).
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web-sys` lives here: locating the required
//! elements, wiring listeners, measuring layout, owning timer handles and the
//! reveal observer, and applying controller effects to the DOM. Only built
//! with the `hydrate` feature.

mod elements;
mod host;
mod storage;

pub use elements::PageElements;
pub use host::mount;
pub use storage::LocalStore;
