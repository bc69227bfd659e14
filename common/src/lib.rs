//! Records and pure logic shared by the dashboard frontend and the proxy backend.
//!
//! Everything in this crate is plain data plus functions over it: the JSON shapes
//! exchanged with the remote bakery API, the order status table, corrected-order
//! arithmetic, search/pagination helpers and form validation. No I/O happens here.

pub mod format;
pub mod model;
pub mod pagination;
pub mod pricing;
pub mod requests;
pub mod search;
pub mod session;
pub mod status;
pub mod validation;
