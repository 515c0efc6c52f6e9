//! The grouped-sorted view transform.
//!
//! Pure derivation from (ticket sequence, display options) to the
//! column layout the render layers consume, plus an explicit memo so
//! unrelated re-renders skip the recompute.

pub mod cache;
pub mod columns;
pub mod transform;

pub use cache::TransformCache;
pub use columns::{ColumnViewModel, build_columns};
pub use transform::{BoardView, TicketGroup, transform};
