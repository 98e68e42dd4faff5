//! Shared building blocks for the feature slices.

pub mod task;
pub mod text;
pub mod widgets;

pub use task::{TaskId, TaskSeq, TaskState};
pub use text::{mask_secret, truncate_with_ellipsis, wrap_lines};
