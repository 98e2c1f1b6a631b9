//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`courses`]: Sorted course listing with the selection cursor
//! - [`details`]: Prerequisites and dependents of the selected course
//! - [`unlocks`]: Courses unlocked by completing the selected course
//! - [`status`]: Status bar with keybindings and catalog state
//! - `utils`: Shared border and scroll helpers
//!
//! Each pane module exports a primary `render_*` function; panes never mutate
//! the catalog, only their own scroll offsets.

mod utils;

pub mod courses;
pub mod details;
pub mod status;
pub mod unlocks;

// Re-export render functions for convenience
pub use courses::render_course_list;
pub use details::{render_details_pane, DetailsRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use unlocks::render_unlocks_pane;
