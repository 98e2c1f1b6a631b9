//! # Introduction
//!
//! courseplan loads a course catalog, indexes it for case-insensitive lookup,
//! models prerequisites as a directed graph, and lists courses in a stable,
//! deterministic order. The catalog is browsed through a terminal UI built
//! with [ratatui](https://docs.rs/ratatui) or through a numbered console menu.
//!
//! ## Load pipeline
//!
//! ```text
//! courses.txt → Loader → Course records → CourseStore + PrerequisiteGraph
//!             → merge sort → UI / Menu
//! ```
//!
//! 1. [`loader`] — parses `ID,Name[,Prereq...]` lines and builds a fresh
//!    [`catalog::Catalog`], swapping it in only when the whole file parsed.
//! 2. [`catalog`] — the engine: [`catalog::CourseStore`],
//!    [`catalog::PrerequisiteGraph`] and the stable merge sort in
//!    [`catalog::sort`].
//! 3. [`display`] — plain-text course blocks for the console.
//! 4. [`menu`] — the numbered console menu.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Availability rule
//!
//! [`catalog::Catalog::available_after`] reports a dependent as unlocked only
//! when its whole prerequisite list is the single completed course. Courses
//! with several distinct prerequisites are never reported.

pub mod catalog;
pub mod display;
pub mod loader;
pub mod menu;
pub mod ui;
