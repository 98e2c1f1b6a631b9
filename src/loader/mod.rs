//! Catalog file loader
//!
//! Parses the comma-separated catalog format and builds a [`Catalog`]:
//!
//! ```text
//! CSCI300,Introduction to Algorithms,CSCI200,MATH201
//! CSCI350,Operating Systems,CSCI300
//! -1
//! ```
//!
//! Each line is `ID,Name[,Prereq...]`. A line holding `-1` ends the input.
//! Blank lines and empty prerequisite fields are skipped; fields are trimmed.
//!
//! Loads are atomic: a new catalog is built off to the side and only swapped
//! in by [`reload`] once every line has parsed.

pub mod errors;

pub use errors::{LoadError, Result};

use crate::catalog::{Catalog, Course};
use std::fs;
use std::path::Path;

/// Line that terminates the catalog input
pub const END_OF_INPUT: &str = "-1";

/// Default catalog file name, relative to the working directory
pub const DEFAULT_CATALOG_FILE: &str = "courses.txt";

/// Parse a single catalog line.
///
/// Returns `Ok(None)` for blank lines. `line_number` is 1-based and only used
/// for error reporting.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Course>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(',').map(str::trim);
    let id = fields.next().unwrap_or_default();
    let name = fields.next();

    match name {
        Some(name) if !id.is_empty() => {
            let prerequisites = fields.filter(|field| !field.is_empty());
            Ok(Some(Course::new(id, name, prerequisites)))
        }
        _ => Err(LoadError::MalformedLine {
            line: line_number,
            content: line.to_string(),
        }),
    }
}

/// Parse catalog text into records, in input order
pub fn parse_catalog(text: &str) -> Result<Vec<Course>> {
    let mut courses = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim() == END_OF_INPUT {
            break;
        }
        if let Some(course) = parse_line(line, index + 1)? {
            courses.push(course);
        }
    }

    if courses.is_empty() {
        return Err(LoadError::EmptyText);
    }

    Ok(courses)
}

/// Drive a fresh catalog through the full load sequence
pub fn build_catalog(courses: Vec<Course>) -> Catalog {
    let mut catalog = Catalog::new();
    for course in &courses {
        catalog.ingest(course.clone());
    }
    catalog.finalize(courses);
    catalog
}

/// Read and parse a catalog file into a new [`Catalog`]
pub fn load_file(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let courses = parse_catalog(&text).map_err(|e| match e {
        LoadError::EmptyText => LoadError::Empty {
            path: path.to_path_buf(),
        },
        other => other,
    })?;

    let catalog = build_catalog(courses);
    log::info!(
        "loaded {} course(s) from {}",
        catalog.sorted_all().len(),
        path.display()
    );
    Ok(catalog)
}

/// Replace `catalog` with the contents of `path`.
///
/// On error the existing catalog is left as it was. Returns the number of
/// records read, which can exceed the number of distinct courses when an
/// identifier repeats.
pub fn reload(catalog: &mut Catalog, path: &Path) -> Result<usize> {
    match load_file(path) {
        Ok(fresh) => {
            let records = fresh.sorted_all().len();
            *catalog = fresh;
            log::debug!("catalog replaced with {} record(s)", records);
            Ok(records)
        }
        Err(e) => {
            log::warn!("reload of {} failed: {}", path.display(), e);
            Err(e)
        }
    }
}
