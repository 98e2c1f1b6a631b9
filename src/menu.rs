//! Numbered console menu
//!
//! The line-oriented front-end: it reads one answer per line from any
//! [`BufRead`] and writes prompts and results to any [`Write`], so whole
//! sessions can be replayed from a string in tests.

use crate::catalog::Catalog;
use crate::display::{course_label, format_course, format_course_list};
use crate::loader::{self, LoadError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Load,
    PrintList,
    PrintCourse,
    PrintUnlocked,
    Exit,
}

impl MenuOption {
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuOption::Load),
            2 => Some(MenuOption::PrintList),
            3 => Some(MenuOption::PrintCourse),
            4 => Some(MenuOption::Exit),
            5 => Some(MenuOption::PrintUnlocked),
            _ => None,
        }
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    catalog: Catalog,
    catalog_path: PathBuf,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, catalog_path: impl Into<PathBuf>) -> Self {
        Menu {
            input,
            output,
            catalog: Catalog::new(),
            catalog_path: catalog_path.into(),
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the course planner.")?;
        writeln!(self.output)?;

        loop {
            self.print_options()?;
            write!(self.output, "What would you like to do? ")?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                break;
            };
            writeln!(self.output)?;

            let choice = answer.parse::<u32>().ok().and_then(MenuOption::from_number);
            match choice {
                Some(MenuOption::Exit) => break,
                Some(MenuOption::Load) => self.load()?,
                Some(MenuOption::PrintList) => self.print_list()?,
                Some(MenuOption::PrintCourse) => self.print_course()?,
                Some(MenuOption::PrintUnlocked) => self.print_unlocked()?,
                None => writeln!(self.output, "{} is not a valid option.", answer)?,
            }
        }

        writeln!(self.output, "Thank you for using the course planner!")?;
        Ok(())
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "\t 1. Load Data Structure.")?;
        writeln!(self.output, "\t 2. Print Course List.")?;
        writeln!(self.output, "\t 3. Print Course.")?;
        writeln!(self.output, "\t 4. Exit")?;
        writeln!(self.output, "\t 5. Print Courses Unlocked By.")?;
        writeln!(self.output)
    }

    /// Next trimmed line, or `None` at end of input
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let answer = self.read_answer()?;
        writeln!(self.output)?;
        Ok(answer)
    }

    fn load(&mut self) -> io::Result<()> {
        match loader::reload(&mut self.catalog, &self.catalog_path) {
            Ok(_) => writeln!(self.output, "Data successfully loaded.\n"),
            Err(LoadError::Io { .. }) => writeln!(
                self.output,
                "Could not access courses file. Please check if loaded properly."
            ),
            Err(LoadError::Empty { .. } | LoadError::EmptyText) => {
                writeln!(self.output, "Courses file appears to be empty.")
            }
            Err(e @ LoadError::MalformedLine { .. }) => {
                writeln!(self.output, "Could not load courses: {}", e)
            }
        }
    }

    fn print_list(&mut self) -> io::Result<()> {
        if self.catalog.sorted_all().is_empty() {
            return writeln!(self.output, "No courses loaded. Please load data first.\n");
        }
        let listing = format_course_list(self.catalog.sorted_all());
        write!(self.output, "{}", listing)
    }

    fn print_course(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("What course do you want to know about? ")? else {
            return Ok(());
        };

        if !self.catalog.is_loaded() {
            return writeln!(self.output, "Please load courses first.");
        }

        match self.catalog.lookup(&id) {
            Some(course) => {
                let block = format_course(course);
                write!(self.output, "{}", block)
            }
            None => writeln!(self.output, "Course {} not found.\n", id),
        }
    }

    fn print_unlocked(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Which course was completed? ")? else {
            return Ok(());
        };

        if !self.catalog.is_loaded() {
            return writeln!(self.output, "Please load courses first.");
        }

        let unlocked = self.catalog.available_after(&id);
        if unlocked.is_empty() {
            return writeln!(self.output, "No courses are unlocked by {}.\n", id);
        }

        writeln!(self.output, "Courses unlocked by {}:", id)?;
        for key in &unlocked {
            let label = course_label(&self.catalog, key);
            writeln!(self.output, "  {}", label)?;
        }
        writeln!(self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str, path: &str) -> String {
        let mut output = Vec::new();
        let mut menu = Menu::new(Cursor::new(input.to_string()), &mut output, path);
        menu.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_option_numbers() {
        assert_eq!(MenuOption::from_number(1), Some(MenuOption::Load));
        assert_eq!(MenuOption::from_number(4), Some(MenuOption::Exit));
        assert_eq!(MenuOption::from_number(5), Some(MenuOption::PrintUnlocked));
        assert_eq!(MenuOption::from_number(9), None);
        assert_eq!(MenuOption::from_number(0), None);
    }

    #[test]
    fn test_exit_immediately() {
        let out = run_session("4\n", "data/courses.txt");
        assert!(out.starts_with("Welcome to the course planner.\n"));
        assert!(out.ends_with("Thank you for using the course planner!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = run_session("", "data/courses.txt");
        assert!(out.ends_with("Thank you for using the course planner!\n"));
    }

    #[test]
    fn test_invalid_option() {
        let out = run_session("7\nabc\n9\n4\n", "data/courses.txt");
        assert!(out.contains("7 is not a valid option."));
        assert!(out.contains("abc is not a valid option."));
        assert!(out.contains("9 is not a valid option."));
    }

    #[test]
    fn test_queries_before_load() {
        let out = run_session("2\n3\nCSCI100\n5\nCSCI100\n4\n", "data/courses.txt");
        assert!(out.contains("No courses loaded. Please load data first."));
        assert_eq!(out.matches("Please load courses first.").count(), 2);
    }

    #[test]
    fn test_missing_file() {
        let out = run_session("1\n4\n", "does/not/exist.txt");
        assert!(out.contains("Could not access courses file. Please check if loaded properly."));
    }
}
