//! Main TUI application state and logic

use crate::catalog::{Catalog, Course};
use crate::loader;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Courses,
    Details,
    Unlocks,
}

impl FocusedPane {
    /// Move focus to the next pane (courses -> details -> unlocks)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Courses => FocusedPane::Details,
            FocusedPane::Details => FocusedPane::Unlocks,
            FocusedPane::Unlocks => FocusedPane::Courses,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Courses => FocusedPane::Unlocks,
            FocusedPane::Details => FocusedPane::Courses,
            FocusedPane::Unlocks => FocusedPane::Details,
        }
    }
}

/// Whether keystrokes drive navigation or edit the search prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// The main application state
pub struct App {
    /// The loaded catalog (possibly empty)
    pub catalog: Catalog,

    /// File read by the reload key
    pub catalog_path: PathBuf,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index into the sorted course listing
    pub selected: usize,

    /// Per-pane scroll offsets
    pub details_scroll: usize,
    pub unlocks_scroll: usize,

    pub input_mode: InputMode,

    /// Text typed after `/`
    pub search_input: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Render the status message as an error
    pub status_is_error: bool,
}

impl App {
    /// Create a new app over an already loaded (or empty) catalog
    pub fn new(catalog: Catalog, catalog_path: impl Into<PathBuf>) -> Self {
        let catalog_path = catalog_path.into();
        let status_message = if catalog.is_loaded() {
            String::from("Ready!")
        } else {
            format!("No courses loaded. Press r to load {}", catalog_path.display())
        };

        App {
            catalog,
            catalog_path,
            focused_pane: FocusedPane::Courses,
            selected: 0,
            details_scroll: 0,
            unlocks_scroll: 0,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            should_quit: false,
            status_message,
            status_is_error: false,
        }
    }

    /// Replace the status message with an error
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    /// Course under the selection cursor
    pub fn selected_course(&self) -> Option<&Course> {
        self.catalog.sorted_all().get(self.selected)
    }

    /// Rows in the course listing, duplicate identifiers included
    pub fn course_count(&self) -> usize {
        self.catalog.sorted_all().len()
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(pane_area);

        // Right column: Details (top) | Unlocks (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        super::panes::render_course_list(
            frame,
            columns[0],
            self.catalog.sorted_all(),
            self.selected,
            self.focused_pane == FocusedPane::Courses,
        );

        let selected = self.catalog.sorted_all().get(self.selected);

        super::panes::render_details_pane(
            frame,
            right_rows[0],
            super::panes::DetailsRenderData {
                catalog: &self.catalog,
                course: selected,
            },
            self.focused_pane == FocusedPane::Details,
            &mut self.details_scroll,
        );

        super::panes::render_unlocks_pane(
            frame,
            right_rows[1],
            &self.catalog,
            selected,
            self.focused_pane == FocusedPane::Unlocks,
            &mut self.unlocks_scroll,
        );

        let search = match self.input_mode {
            InputMode::Search => Some(self.search_input.as_str()),
            InputMode::Normal => None,
        };

        super::panes::render_status_bar(
            frame,
            status_area,
            &super::panes::StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                course_count: self.course_count(),
                is_loaded: self.catalog.is_loaded(),
                search,
            },
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Search => self.handle_search_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Courses => {
                    if self.selected > 0 {
                        self.select(self.selected - 1);
                    }
                }
                FocusedPane::Details => {
                    self.details_scroll = self.details_scroll.saturating_sub(1);
                }
                FocusedPane::Unlocks => {
                    self.unlocks_scroll = self.unlocks_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Courses => {
                    if self.selected + 1 < self.catalog.sorted_all().len() {
                        self.select(self.selected + 1);
                    }
                }
                FocusedPane::Details => {
                    self.details_scroll = self.details_scroll.saturating_add(1);
                }
                FocusedPane::Unlocks => {
                    self.unlocks_scroll = self.unlocks_scroll.saturating_add(1);
                }
            },
            KeyCode::Home => self.select(0),
            KeyCode::End => {
                let last = self.catalog.sorted_all().len().saturating_sub(1);
                self.select(last);
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.search_input.clear();
                self.set_status("Search: type a course number, Enter to jump, Esc to cancel");
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reload(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.search_input.clear();
                self.set_status("Search cancelled");
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                let query = std::mem::take(&mut self.search_input);
                let query = query.trim();
                if !query.is_empty() {
                    self.jump_to(query);
                }
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
            }
            _ => {}
        }
    }

    fn select(&mut self, index: usize) {
        if index != self.selected {
            self.details_scroll = 0;
            self.unlocks_scroll = 0;
        }
        self.selected = index;
    }

    /// Move the selection to `id` using a case-insensitive lookup
    fn jump_to(&mut self, id: &str) {
        if !self.catalog.is_loaded() {
            self.set_error("Please load courses first.");
            return;
        }

        let position = self.catalog.lookup(id).and_then(|course| {
            self.catalog
                .sorted_all()
                .iter()
                .rposition(|c| c.id() == course.id())
        });

        match position {
            Some(index) => {
                self.select(index);
                self.focused_pane = FocusedPane::Courses;
                let found = self.catalog.sorted_all()[index].id().to_string();
                self.set_status(format!("Found {}", found));
            }
            None => self.set_error(format!("Course {} not found.", id)),
        }
    }

    /// Reload the catalog file, keeping the current catalog on failure
    fn reload(&mut self) {
        match loader::reload(&mut self.catalog, &self.catalog_path) {
            Ok(records) => {
                let last = self.catalog.sorted_all().len().saturating_sub(1);
                self.select(self.selected.min(last));
                self.set_status(format!(
                    "Loaded {} course(s) from {}",
                    records,
                    self.catalog_path.display()
                ));
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::build_catalog;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_app() -> App {
        let catalog = build_catalog(vec![
            Course::new("CSCI200", "Data Structures", ["CSCI101"]),
            Course::new("CSCI100", "Intro", Vec::<String>::new()),
            Course::new("CSCI101", "Programming", ["CSCI100"]),
        ]);
        App::new(catalog, "does/not/exist.txt")
    }

    fn type_search(app: &mut App, text: &str) {
        app.handle_key_event(key(KeyCode::Char('/')));
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        app.handle_key_event(key(KeyCode::Enter));
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(FocusedPane::Courses.next(), FocusedPane::Details);
        assert_eq!(FocusedPane::Unlocks.next(), FocusedPane::Courses);
        assert_eq!(FocusedPane::Courses.prev(), FocusedPane::Unlocks);
        assert_eq!(FocusedPane::Courses.next().prev(), FocusedPane::Courses);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = sample_app();
        assert_eq!(app.selected_course().map(Course::id), Some("CSCI100"));

        app.handle_key_event(key(KeyCode::Up));
        assert_eq!(app.selected, 0);

        for _ in 0..5 {
            app.handle_key_event(key(KeyCode::Down));
        }
        assert_eq!(app.selected, 2);
        assert_eq!(app.selected_course().map(Course::id), Some("CSCI200"));

        app.handle_key_event(key(KeyCode::Home));
        assert_eq!(app.selected, 0);
        app.handle_key_event(key(KeyCode::End));
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_arrows_scroll_focused_pane() {
        let mut app = sample_app();
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.focused_pane, FocusedPane::Details);

        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.details_scroll, 2);
        assert_eq!(app.selected, 0);

        app.handle_key_event(key(KeyCode::BackTab));
        app.handle_key_event(key(KeyCode::Down));
        // changing course resets the detail scroll
        assert_eq!(app.details_scroll, 0);
    }

    #[test]
    fn test_search_jumps_case_insensitively() {
        let mut app = sample_app();
        app.focused_pane = FocusedPane::Unlocks;

        type_search(&mut app, "csci101");

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.selected_course().map(Course::id), Some("CSCI101"));
        assert_eq!(app.focused_pane, FocusedPane::Courses);
        assert_eq!(app.status_message, "Found CSCI101");
        assert!(!app.status_is_error);
    }

    #[test]
    fn test_search_miss_and_cancel() {
        let mut app = sample_app();

        type_search(&mut app, "MATH201");
        assert!(app.status_is_error);
        assert_eq!(app.status_message, "Course MATH201 not found.");
        assert_eq!(app.selected, 0);

        app.handle_key_event(key(KeyCode::Char('/')));
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.search_input, "q");
        app.handle_key_event(key(KeyCode::Backspace));
        assert!(app.search_input.is_empty());
        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_failed_reload_keeps_catalog() {
        let mut app = sample_app();
        app.handle_key_event(key(KeyCode::Char('r')));

        assert!(app.status_is_error);
        assert_eq!(app.catalog.len(), 3);
        assert!(app.catalog.lookup("CSCI200").is_some());
    }

    #[test]
    fn test_successful_reload_replaces_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.txt");
        let text = "MATH201,Discrete Mathematics\nCSCI300,Algorithms,MATH201\n";
        std::fs::write(&path, text).unwrap();

        let mut app = sample_app();
        app.catalog_path = path.clone();
        app.handle_key_event(key(KeyCode::End));
        app.handle_key_event(key(KeyCode::Tab));
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.selected, 2);
        assert_eq!(app.details_scroll, 1);

        app.handle_key_event(key(KeyCode::Char('r')));

        assert!(!app.status_is_error);
        assert_eq!(
            app.status_message,
            format!("Loaded 2 course(s) from {}", path.display())
        );
        assert!(app.catalog.lookup("CSCI100").is_none());
        assert_eq!(app.catalog.len(), 2);
        // selection clamps to the last row of the shorter listing
        assert_eq!(app.selected, 1);
        assert_eq!(app.selected_course().map(Course::id), Some("MATH201"));
        assert_eq!(app.details_scroll, 0);
    }

    #[test]
    fn test_course_count_matches_listing() {
        let catalog = build_catalog(vec![
            Course::new("CSCI100", "Intro", Vec::<String>::new()),
            Course::new("csci100", "Intro again", Vec::<String>::new()),
        ]);
        let app = App::new(catalog, "courses.txt");

        assert_eq!(app.catalog.len(), 1);
        assert_eq!(app.course_count(), app.catalog.sorted_all().len());
        assert_eq!(app.course_count(), 2);
    }

    #[test]
    fn test_empty_catalog_prompts_for_load() {
        let mut app = App::new(Catalog::new(), "courses.txt");
        assert!(app.status_message.contains("Press r to load courses.txt"));
        assert!(app.selected_course().is_none());

        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::End));
        assert_eq!(app.selected, 0);

        type_search(&mut app, "CSCI100");
        assert_eq!(app.status_message, "Please load courses first.");
    }

    #[test]
    fn test_quit() {
        let mut app = sample_app();
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
