//! Course listing pane

use super::utils::pane_block;
use crate::catalog::Course;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the sorted course listing with `selected` highlighted
pub fn render_course_list(
    frame: &mut Frame,
    area: Rect,
    courses: &[Course],
    selected: usize,
    is_focused: bool,
) {
    let block = pane_block(format!(" Courses ({}) ", courses.len()), is_focused);

    if courses.is_empty() {
        let paragraph = Paragraph::new("(no courses loaded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = courses
        .iter()
        .map(|course| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", course.id()),
                    Style::default().fg(DEFAULT_THEME.course_id),
                ),
                Span::styled(course.name(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.selection_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(selected.min(courses.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}
