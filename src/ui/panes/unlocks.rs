//! Unlocked-courses pane

use super::utils::{clamp_scroll, pane_block, visible_rows};
use crate::catalog::{Catalog, Course};
use crate::display::course_label;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the courses unlocked by completing `course`
pub fn render_unlocks_pane(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    course: Option<&Course>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match course {
        Some(course) => format!(" Unlocked By {} ", course.id()),
        None => " Unlocked Courses ".to_string(),
    };
    let block = pane_block(title, is_focused);

    let unlocked = course
        .map(|course| catalog.available_after(course.id()))
        .unwrap_or_default();

    if unlocked.is_empty() {
        let paragraph = Paragraph::new("(nothing unlocked)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = visible_rows(area);
    clamp_scroll(scroll_offset, unlocked.len(), visible_height);

    let items: Vec<ListItem> = unlocked
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|key| {
            ListItem::new(course_label(catalog, key))
                .style(Style::default().fg(DEFAULT_THEME.success))
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
