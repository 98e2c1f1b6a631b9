//! Course detail pane
//!
//! Shows the selected course, its prerequisites (dangling ones flagged as not
//! in the catalog) and the courses that list it as a prerequisite.

use super::utils::{clamp_scroll, pane_block, visible_rows};
use crate::catalog::{Catalog, Course};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

/// Data needed to render the details pane
pub struct DetailsRenderData<'a> {
    pub catalog: &'a Catalog,
    pub course: Option<&'a Course>,
}

/// Render the details pane
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    data: DetailsRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Details ".to_string(), is_focused);

    if data.course.is_none() {
        let paragraph = Paragraph::new("(no course selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = detail_lines(&data);

    clamp_scroll(scroll_offset, lines.len(), visible_rows(area));

    let paragraph = Paragraph::new(lines)
        .block(block.padding(Padding::new(1, 0, 0, 0)))
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Build the styled lines for the selected course
pub(crate) fn detail_lines(data: &DetailsRenderData) -> Vec<Line<'static>> {
    let Some(course) = data.course else {
        return Vec::new();
    };

    let heading = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(DEFAULT_THEME.comment);

    let mut lines = vec![
        Line::from(Span::styled(
            course.id().to_string(),
            Style::default()
                .fg(DEFAULT_THEME.course_id)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            course.name().to_string(),
            Style::default().fg(DEFAULT_THEME.course_name),
        )),
        Line::default(),
        Line::from(Span::styled("Prerequisites", heading)),
    ];

    if !course.has_prerequisites() {
        lines.push(Line::from(Span::styled("  No prerequisites", muted)));
    }

    for prereq in course.prerequisites() {
        let mut spans = vec![Span::styled(
            format!("  • {:<10}", prereq),
            Style::default().fg(DEFAULT_THEME.course_id),
        )];
        match data.catalog.lookup(prereq) {
            Some(known) => spans.push(Span::styled(
                known.name().to_string(),
                Style::default().fg(DEFAULT_THEME.fg),
            )),
            None => spans.push(Span::styled(
                "(not in catalog)",
                Style::default().fg(DEFAULT_THEME.error),
            )),
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Required by", heading)));

    let dependents = data.catalog.dependents_of(course.id());
    if dependents.is_empty() {
        lines.push(Line::from(Span::styled("  Nothing depends on this course", muted)));
    }

    for key in dependents {
        let label = match data.catalog.lookup(key) {
            Some(dependent) => format!("  • {:<10}{}", dependent.id(), dependent.name()),
            None => format!("  • {}", key),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::build_catalog;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_detail_lines_flag_dangling_prerequisite() {
        let catalog = build_catalog(vec![
            Course::new("CSCI200", "Data Structures", Vec::<String>::new()),
            Course::new("CSCI300", "Algorithms", ["CSCI200", "MATH201"]),
            Course::new("CSCI350", "Operating Systems", ["CSCI300"]),
        ]);
        let course = catalog.lookup("CSCI300");
        let text: Vec<String> = detail_lines(&DetailsRenderData { catalog: &catalog, course })
            .iter()
            .map(line_text)
            .collect();

        assert_eq!(text[0], "CSCI300");
        assert_eq!(text[1], "Algorithms");
        assert!(text.iter().any(|l| l.contains("CSCI200") && l.contains("Data Structures")));
        assert!(text.iter().any(|l| l.contains("MATH201") && l.contains("(not in catalog)")));
        assert!(text.iter().any(|l| l.contains("CSCI350") && l.contains("Operating Systems")));
    }

    #[test]
    fn test_detail_lines_without_edges() {
        let catalog = build_catalog(vec![Course::new("CSCI100", "Intro", Vec::<String>::new())]);
        let course = catalog.lookup("csci100");
        let text: Vec<String> = detail_lines(&DetailsRenderData { catalog: &catalog, course })
            .iter()
            .map(line_text)
            .collect();

        assert!(text.contains(&"  No prerequisites".to_string()));
        assert!(text.contains(&"  Nothing depends on this course".to_string()));
    }
}
