//! src/ui.rs

use crate::app::{App, Outcome, SelectionState};
use crate::config::Theme;
use crate::text::{self, LEFT_MARGIN};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.size();
    let lines = match app.outcome() {
        Some(Outcome::Succeeded(commit)) => vec![Line::styled(
            format!("✓ Created fixup commit for: {}", commit.summary),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )],
        Some(Outcome::Failed(message)) => vec![Line::styled(
            format!("Error: {}", message),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )],
        None => list_lines(app.selection(), app.viewport_width(), theme),
    };
    frame.render_widget(Paragraph::new(lines), area);
}

/// Lays out the commit list for a terminal `width` columns wide.
///
/// Subjects wrap to the space left of a right margin proportional to the
/// width plus the fixed gutter; continuation lines are indented to align
/// under the first subject column, and the cursor row carries an
/// author/date line beneath it.
fn list_lines(state: &SelectionState, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let width = width as usize;
    let right_margin = width / 20;
    let subject_width = width.saturating_sub(right_margin + LEFT_MARGIN);

    let emphasis = Style::default()
        .fg(theme.emphasis)
        .add_modifier(Modifier::BOLD);
    let info = Style::default().fg(theme.info).add_modifier(Modifier::ITALIC);

    let mut lines = vec![
        Line::styled("Select a commit to fixup", emphasis),
        Line::default(),
    ];

    for (index, commit) in state.items().iter().enumerate() {
        let is_selected = index == state.cursor();
        let style = if is_selected {
            emphasis
        } else {
            Style::default().fg(theme.normal)
        };
        let marker = if is_selected { "> " } else { "  " };

        let wrapped = text::wrap(&commit.summary, subject_width);
        if let Some((first, continuations)) = wrapped.split_first() {
            lines.push(Line::styled(
                format!("{}{} {}", marker, commit.short_id(), first),
                style,
            ));
            for continuation in continuations {
                lines.push(Line::styled(
                    format!("{}{}", " ".repeat(LEFT_MARGIN), continuation),
                    style,
                ));
            }
        }

        if is_selected {
            lines.push(Line::styled(
                format!("     {}, {}", commit.author, commit.relative_time),
                info,
            ));
        }
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "↑/k up · ↓/j down · enter create fixup · q quit",
        Style::default().fg(theme.info),
    ));
    lines
}
