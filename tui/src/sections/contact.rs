use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use reveal_engine::{ContactField, ContactForm, InputMode, SubmissionStatus};

use super::{Theme, inset};
use crate::theme::{spinner_frame, styles};

const LABEL_WIDTH: usize = 9;

pub(crate) fn render(
    form: &ContactForm,
    mode: InputMode,
    frame_tick: usize,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
) {
    let palette = &theme.palette;
    let editing = mode == InputMode::Form;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if editing {
            styles::border_focused(palette)
        } else {
            styles::border(palette)
        })
        .title(Span::styled(" Contact ", styles::heading(palette)))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_dark));
    let inner = block.inner(inset(area));
    block.render(inset(area), buf);

    let [intro, _, name, email, message, _, status, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    Paragraph::new(Span::styled(
        "Questions about pricing or migrations? Leave a note.",
        Style::default().fg(palette.text_secondary),
    ))
    .render(intro, buf);

    for (field, row) in ContactField::ALL.into_iter().zip([name, email, message]) {
        let focused = editing && form.focus() == field;
        Paragraph::new(field_line(form, field, focused, usize::from(row.width), theme))
            .style(if focused {
                Style::default().bg(palette.bg_highlight)
            } else {
                Style::default()
            })
            .render(row, buf);
    }

    Paragraph::new(status_line(form.status(), frame_tick, theme)).render(status, buf);

    let hints: &[(&str, &str)] = if editing {
        &[("Tab", " next field  "), ("Enter", " send  "), ("Esc", " back")]
    } else {
        &[("Tab", " fill in the form")]
    };
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, styles::key_highlight(palette)),
                Span::styled(*label, styles::key_hint(palette)),
            ]
        })
        .collect();
    Paragraph::new(Line::from(spans)).render(hint, buf);
}

fn field_line(
    form: &ContactForm,
    field: ContactField,
    focused: bool,
    width: usize,
    theme: &Theme,
) -> Line<'static> {
    let palette = &theme.palette;
    let marker = if focused { theme.glyphs.selected } else { " " };
    let label = format!("{marker} {:<LABEL_WIDTH$}", field.label());
    let cursor = if focused { theme.glyphs.cursor } else { "" };
    let room = width
        .saturating_sub(label.width())
        .saturating_sub(cursor.width());
    let value = tail_fit(form.fields().get(field), room).to_string();

    Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(if focused {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
        ),
        Span::styled(value, Style::default().fg(palette.text_primary)),
        Span::styled(cursor, Style::default().fg(palette.primary)),
    ])
}

fn status_line(status: &SubmissionStatus, frame_tick: usize, theme: &Theme) -> Line<'static> {
    let palette = &theme.palette;
    match status {
        SubmissionStatus::Idle => Line::from(Span::styled(
            "We usually reply within a day.",
            Style::default().fg(palette.text_muted),
        )),
        SubmissionStatus::Invalid(err) => Line::from(Span::styled(
            format!("{} {}", theme.glyphs.cross, capitalize(&err.to_string())),
            Style::default().fg(palette.error),
        )),
        SubmissionStatus::Submitting => Line::from(Span::styled(
            format!("{} Sending...", spinner_frame(frame_tick, theme.options)),
            Style::default().fg(palette.warning),
        )),
        SubmissionStatus::Submitted(receipt) => Line::from(Span::styled(
            format!(
                "{} Thanks, {}. We'll reply to {}.",
                theme.glyphs.check, receipt.name, receipt.email
            ),
            Style::default().fg(palette.success),
        )),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The longest suffix of `text` that fits in `width` columns.
pub(crate) fn tail_fit(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, grapheme) in text.grapheme_indices(true).rev() {
        let w = grapheme.width();
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}
