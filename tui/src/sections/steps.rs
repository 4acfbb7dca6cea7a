use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

use reveal_engine::{BoundedStepper, Step};

use super::{Theme, inset};
use crate::theme::{Glyphs, styles};

const CODE_ROWS: u16 = 3;

pub(crate) fn render(
    stepper: &BoundedStepper<Step>,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
) {
    let palette = &theme.palette;
    let glyphs = &theme.glyphs;
    let step = stepper.active();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette))
        .title(Span::styled(" How it works ", styles::heading(palette)))
        .title_bottom(Line::from(vec![
            Span::styled(" h/l", styles::key_highlight(palette)),
            Span::styled(" step  ", styles::key_hint(palette)),
            Span::styled(format!("1-{}", stepper.len()), styles::key_highlight(palette)),
            Span::styled(" jump  ", styles::key_hint(palette)),
            Span::styled("r", styles::key_highlight(palette)),
            Span::styled(" replay ", styles::key_hint(palette)),
        ]))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_dark));
    let inner = block.inner(inset(area));
    block.render(inset(area), buf);

    let [counter, title, description, _, code, _, gauge, nav] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(CODE_ROWS),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    Paragraph::new(Span::styled(
        format!("Step {} of {}", stepper.active_index() + 1, stepper.len()),
        Style::default().fg(palette.text_muted),
    ))
    .render(counter, buf);
    Paragraph::new(Span::styled(
        step.title,
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    ))
    .render(title, buf);
    Paragraph::new(Span::styled(
        step.description,
        Style::default().fg(palette.text_secondary),
    ))
    .render(description, buf);

    let code_lines: Vec<Line> = step
        .code
        .lines()
        .take(usize::from(CODE_ROWS))
        .map(|line| Line::from(Span::styled(line, Style::default().fg(palette.accent))))
        .collect();
    Paragraph::new(code_lines)
        .style(Style::default().bg(palette.bg_panel))
        .render(code, buf);

    let (filled, empty) = progress_bar(stepper.progress(), usize::from(gauge.width), glyphs);
    Paragraph::new(Line::from(vec![
        Span::styled(filled, Style::default().fg(palette.primary)),
        Span::styled(empty, Style::default().fg(palette.text_disabled)),
    ]))
    .render(gauge, buf);

    Paragraph::new(nav_line(stepper, theme)).render(nav, buf);
}

fn nav_line(stepper: &BoundedStepper<Step>, theme: &Theme) -> Line<'static> {
    let palette = &theme.palette;
    let glyphs = &theme.glyphs;

    let mut spans = vec![
        Span::styled(
            format!("{} Prev", glyphs.prev),
            styles::control(palette, stepper.can_previous()),
        ),
        Span::raw("   "),
    ];
    for index in 0..stepper.len() {
        let (glyph, style) = if index == stepper.active_index() {
            (glyphs.dot_active, Style::default().fg(palette.primary))
        } else {
            (glyphs.dot_inactive, Style::default().fg(palette.text_muted))
        };
        spans.push(Span::styled(glyph, style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("Next {}", glyphs.next),
        styles::control(palette, stepper.can_next()),
    ));
    Line::from(spans)
}

/// Split a bar of `width` cells into its filled and empty parts.
pub(crate) fn progress_bar(progress: f64, width: usize, glyphs: &Glyphs) -> (String, String) {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let filled = ((progress * width as f64).round() as usize).min(width);
    (
        glyphs.gauge_filled.repeat(filled),
        glyphs.gauge_empty.repeat(width - filled),
    )
}
