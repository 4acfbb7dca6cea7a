use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use reveal_engine::{HERO_METRIC_LABEL, HERO_SUBTITLE, HERO_TITLE, Landing};

use super::{Theme, inset};
use crate::theme::{spinner_frame, styles};

pub(crate) fn render(
    landing: &Landing,
    frame_tick: usize,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
) {
    let palette = &theme.palette;
    let hero = landing.hero();

    let status = if hero.state.complete {
        Span::styled(
            format!("{} {}", theme.glyphs.check, landing.hero_label()),
            Style::default().fg(palette.success),
        )
    } else if hero.started {
        Span::styled(
            format!(
                "{} {}",
                spinner_frame(frame_tick, theme.options),
                landing.hero_label()
            ),
            Style::default().fg(palette.warning),
        )
    } else {
        Span::styled(landing.hero_label(), Style::default().fg(palette.text_muted))
    };

    let lines = vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            HERO_SUBTITLE,
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(landing.hero_text(), styles::metric(palette)),
            Span::raw("  "),
            status,
        ]),
        Line::from(Span::styled(
            HERO_METRIC_LABEL,
            Style::default().fg(palette.text_muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("j/k", styles::key_highlight(palette)),
            Span::styled(" scroll  ", styles::key_hint(palette)),
            Span::styled("Tab", styles::key_highlight(palette)),
            Span::styled(" contact  ", styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border_focused(palette))
        .title(Span::styled(" Reveal ", styles::heading(palette)))
        .style(Style::default().bg(palette.bg_dark));

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inset(area), buf);
}
