use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use reveal_engine::FeatureCard;

use super::{Theme, inset};
use crate::theme::styles;

pub(crate) fn render_header(area: Rect, buf: &mut Buffer, theme: &Theme) {
    let palette = &theme.palette;
    let lines = vec![
        Line::from(Span::styled("Why teams ship with us", styles::heading(palette))),
        Line::from(Span::styled(
            "Everything you need between git push and production.",
            Style::default().fg(palette.text_muted),
        )),
    ];
    Paragraph::new(lines).render(inset(area), buf);
}

pub(crate) fn render_card(card: &FeatureCard, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let palette = &theme.palette;
    let feature = card.feature();

    let border = if card.is_revealed() {
        styles::border(palette)
    } else {
        Style::default().fg(palette.text_disabled)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(palette.bg_dark));

    // Content stays blank until the card has been seen.
    if !card.is_revealed() {
        block.render(inset(area), buf);
        return;
    }

    let text = palette.fade(card.fade_progress());
    let block = block.title(Span::styled(
        format!(" {} ", feature.title),
        Style::default().fg(text).add_modifier(Modifier::BOLD),
    ));
    let lines = vec![
        Line::from(Span::styled(feature.blurb, Style::default().fg(text))),
        Line::from(""),
        Line::from(vec![
            Span::styled(card.metric_text(), styles::metric(palette)),
            Span::raw(" "),
            Span::styled(feature.metric_label, Style::default().fg(palette.text_muted)),
        ]),
    ];

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(inset(area), buf);
}
