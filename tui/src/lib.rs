//! TUI rendering for Reveal using ratatui.

mod input;
mod sections;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use reveal_engine::{InputMode, Landing};

use self::sections::{Theme, blit};

/// Rows reserved below the page for the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Page rows visible in a terminal of `terminal_rows` rows.
#[must_use]
pub fn page_height(terminal_rows: u16) -> u32 {
    u32::from(terminal_rows.saturating_sub(STATUS_BAR_HEIGHT))
}

/// Main draw function. `frame_tick` drives spinners.
pub fn draw(frame: &mut Frame, landing: &Landing, frame_tick: usize) {
    let options = landing.ui_options();
    let theme = Theme {
        palette: palette(options),
        glyphs: glyphs(options),
        options,
    };

    let bg_block = Block::default().style(Style::default().bg(theme.palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let [page, status] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    draw_page(frame, landing, page, frame_tick, &theme);
    draw_status_bar(frame, landing, status, &theme);
}

fn draw_page(
    frame: &mut Frame,
    landing: &Landing,
    area: Rect,
    frame_tick: usize,
    theme: &Theme,
) {
    let viewport = landing.viewport();
    let layout = landing.layout();
    let buf = frame.buffer_mut();

    blit(buf, area, viewport, layout.hero, |rect, scratch| {
        sections::hero(landing, frame_tick, rect, scratch, theme);
    });
    blit(buf, area, viewport, layout.features_header, |rect, scratch| {
        sections::features_header(rect, scratch, theme);
    });
    for (card, region) in landing.cards().iter().zip(&layout.cards) {
        blit(buf, area, viewport, *region, |rect, scratch| {
            sections::feature_card(card, rect, scratch, theme);
        });
    }
    blit(buf, area, viewport, layout.steps, |rect, scratch| {
        sections::steps(landing.stepper(), rect, scratch, theme);
    });
    blit(buf, area, viewport, layout.contact, |rect, scratch| {
        sections::contact(
            landing.contact(),
            landing.input_mode(),
            frame_tick,
            rect,
            scratch,
            theme,
        );
    });
}

fn draw_status_bar(frame: &mut Frame, landing: &Landing, area: Rect, theme: &Theme) {
    let palette = &theme.palette;
    let (mode, mode_style) = match landing.input_mode() {
        InputMode::Browse => (" BROWSE ", styles::mode_browse(palette)),
        InputMode::Form => (" FORM ", styles::mode_form(palette)),
    };

    let stepper = landing.stepper();
    let viewport = landing.viewport();
    let total = landing.layout().total_height();
    let bottom = i64::from(viewport.scroll_top) + i64::from(viewport.height);
    let percent = if total == 0 {
        100
    } else {
        (bottom.clamp(0, i64::from(total)) * 100) / i64::from(total)
    };

    let line = Line::from(vec![
        Span::styled(mode, mode_style),
        Span::raw(" "),
        Span::styled(
            format!("step {}/{}", stepper.active_index() + 1, stepper.len()),
            styles::key_hint(palette),
        ),
        Span::raw("  "),
        Span::styled(format!("{percent}%"), styles::key_hint(palette)),
    ]);
    // The bar blends into the page until it has scrolled away from the hero.
    let bg = if landing.is_scrolled() {
        palette.bg_panel
    } else {
        palette.bg_dark
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
