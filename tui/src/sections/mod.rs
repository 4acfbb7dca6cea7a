//! Page sections.
//!
//! Each section renders into its own off-screen buffer sized to its page
//! region; [`blit`] then copies the rows that fall inside the viewport.
//! Sections never need to know how far they are scrolled.

mod contact;
mod features;
mod hero;
mod steps;

pub(crate) use contact::render as contact;
pub(crate) use features::{render_card as feature_card, render_header as features_header};
pub(crate) use hero::render as hero;
pub(crate) use steps::render as steps;

use ratatui::{buffer::Buffer, layout::Rect};

use reveal_types::ui::{Region, UiOptions, Viewport};

use crate::theme::{Glyphs, Palette};

/// Everything a section needs to style itself.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    pub palette: Palette,
    pub glyphs: Glyphs,
    pub options: UiOptions,
}

/// Render `region` of the page with `paint` and copy its visible rows into
/// `target`, whose top-left corner shows row `viewport.scroll_top`.
pub(crate) fn blit(
    target: &mut Buffer,
    area: Rect,
    viewport: Viewport,
    region: Region,
    paint: impl FnOnce(Rect, &mut Buffer),
) {
    let Ok(height) = u16::try_from(region.height) else {
        return;
    };
    let first = i64::from(region.top).max(i64::from(viewport.scroll_top));
    let last = region
        .bottom()
        .min(i64::from(viewport.scroll_top) + i64::from(area.height));
    if first >= last || area.width == 0 {
        return;
    }

    let local = Rect::new(0, 0, area.width, height);
    let mut scratch = Buffer::empty(local);
    paint(local, &mut scratch);

    for page_row in first..last {
        let (Ok(src_y), Ok(dst_y)) = (
            u16::try_from(page_row - i64::from(region.top)),
            u16::try_from(page_row - i64::from(viewport.scroll_top)),
        ) else {
            continue;
        };
        for x in 0..area.width {
            if let (Some(cell), Some(slot)) = (
                scratch.cell((x, src_y)),
                target.cell_mut((area.x + x, area.y + dst_y)),
            ) {
                *slot = cell.clone();
            }
        }
    }
}

/// Horizontal inset applied to every section.
pub(crate) fn inset(area: Rect) -> Rect {
    let margin = if area.width > 40 { 2 } else { 0 };
    Rect {
        x: area.x + margin,
        width: area.width.saturating_sub(margin * 2),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::blit;
    use ratatui::{
        buffer::Buffer,
        layout::Rect,
        widgets::{Paragraph, Widget},
    };
    use reveal_types::ui::{Region, Viewport};

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()).to_string())
                    .collect()
            })
            .collect()
    }

    fn paint_lines(area: Rect, buf: &mut Buffer) {
        Paragraph::new("a\nb\nc\nd").render(area, buf);
    }

    #[test]
    fn clips_rows_above_the_viewport() {
        let area = Rect::new(0, 0, 1, 3);
        let mut target = Buffer::empty(area);
        blit(
            &mut target,
            area,
            Viewport::new(12, 3),
            Region::new(10, 4),
            paint_lines,
        );
        assert_eq!(rows(&target), vec!["c", "d", " "]);
    }

    #[test]
    fn clips_rows_below_the_viewport() {
        let area = Rect::new(0, 0, 1, 3);
        let mut target = Buffer::empty(area);
        blit(
            &mut target,
            area,
            Viewport::new(8, 3),
            Region::new(10, 4),
            paint_lines,
        );
        assert_eq!(rows(&target), vec![" ", " ", "a"]);
    }

    #[test]
    fn offscreen_region_is_not_painted() {
        let area = Rect::new(0, 0, 1, 3);
        let mut target = Buffer::empty(area);
        let mut painted = false;
        blit(
            &mut target,
            area,
            Viewport::new(0, 3),
            Region::new(10, 4),
            |_, _| painted = true,
        );
        assert!(!painted);
    }
}
