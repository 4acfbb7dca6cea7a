//! Fixed vertical layout of the page, in terminal rows.

use reveal_types::ui::Region;

pub const HERO_HEIGHT: u32 = 10;
pub const SECTION_HEADER_HEIGHT: u32 = 2;
pub const CARD_HEIGHT: u32 = 5;
pub const STEPS_HEIGHT: u32 = 14;
pub const CONTACT_HEIGHT: u32 = 12;
pub const GAP: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub hero: Region,
    pub features_header: Region,
    pub cards: Vec<Region>,
    pub steps: Region,
    pub contact: Region,
    total_height: u32,
}

impl PageLayout {
    #[must_use]
    pub fn new(card_count: usize) -> Self {
        let mut cursor: u32 = 0;
        let mut take = |height: u32| {
            let region = Region::new(to_row(cursor), height);
            cursor = cursor.saturating_add(height).saturating_add(GAP);
            region
        };

        let hero = take(HERO_HEIGHT);
        let features_header = take(SECTION_HEADER_HEIGHT);
        let cards = (0..card_count).map(|_| take(CARD_HEIGHT)).collect();
        let steps = take(STEPS_HEIGHT);
        let contact = take(CONTACT_HEIGHT);
        let total_height = cursor.saturating_sub(GAP);

        Self {
            hero,
            features_header,
            cards,
            steps,
            contact,
            total_height,
        }
    }

    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.total_height
    }

    /// Largest scroll offset that still fills a viewport of `height` rows.
    #[must_use]
    pub fn max_scroll(&self, height: u32) -> i32 {
        to_row(self.total_height.saturating_sub(height))
    }
}

fn to_row(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
