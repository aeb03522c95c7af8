//! Left-click targets on the main screen.
//!
//! The renderer describes where each clickable control sits as a list of regions; a click
//! resolves to the first region that contains it, so narrow regions (selector options,
//! buttons) are listed before the panels around them.

use crate::config::{Language, Model};
use crate::focus::FocusTarget;
use ratatui::layout::Rect;

/// What a left click asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Focus(FocusTarget),
    Language(Language),
    Model(Model),
    Press(FocusTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub area: Rect,
    pub action: ClickAction,
}

impl ClickRegion {
    pub fn new(area: Rect, action: ClickAction) -> Self {
        Self { area, action }
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }
}

pub fn hit_test(regions: &[ClickRegion], column: u16, row: u16) -> Option<ClickAction> {
    regions
        .iter()
        .find(|region| region.contains(column, row))
        .map(|region| region.action)
}

/// Split one row into side-by-side strips of the given widths, starting `lead` columns in
/// and leaving `gap` columns between strips. Strips are clipped to the row.
pub fn row_strips(row: Rect, lead: u16, widths: &[u16], gap: u16) -> Vec<Rect> {
    let mut strips = Vec::with_capacity(widths.len());
    let mut x = row.x.saturating_add(lead);
    for &width in widths {
        if x >= row.right() {
            break;
        }
        let width = width.min(row.right() - x);
        strips.push(Rect::new(x, row.y, width, row.height.min(1)));
        x = x.saturating_add(width).saturating_add(gap);
    }
    strips
}
