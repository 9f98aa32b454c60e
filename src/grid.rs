//! Camera grid paging and layout.
//!
//! The grid shows one page of the camera list at a time. The layout mode fixes
//! both the page size and how the cells are arranged on screen.

use std::ops::Range;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Single,
    #[default]
    Quad,
    /// One large cell, two beside it, three below.
    HexMixed,
    Nine,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 4] = [
        LayoutMode::Single,
        LayoutMode::Quad,
        LayoutMode::HexMixed,
        LayoutMode::Nine,
    ];

    pub fn page_size(self) -> usize {
        match self {
            LayoutMode::Single => 1,
            LayoutMode::Quad => 4,
            LayoutMode::HexMixed => 6,
            LayoutMode::Nine => 9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Single => "1 camera",
            LayoutMode::Quad => "4 cameras",
            LayoutMode::HexMixed => "6 cameras",
            LayoutMode::Nine => "9 cameras",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Single => "single",
            LayoutMode::Quad => "quad",
            LayoutMode::HexMixed => "hex_mixed",
            LayoutMode::Nine => "nine",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        LayoutMode::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// Container class for the grid.
    pub fn container_class(self) -> &'static str {
        match self {
            LayoutMode::Single => "camera-grid camera-grid-single",
            LayoutMode::Quad => "camera-grid camera-grid-quad",
            LayoutMode::HexMixed => "camera-grid camera-grid-hex",
            LayoutMode::Nine => "camera-grid camera-grid-nine",
        }
    }

    /// Role of the `slot`-th cell on a page.
    pub fn cell_role(self, slot: usize) -> CellRole {
        match self {
            LayoutMode::Single => CellRole::Full,
            LayoutMode::Quad | LayoutMode::Nine => CellRole::Tile,
            LayoutMode::HexMixed => match slot {
                0 => CellRole::Large,
                1 | 2 => CellRole::Side,
                _ => CellRole::Bottom,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRole {
    Full,
    Tile,
    Large,
    Side,
    Bottom,
}

impl CellRole {
    pub fn class(self) -> &'static str {
        match self {
            CellRole::Full => "camera-cell camera-cell-full",
            CellRole::Tile => "camera-cell",
            CellRole::Large => "camera-cell camera-cell-large",
            CellRole::Side => "camera-cell camera-cell-side",
            CellRole::Bottom => "camera-cell camera-cell-bottom",
        }
    }
}

/// One visible cell: the camera's index in the full list and its role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub index: usize,
    pub role: CellRole,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridState {
    pub mode: LayoutMode,
    pub page: usize,
}

impl GridState {
    pub fn new(mode: LayoutMode) -> Self {
        Self { mode, page: 0 }
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.mode.page_size())
    }

    fn last_page(&self, total: usize) -> usize {
        self.page_count(total).saturating_sub(1)
    }

    pub fn next(&mut self, total: usize) {
        if self.page < self.last_page(total) {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Switch layout, landing on the page that holds the camera that was
    /// first on screen.
    pub fn set_mode(&mut self, mode: LayoutMode, total: usize) {
        let first_visible = self.page * self.mode.page_size();
        self.mode = mode;
        self.page = first_visible / mode.page_size();
        self.clamp(total);
    }

    /// Pull the page back in range after the list shrank.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(self.last_page(total));
    }

    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.mode.page_size()).min(total);
        let end = (start + self.mode.page_size()).min(total);
        start..end
    }

    pub fn cells(&self, total: usize) -> Vec<GridCell> {
        let range = self.visible_range(total);
        let start = range.start;
        range
            .map(|index| GridCell {
                index,
                role: self.mode.cell_role(index - start),
            })
            .collect()
    }

    pub fn page_label(&self, total: usize) -> String {
        format!("Page {}/{}", self.page + 1, self.page_count(total).max(1))
    }
}
