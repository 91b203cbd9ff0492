//! Fixed selection targets
//!
//! Four rectangles derived once from the screen geometry: left and right on
//! the horizontal centre line against their edges, up and down centred
//! horizontally against the top and bottom edges.

use serde::{Deserialize, Serialize};

use crate::cursor::{CursorPosition, ScreenGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetId {
    Left,
    Right,
    Up,
    Down,
}

impl TargetId {
    pub const ALL: [TargetId; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Command shown on the target.
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "turn left",
            Self::Right => "turn right",
            Self::Up => "leg up",
            Self::Down => "leg down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetLayout {
    pub width: u32,
    pub height: u32,
    /// How far above the horizontal centre line the side targets start.
    pub side_rise: u32,
    /// Gap between the bottom target and the bottom edge.
    pub bottom_margin: u32,
}

impl Default for TargetLayout {
    fn default() -> Self {
        Self {
            width: 120,
            height: 45,
            side_rise: 35,
            bottom_margin: 5,
        }
    }
}

impl TargetLayout {
    pub fn fits(&self, screen: &ScreenGeometry) -> bool {
        self.width <= screen.width
            && self.height.saturating_add(self.bottom_margin) <= screen.height
            && self.side_rise <= screen.height / 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRegion {
    pub id: TargetId,
    pub origin_x: i32,
    pub origin_y: i32,
    pub width: u32,
    pub height: u32,
}

impl TargetRegion {
    /// Inclusive on all four edges.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let left = i64::from(self.origin_x);
        let top = i64::from(self.origin_y);
        x >= left
            && x <= left + i64::from(self.width)
            && y >= top
            && y <= top + i64::from(self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRegistry {
    regions: [TargetRegion; 4],
}

impl TargetRegistry {
    pub fn for_screen(screen: ScreenGeometry, layout: TargetLayout) -> Self {
        let (_, cy) = screen.center();
        let w = layout.width as i32;
        let h = layout.height as i32;
        let side_y = cy - layout.side_rise as i32;
        let centered_x = (screen.width as i32 - w) / 2;

        let region = |id, origin_x, origin_y| TargetRegion {
            id,
            origin_x,
            origin_y,
            width: layout.width,
            height: layout.height,
        };

        Self {
            regions: [
                region(TargetId::Left, 0, side_y),
                region(TargetId::Right, screen.width as i32 - w, side_y),
                region(TargetId::Up, centered_x, 0),
                region(
                    TargetId::Down,
                    centered_x,
                    screen.height as i32 - h - layout.bottom_margin as i32,
                ),
            ],
        }
    }

    pub fn regions(&self) -> &[TargetRegion] {
        &self.regions
    }

    pub fn get(&self, id: TargetId) -> &TargetRegion {
        // Regions are stored in `TargetId::ALL` order.
        &self.regions[id as usize]
    }

    /// First region containing the cursor, in Left, Right, Up, Down order.
    pub fn hit_test(&self, cursor: CursorPosition) -> Option<TargetId> {
        self.regions
            .iter()
            .find(|r| r.contains(cursor.x, cursor.y))
            .map(|r| r.id)
    }
}
