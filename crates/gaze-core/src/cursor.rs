//! Axis-locked cursor
//!
//! The reachable set is a plus sign through the screen centre: after every
//! update one coordinate sits on its centre line and both lie inside
//! `[0, width] x [0, height]`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenGeometry {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenGeometry {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl ScreenGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    x: i32,
    y: i32,
    geometry: ScreenGeometry,
}

impl CursorState {
    pub fn centered(geometry: ScreenGeometry) -> Self {
        let (x, y) = geometry.center();
        Self { x, y, geometry }
    }

    pub fn position(&self) -> CursorPosition {
        CursorPosition {
            x: self.x,
            y: self.y,
        }
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    /// Moves by `(dx, dy)`, snaps onto the nearer centre line and clamps to the screen.
    ///
    /// When both deviations are equal the vertical line wins (`x` collapses to
    /// the centre). A zero delta re-applies the lock and clamp, which leaves an
    /// already valid position unchanged.
    pub fn apply_delta(&mut self, dx: i32, dy: i32) -> CursorPosition {
        let (cx, cy) = self.geometry.center();
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let mut x = i64::from(self.x) + i64::from(dx);
        let mut y = i64::from(self.y) + i64::from(dy);

        if (x - cx).abs() > (y - cy).abs() {
            y = cy;
        } else {
            x = cx;
        }

        // Both results fit in i32 once clamped to the screen.
        self.x = x.clamp(0, i64::from(self.geometry.width)) as i32;
        self.y = y.clamp(0, i64::from(self.geometry.height)) as i32;
        self.position()
    }
}
