use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in surface coordinates.
///
/// The width may be negative while a card is mid-flip; `normalized` folds it
/// back into a rectangle with a positive width covering the same span.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn normalized(self) -> Self {
        if self.w < 0.0 {
            Self {
                x: self.x + self.w,
                w: -self.w,
                ..self
            }
        } else {
            self
        }
    }

    /// Strict containment, edges excluded.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let r = self.normalized();
        px > r.x && px < r.x + r.w && py > r.y && py < r.y + r.h
    }

    pub fn center(&self) -> (f64, f64) {
        let r = self.normalized();
        (r.x + r.w / 2.0, r.y + r.h / 2.0)
    }

    /// Moves every component `1/divisor` of the way toward `target`.
    pub fn ease_toward(&mut self, target: Rect, divisor: f64) {
        self.x += (target.x - self.x) / divisor;
        self.y += (target.y - self.y) / divisor;
        self.w += (target.w - self.w) / divisor;
        self.h += (target.h - self.h) / divisor;
    }

    /// Largest per-component distance to `other`.
    pub fn max_distance(&self, other: &Rect) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.w - other.w).abs())
            .max((self.h - other.h).abs())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}
