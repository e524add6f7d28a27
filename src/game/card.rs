use super::art::CardArt;
use super::geometry::{Rect, Size};
use super::paint::Color;

/// Each tick the visual rectangle covers `1 / EASE_DIVISOR` of the remaining distance.
const EASE_DIVISOR: f64 = 10.0;

pub const DEFAULT_CARD_SIZE: Size = Size::new(60.0, 90.0);

/// Position of a card within the board's collection. Stable after setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

/// Match key; exactly two cards in a deck share one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardValue(pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Down,
    Up,
}

impl Face {
    pub fn turned(self) -> Self {
        match self {
            Face::Down => Face::Up,
            Face::Up => Face::Down,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Card {
    label: String,
    value: CardValue,
    face: Face,
    matched: bool,
    target: Rect,
    visual: Rect,
}

impl Card {
    /// Creates a face-down card at the origin.
    pub fn new(label: impl Into<String>, value: CardValue, size: Size) -> Self {
        let target = Rect::new(0.0, 0.0, size.w, size.h);
        let mut card = Self {
            label: label.into(),
            value,
            face: Face::Down,
            matched: false,
            target,
            visual: target,
        };
        card.visual = card.pivot_target();
        card
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> CardValue {
        self.value
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_face_up(&self) -> bool {
        self.face == Face::Up
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Logical placement; always has a positive size.
    pub fn rect(&self) -> Rect {
        self.target
    }

    /// Animated placement; the width is negative while the back is showing.
    pub fn visual(&self) -> Rect {
        self.visual
    }

    /// Where the visual rectangle is heading.
    ///
    /// A face-down card targets its mirror image: origin on the right edge and
    /// negated width, so turning the card sweeps the width through zero.
    pub fn pivot_target(&self) -> Rect {
        match self.face {
            Face::Up => self.target,
            Face::Down => Rect {
                x: self.target.x + self.target.w,
                w: -self.target.w,
                ..self.target
            },
        }
    }

    /// Turns the card over, or turns it to `target` if given.
    ///
    /// Returns whether the face changed. Matched cards never turn.
    pub fn flip(&mut self, target: Option<Face>) -> bool {
        if self.matched {
            return false;
        }
        if target.is_some_and(|face| face == self.face) {
            return false;
        }
        self.face = self.face.turned();
        true
    }

    /// Places the card without animating.
    pub fn jump_to(&mut self, x: f64, y: f64) {
        self.target.x = x;
        self.target.y = y;
        let pivot = self.pivot_target();
        self.visual.x = pivot.x;
        self.visual.y = pivot.y;
    }

    /// Moves the logical placement; the visual one follows over later ticks.
    pub fn slide_to(&mut self, x: f64, y: f64) {
        self.target.x = x;
        self.target.y = y;
    }

    /// Hit-test against where the card is drawn, not where it is heading.
    pub fn is_over(&self, mx: f64, my: f64) -> bool {
        self.visual.contains(mx, my)
    }

    pub fn step(&mut self) {
        self.visual.ease_toward(self.pivot_target(), EASE_DIVISOR);
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
    }

    pub fn draw(&self, cr: &cairo::Context, art: &CardArt) -> Result<(), cairo::Error> {
        let rect = self.visual.normalized();

        Color::BLACK.set_source(cr);
        cr.set_line_width(1.0);
        cr.rectangle(rect.x, rect.y, rect.w, rect.h);
        cr.stroke()?;

        if self.visual.w < 0.0 {
            art.paint_back(cr, rect)
        } else {
            art.paint_face(cr, self.value, rect)
        }
    }
}
