use gettextrs::ngettext;

use super::card::{Card, CardId, Face};
use super::geometry::{Rect, Size};
use super::paint::{Color, fill_text};

const FAN_MARGIN: f64 = 10.0;
const FAN_GAP: f64 = 20.0;
const PAIR_SHIFT_X: f64 = 15.0;
const PAIR_SHIFT_Y: f64 = 6.0;
const LABEL_FAMILY: &str = "Cantarell, Noto Sans, sans";
const LABEL_SIZE: f64 = 14.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(pub usize);

#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: Color,
    region: Rect,
    collected: Vec<CardId>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, color: Color, region: Rect) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            region,
            collected: Vec::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn collected(&self) -> &[CardId] {
        &self.collected
    }

    /// Number of matched cards held; two per pair found.
    pub fn matches(&self) -> usize {
        self.collected.len()
    }

    /// Takes a matched card and slides it, face up, into the fan.
    pub fn add_card(&mut self, id: CardId, card: &mut Card) {
        self.collected.push(id);
        let size = card.rect();
        let (x, y) = self.fan_position(self.collected.len(), Size::new(size.w, size.h));
        card.slide_to(x, y);
        card.flip(Some(Face::Up));
    }

    /// Where the `count`-th collected card (1-based) sits.
    ///
    /// Pairs share a column; the first of each pair is nudged right and up.
    /// Columns wrap back to the left edge once the region is full.
    pub fn fan_position(&self, count: usize, card: Size) -> (f64, f64) {
        let count = count.max(1);
        let first_of_pair = count % 2 == 1;
        let column = ((count - 1) / 2) as f64;
        let mut offset = FAN_MARGIN + (card.w + FAN_GAP) * column;
        if first_of_pair {
            offset += PAIR_SHIFT_X;
        }
        let span = self.region.w - card.w - FAN_GAP;
        if span > 0.0 {
            offset %= span;
        }
        let mut y = self.region.y + (self.region.h - card.h) / 2.0;
        if first_of_pair {
            y -= PAIR_SHIFT_Y;
        }
        (self.region.x + offset, y)
    }

    /// Tints the region with the player colour while it is their turn.
    ///
    /// Expects the board to have cleared the surface already this frame.
    pub fn draw(&self, cr: &cairo::Context, active: bool) -> Result<(), cairo::Error> {
        let Rect { x, y, w, h } = self.region;

        if active {
            self.color.set_source(cr);
            cr.rectangle(x, y, w, h);
            cr.fill()?;
        }

        Color::OUTLINE.set_source(cr);
        cr.set_line_width(1.0);
        cr.rectangle(x, y, w, h);
        cr.stroke()?;

        Color::OUTLINE.set_source(cr);
        fill_text(cr, &self.label(), LABEL_FAMILY, LABEL_SIZE, x + 6.0, y + LABEL_SIZE + 4.0);
        Ok(())
    }

    /// Name and number of pairs held, e.g. `Player 1 · 3 pairs`.
    pub fn label(&self) -> String {
        let pairs = self.matches() / 2;
        ngettext("{name} · {pairs} pair", "{name} · {pairs} pairs", pairs as u32)
            .replace("{name}", &self.name)
            .replace("{pairs}", &pairs.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::{CardValue, DEFAULT_CARD_SIZE};

    fn player() -> Player {
        Player::new(
            PlayerId(0),
            "Player 1",
            Color::WHITE,
            Rect::new(5.0, 5.0, 590.0, 100.0),
        )
    }

    #[test]
    fn fan_pairs_share_a_column() {
        let p = player();
        let first = p.fan_position(1, DEFAULT_CARD_SIZE);
        let second = p.fan_position(2, DEFAULT_CARD_SIZE);
        assert_eq!(first, (5.0 + 25.0, 5.0 + 5.0 - 6.0));
        assert_eq!(second, (5.0 + 10.0, 10.0));
        let third = p.fan_position(3, DEFAULT_CARD_SIZE);
        assert_eq!(third.0, 5.0 + 10.0 + 80.0 + 15.0);
    }

    #[test]
    fn fan_wraps_within_region() {
        let p = player();
        for n in 1..=24 {
            let (x, _) = p.fan_position(n, DEFAULT_CARD_SIZE);
            assert!(x >= 5.0 && x + 60.0 <= 5.0 + 590.0, "card {n} at {x}");
        }
    }

    #[test]
    fn label_counts_pairs() {
        let mut p = player();
        assert_eq!(p.label(), "Player 1 · 0 pairs");
        let mut card = Card::new("1A", CardValue(1), DEFAULT_CARD_SIZE);
        p.add_card(CardId(0), &mut card);
        p.add_card(CardId(1), &mut card);
        assert_eq!(p.label(), "Player 1 · 1 pair");
        p.add_card(CardId(2), &mut card);
        p.add_card(CardId(3), &mut card);
        assert_eq!(p.label(), "Player 1 · 2 pairs");
    }

    #[test]
    fn add_card_turns_face_up_and_slides() {
        let mut p = player();
        let mut card = Card::new("1A", CardValue(1), DEFAULT_CARD_SIZE);
        card.jump_to(300.0, 300.0);
        p.add_card(CardId(7), &mut card);
        assert_eq!(p.collected(), &[CardId(7)]);
        assert!(card.is_face_up());
        assert_eq!((card.rect().x, card.rect().y), (30.0, 4.0));
        assert!(card.visual().y > 250.0);
    }
}
