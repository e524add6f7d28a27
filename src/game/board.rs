use super::art::CardArt;
use super::card::{Card, CardId};
use super::geometry::{Rect, Size};
use super::paint::Color;

pub const MIN_CELL: Size = Size::new(65.0, 95.0);

/// Columns are `floor(sqrt(count * QUASI_RATIO))`, which keeps the grid near 3:2.
const QUASI_RATIO: f64 = 3.0;

/// A grid cell. May lie outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCoord {
    pub col: i64,
    pub row: i64,
}

#[derive(Clone, Debug)]
pub struct Board {
    cards: Vec<Card>,
    region: Rect,
    columns: usize,
    rows: usize,
    cell: Size,
}

impl Board {
    /// Lays `cards` out row-major inside `region`, one per cell.
    pub fn new(cards: Vec<Card>, region: Rect, min_cell: Size) -> Self {
        let (columns, rows) = grid_shape(cards.len());
        let cell = Size::new(
            (region.w / columns as f64).max(min_cell.w),
            (region.h / rows as f64).max(min_cell.h),
        );
        let mut board = Self {
            cards,
            region,
            columns,
            rows,
            cell,
        };
        board.setup_cards();
        board
    }

    /// Centres every card in its cell, without animation.
    pub fn setup_cards(&mut self) {
        for slot in 0..self.cards.len() {
            let cell = self.cell_rect(slot);
            let card = &mut self.cards[slot];
            let size = card.rect();
            card.jump_to(
                cell.x + (cell.w - size.w) / 2.0,
                cell.y + (cell.h - size.h) / 2.0,
            );
        }
    }

    pub fn cell_rect(&self, slot: usize) -> Rect {
        let col = slot % self.columns;
        let row = slot / self.columns;
        Rect::new(
            self.region.x + col as f64 * self.cell.w,
            self.region.y + row as f64 * self.cell.h,
            self.cell.w,
            self.cell.h,
        )
    }

    pub fn coord_at_point(&self, mx: f64, my: f64) -> GridCoord {
        GridCoord {
            col: ((mx - self.region.x) / self.cell.w).floor() as i64,
            row: ((my - self.region.y) / self.cell.h).floor() as i64,
        }
    }

    /// The unmatched card whose cell contains the point, if any.
    pub fn get_card_at(&self, x: f64, y: f64) -> Option<CardId> {
        let GridCoord { col, row } = self.coord_at_point(x, y);
        if col < 0 || row < 0 || col as usize >= self.columns || row as usize >= self.rows {
            return None;
        }
        let slot = col as usize + row as usize * self.columns;
        self.cards
            .get(slot)
            .filter(|card| !card.is_matched())
            .map(|_| CardId(slot))
    }

    /// Takes a card out of play. It stays in the collection.
    pub fn remove_card(&mut self, id: CardId) {
        if let Some(card) = self.cards.get_mut(id.0) {
            card.mark_matched();
        }
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.0)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> Size {
        self.cell
    }

    pub fn step(&mut self) {
        for card in &mut self.cards {
            card.step();
        }
    }

    /// Clears the whole surface to the table colour and outlines the board.
    pub fn draw(&self, cr: &cairo::Context, table: Color) -> Result<(), cairo::Error> {
        table.set_source(cr);
        cr.paint()?;

        let Rect { x, y, w, h } = self.region;
        Color::OUTLINE.set_source(cr);
        cr.set_line_width(1.0);
        cr.rectangle(x, y, w, h);
        cr.stroke()
    }

    pub fn draw_cards(&self, cr: &cairo::Context, art: &CardArt) -> Result<(), cairo::Error> {
        for card in &self.cards {
            card.draw(cr, art)?;
        }
        Ok(())
    }
}

/// `(columns, rows)` for `card_count` cards; never zero.
pub fn grid_shape(card_count: usize) -> (usize, usize) {
    let columns = ((card_count as f64 * QUASI_RATIO).sqrt().floor() as usize).max(1);
    let rows = card_count.div_ceil(columns).max(1);
    (columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::{CardValue, DEFAULT_CARD_SIZE};

    fn board(count: usize, region: Rect) -> Board {
        let cards = (0..count)
            .map(|i| Card::new(format!("{i}"), CardValue((i / 2 + 1) as u8), DEFAULT_CARD_SIZE))
            .collect();
        Board::new(cards, region, MIN_CELL)
    }

    #[test]
    fn grid_shape_covers_every_card() {
        assert_eq!(grid_shape(24), (8, 3));
        assert_eq!(grid_shape(12), (6, 2));
        assert_eq!(grid_shape(2), (2, 1));
        assert_eq!(grid_shape(1), (1, 1));
        assert_eq!(grid_shape(0), (1, 1));
        for n in 1..100 {
            let (c, r) = grid_shape(n);
            assert!(c * r >= n, "{n} cards in {c}x{r}");
        }
    }

    #[test]
    fn cells_respect_minimum() {
        let b = board(24, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(b.cell_size(), MIN_CELL);
        let b = board(24, Rect::new(5.0, 120.0, 590.0, 340.0));
        assert_eq!(b.cell_size().w, 73.75);
        assert!((b.cell_size().h - 340.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn cards_centre_in_their_cells() {
        let b = board(24, Rect::new(5.0, 120.0, 590.0, 340.0));
        let first = b.cards()[0].rect();
        assert!((first.x - (5.0 + (73.75 - 60.0) / 2.0)).abs() < 1e-9);
        let ninth = b.cards()[8].rect();
        assert!((ninth.x - first.x).abs() < 1e-9);
        assert!(ninth.y > first.y);
        assert_eq!(b.cards()[0].visual().normalized(), first);
    }

    #[test]
    fn hit_test_rejects_out_of_range_and_matched() {
        let mut b = board(5, Rect::new(0.0, 0.0, 300.0, 200.0));
        assert_eq!((b.columns(), b.rows()), (3, 2));
        assert_eq!(b.get_card_at(-1.0, 10.0), None);
        assert_eq!(b.get_card_at(10.0, 500.0), None);
        assert_eq!(b.get_card_at(10.0, 10.0), Some(CardId(0)));
        // sixth cell exists in the grid but not in the collection
        assert_eq!(b.get_card_at(250.0, 150.0), None);
        b.remove_card(CardId(0));
        assert_eq!(b.get_card_at(10.0, 10.0), None);
        assert_eq!(b.len(), 5);
    }

    #[test]
    fn coord_at_point_floors() {
        let b = board(24, Rect::new(5.0, 120.0, 590.0, 340.0));
        assert_eq!(b.coord_at_point(4.0, 119.0), GridCoord { col: -1, row: -1 });
        assert_eq!(b.coord_at_point(80.0, 240.0), GridCoord { col: 1, row: 1 });
    }
}
