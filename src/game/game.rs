//! Turn sequencing, match resolution and end-of-game detection.
//!
//! An external driver calls [`Game::step`] once per tick and [`Game::draw`]
//! once per frame, and forwards pointer events already mapped into surface
//! coordinates. All timing is counted in ticks.

use std::cmp::Ordering;
use std::fmt;

use gettextrs::gettext;
use tracing::{debug, info, instrument};

use super::art::CardArt;
use super::board::Board;
use super::card::{CardId, Face};
use super::paint::{Color, fill_text};
use super::player::Player;
use super::state::{Countdown, Cursor, FADE_TICKS, FREEZE_TICKS, Phase, TurnState, Winner};

const OVERLAY_FAMILY: &str = "Georgia, serif";
const OVERLAY_SIZE: f64 = 30.0;
const OVERLAY_INSET: f64 = 20.0;

pub type EndCallback = Box<dyn FnMut(Winner)>;

pub struct Game {
    board: Option<Board>,
    players: Vec<Player>,
    art: CardArt,
    table: Color,
    current: usize,
    turn: TurnState,
    phase: Phase,
    winner: Winner,
    fade: Countdown,
    cursor: Cursor,
    on_end: EndCallback,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("current", &self.current)
            .field("winner", &self.winner)
            .field("fade", &self.fade)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// `on_end` runs once, with the outcome, when the last pair is taken.
    pub fn new(art: CardArt, on_end: impl FnMut(Winner) + 'static) -> Self {
        Self {
            board: None,
            players: Vec::new(),
            art,
            table: Color::TABLE,
            current: 0,
            turn: TurnState::default(),
            phase: Phase::Idle,
            winner: Winner::NoWinner,
            fade: Countdown::default(),
            cursor: Cursor::Default,
            on_end: Box::new(on_end),
        }
    }

    pub fn with_table_color(mut self, table: Color) -> Self {
        self.table = table;
        self
    }

    /// Hands the game its board and the two players, then starts it.
    #[instrument(skip_all, fields(cards = board.len()))]
    pub fn setup(&mut self, board: Board, players: [Player; 2]) {
        self.board = Some(board);
        self.players = players.into();
        self.winner = Winner::NoWinner;
        self.fade = Countdown::default();
        self.start();
    }

    /// Resets turn and selection. Cards left face up mid-turn are turned back.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if let Some(board) = self.board.as_mut() {
            for id in self.turn.pending() {
                if let Some(card) = board.card_mut(id) {
                    card.flip(Some(Face::Down));
                }
            }
        }
        self.current = 0;
        self.turn = TurnState::AwaitingFirstFlip;
        self.phase = Phase::InProgress;
        info!("game started");
    }

    /// Stops taking input. Turn and selection are kept as they are.
    #[instrument(skip(self))]
    pub fn quit(&mut self) {
        if self.phase == Phase::InProgress {
            self.phase = Phase::Idle;
        }
        info!(phase = ?self.phase, "game quit");
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn fade(&self) -> Countdown {
        self.fade
    }

    pub fn is_input_frozen(&self) -> bool {
        !self.turn.accepts_flip()
    }

    pub fn next_player(&mut self) {
        if !self.players.is_empty() {
            self.current = (self.current + 1) % self.players.len();
        }
    }

    /// Advances one tick: animation, countdowns, then match resolution.
    pub fn step(&mut self) {
        if let Some(board) = self.board.as_mut() {
            board.step();
        }
        self.turn.tick();
        self.fade.tick();
        self.check_match();
    }

    pub fn mouse_down(&mut self, x: f64, y: f64) {
        if self.phase != Phase::InProgress || !self.turn.accepts_flip() {
            return;
        }
        let Some(board) = self.board.as_mut() else {
            return;
        };

        if let Some(id) = board.get_card_at(x, y)
            && let Some(card) = board.card_mut(id)
            && !card.is_face_up()
        {
            card.flip(Some(Face::Up));
            debug!(card = card.label(), "card turned up");
            self.turn = match self.turn {
                TurnState::AwaitingFirstFlip => TurnState::AwaitingSecondFlip { first: id },
                TurnState::AwaitingSecondFlip { first } => {
                    TurnState::PairFlipped { first, second: id }
                }
                other => other,
            };
        }

        self.update_cursor(x, y);
    }

    pub fn mouse_move(&mut self, x: f64, y: f64) {
        self.update_cursor(x, y);
    }

    fn update_cursor(&mut self, x: f64, y: f64) {
        let over_card = self.board.as_ref().is_some_and(|board| {
            board
                .cards()
                .iter()
                .any(|card| !card.is_face_up() && card.is_over(x, y))
        });
        self.cursor = if over_card {
            Cursor::Pointer
        } else {
            Cursor::Default
        };
    }

    /// Arms the pause when a pair has just been turned up, and resolves the
    /// pair on the tick the pause reaches its last unit.
    pub fn check_match(&mut self) {
        match self.turn {
            TurnState::PairFlipped { first, second } => {
                self.turn = TurnState::ShowingPair {
                    first,
                    second,
                    remaining: FREEZE_TICKS,
                };
            }
            TurnState::ShowingPair {
                first,
                second,
                remaining: 1,
            } => {
                self.resolve_pair(first, second);
                self.turn = TurnState::Cooldown { remaining: 1 };
            }
            _ => {}
        }
    }

    #[instrument(skip(self))]
    fn resolve_pair(&mut self, first: CardId, second: CardId) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let is_match = match (board.card(first), board.card(second)) {
            (Some(a), Some(b)) => a.value() == b.value(),
            _ => false,
        };

        if is_match {
            let Some(player) = self.players.get_mut(self.current) else {
                return;
            };
            for id in [first, second] {
                if let Some(card) = board.card_mut(id) {
                    player.add_card(id, card);
                }
                board.remove_card(id);
            }
            info!(player = player.name(), matches = player.matches(), "pair matched");
            self.check_end();
        } else {
            for id in [first, second] {
                if let Some(card) = board.card_mut(id) {
                    card.flip(Some(Face::Down));
                }
            }
            self.next_player();
            debug!(current = self.current, "no match, turn passes");
        }
    }

    /// Decides the winner once every card has been collected. Runs the end
    /// callback at most once per game.
    #[instrument(skip(self))]
    pub fn check_end(&mut self) {
        if self.winner.is_decided() {
            return;
        }
        let Some(board) = self.board.as_ref() else {
            return;
        };
        let (Some(first), Some(second)) = (self.players.first(), self.players.get(1)) else {
            return;
        };

        let cards_left = board
            .len()
            .saturating_sub(first.matches() + second.matches());
        if cards_left != 0 {
            return;
        }

        self.winner = match first.matches().cmp(&second.matches()) {
            Ordering::Equal => Winner::Tie,
            Ordering::Greater => Winner::WonBy(first.id()),
            Ordering::Less => Winner::WonBy(second.id()),
        };
        info!(winner = ?self.winner, "game over");

        (self.on_end)(self.winner);
        self.fade = Countdown::new(FADE_TICKS);
        self.phase = Phase::Ended;
    }

    /// Opacity of the end-of-game message.
    pub fn overlay_alpha(&self) -> f64 {
        self.fade.progress()
    }

    /// Board, then players (current one highlighted), then cards, then the
    /// result overlay. Draws nothing before setup.
    pub fn draw(&self, cr: &cairo::Context) -> Result<(), cairo::Error> {
        let Some(board) = self.board.as_ref() else {
            return Ok(());
        };
        board.draw(cr, self.table)?;
        for (idx, player) in self.players.iter().enumerate() {
            player.draw(cr, idx == self.current)?;
        }
        board.draw_cards(cr, &self.art)?;
        if self.winner.is_decided() {
            self.draw_winner(cr, board);
        }
        Ok(())
    }

    fn draw_winner(&self, cr: &cairo::Context, board: &Board) {
        let region = board.region();
        let board_mid = region.y + region.h / 2.0;
        let (text, baseline) = match self.winner {
            Winner::NoWinner => return,
            Winner::Tie => (gettext("Draw."), board_mid),
            Winner::WonBy(id) => {
                let Some(player) = self.players.iter().find(|p| p.id() == id) else {
                    return;
                };
                let (_, player_mid) = player.region().center();
                (
                    gettext("{name} wins.").replace("{name}", player.name()),
                    board_mid + (player_mid - board_mid) / 2.0,
                )
            }
        };

        Color::WHITE.with_alpha(self.overlay_alpha()).set_source(cr);
        fill_text(
            cr,
            &text,
            OVERLAY_FAMILY,
            OVERLAY_SIZE,
            region.x + OVERLAY_INSET,
            baseline,
        );
    }
}
