use super::card::CardId;
use super::player::PlayerId;

/// Ticks a revealed pair stays on screen before it is resolved.
pub const FREEZE_TICKS: u32 = 70;
/// Ticks the end-of-game overlay takes to fade in.
pub const FADE_TICKS: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not set up yet, or quit.
    #[default]
    Idle,
    InProgress,
    Ended,
}

/// Where the current turn stands.
///
/// Input is only taken in the two `Awaiting*` states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    AwaitingFirstFlip,
    AwaitingSecondFlip { first: CardId },
    /// Both cards are up; the pause starts on the next tick.
    PairFlipped { first: CardId, second: CardId },
    /// Both cards stay visible; resolves when `remaining` reaches 1.
    ShowingPair {
        first: CardId,
        second: CardId,
        remaining: u32,
    },
    /// Last tick of the pause after a resolution.
    Cooldown { remaining: u32 },
}

impl TurnState {
    pub fn accepts_flip(&self) -> bool {
        matches!(
            self,
            TurnState::AwaitingFirstFlip | TurnState::AwaitingSecondFlip { .. }
        )
    }

    /// Cards turned up this turn and not yet resolved.
    pub fn pending(&self) -> Vec<CardId> {
        match *self {
            TurnState::AwaitingFirstFlip | TurnState::Cooldown { .. } => Vec::new(),
            TurnState::AwaitingSecondFlip { first } => vec![first],
            TurnState::PairFlipped { first, second }
            | TurnState::ShowingPair { first, second, .. } => vec![first, second],
        }
    }

    /// Ticks of input freeze left; zero while a flip can be taken.
    pub fn freeze_remaining(&self) -> u32 {
        match *self {
            TurnState::ShowingPair { remaining, .. } | TurnState::Cooldown { remaining } => {
                remaining
            }
            _ => 0,
        }
    }

    /// Per-tick countdown; runs before match resolution.
    pub(crate) fn tick(&mut self) {
        match self {
            TurnState::ShowingPair { remaining, .. } => {
                *remaining = remaining.saturating_sub(1);
            }
            TurnState::Cooldown { remaining } => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    *self = TurnState::AwaitingFirstFlip;
                }
            }
            _ => {}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Winner {
    #[default]
    NoWinner,
    Tie,
    WonBy(PlayerId),
}

impl Winner {
    pub fn is_decided(&self) -> bool {
        *self != Winner::NoWinner
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub fn css_name(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// A tick countdown that remembers where it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Countdown {
    remaining: u32,
    total: u32,
}

impl Countdown {
    pub fn new(total: u32) -> Self {
        Self {
            remaining: total,
            total,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// 0.0 when armed, 1.0 once run down (or never armed).
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.total - self.remaining) as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_reopens_input() {
        let mut turn = TurnState::Cooldown { remaining: 1 };
        assert!(!turn.accepts_flip());
        turn.tick();
        assert_eq!(turn, TurnState::AwaitingFirstFlip);
        assert!(turn.accepts_flip());
    }

    #[test]
    fn showing_pair_counts_down_without_resolving() {
        let mut turn = TurnState::ShowingPair {
            first: CardId(0),
            second: CardId(1),
            remaining: 2,
        };
        turn.tick();
        turn.tick();
        turn.tick();
        assert_eq!(turn.freeze_remaining(), 0);
        assert_eq!(turn.pending(), vec![CardId(0), CardId(1)]);
    }

    #[test]
    fn countdown_progress() {
        let mut fade = Countdown::new(FADE_TICKS);
        assert_eq!(fade.progress(), 0.0);
        for _ in 0..25 {
            fade.tick();
        }
        assert_eq!(fade.progress(), 0.5);
        for _ in 0..100 {
            fade.tick();
        }
        assert!(!fade.is_running());
        assert_eq!(fade.progress(), 1.0);
        assert_eq!(Countdown::default().progress(), 1.0);
    }
}
