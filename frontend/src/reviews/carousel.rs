//! Looping carousel over a list rendered three times back to back.
//!
//! The state only deals in item indices into the tripled sequence. The
//! component turns each [`CarouselMove`] into scroll calls on the track.

use std::rc::Rc;
use yew::Reducible;

/// How many times the list is repeated in the track.
pub const COPIES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselMove {
    /// Jump without animation (initial positioning).
    Instant(usize),
    Smooth(usize),
    /// Jump without animation to `to`, then animate to `then`.
    Reanchor { to: usize, then: usize },
}

pub enum CarouselAction {
    Tick,
    HoverStart,
    HoverEnd,
    JumpTo(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub item_count: usize,
    /// Index into the tripled sequence, kept inside the middle copy.
    pub current: usize,
    pub hovered: bool,
    /// Bumped on every move; the view applies `last_move` when it changes.
    pub moves: u64,
    pub last_move: Option<CarouselMove>,
}

impl CarouselState {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            current: item_count,
            hovered: false,
            moves: 1,
            last_move: (item_count > 0).then(|| CarouselMove::Instant(item_count)),
        }
    }

    pub fn total_items(&self) -> usize {
        self.item_count * COPIES
    }

    /// Which indicator is highlighted.
    pub fn display_index(&self) -> usize {
        if self.item_count == 0 {
            0
        } else {
            self.current % self.item_count
        }
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.item_count == 0
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Tick => self.advance(),
            CarouselAction::HoverStart => self.hovered = true,
            CarouselAction::HoverEnd => self.hovered = false,
            CarouselAction::JumpTo(i) => {
                if i < self.item_count {
                    self.current = self.item_count + i;
                    self.record(CarouselMove::Smooth(self.current));
                }
            }
        }
    }

    fn advance(&mut self) {
        if self.is_paused() {
            return;
        }
        let n = self.item_count;
        let next = self.current + 1;
        if next >= 2 * n {
            // Tail copy looks exactly like the middle one, so snap back a
            // copy before animating the step.
            let to = self.current - n;
            self.current = next - n;
            self.record(CarouselMove::Reanchor { to, then: self.current });
        } else {
            self.current = next;
            self.record(CarouselMove::Smooth(next));
        }
    }

    fn record(&mut self, mv: CarouselMove) {
        self.last_move = Some(mv);
        self.moves += 1;
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Horizontal offset of item `index` on a track `scroll_width` pixels wide.
pub fn offset_for(index: usize, scroll_width: f64, total_items: usize) -> f64 {
    if total_items == 0 {
        return 0.0;
    }
    index as f64 * (scroll_width / total_items as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_item_of_middle_copy() {
        let state = CarouselState::new(5);
        assert_eq!(state.current, 5);
        assert_eq!(state.display_index(), 0);
        assert_eq!(state.last_move, Some(CarouselMove::Instant(5)));
        assert_eq!(state.total_items(), 15);
    }

    #[test]
    fn full_loop_returns_to_first_indicator() {
        let mut state = CarouselState::new(5);
        let mut seen = Vec::new();
        for _ in 0..5 {
            state.apply(CarouselAction::Tick);
            seen.push(state.display_index());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn leaving_middle_copy_reanchors_first() {
        let mut state = CarouselState::new(5);
        for _ in 0..4 {
            state.apply(CarouselAction::Tick);
        }
        assert_eq!(state.current, 9);
        assert_eq!(state.last_move, Some(CarouselMove::Smooth(9)));

        state.apply(CarouselAction::Tick);
        assert_eq!(state.last_move, Some(CarouselMove::Reanchor { to: 4, then: 5 }));
        assert_eq!(state.current, 5);
    }

    #[test]
    fn stays_bounded_over_many_ticks() {
        let mut state = CarouselState::new(3);
        for _ in 0..100 {
            state.apply(CarouselAction::Tick);
            assert!(state.current >= 3 && state.current < 6);
        }
        assert_eq!(state.display_index(), 100 % 3);
    }

    #[test]
    fn hover_freezes_position() {
        let mut state = CarouselState::new(5);
        state.apply(CarouselAction::Tick);
        state.apply(CarouselAction::HoverStart);
        let frozen = state.clone();
        for _ in 0..10 {
            state.apply(CarouselAction::Tick);
        }
        assert_eq!(state.current, frozen.current);
        assert_eq!(state.moves, frozen.moves);
        assert_eq!(state.last_move, frozen.last_move);

        state.apply(CarouselAction::HoverEnd);
        state.apply(CarouselAction::Tick);
        assert_eq!(state.current, frozen.current + 1);
    }

    #[test]
    fn indicator_jumps_into_middle_copy() {
        let mut state = CarouselState::new(5);
        state.apply(CarouselAction::JumpTo(3));
        assert_eq!(state.current, 8);
        assert_eq!(state.display_index(), 3);
        assert_eq!(state.last_move, Some(CarouselMove::Smooth(8)));

        let moves = state.moves;
        state.apply(CarouselAction::JumpTo(3));
        assert_eq!(state.moves, moves + 1, "same target still counts as a move");

        state.apply(CarouselAction::JumpTo(9));
        assert_eq!(state.current, 8);
    }

    #[test]
    fn empty_list_never_moves() {
        let mut state = CarouselState::new(0);
        state.apply(CarouselAction::Tick);
        state.apply(CarouselAction::JumpTo(0));
        assert_eq!(state.current, 0);
        assert_eq!(state.last_move, None);
        assert!(state.is_paused());
    }

    #[test]
    fn offsets_scale_with_track_width() {
        assert_eq!(offset_for(5, 1500.0, 15), 500.0);
        assert_eq!(offset_for(0, 1500.0, 15), 0.0);
        assert_eq!(offset_for(3, 1500.0, 0), 0.0);
    }
}
