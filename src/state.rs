use crate::error::ErrorKind;

/// Position of one widget within its slide range.
///
/// `first <= current <= last` holds for every value this type hands out.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WidgetState {
    current: i64,
    first: i64,
    last: i64,
}

impl WidgetState {
    /// Starts at `first`.
    pub fn new(first: i64, last: i64) -> Result<Self, ErrorKind> {
        if first > last {
            return Err(ErrorKind::InvalidRange { start: first, end: last });
        }
        Ok(Self { current: first, first, last })
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn first(&self) -> i64 {
        self.first
    }

    pub fn last(&self) -> i64 {
        self.last
    }

    /// Number of slides in the range. The full `i64` range holds 2^64 slides.
    pub fn len(&self) -> u128 {
        u128::from(self.last.abs_diff(self.first)) + 1
    }

    // Wraps to `first` past the end
    pub fn advance(&mut self) {
        self.current = if self.current < self.last { self.current + 1 } else { self.first };
    }

    // Wraps to `last` before the start
    pub fn retreat(&mut self) {
        self.current = if self.current > self.first { self.current - 1 } else { self.last };
    }

    pub fn counter_text(&self) -> String {
        format!("Slide {} of {}-{}", self.current, self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first() {
        for (first, last) in [(1, 5), (0, 0), (-3, 2), (10, 11)] {
            let state = WidgetState::new(first, last).unwrap();
            assert_eq!(state.current(), first);
            assert_eq!(state.first(), first);
            assert_eq!(state.last(), last);
        }
    }

    #[test]
    fn rejects_reversed_range() {
        assert_eq!(
            WidgetState::new(5, 1),
            Err(ErrorKind::InvalidRange { start: 5, end: 1 })
        );
    }

    #[test]
    fn advance_wraps_to_first() {
        let mut state = WidgetState::new(1, 5).unwrap();
        let mut seen = Vec::new();
        for _ in 0..5 {
            state.advance();
            seen.push(state.current());
        }
        assert_eq!(seen, vec![2, 3, 4, 5, 1]);
        assert_eq!(state.counter_text(), "Slide 1 of 1-5");
    }

    #[test]
    fn retreat_wraps_to_last() {
        let mut state = WidgetState::new(1, 5).unwrap();
        state.retreat();
        assert_eq!(state.current(), 5);
        assert_eq!(state.counter_text(), "Slide 5 of 1-5");
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut state = WidgetState::new(-2, 4).unwrap();
        for offset in 0..state.len() {
            let mut cursor = state;
            for _ in 0..offset {
                cursor.advance();
            }
            let start = cursor.current();
            for _ in 0..cursor.len() {
                cursor.advance();
            }
            assert_eq!(cursor.current(), start);
        }
        state.advance();
        assert_eq!(state.current(), -1);
    }

    #[test]
    fn retreat_undoes_advance() {
        let mut state = WidgetState::new(3, 7).unwrap();
        for _ in 0..12 {
            let before = state;
            state.advance();
            state.retreat();
            assert_eq!(state, before);
            state.advance();
        }
        for _ in 0..12 {
            let before = state;
            state.retreat();
            state.advance();
            assert_eq!(state, before);
            state.retreat();
        }
    }

    #[test]
    fn stays_in_range_for_mixed_steps() {
        let mut state = WidgetState::new(1, 3).unwrap();
        // n = next, p = previous
        for step in "nnpppnpnnnnpppppn".chars() {
            if step == 'n' {
                state.advance();
            } else {
                state.retreat();
            }
            assert!(state.first() <= state.current() && state.current() <= state.last());
        }
    }

    #[test]
    fn widest_range_counts_and_wraps() {
        let mut state = WidgetState::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(state.len(), 1u128 << 64);
        state.retreat();
        assert_eq!(state.current(), i64::MAX);
        state.advance();
        assert_eq!(state.current(), i64::MIN);
    }

    #[test]
    fn single_slide_range_is_fixed() {
        let mut state = WidgetState::new(4, 4).unwrap();
        state.advance();
        assert_eq!(state.current(), 4);
        state.retreat();
        assert_eq!(state.current(), 4);
        assert_eq!(state.len(), 1);
    }
}
