use crate::state::CarState;
use std::collections::VecDeque;

/// A first-in-first-out queue of states awaiting expansion.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    /// The pending states, oldest first.
    states: VecDeque<CarState>,
    /// The largest number of states held at once.
    peak_len: usize,
}

impl Frontier {
    /// Creates a frontier holding just the given state.
    pub fn new(initial: CarState) -> Self {
        let mut frontier = Self::default();
        frontier.push(initial);
        frontier
    }

    /// Returns true if there are states left to expand.
    pub fn has_next(&self) -> bool {
        !self.states.is_empty()
    }

    /// Removes and returns the oldest state.
    pub fn pop(&mut self) -> Option<CarState> {
        self.states.pop_front()
    }

    /// Appends a state to the back of the queue.
    pub fn push(&mut self, state: CarState) {
        self.states.push_back(state);
        self.peak_len = usize::max(self.peak_len, self.states.len());
    }

    /// The number of pending states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if no states are pending.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The largest number of states that were pending at once.
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}

#[cfg(test)]
mod test {
    use super::Frontier;
    use crate::math::Coord;
    use crate::state::CarState;

    #[test]
    fn next_pop_push() {
        let st = CarState::initial(Coord::new(0, 0));
        let mut frontier = Frontier::new(st);
        assert!(frontier.has_next());
        assert_eq!(frontier.pop(), Some(st));
        assert!(!frontier.has_next());
        assert_eq!(frontier.len(), 0);
        assert_eq!(frontier.pop(), None);

        frontier.push(st);
        assert_eq!(frontier.len(), 1);
        assert!(frontier.has_next());
        assert_eq!(frontier.pop(), Some(st));
        assert!(frontier.is_empty());
    }

    #[test]
    fn pops_in_insertion_order() {
        let mut frontier = Frontier::default();
        let states = (0..4)
            .map(|i| CarState {
                steps: i,
                ..CarState::initial(Coord::new(i as i32, 0))
            })
            .collect::<Vec<_>>();
        for st in &states {
            frontier.push(*st);
        }
        frontier.pop();
        frontier.push(states[0]);
        assert_eq!(frontier.peak_len(), 4);

        let order = std::iter::from_fn(|| frontier.pop()).collect::<Vec<_>>();
        assert_eq!(order, vec![states[1], states[2], states[3], states[0]]);
    }
}
