use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Pushing beyond `max_depth` evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct UnpopStack<S> {
    screens: VecDeque<S>,
    max_depth: NonZeroUsize,
}

impl<S> UnpopStack<S> {
    pub fn new(max_depth: NonZeroUsize) -> Self {
        UnpopStack {
            screens: VecDeque::with_capacity(max_depth.get()),
            max_depth,
        }
    }

    pub fn push(&mut self, screen: S) {
        self.screens.push_back(screen);
        while self.screens.len() > self.max_depth.get() {
            self.screens.pop_front();
        }
    }

    pub fn pop(&mut self) -> Option<S> {
        self.screens.pop_back()
    }

    pub fn clear(&mut self) {
        self.screens.clear();
    }

    pub fn count(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn max_depth(&self) -> NonZeroUsize {
        self.max_depth
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.screens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::UnpopStack;
    use std::num::NonZeroUsize;

    fn stack(max_depth: usize) -> UnpopStack<&'static str> {
        UnpopStack::new(NonZeroUsize::new(max_depth).unwrap())
    }

    #[test]
    fn test_pop_returns_screens_in_reverse_push_order() {
        let mut sut = stack(3);
        sut.push("a");
        sut.push("b");
        assert_eq!(Some("b"), sut.pop());
        assert_eq!(Some("a"), sut.pop());
        assert_eq!(None, sut.pop());
    }

    #[test]
    fn test_oldest_screens_are_evicted_when_max_depth_is_exceeded() {
        let mut sut = stack(3);
        for screen in ["a", "b", "c", "d", "e"] {
            sut.push(screen);
        }
        assert_eq!(3, sut.count());
        assert_eq!(Some("e"), sut.pop());
        assert_eq!(Some("d"), sut.pop());
        assert_eq!(Some("c"), sut.pop());
        assert_eq!(None, sut.pop());
    }

    #[test]
    fn test_clear_empties_the_stack() {
        let mut sut = stack(2);
        sut.push("a");
        sut.push("b");
        sut.clear();
        assert!(sut.is_empty());
        assert_eq!(None, sut.pop());
    }

    #[test]
    fn test_iter_yields_oldest_first() {
        let mut sut = stack(2);
        sut.push("a");
        sut.push("b");
        sut.push("c");
        let screens: Vec<_> = sut.iter().copied().collect();
        assert_eq!(vec!["b", "c"], screens);
    }
}
