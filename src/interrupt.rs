use crate::{ExactNum, Turn};

/// Consulted after every turn appended by the generator.
///
/// Returning `true` stops the generation early. This is how queries
/// that only need to know whether two geometries meet avoid
/// enumerating all turns.
pub trait InterruptPolicy<T: ExactNum> {
    fn apply(&mut self, turn: &Turn<T>) -> bool;
}

/// Never interrupts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterrupt;

impl<T: ExactNum> InterruptPolicy<T> for NoInterrupt {
    #[inline]
    fn apply(&mut self, _turn: &Turn<T>) -> bool {
        false
    }
}

/// Interrupts at the first turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstTurn {
    found: bool,
}

impl FirstTurn {
    /// Whether a turn was seen.
    #[must_use]
    pub fn found(&self) -> bool {
        self.found
    }
}

impl<T: ExactNum> InterruptPolicy<T> for FirstTurn {
    #[inline]
    fn apply(&mut self, _turn: &Turn<T>) -> bool {
        self.found = true;
        true
    }
}

impl<T: ExactNum, F: FnMut(&Turn<T>) -> bool> InterruptPolicy<T> for F {
    #[inline]
    fn apply(&mut self, turn: &Turn<T>) -> bool {
        self(turn)
    }
}
