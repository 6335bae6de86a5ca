//! State for the counter.

use std::fmt;

use crate::flux::State;

/// Current counter value.
///
/// A thin wrapper over `i64`; the value may go negative. The default is
/// zero, which is also the baseline a bootstrap-constructed store derives
/// from the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: i64,
}

impl CounterState {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl State for CounterState {}

impl fmt::Display for CounterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(CounterState::default().value(), 0);
    }

    #[test]
    fn may_go_negative() {
        assert_eq!(CounterState::new(-5).value(), -5);
    }

    #[test]
    fn displays_as_plain_number() {
        assert_eq!(CounterState::new(42).to_string(), "42");
        assert_eq!(CounterState::new(-1).to_string(), "-1");
    }
}
