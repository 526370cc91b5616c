use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// A divider.
/// Down counter that reloads from its period when clocked at 0, and signals its owner when it does.
/// Shared by the sweep and envelope units.
pub struct Divider {
    /// The value reloaded into the counter
    pub period: u8,
    /// The current value of the counter
    pub counter: u8,
}
impl Divider {
    pub fn new(period: u8) -> Divider {
        Divider { period, counter: 0 }
    }
    /// Clock the divider.
    /// Return `true` if the counter was at 0 and has been reloaded.
    pub fn clock(&mut self) -> bool {
        if self.counter == 0 {
            self.counter = self.period;
            true
        } else {
            self.counter -= 1;
            false
        }
    }
    /// Reload the counter with the period, regardless of its current value
    pub fn force_reload(&mut self) {
        self.counter = self.period;
    }
}
impl Debug for Divider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:X}/{:X}", self.counter, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::Divider;

    #[test]
    fn test_fires_at_zero() {
        let mut d = Divider::new(2);
        assert!(d.clock());
        assert_eq!(d.counter, 2);
        assert!(!d.clock());
        assert!(!d.clock());
        assert_eq!(d.counter, 0);
        assert!(d.clock());
        assert_eq!(d.counter, 2);
    }

    #[test]
    fn test_period_zero_fires_every_clock() {
        let mut d = Divider::new(0);
        (0..5).for_each(|_| assert!(d.clock()));
        assert_eq!(d.counter, 0);
    }

    #[test]
    fn test_force_reload() {
        let mut d = Divider::new(7);
        d.counter = 3;
        d.force_reload();
        assert_eq!(d.counter, 7);
        // Period changes only take effect on the next reload
        d.period = 1;
        assert!(!d.clock());
        assert_eq!(d.counter, 6);
    }
}
