/// Token identifying one scheduled timer.
///
/// Every arming allocates a fresh token, so a fire that arrives after the
/// timer was superseded, consumed, or the session reset simply misses and
/// becomes a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Allocates unique timer tokens for one runner instance.
#[derive(Debug, Default)]
pub(crate) struct TimerLedger {
    next: u64,
}

impl TimerLedger {
    pub(crate) fn arm(&mut self) -> TimerId {
        self.next += 1;
        TimerId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let mut ledger = TimerLedger::default();
        let a = ledger.arm();
        let b = ledger.arm();
        assert_ne!(a, b);
    }
}
