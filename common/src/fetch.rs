use std::cell::Cell;
use std::rc::Rc;

/// Orders overlapping async fetches so only the most recently started one
/// may publish its result. Begin a fetch, hold the ticket across the
/// await, and check it before writing anything back: a ticket that is no
/// longer current belongs to a superseded request and its response must be
/// dropped.
#[derive(Clone, Debug, Default)]
pub struct FetchSequence {
    latest: Rc<Cell<u64>>,
}

/// Handle for one in-flight fetch, issued by [`FetchSequence::begin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding any still in flight.
    pub fn begin(&self) -> FetchTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        FetchTicket { seq: next }
    }

    /// True while `ticket` is still the most recent fetch.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.latest.get() == ticket.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_fetch_is_current() {
        let seq = FetchSequence::new();
        let ticket = seq.begin();
        assert!(seq.is_current(&ticket));
    }

    #[test]
    fn test_newer_fetch_supersedes_older() {
        let seq = FetchSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(&first));
        assert!(seq.is_current(&second));
    }

    #[test]
    fn test_stale_response_after_newer_request() {
        // A fetch for business A is still in flight when the user switches
        // to business B; A's response resolves last and must be dropped.
        let seq = FetchSequence::new();
        let for_business_a = seq.begin();
        let for_business_b = seq.begin();
        // B resolves first and publishes.
        assert!(seq.is_current(&for_business_b));
        // A resolves late; its ticket is stale regardless of arrival order.
        assert!(!seq.is_current(&for_business_a));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let seq = FetchSequence::new();
        let ticket = seq.begin();
        let clone = seq.clone();
        let newer = clone.begin();
        assert!(!seq.is_current(&ticket));
        assert!(seq.is_current(&newer));
    }
}
