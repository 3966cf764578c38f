use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request within a [`RequestSequence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Latest-wins ordering for overlapping requests.
///
/// Each call takes a ticket before it is issued. When responses complete
/// out of order, only the one holding the newest ticket is applied; older
/// ones are dropped.
///
/// ```ignore
/// let ticket = sequence.begin();
/// let result = client.search_by_name(&typed, 10).await;
/// if let Some(result) = sequence.settle(ticket, result) {
///     show(result);
/// }
/// ```
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every ticket issued before it
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// True if no newer ticket has been issued since `ticket`
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Hand back `value` only if `ticket` is still the newest
    pub fn settle<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::trace!(
                ticket = ticket.0,
                latest = self.latest.load(Ordering::Relaxed),
                "Discarding stale response"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_tickets_increase() {
        let seq = RequestSequence::new();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
        assert_eq!(b.id(), a.id() + 1);
    }

    #[test]
    fn test_only_latest_is_applied() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();

        // Second completes first, then the stale first arrives
        assert_eq!(seq.settle(second, "pika"), Some("pika"));
        assert_eq!(seq.settle(first, "p"), None);
        assert!(seq.is_current(second));
    }

    #[tokio::test]
    async fn test_out_of_order_completion() {
        let seq = Arc::new(RequestSequence::new());

        let slow = {
            let seq = Arc::clone(&seq);
            let ticket = seq.begin();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(30)).await;
                seq.settle(ticket, "p")
            })
        };
        let fast = {
            let seq = Arc::clone(&seq);
            let ticket = seq.begin();
            tokio::spawn(async move { seq.settle(ticket, "pik") })
        };

        assert_eq!(fast.await.unwrap(), Some("pik"));
        assert_eq!(slow.await.unwrap(), None);
    }
}
