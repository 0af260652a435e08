//! Ticket number generation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// High-water mark of the last issued millisecond value. Guarantees
/// strictly increasing numbers even when two tickets are created within
/// the same millisecond.
static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Generate a ticket number of the form `TICKET-<epoch millis>`.
///
/// Numbers are strictly monotonic within a process; the database unique
/// constraint on `ticket_number` is the cross-process backstop.
pub fn generate() -> String {
    let now = Utc::now().timestamp_millis();
    let issued = LAST_ISSUED
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .expect("fetch_update closure never returns None");
    // fetch_update returns the previous value; recompute what we stored.
    let value = now.max(issued + 1);
    format!("TICKET-{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_has_ticket_prefix() {
        let number = generate();
        assert!(number.starts_with("TICKET-"));
        assert!(number["TICKET-".len()..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_burst_generation_is_unique_and_increasing() {
        let numbers: Vec<String> = (0..1000).map(|_| generate()).collect();

        let unique: HashSet<&String> = numbers.iter().collect();
        assert_eq!(unique.len(), numbers.len());

        let values: Vec<i64> = numbers
            .iter()
            .map(|n| n["TICKET-".len()..].parse().unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}
