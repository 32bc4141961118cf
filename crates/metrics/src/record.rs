//! Labeled email records and the fixed teaching population.
//!
//! Every session of the precision/recall walkthrough classifies the same
//! synthetic inbox: 100 emails, 20 spam, 80 legitimate, each with a
//! predetermined confidence score from an imaginary spam filter. The scores
//! are spread across the whole 0..=100 range so that dragging the decision
//! threshold anywhere visibly moves the confusion-matrix counts.

use serde::{Deserialize, Serialize};

/// One email with its ground-truth label and the filter's confidence that
/// it is spam, as a percentage in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Stable identifier within the population.
    pub id: u32,
    /// Ground truth: is this actually spam?
    pub is_spam: bool,
    /// Filter confidence that the email is spam, in 0..=100.
    pub confidence: u8,
}

impl EmailRecord {
    /// Create a record.
    pub const fn new(id: u32, is_spam: bool, confidence: u8) -> Self {
        Self {
            id,
            is_spam,
            confidence,
        }
    }
}

/// The shipped population: `(is_spam, confidence)` per email, ids assigned
/// in table order. Exactly 20 spam and 80 legitimate records.
///
/// Spam scores cluster high but two stragglers (44, 38) stay below the
/// default threshold of 50; six legitimate emails score 50+ as
/// false-positive bait. Both are deliberate: the walkthrough needs every
/// cell of the confusion matrix populated at the default threshold.
const INBOX_TABLE: [(bool, u8); 100] = [
    (false, 3), (false, 12), (true, 97), (false, 7), (false, 22), (false, 1), (false, 29), (true, 90), (false, 15), (false, 8),
    (false, 4), (true, 95), (false, 18), (false, 26), (false, 2), (false, 31), (false, 11), (false, 23), (true, 84), (false, 9),
    (false, 16), (false, 5), (true, 92), (false, 33), (false, 20), (false, 1), (false, 44), (true, 88), (false, 13), (false, 27),
    (false, 6), (false, 35), (false, 10), (true, 94), (false, 24), (false, 51), (false, 3), (false, 17), (true, 80), (false, 28),
    (false, 30), (false, 2), (false, 21), (true, 91), (false, 14), (false, 36), (false, 7), (true, 74), (false, 25), (false, 19),
    (false, 40), (false, 12), (true, 87), (false, 5), (false, 54), (false, 26), (false, 10), (true, 65), (false, 22), (false, 4),
    (false, 8), (false, 38), (true, 85), (false, 29), (false, 16), (false, 63), (false, 24), (true, 82), (false, 11), (false, 30),
    (false, 45), (false, 6), (true, 77), (false, 18), (false, 9), (false, 41), (false, 27), (true, 58), (false, 13), (false, 72),
    (false, 20), (false, 46), (true, 70), (false, 15), (false, 23), (false, 68), (false, 58), (true, 52), (false, 43), (false, 17),
    (false, 47), (false, 28), (true, 44), (false, 19), (false, 48), (false, 21), (false, 14), (true, 38), (false, 49), (false, 25),
];

/// Build the fixed 100-email teaching population.
///
/// Deterministic: every call returns identical records in identical order.
pub fn inbox() -> Vec<EmailRecord> {
    INBOX_TABLE
        .iter()
        .enumerate()
        .map(|(i, &(is_spam, confidence))| EmailRecord::new(i as u32, is_spam, confidence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbox_size_and_balance() {
        let records = inbox();
        assert_eq!(records.len(), 100);
        assert_eq!(records.iter().filter(|r| r.is_spam).count(), 20);
        assert_eq!(records.iter().filter(|r| !r.is_spam).count(), 80);
    }

    #[test]
    fn test_inbox_confidences_in_range() {
        for record in inbox() {
            assert!(record.confidence <= 100);
        }
    }

    #[test]
    fn test_inbox_ids_are_table_order() {
        let records = inbox();
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id, i as u32);
        }
    }

    #[test]
    fn test_inbox_is_deterministic() {
        assert_eq!(inbox(), inbox());
    }

    #[test]
    fn test_inbox_populates_every_category_at_default_threshold() {
        // At the default threshold of 50 the walkthrough needs all four
        // confusion cells occupied.
        let records = inbox();
        assert!(records.iter().any(|r| r.is_spam && r.confidence >= 50));
        assert!(records.iter().any(|r| r.is_spam && r.confidence < 50));
        assert!(records.iter().any(|r| !r.is_spam && r.confidence >= 50));
        assert!(records.iter().any(|r| !r.is_spam && r.confidence < 50));
    }
}
