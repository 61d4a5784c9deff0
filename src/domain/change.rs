use std::fmt;

use super::{Kronor, DENOMINATIONS};

/// A single row of returned change: how many pieces of one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEntry {
    pub denomination: Kronor,
    pub count: i64,
}

/// Change handed back at the end of a transaction, ordered from the
/// largest denomination to the smallest. Only denominations that are
/// actually returned appear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangeBreakdown {
    entries: Vec<ChangeEntry>,
}

impl ChangeBreakdown {
    pub fn entries(&self) -> &[ChangeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total value of the returned change.
    pub fn total(&self) -> Kronor {
        self.entries
            .iter()
            .map(|entry| entry.denomination * entry.count)
            .sum()
    }

    /// Number of physical coins and notes returned.
    pub fn piece_count(&self) -> i64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

/// Renders as "1x100kr, 2x20kr" pairs, largest denomination first.
impl fmt::Display for ChangeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}x{}kr", entry.count, entry.denomination)?;
        }
        Ok(())
    }
}

/// Decompose an amount into change, greedily taking as many of the
/// largest denomination as still fit, then moving down the set.
/// Amounts of zero or less produce an empty breakdown.
pub fn change_breakdown(amount: Kronor) -> ChangeBreakdown {
    let mut remaining = amount;
    let mut entries = Vec::new();

    for denomination in DENOMINATIONS {
        let count = remaining / denomination;
        if count > 0 {
            entries.push(ChangeEntry {
                denomination,
                count,
            });
            remaining %= denomination;
        }
    }

    ChangeBreakdown { entries }
}
