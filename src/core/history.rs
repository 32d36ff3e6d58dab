//! Navigation history tracking.
//!
//! Provides immutable tracking of the navigations a router performed
//! during one session. History lives in memory only.

use super::direction::TransitionDirection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single navigation.
///
/// # Example
///
/// ```rust
/// use wayfinder::core::{NavigationRecord, TransitionDirection};
/// use chrono::Utc;
///
/// let record = NavigationRecord {
///     from: "home".to_string(),
///     to: "detail".to_string(),
///     direction: TransitionDirection::Push,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "detail");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationRecord {
    /// Name of the screen that was current before the navigation
    pub from: String,
    /// Name of the screen that became current
    pub to: String,
    /// Whether the destination was pushed or popped to
    pub direction: TransitionDirection,
    /// When the navigation occurred
    pub timestamp: DateTime<Utc>,
}

impl NavigationRecord {
    /// Create a record stamped with the current time.
    pub fn now(
        from: impl Into<String>,
        to: impl Into<String>,
        direction: TransitionDirection,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            direction,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of navigations.
///
/// History is immutable - the `record` method returns a new history
/// with the navigation added. An optional retention limit discards the
/// oldest records once exceeded. The limit is also applied when a history
/// is deserialized.
///
/// # Example
///
/// ```rust
/// use wayfinder::core::{NavigationHistory, NavigationRecord, TransitionDirection};
///
/// let history = NavigationHistory::new()
///     .record(NavigationRecord::now("home", "detail", TransitionDirection::Push))
///     .record(NavigationRecord::now("detail", "edit", TransitionDirection::Push))
///     .record(NavigationRecord::now("edit", "home", TransitionDirection::Pop));
///
/// assert_eq!(history.get_path(), vec!["home", "detail", "edit", "home"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct NavigationHistory {
    records: Vec<NavigationRecord>,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct StoredHistory {
    records: Vec<NavigationRecord>,
    #[serde(default)]
    limit: Option<usize>,
}

impl From<StoredHistory> for NavigationHistory {
    fn from(stored: StoredHistory) -> Self {
        let mut records = stored.records;
        retain_newest(&mut records, stored.limit);
        Self {
            records,
            limit: stored.limit,
        }
    }
}

fn retain_newest(records: &mut Vec<NavigationRecord>, limit: Option<usize>) {
    if let Some(limit) = limit {
        let overflow = records.len().saturating_sub(limit);
        records.drain(..overflow);
    }
}

impl NavigationHistory {
    /// Create a new empty history without a retention limit.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            limit: None,
        }
    }

    /// Create a new empty history keeping at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Record a navigation, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, record: NavigationRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        retain_newest(&mut records, self.limit);

        Self {
            records,
            limit: self.limit,
        }
    }

    /// Get the path of screen names traversed.
    ///
    /// Returns the `from` of the first record, then the `to` of every record.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Time elapsed between the first and the last retained record.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// The most recent navigation.
    pub fn last(&self) -> Option<&NavigationRecord> {
        self.records.last()
    }

    pub fn records(&self) -> &[NavigationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The retention limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
