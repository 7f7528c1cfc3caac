use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// JSON body posted to the empty space finder.
///
/// Both fields carry the cluster count; the pasted CSV is not sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub data: u32,
    pub max_clusters: u32,
}

impl SubmissionPayload {
    pub const fn new(max_clusters: u32) -> Self {
        Self {
            data: max_clusters,
            max_clusters,
        }
    }
}

/// Response body of the empty space finder: MDS-scaled input rows and the
/// scaled centers of the empty regions it found.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FindResult {
    pub scaled_data: Vec<Vec<f64>>,
    pub scaled_centers: Vec<Vec<f64>>,
}

impl FindResult {
    pub fn point_count(&self) -> usize {
        self.scaled_data.len()
    }

    pub fn center_count(&self) -> usize {
        self.scaled_centers.len()
    }
}

/// Identifies one dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub id: u32,
    pub issued_at: DateTime<Utc>,
}

/// Hands out tickets in dispatch order and remembers the newest one.
///
/// Requests are never deduplicated; the ledger only decides whose outcome
/// reaches the screen.
#[derive(Debug, Default)]
pub struct SubmissionLedger {
    latest: u32,
}

impl SubmissionLedger {
    pub fn issue(&mut self, now: DateTime<Utc>) -> SubmissionTicket {
        self.latest = self.latest.wrapping_add(1);
        SubmissionTicket {
            id: self.latest,
            issued_at: now,
        }
    }

    pub const fn is_current(&self, ticket: &SubmissionTicket) -> bool {
        ticket.id == self.latest
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum SubmissionState {
    Idle,
    Pending(SubmissionTicket),
    Succeeded(SubmissionTicket, Rc<FindResult>),
    Failed(SubmissionTicket, String),
}
