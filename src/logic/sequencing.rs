//! Request sequencing
//!
//! Responses can arrive in any order. Each request gets a monotonic id and
//! only the response to the most recently issued request is applied.

/// Tracks the newest request of one kind (list fetch, preview download)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    last_issued: u64,
    in_flight: Option<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new id, superseding any request still in flight
    pub fn issue(&mut self) -> u64 {
        self.last_issued += 1;
        self.in_flight = Some(self.last_issued);
        self.last_issued
    }

    /// Whether `id` belongs to the newest issued request
    pub fn is_latest(&self, id: u64) -> bool {
        id != 0 && id == self.last_issued
    }

    /// Record a response. Returns true if it should be applied.
    ///
    /// A superseded response is rejected and leaves the newer request in flight.
    pub fn settle(&mut self, id: u64) -> bool {
        if self.in_flight == Some(id) && self.is_latest(id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Drop the in-flight request without applying anything
    pub fn cancel(&mut self) {
        self.in_flight = None;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }
}
