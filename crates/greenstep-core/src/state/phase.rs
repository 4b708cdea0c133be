//! Request Lifecycle
//!
//! Every operation moves through `Started` and then exactly one of
//! `Succeeded` or `Failed`. Partitions share the same status bookkeeping.

/// One phase of an operation's lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Started,
    Succeeded(T),
    Failed(String),
}

impl<T> Phase<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Started => "started",
            Phase::Succeeded(_) => "succeeded",
            Phase::Failed(_) => "failed",
        }
    }

    /// Update `status` for this phase. Returns the payload on success so the
    /// partition can fold it into its data; other phases leave data untouched.
    pub fn settle(self, status: &mut RequestStatus) -> Option<T> {
        match self {
            Phase::Started => {
                status.loading = true;
                status.error = None;
                None
            }
            Phase::Succeeded(payload) => {
                status.loading = false;
                Some(payload)
            }
            Phase::Failed(message) => {
                status.loading = false;
                status.error = Some(message);
                None
            }
        }
    }
}

/// Partition-wide request status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestStatus {
    pub loading: bool,
    /// Message of the most recent failure, cleared when the next operation starts
    pub error: Option<String>,
}
