use crate::{id::Id, time::Timestamp};

/// A user-submitted correction proposal referencing a pin.
///
/// Reports are never updated in place: they are created by visitors and
/// deleted by an admin after review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationReport {
    pub report_id: Id,
    pub pin_id: Id,
    /// Name of the referenced pin, snapshotted at submission time.
    pub pin_name: String,
    /// Free-text description of the proposed changes.
    pub changes: String,
    pub reported_at: Timestamp,
}
