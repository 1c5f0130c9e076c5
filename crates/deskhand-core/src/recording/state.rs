use std::time::SystemTime;

use uuid::Uuid;

/// Screen-recording session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    /// Not currently recording.
    Idle,
    /// The OS capture facility is recording.
    Recording {
        /// Wall-clock start, compared against clip modification times.
        started_at: SystemTime,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}
