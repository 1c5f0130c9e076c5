use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Dispatch engine errors with source location tracking.
///
/// These never cross the engine boundary: [`crate::Engine::dispatch`]
/// renders them into [`crate::ActionOutcome::Failure`].
#[derive(Error, Debug)]
pub enum CoreError {
    /// No descriptor with the requested key exists in the store.
    #[error("Descriptor not found: {key} {location}")]
    DescriptorNotFound {
        /// The key that was looked up.
        key: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A descriptor record could not be normalised at load time.
    #[error("Invalid descriptor {key:?}: {reason} {location}")]
    DescriptorInvalid {
        /// Key of the offending record, if it had one.
        key: Option<String>,
        /// Why the record was rejected.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A process could not be started or a path/URI could not be opened.
    #[error("Launch failed for {target}: {reason} {location}")]
    LaunchFailure {
        /// The path, URI or program that failed to launch.
        target: String,
        /// Description of the launch failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Synthesised keyboard input was rejected by the OS.
    #[error("Key injection failed: {reason} {location}")]
    KeyInjectionFailure {
        /// Description of the injection failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The preference collaborator could not persist a setting.
    #[error("Failed to persist preference: {reason} {location}")]
    PreferenceFailure {
        /// Description of the persistence failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Descriptor JSON could not be parsed.
    #[error("Descriptor JSON error: {source} {location}")]
    Json {
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for CoreError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        CoreError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CoreError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl CoreError {
    /// Short operator-facing message without the source location suffix.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::DescriptorNotFound { key, .. } => format!("not found: {key}"),
            CoreError::DescriptorInvalid { key, reason, .. } => match key {
                Some(key) => format!("invalid descriptor {key}: {reason}"),
                None => format!("invalid descriptor: {reason}"),
            },
            CoreError::LaunchFailure { target, reason, .. } => {
                format!("launch failed for {target}: {reason}")
            }
            CoreError::KeyInjectionFailure { reason, .. } => format!("key injection failed: {reason}"),
            CoreError::PreferenceFailure { reason, .. } => format!("could not save setting: {reason}"),
            CoreError::Json { source, .. } => format!("bad descriptor file: {source}"),
            CoreError::Io { source, .. } => format!("io error: {source}"),
        }
    }
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
