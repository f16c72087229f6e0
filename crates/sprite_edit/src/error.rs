//! Unified error types for sprite_edit

use thiserror::Error;

/// Main error type for selection and clipboard operations
#[derive(Debug, Error)]
pub enum SelectionError {
    // === Clipboard Payload Errors ===
    #[error("Invalid clipboard selection payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Clipboard item '{mime}' does not carry text")]
    NotText { mime: String },

    // === Value Errors ===
    #[error("Invalid color: {value}")]
    InvalidColor { value: String },

    // === Settings Errors ===
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),

    // === Host Clipboard Errors ===
    #[error("Clipboard access failed: {message}")]
    ClipboardAccess { message: String },
}

/// Result type alias for sprite_edit operations
pub type Result<T> = std::result::Result<T, SelectionError>;

impl SelectionError {
    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor { value: value.into() }
    }

    /// Create a clipboard access error from any displayable type
    pub fn clipboard_access(msg: impl std::fmt::Display) -> Self {
        Self::ClipboardAccess { message: msg.to_string() }
    }
}
