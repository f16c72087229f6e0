use serde::{Deserialize, Serialize};

use crate::{Position, Result};

/// Behaviour knobs for the selection and clipboard handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSettings {
    /// Clipboard slot used for serialized selections
    #[serde(default = "default_text_mime")]
    pub text_mime: String,

    /// Re-paste the current selection instead of reading the clipboard again
    /// when it already holds pasted content.
    #[serde(default = "default_true")]
    pub reuse_pasted_content: bool,

    /// Where pasted images are inserted
    #[serde(default)]
    pub image_paste_position: Position,
}

fn default_text_mime() -> String {
    "text/plain".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            text_mime: default_text_mime(),
            reuse_pasted_content: true,
            image_paste_position: Position::default(),
        }
    }
}

impl SelectionSettings {
    /// # Errors
    ///
    /// Returns [`crate::SelectionError::InvalidSettings`] on malformed TOML.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
