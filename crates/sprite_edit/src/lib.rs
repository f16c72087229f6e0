//! Selection and clipboard handling for a pixel sprite editor
//!
//! - [`Selection`] - the addressed pixels the user is working on
//! - [`ReplayEntry`] - compact paste/erase records for undo/redo
//! - [`clipboard`] - copy/cut/paste bridge to the host clipboard
//! - [`SelectionManager`] - owns the current selection and runs the edits
//!
//! Frame storage, the history stack and the tool state machine stay with the
//! host and are reached through [`Frame`], [`HistoryService`],
//! [`ToolController`] and [`SelectionHost`].

mod color;
mod error;
mod frame;
mod history;
mod position;
mod replay;
mod selection;
mod settings;

pub mod clipboard;
pub mod manager;
pub mod tools;

pub use color::Color;
pub use error::{Result, SelectionError};
pub use frame::{Frame, PixelFrame};
pub use history::{HistoryLog, HistoryService};
pub use position::Position;
pub use replay::{HistoryRecord, Originator, ReplayEntry};
pub use selection::{Pixel, Selection};
pub use settings::SelectionSettings;

pub use clipboard::{ClipboardBridge, ClipboardEvent, ClipboardItem, ImageBlob, ImageImporter};
pub use manager::{
    ClipboardAction, PasteResult, SelectionEvent, SelectionEventQueue, SelectionHost, SelectionManager, SelectionShortcut, ShortcutRegistrar, ShortcutResult,
};
pub use tools::{Tool, ToolController};
