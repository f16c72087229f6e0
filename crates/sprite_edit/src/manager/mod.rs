//! Selection lifecycle
//!
//! [`SelectionManager`] owns the single live selection. It reacts to
//! selection and tool notifications, runs copy/cut/paste/erase against the
//! current frame and reports every pixel mutation to the history service as
//! a [`ReplayEntry`]. On undo/redo the history service hands those entries
//! back to [`SelectionManager::replay`].
//!
//! Nothing here fails loudly: a missing selection or frame, or a clipboard
//! payload that can't be used, is logged and the operation does nothing.

mod events;
mod host;
mod shortcuts;

pub use events::{SelectionEvent, SelectionEventQueue};
pub use host::SelectionHost;
pub use shortcuts::{SelectionShortcut, ShortcutRegistrar, ShortcutResult};

use crate::clipboard::{ClipboardBridge, ClipboardEvent, PasteContent};
use crate::replay::{erase_pixels, paste_pixels};
use crate::{Frame, HistoryRecord, ReplayEntry, Selection, SelectionSettings, Tool};

/// Clipboard triggers routed through [`SelectionManager::handle_clipboard`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardAction {
    Copy,
    Cut,
    Paste,
}

/// Outcome of a paste
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasteResult {
    /// An image was handed to the image importer
    Image,
    /// Selection pixels were written to the frame
    Pixels,
    /// Nothing usable, the host's default paste should run
    Unhandled,
}

impl PasteResult {
    pub fn is_handled(&self) -> bool {
        *self != PasteResult::Unhandled
    }
}

pub struct SelectionManager<H: SelectionHost> {
    host: H,
    current_selection: Option<Selection>,
    clipboard: ClipboardBridge,
    settings: SelectionSettings,
}

impl<H: SelectionHost> SelectionManager<H> {
    pub fn new(host: H) -> Self {
        Self::with_settings(host, SelectionSettings::default())
    }

    pub fn with_settings(host: H, settings: SelectionSettings) -> Self {
        Self {
            host,
            current_selection: None,
            clipboard: ClipboardBridge::new(settings.text_mime.clone()),
            settings,
        }
    }

    /// Registers the delete and commit shortcuts
    pub fn init(&self, registrar: &mut dyn ShortcutRegistrar) {
        for shortcut in SelectionShortcut::ALL {
            registrar.register_shortcut(shortcut);
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &SelectionSettings {
        &self.settings
    }

    pub fn has_selection(&self) -> bool {
        self.current_selection.is_some()
    }

    /// Copy of the current selection
    pub fn selection(&self) -> Option<Selection> {
        self.current_selection.clone()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Notifications
    // ═══════════════════════════════════════════════════════════════════════

    pub fn handle_event(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::Created(selection) => self.on_selection_created(selection),
            SelectionEvent::Dismissed => self.on_selection_dismissed(),
            SelectionEvent::MoveRequested { col_delta, row_delta } => self.on_move_requested(col_delta, row_delta),
            SelectionEvent::ToolChanged(tool) => self.on_tool_changed(tool),
        }
    }

    /// Replaces the current selection. A missing payload leaves the old one in place.
    pub fn on_selection_created(&mut self, selection: Option<Selection>) {
        match selection {
            Some(selection) => self.current_selection = Some(selection),
            None => log::error!("No selection provided to selection manager"),
        }
    }

    pub fn on_selection_dismissed(&mut self) {
        self.clean_selection();
    }

    pub fn on_tool_changed(&mut self, tool: Tool) {
        if !tool.is_selection_tool() {
            log::debug!("Tool changed to {}, dropping selection", tool.name());
            self.clean_selection();
        }
    }

    pub fn on_move_requested(&mut self, col_delta: i32, row_delta: i32) {
        let Some(selection) = self.current_selection.as_mut() else {
            log::error!("Bad state: no current selection set when trying to move it");
            return;
        };
        if !selection.move_by(col_delta, row_delta) {
            log::warn!("Selection move by ({col_delta}, {row_delta}) leaves the addressable range, ignored");
        }
    }

    fn clean_selection(&mut self) {
        if let Some(mut selection) = self.current_selection.take() {
            selection.reset();
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Shortcuts
    // ═══════════════════════════════════════════════════════════════════════

    pub fn handle_shortcut(&mut self, shortcut: SelectionShortcut) -> ShortcutResult {
        match shortcut {
            SelectionShortcut::Delete => self.on_delete_shortcut(),
            SelectionShortcut::Commit => self.commit(),
        }
    }

    /// Erases the selection, or bubbles if there is none
    pub fn on_delete_shortcut(&mut self) -> ShortcutResult {
        if self.current_selection.is_some() {
            self.erase();
            ShortcutResult::Handled
        } else {
            ShortcutResult::Bubble
        }
    }

    /// Lets the active selection tool merge its selection into the frame
    pub fn commit(&mut self) -> ShortcutResult {
        let tools = self.host.tools();
        if tools.active_tool().is_selection_tool() {
            tools.commit_selection();
            ShortcutResult::Handled
        } else {
            ShortcutResult::Bubble
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pixel operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Makes every selected pixel of the current frame transparent
    pub fn erase(&mut self) {
        let Some(selection) = self.current_selection.as_ref() else {
            log::error!("Erase requested without a selection");
            return;
        };
        let Some(frame) = self.host.current_frame() else {
            log::error!("Erase requested without a current frame");
            return;
        };
        erase_pixels(frame, selection.pixels());

        let entry = ReplayEntry::erase(selection.pixels());
        self.host.history().save_state(HistoryRecord::selection(entry));
    }

    /// Re-applies a recorded entry. `frame` is whatever frame is active at undo/redo time.
    pub fn replay(&self, frame: &mut dyn Frame, entry: &ReplayEntry) {
        entry.apply(frame);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Clipboard
    // ═══════════════════════════════════════════════════════════════════════

    /// Returns true if the event was handled and the default action must not run
    pub fn handle_clipboard(&mut self, action: ClipboardAction, event: &mut ClipboardEvent) -> bool {
        match action {
            ClipboardAction::Copy => self.copy(event),
            ClipboardAction::Cut => self.cut(event),
            ClipboardAction::Paste => self.paste(event).is_handled(),
        }
    }

    /// Writes the current selection, refreshed from the frame, to the clipboard.
    ///
    /// Without a selection or frame nothing happens and the default copy proceeds.
    pub fn copy(&mut self, event: &mut ClipboardEvent) -> bool {
        let Some(selection) = self.current_selection.as_mut() else {
            return false;
        };
        let Some(frame) = self.host.current_frame() else {
            return false;
        };
        selection.fill_from_frame(frame);
        self.clipboard.write_selection(event, selection)
    }

    /// Copy, then erase the copied pixels
    pub fn cut(&mut self, event: &mut ClipboardEvent) -> bool {
        if !self.copy(event) {
            return false;
        }
        self.erase();
        true
    }

    /// Pastes an image or selection from the clipboard.
    ///
    /// Images always win and go to the image importer. Otherwise a current
    /// selection that already holds pasted content is pasted again and the
    /// clipboard text is ignored; failing that the clipboard selection is
    /// pasted and becomes the current selection.
    pub fn paste(&mut self, event: &mut ClipboardEvent) -> PasteResult {
        let clipboard_selection = match self.clipboard.read_paste(event) {
            PasteContent::Image(blob) => {
                let position = self.settings.image_paste_position;
                log::debug!("Importing pasted {} image at {position}", blob.mime);
                self.host.image_importer().import_image(blob, position);
                event.stop_propagation();
                return PasteResult::Image;
            }
            PasteContent::Selection(selection) => Some(selection),
            PasteContent::Nothing => None,
        };
        log::info!("Clipboard doesn't contain any image");

        let reuse = self.settings.reuse_pasted_content && self.current_selection.as_ref().is_some_and(Selection::has_pasted_content);
        let pasted = match (reuse, clipboard_selection) {
            (true, _) => None,
            (false, Some(selection)) => Some(selection),
            (false, None) => return PasteResult::Unhandled,
        };

        let Some(frame) = self.host.current_frame() else {
            log::error!("Paste requested without a current frame");
            return PasteResult::Unhandled;
        };
        if let Some(selection) = pasted {
            self.current_selection = Some(selection);
        }
        let Some(selection) = self.current_selection.as_ref() else {
            return PasteResult::Unhandled;
        };
        paste_pixels(frame, selection.pixels());

        let entry = ReplayEntry::paste(selection.pixels());
        self.host.history().save_state(HistoryRecord::selection(entry));
        event.prevent_default();
        PasteResult::Pixels
    }
}
