/// Keyboard actions the selection manager binds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionShortcut {
    /// Erase the selected pixels
    Delete,
    /// Merge the floating selection into the frame
    Commit,
}

impl SelectionShortcut {
    pub const ALL: [SelectionShortcut; 2] = [SelectionShortcut::Delete, SelectionShortcut::Commit];

    pub fn name(&self) -> &'static str {
        match self {
            SelectionShortcut::Delete => "Delete selection",
            SelectionShortcut::Commit => "Commit selection",
        }
    }

    pub fn default_key(&self) -> &'static str {
        match self {
            SelectionShortcut::Delete => "Delete",
            SelectionShortcut::Commit => "Enter",
        }
    }
}

/// Whether a shortcut handler consumed the key press.
///
/// `Bubble` lets other bindings on the same key fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutResult {
    Handled,
    Bubble,
}

impl ShortcutResult {
    pub fn is_handled(&self) -> bool {
        *self == ShortcutResult::Handled
    }
}

/// Binds shortcuts to the selection manager's handlers
pub trait ShortcutRegistrar {
    fn register_shortcut(&mut self, shortcut: SelectionShortcut);
}
