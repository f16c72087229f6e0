use crate::{Frame, HistoryService, ImageImporter, ToolController};

/// Editor services the selection manager works against.
///
/// Everything is reached through this trait instead of global state, so a
/// test can hand in fakes for each collaborator.
pub trait SelectionHost {
    /// The frame currently being edited, if any
    fn current_frame(&mut self) -> Option<&mut dyn Frame>;

    fn history(&mut self) -> &mut dyn HistoryService;

    fn tools(&mut self) -> &mut dyn ToolController;

    fn image_importer(&mut self) -> &mut dyn ImageImporter;
}
