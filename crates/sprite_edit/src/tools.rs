//! Tool definitions for sprite editing
//!
//! Only the selection tools own a selection. Switching to any other tool
//! tears the current selection down.

/// Available drawing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Freehand pen
    #[default]
    Pen,
    /// Pen mirrored around the vertical axis
    MirrorPen,
    /// Flood fill area
    PaintBucket,
    /// Replace one color by another
    ColorSwap,
    Eraser,
    /// Straight lines
    Stroke,
    Rectangle,
    Circle,
    /// Move the frame content
    Move,

    // === Selection tools ===
    /// Magic wand style selection of same colored pixels
    ShapeSelect,
    RectangleSelect,
    LassoSelect,

    Lighten,
    Dithering,
    /// Pick color from canvas
    ColorPicker,
}

impl Tool {
    pub const ALL: [Tool; 15] = [
        Tool::Pen,
        Tool::MirrorPen,
        Tool::PaintBucket,
        Tool::ColorSwap,
        Tool::Eraser,
        Tool::Stroke,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Move,
        Tool::ShapeSelect,
        Tool::RectangleSelect,
        Tool::LassoSelect,
        Tool::Lighten,
        Tool::Dithering,
        Tool::ColorPicker,
    ];

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::MirrorPen => "Vertical Mirror Pen",
            Tool::PaintBucket => "Paint Bucket",
            Tool::ColorSwap => "Paint All Pixels Of The Same Color",
            Tool::Eraser => "Eraser",
            Tool::Stroke => "Stroke",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Move => "Move",
            Tool::ShapeSelect => "Shape Selection",
            Tool::RectangleSelect => "Rectangle Selection",
            Tool::LassoSelect => "Lasso Selection",
            Tool::Lighten => "Lighten",
            Tool::Dithering => "Dithering",
            Tool::ColorPicker => "Color Picker",
        }
    }

    /// Get the keyboard shortcut
    pub fn shortcut(&self) -> Option<char> {
        match self {
            Tool::Pen => Some('p'),
            Tool::MirrorPen => Some('v'),
            Tool::PaintBucket => Some('b'),
            Tool::ColorSwap => None,
            Tool::Eraser => Some('e'),
            Tool::Stroke => Some('l'),
            Tool::Rectangle => Some('r'),
            Tool::Circle => Some('c'),
            Tool::Move => Some('m'),
            Tool::ShapeSelect => Some('z'),
            Tool::RectangleSelect => Some('s'),
            Tool::LassoSelect => Some('h'),
            Tool::Lighten => Some('u'),
            Tool::Dithering => Some('t'),
            Tool::ColorPicker => Some('o'),
        }
    }

    /// Check if this tool creates and manipulates selections
    pub fn is_selection_tool(&self) -> bool {
        matches!(self, Tool::ShapeSelect | Tool::RectangleSelect | Tool::LassoSelect)
    }
}

/// Access to the editor's active tool
pub trait ToolController {
    fn active_tool(&self) -> Tool;

    /// Asks the active selection tool to merge its floating selection into the frame
    fn commit_selection(&mut self);
}
