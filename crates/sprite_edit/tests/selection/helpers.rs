//! Shared test helpers for selection tests

#![allow(dead_code)]

use sprite_edit::{
    Color, Frame, HistoryLog, HistoryService, ImageBlob, ImageImporter, Pixel, PixelFrame, Position, ReplayEntry, Selection, SelectionHost, SelectionManager,
    SelectionShortcut, ShortcutRegistrar, Tool, ToolController,
};

#[derive(Default)]
pub struct TestTools {
    pub active: Tool,
    pub commits: usize,
}

impl ToolController for TestTools {
    fn active_tool(&self) -> Tool {
        self.active
    }

    fn commit_selection(&mut self) {
        self.commits += 1;
    }
}

#[derive(Default)]
pub struct TestImporter {
    pub imported: Vec<(ImageBlob, Position)>,
}

impl ImageImporter for TestImporter {
    fn import_image(&mut self, blob: ImageBlob, position: Position) {
        self.imported.push((blob, position));
    }
}

#[derive(Default)]
pub struct TestRegistrar {
    pub registered: Vec<SelectionShortcut>,
}

impl ShortcutRegistrar for TestRegistrar {
    fn register_shortcut(&mut self, shortcut: SelectionShortcut) {
        self.registered.push(shortcut);
    }
}

pub struct TestHost {
    pub frame: Option<PixelFrame>,
    pub history: HistoryLog,
    pub tools: TestTools,
    pub importer: TestImporter,
}

impl SelectionHost for TestHost {
    fn current_frame(&mut self) -> Option<&mut dyn Frame> {
        self.frame.as_mut().map(|f| f as &mut dyn Frame)
    }

    fn history(&mut self) -> &mut dyn HistoryService {
        &mut self.history
    }

    fn tools(&mut self) -> &mut dyn ToolController {
        &mut self.tools
    }

    fn image_importer(&mut self) -> &mut dyn ImageImporter {
        &mut self.importer
    }
}

/// Routes the crate's log output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

/// Host with the given frame and the rectangle selection tool active
pub fn create_host(frame: Option<PixelFrame>) -> TestHost {
    init_logging();
    TestHost {
        frame,
        history: HistoryLog::new(),
        tools: TestTools {
            active: Tool::RectangleSelect,
            commits: 0,
        },
        importer: TestImporter::default(),
    }
}

/// Manager over an 8x8 frame with a color gradient
pub fn create_manager() -> SelectionManager<TestHost> {
    SelectionManager::new(create_host(Some(create_gradient_frame(8, 8))))
}

/// Every pixel gets a distinct opaque color
pub fn create_gradient_frame(width: i32, height: i32) -> PixelFrame {
    let mut frame = PixelFrame::new(width, height);
    for row in 0..height {
        for col in 0..width {
            frame.set_pixel(col, row, gradient_color(col, row));
        }
    }
    frame
}

pub fn gradient_color(col: i32, row: i32) -> Color {
    Color::rgb((col * 16) as u8, (row * 16) as u8, 0x80)
}

pub fn frame(manager: &SelectionManager<TestHost>) -> &PixelFrame {
    manager.host().frame.as_ref().expect("test host has a frame")
}

pub fn history(manager: &SelectionManager<TestHost>) -> &HistoryLog {
    &manager.host().history
}

pub fn entries(manager: &SelectionManager<TestHost>) -> Vec<ReplayEntry> {
    history(manager).records().iter().map(|r| r.entry.clone()).collect()
}

pub fn colored_selection(pixels: &[(i32, i32, Option<Color>)]) -> Selection {
    pixels.iter().map(|&(col, row, color)| Pixel::new(col, row, color)).collect()
}
