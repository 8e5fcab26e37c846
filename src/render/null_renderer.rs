use crate::error::ControlResult;
use crate::render::{PanelFrame, PanelRenderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the frame so tests catch malformed layouts before a
/// real widget backend is involved.
#[derive(Debug, Default)]
pub struct NullPanelRenderer {
    pub last_section_count: usize,
    pub last_widget_count: usize,
    pub render_count: usize,
}

impl PanelRenderer for NullPanelRenderer {
    fn render(&mut self, frame: &PanelFrame) -> ControlResult<()> {
        frame.validate()?;
        self.last_section_count = frame.sections.len();
        self.last_widget_count = frame.widget_count();
        self.render_count += 1;
        Ok(())
    }
}
