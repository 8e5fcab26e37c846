mod frame;
mod null_renderer;
mod text_renderer;
mod widget;

pub use frame::{FrameRow, PanelFrame, SectionFrame, WidgetSlot};
pub use null_renderer::NullPanelRenderer;
pub use text_renderer::TextPanelRenderer;
pub use widget::{Rgba, Widget, build_widget};

use crate::error::ControlResult;

/// Contract implemented by any control panel backend.
///
/// Backends receive a fully materialized `PanelFrame`, so widget code stays
/// isolated from registry lookups, defaults and validation.
pub trait PanelRenderer {
    fn render(&mut self, frame: &PanelFrame) -> ControlResult<()>;
}

impl<R: PanelRenderer + ?Sized> PanelRenderer for &mut R {
    fn render(&mut self, frame: &PanelFrame) -> ControlResult<()> {
        (**self).render(frame)
    }
}
