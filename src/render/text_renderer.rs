use std::fmt::Write as _;

use crate::error::ControlResult;
use crate::render::{PanelFrame, PanelRenderer};

/// Renders a frame as an indented plain-text outline.
///
/// Collapsed sections list their title only. Hidden-kind widgets are skipped.
#[derive(Debug, Default)]
pub struct TextPanelRenderer {
    output: String,
}

impl TextPanelRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline produced by the last `render` call.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }
}

impl PanelRenderer for TextPanelRenderer {
    fn render(&mut self, frame: &PanelFrame) -> ControlResult<()> {
        frame.validate()?;
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", frame.label, frame.vis_type);
        for section in &frame.sections {
            let marker = if section.expanded { "[-]" } else { "[+]" };
            let _ = writeln!(out, "{marker} {}", section.label);
            if !section.expanded {
                continue;
            }
            if let Some(description) = &section.description {
                let _ = writeln!(out, "    {description}");
            }
            for row in &section.rows {
                let cells: Vec<String> = row
                    .iter()
                    .filter_map(|slot| match slot {
                        None => Some("...".to_owned()),
                        Some(slot) if slot.widget.is_hidden() => None,
                        Some(slot) => {
                            let mut cell = format!(
                                "{} <{}> {}",
                                slot.label,
                                slot.widget.name(),
                                slot.widget.summary()
                            );
                            if !slot.errors.is_empty() {
                                let _ = write!(cell, " !{}", slot.errors.join("; "));
                            }
                            Some(cell)
                        }
                    })
                    .collect();
                if cells.is_empty() {
                    continue;
                }
                let _ = writeln!(out, "  - {}", cells.join(" | "));
            }
        }
        self.output = out;
        Ok(())
    }
}
