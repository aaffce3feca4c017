use crate::tools::ToolKind;
use egui::{RichText, Ui};

pub struct Nav;

impl Nav {
    /// Tool list. Returns the tool the user switched to, if any.
    pub fn show(ui: &mut Ui, active: ToolKind) -> Option<ToolKind> {
        let mut selected = None;

        ui.add_space(4.0);
        ui.spacing_mut().item_spacing.y = 6.0;

        for tool in ToolKind::ALL {
            let label = RichText::new(format!("{}  {}", tool.icon(), tool.title()));
            if ui.selectable_label(tool == active, label).clicked() && tool != active {
                selected = Some(tool);
            }
        }

        selected
    }
}
