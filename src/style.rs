use egui::{Color32, Context, Stroke, Style, Visuals};

pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(0, 120, 60);
pub const ERROR_COLOR: Color32 = Color32::from_rgb(180, 30, 30);
pub const ACCENT_COLOR: Color32 = Color32::from_rgb(99, 102, 241);

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    ctx.set_style(style);

    let mut visuals = Visuals::light();
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.0, Color32::TRANSPARENT);
    visuals.widgets.hovered.bg_fill = Color32::from_gray(235);
    visuals.widgets.active.bg_fill = Color32::from_gray(225);

    visuals.selection.bg_fill = Color32::from_rgb(210, 212, 255);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT_COLOR);

    ctx.set_visuals(visuals);
}
