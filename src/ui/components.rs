//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Ui};

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(60, 120, 200);
    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Plain toolbar button.
pub fn styled_button(ui: &mut Ui, text: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(text).size(14.0)).min_size(egui::vec2(80.0, 28.0)))
}

/// Toolbar button with a leading icon.
pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    styled_button(ui, &format!("{} {}", icon, text))
}

/// Filled button for the main action of a panel or dialog.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    let label = if icon.is_empty() {
        text.to_string()
    } else {
        format!("{} {}", icon, text)
    };
    ui.add(
        egui::Button::new(RichText::new(label).size(14.0).color(Color32::WHITE))
            .fill(colors::PRIMARY)
            .min_size(egui::vec2(80.0, 28.0)),
    )
}

/// Frameless icon button used in table rows.
pub fn action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(icon).size(16.0)).frame(false))
        .on_hover_text(tooltip)
}

/// Frameless icon button for destructive row actions.
pub fn danger_action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(icon).size(16.0).color(colors::ERROR)).frame(false))
        .on_hover_text(tooltip)
}
