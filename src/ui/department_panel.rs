//! Department management panel.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget};
use super::components::{
    action_button, colors, danger_action_button, panel_header, primary_button_with_icon, styled_button,
    styled_button_with_icon,
};
use crate::workflow::{FormCommand, ListCommand};

/// Show the department panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Manage Departments");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "New").clicked() {
            app.department_command(ListCommand::New);
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.refresh_departments();
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.department_form.is_some() {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let mut edit = None;
    let mut delete = None;

    ui.label(format!("{} departments", app.departments.rows().len()));
    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("departments_scroll").show(ui, |ui| {
        egui::Grid::new("departments_grid")
            .num_columns(3)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Id");
                ui.strong("Name");
                ui.strong("Actions");
                ui.end_row();

                for dept in app.departments.rows() {
                    ui.label(dept.id.map(|id| id.to_string()).unwrap_or_default());
                    ui.label(&dept.name);

                    ui.horizontal(|ui| {
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            edit = Some(dept.clone());
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            delete = Some(dept.clone());
                        }
                    });

                    ui.end_row();
                }
            });
    });

    if let Some(dept) = edit {
        app.department_command(ListCommand::Edit(dept));
    }
    if let Some(dept) = delete {
        app.request_delete(DeleteTarget::Department(dept));
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let Some(form) = app.department_form.as_mut() else {
        return;
    };

    let title = if form.is_editing() {
        "Edit Department"
    } else {
        "New Department"
    };
    let mut command = None;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("dept_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    // Assigned by the database
                    ui.label("Id:");
                    let mut id = form.id().to_string();
                    ui.add_enabled(false, egui::TextEdit::singleline(&mut id).desired_width(80.0));
                    ui.end_row();

                    ui.label("Name:");
                    let mut name = form.name().to_string();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut name)
                            .desired_width(250.0)
                            .hint_text("Up to 30 characters"),
                    );
                    if response.changed() {
                        form.input_name(&name);
                    }
                    ui.end_row();
                });

            if let Some(error) = form.error() {
                ui.add_space(5.0);
                ui.colored_label(colors::ERROR, error);
            }

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    command = Some(FormCommand::Cancel);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        command = Some(FormCommand::Save);
                    }
                });
            });
        });

    if let Some(command) = command {
        app.department_form_command(command);
    }
}
