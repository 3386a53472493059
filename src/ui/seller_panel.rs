//! Seller management panel with department filter.

use chrono::Local;
use eframe::egui::{self, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{ARROWS_CLOCKWISE, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget};
use super::components::{
    action_button, colors, danger_action_button, panel_header, primary_button_with_icon, styled_button,
    styled_button_with_icon,
};
use crate::workflow::seller_form::field;
use crate::workflow::{FormCommand, ListCommand};

/// Show the seller panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Manage Sellers");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "New").clicked() {
            app.seller_command(ListCommand::New);
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.refresh_sellers();
        }

        ui.add_space(20.0);

        ui.label("Department:");
        let current = app.sellers.department_filter();
        let mut selected = current;
        egui::ComboBox::from_id_salt("seller_dept_filter")
            .width(180.0)
            .selected_text(department_name(app, current).unwrap_or("All"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, None, "All");
                for dept in app.departments.rows() {
                    if let Some(id) = dept.id {
                        ui.selectable_value(&mut selected, Some(id), dept.name.as_str());
                    }
                }
            });
        if selected != current {
            app.set_seller_filter(selected);
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.seller_form.is_some() {
        show_form_dialog(app, ui.ctx());
    }
}

fn department_name(app: &App, id: Option<i32>) -> Option<&str> {
    let id = id?;
    app.departments
        .rows()
        .iter()
        .find(|d| d.id == Some(id))
        .map(|d| d.name.as_str())
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let mut edit = None;
    let mut delete = None;

    ui.label(format!("{} sellers", app.sellers.rows().len()));
    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("sellers_scroll").show(ui, |ui| {
        egui::Grid::new("sellers_grid")
            .num_columns(7)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Id");
                ui.strong("Name");
                ui.strong("Email");
                ui.strong("Birth Date");
                ui.strong("Base Salary");
                ui.strong("Department");
                ui.strong("Actions");
                ui.end_row();

                for seller in app.sellers.rows() {
                    ui.label(seller.id.map(|id| id.to_string()).unwrap_or_default());
                    ui.label(&seller.name);
                    ui.label(&seller.email);
                    ui.label(seller.birth_date.format("%d/%m/%Y").to_string());
                    ui.label(format!("{:.2}", seller.base_salary));
                    ui.label(department_name(app, seller.department_id).unwrap_or("-"));

                    ui.horizontal(|ui| {
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            edit = Some(seller.clone());
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            delete = Some(seller.clone());
                        }
                    });

                    ui.end_row();
                }
            });
    });

    if let Some(seller) = edit {
        app.seller_command(ListCommand::Edit(seller));
    }
    if let Some(seller) = delete {
        app.request_delete(DeleteTarget::Seller(seller));
    }
}

/// Red label under a field, if the field failed validation.
fn field_error(ui: &mut Ui, error: Option<&str>) {
    if let Some(error) = error {
        ui.colored_label(colors::ERROR, error);
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let Some(form) = app.seller_form.as_mut() else {
        return;
    };

    let title = if form.is_editing() { "Edit Seller" } else { "New Seller" };
    let mut command = None;

    let options: Vec<(i32, String)> = form
        .departments()
        .iter()
        .filter_map(|d| d.id.map(|id| (id, d.name.clone())))
        .collect();

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("seller_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Id:");
                    let mut id = form.id().to_string();
                    ui.add_enabled(false, egui::TextEdit::singleline(&mut id).desired_width(80.0));
                    ui.end_row();

                    ui.label("Name:");
                    ui.vertical(|ui| {
                        let mut name = form.name().to_string();
                        if ui
                            .add(egui::TextEdit::singleline(&mut name).desired_width(250.0))
                            .changed()
                        {
                            form.input_name(&name);
                        }
                        field_error(ui, form.field_error(field::NAME));
                    });
                    ui.end_row();

                    ui.label("Email:");
                    ui.vertical(|ui| {
                        let mut email = form.email().to_string();
                        if ui
                            .add(egui::TextEdit::singleline(&mut email).desired_width(250.0))
                            .changed()
                        {
                            form.input_email(&email);
                        }
                        field_error(ui, form.field_error(field::EMAIL));
                    });
                    ui.end_row();

                    ui.label("Birth Date:");
                    ui.vertical(|ui| {
                        let mut date = form.birth_date().unwrap_or_else(|| Local::now().date_naive());
                        ui.horizontal(|ui| {
                            if ui
                                .add(DatePickerButton::new(&mut date).id_salt("seller_birth_date"))
                                .changed()
                            {
                                form.input_birth_date(Some(date));
                            }
                            if form.birth_date().is_none() {
                                ui.weak("Not set");
                            }
                        });
                        field_error(ui, form.field_error(field::BIRTH_DATE));
                    });
                    ui.end_row();

                    ui.label("Base Salary:");
                    ui.vertical(|ui| {
                        let mut salary = form.base_salary().to_string();
                        if ui
                            .add(
                                egui::TextEdit::singleline(&mut salary)
                                    .desired_width(120.0)
                                    .hint_text("0.00"),
                            )
                            .changed()
                        {
                            form.input_base_salary(&salary);
                        }
                        field_error(ui, form.field_error(field::BASE_SALARY));
                    });
                    ui.end_row();

                    ui.label("Department:");
                    let current = form.department_id();
                    let mut selected = current;
                    let selected_text = current
                        .and_then(|id| options.iter().find(|(opt, _)| *opt == id))
                        .map(|(_, name)| name.as_str())
                        .unwrap_or("None");
                    egui::ComboBox::from_id_salt("seller_form_dept")
                        .width(250.0)
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut selected, None, "None");
                            for (id, name) in &options {
                                ui.selectable_value(&mut selected, Some(*id), name.as_str());
                            }
                        });
                    if selected != current {
                        form.select_department(selected);
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
        app.seller_form_command(command);
    }
}
