//! Main application UI.
//!
//! Database calls run on the UI thread through `Runtime::block_on`; a slow
//! query freezes the window until it returns.

use eframe::egui::{self, Align, Layout};

use crate::config::AppConfig;
use crate::db::{self, DaoFactory, TableCounts};
use crate::error::AppError;
use crate::models::{Department, Seller};
use crate::services::{DepartmentService, SellerService};
use crate::workflow::{
    DepartmentForm, DepartmentList, FormCommand, FormOutcome, ListCommand, ListOutcome, SellerForm, SellerList,
};

use super::components::colors;
use super::{department_panel, seller_panel};

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Departments,
    Sellers,
}

impl Panel {
    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Departments => "Departments",
            Panel::Sellers => "Sellers",
        }
    }
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub enum DeleteTarget {
    Department(Department),
    Seller(Seller),
}

/// Main application state.
pub struct App {
    pub rt: tokio::runtime::Runtime,
    factory: DaoFactory,
    pub config: AppConfig,

    // Navigation
    pub current_panel: Panel,

    // Controllers
    pub departments: DepartmentList,
    pub department_form: Option<DepartmentForm>,
    pub sellers: SellerList,
    pub seller_form: Option<SellerForm>,

    // Dialogs
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,

    pub counts: Option<TableCounts>,
}

impl App {
    pub fn new(factory: DaoFactory, config: AppConfig, rt: tokio::runtime::Runtime) -> Self {
        let department_service = DepartmentService::from_factory(&factory);
        let seller_service = SellerService::from_factory(&factory);

        let mut departments = DepartmentList::new();
        departments.set_service(department_service.clone());

        let mut sellers = SellerList::new();
        sellers.set_services(seller_service, department_service);

        let mut app = Self {
            rt,
            factory,
            config,
            current_panel: Panel::default(),
            departments,
            department_form: None,
            sellers,
            seller_form: None,
            delete_target: None,
            error_message: None,
            counts: None,
        };

        // Load initial data
        app.refresh_departments();
        app.refresh_sellers();
        app.refresh_counts();

        app
    }

    /// Show an error dialog for a failed operation.
    pub fn report_error(&mut self, context: &str, error: AppError) {
        if error.is_precondition() {
            tracing::error!("{}: {}", context, error);
        } else {
            tracing::warn!("{}: {}", context, error);
        }
        self.error_message = Some(format!("{}: {}", context, error));
    }

    pub fn refresh_departments(&mut self) {
        if let Err(e) = self.rt.block_on(self.departments.refresh()) {
            self.report_error("Error loading departments", e);
        }
    }

    pub fn refresh_sellers(&mut self) {
        if let Err(e) = self.rt.block_on(self.sellers.refresh()) {
            self.report_error("Error loading sellers", e);
        }
    }

    pub fn refresh_counts(&mut self) {
        match self.rt.block_on(db::get_table_counts(self.factory.connection())) {
            Ok(counts) => self.counts = Some(counts),
            Err(e) => self.report_error("Error counting rows", e.into()),
        }
    }

    pub fn set_seller_filter(&mut self, department_id: Option<i32>) {
        if let Err(e) = self.rt.block_on(self.sellers.set_department_filter(department_id)) {
            self.report_error("Error loading sellers", e);
        }
    }

    /// Ask for confirmation before deleting, unless disabled in config.
    pub fn request_delete(&mut self, target: DeleteTarget) {
        if self.config.ui.confirm_delete {
            self.delete_target = Some(target);
        } else {
            self.execute_delete(target);
        }
    }

    fn execute_delete(&mut self, target: DeleteTarget) {
        match target {
            DeleteTarget::Department(dept) => self.department_command(ListCommand::Delete(dept)),
            DeleteTarget::Seller(seller) => self.seller_command(ListCommand::Delete(seller)),
        }
    }

    pub fn department_command(&mut self, command: ListCommand<Department>) {
        let context = format!("Error {} department", command.action());
        let removed = match &command {
            ListCommand::Delete(dept) => dept.id,
            _ => None,
        };

        match self.rt.block_on(self.departments.handle(command)) {
            Ok(ListOutcome::OpenForm(form)) => self.department_form = Some(form),
            Ok(ListOutcome::Refreshed) => {
                if let Some(id) = removed
                    && let Err(e) = self.rt.block_on(self.sellers.department_removed(id))
                {
                    self.report_error("Error loading sellers", e);
                }
                self.refresh_counts();
            }
            Err(e) => self.report_error(&context, e),
        }
    }

    pub fn department_form_command(&mut self, command: FormCommand) {
        let Some(form) = self.department_form.as_mut() else {
            return;
        };

        match self.rt.block_on(form.handle(command)) {
            Ok(FormOutcome::Open) => {}
            Ok(FormOutcome::Saved(_)) => {
                self.department_form = None;
                if let Err(e) = self.rt.block_on(self.departments.poll_changes()) {
                    self.report_error("Error loading departments", e);
                }
                self.refresh_counts();
            }
            Ok(FormOutcome::Cancelled) => self.department_form = None,
            Err(e) => {
                self.department_form = None;
                self.report_error("Error saving department", e);
            }
        }
    }

    pub fn seller_command(&mut self, command: ListCommand<Seller>) {
        let context = format!("Error {} seller", command.action());
        match self.rt.block_on(self.sellers.handle(command)) {
            Ok(ListOutcome::OpenForm(form)) => self.seller_form = Some(form),
            Ok(ListOutcome::Refreshed) => self.refresh_counts(),
            Err(e) => self.report_error(&context, e),
        }
    }

    pub fn seller_form_command(&mut self, command: FormCommand) {
        let Some(form) = self.seller_form.as_mut() else {
            return;
        };

        match self.rt.block_on(form.handle(command)) {
            Ok(FormOutcome::Open) => {}
            Ok(FormOutcome::Saved(_)) => {
                self.seller_form = None;
                if let Err(e) = self.rt.block_on(self.sellers.poll_changes()) {
                    self.report_error("Error loading sellers", e);
                }
                self.refresh_counts();
            }
            Ok(FormOutcome::Cancelled) => self.seller_form = None,
            Err(e) => {
                self.seller_form = None;
                self.report_error("Error saving seller", e);
            }
        }
    }

    /// Render navigation bar.
    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for panel in [Panel::Departments, Panel::Sellers] {
                    if ui.selectable_label(self.current_panel == panel, panel.name()).clicked() {
                        self.current_panel = panel;
                    }
                }
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    match &self.counts {
                        Some(counts) => ui.colored_label(
                            colors::SUCCESS,
                            format!("{} departments, {} sellers", counts.departments, counts.sellers),
                        ),
                        None => ui.colored_label(colors::NEUTRAL, "Row counts unavailable"),
                    };

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!("Database: {}", self.config.database.name));
                    });
                });
            });
    }

    /// Render modal dialogs (error, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        if let Some(target) = self.delete_target.clone() {
            let (title, message) = match &target {
                DeleteTarget::Department(dept) => ("Delete Department", format!("Delete department '{}'?", dept.name)),
                DeleteTarget::Seller(seller) => ("Delete Seller", format!("Delete seller '{}'?", seller.name)),
            };

            let mut confirmed = false;
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.delete_target = None;
                        }
                        if ui.button("Delete").clicked() {
                            confirmed = true;
                        }
                    });
                });

            if confirmed {
                self.delete_target = None;
                self.execute_delete(target);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_nav_bar(ctx);
        self.show_status_bar(ctx);
        self.show_dialogs(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
            Panel::Departments => department_panel::show(self, ui),
            Panel::Sellers => seller_panel::show(self, ui),
        });
    }
}
