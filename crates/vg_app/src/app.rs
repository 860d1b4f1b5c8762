use eframe::egui::{self, Align, Color32, Label, Layout, RichText, ScrollArea, TextEdit, TopBottomPanel};

use vg_core::content::is_image_url;
use vg_core::model::Row;
use vg_core::virtual_list::virtual_window;

use crate::actions::{dispatch, AppAction};
use crate::state::{
    instances_label, timestamp_label, validated_label, AppState, BUFFER_ROWS, ROW_HEIGHT,
    VIEWPORT_HEIGHT,
};

const COLUMNS: [(&str, f32); 6] = [
    ("ID", 0.25),
    ("Validated", 0.05),
    ("Content", 0.35),
    ("Quantity", 0.05),
    ("Instances", 0.20),
    ("Timestamp", 0.10),
];

const ROW_MARGIN: f32 = 8.0;

pub fn launch() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "vgrid-rs",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Box::new(ViewerApp::default())
        }),
    )
}

pub struct ViewerApp {
    state: AppState,
}

impl Default for ViewerApp {
    fn default() -> Self {
        let mut app = Self {
            state: AppState::new(),
        };
        app.run_action(AppAction::LoadBundled);
        app
    }
}

impl ViewerApp {
    fn run_action(&mut self, action: AppAction) {
        if let Err(err) = dispatch(&mut self.state, action) {
            self.state.file_status = err;
        }
    }

    fn draw_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open JSON…").clicked() {
                    ui.close_menu();
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .pick_file()
                    {
                        self.run_action(AppAction::LoadDataset(path));
                    }
                }
                if ui.button("Reload bundled dataset").clicked() {
                    ui.close_menu();
                    self.run_action(AppAction::LoadBundled);
                }
            });
        });
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Filter by ID");
            let mut filter = self.state.filter().to_string();
            if ui
                .add(TextEdit::singleline(&mut filter).desired_width(280.0))
                .changed()
            {
                self.run_action(AppAction::SetFilter(filter));
            }

            let direction = if self.state.sort_direction().is_ascending() {
                "asc"
            } else {
                "desc"
            };
            if ui.button(format!("Sort by ID ({direction})")).clicked() {
                self.run_action(AppAction::ToggleSortDirection);
            }

            let shown = self.state.derived_len();
            let total = self.state.row_count();
            ui.label(format!("{shown} / {total} rows"));
        });
    }

    fn draw_header(&self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing.x;
        let usable =
            ui.available_width() - 2.0 * ROW_MARGIN - spacing * (COLUMNS.len() as f32 - 1.0);
        ui.horizontal(|ui| {
            ui.add_space(ROW_MARGIN);
            for (label, fraction) in COLUMNS {
                cell(ui, usable * fraction, |ui| {
                    ui.label(RichText::new(label).strong());
                });
            }
        });
    }

    fn draw_table(&mut self, ui: &mut egui::Ui) {
        let total = self.state.derived_len();
        ScrollArea::vertical()
            .max_height(VIEWPORT_HEIGHT)
            .auto_shrink([false, false])
            .show_viewport(ui, |ui, viewport| {
                ui.set_height(total as f32 * ROW_HEIGHT);
                self.run_action(AppAction::SetScrollOffset(viewport.min.y));

                let window = virtual_window(
                    total,
                    ROW_HEIGHT,
                    VIEWPORT_HEIGHT,
                    self.state.scroll_offset(),
                    BUFFER_ROWS,
                );

                let left = ui.min_rect().left();
                let top = ui.min_rect().top();
                let width = ui.available_width();
                let spacing = ui.spacing().item_spacing.x;
                let usable = width - 2.0 * ROW_MARGIN - spacing * (COLUMNS.len() as f32 - 1.0);

                for (offset, slot) in (window.start..window.end).enumerate() {
                    let Some(row) = self.state.derived_row(slot) else {
                        break;
                    };
                    let row = row.clone();

                    let row_top = top + window.top_pad + offset as f32 * ROW_HEIGHT;
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(left, row_top),
                        egui::vec2(width, ROW_HEIGHT),
                    );
                    if slot % 2 == 0 {
                        ui.painter()
                            .rect_filled(rect, 0.0, ui.visuals().faint_bg_color);
                    }

                    let mut row_ui = ui.child_ui(
                        rect.shrink2(egui::vec2(ROW_MARGIN, 0.0)),
                        Layout::left_to_right(Align::Center),
                    );
                    draw_row_cells(&mut row_ui, &row, usable);
                }
            });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("menu_toolbar").show(ctx, |ui| {
            self.draw_menu(ui);
            ui.separator();
            self.draw_toolbar(ui);
        });

        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.label(RichText::new(&self.state.file_status).small());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_header(ui);
            ui.separator();
            self.draw_table(ui);
        });
    }
}

fn draw_row_cells(ui: &mut egui::Ui, row: &Row, usable_width: f32) {
    let widths = COLUMNS.map(|(_, fraction)| usable_width * fraction);

    cell(ui, widths[0], |ui| {
        ui.add(Label::new(RichText::new(row.id.as_str()).monospace()).truncate(true))
            .on_hover_text(row.id.as_str());
    });
    cell(ui, widths[1], |ui| {
        ui.label(validated_label(row));
    });
    cell(ui, widths[2], |ui| {
        if is_image_url(&row.content) {
            ui.add(
                egui::Image::from_uri(row.content.as_str())
                    .max_height(40.0)
                    .max_width(widths[2]),
            );
        } else {
            ui.add(Label::new(row.content.as_str()).truncate(true))
                .on_hover_text(row.content.as_str());
        }
    });
    cell(ui, widths[3], |ui| {
        ui.label(row.quantity.to_string());
    });
    cell(ui, widths[4], |ui| {
        ui.add(Label::new(instances_label(row)).truncate(true));
    });
    cell(ui, widths[5], |ui| {
        ui.label(RichText::new(timestamp_label(row)).color(Color32::from_gray(140)));
    });
}

fn cell(ui: &mut egui::Ui, width: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.allocate_ui_with_layout(
        egui::vec2(width, ROW_HEIGHT),
        Layout::left_to_right(Align::Center),
        |ui| {
            ui.set_width(width);
            add_contents(ui);
        },
    );
}
