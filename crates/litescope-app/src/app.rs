//! Main application state and UI

use std::path::PathBuf;

use eframe::egui;
use litescope_core::{ColumnInfo, Row};
use litescope_sqlite::Inspector;

/// Longest cell preview shown in the grid; the full value lives in the
/// hover tooltip and the double-click detail view.
const CELL_PREVIEW_MAX_CHARS: usize = 120;

/// Application state: one inspector, the current table view, and whatever
/// dialog is showing.
pub struct LitescopeApp {
    inspector: Inspector,
    tables: Vec<String>,
    selected_table: Option<String>,
    columns: Vec<ColumnInfo>,
    rows: Vec<Row>,
    detail: Option<CellDetail>,
    error: Option<String>,
    last_directory: Option<PathBuf>,
}

struct CellDetail {
    title: String,
    text: String,
}

impl LitescopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, startup_file: Option<PathBuf>) -> Self {
        let mut app = Self {
            inspector: Inspector::new(),
            tables: Vec::new(),
            selected_table: None,
            columns: Vec::new(),
            rows: Vec::new(),
            detail: None,
            error: None,
            last_directory: None,
        };
        if let Some(path) = startup_file {
            app.open_database(path);
        }
        app
    }

    fn open_database(&mut self, path: PathBuf) {
        self.clear_table_view();
        self.tables.clear();

        match self.inspector.open(&path) {
            Ok(()) => {
                self.last_directory = path.parent().map(|dir| dir.to_path_buf());
                self.refresh_tables();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "open failed");
                self.error = Some(format!("Could not open database:\n{}", e));
            }
        }
    }

    fn refresh_tables(&mut self) {
        match self.inspector.list_tables() {
            Ok(tables) => self.tables = tables,
            Err(e) => {
                tracing::warn!(error = %e, "table listing failed");
                self.tables.clear();
                self.error = Some(format!("Could not list tables:\n{}", e));
            }
        }
    }

    fn select_table(&mut self, name: String) {
        let loaded = self
            .inspector
            .describe_table(&name)
            .and_then(|columns| Ok((columns, self.inspector.fetch_rows(&name)?)));

        match loaded {
            Ok((columns, rows)) => {
                self.columns = columns;
                self.rows = rows;
                self.selected_table = Some(name);
            }
            Err(e) => {
                // The table view is abandoned but the connection stays open;
                // the user can pick another table or reopen the file.
                tracing::warn!(table = %name, error = %e, "table load failed");
                self.clear_table_view();
                self.error = Some(format!("Could not read table '{}':\n{}", name, e));
            }
        }
    }

    fn clear_table_view(&mut self) {
        self.selected_table = None;
        self.columns.clear();
        self.rows.clear();
        self.detail = None;
    }

    fn open_detail(&mut self, row_index: usize, col_index: usize) {
        let Some(text) = self
            .rows
            .get(row_index)
            .and_then(|row| row.detail_text(col_index))
        else {
            return;
        };
        let column = self
            .columns
            .get(col_index)
            .map(|c| c.name.as_str())
            .unwrap_or("?");
        self.detail = Some(CellDetail {
            title: format!("{} (row {})", column, row_index + 1),
            text,
        });
    }

    fn status_line(&self) -> String {
        match self.inspector.path().and_then(|path| path.file_name()) {
            Some(name) => format!("Database: {}", name.to_string_lossy()),
            None => "No database open".to_string(),
        }
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open database…").clicked() {
                let mut dialog = rfd::FileDialog::new()
                    .add_filter("SQLite database", &["db", "sqlite", "sqlite3"]);
                if let Some(dir) = &self.last_directory {
                    dialog = dialog.set_directory(dir);
                }
                if let Some(path) = dialog.pick_file() {
                    self.open_database(path);
                }
            }

            ui.separator();
            ui.label("Table:");
            let selected_text = self
                .selected_table
                .clone()
                .unwrap_or_else(|| "-".to_string());
            egui::ComboBox::from_id_salt("table-selector")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for name in self.tables.clone() {
                        let checked = self.selected_table.as_deref() == Some(name.as_str());
                        if ui.selectable_label(checked, name.as_str()).clicked() {
                            self.select_table(name);
                        }
                    }
                });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(self.status_line());
            });
        });
    }

    fn show_grid(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let mut clicked: Option<(usize, usize)> = None;
        let row_height = egui::TextStyle::Body.resolve(ui.style()).size + 6.0;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(
                Column::auto().at_least(60.0).clip(true),
                self.columns.len(),
            )
            .header(row_height + 4.0, |mut header| {
                for column in &self.columns {
                    header.col(|ui| {
                        ui.strong(column.name.as_str());
                    });
                }
            })
            .body(|body| {
                let columns = &self.columns;
                let rows = &self.rows;
                body.rows(row_height, rows.len(), |mut table_row| {
                    let row_index = table_row.index();
                    for col_index in 0..columns.len() {
                        table_row.col(|ui| {
                            let full = rows[row_index]
                                .get(col_index)
                                .map(|value| value.to_string())
                                .unwrap_or_default();
                            let response = ui
                                .add(
                                    egui::Label::new(cell_preview(&full))
                                        .sense(egui::Sense::click()),
                                )
                                .on_hover_text(full.as_str());
                            if response.double_clicked() {
                                clicked = Some((row_index, col_index));
                            }
                        });
                    }
                });
            });

        if let Some((row_index, col_index)) = clicked {
            self.open_detail(row_index, col_index);
        }
    }

    fn show_detail_window(&mut self, ctx: &egui::Context) {
        let Some(detail) = &mut self.detail else {
            return;
        };
        let mut open = true;
        // Grid cells truncate; the detail window gets most of the screen.
        let screen = ctx.screen_rect();
        egui::Window::new(detail.title.clone())
            .open(&mut open)
            .default_size(screen.size() * 0.85)
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut detail.text)
                            .interactive(false)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY),
                    );
                });
            });
        if !open {
            self.detail = None;
        }
    }

    fn show_error_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error.clone() else {
            return;
        };
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.error = None;
                    }
                });
            });
    }
}

impl eframe::App for LitescopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_toolbar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.columns.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(if self.inspector.is_open() {
                        "Select a table to view its contents"
                    } else {
                        "Open a database to get started"
                    });
                });
            } else {
                self.show_grid(ui);
            }
        });

        self.show_detail_window(ctx);
        self.show_error_window(ctx);
    }
}

/// One-line, length-capped preview of a cell value for the grid.
fn cell_preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let mut preview: String = first_line.chars().take(CELL_PREVIEW_MAX_CHARS).collect();
    if preview.len() < text.len() {
        preview.push('…');
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cell_preview_passes_short_text_through() {
        assert_eq!(cell_preview("Alice"), "Alice");
        assert_eq!(cell_preview(""), "");
    }

    #[test]
    fn cell_preview_stops_at_first_line() {
        assert_eq!(cell_preview("line one\nline two"), "line one…");
    }

    #[test]
    fn cell_preview_caps_length_on_char_boundaries() {
        let long: String = "é".repeat(CELL_PREVIEW_MAX_CHARS + 10);
        let preview = cell_preview(&long);
        assert!(preview.ends_with('…'));
        assert_eq!(preview.chars().count(), CELL_PREVIEW_MAX_CHARS + 1);
    }
}
