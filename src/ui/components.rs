// Reusable UI components
// Provides the request status badge, buttons, output panes and activity log

use eframe::egui;

/// Render a request status badge with colored text
/// Colors: Ready (gray), Waiting (green, with spinner)
pub fn status_badge(ui: &mut egui::Ui, in_flight: usize) {
    if in_flight == 0 {
        ui.colored_label(egui::Color32::GRAY, "Ready");
        return;
    }

    let text = if in_flight == 1 {
        "Waiting for agent".to_string()
    } else {
        format!("Waiting for agent ({} requests)", in_flight)
    };
    ui.spinner();
    ui.colored_label(egui::Color32::from_rgb(0, 200, 0), text); // Green
}

/// Render the primary "Ask" button
pub fn ask_button(ui: &mut egui::Ui) -> egui::Response {
    ui.button(egui::RichText::new("Ask").strong())
}

/// Render a titled, scrollable output pane
/// Text is selectable but not editable
pub fn output_pane(ui: &mut egui::Ui, id: &str, title: &str, text: &str, monospace: bool, height: f32) {
    ui.label(egui::RichText::new(title).strong());
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_source(id)
        .max_height(height)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            let mut view = text;
            let mut edit = egui::TextEdit::multiline(&mut view)
                .desired_width(f32::INFINITY)
                .desired_rows(if monospace { 12 } else { 4 });
            if monospace {
                edit = edit.code_editor();
            }
            ui.add(edit);
        });
}

/// Activity log display area
/// Provides a scrollable list of request events
pub struct ActivityLog {
    /// Buffer of log lines
    lines: Vec<String>,
    /// Maximum number of lines to keep (0 = unlimited)
    max_lines: usize,
    /// Whether to auto-scroll to bottom
    auto_scroll: bool,
}

impl ActivityLog {
    /// Create a new activity log
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: Vec::new(),
            max_lines,
            auto_scroll: true,
        }
    }

    /// Add a line to the log
    pub fn add_line(&mut self, line: String) {
        self.lines.push(line);
        if self.max_lines > 0 && self.lines.len() > self.max_lines {
            self.lines.remove(0);
        }
    }

    /// Clear all lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines currently held, oldest first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the log in a scrollable area
    pub fn render(&mut self, ui: &mut egui::Ui) {
        // Control bar
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Activity").heading());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear").clicked() {
                    self.clear();
                }
                ui.add_space(8.0);
                ui.checkbox(&mut self.auto_scroll, "Auto-scroll");
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_source("activity_log_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing = egui::vec2(4.0, 2.0);

                for line in &self.lines {
                    ui.label(
                        egui::RichText::new(line)
                            .size(12.0)
                            .family(egui::FontFamily::Monospace),
                    );
                }

                if self.auto_scroll && !self.lines.is_empty() {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(500)
    }
}
