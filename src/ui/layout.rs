// Main application layout
// Handles the menu bar, question input, output areas, activity log and alerts

use eframe::egui;
use crate::state::AppState;
use crate::ui::components::*;

/// Actions requested by the user during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiAction {
    /// The user pressed "Ask" or hit Enter in the question input
    pub ask: bool,
}

/// Render the main application layout
/// Includes menu bar, question row, explanation and data areas, and activity log
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState, activity: &mut ActivityLog) -> UiAction {
    let mut action = UiAction::default();

    render_menu_bar(ctx, state);

    // Activity log at the bottom (if visible); panels go before the central panel
    if state.ui_state.activity_visible {
        egui::TopBottomPanel::bottom("activity_panel")
            .resizable(true)
            .default_height(140.0)
            .min_height(80.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                activity.render(ui);
            });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(8.0);
        ui.heading("Ask the Supply Risk Agent");
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        action.ask = render_question_row(ui, state);

        ui.add_space(12.0);
        output_pane(ui, "explanation_scroll", "Explanation", &state.explanation, false, 160.0);
        ui.add_space(12.0);
        output_pane(ui, "data_scroll", "Data", &state.data, true, f32::INFINITY);
    });

    render_alert(ctx, state);

    action
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // View menu
            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    ctx.style_mut(|style| {
                        style.visuals.dark_mode = dark_mode;
                    });
                }
                ui.separator();
                ui.checkbox(&mut state.ui_state.activity_visible, "Activity Log");
            });
        });
    });
}

/// Render the question input, the Ask button and the request status
/// Returns true if the user asked to submit the question
fn render_question_row(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut submit = false;

    ui.horizontal(|ui| {
        let input_width = (ui.available_width() - 80.0).max(120.0);
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.question)
                .hint_text("e.g. Which suppliers are at highest risk?")
                .desired_width(input_width),
        );

        // Enter in the input submits, like pressing the button
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        ui.spacing_mut().button_padding = egui::vec2(12.0, 4.0);
        if ask_button(ui).clicked() {
            submit = true;
        }
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        status_badge(ui, state.in_flight);
    });

    submit
}

/// Render the pending alert as a modal-style window
fn render_alert(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.alert.clone() else {
        return;
    };

    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(&message);
            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                state.dismiss_alert();
            }
        });
}
