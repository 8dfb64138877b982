// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Input and output panes for the active transform.

use eframe::egui;

/// Messages emitted by the input pane.
pub enum IoMsg {
    InputEdited(String),
    /// Focus was handed back to the input field after a pointer selection.
    FocusRestored,
}

/// Stable widget id for the input field, shared with the refocus logic.
fn input_field_id(ui: &egui::Ui) -> egui::Id {
    ui.id().with("transform_input")
}

/// Render the editable input pane. A red border marks invalid input.
pub fn input_view(ui: &mut egui::Ui, input: &str, is_error: bool, refocus: bool) -> Vec<IoMsg> {
    let mut msgs = Vec::new();

    ui.label("Input");
    ui.add_space(4.0);

    let field_id = input_field_id(ui);
    let stroke = if is_error {
        egui::Stroke::new(1.0, ui.visuals().error_fg_color)
    } else {
        ui.visuals().window_stroke()
    };

    egui::Frame::new()
        .stroke(stroke)
        .inner_margin(4.0)
        .show(ui, |ui| {
            let mut buffer = input.to_owned();
            let response = ui.add(
                egui::TextEdit::multiline(&mut buffer)
                    .id(field_id)
                    .desired_width(f32::INFINITY)
                    .desired_rows(8)
                    .hint_text("Text to transform"),
            );
            if response.changed() {
                msgs.push(IoMsg::InputEdited(buffer));
            }
        });

    if is_error {
        ui.label(
            egui::RichText::new("Input is not valid for the selected function.")
                .small()
                .color(ui.visuals().error_fg_color),
        );
    }

    if refocus {
        ui.memory_mut(|mem| mem.request_focus(field_id));
        msgs.push(IoMsg::FocusRestored);
    }

    msgs
}

/// Render the non-editable output pane.
pub fn output_view(ui: &mut egui::Ui, output: &str) {
    ui.label("Output");
    ui.add_space(4.0);

    // A read-only buffer keeps the text selectable for copying.
    let mut read_only = output;
    ui.add(
        egui::TextEdit::multiline(&mut read_only)
            .desired_width(f32::INFINITY)
            .desired_rows(8),
    );
}
