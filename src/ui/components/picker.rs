// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Grouped dropdown for picking the active transform function.

use eframe::egui;
use egui::RichText;

use crate::models::function::{Category, FunctionId};

/// Messages emitted by the picker.
pub enum PickerMsg {
    Selected {
        function: FunctionId,
        /// Whether a mouse/touch pointer drove the selection.
        via_pointer: bool,
    },
}

/// Render the function dropdown, emitting messages instead of mutating state.
pub fn view(ui: &mut egui::Ui, selected: Option<FunctionId>) -> Vec<PickerMsg> {
    let mut msgs = Vec::new();

    let selected_text = selected.map_or("Select a function…", |f| f.label());
    egui::ComboBox::from_id_salt("function_picker")
        .width(220.0)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for category in Category::ALL {
                ui.label(
                    RichText::new(category.label())
                        .small()
                        .strong()
                        .color(egui::Color32::from_gray(130)),
                );
                for function in FunctionId::ALL {
                    if function.category() != category {
                        continue;
                    }
                    if ui
                        .selectable_label(selected == Some(function), function.label())
                        .clicked()
                    {
                        // Keyboard-driven selections must not yank focus back
                        // to the input field, so record how we got here.
                        let via_pointer = ui.input(|i| i.pointer.any_click());
                        msgs.push(PickerMsg::Selected {
                            function,
                            via_pointer,
                        });
                    }
                }
            }
        });

    msgs
}
