// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Top-level egui application shell for the transform bench.
//! Handles layout, the function picker, and wiring to the MVU kernel.

pub mod components;

use eframe::egui;

use crate::models::function::FunctionId;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::report::WORKER_THREAD_PREFIX;
use crate::ui::components::io::{self, IoMsg};
use crate::ui::components::picker::{self, PickerMsg};

/// Storage key holding the most recently selected function id.
const LAST_FUNCTION_KEY: &str = "last_function";

/// Stateful egui application hosting the transform dispatcher.
pub struct TextBenchApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl TextBenchApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        // Digest commands are cheap; two workers keep a slow one from ever
        // blocking the queue. Worker panics route to the rejection reporter
        // through the thread-name contract; the loop keeps the thread alive
        // and still answers with an abort so the pending counter ticks down.
        for index in 0..2 {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let repaint_ctx = cc.egui_ctx.clone();
            let spawned = std::thread::Builder::new()
                .name(format!("{WORKER_THREAD_PREFIX}-{index}"))
                .spawn(move || {
                    for cmd in cmd_rx.iter() {
                        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(
                            || mvu::run_command(cmd),
                        ));
                        let msg = result.unwrap_or(Msg::CommandAborted);
                        let _ = msg_tx.send(msg);
                        repaint_ctx.request_repaint();
                    }
                });
            if let Err(err) = spawned {
                tracing::warn!(error = %err, "could not spawn command worker");
            }
        }

        // Restore the previous session's selection, if any.
        let selected = cc
            .storage
            .and_then(|storage| storage.get_string(LAST_FUNCTION_KEY))
            .and_then(|id| FunctionId::parse(&id));

        Self {
            model: AppModel {
                selected,
                ..Default::default()
            },
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for TextBenchApp {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let ctx = &ui.ctx().clone();
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        self.inbox = msgs;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(format!("{} textbench", egui_phosphor::regular::WRENCH));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_function_picker(ui);
                ui.add_space(12.0);

                self.render_input(ui);
                ui.add_space(12.0);

                io::output_view(ui, &self.model.output);
                ui.add_space(8.0);
            });
        });
    }

    /// Persist the last-selected function across sessions.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(function) = self.model.selected {
            storage.set_string(LAST_FUNCTION_KEY, function.id().to_string());
        }
    }
}

impl TextBenchApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Render the grouped function dropdown and forward its messages.
    fn render_function_picker(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Function");
            let picker_msgs = picker::view(ui, self.model.selected);
            self.inbox.extend(picker_msgs.into_iter().map(
                |PickerMsg::Selected {
                     function,
                     via_pointer,
                 }| Msg::FunctionSelected {
                    function,
                    via_pointer,
                },
            ));
        });
    }

    /// Render the input pane and forward edit/focus messages.
    fn render_input(&mut self, ui: &mut egui::Ui) {
        let io_msgs = io::input_view(
            ui,
            &self.model.input,
            self.model.input_error,
            self.model.refocus_input,
        );
        self.inbox.extend(io_msgs.into_iter().map(|msg| match msg {
            IoMsg::InputEdited(text) => Msg::InputChanged(text),
            IoMsg::FocusRestored => Msg::FocusRestored,
        }));
    }

    /// Render the status line with a spinner while digests are pending.
    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = match self.model.selected {
                Some(function) => function.label(),
                None => "No function selected",
            };
            ui.label(egui::RichText::new(label).color(egui::Color32::from_gray(120)));

            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} task(s) running in background",
                    self.model.pending_commands
                ));
            }
        });
    }
}
