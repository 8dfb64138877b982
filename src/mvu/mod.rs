// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! Root Model-View-Update kernel wiring function selection, input edits, and
//! digest commands.

use crate::logic::transforms;
use crate::models::function::{FunctionId, TransformResult};
use crate::utils::hash::{HashAlgorithm, hash_str};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Currently selected function, `None` until the user picks one.
    pub selected: Option<FunctionId>,
    /// Current input text.
    pub input: String,
    /// Latest computed output.
    pub output: String,
    /// Whether the latest dispatch flagged the input as invalid.
    pub input_error: bool,
    /// Sequence number of the newest dispatch; digest completions carrying
    /// an older number are dropped so a slow worker cannot overwrite newer
    /// output, even after switching to a synchronous function.
    pub digest_seq: u64,
    /// Set when the input field should regain focus after a pointer-driven
    /// selection; cleared by the view once focus is restored.
    pub refocus_input: bool,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
pub enum Msg {
    InputChanged(String),
    FunctionSelected {
        function: FunctionId,
        /// True when the selection came from a mouse or touch pointer;
        /// keyboard selections must not steal focus back to the input.
        via_pointer: bool,
    },
    DigestComputed {
        seq: u64,
        digest: String,
    },
    /// A background command died without a result; the panic hook has
    /// already reported it. Exists so the pending-work counter still ticks
    /// down.
    CommandAborted,
    FocusRestored,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    ComputeDigest {
        algorithm: HashAlgorithm,
        input: String,
        seq: u64,
    },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::InputChanged(text) => {
            model.input = text;
            dispatch(model, cmds);
        }
        Msg::FunctionSelected {
            function,
            via_pointer,
        } => {
            model.selected = Some(function);
            if via_pointer {
                model.refocus_input = true;
            }
            dispatch(model, cmds);
        }
        Msg::DigestComputed { seq, digest } => {
            if seq == model.digest_seq {
                apply_result(model, TransformResult::ok(digest));
            }
        }
        Msg::CommandAborted => {}
        Msg::FocusRestored => model.refocus_input = false,
    }
}

/// Execute a command on a worker thread and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::ComputeDigest {
            algorithm,
            input,
            seq,
        } => Msg::DigestComputed {
            seq,
            digest: hash_str(algorithm, &input),
        },
    }
}

/// Re-run the selected function against the current input.
///
/// With nothing selected this is a no-op: prior output and error state stay
/// untouched. Digests go to a worker; everything else computes inline.
fn dispatch(model: &mut AppModel, cmds: &mut Vec<Command>) {
    let Some(function) = model.selected else {
        return;
    };

    // Every dispatch supersedes in-flight digests, including a switch to a
    // sync function: a completion from before this point must not land.
    model.digest_seq += 1;

    if let Some(algorithm) = function.digest_algorithm() {
        cmds.push(Command::ComputeDigest {
            algorithm,
            input: model.input.clone(),
            seq: model.digest_seq,
        });
    } else {
        apply_result(model, transforms::apply(function, &model.input));
    }
}

fn apply_result(model: &mut AppModel, result: TransformResult) {
    model.output = result.output;
    model.input_error = result.is_error;
}
