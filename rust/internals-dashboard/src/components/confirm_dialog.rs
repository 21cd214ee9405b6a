//! Confirmation dialog gating destructive actions.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Whether a confirmation dialog is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    /// Nothing rendered
    #[default]
    Closed,
    /// Waiting for Cancel or Confirm
    Open,
}

impl DialogState {
    /// Whether the dialog is showing.
    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open)
    }

    /// Show the dialog.
    pub fn open(&mut self) {
        *self = DialogState::Open;
    }

    /// Dismiss the dialog; returns whether it was showing.
    pub fn close(&mut self) -> bool {
        std::mem::take(self).is_open()
    }
}

/// How the user left the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Cancel button or backdrop click
    Cancelled,
    /// Confirm button
    Confirmed,
}

/// Close the dialog, running `action` only if it was open and the user
/// confirmed.
pub fn resolve(state: RwSignal<DialogState>, resolution: Resolution, action: Callback<()>) {
    let was_open = state.try_update(DialogState::close).unwrap_or(false);
    if was_open && resolution == Resolution::Confirmed {
        action.run(());
    }
}

/// Modal asking the user to confirm `on_confirm`.
///
/// Clicking the backdrop is the same as Cancel.
#[component]
pub fn ConfirmDialog(
    /// Open/closed state, shared with whatever opens the dialog.
    state: RwSignal<DialogState>,
    /// Dialog heading.
    #[prop(into)]
    title: String,
    /// Explanation of what confirming does.
    #[prop(into)]
    description: String,
    /// The gated action.
    on_confirm: Callback<()>,
) -> impl IntoView {
    let cancel = move |_: MouseEvent| resolve(state, Resolution::Cancelled, on_confirm);
    let confirm = move |_: MouseEvent| resolve(state, Resolution::Confirmed, on_confirm);

    view! {
        <Show when=move || state.get().is_open()>
            <div class="dialog-layer" role="dialog" aria-modal="true">
                <div class="dialog-backdrop" on:click=cancel></div>
                <div class="dialog-body">
                    <h3>{title.clone()}</h3>
                    <p>{description.clone()}</p>
                    <div class="dialog-actions">
                        <button class="button" on:click=cancel>
                            "Cancel"
                        </button>
                        <button class="button primary" on:click=confirm>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
