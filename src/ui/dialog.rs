// src/ui/dialog.rs

use eframe::egui::{self, Color32, Context, RichText};

use crate::editor::{Action, ErrorReport};

/// The types of dialogs you may show.
#[derive(Debug, PartialEq, Eq)]
pub enum Dialog {
    /// Unsaved changes would be lost by the given action.
    SaveChanges(Action),
    Error(ErrorReport),
}

/// The possible outcomes when the unsaved-changes dialog is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Save,
    DontSave,
    Cancel,
}

/// Manages the currently active dialog (if any) and its result.
#[derive(Default)]
pub struct DialogManager {
    active_dialog: Option<Dialog>,
    result: Option<DialogResult>,
    dismissed: bool,
}

impl DialogManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a dialog by setting it as active.
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
        self.result = None;
        self.dismissed = false;
    }

    /// Convenience method specifically for the "Save Changes" dialog.
    pub fn show_save_changes_dialog(&mut self, action: Action) {
        self.show_dialog(Dialog::SaveChanges(action));
    }

    pub fn show_error(&mut self, report: ErrorReport) {
        self.show_dialog(Dialog::Error(report));
    }

    /// Whether a dialog is on screen. Editing is blocked while it is.
    pub fn is_active(&self) -> bool {
        self.active_dialog.is_some()
    }

    /// Call this method on every UI frame to render the active dialog (if any).
    /// When the user answers the unsaved-changes dialog, the method returns
    /// `Some(DialogResult)` and clears the active dialog. Error dialogs just
    /// close.
    pub fn update(&mut self, ctx: &Context) -> Option<DialogResult> {
        match &self.active_dialog {
            Some(Dialog::SaveChanges(action)) => {
                let prompt = format!(
                    "The current map has unsaved changes. Save them before \"{}\"?",
                    action.name()
                );
                egui::Window::new("Unsaved Changes")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.label(prompt);
                        ui.horizontal(|ui| {
                            if ui.button("Save").clicked() {
                                self.result = Some(DialogResult::Save);
                            }
                            if ui.button("Don't Save").clicked() {
                                self.result = Some(DialogResult::DontSave);
                            }
                            if ui.button("Cancel").clicked() {
                                self.result = Some(DialogResult::Cancel);
                            }
                        });
                    });
            }
            Some(Dialog::Error(report)) => {
                egui::Window::new(report.title.as_str())
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.label(RichText::new(&report.header).strong().color(Color32::LIGHT_RED));
                        ui.separator();
                        ui.label(report.details.as_str());
                        ui.add_space(4.0);
                        if ui.button("OK").clicked() {
                            self.dismissed = true;
                        }
                    });
            }
            None => return None,
        }

        if self.dismissed {
            self.dismissed = false;
            self.active_dialog = None;
            return None;
        }
        // If the user has made a selection, retrieve the result and clear the dialog.
        if let Some(result) = self.result.take() {
            self.active_dialog = None;
            return Some(result);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_replace_dialogs() {
        let mut dialogs = DialogManager::new();
        assert!(!dialogs.is_active());
        dialogs.show_save_changes_dialog(Action::OpenMap);
        assert!(dialogs.is_active());
        assert_eq!(dialogs.active_dialog, Some(Dialog::SaveChanges(Action::OpenMap)));

        let report = ErrorReport {
            title: "Map saving error".into(),
            header: "The map file could not be written!".into(),
            details: "disk full".into(),
        };
        dialogs.show_error(report.clone());
        assert_eq!(dialogs.active_dialog, Some(Dialog::Error(report)));
    }
}
