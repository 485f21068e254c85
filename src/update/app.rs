//! Application update functions for the quit flow

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Mode};

/// Handle application messages (quit request, confirmation)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Quit => {
            if model.document.is_dirty() {
                model.mode = Mode::ConfirmQuit;
                model.status = Some(crate::model::StatusMessage::sticky(
                    "WARNING! Unsaved changes. Press y to quit, any other key to cancel.",
                ));
                Some(Cmd::Redraw)
            } else {
                Some(Cmd::Quit)
            }
        }

        AppMsg::QuitConfirmed => Some(Cmd::Quit),

        AppMsg::QuitCancelled => {
            model.mode = Mode::Normal;
            model.clear_status();
            Some(Cmd::Redraw)
        }
    }
}
