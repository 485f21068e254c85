//! Effect commands returned by the update layer
//!
//! The update functions mutate the model and hand any side effect the loop
//! must perform back as a `Cmd`.

/// Side effects the main loop executes after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Redraw the screen
    Redraw,
    /// Leave the main loop and exit cleanly
    Quit,
}
