//! Core domain: shared resources owned by collaborators outside the runner core.

use bevy::prelude::*;

/// Whether a UI element currently holds focus.
/// Written by the UI layer, read by input capture, cleared after a resume countdown.
#[derive(Resource, Debug, Default)]
pub struct UiFocus {
    pub focused: bool,
}

impl UiFocus {
    pub fn clear(&mut self) {
        self.focused = false;
    }
}
