//! Console rendering surface: mirrors the widget properties the
//! orchestrator drives and announces the loading phase.

use std::sync::Mutex;

use client_core::{Region, RenderSurface, ResultColor};

struct ConsoleState {
    control_label: String,
    loader_visible: bool,
    result_text: String,
    result_color: ResultColor,
}

pub struct ConsoleSurface {
    state: Mutex<ConsoleState>,
}

impl ConsoleSurface {
    pub fn new(control_label: &str) -> Self {
        Self {
            state: Mutex::new(ConsoleState {
                control_label: control_label.to_string(),
                loader_visible: false,
                result_text: String::new(),
                result_color: ResultColor::Normal,
            }),
        }
    }

    /// Last text written to the result display and the color it carries.
    pub fn result_display(&self) -> (String, ResultColor) {
        let state = self.state.lock().expect("console surface state");
        (state.result_text.clone(), state.result_color)
    }
}

impl RenderSurface for ConsoleSurface {
    fn control_label(&self) -> String {
        self.state
            .lock()
            .expect("console surface state")
            .control_label
            .clone()
    }

    fn set_control_label(&self, label: &str) {
        self.state.lock().expect("console surface state").control_label = label.to_string();
    }

    fn set_control_enabled(&self, _enabled: bool) {
        // A single-shot console run has no control to gray out.
    }

    fn set_visibility(&self, region: Region, visible: bool) {
        let mut state = self.state.lock().expect("console surface state");
        if region == Region::Loader {
            if visible && !state.loader_visible {
                println!("{}", state.control_label);
            }
            state.loader_visible = visible;
        }
    }

    fn set_result_text(&self, text: &str) {
        self.state.lock().expect("console surface state").result_text = text.to_string();
    }

    fn set_result_color(&self, color: ResultColor) {
        self.state.lock().expect("console surface state").result_color = color;
    }
}
