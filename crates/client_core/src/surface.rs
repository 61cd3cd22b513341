//! Capability seam over the rendering surface the orchestrator drives.

/// Addressable regions whose visibility the orchestrator toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    ResultContainer,
    Loader,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultColor {
    #[default]
    Normal,
    Error,
}

/// The orchestrator touches exactly these properties of the surface: the
/// submit control's label and enabled flag, three region visibility flags,
/// and the result display's text and color. Implementations own the
/// concrete widgets; structure and styling are out of scope here.
pub trait RenderSurface: Send + Sync {
    fn control_label(&self) -> String;
    fn set_control_label(&self, label: &str);
    fn set_control_enabled(&self, enabled: bool);
    fn set_visibility(&self, region: Region, visible: bool);
    fn set_result_text(&self, text: &str);
    fn set_result_color(&self, color: ResultColor);
}

/// Surface that renders nothing. Default dependency for headless use.
pub struct NullRenderSurface;

impl RenderSurface for NullRenderSurface {
    fn control_label(&self) -> String {
        String::new()
    }

    fn set_control_label(&self, _label: &str) {}

    fn set_control_enabled(&self, _enabled: bool) {}

    fn set_visibility(&self, _region: Region, _visible: bool) {}

    fn set_result_text(&self, _text: &str) {}

    fn set_result_color(&self, _color: ResultColor) {}
}
