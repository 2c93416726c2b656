use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
/// Text drawn at an entity's position.
///
/// Used for interactable overlays, the release prompt and the message
/// display. Hidden text keeps its content so it can be revealed later.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Color of the text.
    pub color: raylib::prelude::Color,
    /// Whether the render system draws this text.
    pub visible: bool,
}

impl DynamicText {
    /// Creates a new, visible DynamicText component.
    pub fn new(content: impl Into<String>, font_size: f32, color: raylib::prelude::Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
            visible: true,
        }
    }

    /// Same text, initially hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
