/// Which decorative card the pointer is currently over or holding down.
/// Purely presentational; the render layer maps the ids to style variants.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardInteraction {
    hovered: Option<String>,
    pressed: Option<String>,
}

impl CardInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn pressed(&self) -> Option<&str> {
        self.pressed.as_deref()
    }

    pub fn hover_start(&mut self, id: &str) {
        self.hovered = Some(id.to_string());
    }

    /// Clears only while `id` is still the hovered card. A leave event that
    /// arrives after the pointer already entered the next card must not knock
    /// out that card's state.
    pub fn hover_end(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    pub fn press_start(&mut self, id: &str) {
        self.pressed = Some(id.to_string());
    }

    pub fn press_end(&mut self, id: &str) {
        if self.pressed.as_deref() == Some(id) {
            self.pressed = None;
        }
    }
}
