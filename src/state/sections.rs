/// Distance in px below the viewport top at which a section counts as the
/// current one for navigation highlighting.
pub const SCAN_INSET: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, line: f64) -> bool {
        self.top <= line && line < self.top + self.height
    }
}

/// Insertion-ordered map from section id to its vertical extent. Spans are
/// refreshed from the live layout on every scroll pass (content above a
/// section can change height), so `register` doubles as the update path:
/// a duplicate id overwrites in place and keeps its original slot.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    spans: Vec<SectionSpan>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str, top: f64, height: f64) {
        if let Some(span) = self.spans.iter_mut().find(|s| s.id == id) {
            span.top = top;
            span.height = height;
        } else {
            self.spans.push(SectionSpan {
                id: id.to_string(),
                top,
                height,
            });
        }
    }

    pub fn unregister(&mut self, id: &str) {
        self.spans.retain(|s| s.id != id);
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Decides which section the navigation highlights. The scan line sits
/// `SCAN_INSET` below the scroll offset; if several spans contain it the
/// later-registered one wins (accepted tie-break for layouts that should not
/// overlap anyway), and if none do the previous answer stands so the
/// highlight never flickers off between sections.
#[derive(Clone, Debug, Default)]
pub struct ActiveSectionTracker {
    current: Option<String>,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, registry: &SectionRegistry, scroll_offset: f64) -> Option<&str> {
        let line = scroll_offset + SCAN_INSET;
        for span in registry.spans() {
            if span.contains(line) {
                self.current = Some(span.id.clone());
            }
        }
        self.current.as_deref()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
