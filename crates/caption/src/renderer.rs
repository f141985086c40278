//! Render entry points.
//!
//! [`render`] is the one-shot form: tokenize, expand with the built-in tags,
//! return the text. [`Renderer`] keeps the calendar and overlay settings and
//! the tokenized template so a caption can be produced for every screenshot
//! without re-parsing.

use caption_calendar::CalendarConfig;
use caption_tokenizer::{tokenize, Token};

use crate::config::OverlayConfig;
use crate::context::{RenderContext, Snapshot};
use crate::expander::expand;
use crate::registry::{default_registry, TagRegistry};

/// Renders `template` against `snapshot` using the built-in tags.
///
/// ```rust
/// use caption::{render, CalendarConfig, OverlayConfig, Snapshot};
///
/// let text = render(
///     "<UT><N>day <Day>",
///     &Snapshot::at(0.0),
///     &CalendarConfig::default(),
///     &OverlayConfig::default(),
/// );
/// assert_eq!(text, "Y1, D01, 0:00:00\nday 1");
/// ```
pub fn render(
    template: &str,
    snapshot: &Snapshot,
    calendar: &CalendarConfig,
    overlay: &OverlayConfig,
) -> String {
    let ctx = RenderContext::new(snapshot, calendar, overlay);
    expand(&tokenize(template), &ctx, default_registry(), true)
}

/// A configured caption renderer.
#[derive(Debug)]
pub struct Renderer<'r> {
    registry: &'r TagRegistry,
    calendar: CalendarConfig,
    overlay: OverlayConfig,
    template: Vec<Token>,
}

impl Renderer<'static> {
    /// Uses the built-in tags and the template from `overlay`.
    pub fn new(calendar: CalendarConfig, overlay: OverlayConfig) -> Self {
        Renderer::with_registry(default_registry(), calendar, overlay)
    }
}

impl<'r> Renderer<'r> {
    pub fn with_registry(
        registry: &'r TagRegistry,
        calendar: CalendarConfig,
        overlay: OverlayConfig,
    ) -> Self {
        let template = tokenize(&overlay.template);
        Self {
            registry,
            calendar,
            overlay,
            template,
        }
    }

    pub fn calendar(&self) -> &CalendarConfig {
        &self.calendar
    }

    pub fn overlay(&self) -> &OverlayConfig {
        &self.overlay
    }

    pub fn registry(&self) -> &'r TagRegistry {
        self.registry
    }

    /// Renders the configured template.
    pub fn render(&self, snapshot: &Snapshot) -> String {
        let ctx = RenderContext::new(snapshot, &self.calendar, &self.overlay);
        expand(&self.template, &ctx, self.registry, true)
    }

    /// Renders a one-off template with the configured settings.
    pub fn render_template(&self, template: &str, snapshot: &Snapshot) -> String {
        let ctx = RenderContext::new(snapshot, &self.calendar, &self.overlay);
        expand(&tokenize(template), &ctx, self.registry, true)
    }
}
