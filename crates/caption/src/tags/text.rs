use crate::error::TagError;
use crate::expander::Scope;
use crate::registry::{TagRegistryBuilder, CUSTOM_TAG};

pub(super) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    builder.tag("N", newline).tag(CUSTOM_TAG, custom)
}

fn newline(out: &mut String, _: &Scope<'_>, _: &[String]) -> Result<(), TagError> {
    out.push('\n');
    Ok(())
}

/// Expands the configured custom text. Nested `<Custom>` tags stay literal.
fn custom(out: &mut String, scope: &Scope<'_>, _: &[String]) -> Result<(), TagError> {
    scope.expand_nested(out, &scope.overlay().custom_text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::OverlayConfig;
    use crate::context::Snapshot;
    use crate::tags::testing::{render, render_with};

    #[test]
    fn newline() {
        assert_eq!(render("a<N>b", &Snapshot::default()), "a\nb");
    }

    #[test]
    fn custom_text_is_expanded() {
        let overlay = OverlayConfig::default().with_custom_text("Day <Day><N>ok");
        assert_eq!(
            render_with("<Custom>", &Snapshot::at(0.0), &overlay),
            "Day 1\nok"
        );
    }

    #[test]
    fn custom_cannot_include_itself() {
        let overlay = OverlayConfig::default().with_custom_text("[<Custom>]");
        assert_eq!(
            render_with("<Custom>", &Snapshot::default(), &overlay),
            "[<Custom>]"
        );
    }

    #[test]
    fn empty_custom_text() {
        assert_eq!(render("a<Custom>b", &Snapshot::default()), "ab");
    }
}
