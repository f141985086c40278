//! Token expansion.
//!
//! [`expand`] walks a token list in order. Literals are copied; tags are
//! resolved through a [`TagRegistry`]:
//!
//! - a registered tag runs its handler, which appends its output
//! - an unregistered tag is written back in bracket notation, e.g.
//!   `<UNKNOWN(one,two)>`, so mistakes stay visible
//! - [`CUSTOM_TAG`] is only run when `allow_custom` is true; otherwise it is
//!   treated like an unregistered tag
//! - a handler error or panic discards whatever the handler appended, writes
//!   `Error expanding <Key>` instead, logs the fault and moves on
//!
//! Expansion itself never fails.

use std::any::Any;
use std::fmt::Write;
use std::panic::{self, AssertUnwindSafe};

use caption_calendar::CalendarConfig;
use caption_tokenizer::{tokenize, Token};

use crate::config::OverlayConfig;
use crate::context::{Orbit, RenderContext, Snapshot, Vessel};
use crate::error::TagError;
use crate::registry::{TagRegistry, CUSTOM_TAG};

/// What a handler can see while expanding one tag.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    ctx: RenderContext<'a>,
    registry: &'a TagRegistry,
    allow_custom: bool,
}

impl<'a> Scope<'a> {
    pub fn context(&self) -> &RenderContext<'a> {
        &self.ctx
    }

    pub fn snapshot(&self) -> &'a Snapshot {
        self.ctx.snapshot
    }

    pub fn calendar(&self) -> &'a CalendarConfig {
        self.ctx.calendar
    }

    pub fn overlay(&self) -> &'a OverlayConfig {
        self.ctx.overlay
    }

    pub fn registry(&self) -> &'a TagRegistry {
        self.registry
    }

    /// Whether [`CUSTOM_TAG`] may expand in this pass.
    pub fn allow_custom(&self) -> bool {
        self.allow_custom
    }

    /// The active vessel, or [`TagError::MissingData`].
    pub fn vessel(&self) -> Result<&'a Vessel, TagError> {
        self.ctx
            .snapshot
            .vessel
            .as_ref()
            .ok_or(TagError::MissingData("vessel"))
    }

    /// The active vessel's orbit, or [`TagError::MissingData`].
    pub fn orbit(&self) -> Result<&'a Orbit, TagError> {
        self.vessel()?
            .orbit
            .as_ref()
            .ok_or(TagError::MissingData("orbit"))
    }

    /// Tokenizes and expands `text` into `out` with [`CUSTOM_TAG`] disabled.
    pub fn expand_nested(&self, out: &mut String, text: &str) {
        let tokens = tokenize(text);
        expand_into(out, &tokens, &self.ctx, self.registry, false);
    }
}

/// Expands `tokens` into a new string.
pub fn expand(
    tokens: &[Token],
    ctx: &RenderContext<'_>,
    registry: &TagRegistry,
    allow_custom: bool,
) -> String {
    let mut out = String::new();
    expand_into(&mut out, tokens, ctx, registry, allow_custom);
    out
}

/// Expands `tokens`, appending to `out`.
pub fn expand_into(
    out: &mut String,
    tokens: &[Token],
    ctx: &RenderContext<'_>,
    registry: &TagRegistry,
    allow_custom: bool,
) {
    let scope = Scope {
        ctx: *ctx,
        registry,
        allow_custom,
    };
    tracing::trace!(tokens = tokens.len(), allow_custom, "expanding tokens");

    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Tag { key, args } => {
                let handler = registry
                    .get(key)
                    .filter(|_| allow_custom || key != CUSTOM_TAG);

                let Some(handler) = handler else {
                    tracing::debug!(tag = %key, "leaving unresolved tag in place");
                    // Writing to a String cannot fail.
                    let _ = write!(out, "{}", token);
                    continue;
                };

                let start = out.len();
                let outcome =
                    panic::catch_unwind(AssertUnwindSafe(|| handler.expand(out, &scope, args)));
                let fault = match outcome {
                    Ok(Ok(())) => continue,
                    Ok(Err(err)) => err.to_string(),
                    Err(payload) => panic_message(&*payload),
                };

                tracing::warn!(tag = %key, error = %fault, "tag expansion failed");
                out.truncate(start);
                let _ = write!(out, "Error expanding <{}>", key);
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("handler panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("handler panicked: {}", message)
    } else {
        "handler panicked".to_string()
    }
}
