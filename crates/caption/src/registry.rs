//! Tag name to handler mapping.
//!
//! A [`TagRegistry`] is assembled once with [`TagRegistryBuilder`] and is
//! immutable afterwards. The registry holding the built-in tags is created
//! lazily on first use and shared for the life of the process:
//!
//! ```rust
//! use caption::{default_registry, TagError, TagRegistry, Scope};
//!
//! assert!(default_registry().contains("Vessel"));
//!
//! let registry = TagRegistry::builder()
//!     .with_builtins()
//!     .tag("Hello", |out: &mut String, _: &Scope<'_>, args: &[String]| {
//!         out.push_str("hello ");
//!         out.push_str(args.first().map(String::as_str).unwrap_or("world"));
//!         Ok::<(), TagError>(())
//!     })
//!     .build();
//!
//! assert!(registry.contains("Hello"));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::TagError;
use crate::expander::Scope;

/// Name of the tag that expands user-supplied custom text.
///
/// The custom text is itself tokenized and expanded, with this tag disabled
/// on the nested pass so the text cannot include itself.
pub const CUSTOM_TAG: &str = "Custom";

/// Produces the expansion of a tag.
///
/// Handlers append to `out` and may read anything reachable from `scope`.
/// `args` is empty when the tag had no parenthesized arguments. Returning an
/// error, or panicking, makes the expander print an inline error marker
/// instead. A panic is still reported by the process panic hook, so prefer
/// returning [`TagError`].
pub trait TagHandler: Send + Sync {
    fn expand(&self, out: &mut String, scope: &Scope<'_>, args: &[String])
        -> Result<(), TagError>;
}

impl<F> TagHandler for F
where
    F: Fn(&mut String, &Scope<'_>, &[String]) -> Result<(), TagError> + Send + Sync,
{
    fn expand(
        &self,
        out: &mut String,
        scope: &Scope<'_>,
        args: &[String],
    ) -> Result<(), TagError> {
        (self)(out, scope, args)
    }
}

/// Immutable mapping from tag name to handler.
pub struct TagRegistry {
    handlers: HashMap<String, Box<dyn TagHandler>>,
}

impl TagRegistry {
    pub fn builder() -> TagRegistryBuilder {
        TagRegistryBuilder::new()
    }

    /// Looks up a handler. Names are case-sensitive.
    pub fn get(&self, name: &str) -> Option<&dyn TagHandler> {
        self.handlers.get(name).map(|handler| &**handler)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered tag names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagRegistry")
            .field("tags", &self.names())
            .finish()
    }
}

/// Collects handlers before freezing them into a [`TagRegistry`].
///
/// Registering a name twice keeps the later handler.
#[derive(Default)]
pub struct TagRegistryBuilder {
    handlers: HashMap<String, Box<dyn TagHandler>>,
}

impl TagRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag<H: TagHandler + 'static>(mut self, name: impl Into<String>, handler: H) -> Self {
        self.handlers.insert(name.into(), Box::new(handler));
        self
    }

    /// Adds every built-in tag.
    pub fn with_builtins(self) -> Self {
        crate::tags::register(self)
    }

    pub fn build(self) -> TagRegistry {
        TagRegistry {
            handlers: self.handlers,
        }
    }
}

static DEFAULT_REGISTRY: Lazy<TagRegistry> =
    Lazy::new(|| TagRegistryBuilder::new().with_builtins().build());

/// The shared registry of built-in tags.
pub fn default_registry() -> &'static TagRegistry {
    &DEFAULT_REGISTRY
}
