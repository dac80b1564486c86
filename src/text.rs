//! Text that is either fixed or produced on demand.

use std::fmt;
use std::sync::Arc;

/// Label or message content.
#[derive(Clone)]
pub enum RenderedText {
    Static(String),
    Dynamic(Arc<dyn Fn() -> String + Send + Sync>),
}

impl RenderedText {
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        RenderedText::Dynamic(Arc::new(f))
    }

    pub fn render(&self) -> String {
        match self {
            RenderedText::Static(text) => text.clone(),
            RenderedText::Dynamic(f) => f(),
        }
    }

    /// Empty static text renders nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderedText::Static(text) if text.is_empty())
    }
}

impl Default for RenderedText {
    fn default() -> Self {
        RenderedText::Static(String::new())
    }
}

impl fmt::Debug for RenderedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedText::Static(text) => f.debug_tuple("Static").field(text).finish(),
            RenderedText::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for RenderedText {
    fn from(text: &str) -> Self {
        RenderedText::Static(text.to_string())
    }
}

impl From<String> for RenderedText {
    fn from(text: String) -> Self {
        RenderedText::Static(text)
    }
}
