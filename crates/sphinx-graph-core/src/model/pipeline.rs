//! Events and transform stages of the build pipeline.

use indexmap::IndexMap;
use serde::Deserialize;

/// A named extension point and the callbacks connected to it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    callbacks: IndexMap<String, EventCallback>,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks keyed by fully qualified name, in source order.
    pub fn callbacks(&self) -> &IndexMap<String, EventCallback> {
        &self.callbacks
    }

    pub fn with_callback(mut self, name: impl Into<String>, callback: EventCallback) -> Self {
        self.callbacks.insert(name.into(), callback);
        self
    }
}

/// A callback connected to an [`Event`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventCallback {
    priority: i64,
    #[serde(default)]
    doc: String,
    /// Excluded from the rendered label, e.g. for default collector callbacks.
    #[serde(default)]
    hide: bool,
}

impl EventCallback {
    pub fn new(priority: i64) -> Self {
        Self {
            priority,
            doc: String::new(),
            hide: false,
        }
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn is_hidden(&self) -> bool {
        self.hide
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }
}

/// A document transform.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transform {
    priority: i64,
    #[serde(default)]
    hide: bool,
    #[serde(default)]
    doc: String,
    /// Event fired by this transform.
    #[serde(default)]
    emit: Option<String>,
}

impl Transform {
    pub fn new(priority: i64) -> Self {
        Self {
            priority,
            hide: false,
            doc: String::new(),
            emit: None,
        }
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn is_hidden(&self) -> bool {
        self.hide
    }

    pub fn emit(&self) -> Option<&str> {
        self.emit.as_deref()
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_emit(mut self, event: impl Into<String>) -> Self {
        self.emit = Some(event.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }
}

/// A post-transform, restricted to some output formats and builders.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostTransform {
    priority: i64,
    #[serde(default)]
    formats: Vec<String>,
    #[serde(default)]
    builders: Vec<String>,
    #[serde(default)]
    hide: bool,
    #[serde(default)]
    doc: String,
    #[serde(default)]
    emit: Option<String>,
}

impl PostTransform {
    pub fn new(priority: i64) -> Self {
        Self {
            priority,
            formats: Vec::new(),
            builders: Vec::new(),
            hide: false,
            doc: String::new(),
            emit: None,
        }
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    pub fn builders(&self) -> &[String] {
        &self.builders
    }

    /// Formats followed by builders.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.formats
            .iter()
            .chain(&self.builders)
            .map(String::as_str)
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn is_hidden(&self) -> bool {
        self.hide
    }

    pub fn emit(&self) -> Option<&str> {
        self.emit.as_deref()
    }

    pub fn with_formats(mut self, formats: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_builders(mut self, builders: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.builders = builders.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_emit(mut self, event: impl Into<String>) -> Self {
        self.emit = Some(event.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }
}
