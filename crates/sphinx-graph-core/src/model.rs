//! Description model of a documentation build process.
//!
//! A [`Description`] lists the callable objects of a build pipeline, the
//! events they emit, and the transforms applied to documents. It is
//! deserialized once from a TOML file, consumed once to produce a graph, and
//! then discarded.
//!
//! # Organization
//!
//! - [`object`] - Callable units: [`Object`], [`Call`], and their kind tags
//! - [`pipeline`] - Extension points: [`Event`], [`EventCallback`],
//!   [`Transform`], [`PostTransform`]
//!
//! # Schema
//!
//! Every table rejects unknown keys and every enumerated value rejects
//! unknown variants. A malformed description never partially loads.
//!
//! ```
//! use sphinx_graph_core::model::Description;
//!
//! let description = Description::from_toml(r#"
//!     comment = "build"
//!
//!     [objects."sphinx.application.Sphinx.build"]
//!     calls = [{ text = "sphinx.builders.Builder.build" }]
//! "#).unwrap();
//!
//! assert_eq!(description.objects().len(), 1);
//! ```

pub mod object;
pub mod pipeline;

mod error;

pub use error::ModelError;
pub use object::{BlockContext, Call, CallKind, Object, ObjectKind, display_name};
pub use pipeline::{Event, EventCallback, PostTransform, Transform};

use indexmap::IndexMap;
use log::{debug, trace};
use serde::Deserialize;

/// The complete input to a graph build.
///
/// All mappings are keyed by fully qualified name and keep the order in which
/// entries appear in the source, which in turn drives node and row order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Description {
    comment: String,
    objects: IndexMap<String, Object>,
    #[serde(default)]
    events: IndexMap<String, Event>,
    #[serde(default)]
    transforms: IndexMap<String, Transform>,
    #[serde(default)]
    post_transforms: IndexMap<String, PostTransform>,
}

impl Description {
    /// Create an empty description with the given comment.
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            ..Self::default()
        }
    }

    /// Deserialize and validate a description from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Toml`] for syntax errors, unknown keys, missing
    /// required keys or unknown enumerated values, and
    /// [`ModelError::EmptyKey`] when any mapping contains an empty name.
    pub fn from_toml(source: &str) -> Result<Self, ModelError> {
        let description: Description = toml::from_str(source)?;
        description.validate()?;

        debug!(
            objects = description.objects.len(),
            events = description.events.len(),
            transforms = description.transforms.len(),
            post_transforms = description.post_transforms.len();
            "Description loaded"
        );
        trace!(description:?; "Loaded description");

        Ok(description)
    }

    /// Free-text comment attached to the rendered graph.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn objects(&self) -> &IndexMap<String, Object> {
        &self.objects
    }

    pub fn events(&self) -> &IndexMap<String, Event> {
        &self.events
    }

    pub fn transforms(&self) -> &IndexMap<String, Transform> {
        &self.transforms
    }

    pub fn post_transforms(&self) -> &IndexMap<String, PostTransform> {
        &self.post_transforms
    }

    /// Look up an object by its fully qualified name.
    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.get(name)
    }

    /// Look up an event by name.
    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.get(name)
    }

    pub fn with_object(mut self, name: impl Into<String>, object: Object) -> Self {
        self.objects.insert(name.into(), object);
        self
    }

    pub fn with_event(mut self, name: impl Into<String>, event: Event) -> Self {
        self.events.insert(name.into(), event);
        self
    }

    pub fn with_transform(mut self, name: impl Into<String>, transform: Transform) -> Self {
        self.transforms.insert(name.into(), transform);
        self
    }

    pub fn with_post_transform(mut self, name: impl Into<String>, transform: PostTransform) -> Self {
        self.post_transforms.insert(name.into(), transform);
        self
    }

    /// Check invariants that the deserializer cannot express.
    fn validate(&self) -> Result<(), ModelError> {
        check_keys("objects", self.objects.keys())?;
        check_keys("events", self.events.keys())?;
        check_keys("transforms", self.transforms.keys())?;
        check_keys("post_transforms", self.post_transforms.keys())?;

        for event in self.events.values() {
            check_keys("callbacks", event.callbacks().keys())?;
        }

        Ok(())
    }
}

fn check_keys<'a>(
    mapping: &'static str,
    mut keys: impl Iterator<Item = &'a String>,
) -> Result<(), ModelError> {
    if keys.any(|key| key.is_empty()) {
        return Err(ModelError::EmptyKey { mapping });
    }
    Ok(())
}
