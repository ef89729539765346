//! Callable objects and the calls in their bodies.

use std::fmt;

use serde::Deserialize;

/// Whether an object is a free function or a method.
///
/// Drives how a fully qualified name is shortened for display; see
/// [`display_name`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Function,
    #[default]
    Method,
}

impl From<ObjectKind> for &'static str {
    fn from(val: ObjectKind) -> Self {
        match val {
            ObjectKind::Function => "function",
            ObjectKind::Method => "method",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Shorten a fully qualified name for display.
///
/// - methods with at least two segments show `Owner.name()`
/// - other functions and methods show `name()`
/// - names of unknown kind are returned unchanged
///
/// ```
/// use sphinx_graph_core::model::{ObjectKind, display_name};
///
/// assert_eq!(display_name("pkg.Builder.build", Some(ObjectKind::Method)), "Builder.build()");
/// assert_eq!(display_name("pkg.setup", Some(ObjectKind::Function)), "setup()");
/// assert_eq!(display_name("pkg.setup", None), "pkg.setup");
/// ```
pub fn display_name(path: &str, kind: Option<ObjectKind>) -> String {
    let mut segments = path.rsplit('.');
    let last = segments.next().unwrap_or(path);

    match kind {
        Some(ObjectKind::Method) => match segments.next() {
            Some(owner) => format!("{owner}.{last}()"),
            None => format!("{last}()"),
        },
        Some(ObjectKind::Function) => format!("{last}()"),
        None => path.to_string(),
    }
}

/// A callable unit of the build pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Object {
    #[serde(default)]
    description: String,
    #[serde(rename = "type", default)]
    kind: ObjectKind,
    #[serde(default)]
    calls: Vec<Call>,
    /// Whether subclasses may override this object.
    #[serde(default)]
    overridable: bool,
    /// Objects in subclasses that override this one.
    #[serde(default)]
    overrides: Vec<String>,
}

impl Object {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Free-text description; empty when absent.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// The body of the object, in execution order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn is_overridable(&self) -> bool {
        self.overridable
    }

    pub fn overrides(&self) -> &[String] {
        &self.overrides
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_call(mut self, call: Call) -> Self {
        self.calls.push(call);
        self
    }

    pub fn with_overridable(mut self, overridable: bool) -> Self {
        self.overridable = overridable;
        self
    }

    pub fn with_override(mut self, name: impl Into<String>) -> Self {
        self.overrides.push(name.into());
        self
    }
}

/// The kind of step a [`Call`] represents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallKind {
    /// A plain call to another object.
    #[default]
    Standard,
    /// Opens a block (`for`, `with`, `if`, ...) that nests following calls.
    Enter,
    /// Closes the innermost open block.
    Exit,
    /// Fires an event.
    Emit,
    /// Runs the document transforms.
    ApplyTransforms,
    /// Runs the post-transforms.
    ApplyPostTransforms,
}

impl From<CallKind> for &'static str {
    fn from(val: CallKind) -> Self {
        match val {
            CallKind::Standard => "standard",
            CallKind::Enter => "enter",
            CallKind::Exit => "exit",
            CallKind::Emit => "emit",
            CallKind::ApplyTransforms => "apply_transforms",
            CallKind::ApplyPostTransforms => "apply_post_transforms",
        }
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// The statement that opens a block, for [`CallKind::Enter`] calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockContext {
    For,
    With,
    If,
    Elif,
    Else,
    Fork,
}

impl From<BlockContext> for &'static str {
    fn from(val: BlockContext) -> Self {
        match val {
            BlockContext::For => "for",
            BlockContext::With => "with",
            BlockContext::If => "if",
            BlockContext::Elif => "elif",
            BlockContext::Else => "else",
            BlockContext::Fork => "fork",
        }
    }
}

impl fmt::Display for BlockContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// One step in the body of an [`Object`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Call {
    /// Target name; a fully qualified object or event name when it is a
    /// reference, free text otherwise.
    text: String,
    #[serde(rename = "type", default)]
    kind: CallKind,
    #[serde(default)]
    is_ref: Option<bool>,
    #[serde(default)]
    context: Option<BlockContext>,
    #[serde(default)]
    obj_type: Option<ObjectKind>,
    #[serde(default = "default_warn_no_object")]
    warn_no_object: bool,
}

fn default_warn_no_object() -> bool {
    true
}

impl Call {
    pub fn new(kind: CallKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            is_ref: None,
            context: None,
            obj_type: None,
            warn_no_object: true,
        }
    }

    /// A [`CallKind::Standard`] call to `target`.
    pub fn standard(target: impl Into<String>) -> Self {
        Self::new(CallKind::Standard, target)
    }

    /// A [`CallKind::Enter`] call opening a `context` block.
    pub fn enter(context: BlockContext, text: impl Into<String>) -> Self {
        Self::new(CallKind::Enter, text).with_context(context)
    }

    /// A [`CallKind::Exit`] call closing the innermost block.
    pub fn exit() -> Self {
        Self::new(CallKind::Exit, "")
    }

    /// A [`CallKind::Emit`] call firing `event`.
    pub fn emit(event: impl Into<String>) -> Self {
        Self::new(CallKind::Emit, event)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> CallKind {
        self.kind
    }

    pub fn context(&self) -> Option<BlockContext> {
        self.context
    }

    /// Kind hint for targets that have no object of their own.
    pub fn obj_type(&self) -> Option<ObjectKind> {
        self.obj_type
    }

    /// Whether a missing target object should be reported.
    pub fn warn_no_object(&self) -> bool {
        self.warn_no_object
    }

    /// Whether [`Call::text`] names another object.
    ///
    /// An explicit `is_ref` wins; otherwise only standard calls are references.
    pub fn is_reference(&self) -> bool {
        self.is_ref.unwrap_or(self.kind == CallKind::Standard)
    }

    pub fn with_context(mut self, context: BlockContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_is_ref(mut self, is_ref: bool) -> Self {
        self.is_ref = Some(is_ref);
        self
    }

    pub fn with_obj_type(mut self, obj_type: ObjectKind) -> Self {
        self.obj_type = Some(obj_type);
        self
    }

    pub fn with_warn_no_object(mut self, warn: bool) -> Self {
        self.warn_no_object = warn;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_method() {
        assert_eq!(
            display_name("sphinx.builders.Builder.build", Some(ObjectKind::Method)),
            "Builder.build()"
        );
    }

    #[test]
    fn test_display_name_single_segment_method() {
        assert_eq!(display_name("build", Some(ObjectKind::Method)), "build()");
    }

    #[test]
    fn test_display_name_function() {
        assert_eq!(
            display_name("sphinx.util.parallel.make_chunks", Some(ObjectKind::Function)),
            "make_chunks()"
        );
    }

    #[test]
    fn test_display_name_unknown_kind() {
        assert_eq!(display_name("pkg.missing", None), "pkg.missing");
    }

    #[test]
    fn test_is_reference_defaults_by_kind() {
        assert!(Call::standard("a").is_reference());
        assert!(!Call::enter(BlockContext::For, "docname in docnames").is_reference());
        assert!(!Call::emit("env-updated").is_reference());
        assert!(!Call::new(CallKind::ApplyTransforms, "apply").is_reference());
    }

    #[test]
    fn test_is_reference_explicit_override() {
        assert!(!Call::standard("a").with_is_ref(false).is_reference());
        assert!(
            Call::enter(BlockContext::With, "pkg.lock")
                .with_is_ref(true)
                .is_reference()
        );
    }

    #[derive(Debug, Deserialize)]
    struct Calls {
        calls: Vec<Call>,
    }

    #[test]
    fn test_call_defaults() {
        let parsed: Calls = toml::from_str(r#"calls = [{ text = "pkg.bar" }]"#).unwrap();
        let call = &parsed.calls[0];

        assert_eq!(call.kind(), CallKind::Standard);
        assert_eq!(call.context(), None);
        assert_eq!(call.obj_type(), None);
        assert!(call.warn_no_object());
        assert!(call.is_reference());
    }

    #[test]
    fn test_call_all_fields() {
        let parsed: Calls = toml::from_str(
            r#"calls = [{ text = "x", type = "enter", context = "elif", is_ref = true, obj_type = "function", warn_no_object = false }]"#,
        )
        .unwrap();
        let call = &parsed.calls[0];

        assert_eq!(call.kind(), CallKind::Enter);
        assert_eq!(call.context(), Some(BlockContext::Elif));
        assert_eq!(call.obj_type(), Some(ObjectKind::Function));
        assert!(!call.warn_no_object());
        assert!(call.is_reference());
    }

    #[test]
    fn test_call_rejects_unknown_context() {
        let result: Result<Calls, _> =
            toml::from_str(r#"calls = [{ text = "x", type = "enter", context = "while" }]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_object_defaults_to_method() {
        let object: Object = toml::from_str("").unwrap();
        assert_eq!(object.kind(), ObjectKind::Method);
        assert!(object.description().is_empty());
        assert!(object.calls().is_empty());
        assert!(!object.is_overridable());
        assert!(object.overrides().is_empty());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CallKind::ApplyPostTransforms.to_string(), "apply_post_transforms");
        assert_eq!(BlockContext::Fork.to_string(), "fork");
        assert_eq!(ObjectKind::Function.to_string(), "function");
    }
}
