//! Markup contract shared with the documentation generator.
//!
//! The picker never touches a real document tree. The host page (or the test
//! harness) reads these selector and attribute names off its markup, hands
//! the picker plain descriptors, and writes back the attribute values the
//! picker produces.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// `id` of the container element that gates widget activation.
pub const CONTAINER_ID: &str = "model-picker";

/// Attribute carrying the parameter kind of a control.
pub const ATTR_PARAM_KEY: &str = "data-param-k";

/// Attribute carrying a control's model or group identifier.
pub const ATTR_PARAM_VALUE: &str = "data-param-v";

/// Attribute naming the group a model control belongs to.
pub const ATTR_PARAM_GROUP: &str = "data-param-group";

/// Attribute reflecting selection state back into markup.
pub const ATTR_PARAM_STATE: &str = "data-param-state";

/// Presentation class that hides an element.
pub const HIDDEN_CLASS: &str = "hidden";

/// Class shared by every per-model documentation block.
pub const DOC_BLOCK_CLASS: &str = "model-doc";

/// URL query parameter holding the selected model.
pub const MODEL_PARAM: &str = "model";

/// `data-param-k` value marking a model control.
pub const PARAM_KEY_MODEL: &str = "model";

/// `data-param-k` value marking a group control.
pub const PARAM_KEY_GROUP: &str = "model-group";

/// Unique identifier of a selectable model, as declared in markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelTag(String);

impl ModelTag {
    /// Wrap a raw identifier string.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS class under which the documentation generator renders this
    /// model's block: every non-alphanumeric character becomes a dash.
    #[must_use]
    pub fn doc_class(&self) -> String {
        self.0
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect()
    }
}

impl fmt::Display for ModelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_owned())
    }
}

impl From<String> for ModelTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl Borrow<str> for ModelTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identifier of a group of related models shown together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupTag(String);

impl GroupTag {
    /// Wrap a raw identifier string.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_owned())
    }
}

impl From<String> for GroupTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl Borrow<str> for GroupTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// What a complete model control declares: its own tag and its group.
///
/// Controls missing either attribute yield no descriptor and are skipped
/// when the indexes are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Value of `data-param-v`.
    pub model: ModelTag,
    /// Value of `data-param-group`.
    pub group: GroupTag,
}
