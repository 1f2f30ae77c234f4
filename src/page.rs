//! In-memory stand-in for the widget's slice of the page.
//!
//! A host binds real markup to these structures once at load time and copies
//! the attribute fields back out after every projection. The shapes mirror
//! the markup contract in [`crate::markup`]: controls expose the attributes
//! they declare, plus the presentation state the picker writes.

use crate::markup::{GroupTag, ModelDescriptor, ModelTag};
use serde::{Deserialize, Serialize};

/// A group control (`data-param-k="model-group"`).
///
/// The selector that discovers group controls requires `data-param-v`, so
/// the group identifier is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupControl {
    /// Declared group identifier (`data-param-v`).
    pub group: GroupTag,
    /// Mirrors `data-param-state`: `"selected"` or empty.
    #[serde(default)]
    pub param_state: String,
    /// Mirrors `aria-selected`: `"true"`, `"false"`, or empty before the
    /// widget first projects.
    #[serde(default)]
    pub aria_selected: String,
}

impl GroupControl {
    /// New control in its pre-activation state.
    #[must_use]
    pub fn new(group: impl Into<GroupTag>) -> Self {
        Self {
            group: group.into(),
            param_state: String::new(),
            aria_selected: String::new(),
        }
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.param_state = if selected { "selected" } else { "" }.to_owned();
        self.aria_selected = selected.to_string();
    }
}

/// A model control (`data-param-k="model"`).
///
/// `data-param-group` is not part of the discovery selector, so a control
/// may lack its group; such controls are skipped during index building and
/// can never match the selected group during projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelControl {
    /// Declared model identifier (`data-param-v`).
    pub model: ModelTag,
    /// Declared owning group (`data-param-group`), if present.
    #[serde(default)]
    pub group: Option<GroupTag>,
    /// Whether the `hidden` presentation class is applied.
    #[serde(default)]
    pub hidden: bool,
    /// Mirrors `data-param-state`: `"selected"` or empty.
    #[serde(default)]
    pub param_state: String,
    /// Mirrors `aria-selected`.
    #[serde(default)]
    pub aria_selected: String,
}

impl ModelControl {
    /// New control in its pre-activation state.
    #[must_use]
    pub fn new(model: impl Into<ModelTag>, group: Option<GroupTag>) -> Self {
        Self {
            model: model.into(),
            group,
            hidden: false,
            param_state: String::new(),
            aria_selected: String::new(),
        }
    }

    /// The (model, group) pair this control contributes to the indexes,
    /// or `None` when the group attribute is missing.
    #[must_use]
    pub fn descriptor(&self) -> Option<ModelDescriptor> {
        self.group.as_ref().map(|group| ModelDescriptor {
            model: self.model.clone(),
            group: group.clone(),
        })
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.param_state = if selected { "selected" } else { "" }.to_owned();
        self.aria_selected = selected.to_string();
    }
}

/// A per-model documentation block (`div.model-doc`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocBlock {
    /// CSS classes as rendered by the documentation generator. One of them
    /// is expected to be a normalized model identifier.
    pub classes: Vec<String>,
    /// Whether the `hidden` presentation class is applied.
    #[serde(default)]
    pub hidden: bool,
}

impl DocBlock {
    /// New block with the given class list.
    #[must_use]
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            hidden: false,
        }
    }

    /// Whether the block carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// The widget's view of the page: the gating container plus every tagged
/// control and documentation block found under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Whether the gating container element is present at all.
    #[serde(default = "default_container")]
    pub container: bool,
    /// Group controls, in document order.
    #[serde(default)]
    pub groups: Vec<GroupControl>,
    /// Model controls, in document order.
    #[serde(default)]
    pub models: Vec<ModelControl>,
    /// Documentation blocks, in document order.
    #[serde(default)]
    pub docs: Vec<DocBlock>,
}

const fn default_container() -> bool {
    true
}

impl Default for Page {
    fn default() -> Self {
        Self {
            container: true,
            groups: Vec::new(),
            models: Vec::new(),
            docs: Vec::new(),
        }
    }
}

impl Page {
    /// Empty page whose container is present.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group control.
    pub fn add_group(&mut self, group: impl Into<GroupTag>) {
        self.groups.push(GroupControl::new(group));
    }

    /// Append a model control declaring both its tag and its group.
    pub fn add_model(&mut self, model: impl Into<ModelTag>, group: impl Into<GroupTag>) {
        self.models.push(ModelControl::new(model, Some(group.into())));
    }

    /// Append a documentation block carrying the shared block class plus
    /// one normalized model class.
    pub fn add_doc(&mut self, model_class: impl Into<String>) {
        self.docs.push(DocBlock::new([
            crate::markup::DOC_BLOCK_CLASS.to_owned(),
            model_class.into(),
        ]));
    }

    /// Descriptors of every complete model control, in document order.
    /// Controls missing their group attribute are silently skipped.
    pub fn descriptors(&self) -> impl Iterator<Item = ModelDescriptor> + '_ {
        self.models.iter().filter_map(ModelControl::descriptor)
    }

    /// The model control declaring `tag`, if any.
    #[must_use]
    pub fn find_model(&self, tag: &str) -> Option<&ModelControl> {
        self.models.iter().find(|control| control.model.as_str() == tag)
    }

    /// The group control declaring `tag`, if any.
    #[must_use]
    pub fn find_group(&self, tag: &str) -> Option<&GroupControl> {
        self.groups.iter().find(|control| control.group.as_str() == tag)
    }
}
