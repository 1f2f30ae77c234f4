//! Lookup tables derived from markup at activation time.

use crate::markup::{GroupTag, ModelDescriptor, ModelTag};
use indexmap::{IndexMap, IndexSet};

/// Immutable indexes built once from the model controls found in markup.
///
/// Insertion order is load-bearing: the first model seen is the global
/// fallback for unknown tags, and the first model of each group is that
/// group's default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelIndexes {
    models: IndexSet<ModelTag>,
    by_group: IndexMap<GroupTag, Vec<ModelTag>>,
    group_of: IndexMap<ModelTag, GroupTag>,
    doc_class_of: IndexMap<ModelTag, String>,
}

impl ModelIndexes {
    /// Build the indexes from descriptors in document order.
    ///
    /// Incomplete controls never reach this point; see
    /// [`Page::descriptors`](crate::page::Page::descriptors).
    #[must_use]
    pub fn build<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = ModelDescriptor>,
    {
        let mut indexes = Self::default();
        for ModelDescriptor { model, group } in descriptors {
            indexes.group_of.insert(model.clone(), group.clone());
            indexes.doc_class_of.insert(model.clone(), model.doc_class());
            indexes.by_group.entry(group).or_default().push(model.clone());
            indexes.models.insert(model);
        }
        indexes
    }

    /// Whether no model made it into the index.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// First model seen while building, the global fallback.
    #[must_use]
    pub fn first_model(&self) -> Option<&ModelTag> {
        self.models.first()
    }

    /// First group seen while building.
    #[must_use]
    pub fn first_group(&self) -> Option<&GroupTag> {
        self.by_group.keys().next()
    }

    /// Whether `tag` names a known model.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.models.contains(tag)
    }

    /// Map a candidate to a valid model: members map to themselves,
    /// anything else (including no candidate at all) to the first indexed
    /// model. Returns `None` only when the index is empty.
    #[must_use]
    pub fn normalize(&self, candidate: Option<&str>) -> Option<&ModelTag> {
        candidate
            .and_then(|tag| self.models.get(tag))
            .or_else(|| self.first_model())
    }

    /// Group a model belongs to.
    #[must_use]
    pub fn group_of(&self, model: &ModelTag) -> Option<&GroupTag> {
        self.group_of.get(model)
    }

    /// Members of a group, in document order.
    #[must_use]
    pub fn members(&self, group: &str) -> Option<&[ModelTag]> {
        self.by_group.get(group).map(Vec::as_slice)
    }

    /// Default model of a group: its first member in document order.
    #[must_use]
    pub fn group_default(&self, group: &str) -> Option<&ModelTag> {
        self.members(group).and_then(<[ModelTag]>::first)
    }

    /// Precomputed documentation CSS class for a model.
    #[must_use]
    pub fn doc_class(&self, model: &ModelTag) -> Option<&str> {
        self.doc_class_of.get(model).map(String::as_str)
    }
}
