//! The selection controller.
//!
//! [`Picker::activate`] runs once per page load: build the indexes, validate
//! the markup, resolve the initial model from the URL, project. After that,
//! [`Picker::handle`] is the only entry point; every call runs to completion
//! on the host's event thread before the next gesture is dispatched.

mod event;

pub use event::{Interaction, Key, Target, Trigger};

use crate::index::ModelIndexes;
use crate::location::Location;
use crate::markup::{GroupTag, ModelTag};
use crate::page::Page;
use thiserror::Error;
use tracing::{debug, warn};

/// Why activation was aborted. The page is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActivateError {
    /// The gating container element is absent; this page has no picker.
    #[error("model picker container not found")]
    NoContainer,
    /// The container exists but group controls, model controls, or usable
    /// model descriptors are missing.
    #[error("model picker is missing required elements")]
    MissingMarkup,
}

/// The current (model, group) pair, the widget's only mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected model; always a member of the model index.
    pub model: ModelTag,
    /// Group the selection was made under.
    pub group: GroupTag,
}

/// Selection controller for the documentation model picker.
#[derive(Debug, Clone)]
pub struct Picker {
    indexes: ModelIndexes,
    current: Selection,
}

impl Picker {
    /// Activate the widget against a page.
    ///
    /// Builds the indexes from the page's model controls, resolves the
    /// initial model from the `model` query parameter (unknown or missing
    /// tags fall back to the first indexed model), writes the effective tag
    /// back to `location` unconditionally, and projects onto `page`.
    ///
    /// # Errors
    ///
    /// Returns [`ActivateError`] when the required markup is absent; the
    /// page and the location are then left in their pre-activation state.
    pub fn activate(page: &mut Page, location: &mut Location) -> Result<Self, ActivateError> {
        if !page.container {
            return Err(ActivateError::NoContainer);
        }
        if page.groups.is_empty() || page.models.is_empty() {
            return Err(ActivateError::MissingMarkup);
        }

        let indexes = ModelIndexes::build(page.descriptors());
        let Some(current) = resolve_initial(&indexes, location) else {
            // Controls existed but none declared both attributes.
            return Err(ActivateError::MissingMarkup);
        };

        let picker = Self { indexes, current };
        location.set_model_param(&picker.current.model);
        picker.project(page);
        debug!(
            model = %picker.current.model,
            group = %picker.current.group,
            "picker activated"
        );
        Ok(picker)
    }

    /// Activate if the markup allows it; otherwise warn and stand down,
    /// leaving the page fully usable.
    #[must_use]
    pub fn install(page: &mut Page, location: &mut Location) -> Option<Self> {
        match Self::activate(page, location) {
            Ok(picker) => Some(picker),
            Err(ActivateError::NoContainer) => None,
            Err(err @ ActivateError::MissingMarkup) => {
                warn!("{err}");
                None
            }
        }
    }

    /// Dispatch one user gesture.
    ///
    /// Returns `true` when the gesture was a keyboard activation (Enter or
    /// Space) whose default action the host must suppress; clicks and other
    /// keys return `false`.
    pub fn handle(
        &mut self,
        interaction: &Interaction,
        page: &mut Page,
        location: &mut Location,
    ) -> bool {
        let consumed = match interaction.trigger {
            Trigger::Click => false,
            Trigger::Key(Key::Enter | Key::Space) => true,
            Trigger::Key(Key::Other) => return false,
        };

        match &interaction.target {
            None => {}
            Some(Target::Model { model, group }) => {
                // A model control without its group attribute is inert.
                if let Some(group) = group {
                    self.select(
                        model.as_ref().map(ModelTag::as_str),
                        group.clone(),
                        page,
                        location,
                    );
                }
            }
            Some(Target::Group { group }) => {
                if let Some(group) = group {
                    let first = self.indexes.group_default(group.as_str()).cloned();
                    if let Some(first) = first {
                        self.select(Some(first.as_str()), group.clone(), page, location);
                    }
                }
            }
        }
        consumed
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.current
    }

    /// The immutable indexes built at activation.
    #[must_use]
    pub const fn indexes(&self) -> &ModelIndexes {
        &self.indexes
    }

    /// Normalize `candidate`, persist the effective model to the URL, and
    /// project the new state.
    ///
    /// `group` comes from the activated control's own declaration and is
    /// not re-derived from the model's indexed group.
    fn select(
        &mut self,
        candidate: Option<&str>,
        group: GroupTag,
        page: &mut Page,
        location: &mut Location,
    ) {
        let Some(model) = self.indexes.normalize(candidate).cloned() else {
            return;
        };
        location.set_model_param(&model);
        self.current = Selection { model, group };
        self.project(page);
        debug!(
            model = %self.current.model,
            group = %self.current.group,
            "selection changed"
        );
    }

    /// Project the current selection onto the page.
    ///
    /// Idempotent: repeated calls with the same selection write the same
    /// attribute values.
    fn project(&self, page: &mut Page) {
        let Selection { model, group } = &self.current;

        for control in &mut page.groups {
            control.set_selected(control.group == *group);
        }

        for control in &mut page.models {
            let in_group = control.group.as_ref() == Some(group);
            control.hidden = !in_group;
            control.set_selected(control.model == *model);
        }

        if let Some(class) = self.indexes.doc_class(model) {
            for block in &mut page.docs {
                block.hidden = !block.has_class(class);
            }
        }
    }
}

/// Effective initial selection: the URL's candidate normalized against the
/// index, with the group derived from the model's mapping and, defensively,
/// the first built group.
fn resolve_initial(indexes: &ModelIndexes, location: &Location) -> Option<Selection> {
    let candidate = location.model_param();
    let model = indexes.normalize(candidate.as_deref())?.clone();
    let group = indexes
        .group_of(&model)
        .or_else(|| indexes.first_group())?
        .clone();
    Some(Selection { model, group })
}
