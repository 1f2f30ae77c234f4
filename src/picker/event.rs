//! User gestures delivered to the picker.
//!
//! The host owns event delegation: it resolves the nearest tagged ancestor
//! of the raw event target, reads that element's declared attributes, and
//! hands the picker an [`Interaction`]. Gestures landing outside any tagged
//! element carry no target and are ignored.

use crate::markup::{GroupTag, ModelTag};
use crate::page::{GroupControl, ModelControl};

/// How a gesture was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Pointer click.
    Click,
    /// Key press.
    Key(Key),
}

/// Keys the picker distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Enter activates the focused control.
    Enter,
    /// Space activates the focused control.
    Space,
    /// Any other key; never activates and never consumed.
    Other,
}

/// The tagged control a gesture resolved to, as declared in markup.
///
/// Attribute values are carried verbatim, absent attributes included, so
/// the picker applies the same branches a live page would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A control whose `data-param-k` is `model`.
    Model {
        /// Declared `data-param-v`.
        model: Option<ModelTag>,
        /// Declared `data-param-group`.
        group: Option<GroupTag>,
    },
    /// A control whose `data-param-k` is `model-group`.
    Group {
        /// Declared `data-param-v`.
        group: Option<GroupTag>,
    },
}

impl Target {
    /// Target for activating a model control, reading its declared
    /// attributes.
    #[must_use]
    pub fn from_model_control(control: &ModelControl) -> Self {
        Self::Model {
            model: Some(control.model.clone()),
            group: control.group.clone(),
        }
    }

    /// Target for activating a group control.
    #[must_use]
    pub fn from_group_control(control: &GroupControl) -> Self {
        Self::Group {
            group: Some(control.group.clone()),
        }
    }
}

/// One user gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    /// How the gesture was produced.
    pub trigger: Trigger,
    /// Nearest tagged ancestor of the event target, if any.
    pub target: Option<Target>,
}

impl Interaction {
    /// Pointer click on `target`.
    #[must_use]
    pub const fn click(target: Option<Target>) -> Self {
        Self {
            trigger: Trigger::Click,
            target,
        }
    }

    /// Key press on `target`.
    #[must_use]
    pub const fn key(key: Key, target: Option<Target>) -> Self {
        Self {
            trigger: Trigger::Key(key),
            target,
        }
    }
}
