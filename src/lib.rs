//! Docpick - selection controller for per-model documentation pages.
//!
//! A documentation page renders one section per machine-learning model,
//! with picker controls grouped by model family. This crate keeps track of
//! which model the visitor picked, round-trips that choice through the page
//! URL's `model` query parameter so links stay shareable, and projects the
//! selection onto the page: group and model controls get their
//! selected-state attributes, same-group models stay visible, and only the
//! matching documentation block is shown.
//!
//! The page itself is an external collaborator, modelled by [`page::Page`];
//! a host binds real markup to it using the names in [`markup`] and copies
//! the attribute fields back out after every [`picker::Picker`] call.

pub mod index;
pub mod location;
pub mod markup;
pub mod page;
pub mod picker;

pub use index::ModelIndexes;
pub use location::Location;
pub use markup::{GroupTag, ModelTag};
pub use page::{DocBlock, GroupControl, ModelControl, Page};
pub use picker::{ActivateError, Interaction, Key, Picker, Selection, Target, Trigger};
