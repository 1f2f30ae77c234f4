//! Browser-location stand-in: the path and query string the widget rewrites.

use crate::markup::{MODEL_PARAM, ModelTag};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Path and query of the current page.
///
/// Rewrites replace the current history entry in place; the widget never
/// pushes a new one, so back/forward do not step through model changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Path component, e.g. `/docs/benchmarks.html`.
    #[serde(default)]
    pub path: String,
    /// Raw query string, without the leading `?`.
    #[serde(default)]
    pub search: String,
}

impl Location {
    /// New location from a path and a query string (leading `?` optional).
    #[must_use]
    pub fn new(path: impl Into<String>, search: impl Into<String>) -> Self {
        let search = search.into();
        let search = search.strip_prefix('?').unwrap_or(search.as_str()).to_owned();
        Self {
            path: path.into(),
            search,
        }
    }

    /// Current value of the `model` query parameter, if present.
    #[must_use]
    pub fn model_param(&self) -> Option<String> {
        form_urlencoded::parse(self.search.as_bytes())
            .find(|(key, _)| key == MODEL_PARAM)
            .map(|(_, value)| value.into_owned())
    }

    /// Set the `model` parameter, preserving every other parameter and its
    /// position. The first `model` occurrence keeps its slot; later
    /// duplicates are dropped, matching `URLSearchParams.set`.
    pub fn set_model_param(&mut self, model: &ModelTag) {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut written = false;
        for (key, value) in form_urlencoded::parse(self.search.as_bytes()) {
            if key == MODEL_PARAM {
                if !written {
                    serializer.append_pair(MODEL_PARAM, model.as_str());
                    written = true;
                }
            } else {
                serializer.append_pair(&key, &value);
            }
        }
        if !written {
            serializer.append_pair(MODEL_PARAM, model.as_str());
        }
        self.search = serializer.finish();
    }

    /// Full href as the browser would display it after a rewrite.
    #[must_use]
    pub fn href(&self) -> String {
        format!("{}?{}", self.path, self.search)
    }
}
