//! Configuration for tour bar layout on a page.
//!
//! A page picks one [`LayoutPolicy`] and one set of markup class names. A
//! container may override the policy with a preset name in its policy
//! attribute. Configuration is built in code or read from JSON; nothing is
//! taken from the environment.

use anyhow::{Context as _, Error};
use serde::{Deserialize, Deserializer, Serialize, de};
use tour_dom::DeclaredMetrics;
use tour_layout::LayoutPolicy;

/// Class names and attributes that identify the parts of a tour bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MarkupClasses {
    /// Class of the element wrapping one whole tour bar.
    pub container: String,
    /// Class of each step marker.
    pub marker: String,
    /// Class of each step label.
    pub label: String,
    /// Class of the "completed" fill segment.
    pub fill: String,
    /// Class of the bar wrapper that carries the reveal token.
    pub wrapper: String,
    /// Token removed from the wrapper once positions are written.
    pub reveal_token: String,
    /// Container attribute holding a layout preset name.
    pub policy_attribute: String,
}

impl Default for MarkupClasses {
    fn default() -> Self {
        Self {
            container: "tour-wrap".to_owned(),
            marker: "step-circle".to_owned(),
            label: "step-name".to_owned(),
            fill: "completed".to_owned(),
            wrapper: "tour-bar-wrap".to_owned(),
            reveal_token: "hidden".to_owned(),
            policy_attribute: "data-tour-layout".to_owned(),
        }
    }
}

impl MarkupClasses {
    /// Markup that names its markers `tour-item-circle`.
    pub fn item_circles() -> Self {
        Self {
            marker: "tour-item-circle".to_owned(),
            ..Self::default()
        }
    }
}

/// Everything the page load trigger needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TourConfig {
    /// Policy for containers that do not name one. Accepts a preset name or a
    /// `{ anchor, spacing, current-step }` record.
    #[serde(deserialize_with = "deserialize_policy")]
    pub policy: LayoutPolicy,
    pub classes: MarkupClasses,
    pub metrics: DeclaredMetrics,
}

impl TourConfig {
    pub const fn new(policy: LayoutPolicy, classes: MarkupClasses, metrics: DeclaredMetrics) -> Self {
        Self {
            policy,
            classes,
            metrics,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: LayoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Read a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or names an unknown preset.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).context("parsing tour configuration")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PolicyRepr {
    Preset(String),
    Record(LayoutPolicy),
}

fn deserialize_policy<'de, D>(deserializer: D) -> Result<LayoutPolicy, D::Error>
where
    D: Deserializer<'de>,
{
    match PolicyRepr::deserialize(deserializer)? {
        PolicyRepr::Preset(name) => name.parse().map_err(de::Error::custom),
        PolicyRepr::Record(policy) => Ok(policy),
    }
}
