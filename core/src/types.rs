//! Template DTOs shared by the query layer and the aggregator.
//!
//! # Design
//! Query results arrive camelCase (GraphQL field names), so every struct
//! renames to camelCase. Template records are opaque here: only `id` is
//! typed, everything else is kept verbatim in `fields` and handed through
//! to whatever renders the template.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single template record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A named, keyed group of templates as handed to the list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    /// Unique within one rendered collection.
    pub key: String,
    pub title: String,
    pub templates: Vec<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_owned: Option<bool>,
}

/// Result of the `ListPersonalTemplates` query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPersonalTemplates {
    #[serde(default)]
    pub me: Option<CurrentUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default)]
    pub recently_used_templates: Vec<Template>,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub bookmarked_templates: Vec<Template>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub bookmarked_templates: Vec<Template>,
}
