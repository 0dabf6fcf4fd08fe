//! Personal-templates view model for the "create sandbox" picker.
//!
//! # Design
//! Rendering is a pure function of the props and a `QueryResult`. States are
//! resolved in a fixed priority: error, loading, empty, content. Groups are
//! rebuilt on every render and never stored.

use crate::query::{FetchPolicy, QueryOptions, QueryResult, TemplateQuery, TemplateSource};
use crate::types::{CurrentUser, Team, Template, TemplateInfo};

pub const FETCH_ERROR_MESSAGE: &str =
    "Something went wrong while fetching your templates, please try again in a minute.";

pub const NO_TEMPLATES_MESSAGE: &str =
    "You don't have any templates yet, go on and create or bookmark some!";

/// What the picker should show.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatesView {
    Error {
        message: &'static str,
    },
    Loading,
    Empty {
        message: &'static str,
    },
    /// Search results over all groups for `query`.
    Filtered {
        query: String,
        template_infos: Vec<TemplateInfo>,
        fork_on_open: bool,
    },
    /// Full-width list of all groups.
    List {
        template_infos: Vec<TemplateInfo>,
        fork_on_open: bool,
        show_secondary_shortcuts: bool,
    },
}

/// Inputs of the personal-templates picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalTemplates {
    pub filter: String,
    pub official_template_infos: Vec<TemplateInfo>,
    pub has_log_in: bool,
}

impl PersonalTemplates {
    /// Logged-out users never issue the query.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            fetch_policy: FetchPolicy::CacheAndNetwork,
            skip: !self.has_log_in,
        }
    }

    /// Render from whatever `query` already holds.
    pub fn render_cached<S: TemplateSource>(&self, query: &TemplateQuery<S>) -> TemplatesView {
        self.render(&query.watch(self.query_options()))
    }

    /// Run `query` and render its outcome.
    pub fn render_fresh<S: TemplateSource>(&self, query: &TemplateQuery<S>) -> TemplatesView {
        self.render(&query.execute(self.query_options()))
    }

    pub fn render(&self, result: &QueryResult) -> TemplatesView {
        if result.error.is_some() {
            return TemplatesView::Error {
                message: FETCH_ERROR_MESSAGE,
            };
        }

        // Only the presence of `me` matters: cached data renders even while
        // a refresh is outstanding.
        let me = result.data.as_ref().and_then(|data| data.me.as_ref());
        let me = match (self.has_log_in, me) {
            (true, None) => return TemplatesView::Loading,
            (true, Some(me)) => Some(me),
            (false, _) => None,
        };

        if let Some(me) = me {
            if me.templates.is_empty() && me.bookmarked_templates.is_empty() {
                return TemplatesView::Empty {
                    message: NO_TEMPLATES_MESSAGE,
                };
            }
        }

        let mut template_infos = me.map(personal_template_infos).unwrap_or_default();
        template_infos.extend(self.official_template_infos.iter().cloned());

        if self.filter.is_empty() {
            TemplatesView::List {
                template_infos,
                fork_on_open: true,
                show_secondary_shortcuts: true,
            }
        } else {
            TemplatesView::Filtered {
                query: self.filter.clone(),
                template_infos,
                fork_on_open: true,
            }
        }
    }
}

/// Personal groups in display order: recently used, own, owned team groups,
/// bookmarked, bookmarked team groups.
pub fn personal_template_infos(me: &CurrentUser) -> Vec<TemplateInfo> {
    let mut infos = vec![
        group(
            "recently-used-templates",
            "Recently Used Templates",
            &me.recently_used_templates,
            None,
        ),
        group("my-templates", "My Templates", &me.templates, Some(true)),
    ];

    infos.extend(
        me.teams
            .iter()
            .filter(|team| !team.templates.is_empty())
            .map(|team| {
                group(
                    &format!("{}-templates", team.id),
                    &team_title(team, "Templates"),
                    &team.templates,
                    Some(true),
                )
            }),
    );

    infos.push(group(
        "my-bookmarked-templates",
        "My Bookmarked Templates",
        &me.bookmarked_templates,
        None,
    ));

    infos.extend(
        me.teams
            .iter()
            .filter(|team| !team.bookmarked_templates.is_empty())
            .map(|team| {
                group(
                    &format!("{}-bookmarked-templates", team.id),
                    &team_title(team, "Bookmarked Templates"),
                    &team.bookmarked_templates,
                    None,
                )
            }),
    );

    infos
}

/// `"{name}'s {heading}"`, or `"{name}' {heading}"` when the name ends in `s`.
pub fn possessive(name: &str) -> String {
    if name.ends_with('s') {
        format!("{name}'")
    } else {
        format!("{name}'s")
    }
}

fn team_title(team: &Team, heading: &str) -> String {
    format!("{} {heading}", possessive(&team.name))
}

fn group(key: &str, title: &str, templates: &[Template], is_owned: Option<bool>) -> TemplateInfo {
    TemplateInfo {
        key: key.to_string(),
        title: title.to_string(),
        templates: templates.to_vec(),
        is_owned,
    }
}
