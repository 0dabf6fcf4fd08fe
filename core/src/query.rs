//! Personal-templates query with a client-side cache.
//!
//! # Design
//! `TemplateQuery` owns the last good result and the last error. `watch`
//! answers from that state without any I/O, which is how cached data gets on
//! screen immediately; `refresh` goes to the `TemplateSource` and updates the
//! state. A skipped query (logged-out user) neither reads nor fetches.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde_json::{json, Value};

use crate::client::{ApiClient, Options};
use crate::error::ApiError;
use crate::types::ListPersonalTemplates;

/// GraphQL document for the signed-in user's templates.
pub const LIST_PERSONAL_TEMPLATES: &str = r#"query ListPersonalTemplates {
  me {
    recentlyUsedTemplates { ...TemplateFields }
    templates { ...TemplateFields }
    bookmarkedTemplates { ...TemplateFields }
    teams {
      id
      name
      templates { ...TemplateFields }
      bookmarkedTemplates { ...TemplateFields }
    }
  }
}

fragment TemplateFields on Template {
  id
  color
  iconUrl
  published
  sandbox {
    id
    alias
    title
    description
    insertedAt
    updatedAt
  }
}
"#;

/// How `TemplateQuery::execute` treats cached data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Return cached data when present; fetch only on a miss.
    CacheFirst,
    /// Return cached data right away and refresh it from the network.
    #[default]
    CacheAndNetwork,
    /// Always fetch; cached data is never returned.
    NetworkOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOptions {
    pub fetch_policy: FetchPolicy,
    /// Do not read or fetch anything.
    pub skip: bool,
}

/// Snapshot of a query: the data on hand and the last terminal error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub data: Option<ListPersonalTemplates>,
    pub error: Option<ApiError>,
}

/// Where personal templates come from on a cache refresh.
pub trait TemplateSource {
    fn fetch_personal_templates(&self) -> Result<ListPersonalTemplates, ApiError>;
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

/// Fetches personal templates from the API's GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct ApiTemplateSource {
    client: ApiClient,
}

impl ApiTemplateSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl TemplateSource for ApiTemplateSource {
    fn fetch_personal_templates(&self) -> Result<ListPersonalTemplates, ApiError> {
        let request = GraphqlRequest {
            query: LIST_PERSONAL_TEMPLATES,
            variables: json!({}),
        };
        let response: Value = self.client.post("/graphql", &request, Options::default())?;
        if let Some(errors) = response.get("errors").filter(|e| !e.is_null()) {
            return Err(ApiError::Graphql(errors.to_string()));
        }
        serde_json::from_value(response).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

#[derive(Debug, Default)]
struct CacheState {
    data: Option<ListPersonalTemplates>,
    error: Option<ApiError>,
}

/// Cached personal-templates query over a `TemplateSource`.
#[derive(Debug)]
pub struct TemplateQuery<S> {
    source: S,
    state: RwLock<CacheState>,
}

impl<S: TemplateSource> TemplateQuery<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(CacheState::default()),
        }
    }

    /// Current state, without touching the network.
    pub fn watch(&self, options: QueryOptions) -> QueryResult {
        if options.skip {
            return QueryResult::default();
        }
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let data = match options.fetch_policy {
            FetchPolicy::NetworkOnly => None,
            FetchPolicy::CacheFirst | FetchPolicy::CacheAndNetwork => state.data.clone(),
        };
        QueryResult {
            data,
            error: state.error.clone(),
        }
    }

    /// Fetch from the source and update the cache. A failure is recorded but
    /// leaves previously cached data in place.
    pub fn refresh(&self, options: QueryOptions) -> QueryResult {
        if options.skip {
            return QueryResult::default();
        }
        let fetched = self.source.fetch_personal_templates();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        match fetched {
            Ok(data) => {
                tracing::debug!("personal templates refreshed");
                state.data = Some(data.clone());
                state.error = None;
                QueryResult {
                    data: Some(data),
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "personal templates refresh failed");
                state.error = Some(err.clone());
                let data = match options.fetch_policy {
                    FetchPolicy::NetworkOnly => None,
                    FetchPolicy::CacheFirst | FetchPolicy::CacheAndNetwork => state.data.clone(),
                };
                QueryResult {
                    data,
                    error: Some(err),
                }
            }
        }
    }

    /// Run the query according to its fetch policy.
    pub fn execute(&self, options: QueryOptions) -> QueryResult {
        if options.skip {
            return QueryResult::default();
        }
        if options.fetch_policy == FetchPolicy::CacheFirst {
            let cached = self.watch(options);
            if cached.data.is_some() {
                tracing::debug!("personal templates served from cache");
                return cached;
            }
        }
        self.refresh(options)
    }

    /// Drop cached data and errors, e.g. after sign-out.
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = CacheState::default();
    }
}
