//! Client core for the sandbox API.
//!
//! # Overview
//! Two independent pieces: an API client factory that wraps the REST surface
//! under `/api/v1` (bearer auth, key-case translation, centralized error
//! reporting), and the personal-templates view model that merges a user's
//! templates with the official ones for the "create sandbox" picker.
//!
//! # Design
//! - `ApiClient` is stateless; it captures collaborators and reads the token
//!   on every call. Network I/O sits behind the `Transport` trait.
//! - Key casing lives in `casing`; responses are camelized, request bodies
//!   decamelized, with `data.npmDependencies` exempt.
//! - `TemplateQuery` caches the personal-templates result; `templates`
//!   renders from a query snapshot without doing any I/O itself.

pub mod casing;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod templates;
pub mod types;

pub use client::{create_client, handle_response, ApiClient, ApiConfig, Options, RequestConfig, API_ROOT};
pub use config::ClientSettings;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use query::{ApiTemplateSource, FetchPolicy, QueryOptions, QueryResult, TemplateQuery, TemplateSource};
pub use templates::{PersonalTemplates, TemplatesView};
pub use types::{CurrentUser, ListPersonalTemplates, Team, Template, TemplateInfo};
