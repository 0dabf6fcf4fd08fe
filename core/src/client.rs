//! API client factory for the sandbox REST API.
//!
//! # Design
//! `ApiClient` is a stateless façade: it captures a token provider, a parsed
//! configuration accessor and an error callback, plus the server origin and a
//! `Transport`. Every call reads the token afresh, builds its own header set,
//! and runs through one `execute` path so the error callback observes every
//! failure before it is returned. Errors are observed, never swallowed.
//!
//! Key casing is asymmetric on purpose. The convenience verbs take camelCase
//! bodies and send snake_case; `request` takes server-shaped snake_case `data`
//! and sends it camelized. Responses are camelized unless the caller opts out.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::casing::{camelize_keys, decamelize_keys};
use crate::config::ClientSettings;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};

/// Path prefix shared by every endpoint.
pub const API_ROOT: &str = "/api/v1";

/// Per-call response handling options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Convert response keys from snake_case to camelCase.
    pub should_camelize: bool,
}

impl Options {
    /// Return the response body with its keys exactly as the server sent them.
    pub fn raw() -> Self {
        Self {
            should_camelize: false,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            should_camelize: true,
        }
    }
}

/// Input of the generic `ApiClient::request` operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub method: HttpMethod,
    /// Path relative to `API_ROOT`.
    pub url: String,
    pub params: Vec<(String, String)>,
    /// Server-shaped (snake_case) payload; camelized before sending.
    pub data: Option<Value>,
}

impl RequestConfig {
    pub fn new(method: HttpMethod, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            params: Vec::new(),
            data: None,
        }
    }

    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

type TokenProvider = Arc<dyn Fn() -> Option<String> + Send + Sync>;
type ConfigurationProvider = Arc<dyn Fn() -> Value + Send + Sync>;
type ErrorHandler = Arc<dyn Fn(&ApiError) + Send + Sync>;

/// Collaborators captured by the client at construction time.
#[derive(Clone)]
pub struct ApiConfig {
    provide_jwt_token: TokenProvider,
    get_parsed_configurations: ConfigurationProvider,
    on_error: ErrorHandler,
}

impl ApiConfig {
    /// `provide_jwt_token` returning `None` or an empty string means the
    /// request goes out unauthenticated.
    pub fn new(
        provide_jwt_token: impl Fn() -> Option<String> + Send + Sync + 'static,
        get_parsed_configurations: impl Fn() -> Value + Send + Sync + 'static,
        on_error: impl Fn(&ApiError) + Send + Sync + 'static,
    ) -> Self {
        Self {
            provide_jwt_token: Arc::new(provide_jwt_token),
            get_parsed_configurations: Arc::new(get_parsed_configurations),
            on_error: Arc::new(on_error),
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig").finish_non_exhaustive()
    }
}

/// Build a client for the server named by `SANDBOX_API_URL`, talking over
/// the network through `UreqTransport`.
pub fn create_client(config: ApiConfig) -> ApiClient {
    ApiClient::new(ClientSettings::from_env(), config, UreqTransport::new())
}

/// Client for the sandbox API. Cheap to clone; clones share collaborators.
#[derive(Clone)]
pub struct ApiClient {
    settings: ClientSettings,
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        settings: ClientSettings,
        config: ApiConfig,
        transport: impl Transport + 'static,
    ) -> Self {
        Self {
            settings,
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Current runtime configuration, read through the captured accessor.
    pub fn parsed_configurations(&self) -> Value {
        (self.config.get_parsed_configurations)()
    }

    pub fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        options: Options,
    ) -> Result<T, ApiError> {
        self.execute(options, || {
            self.build(HttpMethod::Get, path, owned_params(params), None)
        })
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: Options,
    ) -> Result<T, ApiError> {
        self.execute(options, || {
            let body = decamelize_keys(to_json(body)?);
            self.build(HttpMethod::Post, path, Vec::new(), Some(body))
        })
    }

    pub fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: Options,
    ) -> Result<T, ApiError> {
        self.execute(options, || {
            let body = decamelize_keys(to_json(body)?);
            self.build(HttpMethod::Patch, path, Vec::new(), Some(body))
        })
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: Options,
    ) -> Result<T, ApiError> {
        self.execute(options, || {
            let body = decamelize_keys(to_json(body)?);
            self.build(HttpMethod::Put, path, Vec::new(), Some(body))
        })
    }

    pub fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        options: Options,
    ) -> Result<T, ApiError> {
        self.execute(options, || {
            self.build(HttpMethod::Delete, path, owned_params(params), None)
        })
    }

    /// Issue an arbitrary request. Unlike the verbs above, `data` is expected
    /// in server shape and is camelized before sending.
    pub fn request<T: DeserializeOwned>(
        &self,
        request: RequestConfig,
        options: Options,
    ) -> Result<T, ApiError> {
        self.execute(options, || {
            let RequestConfig {
                method,
                url,
                params,
                data,
            } = request;
            // Explicit `null` data is the same as no data.
            let body = data.filter(|data| !data.is_null()).map(camelize_keys);
            self.build(method, &url, params, body)
        })
    }

    fn build(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<HttpRequest, ApiError> {
        let mut headers = self.auth_headers();
        let body = match body {
            Some(body) => {
                headers.push(("content-type".to_string(), "application/json".to_string()));
                Some(
                    serde_json::to_string(&body)
                        .map_err(|e| ApiError::Serialization(e.to_string()))?,
                )
            }
            None => None,
        };
        Ok(HttpRequest {
            method,
            url: format!("{}{API_ROOT}{path}", self.settings.base_url),
            query,
            headers,
            body,
        })
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        match (self.config.provide_jwt_token)() {
            Some(token) if !token.is_empty() => {
                vec![("Authorization".to_string(), format!("Bearer {token}"))]
            }
            _ => Vec::new(),
        }
    }

    /// Single exit for every operation: the error callback sees each failure
    /// exactly once, then the same error goes back to the caller.
    fn execute<T: DeserializeOwned>(
        &self,
        options: Options,
        build: impl FnOnce() -> Result<HttpRequest, ApiError>,
    ) -> Result<T, ApiError> {
        let result = build().and_then(|request| {
            tracing::debug!(
                method = request.method.as_str(),
                url = %request.url,
                authenticated = request.header("authorization").is_some(),
                "api request"
            );
            let response = self.transport.send(request)?;
            check_status(&response)?;
            let value = handle_response(&response.body, options)?;
            serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
        });

        result.map_err(|err| {
            tracing::warn!(error = %err, "api request failed");
            (self.config.on_error)(&err);
            err
        })
    }
}

/// Post-process a successful response body.
///
/// Keys are camelized unless `options` opts out, except for
/// `data.npmDependencies` whose entries are package names and are restored
/// verbatim. A truthy top-level `data` field is unwrapped.
pub fn handle_response(body: &str, options: Options) -> Result<Value, ApiError> {
    let raw: Value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?
    };

    if !options.should_camelize {
        return Ok(unwrap_data(raw));
    }

    let npm_dependencies = raw.pointer("/data/npm_dependencies").cloned();
    let mut camelized = camelize_keys(raw);
    if let (Some(slot), Some(original)) = (
        camelized.pointer_mut("/data/npmDependencies"),
        npm_dependencies,
    ) {
        *slot = original;
    }

    Ok(unwrap_data(camelized))
}

fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if is_truthy(&data) => data,
            Some(data) => {
                map.insert("data".to_string(), data);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn to_json<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn owned_params(params: &[(&str, &str)]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records every request and replays canned responses in order.
    #[derive(Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<HttpRequest>>,
        responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: &str) -> Arc<Self> {
            let transport = Self::default();
            transport.push(status, body);
            Arc::new(transport)
        }

        fn failing(err: ApiError) -> Arc<Self> {
            let transport = Self::default();
            transport.responses.lock().unwrap().push_back(Err(err));
            Arc::new(transport)
        }

        fn push(&self, status: u16, body: &str) {
            self.responses.lock().unwrap().push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
        }

        fn last(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no response queued".to_string())))
        }
    }

    fn config_with_token(token: &'static str, errors: Arc<AtomicUsize>) -> ApiConfig {
        ApiConfig::new(
            move || Some(token.to_string()),
            || json!({ "prettierConfig": { "semi": false } }),
            move |_| {
                errors.fetch_add(1, Ordering::SeqCst);
            },
        )
    }

    fn client(transport: Arc<RecordingTransport>, token: &'static str) -> (ApiClient, Arc<AtomicUsize>) {
        let errors = Arc::new(AtomicUsize::new(0));
        let client = ApiClient::new(
            ClientSettings::new("http://localhost:3000"),
            config_with_token(token, errors.clone()),
            transport,
        );
        (client, errors)
    }

    #[test]
    fn empty_token_sends_no_authorization_header() {
        let transport = RecordingTransport::replying(200, "{}");
        let (client, _) = client(transport.clone(), "");
        let _: Value = client.get("/sandboxes", &[], Options::default()).unwrap();
        assert!(transport.last().header("authorization").is_none());
    }

    #[test]
    fn missing_token_sends_no_authorization_header() {
        let transport = RecordingTransport::replying(200, "{}");
        let client = ApiClient::new(
            ClientSettings::default(),
            ApiConfig::new(|| None, || Value::Null, |_| {}),
            transport.clone(),
        );
        let _: Value = client.get("/sandboxes", &[], Options::default()).unwrap();
        assert!(transport.last().headers.is_empty());
    }

    #[test]
    fn token_is_sent_as_bearer() {
        let transport = RecordingTransport::replying(200, "{}");
        let (client, _) = client(transport.clone(), "abc");
        let _: Value = client.get("/sandboxes", &[], Options::default()).unwrap();
        assert_eq!(transport.last().header("authorization"), Some("Bearer abc"));
    }

    #[test]
    fn token_is_read_on_every_call() {
        let transport = Arc::new(RecordingTransport::default());
        transport.push(200, "{}");
        transport.push(200, "{}");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let client = ApiClient::new(
            ClientSettings::default(),
            ApiConfig::new(
                move || Some(format!("token-{}", counter.fetch_add(1, Ordering::SeqCst))),
                || Value::Null,
                |_| {},
            ),
            transport.clone(),
        );

        let _: Value = client.get("/a", &[], Options::default()).unwrap();
        assert_eq!(transport.last().header("authorization"), Some("Bearer token-0"));
        let _: Value = client.get("/b", &[], Options::default()).unwrap();
        assert_eq!(transport.last().header("authorization"), Some("Bearer token-1"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn get_prefixes_api_root_and_forwards_params() {
        let transport = RecordingTransport::replying(200, r#"{"data":[]}"#);
        let (client, _) = client(transport.clone(), "abc");
        let out: Vec<Value> = client
            .get("/sandboxes", &[("page", "2"), ("sort_by", "inserted_at")], Options::default())
            .unwrap();
        assert!(out.is_empty());

        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/api/v1/sandboxes");
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("sort_by".to_string(), "inserted_at".to_string()),
            ]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn post_decamelizes_body_and_camelizes_response() {
        let transport = RecordingTransport::replying(200, r#"{"foo_bar":2}"#);
        let (client, _) = client(transport.clone(), "abc");
        let out: Value = client
            .post("/sandboxes", &json!({ "fooBar": 1 }), Options::default())
            .unwrap();
        assert_eq!(out, json!({ "fooBar": 2 }));

        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.header("content-type"), Some("application/json"));
        let sent: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({ "foo_bar": 1 }));
    }

    #[test]
    fn raw_option_leaves_response_keys_alone() {
        let transport = RecordingTransport::replying(200, r#"{"foo_bar":2}"#);
        let (client, _) = client(transport, "abc");
        let out: Value = client
            .post("/sandboxes", &json!({ "fooBar": 1 }), Options::raw())
            .unwrap();
        assert_eq!(out, json!({ "foo_bar": 2 }));
    }

    #[test]
    fn patch_and_put_decamelize_bodies() {
        let transport = Arc::new(RecordingTransport::default());
        transport.push(200, "{}");
        transport.push(200, "{}");
        let (client, _) = client(transport.clone(), "abc");

        let _: Value = client
            .patch("/sandboxes/1", &json!({ "privacyLevel": 2 }), Options::default())
            .unwrap();
        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.body.as_deref(), Some(r#"{"privacy_level":2}"#));

        let _: Value = client
            .put("/sandboxes/1", &json!({ "isFrozen": true }), Options::default())
            .unwrap();
        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.body.as_deref(), Some(r#"{"is_frozen":true}"#));
    }

    #[test]
    fn serializable_structs_are_decamelized() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct NewSandbox {
            template_id: String,
        }

        let transport = RecordingTransport::replying(201, "{}");
        let (client, _) = client(transport.clone(), "abc");
        let body = NewSandbox {
            template_id: "react".to_string(),
        };
        let _: Value = client.post("/sandboxes", &body, Options::default()).unwrap();
        assert_eq!(transport.last().body.as_deref(), Some(r#"{"template_id":"react"}"#));
    }

    #[test]
    fn delete_with_empty_body_returns_unit() {
        let transport = RecordingTransport::replying(204, "");
        let (client, _) = client(transport.clone(), "abc");
        let () = client.delete("/sandboxes/1", &[("force", "true")], Options::default()).unwrap();
        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.query, vec![("force".to_string(), "true".to_string())]);
        assert!(req.body.is_none());
    }

    #[test]
    fn request_camelizes_data_payload() {
        let transport = RecordingTransport::replying(200, r#"{"data":{"ok":true}}"#);
        let (client, _) = client(transport.clone(), "abc");
        let config = RequestConfig::new(HttpMethod::Post, "/sandboxes/fork")
            .param("v", "2")
            .data(json!({ "source_id": "abc" }));
        let out: Value = client.request(config, Options::default()).unwrap();
        assert_eq!(out, json!({ "ok": true }));

        let req = transport.last();
        assert_eq!(req.url, "http://localhost:3000/api/v1/sandboxes/fork");
        assert_eq!(req.query, vec![("v".to_string(), "2".to_string())]);
        assert_eq!(req.body.as_deref(), Some(r#"{"sourceId":"abc"}"#));
        assert_eq!(req.header("authorization"), Some("Bearer abc"));
    }

    #[test]
    fn request_without_data_sends_no_body() {
        let transport = RecordingTransport::replying(200, "{}");
        let (client, _) = client(transport.clone(), "abc");
        let _: Value = client
            .request(RequestConfig::new(HttpMethod::Get, "/users/current"), Options::default())
            .unwrap();
        assert!(transport.last().body.is_none());
        assert!(transport.last().header("content-type").is_none());
    }

    #[test]
    fn request_with_null_data_sends_no_body() {
        let transport = RecordingTransport::replying(200, "{}");
        let (client, _) = client(transport.clone(), "abc");
        let config = RequestConfig::new(HttpMethod::Post, "/sandboxes/fork").data(Value::Null);
        let _: Value = client.request(config, Options::default()).unwrap();
        assert!(transport.last().body.is_none());
        assert!(transport.last().header("content-type").is_none());
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiClient>();
        assert_send_sync::<ApiConfig>();

        let transport = RecordingTransport::replying(200, r#"{"data":{"id":"a"}}"#);
        transport.push(200, r#"{"data":{"id":"b"}}"#);
        let (client, _) = client(transport.clone(), "abc");
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let client = client.clone();
                std::thread::spawn(move || {
                    client.get::<Value>("/sandboxes/x", &[], Options::default()).unwrap()
                })
            })
            .collect();
        let mut ids: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().unwrap()["id"].as_str().unwrap().to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn npm_dependency_names_survive_camelization() {
        let body = r#"{"data":{"npm_dependencies":{"string_decoder":"1.3.0","lodash":"4"},"is_frozen":false}}"#;
        let transport = RecordingTransport::replying(200, body);
        let (client, _) = client(transport, "abc");
        let out: Value = client.get("/sandboxes/1", &[], Options::default()).unwrap();
        assert_eq!(
            out,
            json!({
                "npmDependencies": { "string_decoder": "1.3.0", "lodash": "4" },
                "isFrozen": false
            })
        );
    }

    #[test]
    fn transport_failure_reaches_callback_once_and_caller() {
        let err = ApiError::Transport("connection reset".to_string());
        let transport = RecordingTransport::failing(err.clone());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let client = ApiClient::new(
            ClientSettings::default(),
            ApiConfig::new(
                || Some("abc".to_string()),
                || Value::Null,
                move |e| sink.lock().unwrap().push(e.clone()),
            ),
            transport,
        );

        let result: Result<Value, ApiError> = client.get("/sandboxes", &[], Options::default());
        assert_eq!(result.unwrap_err(), err);
        assert_eq!(*seen.lock().unwrap(), vec![err]);
    }

    #[test]
    fn http_error_status_is_reported() {
        let transport = RecordingTransport::replying(401, r#"{"errors":["unauthorized"]}"#);
        let (client, errors) = client(transport, "expired");
        let err = client
            .get::<Value>("/users/current", &[], Options::default())
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn malformed_body_goes_through_error_callback() {
        let transport = RecordingTransport::replying(200, "<html>");
        let (client, errors) = client(transport, "abc");
        let err = client
            .get::<Value>("/sandboxes", &[], Options::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn type_mismatch_goes_through_error_callback() {
        let transport = RecordingTransport::replying(200, r#"{"data":{"id":"x"}}"#);
        let (client, errors) = client(transport, "abc");
        let err = client
            .get::<Vec<String>>("/sandboxes", &[], Options::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn successful_calls_do_not_touch_callback() {
        let transport = RecordingTransport::replying(200, "{}");
        let (client, errors) = client(transport, "abc");
        let _: Value = client.get("/sandboxes", &[], Options::default()).unwrap();
        assert_eq!(errors.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn parsed_configurations_come_from_accessor() {
        let transport = Arc::new(RecordingTransport::default());
        let (client, _) = client(transport, "abc");
        assert_eq!(client.parsed_configurations()["prettierConfig"]["semi"], false);
    }

    #[test]
    fn create_client_reads_settings_from_env() {
        let client = create_client(ApiConfig::new(|| None, || Value::Null, |_| {}));
        assert_eq!(client.settings(), &ClientSettings::from_env());
        assert!(!client.settings().base_url.ends_with('/'));
    }

    #[test]
    fn falsy_data_is_not_unwrapped() {
        let out = handle_response(r#"{"data":null,"total_count":0}"#, Options::default()).unwrap();
        assert_eq!(out, json!({ "data": null, "totalCount": 0 }));

        let out = handle_response(r#"{"data":0}"#, Options::default()).unwrap();
        assert_eq!(out, json!({ "data": 0 }));

        let out = handle_response(r#"{"data":"yes"}"#, Options::default()).unwrap();
        assert_eq!(out, json!("yes"));
    }

    #[test]
    fn non_object_bodies_pass_through() {
        assert_eq!(handle_response("[1,2]", Options::default()).unwrap(), json!([1, 2]));
        assert_eq!(handle_response("  ", Options::default()).unwrap(), Value::Null);
    }
}
