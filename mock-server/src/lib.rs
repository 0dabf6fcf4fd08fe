use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Every payload goes out wrapped as `{"data": ...}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sandbox {
    pub id: Uuid,
    pub title: String,
    pub privacy_level: u8,
    pub is_frozen: bool,
    pub npm_dependencies: BTreeMap<String, String>,
}

#[derive(Deserialize)]
pub struct CreateSandbox {
    pub title: String,
    #[serde(default)]
    pub privacy_level: u8,
    #[serde(default)]
    pub is_frozen: bool,
    #[serde(default)]
    pub npm_dependencies: BTreeMap<String, String>,
}

#[derive(Deserialize)]
pub struct UpdateSandbox {
    pub title: Option<String>,
    pub privacy_level: Option<u8>,
    pub is_frozen: Option<bool>,
    pub npm_dependencies: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub title: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    pub display_name: String,
}

#[derive(Deserialize)]
pub struct GraphqlRequest {
    pub query: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Sandbox>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let api = Router::new()
        .route("/sandboxes", get(list_sandboxes).post(create_sandbox))
        .route(
            "/sandboxes/{id}",
            get(get_sandbox)
                .patch(patch_sandbox)
                .put(put_sandbox)
                .delete(delete_sandbox),
        )
        .route("/users/current", get(current_user))
        .route("/graphql", post(graphql))
        .with_state(db);
    Router::new().nest("/api/v1", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Token from `Authorization: Bearer <token>`; empty tokens don't count.
fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

fn require_auth(headers: &HeaderMap) -> Result<&str, StatusCode> {
    bearer(headers).ok_or(StatusCode::UNAUTHORIZED)
}

async fn list_sandboxes(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<Data<Vec<Sandbox>>> {
    let sandboxes = db.read().await;
    let mut data: Vec<Sandbox> = sandboxes
        .values()
        .filter(|s| params.title.as_ref().is_none_or(|title| &s.title == title))
        .cloned()
        .collect();
    data.sort_by(|a, b| a.title.cmp(&b.title));
    Json(Data { data })
}

async fn create_sandbox(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateSandbox>,
) -> Result<(StatusCode, Json<Data<Sandbox>>), StatusCode> {
    require_auth(&headers)?;
    let sandbox = Sandbox {
        id: Uuid::new_v4(),
        title: input.title,
        privacy_level: input.privacy_level,
        is_frozen: input.is_frozen,
        npm_dependencies: input.npm_dependencies,
    };
    tracing::info!(id = %sandbox.id, "sandbox created");
    db.write().await.insert(sandbox.id, sandbox.clone());
    Ok((StatusCode::CREATED, Json(Data { data: sandbox })))
}

async fn get_sandbox(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Data<Sandbox>>, StatusCode> {
    let sandboxes = db.read().await;
    sandboxes
        .get(&id)
        .cloned()
        .map(|data| Json(Data { data }))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn patch_sandbox(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(input): Json<UpdateSandbox>,
) -> Result<Json<Data<Sandbox>>, StatusCode> {
    require_auth(&headers)?;
    let mut sandboxes = db.write().await;
    let sandbox = sandboxes.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        sandbox.title = title;
    }
    if let Some(privacy_level) = input.privacy_level {
        sandbox.privacy_level = privacy_level;
    }
    if let Some(is_frozen) = input.is_frozen {
        sandbox.is_frozen = is_frozen;
    }
    if let Some(npm_dependencies) = input.npm_dependencies {
        sandbox.npm_dependencies = npm_dependencies;
    }
    Ok(Json(Data {
        data: sandbox.clone(),
    }))
}

async fn put_sandbox(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(input): Json<CreateSandbox>,
) -> Result<Json<Data<Sandbox>>, StatusCode> {
    require_auth(&headers)?;
    let mut sandboxes = db.write().await;
    let sandbox = sandboxes.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *sandbox = Sandbox {
        id,
        title: input.title,
        privacy_level: input.privacy_level,
        is_frozen: input.is_frozen,
        npm_dependencies: input.npm_dependencies,
    };
    Ok(Json(Data {
        data: sandbox.clone(),
    }))
}

async fn delete_sandbox(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    require_auth(&headers)?;
    let mut sandboxes = db.write().await;
    sandboxes
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn current_user(headers: HeaderMap) -> Result<Json<Data<CurrentUser>>, StatusCode> {
    let token = require_auth(&headers)?;
    Ok(Json(Data {
        data: CurrentUser {
            username: format!("user-{token}"),
            display_name: "Sandbox User".to_string(),
        },
    }))
}

async fn graphql(
    headers: HeaderMap,
    Json(request): Json<GraphqlRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if bearer(&headers).is_none() {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "errors": [{ "message": "unauthenticated" }] })),
        ));
    }
    if !request.query.contains("ListPersonalTemplates") {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "errors": [{ "message": "unknown operation" }] })),
        ));
    }
    Ok(Json(json!({ "data": { "me": personal_templates() } })))
}

fn template(id: &str, alias: &str, title: &str, color: &str) -> Value {
    json!({
        "id": id,
        "color": color,
        "iconUrl": format!("https://codesandbox.io/static/img/templates/{alias}.svg"),
        "published": true,
        "sandbox": { "id": format!("sb-{id}"), "alias": alias, "title": title }
    })
}

/// Fixed personal-templates fixture served to any signed-in user.
pub fn personal_templates() -> Value {
    json!({
        "recentlyUsedTemplates": [template("tpl-react-ts", "react-ts", "React TypeScript", "#009fff")],
        "templates": [template("tpl-blog", "my-blog", "My Blog", "#f7df1e")],
        "bookmarkedTemplates": [template("tpl-next", "nextjs", "Next.js", "#000000")],
        "teams": [
            {
                "id": "team-1",
                "name": "Sandboxers",
                "templates": [template("tpl-team-starter", "team-starter", "Team Starter", "#40a9f3")],
                "bookmarkedTemplates": []
            },
            {
                "id": "team-2",
                "name": "Frontend Guild",
                "templates": [],
                "bookmarkedTemplates": [template("tpl-vite", "vite-react", "Vite React", "#646cff")]
            }
        ]
    })
}
