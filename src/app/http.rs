// ==========================================
// 库存补货系统 - HTTP 路由
// ==========================================
// 职责: axum 路由 → ItemApi, ApiError → JSON 错误响应
// 路由:
// - GET    /api/health
// - GET    /api/items?q=
// - POST   /api/items
// - GET    /api/items/:id
// - PUT    /api/items/:id
// - DELETE /api/items/:id
// - GET    /api/export.csv
// 约束: SQLite 访问为同步调用, 统一放入 spawn_blocking
// ==========================================

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::{ApiError, ApiResult};
use crate::app::state::AppState;
use crate::exporter::EXPORT_FILE_NAME;
use crate::i18n::t;

/// 健康检查返回的服务名
pub const HEALTH_SERVICE_NAME: &str = "inventory-api";

/// 错误响应（返回给客户端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

/// 构建应用路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/api/export.csv", get(export_csv))
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ==========================================
// 路由处理
// ==========================================

async fn health() -> Json<Value> {
    Json(json!({ "ok": true, "service": HEALTH_SERVICE_NAME }))
}

async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let result = run_blocking(move || state.item_api.list_items(query.q.as_deref())).await;
    match result {
        Ok(items) => Json(items).into_response(),
        Err(err) => map_api_error(err),
    }
}

async fn get_item(State(state): State<Arc<AppState>>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return map_api_error(err),
    };

    match run_blocking(move || state.item_api.get_item(id)).await {
        Ok(item) => Json(item).into_response(),
        Err(err) => map_api_error(err),
    }
}

async fn create_item(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let body = match parse_body(&body) {
        Ok(body) => body,
        Err(err) => return map_api_error(err),
    };

    match run_blocking(move || state.item_api.create_item(&body)).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(err) => map_api_error(err),
    }
}

async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return map_api_error(err),
    };

    // 非 JSON 请求体按 null 处理, 由校验器报告; 不存在的物料优先返回 404
    let body = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);

    match run_blocking(move || state.item_api.update_item(id, &body)).await {
        Ok(item) => Json(item).into_response(),
        Err(err) => map_api_error(err),
    }
}

async fn delete_item(State(state): State<Arc<AppState>>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return map_api_error(err),
    };

    match run_blocking(move || state.item_api.delete_item(id)).await {
        Ok(()) => Json(json!({ "ok": true })).into_response(),
        Err(err) => map_api_error(err),
    }
}

async fn export_csv(State(state): State<Arc<AppState>>) -> Response {
    match run_blocking(move || state.item_api.export_csv()).await {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(err) => map_api_error(err),
    }
}

async fn fallback() -> Response {
    map_api_error(ApiError::NotFound(t("http.not_found")))
}

// ==========================================
// 内部辅助
// ==========================================

async fn run_blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> ApiResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        tracing::error!(error = %e, "阻塞任务执行失败");
        ApiError::InternalError(t("http.internal"))
    })?
}

/// 解析路径 id（非整数视为不存在）
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(t("http.not_found")))
}

fn parse_body(body: &[u8]) -> ApiResult<Value> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidInput(e.to_string()))
}

/// 将ApiError转换为HTTP响应
pub fn map_api_error(err: ApiError) -> Response {
    let status = status_of(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "请求处理失败");
    } else {
        tracing::debug!(error = %err, status = status.as_u16(), "请求被拒绝");
    }

    let error_response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::ValidationFailed { .. } => "VALIDATION_ERROR",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::DatabaseConnectionError(_) => "DATABASE_CONNECTION_ERROR",
            ApiError::ExportError(_) => "EXPORT_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
        .to_string(),
        message: err.to_string(),
        details: match &err {
            ApiError::ValidationFailed { violations, .. } => {
                Some(json!({ "violations": violations }))
            }
            _ => None,
        },
    };

    (status, Json(error_response)).into_response()
}

fn status_of(err: &ApiError) -> StatusCode {
    match err {
        ApiError::InvalidInput(_) | ApiError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
