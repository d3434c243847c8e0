//! 认证中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;

use crate::core::ServerState;
use crate::utils::AppError;

/// 公开路由表 — 店面与收银台不要求登录
///
/// 目录读取、收银台结账、营业状态/时段查询对外开放，
/// 其余 API 一律要求有效会话。
fn is_public(method: &Method, path: &str) -> bool {
    if *method == Method::GET {
        return path == "/api/health"
            || path == "/api/schedule"
            || path == "/api/days/status"
            || path == "/api/categories"
            || path == "/api/auth/session"
            || path == "/api/products"
            || path.starts_with("/api/products/");
    }
    if *method == Method::POST {
        return path == "/api/auth/login" || path == "/api/sales";
    }
    false
}

/// 全局认证中间件 — 校验 Bearer 令牌并注入 [`CurrentUser`](super::CurrentUser)
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过认证 (让它们正常返回 404)
    if !req.uri().path().starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer)
        .ok_or(AppError::Unauthorized)?;

    let user = state.sessions.verify(token).ok_or(AppError::InvalidToken)?;
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// "Bearer <token>" → token
pub fn extract_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer("Bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer("Bearer "), None);
        assert_eq!(extract_bearer("Basic abc123"), None);
    }

    #[test]
    fn test_public_route_table() {
        assert!(is_public(&Method::GET, "/api/products"));
        assert!(is_public(&Method::GET, "/api/products/123"));
        assert!(is_public(&Method::GET, "/api/days/status"));
        assert!(is_public(&Method::POST, "/api/sales"));
        assert!(is_public(&Method::POST, "/api/auth/login"));

        assert!(!is_public(&Method::POST, "/api/products"));
        assert!(!is_public(&Method::GET, "/api/days"));
        assert!(!is_public(&Method::GET, "/api/sales"));
        assert!(!is_public(&Method::POST, "/api/days/open"));
        assert!(!is_public(&Method::DELETE, "/api/products/123"));
    }
}
