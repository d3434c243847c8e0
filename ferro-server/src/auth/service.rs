//! Session table — opaque bearer tokens with TTL

use dashmap::DashMap;
use rand::Rng;

use shared::now_millis;

/// 当前请求的操作者身份 (注入 request extensions，审计日志用)
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
}

#[derive(Debug, Clone)]
struct Session {
    username: String,
    expires_at: i64,
}

/// In-process session service
#[derive(Debug)]
pub struct SessionService {
    sessions: DashMap<String, Session>,
    ttl_ms: i64,
}

impl SessionService {
    pub fn new(ttl_ms: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl_ms,
        }
    }

    /// 登录成功后签发令牌
    pub fn issue(&self, username: &str) -> String {
        let token = generate_token();
        self.sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                expires_at: now_millis() + self.ttl_ms,
            },
        );
        token
    }

    /// 校验令牌，过期条目顺手移除
    pub fn verify(&self, token: &str) -> Option<CurrentUser> {
        let expired = {
            let session = self.sessions.get(token)?;
            if session.expires_at <= now_millis() {
                true
            } else {
                return Some(CurrentUser {
                    username: session.username.clone(),
                });
            }
        };
        if expired {
            self.sessions.remove(token);
        }
        None
    }

    /// 注销令牌
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }
}

/// 128-bit random hex token
fn generate_token() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill(&mut bytes[..]);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let service = SessionService::new(3_600_000);
        let token = service.issue("admin");

        let user = service.verify(&token).unwrap();
        assert_eq!(user.username, "admin");
        assert!(service.verify("bogus").is_none());
    }

    #[test]
    fn test_expired_token_is_rejected_and_removed() {
        let service = SessionService::new(0);
        let token = service.issue("admin");

        assert!(service.verify(&token).is_none());
        // Second lookup misses entirely: the entry was dropped
        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_revoke() {
        let service = SessionService::new(3_600_000);
        let token = service.issue("admin");

        assert!(service.revoke(&token));
        assert!(!service.revoke(&token));
        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_tokens_are_unique() {
        let service = SessionService::new(3_600_000);
        let a = service.issue("admin");
        let b = service.issue("admin");
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }
}
