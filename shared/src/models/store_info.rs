//! Store Info Model (店铺信息与管理员账户)

use serde::{Deserialize, Serialize};

/// Store-wide display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub site_name: String,
    pub version: String,
    pub currency: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            site_name: "Ferro Hardware".to_string(),
            version: "1.0.0".to_string(),
            currency: "COP".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfoUpdate {
    pub site_name: Option<String>,
    pub version: Option<String>,
    pub currency: Option<String>,
}

/// Single admin account stored in the document.
///
/// 认证机制是范围外的不透明门卫，这里只保存凭据本身。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}

impl Default for AdminAccount {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

/// Admin password change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current: String,
    #[serde(rename = "new")]
    pub new_password: String,
}
