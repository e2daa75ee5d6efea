use contracts::shared::api_error::ApiError;
use contracts::system::session::{LoginForm, RegisterForm, SessionInfo};

use crate::shared::api_utils::post_json;

/// Вход: роль определяет бэкенд по справочнику e-mail
pub async fn login(form: &LoginForm) -> Result<SessionInfo, ApiError> {
    post_json("/api/system/session/login", form).await
}

/// Регистрация; 409 если e-mail уже занят
pub async fn register(form: &RegisterForm) -> Result<SessionInfo, ApiError> {
    post_json("/api/system/session/register", form).await
}
