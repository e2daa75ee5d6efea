use contracts::enums::user_role::UserRole;
use contracts::system::session::{normalize_email, SessionInfo};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Демонстрационные учётные записи, доступные сразу после старта
static DEMO_ACCOUNTS: Lazy<Vec<SessionInfo>> = Lazy::new(|| {
    vec![
        SessionInfo {
            full_name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            role: UserRole::Tourist,
        },
        SessionInfo {
            full_name: "Wanderlust Travel Agency".into(),
            email: "agency@example.com".into(),
            role: UserRole::Agency,
        },
    ]
});

#[derive(Debug, Error)]
#[error("Email {0} is already registered")]
pub struct EmailTaken(pub String);

/// Справочник e-mail -> сессия.
///
/// Пароли не хранятся и не проверяются; справочник нужен только для того,
/// чтобы личный кабинет получал роль пользователя.
#[derive(Debug, Default)]
pub struct SessionDirectory {
    accounts: RwLock<HashMap<String, SessionInfo>>,
}

impl SessionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_accounts() -> Self {
        let accounts = DEMO_ACCOUNTS
            .iter()
            .map(|s| (normalize_email(&s.email), s.clone()))
            .collect();
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    pub async fn find(&self, email: &str) -> Option<SessionInfo> {
        self.accounts.read().await.get(&normalize_email(email)).cloned()
    }

    pub async fn register(&self, session: SessionInfo) -> Result<SessionInfo, EmailTaken> {
        let key = normalize_email(&session.email);
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Err(EmailTaken(key));
        }
        accounts.insert(key, session.clone());
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_accounts() {
        let dir = SessionDirectory::with_demo_accounts();
        let agency = dir.find("Agency@Example.com").await.unwrap();
        assert_eq!(agency.role, UserRole::Agency);
        assert!(dir.find("nobody@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_register_twice() {
        let dir = SessionDirectory::new();
        let s = SessionInfo {
            full_name: "A B".into(),
            email: "a@b.io".into(),
            role: UserRole::Tourist,
        };
        assert!(dir.register(s.clone()).await.is_ok());
        assert!(dir.register(s).await.is_err());
    }
}
