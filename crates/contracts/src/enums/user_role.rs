use serde::{Deserialize, Serialize};

/// Роль пользователя. Определяет набор вкладок личного кабинета.
///
/// Роль всегда приходит из сессии (`SessionInfo`), а не из текущего URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Tourist,
    Agency,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Tourist => "tourist",
            UserRole::Agency => "agency",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Tourist => "Tourist",
            UserRole::Agency => "Travel Agency",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Tourist, UserRole::Agency]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "tourist" => Some(UserRole::Tourist),
            "agency" => Some(UserRole::Agency),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_as_lowercase_code() {
        let json = serde_json::to_string(&UserRole::Agency).unwrap();
        assert_eq!(json, "\"agency\"");
        for role in UserRole::all() {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
    }
}
