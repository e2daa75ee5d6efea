use serde::{Deserialize, Serialize};

use crate::enums::user_role::UserRole;
use crate::shared::validation::{
    require, validate_email, validate_name, validate_new_password, FailureReason,
};

/// Данные текущей сессии. Роль определяет набор вкладок личного кабинета.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

impl SessionInfo {
    pub fn is_agency(&self) -> bool {
        self.role == UserRole::Agency
    }

    /// Имя для приветствия: первое слово полного имени
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

impl LoginForm {
    /// Пароль не сверяется: проверяется только заполненность полей
    pub fn validate(&self) -> Result<(), FailureReason> {
        validate_email(&self.email)?;
        require("password", &self.password)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub user_type: UserRole,
    pub agree_to_terms: bool,
}

impl RegisterForm {
    /// Порядок: имя, e-mail, пароль, подтверждение, согласие с условиями
    pub fn validate(&self) -> Result<(), FailureReason> {
        validate_name(&self.full_name)?;
        validate_email(&self.email)?;
        validate_new_password(&self.password, &self.confirm_password)?;
        if !self.agree_to_terms {
            return Err(FailureReason::TermsNotAccepted);
        }
        Ok(())
    }

    pub fn into_session(self) -> SessionInfo {
        SessionInfo {
            full_name: self.full_name.trim().to_string(),
            email: normalize_email(&self.email),
            role: self.user_type,
        }
    }
}

/// Профиль в личном кабинете
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl ProfileForm {
    pub fn from_session(session: &SessionInfo) -> Self {
        Self {
            name: session.full_name.clone(),
            email: session.email.clone(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FailureReason> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), FailureReason> {
        require("currentPassword", &self.current_password)?;
        validate_new_password(&self.new_password, &self.confirm_password)
    }
}

/// E-mail как ключ справочника сессий
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register() -> RegisterForm {
        RegisterForm {
            full_name: "Jane Roe".into(),
            email: "Jane@Example.com ".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            user_type: UserRole::Agency,
            agree_to_terms: true,
        }
    }

    #[test]
    fn test_register_valid_and_session() {
        let form = register();
        assert!(form.validate().is_ok());
        let session = form.into_session();
        assert_eq!(session.email, "jane@example.com");
        assert!(session.is_agency());
        assert_eq!(session.first_name(), "Jane");
    }

    #[test]
    fn test_register_rules_in_order() {
        let mut f = register();
        f.full_name = "J".into();
        assert_eq!(f.validate(), Err(FailureReason::NameTooShort));

        let mut f = register();
        f.email = "jane".into();
        assert_eq!(f.validate(), Err(FailureReason::InvalidEmail));

        let mut f = register();
        f.password = "abc".into();
        f.confirm_password = "abc".into();
        assert_eq!(f.validate(), Err(FailureReason::PasswordTooShort));

        let mut f = register();
        f.confirm_password = "secret2".into();
        assert_eq!(f.validate(), Err(FailureReason::PasswordMismatch));

        let mut f = register();
        f.agree_to_terms = false;
        assert_eq!(f.validate(), Err(FailureReason::TermsNotAccepted));
    }

    #[test]
    fn test_login_requires_password() {
        let form = LoginForm {
            email: "john.doe@example.com".into(),
            password: String::new(),
            remember_me: false,
        };
        assert_eq!(form.validate(), Err(FailureReason::missing("password")));
    }

    #[test]
    fn test_password_change() {
        let mut form = PasswordChangeForm::default();
        assert_eq!(form.validate(), Err(FailureReason::missing("currentPassword")));
        form.current_password = "old-one".into();
        form.new_password = "new-one".into();
        form.confirm_password = "new-two".into();
        assert_eq!(form.validate(), Err(FailureReason::PasswordMismatch));
    }

    #[test]
    fn test_role_json() {
        let json = r#"{"full_name":"A B","email":"a@b.io","role":"agency"}"#;
        let s: SessionInfo = serde_json::from_str(json).unwrap();
        assert_eq!(s.role, UserRole::Agency);
    }
}
