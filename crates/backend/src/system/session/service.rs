use contracts::enums::user_role::UserRole;
use contracts::system::session::{normalize_email, LoginForm, RegisterForm, SessionInfo};

use super::directory::SessionDirectory;

/// Вход без проверки пароля.
///
/// Известный e-mail получает свою роль, неизвестный входит как турист.
pub async fn login(directory: &SessionDirectory, form: LoginForm) -> anyhow::Result<SessionInfo> {
    form.validate()?;
    let session = match directory.find(&form.email).await {
        Some(session) => session,
        None => {
            let email = normalize_email(&form.email);
            let full_name = email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string();
            SessionInfo {
                full_name,
                email,
                role: UserRole::default(),
            }
        }
    };
    tracing::info!("Login: {} ({})", session.email, session.role);
    Ok(session)
}

pub async fn register(
    directory: &SessionDirectory,
    form: RegisterForm,
) -> anyhow::Result<SessionInfo> {
    form.validate()?;
    let session = directory.register(form.into_session()).await?;
    tracing::info!("Registered {} as {}", session.email, session.role);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::session::directory::EmailTaken;
    use contracts::shared::validation::FailureReason;

    fn login_form(email: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: "whatever".into(),
            remember_me: true,
        }
    }

    #[tokio::test]
    async fn test_login_known_and_unknown() {
        let dir = SessionDirectory::with_demo_accounts();
        let agency = login(&dir, login_form("agency@example.com")).await.unwrap();
        assert_eq!(agency.role, UserRole::Agency);

        let guest = login(&dir, login_form("Maria@Example.com")).await.unwrap();
        assert_eq!(guest.role, UserRole::Tourist);
        assert_eq!(guest.full_name, "maria");
    }

    #[tokio::test]
    async fn test_register_then_login_keeps_role() {
        let dir = SessionDirectory::new();
        let form = RegisterForm {
            full_name: "Globe Tours".into(),
            email: "desk@globe.travel".into(),
            password: "123456".into(),
            confirm_password: "123456".into(),
            user_type: UserRole::Agency,
            agree_to_terms: true,
        };
        register(&dir, form.clone()).await.unwrap();
        let session = login(&dir, login_form("desk@globe.travel")).await.unwrap();
        assert!(session.is_agency());

        let err = register(&dir, form).await.unwrap_err();
        assert!(err.downcast_ref::<EmailTaken>().is_some());
    }

    #[tokio::test]
    async fn test_register_validation() {
        let dir = SessionDirectory::new();
        let form = RegisterForm {
            full_name: "Al".into(),
            email: "al@x.io".into(),
            password: "123456".into(),
            confirm_password: "123456".into(),
            user_type: UserRole::Tourist,
            agree_to_terms: false,
        };
        let err = register(&dir, form).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<FailureReason>(),
            Some(&FailureReason::TermsNotAccepted)
        );
    }
}
