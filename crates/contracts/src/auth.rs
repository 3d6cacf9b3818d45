use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin profile as returned by the login endpoint and persisted as the
/// client session. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub admin_id: String,
    pub admin_name: Option<String>,
    pub email: Option<String>,
    pub contact_no: Option<String>,
}

impl AdminUser {
    /// Name to show in the UI, falling back to the email when the
    /// profile has no display name.
    pub fn display_name(&self) -> &str {
        self.admin_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("admin")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_admin_name() {
        let admin = AdminUser {
            admin_id: "a1".into(),
            admin_name: Some("Demo Admin".into()),
            email: Some("demo@example.com".into()),
            contact_no: None,
        };
        assert_eq!(admin.display_name(), "Demo Admin");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let admin = AdminUser {
            admin_id: "a1".into(),
            admin_name: None,
            email: Some("demo@example.com".into()),
            contact_no: None,
        };
        assert_eq!(admin.display_name(), "demo@example.com");
    }
}
