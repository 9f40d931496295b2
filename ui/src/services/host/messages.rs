use serde::{Deserialize, Deserializer, Serialize};

/// Login request body. The field is called `email` because older hosts only
/// accepted email addresses; it carries usernames too.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Outbound message: `{ "type": "login" | "register", "data": { ... } }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum HostRequest {
    Login(LoginPayload),
    Register(RegisterPayload),
}

impl HostRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            HostRequest::Login(_) => "login",
            HostRequest::Register(_) => "register",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

/// Hosts send `"message": null` when they have nothing to say
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl AuthOutcome {
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Inbound message: `{ "action": "loginResult" | "registerResult", "result": { ... } }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action", content = "result")]
pub enum HostResponse {
    #[serde(rename = "loginResult")]
    LoginResult(AuthOutcome),
    #[serde(rename = "registerResult")]
    RegisterResult(AuthOutcome),
}

impl HostResponse {
    /// Parses an inbound JSON value. Anything that is not a recognised result
    /// message yields `None`.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_request_shape() {
        let request = HostRequest::Login(LoginPayload {
            email: "player_one".to_string(),
            password: "secret".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "type": "login", "data": { "email": "player_one", "password": "secret" } })
        );
    }

    #[test]
    fn test_register_request_shape_excludes_confirmation() {
        let request = HostRequest::Register(RegisterPayload {
            username: "valid_user1".to_string(),
            email: "a@b.com".to_string(),
            password: "abcdef".to_string(),
        });
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "register",
                "data": { "username": "valid_user1", "email": "a@b.com", "password": "abcdef" }
            })
        );
        assert!(value["data"].get("confirmPassword").is_none());
    }

    #[test]
    fn test_result_message_parsing() {
        let response = HostResponse::from_json(json!({
            "action": "registerResult",
            "result": { "success": false, "message": "Email taken" }
        }));
        assert_eq!(
            response,
            Some(HostResponse::RegisterResult(AuthOutcome::error("Email taken")))
        );
    }

    #[test]
    fn test_missing_message_defaults_to_empty() {
        let response = HostResponse::from_json(json!({
            "action": "loginResult",
            "result": { "success": true }
        }));
        assert_eq!(
            response,
            Some(HostResponse::LoginResult(AuthOutcome::success("")))
        );
    }

    #[test]
    fn test_null_message_decodes_as_empty() {
        let response = HostResponse::from_json(json!({
            "action": "loginResult",
            "result": { "success": true, "message": null }
        }));
        assert_eq!(
            response,
            Some(HostResponse::LoginResult(AuthOutcome::success("")))
        );
    }

    #[test]
    fn test_unknown_actions_are_ignored() {
        assert_eq!(
            HostResponse::from_json(json!({ "action": "openInventory", "result": {} })),
            None
        );
        assert_eq!(HostResponse::from_json(json!({ "type": "login" })), None);
        assert_eq!(HostResponse::from_json(json!("ping")), None);
    }
}
