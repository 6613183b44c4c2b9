//! User account notifications.

use serde::{Deserialize, Serialize};

use oncc_core::{ActorType, ValueObject};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountDeactivatedPayload {
    pub email: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Actor the new manager account was created for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActorInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub actor_type: ActorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Onboarding mail for a freshly created actor manager.
///
/// `user_name` is the display name; `username` is the login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActorManagerWelcomePayload {
    pub email: String,
    pub user_name: String,
    pub username: String,
    pub temp_password: String,
    pub actor_info: ActorInfo,
}

impl core::fmt::Debug for ActorManagerWelcomePayload {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActorManagerWelcomePayload")
            .field("email", &self.email)
            .field("user_name", &self.user_name)
            .field("username", &self.username)
            .field("temp_password", &"<redacted>")
            .field("actor_info", &self.actor_info)
            .finish()
    }
}

impl ValueObject for AccountDeactivatedPayload {}
impl ValueObject for ActorInfo {}
impl ValueObject for ActorManagerWelcomePayload {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn welcome_payload_uses_type_for_actor_type() {
        let payload: ActorManagerWelcomePayload = serde_json::from_value(json!({
            "email": "manager@coop.cm",
            "userName": "Marie Ngo",
            "username": "mngo",
            "tempPassword": "T3mp!pass",
            "actorInfo": { "name": "Coop Ndé", "type": "PRODUCERS" },
        }))
        .unwrap();

        assert_eq!(payload.actor_info.actor_type, ActorType::Producers);
        assert_eq!(payload.actor_info.location, None);
    }

    #[test]
    fn debug_output_hides_the_temporary_password() {
        let payload = ActorManagerWelcomePayload {
            email: "manager@coop.cm".to_string(),
            user_name: "Marie Ngo".to_string(),
            username: "mngo".to_string(),
            temp_password: "T3mp!pass".to_string(),
            actor_info: ActorInfo {
                name: "Coop Ndé".to_string(),
                actor_type: ActorType::Producers,
                location: Some("Bafang".to_string()),
            },
        };
        let rendered = format!("{payload:?}");
        assert!(!rendered.contains("T3mp!pass"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn account_deactivated_reason_is_optional() {
        let payload: AccountDeactivatedPayload = serde_json::from_value(json!({
            "email": "user@oncc.cm",
            "userName": "Paul Essomba",
        }))
        .unwrap();
        assert!(payload.reason.is_none());

        let missing_email = serde_json::from_value::<AccountDeactivatedPayload>(json!({
            "userName": "Paul Essomba",
        }));
        assert!(missing_email.is_err());
    }
}
