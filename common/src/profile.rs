use serde::{Deserialize, Serialize};

/// A business (tenant) the signed-in user belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
}

/// Response of `GET /api/user`: the backend-held profile plus the
/// businesses attached to it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub businesses: Vec<Business>,
}

/// Backend profile, distinct from the identity provider's user record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub last_name: String,
}

impl Profile {
    pub fn from_me(me: &MeResponse) -> Self {
        Self {
            id: me.id.clone(),
            name: me.name.clone().unwrap_or_default(),
            last_name: me.last_name.clone().unwrap_or_default(),
        }
    }

    /// First and last name joined; empty when neither is set.
    pub fn full_name(&self) -> String {
        [self.name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Body of `POST /api/user`, the unauthenticated account-creation call
/// that runs before the very first sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_response_defaults() {
        let me: MeResponse = serde_json::from_str(r#"{"id": "usr_1"}"#).unwrap();
        assert_eq!(me.name, None);
        assert_eq!(me.last_name, None);
        assert!(me.businesses.is_empty());
    }

    #[test]
    fn test_me_response_with_businesses() {
        let me: MeResponse = serde_json::from_str(
            r#"{
                "id": "usr_1",
                "name": "Jane",
                "last_name": "Doe",
                "businesses": [{"id": "biz_1", "name": "Acme"}]
            }"#,
        )
        .unwrap();
        assert_eq!(me.businesses.len(), 1);
        assert_eq!(me.businesses[0].name, "Acme");
    }

    #[test]
    fn test_full_name() {
        let me: MeResponse = serde_json::from_str(
            r#"{"id": "usr_1", "name": "Jane", "last_name": "Doe"}"#,
        )
        .unwrap();
        assert_eq!(Profile::from_me(&me).full_name(), "Jane Doe");
    }

    #[test]
    fn test_full_name_partial() {
        let profile = Profile {
            id: "usr_1".into(),
            name: "Jane".into(),
            last_name: String::new(),
        };
        assert_eq!(profile.full_name(), "Jane");
        assert_eq!(Profile::default().full_name(), "");
    }

    #[test]
    fn test_register_request_wire_shape() {
        let req = RegisterRequest {
            email: "you@example.com".into(),
            password: "hunter2".into(),
            name: "Jane".into(),
            last_name: "Doe".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"last_name\":\"Doe\""));
        assert!(json.contains("\"email\":\"you@example.com\""));
    }
}
