use serde::{Deserialize, Serialize};

/// The logged-in user's profile row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub login: String,
    /// Free-form attribute blob on the platform; only the fields the
    /// dashboard shows are modeled, the rest are ignored.
    #[serde(default)]
    pub attrs: UserAttrs,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttrs {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_attr_fields_are_ignored() {
        let json = r#"{
            "id": 42,
            "login": "jdoe",
            "attrs": {
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@example.com",
                "phone": "555-0100",
                "country": "BH"
            }
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.attrs.first_name.as_deref(), Some("Jane"));
        assert_eq!(user.attrs.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn missing_attrs_default_to_empty() {
        let user: UserProfile = serde_json::from_str(r#"{"id": 1, "login": "x"}"#).unwrap();
        assert_eq!(user.attrs, UserAttrs::default());
    }
}
