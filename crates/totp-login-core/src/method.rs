//! Second-factor method descriptor supplied by the parent controller.

use serde::{Deserialize, Serialize};

/// Describes the authenticator method the code is entered for.
///
/// `name` doubles as the alt text of the thumbnail image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_link: Option<String>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            thumbnail: None,
            support_link: None,
        }
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn with_support_link(mut self, url: impl Into<String>) -> Self {
        self.support_link = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case() {
        let method: MethodDescriptor = serde_json::from_value(json!({
            "name": "Authenticator",
            "thumbnail": "https://cdn.example.com/totp.png",
            "supportLink": "https://help.example.com/totp"
        }))
        .unwrap();
        assert_eq!(method.name, "Authenticator");
        assert_eq!(method.thumbnail.as_deref(), Some("https://cdn.example.com/totp.png"));
        assert_eq!(method.support_link.as_deref(), Some("https://help.example.com/totp"));
    }

    #[test]
    fn test_optional_fields_omitted() {
        let method = MethodDescriptor::new("Authenticator");
        let value = serde_json::to_value(&method).unwrap();
        assert_eq!(value, json!({ "name": "Authenticator" }));
    }
}
