use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

/// A single conversation entry. The serialized shape
/// `{"role": ..., "content": ...}` is both what the completion API
/// consumes and what the transcript file stores.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: &str) -> Self {
        Turn {
            role,
            content: content.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    }

    #[test]
    fn test_role_deserialization() {
        let json = r#""system""#;
        assert_eq!(serde_json::from_str::<Role>(json).unwrap(), Role::System);

        let json = r#""assistant""#;
        assert_eq!(serde_json::from_str::<Role>(json).unwrap(), Role::Assistant);

        let json = r#""user""#;
        assert_eq!(serde_json::from_str::<Role>(json).unwrap(), Role::User);
    }

    #[test]
    fn test_turn_new() {
        let turn = Turn::new(Role::User, "Hello world");
        assert_eq!(
            serde_json::to_string(&turn).unwrap(),
            r#"{"role":"user","content":"Hello world"}"#
        );

        let turn = Turn::new(Role::Assistant, "I can help!");
        assert_eq!(
            serde_json::to_string(&turn).unwrap(),
            r#"{"role":"assistant","content":"I can help!"}"#
        );
    }

    #[test]
    fn test_turn_deserialization() {
        let json = r#"{"role":"user","content":"Hi"}"#;
        let turn: Turn = serde_json::from_str(json).unwrap();
        assert_eq!(turn, Turn::new(Role::User, "Hi"));
    }
}
