//! Tool catalogue data model.
//!
//! [`Tool`] is the persisted record; [`ToolInput`] is the validated payload
//! accepted on create and update. Field copying between the two is explicit
//! (see [`ToolInput::apply_to`]) so the full-overwrite contract of an update
//! is visible in one place.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Opaque identifier assigned by the store when a tool is first saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ToolId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ToolId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalogued developer tool.
///
/// Equality is identity: two tools are equal when both carry an id and the
/// ids match. Field values are never compared, and a tool without an id
/// (not yet persisted) equals nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ToolId>,
    pub title: String,
    pub link: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Tool {
    pub fn new(
        id: impl Into<ToolId>,
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            link: link.into(),
            description: description.into(),
            tags,
        }
    }

    /// Whether this tool is labelled with `tag` (exact, case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl PartialEq for Tool {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Create/update payload for a tool.
///
/// Missing and `null` fields deserialize to empty values so they are
/// reported as constraint violations rather than as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ToolInput {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank", message = "must not be blank"))]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank", message = "must not be blank"))]
    pub link: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(
        custom(function = "not_blank", message = "must not be blank"),
        length(min = 15, max = 2000, message = "size must be between 15 and 2000")
    )]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub tags: Vec<String>,
}

impl ToolInput {
    /// Field names in declaration order, used to order reported violations.
    pub const FIELDS: &'static [&'static str] = &["title", "link", "description", "tags"];

    /// Build a new, not yet persisted, tool from this payload.
    pub fn into_tool(self) -> Tool {
        let mut tool = Tool {
            id: None,
            title: String::new(),
            link: String::new(),
            description: String::new(),
            tags: Vec::new(),
        };
        self.apply_to(&mut tool);
        tool
    }

    /// Overwrite every mutable field of `tool` with this payload's values.
    ///
    /// The id is left untouched.
    pub fn apply_to(self, tool: &mut Tool) {
        tool.title = self.title;
        tool.link = self.link;
        tool.description = self.description;
        tool.tags = self.tags;
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank")
            .with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ToolInput {
        ToolInput {
            title: "Notion".to_string(),
            link: "https://notion.so".to_string(),
            description: "A tool for organizing work".to_string(),
            tags: vec!["organization".to_string(), "notes".to_string()],
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ToolId::generate();
        let b = ToolId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_tool_equality_uses_id_only() {
        let a = Tool::new("id1", "a", "a", "a", vec!["x".to_string()]);
        let b = Tool::new("id1", "b", "b", "b", vec!["y".to_string()]);
        let c = Tool::new("id2", "a", "a", "a", vec!["x".to_string()]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tool_without_id_has_no_identity() {
        let a = valid_input().into_tool();
        let b = a.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn test_has_tag_is_exact_match() {
        let tool = Tool::new("id1", "t", "l", "d", vec!["Notes".to_string()]);
        assert!(tool.has_tag("Notes"));
        assert!(!tool.has_tag("notes"));
        assert!(!tool.has_tag("Note"));
    }

    #[test]
    fn test_apply_to_overwrites_every_field_and_keeps_id() {
        let mut tool = Tool::new("id3", "old", "old", "old description", vec!["old".to_string()]);
        let input = valid_input();
        input.clone().apply_to(&mut tool);

        assert_eq!(tool.id, Some(ToolId::from("id3")));
        assert_eq!(tool.title, input.title);
        assert_eq!(tool.link, input.link);
        assert_eq!(tool.description, input.description);
        assert_eq!(tool.tags, input.tags);
    }

    #[test]
    fn test_tool_json_shape() {
        let tool = Tool::new("abc", "title", "link", "description", vec!["a".to_string()]);
        let json = serde_json::to_string(&tool).unwrap();
        assert_eq!(
            json,
            r#"{"id":"abc","title":"title","link":"link","description":"description","tags":["a"]}"#
        );

        let unsaved = valid_input().into_tool();
        let value = serde_json::to_value(&unsaved).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_short_description_fails() {
        let input = ToolInput {
            description: "too short!".to_string(),
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("description"));
    }

    #[test]
    fn test_description_length_counts_characters() {
        // 15 multi-byte characters
        let input = ToolInput {
            description: "ééééééééééééééé".to_string(),
            ..valid_input()
        };
        assert!(input.validate().is_ok());

        let input = ToolInput {
            description: "x".repeat(2001),
            ..valid_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_blank_fields_all_reported() {
        let input = ToolInput {
            title: "   ".to_string(),
            link: String::new(),
            description: " ".repeat(20),
            tags: Vec::new(),
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ToolInput::FIELDS {
            assert!(fields.contains_key(*field), "missing violation for {field}");
        }
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let input: ToolInput = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(input.link, "");
        assert!(input.tags.is_empty());
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_null_fields_deserialize_to_empty() {
        let input: ToolInput =
            serde_json::from_str(r#"{"title":null,"link":"l","description":null,"tags":null}"#)
                .unwrap();
        assert_eq!(input.title, "");
        assert_eq!(input.link, "l");
        assert_eq!(input.description, "");
        assert!(input.tags.is_empty());
    }

    #[test]
    fn test_wrong_type_is_still_a_parse_error() {
        let result = serde_json::from_str::<ToolInput>(r#"{"title":42}"#);
        assert!(result.is_err());
    }
}
