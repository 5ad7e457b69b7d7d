use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }
}

/// Body of a create request. Every field is optional on the wire so that a
/// missing title surfaces as a validation error rather than a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl NewTodo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }
}

/// Partial update. `None` (absent or `null`) leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}

/// A user record as served by the remote directory API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One page of the remote user listing. Fields the client does not use
/// (`page`, `per_page`, `total`, `support`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
}

impl UserPage {
    /// Total page count, never less than one.
    pub fn page_count(&self) -> u32 {
        self.total_pages.max(1)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_completed_defaults_to_false() {
        let todo: Todo = serde_json::from_str(r#"{"id": 3, "title": "Milk"}"#).unwrap();
        assert_eq!(todo, Todo::new(3, "Milk", false));
    }

    #[test]
    fn patch_treats_null_as_absent() {
        let patch: TodoPatch =
            serde_json::from_str(r#"{"title": null, "completed": true}"#).unwrap();
        assert!(patch.title.is_none());
        assert_eq!(patch.completed, Some(true));
    }

    #[test]
    fn user_page_tolerates_missing_and_null_fields() {
        let page: UserPage = serde_json::from_str(
            r#"{"page": 1, "data": [{"id": 7, "first_name": null, "email": "x@y.io"}]}"#,
        )
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].first_name, "");
        assert_eq!(page.data[0].last_name, "");
        assert_eq!(page.page_count(), 1);

        let empty: UserPage = serde_json::from_str(r#"{"data": null, "total_pages": 0}"#).unwrap();
        assert!(empty.data.is_empty());
        assert_eq!(empty.page_count(), 1);
    }
}
