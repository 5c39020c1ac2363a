//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Profile of the signed-in user, once loaded
    pub user: RwSignal<Option<User>>,
    /// In-memory mirror of the server's task list
    pub tasks: RwSignal<Vec<Task>>,
    /// True while the initial task fetch is in flight
    pub tasks_loading: RwSignal<bool>,
}

/// User profile from the API, read-only on the client
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A to-do item owned by the signed-in user
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Task {
    /// Opaque identifier assigned by the backend
    #[serde(alias = "_id", deserialize_with = "deserialize_task_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Calendar date as produced by a date input (`YYYY-MM-DD`)
    pub date: String,
}

/// Task ids are opaque; backends serve them as strings (Mongo-style `_id`)
/// or as integers, and both must parse to the same thing.
fn deserialize_task_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    let raw: Raw = serde::Deserialize::deserialize(deserializer)?;
    Ok(match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        user: create_rw_signal(None),
        tasks: create_rw_signal(Vec::new()),
        tasks_loading: create_rw_signal(false),
    };

    provide_context(state);
}

impl GlobalState {
    /// Append a task the backend just created
    pub fn task_created(&self, task: Task) {
        self.tasks.update(|tasks| tasks.push(task));
    }

    /// Swap in the backend's copy of an updated task, matched by id
    pub fn task_updated(&self, task: Task) {
        self.tasks.update(|tasks| replace_task(tasks, task));
    }

    /// Drop a deleted task from the mirror
    pub fn task_deleted(&self, id: &str) {
        self.tasks.update(|tasks| remove_task(tasks, id));
    }
}

/// Replace the stored copy of `updated`, matched by id. A task the list
/// does not contain is left alone; the next full fetch wins.
pub fn replace_task(tasks: &mut [Task], updated: Task) {
    if let Some(slot) = tasks.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

/// Remove a task by id, regardless of what the server said in the body
pub fn remove_task(tasks: &mut Vec<Task>, id: &str) {
    tasks.retain(|t| t.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn created_task_is_appended() {
        let mut tasks = vec![task("1", "existing")];
        tasks.push(task("2", "new"));

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.last().unwrap().id, "2");
        assert_eq!(tasks.last().unwrap().title, "new");
    }

    #[test]
    fn replace_swaps_matching_id_only() {
        let mut tasks = vec![task("1", "one"), task("2", "two")];
        replace_task(&mut tasks, task("2", "two, revised"));

        assert_eq!(tasks[0].title, "one");
        assert_eq!(tasks[1].title, "two, revised");
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn replace_without_match_changes_nothing() {
        let mut tasks = vec![task("1", "one")];
        replace_task(&mut tasks, task("9", "phantom"));

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "one");
    }

    #[test]
    fn remove_drops_the_id() {
        let mut tasks = vec![task("1", "one"), task("2", "two")];
        remove_task(&mut tasks, "1");

        assert_eq!(tasks.len(), 1);
        assert!(tasks.iter().all(|t| t.id != "1"));
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        let mut tasks = vec![task("1", "one")];
        remove_task(&mut tasks, "9");

        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn task_id_accepts_both_spellings() {
        let t: Task = serde_json::from_str(
            r#"{"_id":"65ab12","title":"t","description":"d","date":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(t.id, "65ab12");

        let t: Task = serde_json::from_str(
            r#"{"id":"65ab12","title":"t","description":"d","date":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(t.id, "65ab12");
    }

    #[test]
    fn user_email_is_optional() {
        let u: User = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(u.username, "alice");
        assert!(u.email.is_none());
    }
}
