//! HTTP API Client
//!
//! Functions for communicating with the TaskDeck REST API. Every request is
//! sent against the configured base URL; protected endpoints carry the
//! session token as a bearer credential.

use gloo_net::http::{Request, RequestBuilder};

use crate::state::global::{Task, User};
use crate::state::session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Get the API base URL from the build-time override or use default
pub fn get_api_base() -> String {
    let url = option_env!("TASKDECK_API_URL").unwrap_or(DEFAULT_API_BASE);
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Attach the bearer token to a request when a session is present
fn with_auth(request: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct TaskListResponse {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, serde::Deserialize)]
pub struct TaskResponse {
    pub task: Task,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub message: String,
}

/// Body shared by task create and update calls
#[derive(serde::Serialize)]
struct TaskPayload {
    title: String,
    description: String,
    date: String,
}

// ============ Auth ============

/// Register a new account; returns the server's confirmation message
pub async fn register(username: &str, email: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        username: String,
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/users/register", api_base))
        .json(&RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { message: "Registration failed".to_string() });
        return Err(error.message);
    }

    let result: MessageResponse = response.json().await
        .unwrap_or(MessageResponse { message: None });

    Ok(result.message
        .unwrap_or_else(|| "Registration successful! You can now log in.".to_string()))
}

/// Exchange credentials for a session token
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/users/login", api_base))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { message: "Login failed".to_string() });
        return Err(error.message);
    }

    let result: TokenResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.token)
}

/// Fetch the signed-in user's profile
pub async fn fetch_current_user() -> Result<User, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!("{}/users/me", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { message: "Session rejected".to_string() });
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Tasks ============

/// Fetch the signed-in user's task list
pub async fn fetch_tasks() -> Result<Vec<Task>, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!("{}/tasks", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { message: "Failed to load tasks".to_string() });
        return Err(error.message);
    }

    let result: TaskListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.tasks)
}

/// Create a new task; returns the backend's copy with its assigned id
pub async fn create_task(title: &str, description: &str, date: &str) -> Result<Task, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::post(&format!("{}/tasks/add", api_base)))
        .json(&TaskPayload {
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { message: "Failed to add task".to_string() });
        return Err(error.message);
    }

    let result: TaskResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.task)
}

/// Update an existing task; returns the backend's revised copy
pub async fn update_task(
    id: &str,
    title: &str,
    description: &str,
    date: &str,
) -> Result<Task, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::put(&format!("{}/tasks/{}", api_base, id)))
        .json(&TaskPayload {
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { message: "Failed to update task".to_string() });
        return Err(error.message);
    }

    let result: TaskResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.task)
}

/// Delete a task. The response body, if any, is not inspected.
pub async fn delete_task(id: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = with_auth(Request::delete(&format!("{}/tasks/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { message: "Failed to delete task".to_string() });
        return Err(error.message);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!get_api_base().ends_with('/'));
    }

    #[test]
    fn token_response_parses() {
        let parsed: TokenResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(parsed.token, "abc");
    }

    #[test]
    fn task_list_response_parses_mongo_ids() {
        let json = r#"{"tasks":[
            {"_id":"65ab12","title":"Groceries","description":"Milk","date":"2024-03-05"}
        ]}"#;
        let parsed: TaskListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.tasks.len(), 1);
        assert_eq!(parsed.tasks[0].id, "65ab12");
        assert_eq!(parsed.tasks[0].title, "Groceries");
    }

    #[test]
    fn task_response_accepts_integer_ids() {
        let json = r#"{"task":{"id":1,"title":"One","description":"","date":"2024-01-01"}}"#;
        let parsed: TaskResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.task.id, "1");
    }

    #[test]
    fn missing_task_array_parses_as_empty() {
        let parsed: TaskListResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.tasks.is_empty());
    }

    #[test]
    fn error_body_exposes_the_server_message() {
        let parsed: ApiError = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert_eq!(parsed.message, "Invalid credentials");
    }
}
