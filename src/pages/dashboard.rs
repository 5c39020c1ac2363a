//! Dashboard Page
//!
//! The signed-in landing page: greeting, task form, and task list. The list
//! is a transient in-memory mirror of server state; every successful call
//! patches it in place, and failures only log to the console.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::ListSkeleton;
use crate::state::global::{GlobalState, Task};
use crate::state::session;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let user = state.user;
    let tasks = state.tasks;
    let tasks_loading = state.tasks_loading;

    // Form fields, shared between create and edit mode
    let (title, set_title) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (date, set_date) = create_signal(String::new());
    // Single-slot edit toggle: Some(id) while an edit is in progress
    let (editing, set_editing) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    // Two independent fetches on mount; neither waits for the other. A
    // profile failure sends the visitor back to login, a task failure only
    // logs and leaves the list as it was.
    let navigate_for_profile = navigate.clone();
    create_effect(move |_| {
        let navigate = navigate_for_profile.clone();
        spawn_local(async move {
            match api::fetch_current_user().await {
                Ok(profile) => {
                    user.set(Some(profile));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error fetching user data: {}", e).into(),
                    );
                    navigate("/login", Default::default());
                }
            }
        });
    });

    create_effect(move |_| {
        spawn_local(async move {
            tasks_loading.set(true);
            match api::fetch_tasks().await {
                Ok(list) => {
                    tasks.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching tasks: {}", e).into());
                }
            }
            tasks_loading.set(false);
        });
    });

    // Create or update, depending on the edit slot
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let task_title = title.get();
        let task_description = description.get();
        let task_date = date.get();
        let editing_id = editing.get();

        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            match editing_id {
                Some(id) => {
                    match api::update_task(&id, &task_title, &task_description, &task_date).await {
                        Ok(task) => {
                            state.task_updated(task);
                            set_editing.set(None);
                            set_title.set(String::new());
                            set_description.set(String::new());
                            set_date.set(String::new());
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Error editing task: {}", e).into(),
                            );
                        }
                    }
                }
                None => {
                    match api::create_task(&task_title, &task_description, &task_date).await {
                        Ok(task) => {
                            state.task_created(task);
                            set_title.set(String::new());
                            set_description.set(String::new());
                            set_date.set(String::new());
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Error adding task: {}", e).into(),
                            );
                        }
                    }
                }
            }
            set_submitting.set(false);
        });
    };

    // Starting an edit repopulates the form; another edit simply takes over
    // the slot
    let start_edit = move |task: Task| {
        set_editing.set(Some(task.id));
        set_title.set(task.title);
        set_description.set(task.description);
        set_date.set(task.date);
    };

    let navigate_for_signout = navigate;
    let sign_out = move |_| {
        session::clear_token();
        navigate_for_signout("/login", Default::default());
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gradient-to-r from-blue-500 to-purple-600">
            <div class="text-center bg-white p-8 rounded-lg shadow-lg w-full max-w-lg">
                <h1 class="text-4xl font-extrabold text-gray-800 mb-4">
                    "👋 Hello, "
                    {move || {
                        user.get()
                            .map(|u| u.username)
                            .unwrap_or_else(|| "User".to_string())
                    }}
                    "!"
                </h1>
                <p class="text-gray-600 mb-6">"Welcome to your personalized To-Do List Dashboard."</p>

                <button
                    on:click=sign_out
                    class="w-full bg-red-500 text-white py-2 px-4 rounded-lg
                           hover:bg-red-600 transition-all duration-300 mb-6"
                >
                    "Sign Out"
                </button>

                // Task form; submits an update instead of a create while the
                // edit slot is occupied
                <form on:submit=on_submit class="mb-6">
                    <div class="mb-4">
                        <input
                            type="text"
                            placeholder="Task Title"
                            required
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border rounded-lg
                                   focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <div class="mb-4">
                        <textarea
                            placeholder="Task Description"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border rounded-lg
                                   focus:outline-none focus:ring-2 focus:ring-blue-500"
                        ></textarea>
                    </div>
                    <div class="mb-4">
                        <input
                            type="date"
                            required
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border rounded-lg
                                   focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-blue-500 text-white py-2 px-4 rounded-lg
                               hover:bg-blue-600 disabled:bg-gray-400 disabled:cursor-not-allowed
                               transition-all duration-300"
                    >
                        {move || {
                            if submitting.get() {
                                "Saving..."
                            } else if editing.get().is_some() {
                                "Update Task"
                            } else {
                                "Add Task"
                            }
                        }}
                    </button>
                </form>

                // Task list
                <div>
                    <h2 class="text-2xl font-bold text-gray-800 mb-4">"Your Tasks"</h2>
                    {move || {
                        if tasks_loading.get() {
                            return view! { <ListSkeleton /> }.into_view();
                        }

                        let list = tasks.get();
                        if list.is_empty() {
                            view! {
                                <p class="text-gray-600">"No tasks yet. Add your first task!"</p>
                            }
                            .into_view()
                        } else {
                            view! {
                                <ul class="space-y-4">
                                    {list.into_iter().map(|task| {
                                        view! { <TaskItem task=task on_edit=start_edit /> }
                                    }).collect_view()}
                                </ul>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

/// Single task entry with edit and delete controls
#[component]
fn TaskItem(task: Task, on_edit: impl Fn(Task) + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let task_for_edit = task.clone();
    let edit = move |_| on_edit(task_for_edit.clone());

    let id_for_delete = task.id.clone();
    let delete = move |_| {
        let id = id_for_delete.clone();
        let state = state.clone();
        spawn_local(async move {
            match api::delete_task(&id).await {
                // The list is patched by id alone; the response body is ignored
                Ok(()) => {
                    state.task_deleted(&id);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting task: {}", e).into());
                }
            }
        });
    };

    view! {
        <li class="p-4 bg-gray-100 rounded-lg shadow-md text-left flex justify-between
                   items-center hover:shadow-lg transition-all duration-300">
            <div>
                <h3 class="font-bold text-gray-800">{task.title.clone()}</h3>
                <p class="text-gray-600">{task.description.clone()}</p>
                <p class="text-gray-500 italic">"Date: " {format_date(&task.date)}</p>
            </div>
            <div class="flex space-x-2">
                <button
                    on:click=edit
                    class="bg-yellow-500 text-white py-1 px-3 rounded-lg
                           hover:bg-yellow-600 transition-all duration-300"
                >
                    "Edit"
                </button>
                <button
                    on:click=delete
                    class="bg-red-500 text-white py-1 px-3 rounded-lg
                           hover:bg-red-600 transition-all duration-300"
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}

/// Render a backend date (`YYYY-MM-DD`) in a friendlier form; anything
/// unparsable is shown as-is.
fn format_date(date: &str) -> String {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_from_the_picker_are_reformatted() {
        assert_eq!(format_date("2024-03-05"), "Mar 05, 2024");
    }

    #[test]
    fn unparsable_dates_pass_through() {
        assert_eq!(format_date("next tuesday"), "next tuesday");
        assert_eq!(format_date(""), "");
    }
}
