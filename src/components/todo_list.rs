//! To-Do List View
//!
//! Fetches the session's task collection and issues the create, update,
//! toggle and delete calls. Every mutation is followed by a full re-fetch;
//! the server's response replaces local state wholesale.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use send_wrapper::SendWrapper;

use crate::api::{self, ApiError};
use crate::components::{EditTodoForm, TodoForm, TodoItem};
use crate::list_state;
use crate::models::{CreateTaskRequest, Task};
use crate::session::use_session;

const GENERIC_ERROR: &str = "Something went wrong.";

/// Reload the collection from the backend and replace local state.
async fn refresh(set_tasks: WriteSignal<Vec<Task>>) -> Result<(), ApiError> {
    let list = api::list_tasks(None).await?;
    set_tasks.set(list);
    Ok(())
}

#[component]
pub fn TodoList() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (editing, set_editing) = signal::<Option<String>>(None);
    let (err_msg, set_err_msg) = signal("");
    let (auth_expired, set_auth_expired) = signal(false);

    // Shared failure path: auth failures tear the session down and redirect
    // to sign-in; other server failures raise the banner. Connectivity
    // failures leave the previously loaded list untouched.
    let fail = move |err: &ApiError| match err {
        err if err.is_auth_failure() => {
            session.clear();
            set_auth_expired.set(true);
        }
        ApiError::Network => {}
        _ => set_err_msg.set(GENERIC_ERROR),
    };

    // Initial load, aborted if the view unmounts before it lands
    let controller = web_sys::AbortController::new().ok();
    let abort_signal = controller.as_ref().map(|c| c.signal());
    Effect::new(move |_| {
        set_err_msg.set("");
        let signal = abort_signal.clone();
        spawn_local(async move {
            match api::list_tasks(signal.as_ref()).await {
                Ok(list) => set_tasks.set(list),
                Err(err) => {
                    if !signal.is_some_and(|s| s.aborted()) {
                        fail(&err);
                    }
                }
            }
        });
    });
    let controller = SendWrapper::new(controller);
    on_cleanup(move || {
        if let Some(controller) = controller.take() {
            controller.abort();
        }
    });

    let on_add = Callback::new(move |text: String| {
        set_err_msg.set("");
        let task_order = tasks.with_untracked(|ts| list_state::next_task_order(ts));
        spawn_local(async move {
            let outcome = async {
                api::create_task(&CreateTaskRequest {
                    text: &text,
                    task_order,
                })
                .await?;
                refresh(set_tasks).await
            }
            .await;
            if let Err(err) = outcome {
                fail(&err);
            }
        });
    });

    let on_toggle = Callback::new(move |id: String| {
        set_err_msg.set("");
        let Some(task) = tasks.with_untracked(|ts| ts.iter().find(|t| t.id == id).cloned()) else {
            return;
        };
        spawn_local(async move {
            let outcome = async {
                api::toggle_task(&task).await?;
                refresh(set_tasks).await
            }
            .await;
            if let Err(err) = outcome {
                fail(&err);
            }
        });
    });

    let on_update = Callback::new(move |(id, text): (String, String)| {
        set_err_msg.set("");
        let Some(mut task) = tasks.with_untracked(|ts| ts.iter().find(|t| t.id == id).cloned())
        else {
            return;
        };
        task.text = text;
        spawn_local(async move {
            let outcome = async {
                api::update_task(&task).await?;
                refresh(set_tasks).await
            }
            .await;
            match outcome {
                Ok(()) => set_editing.set(None),
                Err(err) => fail(&err),
            }
        });
    });

    let on_delete = Callback::new(move |id: String| {
        set_err_msg.set("");
        spawn_local(async move {
            let outcome = async {
                api::delete_task(&id).await?;
                refresh(set_tasks).await
            }
            .await;
            if let Err(err) = outcome {
                fail(&err);
            }
        });
    });

    // Local only: no network call involved in entering or leaving edit mode
    let on_edit = Callback::new(move |id: String| {
        set_editing.update(|e| *e = list_state::toggle_edit(e.as_deref(), &id));
    });
    let on_cancel = Callback::new(move |(): ()| {
        set_editing.set(None);
    });

    let on_logout = move |_: web_sys::MouseEvent| {
        set_err_msg.set("");
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::logout().await {
                Ok(()) => {
                    session.clear();
                    navigate("/signin", NavigateOptions::default());
                }
                Err(err) if err.is_auth_failure() => {
                    session.clear();
                    navigate("/signin", NavigateOptions::default());
                }
                Err(_) => set_err_msg.set(GENERIC_ERROR),
            }
        });
    };

    view! {
        <section class="todo-list">
            {move || auth_expired.get().then(|| view! { <Redirect path="/signin" /> })}
            <h1>"What's the Plan for Today?"</h1>
            <Show when=move || !err_msg.get().is_empty()>
                <p class="error">{move || err_msg.get()}</p>
            </Show>
            <TodoForm on_add=on_add />
            <hr />
            <ul class="tasks">
                {move || {
                    let editing_id = editing.get();
                    tasks
                        .get()
                        .into_iter()
                        .map(|task| {
                            let row = if editing_id.as_deref() == Some(task.id.as_str()) {
                                view! {
                                    <EditTodoForm task=task on_update=on_update on_cancel=on_cancel />
                                }
                                .into_any()
                            } else {
                                view! {
                                    <TodoItem
                                        task=task
                                        on_toggle=on_toggle
                                        on_edit=on_edit
                                        on_delete=on_delete
                                    />
                                }
                                .into_any()
                            };
                            view! { <li class="task-row">{row}</li> }
                        })
                        .collect_view()
                }}
            </ul>
            <button class="logout-btn" on:click=on_logout>
                "logout"
            </button>
        </section>
    }
}
