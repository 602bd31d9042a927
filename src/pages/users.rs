//! User administration: list, create, status toggle, quota, delete.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::net::types::GatewayUser;
use crate::state::session::Session;

/// The status an enable/disable toggle moves an account to.
#[cfg(any(test, feature = "hydrate"))]
fn next_status(current: &str) -> &'static str {
    if current == "active" { "disabled" } else { "active" }
}

/// Trim create-form inputs and require both.
fn validate_new_user(username: &str, api_key: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let api_key = api_key.trim();
    if username.is_empty() || api_key.is_empty() {
        return Err("Enter both a username and an API key.");
    }
    Ok((username.to_owned(), api_key.to_owned()))
}

/// Users page — account table with create, status, quota, and delete actions.
#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let users = LocalResource::new(move || {
        let key = session.state().get().admin_key.unwrap_or_default();
        async move { crate::net::api::fetch_users(&key).await.unwrap_or_default() }
    });

    let show_create = RwSignal::new(false);
    let quota_target = RwSignal::new(None::<GatewayUser>);

    let on_cancel_create = Callback::new(move |()| show_create.set(false));
    let on_cancel_quota = Callback::new(move |()| quota_target.set(None));

    view! {
        <div class="users-page">
            <header class="users-page__header">
                <h1>"Users"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New User"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Username"</th>
                                            <th>"Status"</th>
                                            <th>"Admin"</th>
                                            <th>"Tokens"</th>
                                            <th>"RPM"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .iter()
                                            .cloned()
                                            .map(|user| {
                                                view! { <UserRow user=user users=users quota_target=quota_target/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <CreateUserDialog on_cancel=on_cancel_create users=users/>
            </Show>

            <Show when=move || quota_target.get().is_some()>
                {move || {
                    quota_target
                        .get()
                        .map(|user| view! { <QuotaDialog user=user on_cancel=on_cancel_quota users=users/> })
                }}
            </Show>
        </div>
    }
}

/// One account row with its actions.
#[component]
fn UserRow(
    user: GatewayUser,
    users: LocalResource<Vec<GatewayUser>>,
    quota_target: RwSignal<Option<GatewayUser>>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let toggle_user = user.clone();
    let delete_id = user.id.clone();
    let quota_user = user.clone();

    let on_toggle = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let key = session.admin_key();
            let user = toggle_user.clone();
            leptos::task::spawn_local(async move {
                let status = next_status(&user.status);
                if crate::net::api::update_user(&key, &user.id, &user.username, &user.api_key, status)
                    .await
                    .is_ok()
                {
                    users.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &toggle_user, &users);
        }
    };

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let key = session.admin_key();
            let id = delete_id.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::delete_user(&key, &id).await.is_ok() {
                    users.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &delete_id, &users);
        }
    };

    view! {
        <tr>
            <td>{user.username.clone()}</td>
            <td>{user.status.clone()}</td>
            <td>{if user.is_admin { "yes" } else { "" }}</td>
            <td>{format!("{} / {}", user.token_used, user.token_quota)}</td>
            <td>{user.rpm_limit}</td>
            <td class="data-table__actions">
                <button class="btn" on:click=on_toggle>
                    {if user.status == "active" { "Disable" } else { "Enable" }}
                </button>
                <button class="btn" on:click=move |_| quota_target.set(Some(quota_user.clone()))>
                    "Quota"
                </button>
                <button class="btn btn--danger" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Modal dialog for creating an account.
#[component]
fn CreateUserDialog(
    on_cancel: Callback<()>,
    users: LocalResource<Vec<GatewayUser>>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let username = RwSignal::new(String::new());
    let api_key = RwSignal::new(String::new());
    let is_admin = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let (username_value, key_value) = match validate_new_user(&username.get(), &api_key.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let key = session.admin_key();
            let admin = is_admin.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_user(&key, &username_value, &key_value, admin).await {
                    Ok(()) => {
                        users.refetch();
                        on_cancel.run(());
                    }
                    Err(e) => info.set(format!("Create failed: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &users, username_value, key_value);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create User"</h2>
                <label class="dialog__label">
                    "Username"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "API Key"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || api_key.get()
                        on:input=move |ev| api_key.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label dialog__label--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || is_admin.get()
                        on:change=move |ev| is_admin.set(event_target_checked(&ev))
                    />
                    "Administrator"
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog for editing an account's rate and token limits.
#[component]
fn QuotaDialog(
    user: GatewayUser,
    on_cancel: Callback<()>,
    users: LocalResource<Vec<GatewayUser>>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let rpm = RwSignal::new(user.rpm_limit.to_string());
    let quota = RwSignal::new(user.token_quota.to_string());
    let info = RwSignal::new(String::new());
    let user_id = user.id.clone();

    let submit = Callback::new(move |()| {
        let (Ok(rpm_limit), Ok(token_quota)) =
            (rpm.get().trim().parse::<i64>(), quota.get().trim().parse::<i64>())
        else {
            info.set("Limits must be whole numbers.".to_owned());
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let key = session.admin_key();
            let id = user_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_quota(&key, &id, rpm_limit, token_quota).await {
                    Ok(()) => {
                        users.refetch();
                        on_cancel.run(());
                    }
                    Err(e) => info.set(format!("Update failed: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &users, &user_id, rpm_limit, token_quota);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Limits for {}", user.username)}</h2>
                <label class="dialog__label">
                    "Requests per minute"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || rpm.get()
                        on:input=move |ev| rpm.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Token quota"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || quota.get()
                        on:input=move |ev| quota.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
