//! Model configuration administration: list, create, activate, delete.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use leptos::prelude::*;

use crate::net::types::ModelConfig;
use crate::state::session::Session;

/// Trim create-form inputs and require the fields the gateway cannot default.
fn validate_new_model(title: &str, model_id: &str) -> Result<(String, String), &'static str> {
    let title = title.trim();
    let model_id = model_id.trim();
    if title.is_empty() || model_id.is_empty() {
        return Err("Enter both a title and a model id.");
    }
    Ok((title.to_owned(), model_id.to_owned()))
}

/// Parse the per-1k-token cost field; empty means free.
fn parse_cost(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|cost| *cost >= 0.0)
}

/// Models page — configuration table with create, toggle, and delete actions.
#[component]
pub fn ModelsPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let models = LocalResource::new(move || {
        let key = session.state().get().admin_key.unwrap_or_default();
        async move { crate::net::api::fetch_models(&key).await.unwrap_or_default() }
    });

    let show_create = RwSignal::new(false);
    let on_cancel_create = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="models-page">
            <header class="models-page__header">
                <h1>"Models"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Model"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading models..."</p> }>
                {move || {
                    models
                        .get()
                        .map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Title"</th>
                                            <th>"Model"</th>
                                            <th>"Vendor"</th>
                                            <th>"Cost / 1k"</th>
                                            <th>"Active"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .iter()
                                            .cloned()
                                            .map(|model| view! { <ModelRow model=model models=models/> })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <CreateModelDialog on_cancel=on_cancel_create models=models/>
            </Show>
        </div>
    }
}

/// One configuration row with its actions.
#[component]
fn ModelRow(model: ModelConfig, models: LocalResource<Vec<ModelConfig>>) -> impl IntoView {
    let session = expect_context::<Session>();
    let toggle_model = model.clone();
    let delete_id = model.id.clone();

    let on_toggle = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let key = session.admin_key();
            let mut model = toggle_model.clone();
            model.is_active = !model.is_active;
            leptos::task::spawn_local(async move {
                if crate::net::api::update_model(&key, &model).await.is_ok() {
                    models.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &toggle_model, &models);
        }
    };

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let key = session.admin_key();
            let id = delete_id.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::delete_model(&key, &id).await.is_ok() {
                    models.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &delete_id, &models);
        }
    };

    view! {
        <tr>
            <td>{model.title.clone()}</td>
            <td>{model.model_id.clone()}</td>
            <td>{model.vendor_type.clone()}</td>
            <td>{format!("{:.4}", model.cost_per_1k_tokens)}</td>
            <td>{if model.is_active { "yes" } else { "no" }}</td>
            <td class="data-table__actions">
                <button class="btn" on:click=on_toggle>
                    {if model.is_active { "Deactivate" } else { "Activate" }}
                </button>
                <button class="btn btn--danger" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Modal dialog for registering a model configuration.
#[component]
fn CreateModelDialog(
    on_cancel: Callback<()>,
    models: LocalResource<Vec<ModelConfig>>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let title = RwSignal::new(String::new());
    let model_id = RwSignal::new(String::new());
    let api_key = RwSignal::new(String::new());
    let base_url = RwSignal::new(String::new());
    let vendor_type = RwSignal::new("openai".to_owned());
    let cost = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let (title_value, model_id_value) = match validate_new_model(&title.get(), &model_id.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let Some(cost_value) = parse_cost(&cost.get()) else {
            info.set("Cost must be a non-negative number.".to_owned());
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let key = session.admin_key();
            let new_model = crate::net::types::NewModel {
                title: title_value,
                model_id: model_id_value,
                api_key: api_key.get().trim().to_owned(),
                base_url: base_url.get().trim().to_owned(),
                vendor_type: vendor_type.get(),
                cost_per_1k_tokens: cost_value,
                is_active: true,
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_model(&key, &new_model).await {
                    Ok(()) => {
                        models.refetch();
                        on_cancel.run(());
                    }
                    Err(e) => info.set(format!("Create failed: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &models, title_value, model_id_value, cost_value);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Register Model"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Model id"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || model_id.get()
                        on:input=move |ev| model_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Vendor API key"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || api_key.get()
                        on:input=move |ev| api_key.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Base URL"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || base_url.get()
                        on:input=move |ev| base_url.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Vendor"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || vendor_type.get()
                        on:input=move |ev| vendor_type.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Cost per 1k tokens"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || cost.get()
                        on:input=move |ev| cost.set(event_target_value(&ev))
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
                        "Register"
                    </button>
                </div>
            </div>
        </div>
    }
}
