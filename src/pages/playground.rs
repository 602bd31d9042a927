//! Chat playground for exercising models through the gateway proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends the running conversation through the completion proxy and renders
//! assistant replies as markdown.

#[cfg(test)]
#[path = "playground_test.rs"]
mod playground_test;

use leptos::prelude::*;

use crate::net::types::ChatMessage;
use crate::state::session::Session;
use crate::util::markdown;

/// Build the completion-proxy payload for the conversation so far.
#[cfg(any(test, feature = "hydrate"))]
fn build_chat_payload(model: &str, messages: &[ChatMessage]) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": messages,
    })
}

/// Playground page — model picker, transcript, and prompt input.
#[component]
pub fn PlaygroundPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let models = LocalResource::new(move || {
        let key = session.state().get().admin_key.unwrap_or_default();
        async move { crate::net::api::fetch_models(&key).await.unwrap_or_default() }
    });

    let selected_model = RwSignal::new(String::new());
    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let input = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let prompt = input.get().trim().to_owned();
        if prompt.is_empty() {
            return;
        }
        let model = selected_model.get();
        if model.is_empty() {
            info.set("Pick a model first.".to_owned());
            return;
        }

        info.set(String::new());
        messages.update(|all| {
            all.push(ChatMessage {
                role: "user".to_owned(),
                content: prompt,
            });
        });
        input.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let key = session.admin_key();
            let payload = messages.with_untracked(|all| build_chat_payload(&model, all));
            leptos::task::spawn_local(async move {
                match crate::net::api::chat(&key, &payload).await {
                    Ok(reply) => messages.update(|all| {
                        all.push(ChatMessage {
                            role: "assistant".to_owned(),
                            content: reply,
                        });
                    }),
                    Err(e) => info.set(format!("Chat failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, model);
        }
    };

    view! {
        <div class="playground-page">
            <header class="playground-page__header">
                <h1>"Playground"</h1>
                <Suspense fallback=move || view! { <span>"Loading models..."</span> }>
                    {move || {
                        models
                            .get()
                            .map(|list| {
                                view! {
                                    <select
                                        class="playground-page__model"
                                        on:change=move |ev| selected_model.set(event_target_value(&ev))
                                    >
                                        <option value="" selected=move || selected_model.get().is_empty()>
                                            "Choose a model"
                                        </option>
                                        {list
                                            .iter()
                                            .filter(|model| model.is_active)
                                            .map(|model| {
                                                let id = model.model_id.clone();
                                                view! {
                                                    <option value=id.clone()>{model.title.clone()}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                }
                            })
                    }}
                </Suspense>
            </header>

            <div class="playground-page__messages">
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, message)| {
                        let role_class = format!("chat-message chat-message--{}", message.role);
                        view! {
                            <div class=role_class>
                                {if message.role == "assistant" {
                                    let rendered = markdown::render_html(&message.content);
                                    view! { <div class="chat-message__markdown" inner_html=rendered></div> }
                                        .into_any()
                                } else {
                                    view! { <span>{message.content.clone()}</span> }.into_any()
                                }}
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || !info.get().is_empty()>
                <p class="playground-page__message">{move || info.get()}</p>
            </Show>

            <form class="playground-page__composer" on:submit=on_send>
                <input
                    class="playground-page__input"
                    type="text"
                    placeholder="Send a prompt..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Send"
                </button>
            </form>
        </div>
    }
}
