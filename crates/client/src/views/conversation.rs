use aidswap_shared::{Message, SendMessageRequest};
use dioxus::prelude::*;

use crate::api_client::AidApi;
use crate::auth_session::AuthContext;
use crate::components::toast::use_toaster;
use crate::components::ui::{Button, Loading, TextInput};
use crate::format;
use crate::Route;

#[component]
pub fn ConversationDetail(conversation_id: i64) -> Element {
    let auth = use_context::<AuthContext>();
    let toaster = use_toaster();
    let nav = use_navigator();
    let mut draft = use_signal(String::new);
    let mut is_sending = use_signal(|| false);
    // Messages sent from this page since the last load
    let mut sent = use_signal(Vec::<Message>::new);

    let mut track_id = use_signal(|| conversation_id);
    if *track_id.peek() != conversation_id {
        track_id.set(conversation_id);
        sent.set(Vec::new());
    }

    let history = use_resource({
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            let id = track_id();
            async move {
                auth.client().conversation_messages(id).await.unwrap_or_else(|e| {
                    toaster.error(e.message);
                    Vec::new()
                })
            }
        }
    });

    let me = auth.user_id();

    rsx! {
        div { class: "mx-auto max-w-3xl",
            button {
                class: "mb-4 text-sm text-gray-600 hover:text-gray-900",
                onclick: move |_| {
                    nav.push(Route::Messages {});
                },
                "← Back to messages"
            }

            div { class: "rounded-lg border border-gray-200 bg-white p-4",
                match history.read().as_ref() {
                    None => rsx! { Loading {} },
                    Some(loaded) => {
                        let sent = sent.read();
                        let all: Vec<&Message> = loaded.iter().chain(sent.iter()).collect();
                        rsx! {
                            if all.is_empty() {
                                p { class: "py-10 text-center text-sm text-gray-500", "No messages yet. Say hello!" }
                            }
                            div { class: "mb-4 max-h-[50vh] space-y-3 overflow-y-auto pr-1",
                                for message in all {
                                    MessageBubble {
                                        key: "{message.id}",
                                        message: message.clone(),
                                        mine: Some(message.sender_id) == me,
                                    }
                                }
                            }
                        }
                    }
                }

                form {
                    class: "flex gap-2 border-t border-gray-100 pt-4",
                    onsubmit: move |e| {
                        let auth = auth.clone();
                        async move {
                            e.prevent_default();
                            if is_sending() {
                                return;
                            }
                            // Blank messages are never sent
                            let Some(request) = SendMessageRequest::new(&draft.read()) else {
                                return;
                            };

                            is_sending.set(true);
                            match auth.client().send_message(conversation_id, &request).await {
                                Ok(message) => {
                                    sent.write().push(message);
                                    draft.set(String::new());
                                }
                                Err(e) => {
                                    toaster.error(e.message);
                                }
                            }
                            is_sending.set(false);
                        }
                    },
                    div { class: "flex-1",
                        TextInput {
                            value: draft.cloned(),
                            placeholder: Some("Write a message…".to_string()),
                            oninput: move |e: FormEvent| draft.set(e.value()),
                        }
                    }
                    Button {
                        r#type: Some("submit".to_string()),
                        disabled: Some(is_sending() || draft.read().trim().is_empty()),
                        if is_sending() { "Sending…" } else { "Send" }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: Message, mine: bool) -> Element {
    let (row, bubble) = if mine {
        ("flex justify-end", "bg-emerald-600 text-white")
    } else {
        ("flex justify-start", "bg-gray-100 text-gray-900")
    };
    let when = format::date_time(&message.created_at);
    let author = if mine {
        "You".to_string()
    } else {
        message.username.clone().unwrap_or_default()
    };

    rsx! {
        div { class: "{row}",
            div { class: "max-w-[75%] rounded-lg px-3 py-2 {bubble}",
                p { class: "mb-1 text-xs opacity-75", "{author}" }
                p { class: "whitespace-pre-wrap text-sm", "{message.content}" }
                p { class: "mt-1 text-right text-[10px] opacity-70", "{when}" }
            }
        }
    }
}
