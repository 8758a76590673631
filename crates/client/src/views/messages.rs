use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::ui::{ErrorBanner, Loading};
use crate::format;
use crate::Route;

#[component]
pub fn Messages() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    let conversations = use_resource(move || {
        let auth = auth.clone();
        async move { auth.client().conversations().await }
    });

    rsx! {
        div { class: "mx-auto max-w-3xl",
            h1 { class: "mb-4 text-2xl font-bold text-gray-900", "Messages" }

            match conversations.read().as_ref() {
                None => rsx! { Loading {} },
                Some(Err(e)) => rsx! { ErrorBanner { message: e.message.clone() } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "py-16 text-center",
                        p { class: "mb-4 text-sm text-gray-500", "No conversations yet." }
                        Link { class: "text-sm font-medium text-emerald-700 hover:underline", to: Route::Feed {}, "Browse posts" }
                    }
                },
                Some(Ok(list)) => rsx! {
                    ul { class: "divide-y divide-gray-100 rounded-lg border border-gray-200 bg-white",
                        for conversation in list.iter() {
                            li {
                                key: "{conversation.id}",
                                class: "flex cursor-pointer items-center justify-between gap-3 px-4 py-3 hover:bg-gray-50",
                                onclick: {
                                    let conversation_id = conversation.id;
                                    move |_| {
                                        nav.push(Route::ConversationDetail { conversation_id });
                                    }
                                },
                                div { class: "min-w-0",
                                    p { class: "font-semibold text-gray-900", "{conversation.other_username}" }
                                    p { class: "truncate text-sm text-gray-500",
                                        {conversation.last_message_preview.clone().unwrap_or_else(|| "No messages yet".to_string())}
                                    }
                                }
                                div { class: "flex flex-col items-end gap-1",
                                    if let Some(at) = conversation.last_message_at.as_ref() {
                                        span { class: "text-xs text-gray-400", {format::time_ago(at)} }
                                    }
                                    if conversation.unread_count > 0 {
                                        span { class: "rounded-full bg-emerald-600 px-2 py-0.5 text-xs font-semibold text-white",
                                            "{conversation.unread_count}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
