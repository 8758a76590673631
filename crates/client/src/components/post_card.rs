//! Post card and the match button shared by the feed, post detail and
//! profile pages.

use aidswap_shared::{Post, PostType};
use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::match_badge::MatchBadge;
use crate::components::toast::use_toaster;
use crate::format;
use crate::workflow::{start_match, MatchButton, MatchError, MatchTarget};
use crate::Route;

#[component]
pub fn TypeBadge(post_type: PostType) -> Element {
    let class = match post_type {
        PostType::Have => "bg-emerald-100 text-emerald-800 border-emerald-200",
        PostType::Need => "bg-red-100 text-red-800 border-red-200",
    };
    rsx! {
        span { class: "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold {class}",
            "{post_type.label()}"
        }
    }
}

/// "I need this" / "I can help" button.
///
/// Runs the match workflow and opens the conversation whenever one exists,
/// even if a later step failed. `on_matched` fires with the post id once the
/// server has recorded the match, so the parent can mark it as responded
/// without refetching.
#[component]
pub fn MatchAction(post: Post, matched: bool, on_matched: EventHandler<i64>) -> Element {
    let auth = use_context::<AuthContext>();
    let toaster = use_toaster();
    let nav = use_navigator();
    let mut is_submitting = use_signal(|| false);

    let target = MatchTarget::from(&post);
    let state = MatchButton::for_post(&target, auth.user_id(), matched);
    let color = match (state, post.post_type) {
        (MatchButton::Available(_), PostType::Have) => "bg-red-600 hover:bg-red-500 text-white",
        (MatchButton::Available(_), PostType::Need) => "bg-emerald-600 hover:bg-emerald-500 text-white",
        _ => "bg-gray-200 text-gray-500 cursor-not-allowed",
    };

    rsx! {
        button {
            class: "rounded-md px-4 py-1.5 text-sm font-semibold transition-colors {color}",
            disabled: !state.is_enabled() || is_submitting(),
            onclick: move |_| {
                let auth = auth.clone();
                let target = target.clone();
                async move {
                    if is_submitting() {
                        return;
                    }
                    is_submitting.set(true);

                    let client = auth.client();
                    match start_match(&client, &target, auth.user_id(), matched).await {
                        Ok(started) => {
                            toaster.success(started.notice);
                            on_matched.call(target.post_id);
                            nav.push(Route::ConversationDetail {
                                conversation_id: started.conversation_id,
                            });
                        }
                        Err(e @ MatchError::Step { .. }) => {
                            crate::log_warn!("Match on post {} failed: {:?}", target.post_id, e);
                            toaster.error(e.to_string());
                            if e.interest_registered() {
                                on_matched.call(target.post_id);
                            }
                            if let Some(conversation_id) = e.conversation_id() {
                                nav.push(Route::ConversationDetail { conversation_id });
                            }
                        }
                        Err(e) => {
                            toaster.warning(e.to_string());
                        }
                    }
                    is_submitting.set(false);
                }
            },
            if is_submitting() { "Sending…" } else { "{state.label()}" }
        }
    }
}

#[component]
pub fn PostCard(post: Post, matched: bool, on_matched: EventHandler<i64>) -> Element {
    let created = format::time_ago(&post.created_at);

    rsx! {
        div { class: "flex flex-col rounded-lg border border-gray-200 bg-white p-4 shadow-sm",
            div { class: "mb-3 flex items-start justify-between gap-2",
                div { class: "flex items-center gap-2",
                    TypeBadge { post_type: post.post_type }
                    MatchBadge { post_id: post.id, post_type: post.post_type }
                }
                span { class: "text-xs text-gray-500", "{created}" }
            }

            h3 { class: "mb-2 text-lg font-bold text-gray-900", "{post.item_name}" }

            dl { class: "mb-3 space-y-1 text-sm text-gray-600",
                div { class: "flex gap-2",
                    dt { class: "font-semibold", "Quantity:" }
                    dd { "{post.quantity}" }
                }
                div { class: "flex gap-2",
                    dt { class: "font-semibold", "Category:" }
                    dd { "{post.category.label()}" }
                }
                div { class: "flex gap-2",
                    dt { class: "font-semibold", "Area:" }
                    dd { "{post.area.as_str()}" }
                }
            }

            if let Some(description) = post.description.as_ref().filter(|d| !d.is_empty()) {
                p { class: "mb-3 line-clamp-2 rounded bg-gray-50 p-2 text-sm text-gray-600", "{description}" }
            }

            div { class: "mt-auto flex items-center justify-between border-t border-gray-100 pt-3",
                Link {
                    class: "text-xs text-gray-500 hover:underline",
                    to: Route::UserProfile { user_id: post.user_id },
                    "by {post.owner_name()}"
                }
                div { class: "flex items-center gap-2",
                    Link {
                        class: "text-sm font-semibold text-emerald-700 hover:text-emerald-900",
                        to: Route::PostDetail { id: post.id },
                        "Details"
                    }
                    MatchAction { post: post.clone(), matched, on_matched }
                }
            }
        }
    }
}
