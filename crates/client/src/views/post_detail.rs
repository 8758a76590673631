use std::collections::HashSet;

use aidswap_shared::{Post, PostStatus};
use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::toast::use_toaster;
use crate::components::ui::{Button, ButtonVariant, ErrorBanner, Loading};
use crate::components::{ConfirmDialog, ContactButton, MatchAction, MatchBadge, TypeBadge};
use crate::format;
use crate::hooks::use_notifier;
use crate::notifications::Notification;
use crate::Route;

#[component]
pub fn PostDetail(id: i64) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    let mut track_id = use_signal(|| id);
    if *track_id.peek() != id {
        track_id.set(id);
    }
    let mut matched_here = use_signal(|| false);

    let detail = use_resource(move || {
        let auth = auth.clone();
        let id = track_id();
        async move {
            let client = auth.client();
            let (post, matches) = futures_util::join!(client.get_post(id), client.my_matches());
            let matched: HashSet<i64> = matches
                .map(|m| m.into_iter().map(|m| m.post_id).collect())
                .unwrap_or_default();
            post.map(|post| (post, matched.contains(&id)))
        }
    });

    rsx! {
        div { class: "mx-auto max-w-3xl",
            button {
                class: "mb-4 text-sm text-gray-600 hover:text-gray-900",
                onclick: move |_| {
                    nav.push(Route::Feed {});
                },
                "← Back to posts"
            }

            match detail.read().as_ref() {
                None => rsx! { Loading {} },
                Some(Err(e)) => rsx! {
                    ErrorBanner { message: e.message.clone() }
                    Button {
                        variant: Some(ButtonVariant::Secondary),
                        onclick: move |_| {
                            nav.push(Route::Feed {});
                        },
                        "Back to home"
                    }
                },
                Some(Ok((post, matched))) => rsx! {
                    PostDetailBody {
                        post: post.clone(),
                        matched: *matched || matched_here(),
                        on_matched: move |_| matched_here.set(true),
                    }
                },
            }
        }
    }
}

#[component]
fn PostDetailBody(post: Post, matched: bool, on_matched: EventHandler<i64>) -> Element {
    let auth = use_context::<AuthContext>();
    let toaster = use_toaster();
    let notifier = use_notifier();
    let nav = use_navigator();
    let mut confirming = use_signal(|| false);
    let mut is_completing = use_signal(|| false);

    let is_owner = auth.user_id().is_some_and(|uid| post.is_owned_by(uid));
    let created = format::date_time(&post.created_at);
    let post_id = post.id;

    rsx! {
        div { class: "rounded-lg border border-gray-200 bg-white p-6 shadow-sm",
            div { class: "mb-4 flex flex-wrap items-center gap-2",
                TypeBadge { post_type: post.post_type }
                MatchBadge { post_id: post.id, post_type: post.post_type }
                if post.status == PostStatus::Completed {
                    span { class: "rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-semibold text-gray-700",
                        "Completed"
                    }
                }
            }

            h1 { class: "mb-1 text-2xl font-bold text-gray-900", "{post.item_name}" }
            p { class: "mb-6 text-sm text-gray-500",
                "by "
                Link {
                    class: "font-medium text-emerald-700 hover:underline",
                    to: Route::UserProfile { user_id: post.user_id },
                    "{post.owner_name()}"
                }
                " • {created}"
            }

            dl { class: "mb-6 grid grid-cols-1 gap-3 text-sm sm:grid-cols-2",
                div {
                    dt { class: "text-gray-500", "Category" }
                    dd { class: "font-medium text-gray-900", "{post.category.label()}" }
                }
                div {
                    dt { class: "text-gray-500", "Quantity" }
                    dd { class: "font-medium text-gray-900", "{post.quantity}" }
                }
                div {
                    dt { class: "text-gray-500", "Area" }
                    dd { class: "font-medium text-gray-900", "{post.area.as_str()}" }
                }
                div {
                    dt { class: "text-gray-500", "Status" }
                    dd { class: "font-medium text-gray-900", "{post.status.label()}" }
                }
                div {
                    dt { class: "text-gray-500", "Post number" }
                    dd { class: "font-medium text-gray-900", "#{post.id}" }
                }
            }

            if let Some(description) = post.description.as_ref().filter(|d| !d.is_empty()) {
                div { class: "mb-6 rounded-md bg-gray-50 p-4 text-sm text-gray-700 whitespace-pre-line",
                    "{description}"
                }
            }

            if post.is_active() {
                div { class: "flex flex-wrap items-center gap-3 border-t border-gray-100 pt-4",
                    MatchAction { post: post.clone(), matched, on_matched }
                    if !is_owner {
                        ContactButton {
                            recipient_id: post.user_id,
                            recipient_name: post.owner_name().to_string(),
                            post_id: Some(post.id),
                        }
                    }
                    if is_owner {
                        Button {
                            variant: Some(ButtonVariant::Danger),
                            onclick: move |_| confirming.set(true),
                            "Mark as completed"
                        }
                    }
                }
            }
        }

        if confirming() {
            ConfirmDialog {
                title: "Complete this post?".to_string(),
                message: "It will no longer accept responses.".to_string(),
                confirm_label: "Mark as completed".to_string(),
                busy: is_completing(),
                on_cancel: move |_| confirming.set(false),
                on_confirm: move |_| {
                    let auth = auth.clone();
                    let notifier = notifier.clone();
                    spawn(async move {
                        is_completing.set(true);
                        match auth.client().complete_post(post_id).await {
                            Ok(_) => {
                                notifier.publish(Notification::PostCompleted { post_id });
                                nav.push(Route::Feed {});
                            }
                            Err(e) => {
                                toaster.error(e.message);
                            }
                        }
                        is_completing.set(false);
                        confirming.set(false);
                    });
                },
            }
        }
    }
}
