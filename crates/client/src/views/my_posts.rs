use aidswap_shared::{ApiError, Post};
use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::toast::use_toaster;
use crate::components::ui::{Button, ButtonVariant, ErrorBanner, Loading};
use crate::components::{ConfirmDialog, MatchBadge, TypeBadge};
use crate::format;
use crate::hooks::{use_notifier, use_refresh_resource, use_refreshable_resource};
use crate::notifications::Notification;
use crate::Route;

type MyPostsResult = Result<Vec<Post>, ApiError>;

#[component]
pub fn MyPosts() -> Element {
    let auth = use_context::<AuthContext>();

    let posts = use_refreshable_resource(move || {
        let auth = auth.clone();
        async move { auth.client().my_posts().await }
    });

    rsx! {
        div {
            div { class: "mb-4 flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-gray-900", "My posts" }
                Link {
                    class: "rounded-md bg-emerald-600 px-4 py-2 text-sm font-medium text-white hover:bg-emerald-500",
                    to: Route::NewPost {},
                    "New post"
                }
            }

            match posts.read().as_ref() {
                None => rsx! { Loading {} },
                Some(Err(e)) => rsx! { ErrorBanner { message: e.message.clone() } },
                Some(Ok(posts)) if posts.is_empty() => rsx! {
                    p { class: "py-16 text-center text-sm text-gray-500", "You have not posted anything yet." }
                },
                Some(Ok(posts)) => rsx! {
                    div { class: "space-y-3",
                        for post in posts.iter() {
                            MyPostRow { key: "{post.id}", post: post.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn MyPostRow(post: Post) -> Element {
    let auth = use_context::<AuthContext>();
    let toaster = use_toaster();
    let notifier = use_notifier();
    let refresh = use_refresh_resource::<MyPostsResult>();
    let mut confirming = use_signal(|| false);
    let mut is_completing = use_signal(|| false);
    let post_id = post.id;
    let created = format::time_ago(&post.created_at);

    rsx! {
        div { class: "flex flex-wrap items-center justify-between gap-3 rounded-lg border border-gray-200 bg-white p-4",
            div { class: "min-w-0",
                div { class: "mb-1 flex items-center gap-2",
                    TypeBadge { post_type: post.post_type }
                    MatchBadge { post_id: post.id, post_type: post.post_type }
                    span { class: "text-xs text-gray-500", "{created}" }
                }
                Link {
                    class: "text-lg font-semibold text-gray-900 hover:underline",
                    to: Route::PostDetail { id: post.id },
                    "{post.item_name}"
                }
                p { class: "text-sm text-gray-500",
                    "{post.quantity} • {post.category.label()} • {post.area.as_str()}"
                }
            }
            if post.is_active() {
                Button {
                    variant: Some(ButtonVariant::Secondary),
                    onclick: move |_| confirming.set(true),
                    "Mark as completed"
                }
            } else {
                span { class: "rounded-full bg-gray-100 px-3 py-1 text-xs font-semibold text-gray-600",
                    "{post.status.label()}"
                }
            }
        }

        if confirming() {
            ConfirmDialog {
                title: "Complete this post?".to_string(),
                message: format!("\"{}\" will no longer accept responses.", post.item_name),
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
                                refresh.trigger();
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
