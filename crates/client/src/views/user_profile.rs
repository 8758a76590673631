use std::collections::HashSet;

use aidswap_shared::PostFilters;
use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::ui::{ErrorBanner, Loading};
use crate::components::{ContactButton, PostCard};
use crate::format;
use crate::Route;

#[component]
pub fn UserProfile(user_id: i64) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let mut matched_here = use_signal(HashSet::<i64>::new);

    let mut track_user = use_signal(|| user_id);
    if *track_user.peek() != user_id {
        track_user.set(user_id);
    }

    let profile = use_resource({
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            let id = track_user();
            async move {
                let client = auth.client();
                let filters = PostFilters::for_user(id);
                let (user, posts, matches) = futures_util::join!(
                    client.get_user(id),
                    client.list_posts(&filters),
                    client.my_matches()
                );
                let matched: HashSet<i64> = matches
                    .map(|m| m.into_iter().map(|m| m.post_id).collect())
                    .unwrap_or_default();
                let posts = posts.unwrap_or_else(|e| {
                    crate::log_warn!("Could not load posts of user {}: {}", id, e);
                    Vec::new()
                });
                user.map(|user| (user, posts, matched))
            }
        }
    });

    let is_self = auth.user_id() == Some(user_id);

    rsx! {
        div { class: "mx-auto max-w-5xl",
            button {
                class: "mb-4 text-sm text-gray-600 hover:text-gray-900",
                onclick: move |_| {
                    nav.push(Route::Feed {});
                },
                "← Back to posts"
            }

            match profile.read().as_ref() {
                None => rsx! { Loading {} },
                Some(Err(e)) => rsx! { ErrorBanner { message: e.message.clone() } },
                Some(Ok((user, posts, matched))) => rsx! {
                    div { class: "mb-6 flex flex-wrap items-center justify-between gap-4 rounded-lg border border-gray-200 bg-white p-5",
                        div {
                            h1 { class: "text-2xl font-bold text-gray-900", "{user.username}" }
                            p { class: "text-sm text-gray-500",
                                "Member since {format::date_time(&user.created_at)}"
                            }
                            if let Some(email) = user.email.as_ref() {
                                p { class: "text-sm text-gray-500", "{email}" }
                            }
                        }
                        if !is_self {
                            ContactButton {
                                recipient_id: user.id,
                                recipient_name: user.username.clone(),
                                post_id: None,
                            }
                        }
                    }

                    h2 { class: "mb-3 text-lg font-semibold text-gray-900", "Posts by {user.username}" }
                    if posts.is_empty() {
                        p { class: "py-10 text-center text-sm text-gray-500", "No posts yet." }
                    }
                    div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3",
                        for post in posts.iter() {
                            PostCard {
                                key: "{post.id}",
                                post: post.clone(),
                                matched: matched.contains(&post.id) || matched_here.read().contains(&post.id),
                                on_matched: move |post_id| {
                                    matched_here.write().insert(post_id);
                                },
                            }
                        }
                    }
                },
            }
        }
    }
}
