//! Post feed with type/category/area filters.

use std::collections::HashSet;

use aidswap_shared::{Area, Category, PostFilters, PostType};
use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::ui::{Button, ButtonVariant, ErrorBanner, Loading, SelectInput};
use crate::components::PostCard;

pub(crate) fn type_options(all: Option<&str>) -> Vec<(String, String)> {
    with_all(all, PostType::ALL.iter().map(|t| (t.as_str(), t.label())))
}

pub(crate) fn category_options(all: Option<&str>) -> Vec<(String, String)> {
    with_all(all, Category::ALL.iter().map(|c| (c.as_str(), c.label())))
}

pub(crate) fn area_options(all: Option<&str>) -> Vec<(String, String)> {
    with_all(all, Area::ALL.iter().map(|a| (a.as_str(), a.as_str())))
}

fn with_all<'a>(
    all: Option<&str>,
    options: impl Iterator<Item = (&'a str, &'a str)>,
) -> Vec<(String, String)> {
    all.map(|label| (String::new(), label.to_string()))
        .into_iter()
        .chain(options.map(|(v, l)| (v.to_string(), l.to_string())))
        .collect()
}

#[component]
pub fn Feed() -> Element {
    let auth = use_context::<AuthContext>();
    let mut filters = use_signal(PostFilters::default);
    // Posts matched from this page since the last fetch
    let mut matched_here = use_signal(HashSet::<i64>::new);

    let feed = use_resource(move || {
        let auth = auth.clone();
        let filters = filters();
        async move {
            let client = auth.client();
            let (posts, matches) =
                futures_util::join!(client.list_posts(&filters), client.my_matches());
            let matched: HashSet<i64> = match matches {
                Ok(matches) => matches.into_iter().map(|m| m.post_id).collect(),
                Err(e) => {
                    crate::log_warn!("Could not load my matches: {}", e);
                    HashSet::new()
                }
            };
            posts.map(|posts| (posts, matched))
        }
    });

    let current = filters.read().clone();

    rsx! {
        div {
            h1 { class: "mb-4 text-2xl font-bold text-gray-900", "Available posts" }

            div { class: "mb-6 grid grid-cols-1 gap-3 rounded-lg border border-gray-200 bg-white p-4 sm:grid-cols-2 lg:grid-cols-4",
                SelectInput {
                    value: current.post_type.map(|t| t.as_str().to_string()).unwrap_or_default(),
                    options: type_options(Some("All types")),
                    onchange: move |e: FormEvent| filters.write().post_type = PostType::parse(&e.value()),
                }
                SelectInput {
                    value: current.category.map(|c| c.as_str().to_string()).unwrap_or_default(),
                    options: category_options(Some("All categories")),
                    onchange: move |e: FormEvent| filters.write().category = Category::parse(&e.value()),
                }
                SelectInput {
                    value: current.area.map(|a| a.as_str().to_string()).unwrap_or_default(),
                    options: area_options(Some("All areas")),
                    onchange: move |e: FormEvent| filters.write().area = Area::parse(&e.value()),
                }
                Button {
                    variant: Some(ButtonVariant::Secondary),
                    disabled: Some(current.is_empty()),
                    onclick: move |_| filters.set(PostFilters::default()),
                    "Clear filters"
                }
            }

            match feed.read().as_ref() {
                None => rsx! { Loading {} },
                Some(Err(e)) => rsx! { ErrorBanner { message: e.message.clone() } },
                Some(Ok((posts, _))) if posts.is_empty() => rsx! {
                    div { class: "py-16 text-center",
                        h3 { class: "mb-2 text-lg font-semibold text-gray-900", "No posts right now" }
                        p { class: "text-sm text-gray-500", "Try other filters or come back later." }
                    }
                },
                Some(Ok((posts, matched))) => rsx! {
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
