//! Layout for signed-in pages: navbar, greeting and logout.

use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::hooks::use_notification_toasts;
use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let route: Route = use_route();
    use_notification_toasts();

    let username = auth.user().map(|u| u.username).unwrap_or_default();

    let link_class = |active: bool| {
        if active {
            "rounded-md px-3 py-2 text-sm font-medium bg-emerald-100 text-emerald-900"
        } else {
            "rounded-md px-3 py-2 text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
        }
    };

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            nav { class: "border-b border-gray-200 bg-white",
                div { class: "mx-auto flex max-w-6xl flex-wrap items-center justify-between gap-2 px-4 py-3",
                    Link { class: "text-lg font-bold text-emerald-700", to: Route::Feed {}, "AidSwap" }
                    div { class: "flex flex-wrap items-center gap-1",
                        Link {
                            class: link_class(matches!(route, Route::Feed {} | Route::PostDetail { .. })),
                            to: Route::Feed {},
                            "Posts"
                        }
                        Link {
                            class: link_class(matches!(route, Route::NewPost {})),
                            to: Route::NewPost {},
                            "New post"
                        }
                        Link {
                            class: link_class(matches!(route, Route::MyPosts {})),
                            to: Route::MyPosts {},
                            "My posts"
                        }
                        Link {
                            class: link_class(matches!(route, Route::Messages {} | Route::ConversationDetail { .. })),
                            to: Route::Messages {},
                            "Messages"
                        }
                        Link {
                            class: link_class(matches!(route, Route::FeedbackHistory {})),
                            to: Route::FeedbackHistory {},
                            "History"
                        }
                    }
                    div { class: "flex items-center gap-3",
                        span { class: "text-sm text-gray-600", "Hello, {username}" }
                        button {
                            class: "rounded-md px-3 py-1.5 text-sm font-medium text-red-600 hover:bg-red-50",
                            onclick: move |_| {
                                auth.logout();
                                nav.push(Route::Login {});
                            },
                            "Log out"
                        }
                    }
                }
            }

            main { class: "mx-auto max-w-6xl px-4 py-6",
                Outlet::<Route> {}
            }
        }
    }
}
