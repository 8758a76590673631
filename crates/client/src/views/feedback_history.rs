//! Activity history: help offered and received.

use aidswap_shared::{MatchActivity, PostStatus};
use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::toast::use_toaster;
use crate::components::ui::Loading;
use crate::components::{FeedbackRating, TypeBadge};
use crate::format;
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFilter {
    All,
    Offered,
    Received,
}

impl HistoryFilter {
    const ALL: [HistoryFilter; 3] = [Self::All, Self::Offered, Self::Received];

    fn label(self) -> &'static str {
        match self {
            Self::All => "All activity",
            Self::Offered => "Help I offered",
            Self::Received => "Help I received",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            Self::All => "You have no activity yet.",
            Self::Offered => "You have not offered any help yet.",
            Self::Received => "You have not received any help yet.",
        }
    }

    /// The other party's name on a row, from this filter's point of view.
    fn counterpart(self, row: &MatchActivity) -> &str {
        let name = match self {
            Self::Received => row.helper_username.as_deref(),
            Self::All | Self::Offered => row.post_owner_username.as_deref(),
        };
        name.unwrap_or("user")
    }
}

#[component]
pub fn FeedbackHistory() -> Element {
    let auth = use_context::<AuthContext>();
    let toaster = use_toaster();
    let mut filter = use_signal(|| HistoryFilter::All);

    let rows = use_resource(move || {
        let auth = auth.clone();
        let filter = filter();
        async move {
            let client = auth.client();
            let result = match filter {
                HistoryFilter::All | HistoryFilter::Offered => client.my_activity().await,
                HistoryFilter::Received => client.received_activity().await,
            };
            result.unwrap_or_else(|e| {
                toaster.error(e.message);
                Vec::new()
            })
        }
    });

    let active = filter();

    rsx! {
        div {
            div { class: "mb-4 flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-gray-900", "Activity history" }
                Link { class: "text-sm text-emerald-700 hover:underline", to: Route::Feed {}, "Back to posts" }
            }

            div { class: "mb-6 flex flex-wrap gap-2",
                for option in HistoryFilter::ALL {
                    button {
                        key: "{option.label()}",
                        class: if option == active {
                            "rounded-md bg-emerald-600 px-4 py-2 text-sm font-medium text-white"
                        } else {
                            "rounded-md bg-gray-100 px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-200"
                        },
                        onclick: move |_| filter.set(option),
                        "{option.label()}"
                    }
                }
            }

            match rows.read().as_ref() {
                None => rsx! { Loading {} },
                Some(rows) if rows.is_empty() => rsx! {
                    div { class: "py-16 text-center",
                        p { class: "mb-4 text-sm text-gray-500", "{active.empty_message()}" }
                        Link { class: "text-sm font-medium text-emerald-700 hover:underline", to: Route::Feed {}, "Browse posts" }
                    }
                },
                Some(rows) => rsx! {
                    div { class: "space-y-3",
                        for row in rows.iter() {
                            HistoryRow { key: "{row.id}", row: row.clone(), filter: active }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn HistoryRow(row: MatchActivity, filter: HistoryFilter) -> Element {
    let when = format::date_time(&row.created_at);
    let status = row.status;
    let rateable = filter == HistoryFilter::Received && status == PostStatus::Completed;
    let category = row.category.map(|c| c.label()).unwrap_or_default();
    let area = row.area.map(|a| a.as_str()).unwrap_or_default();
    let action = row.action_type.clone().unwrap_or_default();

    rsx! {
        div { class: "rounded-lg border border-gray-200 bg-white p-4",
            div { class: "mb-2 flex flex-wrap items-center gap-2",
                TypeBadge { post_type: row.post_type }
                span { class: "rounded-full bg-gray-100 px-2 py-0.5 text-xs text-gray-700", "{status.label()}" }
                span { class: "text-xs text-gray-500", "{when}" }
            }
            h3 { class: "text-lg font-semibold text-gray-900", "{row.item_name}" }
            p { class: "text-sm text-gray-600", "{row.quantity} • {category} • {area}" }
            if let Some(description) = row.description.as_ref().filter(|d| !d.is_empty()) {
                p { class: "mt-2 line-clamp-2 text-sm text-gray-600", "{description}" }
            }
            div { class: "mt-3 flex flex-wrap items-center justify-between gap-2 text-sm text-gray-500",
                span {
                    "{action} • by {filter.counterpart(&row)}"
                    if let Some(role) = row.participant_role.as_ref() {
                        " • {role}"
                    }
                }
                Link {
                    class: "font-medium text-emerald-700 hover:underline",
                    to: Route::PostDetail { id: row.post_id },
                    "Post #{row.post_id}"
                }
            }
            if rateable {
                if let Some(helper_id) = row.helper_id {
                    FeedbackRating { post_id: row.post_id, helper_id }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aidswap_shared::PostType;

    fn row() -> MatchActivity {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "post_id": 4,
            "item_name": "rice",
            "post_type": "HAVE",
            "created_at": "2024-01-01 10:00:00",
            "post_owner_username": "owner",
            "helper_username": "helper"
        }))
        .unwrap()
    }

    #[test]
    fn counterpart_depends_on_direction() {
        let row = row();
        assert_eq!(HistoryFilter::Offered.counterpart(&row), "owner");
        assert_eq!(HistoryFilter::All.counterpart(&row), "owner");
        assert_eq!(HistoryFilter::Received.counterpart(&row), "helper");
        assert_eq!(row.post_type, PostType::Have);
    }
}
