use aidswap_shared::FeedbackRequest;
use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::toast::use_toaster;
use crate::components::ui::{Button, ButtonVariant, ErrorBanner, FieldLabel, TextArea};

/// Build the request, or the message to show next to the form.
fn rating_request(
    post_id: i64,
    helper_id: i64,
    rating: u8,
    comment: &str,
) -> Result<FeedbackRequest, String> {
    FeedbackRequest::new(post_id, helper_id, rating, comment).map_err(|e| e.to_string())
}

/// Collapsible 1-5 star rating form for help received on a post.
#[component]
pub fn FeedbackRating(
    post_id: i64,
    helper_id: i64,
    on_submitted: Option<EventHandler<()>>,
) -> Element {
    let auth = use_context::<AuthContext>();
    let toaster = use_toaster();
    let mut show_form = use_signal(|| false);
    let mut rating = use_signal(|| 0u8);
    let mut comment = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    if !show_form() {
        return rsx! {
            button {
                class: "text-sm font-medium text-green-700 hover:text-green-900",
                onclick: move |_| show_form.set(true),
                "Rate this help"
            }
        };
    }

    rsx! {
        div { class: "mt-3 rounded-md bg-gray-50 p-4",
            h4 { class: "mb-3 font-medium text-gray-900", "Rate this help" }
            if let Some(e) = error.cloned() {
                ErrorBanner { message: e }
            }
            form {
                class: "space-y-3",
                onsubmit: move |e| {
                    let auth = auth.clone();
                    async move {
                        e.prevent_default();
                        let request = match rating_request(post_id, helper_id, rating(), &comment.read()) {
                            Ok(request) => request,
                            Err(message) => {
                                error.set(Some(message));
                                return;
                            }
                        };

                        is_submitting.set(true);
                        error.set(None);
                        match auth.client().submit_feedback(&request).await {
                            Ok(_) => {
                                toaster.success("Thank you, your rating was sent.");
                                rating.set(0);
                                comment.set(String::new());
                                show_form.set(false);
                                if let Some(handler) = on_submitted {
                                    handler.call(());
                                }
                            }
                            Err(e) => {
                                toaster.error(e.message);
                            }
                        }
                        is_submitting.set(false);
                    }
                },
                div {
                    FieldLabel { text: "Rating".to_string() }
                    div { class: "flex gap-1",
                        for star in 1..=5u8 {
                            button {
                                key: "{star}",
                                r#type: "button",
                                class: if star <= rating() { "text-2xl text-yellow-400" } else { "text-2xl text-gray-300" },
                                disabled: is_submitting(),
                                onclick: move |_| {
                                    rating.set(star);
                                    error.set(None);
                                },
                                "★"
                            }
                        }
                    }
                }
                div {
                    FieldLabel { text: "Comment (optional)".to_string() }
                    TextArea {
                        value: comment.cloned(),
                        placeholder: Some("Share how it went…".to_string()),
                        oninput: move |e: FormEvent| comment.set(e.value()),
                    }
                }
                div { class: "flex gap-2",
                    Button {
                        r#type: Some("submit".to_string()),
                        disabled: Some(is_submitting()),
                        if is_submitting() { "Sending…" } else { "Send rating" }
                    }
                    Button {
                        variant: Some(ButtonVariant::Secondary),
                        disabled: Some(is_submitting()),
                        onclick: move |_| show_form.set(false),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rating_is_reported_inline() {
        let message = rating_request(4, 9, 0, "thanks").unwrap_err();
        assert_eq!(message, "Please choose a rating between 1 and 5");
        assert!(rating_request(4, 9, 6, "").is_err());
    }

    #[test]
    fn chosen_rating_builds_the_request() {
        let request = rating_request(4, 9, 5, "  great  ").unwrap();
        assert_eq!((request.post_id, request.helper_id, request.rating), (4, 9, 5));
        assert_eq!(request.comment.as_deref(), Some("great"));
    }
}
