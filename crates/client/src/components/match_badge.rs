use aidswap_shared::PostType;
use dioxus::prelude::*;

use crate::auth_session::AuthContext;

/// Badge text for the number of people who responded to a post.
pub fn responders_label(post_type: PostType, count: usize) -> Option<String> {
    match (post_type, count) {
        (_, 0) => None,
        (PostType::Have, 1) => Some("1 person needs this".to_string()),
        (PostType::Have, n) => Some(format!("{n} people need this")),
        (PostType::Need, 1) => Some("1 person helping".to_string()),
        (PostType::Need, n) => Some(format!("{n} people helping")),
    }
}

/// Shows how many users responded to a post. Renders nothing while loading,
/// on error, or when nobody has responded yet.
#[component]
pub fn MatchBadge(post_id: i64, post_type: PostType) -> Element {
    let auth = use_context::<AuthContext>();

    let mut track_post_id = use_signal(|| post_id);
    if *track_post_id.peek() != post_id {
        track_post_id.set(post_id);
    }

    let matches = use_resource(move || {
        let auth = auth.clone();
        let id = track_post_id();
        async move { auth.client().post_matches(id).await }
    });

    let count = match matches.read().as_ref() {
        Some(Ok(list)) => list.len(),
        Some(Err(e)) => {
            crate::log_debug!("Could not load matches for post {}: {}", post_id, e);
            0
        }
        None => 0,
    };

    let class = match post_type {
        PostType::Have => "bg-red-100 text-red-800",
        PostType::Need => "bg-green-100 text-green-800",
    };

    rsx! {
        if let Some(label) = responders_label(post_type, count) {
            span { class: "inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium {class}",
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_depends_on_type_and_count() {
        assert_eq!(responders_label(PostType::Have, 0), None);
        assert_eq!(responders_label(PostType::Have, 1).as_deref(), Some("1 person needs this"));
        assert_eq!(responders_label(PostType::Have, 3).as_deref(), Some("3 people need this"));
        assert_eq!(responders_label(PostType::Need, 2).as_deref(), Some("2 people helping"));
    }
}
