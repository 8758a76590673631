use aidswap_shared::{Area, Category, CreatePostRequest, PostType};
use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::toast::use_toaster;
use crate::components::ui::{
    Button, ButtonVariant, Card, CardBody, CardHeader, ErrorBanner, FieldLabel, SelectInput, TextArea,
    TextInput,
};
use crate::views::feed::{area_options, category_options, type_options};
use crate::Route;

#[component]
pub fn NewPost() -> Element {
    let auth = use_context::<AuthContext>();
    let toaster = use_toaster();
    let nav = use_navigator();
    let mut form = use_signal(CreatePostRequest::default);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let current = form.read().clone();

    rsx! {
        div { class: "mx-auto max-w-2xl",
            Card {
                CardHeader {
                    title: "New post".to_string(),
                    subtitle: Some("Offer something you have, or ask for something you need".to_string()),
                }
                CardBody {
                    if let Some(e) = error.cloned() {
                        ErrorBanner { message: e }
                    }

                    form {
                        class: "space-y-4",
                        onsubmit: move |e| {
                            let auth = auth.clone();
                            async move {
                                e.prevent_default();
                                if is_submitting() {
                                    return;
                                }

                                // Required fields are checked before anything is sent
                                let request = match form.read().validated() {
                                    Ok(request) => request,
                                    Err(e) => {
                                        error.set(Some(e.to_string()));
                                        return;
                                    }
                                };

                                is_submitting.set(true);
                                error.set(None);
                                match auth.client().create_post(&request).await {
                                    Ok(_) => {
                                        crate::log_info!("Created post for {}", request.item_name);
                                        toaster.success("Post published");
                                        nav.push(Route::Feed {});
                                    }
                                    Err(e) => {
                                        toaster.error(e.message);
                                    }
                                }
                                is_submitting.set(false);
                            }
                        },
                        div {
                            FieldLabel { text: "Type".to_string() }
                            SelectInput {
                                value: current.post_type.as_str().to_string(),
                                options: type_options(None),
                                onchange: move |e: FormEvent| {
                                    if let Some(t) = PostType::parse(&e.value()) {
                                        form.write().post_type = t;
                                    }
                                },
                            }
                        }
                        div {
                            FieldLabel { text: "Item".to_string() }
                            TextInput {
                                value: current.item_name.clone(),
                                placeholder: Some("e.g. rice, baby formula, water".to_string()),
                                oninput: move |e: FormEvent| form.write().item_name = e.value(),
                            }
                        }
                        div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2",
                            div {
                                FieldLabel { text: "Category".to_string() }
                                SelectInput {
                                    value: current.category.as_str().to_string(),
                                    options: category_options(None),
                                    onchange: move |e: FormEvent| {
                                        if let Some(c) = Category::parse(&e.value()) {
                                            form.write().category = c;
                                        }
                                    },
                                }
                            }
                            div {
                                FieldLabel { text: "Area".to_string() }
                                SelectInput {
                                    value: current.area.as_str().to_string(),
                                    options: area_options(None),
                                    onchange: move |e: FormEvent| {
                                        if let Some(a) = Area::parse(&e.value()) {
                                            form.write().area = a;
                                        }
                                    },
                                }
                            }
                        }
                        div {
                            FieldLabel { text: "Quantity".to_string() }
                            TextInput {
                                value: current.quantity.clone(),
                                placeholder: Some("e.g. 2 bags".to_string()),
                                oninput: move |e: FormEvent| form.write().quantity = e.value(),
                            }
                        }
                        div {
                            FieldLabel { text: "Description (optional)".to_string() }
                            TextArea {
                                value: current.description.clone().unwrap_or_default(),
                                oninput: move |e: FormEvent| form.write().description = Some(e.value()),
                            }
                        }
                        div { class: "flex justify-end gap-2",
                            Button {
                                variant: Some(ButtonVariant::Secondary),
                                onclick: move |_| {
                                    nav.push(Route::Feed {});
                                },
                                "Cancel"
                            }
                            Button {
                                r#type: Some("submit".to_string()),
                                disabled: Some(is_submitting()),
                                if is_submitting() { "Publishing…" } else { "Publish" }
                            }
                        }
                    }
                }
            }
        }
    }
}
