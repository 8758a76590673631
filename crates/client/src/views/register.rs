use aidswap_shared::RegisterRequest;
use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::ui::{
    Button, ButtonVariant, Card, CardBody, CardHeader, ErrorBanner, FieldLabel, InputType, TextInput,
};
use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = use_context::<AuthContext>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);
    let nav = use_navigator();

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-gray-50 px-4 py-12",
            div { class: "w-full max-w-md",
                Card {
                    CardHeader {
                        title: "Create an account".to_string(),
                        subtitle: Some("Join your neighbours in sharing aid".to_string()),
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

                                    let request = match RegisterRequest::new(
                                        &username.read(),
                                        &password.read(),
                                        &confirm.read(),
                                    ) {
                                        Ok(request) => request,
                                        Err(e) => {
                                            error.set(Some(e.to_string()));
                                            return;
                                        }
                                    };

                                    is_submitting.set(true);
                                    error.set(None);
                                    match auth.client().register(&request).await {
                                        Ok(response) => {
                                            auth.login(&response);
                                            nav.push(Route::Feed {});
                                        }
                                        Err(e) => error.set(Some(e.message)),
                                    }
                                    is_submitting.set(false);
                                }
                            },
                            div {
                                FieldLabel { text: "Username".to_string() }
                                TextInput {
                                    value: username.cloned(),
                                    oninput: move |e: FormEvent| username.set(e.value()),
                                }
                            }
                            div {
                                FieldLabel { text: "Password".to_string() }
                                TextInput {
                                    value: password.cloned(),
                                    input_type: Some(InputType::Password),
                                    oninput: move |e: FormEvent| password.set(e.value()),
                                }
                            }
                            div {
                                FieldLabel { text: "Confirm password".to_string() }
                                TextInput {
                                    value: confirm.cloned(),
                                    input_type: Some(InputType::Password),
                                    oninput: move |e: FormEvent| confirm.set(e.value()),
                                }
                            }
                            Button {
                                r#type: Some("submit".to_string()),
                                variant: Some(ButtonVariant::Primary),
                                class: Some("w-full".to_string()),
                                disabled: Some(is_submitting()),
                                if is_submitting() { "Creating…" } else { "Create account" }
                            }
                        }

                        p { class: "mt-6 text-center text-sm text-gray-500",
                            "Already have an account? "
                            Link {
                                class: "font-medium text-emerald-700 hover:text-emerald-900",
                                to: Route::Login {},
                                "Sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}
