use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let base = "rounded-lg border border-gray-200 bg-white shadow-sm";
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    };

    rsx! {
        div { class, {props.children} }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CardHeaderProps {
    pub title: String,
    #[props(optional)]
    pub subtitle: Option<String>,
}

#[component]
pub fn CardHeader(props: CardHeaderProps) -> Element {
    rsx! {
        div { class: "px-5 pt-5 pb-1",
            h2 { class: "text-xl font-semibold text-gray-900", "{props.title}" }
            if let Some(sub) = &props.subtitle {
                p { class: "mt-1 text-sm text-gray-500", "{sub}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CardBodyProps {
    pub children: Element,
}

#[component]
pub fn CardBody(props: CardBodyProps) -> Element {
    rsx! {
        div { class: "px-5 pb-5 pt-3", {props.children} }
    }
}

/// Inline error box used by forms and failed loads.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "mb-4 rounded-md border border-red-200 bg-red-50 p-3",
            p { class: "text-sm text-red-700", "{message}" }
        }
    }
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "py-10 text-center text-sm text-gray-500", "Loading…" }
    }
}
