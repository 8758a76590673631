use dioxus::prelude::*;

const FIELD_CLASS: &str = "w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-emerald-500/40 focus:border-emerald-500";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Password,
}

impl InputType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
        }
    }
}

fn field_class(extra: Option<String>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{FIELD_CLASS} {extra}"),
        _ => FIELD_CLASS.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    #[props(optional)]
    pub class: Option<String>,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub input_type: Option<InputType>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        input {
            class: field_class(props.class),
            r#type: props.input_type.unwrap_or(InputType::Text).as_str(),
            value: "{props.value}",
            placeholder: props.placeholder.unwrap_or_default(),
            oninput: move |e| props.oninput.call(e),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(default = 3)]
    pub rows: u32,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        textarea {
            class: FIELD_CLASS,
            rows: "{props.rows}",
            value: "{props.value}",
            placeholder: props.placeholder.unwrap_or_default(),
            oninput: move |e| props.oninput.call(e),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SelectInputProps {
    pub value: String,
    /// `(value, label)` pairs in display order.
    pub options: Vec<(String, String)>,
    pub onchange: EventHandler<FormEvent>,
    #[props(optional)]
    pub class: Option<String>,
}

#[component]
pub fn SelectInput(props: SelectInputProps) -> Element {
    rsx! {
        select {
            class: field_class(props.class),
            value: "{props.value}",
            onchange: move |e| props.onchange.call(e),
            for (value, label) in props.options.iter() {
                option {
                    key: "{value}",
                    value: "{value}",
                    selected: *value == props.value,
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn FieldLabel(text: String) -> Element {
    rsx! {
        label { class: "block text-sm font-medium text-gray-700 mb-1", "{text}" }
    }
}
