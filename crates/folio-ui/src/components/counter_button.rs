//! Counter Button Component
//!
//! A button that counts its own clicks. The count is local and resets on
//! reload.

use dioxus::prelude::*;

fn counter_label(label: &str, count: u32) -> String {
    if count == 0 {
        label.to_string()
    } else {
        format!("{} \u{00B7} {}", label, count)
    }
}

#[component]
pub fn CounterButton(
    /// Button text
    label: String,
    #[props(default)]
    initial: u32,
) -> Element {
    let mut count = use_signal(|| initial);
    let text = counter_label(&label, count());

    rsx! {
        button {
            class: "btn-pill counter-btn",
            r#type: "button",
            onclick: move |_| count += 1,
            "{text}"
        }
    }
}
