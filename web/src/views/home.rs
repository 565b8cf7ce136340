use dioxus::prelude::*;
use ui::{Footer, Hero};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Footer {}
    }
}
