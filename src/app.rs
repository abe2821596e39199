use dioxus::prelude::*;

use crate::pages::Technologies;

const GLOBAL_STYLES: &str = include_str!("../assets/styles.css");

pub fn app() -> Element {
    rsx! {
        document::Style { "{GLOBAL_STYLES}" }
        Technologies {}
    }
}
