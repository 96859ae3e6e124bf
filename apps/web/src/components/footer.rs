use dioxus::prelude::*;
use vayana_domain::constants::FOOTER_TEXT;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "border-t bg-background",
            div { class: "container items-center justify-between gap-4 py-5 md:h-8 md:flex-row md:py-0",
                div { class: "flex flex-col items-center justify-center gap-4 px-8 md:flex-row md:gap-2 md:px-0",
                    p { class: "text-center text-sm leading-loose text-muted-foreground", "{FOOTER_TEXT}" }
                }
            }
        }
    }
}
