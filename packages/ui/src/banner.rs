//! View-local success and error banners.
//!
//! Success banners announce an acknowledged mutation and disappear after a
//! few seconds; error banners stay until replaced or dismissed. Prior view
//! state is always left intact — a failure never rolls back an earlier
//! optimistic merge.

use dioxus::prelude::*;

const SUCCESS_SECS: u64 = 3;

/// Banner flavor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A dismissible message box.
#[component]
pub fn Banner(kind: BannerKind, message: String, on_dismiss: EventHandler<()>) -> Element {
    let class = match kind {
        BannerKind::Success => "banner banner--success",
        BannerKind::Error => "banner banner--error",
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            span { "{message}" }
            button {
                class: "banner__dismiss",
                onclick: move |_| on_dismiss.call(()),
                "\u{00d7}"
            }
        }
    }
}

/// Show a success message on `slot` and clear it after a few seconds.
pub fn dismiss_after(mut slot: Signal<Option<String>>, message: String) {
    slot.set(Some(message));
    spawn(async move {
        sleep_secs(SUCCESS_SECS).await;
        slot.set(None);
    });
}

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}
