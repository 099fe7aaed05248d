//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, platform_storage, Client, PlatformStorage};

mod session;
pub use session::{use_session, LogoutButton, SessionHandle, SessionProvider, SessionState};

mod gate;
pub use gate::SessionGate;

mod navbar;
pub use navbar::Navbar;

mod banner;
pub use banner::{dismiss_after, Banner, BannerKind};

mod time;
pub use time::now_iso8601;
