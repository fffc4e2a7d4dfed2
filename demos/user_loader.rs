//! User loader demo for dioxus-use-async
//!
//! Shows the two halves of the hook:
//! - an immediate tracker that fetches on mount and supports retry
//! - a deferred tracker that only runs when the button is clicked
//!
//! Run with: `cargo run --example user_loader`

use dioxus::prelude::*;
use dioxus_use_async::prelude::*;
use tokio::time::{Duration, sleep};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    email: String,
}

/// Pretend network fetch with a visible delay and occasional failure
async fn fetch_user() -> Result<User, AsyncError> {
    sleep(Duration::from_millis(800)).await;
    if std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_millis() % 4 == 0)
        .unwrap_or(false)
    {
        return Err(AsyncError::new("upstream unavailable, try again"));
    }
    Ok(User {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
    })
}

async fn save_profile() -> Result<(), AsyncError> {
    sleep(Duration::from_millis(500)).await;
    Ok(())
}

#[component]
fn App() -> Element {
    let user = use_async(fetch_user);
    let save = use_async_with_options(save_profile, UseAsyncOptions::deferred());

    rsx! {
        div { style: "font-family: sans-serif; padding: 2rem;",
            h1 { "User loader" }
            p { "fetch status: {user.status()}" }
            match &*user.state().read() {
                State::Idle => rsx! { p { "Not started" } },
                State::Pending { .. } => rsx! { p { "Loading user..." } },
                State::Success(loaded) => rsx! {
                    p { "{loaded.name} <{loaded.email}>" }
                },
                State::Error(err) => rsx! {
                    p { style: "color: red;", "Failed: {err}" }
                },
            }
            button { onclick: move |_| { user.execute(); }, "Reload" }

            h2 { "Deferred save" }
            p { "save status: {save.status()}" }
            button {
                disabled: save.status() == Status::Pending,
                onclick: move |_| { save.execute(); },
                "Save profile"
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    dioxus::launch(App);
}
