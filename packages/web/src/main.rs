use dioxus::prelude::*;

use store::AroundConfig;
use ui::views::Page;
use ui::AppProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        api::config::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default config: {e}");
            AroundConfig::default()
        })
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { Page {} }
}

/// Unknown paths fall back to the single page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("Unknown route /{}, redirecting home", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}
