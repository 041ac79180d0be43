//! API client and site configuration as Dioxus context.

use api::ApiClient;
use dioxus::prelude::*;
use store::PortfolioConfig;

/// The shared [`ApiClient`]. Requires an [`ApiProvider`] ancestor.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// The loaded [`PortfolioConfig`]. Requires an [`ApiProvider`] ancestor.
pub fn use_site_config() -> PortfolioConfig {
    use_context::<PortfolioConfig>()
}

/// Loads the bundled configuration once and provides it, together with an
/// [`ApiClient`] pointed at its base URL, to every descendant.
#[component]
pub fn ApiProvider(children: Element) -> Element {
    let config = use_context_provider(|| {
        let config = PortfolioConfig::load();
        tracing::info!("Using API at {}", config.api.base_url);
        config
    });
    use_context_provider(move || ApiClient::from_config(&config));

    rsx! {
        {children}
    }
}
