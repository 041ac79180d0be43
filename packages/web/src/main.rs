use dioxus::prelude::*;

use ui::components::ComponentStyles;
use ui::{ApiProvider, AuthProvider, ThemeProvider};
use views::{
    AdminIndex, AdminLayout, Dashboard, Home, NotFound, ProjectTables, Projects, Profile,
    PublicLayout, Quit, Timeline, TimelineTables, UserTables,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Home {},
        #[route("/timeline")]
        Timeline {},
        #[route("/projets")]
        Projects {},
    #[end_layout]
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            AdminIndex {},
            #[route("/dashboard")]
            Dashboard {},
            #[route("/tables/timeline")]
            TimelineTables {},
            #[route("/tables/project")]
            ProjectTables {},
            #[route("/tables/user")]
            UserTables {},
            #[route("/profil")]
            Profile {},
            #[route("/quit")]
            Quit {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start the tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(TraceLayer::new_for_http());

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind the server address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Stylesheet { href: ui::VIEWS_CSS }
        ComponentStyles {}

        ApiProvider {
            ThemeProvider {
                AuthProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
