use anyhow::Context;
use bloggy::client::{HttpPostsApi, Navigation, Renderer, ViewSettings};
use bloggy::config::BloggyConfig;
use bloggy::{AppState, build_app};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bloggy", about = "A minimal markdown blog", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the posts API and the public directory
    Serve,
    /// Render one route against a running server and print the HTML
    Render {
        /// URL fragment, e.g. `#archive?page=2` or `post/hello-world`
        fragment: String,
        /// Base URL of the server, overrides API_BASE_URL
        #[arg(long)]
        api: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = BloggyConfig::from_env().context("Invalid configuration")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Render { fragment, api } => render(config, &fragment, api).await,
    }
}

async fn serve(config: BloggyConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.bind_addr, config.port);
    let public_dir = config.public_dir.clone();

    let state = AppState::from_config(config);
    info!("Serving posts from {}", state.posts.posts_dir().display());
    let app = build_app(state, &public_dir);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn render(config: BloggyConfig, fragment: &str, api: Option<String>) -> anyhow::Result<()> {
    let base_url = api.unwrap_or_else(|| config.api_base_url.clone());
    let renderer = Renderer::new(HttpPostsApi::new(base_url), ViewSettings::from(&config));

    match renderer.handle_route_change(fragment).await? {
        Navigation::Rendered(route) => {
            info!("Rendered {}", route.to_fragment());
            println!("{}", renderer.container().html());
        }
        Navigation::Superseded(route) => {
            info!("Navigation to {} was superseded", route.to_fragment());
        }
    }

    Ok(())
}
