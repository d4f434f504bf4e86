use anyhow::{bail, Context};
use clap::Parser;
use ghost_admin::{
    config::Settings, logger, mobiledoc, string, Client, ClientConfig, Post, PostRequest,
    ADMIN_API, POSTS,
};
use tracing::{info, warn};

const DEFAULT_MARKDOWN: &str =
    "This is a **test post** made with the [ghost-admin](https://crates.io/crates/ghost-admin) library.";

/// Fetches a post and rewrites its title and body through the Admin API.
#[derive(Parser)]
#[command(name = "ghost-admin")]
#[command(about = "Read-modify-write a Ghost post through the Admin API")]
struct Cli {
    /// Site URL, e.g. https://blog.example.com
    url: String,

    /// Admin API key in the form <id>:<secret>
    api_key: String,

    /// Id of the post to edit
    post_id: String,

    #[arg(short, long, default_value = "config/ghost-admin.toml")]
    config: String,

    #[arg(long, default_value = "Asset Transparency Log Metrics")]
    title: String,

    #[arg(long, default_value = DEFAULT_MARKDOWN)]
    markdown: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::load(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config))?;
    logger::init(&settings.logging)?;

    info!("Starting ghost-admin v{}", env!("CARGO_PKG_VERSION"));

    let config = ClientConfig::from_settings(&cli.url, &cli.api_key, &settings.ghost);
    let client = Client::from_config(config).context("building client")?;
    let path = client.endpoint_for_id(ADMIN_API, POSTS, &cli.post_id);

    // 1. updated_at from the current post is required for the PUT.
    let current: PostRequest = client
        .get(&path)
        .await
        .context("get")?
        .json()
        .await
        .context("decode")?;

    let post = match current.into_result() {
        Ok(posts) => posts.into_iter().next().context("no post in response")?,
        Err(errors) => {
            for error in &errors {
                warn!(%error, "ghost returned an error");
            }
            bail!("get: {}", errors[0]);
        }
    };

    println!(
        "title: {} Updated At: {}",
        post.title.as_deref().unwrap_or_default(),
        post.updated_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_default()
    );

    // 2. New content.
    let update = PostRequest::new(vec![Post {
        title: string(cli.title),
        updated_at: post.updated_at,
        mobiledoc: Some(mobiledoc::to_post_field(&cli.markdown).context("encode mobiledoc")?),
        ..Default::default()
    }]);

    // 3. PUT it back to the same id.
    let response = client.put(&path, &update).await.context("UpdatePost")?;
    let status = response.status();
    let body = response.text().await.context("reading response")?;

    info!(%status, "post updated");
    println!("response: {body}");

    Ok(())
}
