use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ai_client::{ChatModel, OpenRouter};
use leanscope_common::AppConfig;
use leanscope_scan::classifier::{PartisanshipClassifier, PostClassifier};
use leanscope_scan::pipeline::{AuthorPipeline, PostPipeline};
use leanscope_scan::store::ResultsTable;

#[derive(Parser)]
#[command(
    name = "leanscope",
    about = "Classify post politics and author partisanship across per-user timelines"
)]
struct Cli {
    /// Directory of per-user timeline files (<username>.jsonl)
    #[arg(long)]
    input_dir: PathBuf,

    /// Output table for post classification
    #[arg(long, default_value = "post_classification.csv")]
    posts_out: PathBuf,

    /// Output table for author partisanship
    #[arg(long, default_value = "user_partisanship_results.csv")]
    partisanship_out: PathBuf,

    /// Platform name recorded in post rows
    #[arg(long, default_value = "twitter")]
    platform: String,

    /// Model identifier sent to the chat API
    #[arg(long, default_value = "openai/gpt-4.1-mini")]
    model: String,

    /// Override the chat API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Most new post classifications per run, across all users
    #[arg(long, default_value_t = 1000)]
    max_posts: usize,

    /// Most timeline files considered per run
    #[arg(long, default_value_t = 1000)]
    max_users: usize,

    /// Most posts aggregated into one partisanship prompt
    #[arg(long, default_value_t = 500)]
    posts_per_author: usize,

    /// Ask the model for a rationale after the partisanship label
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    explanations: bool,

    /// Reclassify keys already present in the output tables
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("leanscope=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    info!("Leanscope starting");

    let mut client = OpenRouter::new(config.openai_api_key).with_app_name("leanscope");
    if let Some(base_url) = cli.base_url.as_deref() {
        client = client.with_base_url(base_url);
    }
    let model: Arc<dyn ChatModel> = Arc::new(client);

    let posts = PostPipeline::new(
        PostClassifier::new(model.clone(), cli.model.as_str()),
        ResultsTable::new(&cli.posts_out),
        cli.platform.as_str(),
    )
    .with_max_posts(cli.max_posts)
    .with_max_users(cli.max_users)
    .with_force(cli.force);
    posts.run(&cli.input_dir).await?;

    let authors = AuthorPipeline::new(
        PartisanshipClassifier::new(model.clone(), cli.model.as_str(), cli.explanations),
        ResultsTable::new(&cli.partisanship_out),
    )
    .with_max_users(cli.max_users)
    .with_posts_per_author(cli.posts_per_author)
    .with_force(cli.force);
    authors.run(&cli.input_dir).await?;

    Ok(())
}
