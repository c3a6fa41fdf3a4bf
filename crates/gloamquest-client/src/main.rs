//! Gloamquest terminal client entry point.

use std::env;
use std::error::Error;

use colored::Colorize;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use gloamquest_client::api::ApiClient;
use gloamquest_client::pipeline::{self, PipelineError};
use gloamquest_client::render;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/v1/generate";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .compact()
        .init();

    let endpoint =
        env::var("GLOAMQUEST_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

    let args: Vec<String> = env::args().skip(1).collect();
    let goal = if args.is_empty() {
        render::prompt_goal()?
    } else {
        args.join(" ")
    };

    let api = ApiClient::new(endpoint)?;

    // Ctrl-C aborts the run between steps instead of killing mid-render.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let outcome = {
        let _spinner = render::SpinnerGuard::start("Consulting the spirits...");
        pipeline::run(&api, &goal, &cancel).await
    };

    match outcome {
        Ok(adventure) => {
            render::story(&adventure.intro);
            render::quest_cards(&adventure.quests, &adventure.image_urls);
            render::select_quest(&adventure.quests)?;
        }
        Err(PipelineError::EmptyGoal) => {
            eprintln!(
                "{}",
                "Please enter your goal before generating quests.".yellow()
            );
        }
        Err(PipelineError::QuestShortfall { .. }) => {
            eprintln!("{}", "Failed to generate two quests. Try again!".yellow());
        }
        Err(PipelineError::Cancelled) => {
            eprintln!("{}", "Quest abandoned.".yellow());
        }
        Err(err) => {
            tracing::error!(error = %err, "quest generation failed");
            eprintln!("{}", "Something went wrong. Check the log for details.".red());
        }
    }

    Ok(())
}
