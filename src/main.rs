use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use challenge_store::challenge::{
    self, actions, ChallengeReducer, ChallengeState, HydrationOptions,
};
use challenge_store::config::{AuthTokens, Config};
use challenge_store::dispatch::{Dispatchable, Dispatcher};
use challenge_store::logging::init_tracing;
use challenge_store::services::{ChallengeApi, HttpChallengeApi};
use challenge_store::store::Store;
use challenge_store::AppAction;

#[derive(Debug, Parser)]
#[command(name = "challenge-store", version, about = "Load challenge data and print the resulting state tree")]
struct Cli {
    /// Config file (default: ~/.config/challenge-store/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// v2 auth token
    #[arg(long, env = "TC_TOKEN_V2", hide_env_values = true, global = true)]
    token_v2: Option<String>,

    /// v3 auth token
    #[arg(long, env = "TC_TOKEN_V3", hide_env_values = true, global = true)]
    token_v3: Option<String>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load challenge details
    Details { challenge_id: String },
    /// Load the user's submissions to a challenge
    Submissions { challenge_id: String },
    /// Load checkpoint results of a design challenge
    Checkpoints { challenge_id: String },
    /// Load final results of a challenge
    Results {
        challenge_id: String,
        /// Challenge track used in the results endpoint
        #[arg(long = "type", default_value = "develop")]
        challenge_type: String,
    },
    /// Build the initial state from server-rendered props (JSON file)
    Hydrate { props: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let api: Arc<dyn ChallengeApi> =
        Arc::new(HttpChallengeApi::new(&config).context("building HTTP client")?);
    let auth = AuthTokens::new(cli.token_v2, cli.token_v3);

    let state = match cli.command {
        Command::Hydrate { props } => {
            let raw = std::fs::read_to_string(&props)
                .with_context(|| format!("reading {}", props.display()))?;
            let options: HydrationOptions = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", props.display()))?;
            challenge::factory(Some(options), api).await.initial_state()
        }
        Command::Details { challenge_id } => {
            run_lifecycle(
                actions::get_details_init(challenge_id.as_str()),
                actions::get_details_done(api, challenge_id, auth),
            )
            .await
        }
        Command::Submissions { challenge_id } => {
            run_lifecycle(
                actions::get_submissions_init(challenge_id.as_str()),
                actions::get_submissions_done(api, challenge_id, auth),
            )
            .await
        }
        Command::Checkpoints { challenge_id } => {
            run_lifecycle(
                actions::fetch_checkpoints_init(),
                actions::fetch_checkpoints_done(api, auth, challenge_id),
            )
            .await
        }
        Command::Results {
            challenge_id,
            challenge_type,
        } => {
            run_lifecycle(
                actions::load_results_init(challenge_id.as_str()),
                actions::load_results_done(api, auth, challenge_id, challenge_type),
            )
            .await
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&state).context("serializing state")?
    );
    Ok(())
}

/// Run one INIT/DONE pair against a fresh default store.
async fn run_lifecycle(init: AppAction, done: Dispatchable<AppAction>) -> ChallengeState {
    let dispatcher = Dispatcher::new(Store::<ChallengeReducer>::default());
    let state = dispatcher.run_lifecycle(init, done).await;
    if let Some(message) = &state.fetch_challenge_failure {
        tracing::warn!("details fetch failed: {}", message);
    }
    state
}
