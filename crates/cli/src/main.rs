mod replay;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use esagent_core::AgentConfig;
use esagent_shared::*;

#[derive(Parser)]
#[command(name = "esagent", about = "Replay recorded frames through the perception pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay one or more JSON-lines frame recordings
    Replay {
        /// Recordings, one serialized frame per line
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        agent: AgentArgs,

        /// Directory for annotated frame output
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Replay a recording twice and confirm identical output
    Check {
        file: PathBuf,

        #[command(flatten)]
        agent: AgentArgs,
    },
}

#[derive(clap::Args)]
struct AgentArgs {
    /// Port the agent controls
    #[arg(long, default_value_t = 1)]
    port: Port,

    /// Initial guess at the opponent's port
    #[arg(long, default_value_t = 2)]
    opponent: Port,

    /// Passed through to the strategy
    #[arg(long, default_value_t = DEFAULT_DIFFICULTY)]
    difficulty: u8,
}

impl From<AgentArgs> for AgentConfig {
    fn from(args: AgentArgs) -> Self {
        AgentConfig {
            controlled_port: args.port,
            opponent_port: args.opponent,
            difficulty: args.difficulty,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Replay {
            files,
            agent,
            output,
        } => replay::cmd_replay(&files, agent.into(), output.as_deref()),
        Commands::Check { file, agent } => replay::cmd_check(&file, agent.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
