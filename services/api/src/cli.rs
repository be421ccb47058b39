use crate::demo::{
    run_batch, run_demo, run_play, run_recommend, BatchArgs, DemoArgs, RecommendArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use finquiz::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "finquiz",
    about = "Score the financial product questionnaire and recommend a product line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one answer set given on the command line
    Recommend(RecommendArgs),
    /// Score every respondent in a CSV file
    Batch(BatchArgs),
    /// Take the questionnaire interactively in the terminal
    Play,
    /// Walk through a few scripted respondent profiles
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Batch(args) => run_batch(args),
        Command::Play => run_play().await,
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["finquiz"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn recommend_collects_repeated_answers_and_profile() {
        let cli = Cli::try_parse_from([
            "finquiz",
            "recommend",
            "--answer",
            "q1=a",
            "--answer",
            "q2=b",
            "--age",
            "25-34",
            "--experience",
            "beginner",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.answers, vec!["q1=a", "q2=b"]);
                assert!(args.json);
                assert_eq!(
                    args.profile.personal_info().experience,
                    Some(finquiz::workflows::quiz::ExperienceLevel::Beginner)
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_profile_values() {
        let result = Cli::try_parse_from(["finquiz", "recommend", "--gender", "robot"]);
        assert!(result.is_err());
    }
}
