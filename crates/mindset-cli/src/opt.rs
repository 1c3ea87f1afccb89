use clap::{Parser, Subcommand};
use mindset_core::models::answer::AnswerEvent;

#[derive(Debug, Parser)]
#[command(name = "mindset", about = "思维模式评估: a Likert self-assessment in the terminal")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Answer the questionnaire interactively.
    Take(Take),

    /// Score answers given as `id=value` pairs, without prompting.
    Score(Score),

    /// List every statement, grouped by dimension.
    Questions(Questions),

    /// Inspect or manage the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Parser)]
pub(crate) struct Take {
    #[arg(short, long, default_value = "mindset")]
    pub(crate) instrument: String,
    /// Print results as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Parser)]
pub(crate) struct Score {
    #[arg(short, long, default_value = "mindset")]
    pub(crate) instrument: String,
    #[arg(long)]
    pub(crate) json: bool,
    /// Ratings such as `gm1=4 cs2=2`; unlisted statements stay unanswered.
    pub(crate) answers: Vec<AnswerEvent>,
}

#[derive(Debug, Parser)]
pub(crate) struct Questions {
    #[arg(short, long, default_value = "mindset")]
    pub(crate) instrument: String,
}

#[derive(Debug, Subcommand)]
pub(crate) enum ConfigCommand {
    /// Print the config path and effective values.
    Show,
    /// Write a default config file if none exists.
    Init,
    /// Delete the config file.
    Reset,
}
