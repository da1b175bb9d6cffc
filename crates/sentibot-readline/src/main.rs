use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing_subscriber::EnvFilter;

use sentibot_core::config::ScoringMethod;
use sentibot_core::responder::Responder;
use sentibot_core::sentiment::{Aggregator, Scorer};
use sentibot_core::session::{Conversation, TranscriptRepository};
use sentibot_infrastructure::{
    ConfigService, JsonIntentResolver, JsonTranscriptRepository, SentibotPaths,
};

mod display;

/// CLI helper for rustyline that provides completion, highlighting, and
/// hints for the built-in slash commands.
#[derive(Clone)]
struct ChatHelper {
    commands: Vec<String>,
}

impl ChatHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/summary".to_string(),
                "/clear".to_string(),
                "/quit".to_string(),
            ],
        }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ChatHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(line: &str, pos: usize) -> (usize, Vec<String>) {
        let helper = ChatHelper::new();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = helper.complete(line, pos, &ctx).unwrap();
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn test_complete_slash_prefix() {
        let (start, replacements) = candidates("/s", 2);
        assert_eq!(start, 0);
        assert_eq!(replacements, vec!["/summary".to_string()]);
    }

    #[test]
    fn test_complete_bare_slash_lists_all_commands() {
        let (_, replacements) = candidates("/", 1);
        assert_eq!(replacements.len(), 3);
        assert!(replacements.contains(&"/quit".to_string()));
    }

    #[test]
    fn test_complete_plain_text_has_no_candidates() {
        let (_, replacements) = candidates("hello there", 11);
        assert!(replacements.is_empty());
    }

    #[test]
    fn test_hint_completes_partial_command() {
        let helper = ChatHelper::new();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        assert_eq!(helper.hint("/cl", 3, &ctx), Some("ear".to_string()));
        assert_eq!(helper.hint("what is this", 12, &ctx), None);
    }
}

#[derive(Parser)]
#[command(name = "sentibot")]
#[command(about = "SentiBot - a terminal chatbot with sentiment analysis", long_about = None)]
struct Cli {
    /// Path to the configuration file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scoring backend: lexicon or statistical
    #[arg(long)]
    method: Option<ScoringMethod>,

    /// Score at or above which a message counts as positive
    #[arg(long)]
    positive_threshold: Option<f64>,

    /// Score at or below which a message counts as negative
    #[arg(long)]
    negative_threshold: Option<f64>,

    /// Directory to write the transcript to (default: platform data dir)
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Do not save the transcript at session end
    #[arg(long)]
    no_save: bool,

    /// Optional intents JSON file consulted before canned replies
    #[arg(long)]
    intents: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // ===== Configuration =====
    let config_service = match cli.config.clone() {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let root_config = config_service.get_config();

    let mut settings = root_config.sentiment.clone();
    if let Some(value) = cli.positive_threshold {
        settings.positive_threshold = value;
    }
    if let Some(value) = cli.negative_threshold {
        settings.negative_threshold = value;
    }
    if let Some(method) = cli.method {
        settings.method = method;
    }
    let sentiment_config = settings
        .to_sentiment_config()
        .context("invalid sentiment thresholds")?;
    let method = settings.method;
    tracing::debug!(method = method.as_str(), "scoring method selected");

    // ===== Engine and collaborators =====
    let scorer = Scorer::from_method(method, sentiment_config);
    let aggregator = Aggregator::new(sentiment_config);

    let mut responder = Responder::new(root_config.bot.name.clone());
    if let Some(path) = &cli.intents {
        let resolver = JsonIntentResolver::load(path)
            .with_context(|| format!("failed to load intents from {}", path.display()))?;
        responder = responder.with_intent_resolver(Box::new(resolver));
    }

    let transcript_dir = match cli.transcript.clone() {
        Some(dir) => dir,
        None => SentibotPaths::transcript_dir().context("cannot resolve transcript directory")?,
    };
    let repository = JsonTranscriptRepository::new(transcript_dir);

    let mut conversation = Conversation::new();

    // ===== REPL =====
    let mut editor: Editor<ChatHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(ChatHelper::new()));

    println!("{}", responder.welcome_message());

    loop {
        match editor.readline("You: ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(input);

                if let Some(command) = input.strip_prefix('/') {
                    match command {
                        "summary" => {
                            let summary = aggregator.summarize(&conversation.user_scores());
                            display::print_summary(
                                summary.as_ref(),
                                conversation.duration().num_milliseconds() as f64 / 1000.0,
                            );
                        }
                        "clear" => {
                            conversation.clear();
                            println!("{}", "Conversation cleared.".yellow());
                        }
                        "quit" => break,
                        other => {
                            println!(
                                "{}",
                                format!("Unknown command '/{}'. Try /summary, /clear or /quit.", other)
                                    .yellow()
                            );
                        }
                    }
                    continue;
                }

                if root_config.bot.is_exit_command(input) {
                    println!(
                        "{}",
                        format!(
                            "\n{}: Thank you for chatting! Analyzing conversation...\n",
                            responder.name()
                        )
                        .green()
                    );
                    break;
                }

                // Score, display, respond, record.
                let sentiment = scorer.score_message(input);
                println!("{}", display::sentiment_line(&sentiment));

                let reply = responder.reply(input, sentiment.label);
                println!("{}\n", format!("{}: {}", responder.name(), reply).green());

                conversation.add_user_message(input, sentiment);
                conversation.add_bot_message(reply);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    // ===== Session wrap-up =====
    let duration_seconds = conversation.duration().num_milliseconds() as f64 / 1000.0;

    display::print_message_recap(&conversation);

    let summary = aggregator.summarize(&conversation.user_scores());
    display::print_summary(summary.as_ref(), duration_seconds);

    if !cli.no_save && !conversation.is_empty() {
        match repository.save(&conversation) {
            Ok(path) => println!(
                "{}",
                format!("✓ Conversation saved to {}", path.display()).green()
            ),
            Err(err) => eprintln!("{}", format!("Could not save conversation: {}", err).red()),
        }
    }

    println!("{}", display::final_verdict(summary.as_ref()).bold());

    Ok(())
}
