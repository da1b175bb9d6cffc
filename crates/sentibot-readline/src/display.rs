//! Terminal rendering for sentiment output and the session summary.

use colored::Colorize;
use sentibot_core::sentiment::{ConversationSummary, ScoreResult, SentimentLabel};
use sentibot_core::session::{Conversation, MessageRole};

/// One-line sentiment annotation shown after each scored user message.
pub fn sentiment_line(result: &ScoreResult) -> String {
    let text = format!(
        "→ Sentiment: {} (score: {:.3})",
        result.label, result.score
    );
    match result.label {
        SentimentLabel::Positive => text.green().to_string(),
        SentimentLabel::Negative => text.red().to_string(),
        SentimentLabel::Neutral => text.yellow().to_string(),
    }
}

/// Per-message sentiment recap printed when the session ends.
pub fn print_message_recap(conversation: &Conversation) {
    println!("\n{}", "-".repeat(60));
    println!("{}", "MESSAGE-LEVEL SENTIMENT ANALYSIS".magenta());
    println!("{}", "-".repeat(60));

    for message in conversation.messages() {
        if message.role == MessageRole::User
            && let Some(sentiment) = &message.sentiment
        {
            println!("\nUser: \"{}\"", message.text);
            println!("{}", sentiment_line(sentiment));
        }
    }

    println!("{}\n", "-".repeat(60));
}

/// Final conversation summary block.
///
/// `summary` of `None` renders the no-messages sentinel.
pub fn print_summary(summary: Option<&ConversationSummary>, duration_seconds: f64) {
    let sentinel = ConversationSummary::no_messages();
    let summary = summary.unwrap_or(&sentinel);

    println!("\n{}", "=".repeat(60));
    println!("{}", "CONVERSATION SUMMARY".magenta().bold());
    println!("{}", "=".repeat(60));
    println!("Duration: {:.1} seconds", duration_seconds);
    println!("Total messages analyzed: {}", summary.message_count);
    println!("Overall sentiment: {}", summary.label);
    println!("Average score: {:.3}", summary.average_score);
    println!("Sentiment description: {}", summary.description);
    println!("Mood trend: {}", summary.trend);
    println!("{}\n", "=".repeat(60));
}

/// The one-line verdict printed last.
pub fn final_verdict(summary: Option<&ConversationSummary>) -> String {
    match summary {
        Some(summary) => format!(
            "Final Output: Overall conversation sentiment: {} - {}",
            summary.label, summary.description
        ),
        None => "Final Output: No messages to analyze".to_string(),
    }
}
