use sentibot_core::config::{ScoringMethod, SentimentConfig};
use sentibot_core::responder::Responder;
use sentibot_core::sentiment::{Aggregator, Scorer, SentimentLabel, Trend};
use sentibot_core::session::Conversation;

fn scorer() -> Scorer {
    Scorer::from_method(ScoringMethod::Lexicon, SentimentConfig::default())
}

fn aggregator() -> Aggregator {
    Aggregator::new(SentimentConfig::default())
}

#[test]
fn test_full_session_positive_drift() {
    let scorer = scorer();
    let responder = Responder::new("SentimentBot");
    let mut conversation = Conversation::new();

    let inputs = [
        "this is terrible, nothing works",
        "ok, that helped a little",
        "wow, this is great, I love it",
    ];
    for input in inputs {
        let sentiment = scorer.score_message(input);
        let reply = responder.reply(input, sentiment.label);
        conversation.add_user_message(input, sentiment);
        conversation.add_bot_message(reply);
    }

    let summary = aggregator()
        .summarize(&conversation.user_scores())
        .expect("non-empty conversation must summarize");

    assert_eq!(summary.message_count, 3);
    assert_eq!(summary.trend, Trend::Improving);
}

#[test]
fn test_empty_session_has_no_summary() {
    let conversation = Conversation::new();
    assert_eq!(aggregator().summarize(&conversation.user_scores()), None);
}

#[test]
fn test_scorer_is_total_over_hostile_inputs() {
    let scorer = scorer();
    let long_text = "word ".repeat(10_000);
    let inputs = [
        "",
        "   ",
        "1234567890",
        "!@#$%^&*()",
        "\u{1F600}\u{1F4A9}",
        long_text.as_str(),
    ];
    for input in inputs {
        let result = scorer.score_message(input);
        assert!(result.score.is_finite());
        assert!((-1.0..=1.0).contains(&result.score));
    }
}

#[test]
fn test_consistently_positive_session() {
    // Scores [0.8, 0.7, 0.9]-shaped sessions: Positive overall, stable trend.
    let summary = aggregator().summarize(&[0.8, 0.7, 0.9]).unwrap();
    assert_eq!(summary.label, SentimentLabel::Positive);
    assert_eq!(summary.trend, Trend::Stable);
    assert_eq!(summary.description, "general satisfaction");
}

#[test]
fn test_statistical_method_end_to_end() {
    let scorer = Scorer::from_method(ScoringMethod::Statistical, SentimentConfig::default());
    let mut conversation = Conversation::new();

    for input in ["I am happy with this", "everything is awful"] {
        let sentiment = scorer.score_message(input);
        conversation.add_user_message(input, sentiment);
    }

    let scores = conversation.user_scores();
    assert!(scores[0] > 0.0);
    assert!(scores[1] < 0.0);
    assert!(aggregator().summarize(&scores).is_some());
}
