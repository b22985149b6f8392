//! End-to-end pipeline tests: retrieval → context block → assembly,
//! across several conversation turns.

use turnwise_context::{
    ContextAssembler, HeuristicCounter, InMemorySource, MemoryPolicy, SummaryCache, Summarizer,
    TranscriptSummarizer,
};
use turnwise_core::{ContextBlock, Conversation, Message, Result, RetrievedDocument, Role};

fn corpus() -> InMemorySource {
    InMemorySource::new(
        vec![
            RetrievedDocument::new(
                "robotics.html",
                "The robotics club builds competition robots and meets on Tuesdays.",
            ),
            RetrievedDocument::new(
                "debate.html",
                "The debate society hosts weekly practice rounds on Thursdays.",
            ),
            RetrievedDocument::new(
                "chess.html",
                "The chess club welcomes players of all levels.",
            ),
        ],
        3,
    )
}

#[test]
fn retrieval_feeds_the_context_block() {
    let source = corpus();
    let summarizer = TranscriptSummarizer::default();
    let assembler =
        ContextAssembler::new(MemoryPolicy::default_window(), &HeuristicCounter, &summarizer);

    let mut conv = Conversation::new();
    conv.push(Message::user("When does the robotics club meet?"));

    let block = source.context_for("robotics club").unwrap();
    let out = assembler
        .assemble(&conv, &block, &mut SummaryCache::new())
        .unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].role, Role::System);
    assert!(out[0].content.starts_with("Here is relevant information: "));
    assert!(out[0].content.contains("Tuesdays"));
    assert_eq!(out[1], Message::user("When does the robotics club meet?"));
}

#[test]
fn fixed_window_over_many_turns_stays_bounded() {
    let source = corpus();
    let summarizer = TranscriptSummarizer::default();
    let assembler =
        ContextAssembler::new(MemoryPolicy::default_window(), &HeuristicCounter, &summarizer);

    let mut conv = Conversation::new();
    let mut cache = SummaryCache::new();

    for i in 0..12 {
        conv.push(Message::user(format!("question {i} about clubs")));
        let block = source.context_for("club").unwrap();
        let out = assembler.assemble(&conv, &block, &mut cache).unwrap();

        // Block + at most 5 dialogue messages, latest question always last.
        assert!(out.len() <= 6);
        assert_eq!(
            out.last().unwrap(),
            &Message::user(format!("question {i} about clubs"))
        );
        conv.push(Message::assistant(format!("answer {i}")));
    }
}

#[test]
fn summary_cache_carries_across_turns() {
    let summarizer = TranscriptSummarizer::default();
    let assembler = ContextAssembler::new(
        MemoryPolicy::SummaryReplacement,
        &HeuristicCounter,
        &summarizer,
    );

    let mut conv = Conversation::new();
    let mut cache = SummaryCache::new();

    conv.push(Message::user("tell me about the debate society"));
    assembler
        .assemble(&conv, &ContextBlock::empty(), &mut cache)
        .unwrap();
    let first = cache.text().unwrap().to_string();

    conv.push(Message::assistant("it meets on Thursdays"));
    conv.push(Message::user("and the chess club?"));
    assembler
        .assemble(&conv, &ContextBlock::empty(), &mut cache)
        .unwrap();
    let second = cache.text().unwrap().to_string();

    assert_ne!(first, second);
    assert!(second.contains("chess club"));
}

#[test]
fn budget_policy_with_real_counter_trims_long_dialogue() {
    let summarizer = TranscriptSummarizer::default();
    let assembler = ContextAssembler::new(
        MemoryPolicy::TokenBudget {
            max_tokens: 60,
            model: "gpt-4o-mini".into(),
        },
        &HeuristicCounter,
        &summarizer,
    );

    let mut conv = Conversation::new();
    for i in 0..30 {
        conv.push(Message::user(format!(
            "a reasonably long question number {i} with plenty of words"
        )));
        conv.push(Message::assistant(format!("a detailed answer number {i}")));
    }

    let out = assembler
        .assemble(&conv, &ContextBlock::empty(), &mut SummaryCache::new())
        .unwrap();

    assert!(!out.is_empty());
    assert!(out.len() < 60);
    // Suffix of the dialogue, newest last.
    let suffix = &conv.messages[conv.messages.len() - out.len()..];
    assert_eq!(out, suffix);
}

/// A summarizer standing in for an LLM-backed adapter, verifying the
/// trait seam is all an adapter needs.
struct StubLlmSummarizer;

impl Summarizer for StubLlmSummarizer {
    fn summarize(&self, messages: &[Message]) -> Result<String> {
        let request = turnwise_context::summarizer::summary_request_text(messages);
        // A real adapter would send `request` to a completion API.
        Ok(format!("summary of {} chars of transcript", request.len()))
    }
}

#[test]
fn external_summarizer_plugs_into_the_seam() {
    let assembler = ContextAssembler::new(
        MemoryPolicy::SummaryReplacement,
        &HeuristicCounter,
        &StubLlmSummarizer,
    );

    let mut conv = Conversation::new();
    conv.push(Message::user("hello"));
    conv.push(Message::assistant("hi there"));
    conv.push(Message::user("what can you do?"));

    let mut cache = SummaryCache::new();
    let out = assembler
        .assemble(&conv, &ContextBlock::empty(), &mut cache)
        .unwrap();

    assert_eq!(out.len(), 2);
    assert!(out[0].content.starts_with("Conversation summary: "));
    assert!(cache.text().unwrap().contains("chars of transcript"));
}
