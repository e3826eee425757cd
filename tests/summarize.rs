//! End-to-end properties of the summarization engine and its boundary,
//! exercised through the public API only.

use textpress::input::{output_filename, resolve, InputError, MessagePayload};
use textpress::nlp::{split_sentences, strip_tags};
use textpress::{summarize_normal, summarize_strong, InMemorySessionStore, Mode, SessionStore, Summarizer};

const ARTICLE: &str = "Rust is a systems programming language. \
    Rust guarantees memory safety without a garbage collector. \
    Memory safety bugs cause many security vulnerabilities. \
    The borrow checker enforces memory safety at compile time. \
    Hi. \
    Many developers say the borrow checker takes time to learn.";

#[test]
fn normal_summary_is_subset_of_input_sentences() {
    let sentences = split_sentences(ARTICLE);
    let summary = summarize_normal(ARTICLE, 3);
    for sentence in split_sentences(&summary) {
        assert!(sentences.contains(&sentence), "{sentence:?} not in input");
    }
}

#[test]
fn normal_summary_has_at_most_k_sentences() {
    for k in 0..=8 {
        let summary = summarize_normal(ARTICLE, k);
        let count = if summary.is_empty() {
            0
        } else {
            split_sentences(&summary).len()
        };
        assert!(count <= k, "k={k} produced {count} sentences");
    }
}

#[test]
fn normal_empty_input_is_empty_summary() {
    assert_eq!(summarize_normal("", 3), "");
}

#[test]
fn normal_handles_pure_punctuation_and_no_terminators() {
    // Totality: no panics on degenerate inputs.
    let _ = summarize_normal("?!... ---", 3);
    let _ = summarize_normal("no terminator at all", 3);
    let _ = summarize_strong("?!... ---", 1);
}

#[test]
fn strong_single_sentence_is_returned_unchanged() {
    assert_eq!(
        summarize_strong("Only one sentence here.", 1),
        "Only one sentence here."
    );
}

#[test]
fn strong_never_selects_short_sentences() {
    let text = "Hi. This is a longer sentence with many words repeated words words.";
    for k in 1..=10 {
        let summary = summarize_strong(text, k);
        assert!(!summary.contains("Hi."), "k={k}: {summary:?}");
    }
}

#[test]
fn strong_with_no_eligible_sentences_is_empty() {
    assert_eq!(summarize_strong("One two. Three four. Five.", 3), "");
}

#[test]
fn resummarizing_own_output_does_not_panic() {
    let once = summarize_normal(ARTICLE, 2);
    let twice = summarize_normal(&once, 2);
    let _ = summarize_strong(&twice, 1);
}

#[test]
fn markup_never_reaches_the_summary() {
    let html = "<div><p>Cats rule the internet. Cats rule everything online.</p>\
                <p>Dogs are also fine.</p></div>";
    let summary = summarize_normal(html, 2);
    assert!(!summary.contains('<') && !summary.contains('>'));
    // And the selected sentences come from the cleaned view.
    let cleaned_sentences = split_sentences(&strip_tags(html));
    for sentence in split_sentences(&summary) {
        assert!(cleaned_sentences.contains(&sentence));
    }
}

#[test]
fn unicode_text_summarizes() {
    let text = "Кошки правят интернетом. Кошки правят всем. Собаки тоже хороши.";
    let summary = summarize_normal(text, 1);
    assert!(!summary.is_empty());
    assert!(split_sentences(text).contains(&summary));
}

#[test]
fn repeated_topic_words_decide_the_winner() {
    let text = "Quantum computing changes cryptography. \
                Bananas are yellow. \
                Quantum computing and quantum cryptography share quantum hardware.";
    // "quantum" dominates the table; the quantum-heavy sentence must win.
    let summary = summarize_normal(text, 1);
    assert_eq!(
        summary,
        "Quantum computing and quantum cryptography share quantum hardware."
    );
}

#[test]
fn duplicate_sentences_cannot_fill_multiple_slots() {
    let summary = summarize_normal("Cat. Cat. Dog.", 2);
    assert_eq!(summary, "Cat. Dog.");

    // Strong mode collapses duplicates the same way.
    let text = "Dogs chase cats daily. Dogs chase cats daily. Cats nap instead today.";
    let summary = summarize_strong(text, 2);
    let parts = split_sentences(&summary);
    assert_eq!(parts.len(), 2);
    assert_ne!(parts[0], parts[1]);
}

#[test]
fn summarizer_dispatches_by_session_mode() {
    // The transport flow: look up the user's mode, build the engine for it.
    let store = InMemorySessionStore::new();
    store.set_mode(7, Mode::Strong);

    let mode = store.get_mode(7).unwrap();
    let summary = Summarizer::new(mode).summarize("Only one sentence here.");
    assert_eq!(summary, "Only one sentence here.");
    assert_eq!(store.get_mode(8), None);
}

#[test]
fn boundary_rejects_before_engine_runs() {
    let err = resolve(MessagePayload::Document {
        name: "deck.pptx".into(),
        bytes: vec![0; 16],
    })
    .unwrap_err();
    assert!(matches!(err, InputError::UnsupportedDocument(_)));

    let err = resolve(MessagePayload::Text(String::new())).unwrap_err();
    assert!(matches!(err, InputError::EmptyText));
}

#[test]
fn resolved_txt_document_flows_through_the_engine() {
    let resolved = resolve(MessagePayload::Document {
        name: "article.txt".into(),
        bytes: ARTICLE.as_bytes().to_vec(),
    })
    .unwrap();
    assert_eq!(resolved.stem, "article");
    assert_eq!(output_filename(&resolved.stem), "article_compressed.txt");

    let summary = summarize_normal(&resolved.text, 3);
    assert!(!summary.is_empty());
}
