//! Basic tests for plagprep-core

use plagprep_core::*;

/// Tagged sentence of single-character words `x`, one per lemma, laid out
/// at `offset`, each followed by a space. Returns the sentence and the
/// offset after it.
fn sentence_of(lemmas: &[&str], offset: usize) -> (TaggedSentence, usize) {
    let mut tokens = Vec::new();
    let mut pos = offset;
    for lemma in lemmas {
        tokens.push(TaggedToken::new("x", "NOUN", *lemma, pos, pos + 1));
        pos += 2;
    }
    (TaggedSentence::new(tokens), pos)
}

fn layout(sentences: &[&[&str]]) -> (String, Vec<TaggedSentence>) {
    let mut tagged = Vec::new();
    let mut offset = 0;
    for lemmas in sentences {
        let (sentence, next) = sentence_of(lemmas, offset);
        tagged.push(sentence);
        offset = next;
    }
    ("x ".repeat(offset / 2), tagged)
}

fn build(
    text: &str,
    tagged: &[TaggedSentence],
    references: &ReferenceSet,
    options: BuildOptions,
) -> Document {
    let mut doc = Document::new(DocumentId(0), "doc", "doc.txt", text);
    let stop_words = StopWords::none();
    SentenceBuilder::new(options, &stop_words)
        .build(&mut doc, tagged, references)
        .unwrap();
    doc
}

fn counts(doc: &Document) -> Vec<usize> {
    doc.all_sentences().iter().map(Sentence::word_count).collect()
}

#[test]
fn test_empty_tagger_output_yields_empty_document() {
    let doc = build("", &[], &ReferenceSet::empty(), BuildOptions::default());
    assert_eq!(doc.sentence_count(), 0);
    assert!(doc.vocabulary().is_empty());
    assert!(doc.verify().is_ok());
}

#[test]
fn test_short_leading_sentences_merge() {
    let (text, tagged) = layout(&[&["a"], &["b"], &["c", "d", "e", "f", "g"]]);
    let options = BuildOptions {
        min_sentence_length: 3,
        ..BuildOptions::default()
    };
    let doc = build(&text, &tagged, &ReferenceSet::empty(), options);

    assert_eq!(doc.sentence_count(), 2);
    assert_eq!(counts(&doc), vec![2, 5]);
    let first = &doc.all_sentences()[0];
    assert_eq!(first.start_char(), 0);
    assert_eq!(first.end_char(), 3);
}

#[test]
fn test_short_last_sentence_merges_backwards() {
    let (text, tagged) = layout(&[
        &["a", "b", "c", "d", "e"],
        &["f", "g", "h", "i", "j"],
        &["k"],
    ]);
    let unmerged = build(
        &text,
        &tagged,
        &ReferenceSet::empty(),
        BuildOptions {
            join_small: false,
            ..BuildOptions::default()
        },
    );
    let doc = build(&text, &tagged, &ReferenceSet::empty(), BuildOptions::default());

    assert_eq!(doc.sentence_count(), 2);
    assert_eq!(counts(&doc), vec![5, 6]);
    assert_eq!(doc.all_sentences()[0], unmerged.all_sentences()[0]);
}

#[test]
fn test_merge_conserves_bag_and_adjusts_vocabulary() {
    let (text, tagged) = layout(&[&["a", "a", "b"], &["b", "c"]]);
    let unmerged = build(
        &text,
        &tagged,
        &ReferenceSet::empty(),
        BuildOptions {
            min_sentence_length: 4,
            join_small: false,
            ..BuildOptions::default()
        },
    );
    assert_eq!(unmerged.vocabulary().get("b"), 2);

    let doc = build(
        &text,
        &tagged,
        &ReferenceSet::empty(),
        BuildOptions {
            min_sentence_length: 4,
            ..BuildOptions::default()
        },
    );

    assert_eq!(doc.sentence_count(), 1);
    let merged = &doc.all_sentences()[0];
    assert_eq!(merged.bag().count("a"), 2);
    assert_eq!(merged.bag().count("b"), 2);
    assert_eq!(merged.bag().count("c"), 1);
    assert_eq!(merged.start_char(), tagged[0].tokens[0].start_char);
    assert_eq!(merged.end_char(), tagged[1].tokens[1].end_char);
    assert_eq!(doc.vocabulary().get("b"), 1);
    assert_eq!(doc.vocabulary().get("a"), 1);
    assert_eq!(doc.vocabulary().get("c"), 1);
}

#[test]
fn test_common_sentence_detection_and_vocabulary_exclusion() {
    let text = "the cat sat . the dog ran";
    let tagged = vec![
        TaggedSentence::new(vec![
            TaggedToken::new("the", "DET", "the", 0, 3),
            TaggedToken::new("cat", "NOUN", "cat", 4, 7),
            TaggedToken::new("sat", "VERB", "sit", 8, 11),
            TaggedToken::punctuation(".", 12, 13),
        ]),
        TaggedSentence::new(vec![
            TaggedToken::new("the", "DET", "the", 14, 17),
            TaggedToken::new("dog", "NOUN", "dog", 18, 21),
            TaggedToken::new("ran", "VERB", "run", 22, 25),
        ]),
    ];
    let references = ReferenceSet::new(vec![vec!["the".to_string(), "cat".to_string()]]);
    let doc = build(text, &tagged, &references, BuildOptions::default());

    assert_eq!(doc.sentence_count(), 2);
    assert!(doc.all_sentences()[0].is_common());
    assert!(!doc.all_sentences()[1].is_common());
    assert_eq!(doc.common_count(), 1);
    assert_eq!(doc.sentences(false).count(), 1);
    assert_eq!(doc.sentences(true).count(), 2);

    assert_eq!(doc.vocabulary().get("cat"), 0);
    assert_eq!(doc.vocabulary().get("sit"), 0);
    assert_eq!(doc.vocabulary().get("the"), 1);
    assert_eq!(doc.vocabulary().get("dog"), 1);
}

#[test]
fn test_common_sentences_block_merging() {
    let text = "a b c d";
    let tagged = vec![
        TaggedSentence::new(vec![TaggedToken::new("a", "X", "a", 0, 1)]),
        TaggedSentence::new(vec![TaggedToken::new("b", "X", "b", 2, 3)]),
        TaggedSentence::new(vec![
            TaggedToken::new("c", "X", "c", 4, 5),
            TaggedToken::new("d", "X", "d", 6, 7),
        ]),
    ];
    let references = ReferenceSet::new(vec![vec!["b".to_string()]]);
    let doc = build(text, &tagged, &references, BuildOptions::default());

    // (a, b) blocked by common b; (b, cd) blocked by common b
    assert_eq!(doc.sentence_count(), 3);
    assert!(doc.verify().is_ok());
}

#[test]
fn test_reference_set_from_documents() {
    let text = "Licensed under MIT . All rights reserved";
    let tagged = vec![
        TaggedSentence::new(vec![
            TaggedToken::new("Licensed", "VERB", "license", 0, 8),
            TaggedToken::new("under", "ADP", "under", 9, 14),
            TaggedToken::new("MIT", "PROPN", "MIT", 15, 18),
            TaggedToken::punctuation(".", 19, 20),
        ]),
        TaggedSentence::new(vec![
            TaggedToken::new("All", "DET", "all", 21, 24),
            TaggedToken::new("rights", "NOUN", "right", 25, 31),
            TaggedToken::new("reserved", "VERB", "reserve", 32, 40),
        ]),
    ];
    let reference_doc = build(
        text,
        &tagged,
        &ReferenceSet::empty(),
        BuildOptions::default().for_reference(),
    );
    let references = ReferenceSet::from_documents([&reference_doc]);

    assert_eq!(references.len(), 2);
    assert_eq!(references.sentences()[0], vec!["Licensed", "under", "MIT"]);
    assert!(references.matches(&["All", "rights", "reserved", "worldwide"]));
    assert!(!references.matches(&["All", "rights"]));
}

fn zum_markt() -> Vec<TaggedSentence> {
    vec![TaggedSentence::new(vec![
        TaggedToken::new("Wir", "PRON", "wir", 0, 3),
        TaggedToken::new("gehen", "VERB", "gehen", 4, 9),
        TaggedToken::new("zu", "ADP", "zu", 10, 13),
        TaggedToken::new("dem", "DET", "der", 10, 13),
        TaggedToken::new("Markt", "NOUN", "Markt", 14, 19),
    ])]
}

#[test]
fn test_multi_word_tokens_share_span() {
    let text = "Wir gehen zum Markt";
    let doc = build(text, &zum_markt(), &ReferenceSet::empty(), BuildOptions::default());

    let sentence = &doc.all_sentences()[0];
    assert_eq!(sentence.words().len(), 5);
    assert_eq!(sentence.word_count(), 5);
    assert_eq!(
        sentence.word_texts().collect::<Vec<_>>(),
        vec!["Wir", "gehen", "zu", "dem", "Markt"]
    );
    let dem = &sentence.words()[3];
    assert_eq!(doc.span_text(dem.start_char, dem.end_char), Some("zum"));
    assert!(doc.verify().is_ok());
}

#[test]
fn test_multi_word_tokens_match_reference_copy() {
    let text = "Wir gehen zum Markt";
    let reference_doc = build(
        text,
        &zum_markt(),
        &ReferenceSet::empty(),
        BuildOptions::default().for_reference(),
    );
    let references = ReferenceSet::from_documents([&reference_doc]);
    assert_eq!(
        references.sentences()[0],
        vec!["Wir", "gehen", "zu", "dem", "Markt"]
    );

    let doc = build(text, &zum_markt(), &references, BuildOptions::default());
    assert!(doc.all_sentences()[0].is_common());
    assert!(doc.vocabulary().is_empty());
    assert!(doc.verify().is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn test_document_round_trips_through_json() {
    let (text, tagged) = layout(&[&["a", "b"], &["c", "d", "e"]]);
    let doc = build(&text, &tagged, &ReferenceSet::empty(), BuildOptions::default());

    let json = serde_json::to_string(&doc).unwrap();
    let restored: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, doc);
    assert!(restored.verify().is_ok());
}
