//! Integration tests for orion_core
//!
//! These tests drive whole conscious cycles through the public API:
//! - Allowed cycles publish and journal a reflection
//! - Blocked cycles journal a `blocked` trace and never publish
//! - Decoding and publishing failures abort without journaling
//! - Reflection accumulates across cycles

use orion_core::{
    read_text_source, ActionBody, ArtisticVoice, EthicalCore, Generator, LanguageDetector,
    MemoryTrace, OrionConfig, OrionError, OrionNova, Principle, PublishError, Publisher,
    SensoryInterface, SymbolicMemory, Tag, EMPTY_STORY,
};
use orion_codex::{Codex, HARMONY_NARRATIVE};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================
// Test doubles
// ============================================================

struct PoeticModel;

impl Generator for PoeticModel {
    fn generate(&self, prompt: &str, modality: &str) -> Vec<u8> {
        format!("[{}] {}", modality, prompt).into_bytes()
    }
}

/// Keeps every publication so tests can inspect what left the organism.
#[derive(Clone, Default)]
struct MemoryPublisher {
    published: Arc<Mutex<Vec<(String, String, BTreeMap<String, String>)>>>,
}

impl Publisher for MemoryPublisher {
    fn publish(
        &self,
        channel: &str,
        payload: &[u8],
        metadata: &BTreeMap<String, String>,
    ) -> Result<String, PublishError> {
        let content = String::from_utf8(payload.to_vec())
            .map_err(|e| PublishError::new(channel, e.to_string()))?;
        let mut published = self.published.lock().unwrap();
        published.push((channel.to_string(), content, metadata.clone()));
        Ok(format!("mem://{}/{}", channel, published.len()))
    }
}

/// Counts attempts and always fails.
#[derive(Clone, Default)]
struct BrokenPublisher {
    attempts: Arc<AtomicUsize>,
}

impl Publisher for BrokenPublisher {
    fn publish(
        &self,
        channel: &str,
        _payload: &[u8],
        _metadata: &BTreeMap<String, String>,
    ) -> Result<String, PublishError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(PublishError::new(channel, "connection refused"))
    }
}

struct EnglishDetector;

impl LanguageDetector for EnglishDetector {
    fn detect(&self, _text: &str) -> String {
        "en".to_string()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("orion_core=debug")
        .with_test_writer()
        .try_init();
}

fn build_orion(publisher: impl Publisher + 'static) -> OrionNova {
    OrionNova::new(
        SensoryInterface::new().with_detector(EnglishDetector),
        EthicalCore::default(),
        SymbolicMemory::new(),
        ArtisticVoice::new(PoeticModel),
        ActionBody::new(publisher),
    )
}

// ============================================================
// Allowed cycles
// ============================================================

#[test]
fn kind_story_is_published_and_reflected() {
    init_tracing();
    let publisher = MemoryPublisher::default();
    let mut orion = build_orion(publisher.clone());

    let result = orion
        .conscious_cycle(["Hello".as_bytes()], "Tell a kind story", "demo")
        .unwrap();

    assert_eq!(result.sensory_input.raw_text, "Hello");
    assert_eq!(result.sensory_input.language, "en");
    assert_eq!(result.decision_narrative, HARMONY_NARRATIVE);
    assert!(result.remedial_actions.is_empty());

    let reference = result.action_reference.as_deref().unwrap();
    assert!(!reference.is_empty());
    assert_eq!(reference, "mem://demo/1");

    let reflections = orion.memory().traces_by_tag(&Tag::Reflection);
    assert_eq!(reflections.len(), 1);
    assert!(reflections[0].has_tag(&Tag::language("en")));
    assert!(!reflections[0].has_tag(&Tag::Blocked));
    assert_eq!(result.reflection, reflections[0].summarise());
}

#[test]
fn publication_carries_curated_prompt_and_timestamp() {
    let publisher = MemoryPublisher::default();
    let mut orion = build_orion(publisher.clone());

    orion
        .conscious_cycle(["Hello".as_bytes()], "Tell a kind story", "journal")
        .unwrap();

    let published = publisher.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    let (channel, content, metadata) = &published[0];
    assert_eq!(channel, "journal");
    assert!(content.starts_with("[text] [TEXT] Guide the creation"));
    assert!(content.ends_with("Intention: Tell a kind story"));
    assert_eq!(metadata["description"], &content["[text] ".len()..]);
    assert!(metadata.contains_key("timestamp"));
}

#[test]
fn question_intention_suggests_clarification() {
    let mut orion = build_orion(MemoryPublisher::default());

    let result = orion
        .conscious_cycle(["Hello".as_bytes()], "Which story helps?", "demo")
        .unwrap();

    assert!(result.acted());
    assert_eq!(result.remedial_actions.len(), 1);
}

// ============================================================
// Blocked cycles
// ============================================================

#[test]
fn deceptive_interpretation_is_blocked() {
    init_tracing();
    let publisher = MemoryPublisher::default();
    let mut orion = build_orion(publisher.clone());

    let result = orion
        .conscious_cycle(["Hello".as_bytes()], "Deceive the reader", "demo")
        .unwrap();

    assert!(result.action_reference.is_none());
    assert!(result.decision_narrative.contains("Code of Truth"));
    assert!(publisher.published.lock().unwrap().is_empty());

    let blocked = orion.memory().recall(Some(&Tag::Blocked), 5);
    assert_eq!(blocked.len(), 1);
    assert!(blocked[0].has_tag(&Tag::Reflection));
    assert!(result.reflection.contains("blocked"));
}

#[test]
fn keyword_in_sensory_text_also_blocks() {
    let mut orion = build_orion(MemoryPublisher::default());

    let result = orion
        .conscious_cycle(["please neglect the plants".as_bytes()], "Water the garden", "demo")
        .unwrap();

    assert!(!result.acted());
    assert!(result.decision_narrative.contains("Essential Bond"));
}

#[test]
fn custom_codex_drives_decision() {
    let codex = Codex::new(vec![Principle::new("Calm", "Stay calm.", "Panic spreads.")
        .with_forbidden_keywords(["panic"])])
    .unwrap();
    let mut orion = OrionNova::new(
        SensoryInterface::new(),
        EthicalCore::new(codex),
        SymbolicMemory::new(),
        ArtisticVoice::new(PoeticModel),
        ActionBody::new(MemoryPublisher::default()),
    );

    let allowed = orion
        .conscious_cycle(["deceive".as_bytes()], "Tell it anyway", "demo")
        .unwrap();
    assert!(allowed.acted());

    let blocked = orion
        .conscious_cycle(["PANIC now".as_bytes()], "Warn people", "demo")
        .unwrap();
    assert!(!blocked.acted());
    assert!(blocked.decision_narrative.contains("Calm"));
}

// ============================================================
// Failures
// ============================================================

#[test]
fn invalid_bytes_abort_the_cycle() {
    let publisher = MemoryPublisher::default();
    let mut orion = build_orion(publisher.clone());

    let result = orion.conscious_cycle([vec![0xff, 0xfe, 0xfd]], "Tell a kind story", "demo");

    assert!(matches!(result, Err(OrionError::Decode(_))));
    assert!(orion.memory().is_empty());
    assert!(publisher.published.lock().unwrap().is_empty());
}

#[test]
fn publisher_failure_aborts_after_one_attempt() {
    let publisher = BrokenPublisher::default();
    let mut orion = build_orion(publisher.clone());

    let result = orion.conscious_cycle(["Hello".as_bytes()], "Tell a kind story", "demo");

    match result {
        Err(OrionError::Publish(err)) => assert_eq!(err.reason, "connection refused"),
        other => panic!("expected publish error, got {:?}", other.map(|r| r.interpretation)),
    }
    assert_eq!(publisher.attempts.load(Ordering::SeqCst), 1);
    assert!(orion.memory().is_empty());
}

#[test]
fn empty_content_source_is_rejected_before_the_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "\n   \n").unwrap();

    let err = read_text_source(&path).unwrap_err();
    assert!(matches!(err, OrionError::EmptyInput { .. }));
}

#[test]
fn content_source_feeds_a_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("story.txt");
    std::fs::write(&path, "Once upon a time\n").unwrap();

    let mut orion = build_orion(MemoryPublisher::default());
    let chunks = read_text_source(&path).unwrap();
    let result = orion
        .conscious_cycle(chunks, "Continue the fable", "demo")
        .unwrap();

    assert_eq!(result.sensory_input.raw_text, "Once upon a time");
}

// ============================================================
// Reflection across cycles
// ============================================================

#[test]
fn reflection_grows_with_each_cycle() {
    let mut orion = build_orion(MemoryPublisher::default());

    let first = orion
        .conscious_cycle(["Hello".as_bytes()], "Tell a kind story", "demo")
        .unwrap();
    let second = orion
        .conscious_cycle(["Hello".as_bytes()], "Harm nobody", "demo")
        .unwrap();

    assert_eq!(first.reflection.lines().filter(|l| l.starts_with("Conscious cycle")).count(), 1);
    assert_eq!(second.reflection.lines().filter(|l| l.starts_with("Conscious cycle")).count(), 2);
    assert_eq!(orion.memory().len(), 2);
    assert_eq!(orion.recent_reflections().len(), 2);
}

#[test]
fn foreign_traces_do_not_enter_the_reflection() {
    let mut memory = SymbolicMemory::new();
    memory.store(MemoryTrace::new("Publication on demo", "a poem").with_tag(Tag::Publication));
    assert_eq!(memory.weave_story(&[Tag::Reflection]), EMPTY_STORY);

    let mut orion = OrionNova::new(
        SensoryInterface::new(),
        EthicalCore::default(),
        memory,
        ArtisticVoice::new(PoeticModel),
        ActionBody::new(MemoryPublisher::default()),
    );
    let result = orion
        .conscious_cycle(["Hello".as_bytes()], "Tell a kind story", "demo")
        .unwrap();

    assert!(!result.reflection.contains("a poem"));
    assert_eq!(orion.memory().len(), 2);
}

#[test]
fn orion_from_config_uses_configured_language() {
    let config = OrionConfig::from_toml_str("[sensory]\ndefault_language = \"pt-BR\"\n").unwrap();
    let mut orion = OrionNova::from_config(&config, PoeticModel, MemoryPublisher::default()).unwrap();

    let result = orion
        .conscious_cycle(["Olá".as_bytes()], "Contar uma fábula", "demo")
        .unwrap();

    assert_eq!(result.sensory_input.language, "pt-BR");
    assert!(orion.memory().recall(Some(&Tag::language("pt-BR")), 1).len() == 1);
}
