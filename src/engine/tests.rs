use super::*;
use crate::knowledge::{Experience, FaqEntry, Profile, Project, SkillCategory};
use crate::router::COMPENSATION_RESPONSE;

fn sample_knowledge() -> KnowledgeBase {
    KnowledgeBase {
        profile: Profile {
            name: "Ada Example".to_string(),
            headline: "Full Stack Developer".to_string(),
            about: "I build web applications.".to_string(),
            location: "Berlin, Germany".to_string(),
            availability: "Available from October".to_string(),
            skills: vec![SkillCategory {
                name: "Frontend".to_string(),
                items: vec!["React".to_string(), "TypeScript".to_string()],
            }],
            ..Profile::default()
        },
        experiences: vec![Experience {
            role: "Frontend Developer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: "Jan 2024".to_string(),
            end_date: "Present".to_string(),
            description: vec!["Shipped the dashboard rewrite".to_string()],
            skills: vec!["React".to_string()],
        }],
        projects: vec![Project {
            title: "Chat Widget".to_string(),
            description: "Embeddable support chat built with React".to_string(),
            technologies: vec!["React".to_string(), "WebSockets".to_string()],
            github: None,
            live: None,
        }],
        faq: vec![FaqEntry {
            question: "What are your main technical strengths?".to_string(),
            answer: "Building reliable frontend architecture and debugging.".to_string(),
            tags: vec!["strengths".to_string()],
        }],
    }
}

fn sample_engine() -> (Arc<RetrievalEngine>, Arc<RwLock<KnowledgeBase>>) {
    let knowledge = Arc::new(RwLock::new(sample_knowledge()));
    let engine = Arc::new(RetrievalEngine::new(
        Arc::clone(&knowledge),
        EngineConfig::default(),
    ));
    (engine, knowledge)
}

#[test]
fn repeated_searches_return_value_equal_results() {
    let (engine, _) = sample_engine();
    let first = engine.search_documents("react projects", 5);
    let second = engine.search_documents("react projects", 5);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn short_query_returns_fixed_score_in_corpus_order() {
    let (engine, _) = sample_engine();
    let results = engine.search_documents("react", 2);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document.id, "bio");
    assert!(results.iter().all(|r| r.score == 0.5));
}

#[test]
fn salary_question_bypasses_ranking() {
    let (engine, _) = sample_engine();
    let context = engine.relevant_context("what is your expected salary", DEFAULT_CONTEXT_LIMIT);
    assert_eq!(context, COMPENSATION_RESPONSE);
}

#[test]
fn technology_question_yields_skills_and_projects() {
    let (engine, _) = sample_engine();
    let context = engine.relevant_context("tell me about your react experience", 3);
    assert!(context.contains("Skills:"));
    assert!(context.contains("Projects:"));
}

#[test]
fn open_ended_question_falls_back_to_retrieval() {
    let (engine, _) = sample_engine();
    let context = engine.relevant_context("what are your main technical strengths", 3);
    assert!(context.contains("What are your main technical strengths?"));
    assert!(!context.contains("No specific information found"));
}

#[test]
fn nonsense_question_gets_the_no_match_message() {
    let (engine, _) = sample_engine();
    let context = engine.relevant_context("asdkjhasdkjh qwerkjqwer", 3);
    assert!(context.contains("No specific information found for 'asdkjhasdkjh qwerkjqwer'"));
}

#[test]
fn context_is_never_empty() {
    let (engine, _) = sample_engine();
    for query in ["", "   ", "a", "!!!", "completely unrelated gibberish zzz"] {
        assert!(!engine.relevant_context(query, 3).is_empty());
    }
}

#[test]
fn refresh_clears_cached_results() {
    let (engine, knowledge) = sample_engine();

    let before = engine.search_documents("chat widget support", 5);
    assert!(!before.is_empty());

    knowledge.write().expect("lock").projects.clear();
    // Still cached: the mutation alone must not affect served results.
    assert_eq!(engine.search_documents("chat widget support", 5), before);

    engine.refresh().expect("refresh should succeed");
    let after = engine.search_documents("chat widget support", 5);
    assert_ne!(after, before);
}

#[test]
fn refresh_stores_a_snapshot_of_the_current_sources() {
    let (engine, knowledge) = sample_engine();
    assert!(engine.freshness_info().is_none());

    engine.refresh().expect("refresh should succeed");
    let stored = engine.freshness_info().expect("snapshot should be stored");

    let recomputed = {
        let kb = knowledge.read().expect("lock");
        crate::freshness::snapshot_of(&kb).expect("snapshot")
    };
    assert!(!stored.sources_differ(&recomputed));
}

#[test]
fn first_tick_stores_baseline_without_rebuilding() {
    let (engine, _) = sample_engine();
    let rebuilt = engine.tick().expect("tick should succeed");
    assert!(!rebuilt);
    assert!(engine.freshness_info().is_some());
}

#[test]
fn tick_rebuilds_only_when_sources_change() {
    let (engine, knowledge) = sample_engine();
    engine.tick().expect("baseline tick");
    assert!(!engine.tick().expect("unchanged tick"));

    knowledge.write().expect("lock").faq.push(FaqEntry {
        question: "Do you mentor?".to_string(),
        answer: "Yes, happily.".to_string(),
        tags: Vec::new(),
    });

    assert!(engine.tick().expect("changed tick"));
    // The rebuild picked up the new document.
    let results = engine.search_documents("do you mentor juniors", 5);
    assert!(results.iter().any(|r| r.document.content.contains("mentor")));
}

#[test]
fn rag_prompt_uses_the_profile_persona() {
    let (engine, _) = sample_engine();
    let prompt = engine.rag_prompt("what do you build?", "some context");
    assert!(prompt.contains("Ada Example's portfolio assistant"));
    assert!(prompt.contains("some context"));
}

#[tokio::test]
async fn monitor_is_gated_on_dev_mode() {
    let knowledge = Arc::new(RwLock::new(sample_knowledge()));
    let engine = Arc::new(RetrievalEngine::new(
        Arc::clone(&knowledge),
        EngineConfig::default(),
    ));
    assert!(engine.spawn_monitor().is_none());

    let dev_engine = Arc::new(RetrievalEngine::new(
        knowledge,
        EngineConfig {
            dev_mode: true,
            ..EngineConfig::default()
        },
    ));
    let handle = dev_engine
        .spawn_monitor()
        .expect("dev mode should spawn the poller");
    handle.abort();
}
