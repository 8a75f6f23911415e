use super::*;

#[test]
fn prompt_embeds_persona_context_and_query() {
    let prompt = rag_prompt("Ada", "what do you build?", "Projects:\nChat Widget");
    assert!(prompt.starts_with("You are Ada's portfolio assistant."));
    assert!(prompt.contains("Context:\nProjects:\nChat Widget"));
    assert!(prompt.contains("User Question: what do you build?"));
    assert!(prompt.ends_with("Answer:"));
}

#[test]
fn prompt_is_pure() {
    let a = rag_prompt("Ada", "q", "c");
    let b = rag_prompt("Ada", "q", "c");
    assert_eq!(a, b);
}
