#[cfg(test)]
mod tests;

/// Assemble the generation prompt from persona, context, and query.
///
/// A pure string template: no branching, no state. The downstream chat
/// endpoint sends the result to the text-generation model as-is.
#[inline]
pub fn rag_prompt(owner_name: &str, query: &str, context: &str) -> String {
    format!(
        "You are {owner_name}'s portfolio assistant. Answer questions about \
         {owner_name}'s professional background using only the context below.\n\n\
         Context:\n{context}\n\n\
         User Question: {query}\n\n\
         Answer in first person as {owner_name}, in a professional yet \
         conversational tone. If the context does not cover the question, say so \
         and point to related information instead of inventing details.\n\n\
         Answer:"
    )
}
