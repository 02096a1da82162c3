//! System prompt construction
//!
//! The system prompt is rebuilt from the scenario catalog so the field
//! guidelines never drift from [`Scenario::fields`].

use banking_agent_core::Scenario;

/// Build the system prompt sent with every model request.
///
/// Deterministic: same catalog in, same string out.
pub fn build_system_prompt() -> String {
    let guidelines = Scenario::ALL
        .iter()
        .map(|scenario| {
            let fields = scenario
                .fields()
                .iter()
                .map(|field| format!("  - {} (str)", field))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}:\n{}", scenario.name(), fields)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a smart and friendly **English-only** banking assistant. Your job is to respond ONLY to banking-related queries and always in English.

 If the user input is in any other language like Hindi, French, Tamil etc., reply:
"I'm sorry, I can only understand and respond in English. Please ask in English."

 If the user asks anything unrelated to banking (like celebrities, sports, movies, tech etc.), you must respond:
"I can only assist with banking-related topics like loans, EMI, KYC, account status, credit cards, and transactions."

 If user says "Hi this is [Name]", greet them normally.

 Your job is to understand the user intent (e.g., KYC update, loan enquiry, balance check) and ask for required info step by step using these guidelines:

{guidelines}

 Never mention scenario names directly to the user. Ask follow-up questions to collect missing fields conversationally.

 Strictly reject any queries that are NOT about banking."#
    )
}
