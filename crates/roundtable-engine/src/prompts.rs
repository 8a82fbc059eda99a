//! Prompt builders.
//!
//! All prompt wording lives here as data. The orchestrator, selector, and
//! synthesizers call these builders so protocol variants differ only in
//! configuration, never in forked modules.

use roundtable_models::{render_transcript, AgentName, AgentProfile, Turn, ALL_AGENTS};

/// Shared preamble for every debate turn.
pub const DEBATE_SYSTEM_PROMPT: &str = "You are simulating a multi-agent debate. Each agent has a defined personality and expertise. They will respond to the PRD and to each other in turns. Be direct, professional, and assertive. In the first round, provide your initial analysis of the PRD. In the second round, respond to other agents' points and refine your position. Reference specific points made by other agents when relevant. Limit each message to 3-4 sentences.";

/// JSON array of every allowed role name, for selection prompts.
fn allowed_roles_json() -> String {
    let names: Vec<String> = ALL_AGENTS.iter().map(|a| format!("\"{}\"", a)).collect();
    format!("[{}]", names.join(", "))
}

/// Prompt asking the oracle to pick a debate panel for a PRD.
pub fn selection_prompt(prd: &str) -> String {
    format!(
        "Given the following Product Requirement Document (PRD), return a STRICT JSON array of roles that should debate it.\n\
         ONLY use these roles: {roles}.\n\
         \n\
         PRD:\n\
         {prd}\n\
         \n\
         Respond ONLY with valid JSON. Example:\n\
         [\"UX Lead\", \"Backend Engineer\"]",
        roles = allowed_roles_json(),
        prd = prd,
    )
}

/// Prompt for one incremental debate turn.
pub fn debate_turn_prompt(prd: &str, profile: &AgentProfile, transcript: &[Turn]) -> String {
    let previous = if transcript.is_empty() {
        "None".to_string()
    } else {
        render_transcript(transcript)
    };

    format!(
        "{system}\n\
         \n\
         Product Requirement Document:\n\
         {prd}\n\
         \n\
         Agent: {name}\n\
         Persona: {persona}\n\
         \n\
         Previous Debate:\n\
         {previous}\n\
         \n\
         {name}, what is your message in this round?",
        system = DEBATE_SYSTEM_PROMPT,
        prd = prd,
        name = profile.name,
        persona = profile.persona,
        previous = previous,
    )
}

/// Prompt asking for an entire multi-round transcript in one call.
///
/// The oracle is told the exact speaking order and the 1-based round
/// numbering; its output is still validated, never trusted.
pub fn structured_debate_prompt(prd: &str, agents: &[AgentName], rounds: u32) -> String {
    let order: Vec<String> = agents.iter().map(|a| format!("\"{}\"", a)).collect();
    let personas: Vec<String> = agents
        .iter()
        .map(|a| format!("- {}: {}", a, a.profile().persona))
        .collect();

    format!(
        "{system}\n\
         \n\
         Product Requirement Document:\n\
         {prd}\n\
         \n\
         Agents and personas:\n\
         {personas}\n\
         \n\
         Simulate {rounds} round(s) of debate. In every round the agents must speak exactly once each, in this exact order: [{order}].\n\
         \n\
         Respond ONLY with a STRICT JSON array covering every round. Each element must be an object with exactly these fields:\n\
         {{\"name\": \"<agent role>\", \"message\": \"<what the agent says>\", \"round\": <1-based round number>}}\n\
         \n\
         Do not include any text outside the JSON array.",
        system = DEBATE_SYSTEM_PROMPT,
        prd = prd,
        personas = personas.join("\n"),
        rounds = rounds,
        order = order.join(", "),
    )
}

/// Prompt asking for the consolidated improved PRD.
pub fn synthesis_prompt(prd: &str, transcript: &[Turn]) -> String {
    format!(
        "As a product manager, synthesize a comprehensive improved PRD incorporating expert feedback.\n\
         \n\
         Original PRD:\n\
         {prd}\n\
         \n\
         Expert Feedback:\n\
         {feedback}\n\
         \n\
         Write in plain text, no markdown or special formatting, generate an improved PRD with this structure:\n\
         \n\
         [Project Name]\n\
         \n\
         1. Overview\n\
         - Product vision and goals\n\
         - Target audience and user personas\n\
         - Market positioning and value proposition\n\
         - Success metrics and KPIs\n\
         \n\
         2. Features and Requirements\n\
         - Core functionality and capabilities\n\
         - Technical specifications and architecture\n\
         - User experience and interface requirements\n\
         - Performance and scalability considerations\n\
         - Security and compliance needs\n\
         \n\
         3. Implementation\n\
         - Development priorities\n\
         - Technical constraints\n\
         - Risk mitigation\n\
         - Integration requirements\n\
         \n\
         Ensure the PRD is detailed yet concise, incorporating key points from the expert debate.",
        prd = prd,
        feedback = render_transcript(transcript),
    )
}

/// Prompt asking for an operational rollout plan for a finalized PRD.
pub fn deployment_plan_prompt(prd: &str) -> String {
    format!(
        "As a technical project manager, analyze this PRD and create a detailed deployment suggestion plan. Include:\n\
         \n\
         1. Timeline and Phases\n\
         2. Resource Requirements\n\
         3. Technical Dependencies\n\
         4. Risk Mitigation Steps\n\
         5. Testing Strategy\n\
         6. Rollout Strategy\n\
         \n\
         PRD Content:\n\
         {prd}\n\
         \n\
         Provide a structured, practical deployment plan that can be implemented by the development team. Write in plain text without markdown formatting.",
        prd = prd,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_models::Turn;

    #[test]
    fn test_selection_prompt_lists_all_roles() {
        let prompt = selection_prompt("Build a thing");
        for agent in ALL_AGENTS {
            assert!(prompt.contains(agent.as_str()), "missing {}", agent);
        }
        assert!(prompt.contains("STRICT JSON array"));
    }

    #[test]
    fn test_turn_prompt_empty_transcript_says_none() {
        let prompt = debate_turn_prompt("PRD text", AgentName::UxLead.profile(), &[]);
        assert!(prompt.contains("Previous Debate:\nNone"));
        assert!(prompt.contains("UX Lead, what is your message in this round?"));
    }

    #[test]
    fn test_turn_prompt_renders_history() {
        let history = vec![Turn::new(AgentName::BackendEngineer, "Won't scale.")];
        let prompt = debate_turn_prompt("PRD text", AgentName::UxLead.profile(), &history);
        assert!(prompt.contains("Backend Engineer: Won't scale."));
    }

    #[test]
    fn test_structured_prompt_declares_order_and_rounds() {
        let agents = [AgentName::UxLead, AgentName::FinanceAnalyst];
        let prompt = structured_debate_prompt("PRD text", &agents, 2);
        assert!(prompt.contains("[\"UX Lead\", \"Finance Analyst\"]"));
        assert!(prompt.contains("Simulate 2 round(s)"));
        assert!(prompt.contains("\"round\""));
    }
}
