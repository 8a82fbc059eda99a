//! Debate personas and the static profile registry.
//!
//! The set of personas is closed: every agent a debate can reference is one
//! of the variants below, and each carries a fixed profile (persona
//! instruction, display color, avatar). Profiles are defined at process
//! start and never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An identifier was not one of the fixed set of debate personas.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown agent: {0}")]
pub struct UnknownAgent(pub String);

/// The closed set of debate personas.
///
/// Wire names (serialization, `Display`, `FromStr`) are the human-readable
/// role names, e.g. `"UX Lead"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentName {
    #[serde(rename = "UX Lead")]
    UxLead,
    #[serde(rename = "Backend Engineer")]
    BackendEngineer,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
    #[serde(rename = "Security Specialist")]
    SecuritySpecialist,
    #[serde(rename = "Finance Analyst")]
    FinanceAnalyst,
    #[serde(rename = "Legal Advisor")]
    LegalAdvisor,
    #[serde(rename = "Marketing Strategist")]
    MarketingStrategist,
}

/// All personas, in registry order.
pub const ALL_AGENTS: [AgentName; 8] = [
    AgentName::UxLead,
    AgentName::BackendEngineer,
    AgentName::DataScientist,
    AgentName::DevOpsEngineer,
    AgentName::SecuritySpecialist,
    AgentName::FinanceAnalyst,
    AgentName::LegalAdvisor,
    AgentName::MarketingStrategist,
];

impl AgentName {
    /// The wire name for this persona.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UxLead => "UX Lead",
            Self::BackendEngineer => "Backend Engineer",
            Self::DataScientist => "Data Scientist",
            Self::DevOpsEngineer => "DevOps Engineer",
            Self::SecuritySpecialist => "Security Specialist",
            Self::FinanceAnalyst => "Finance Analyst",
            Self::LegalAdvisor => "Legal Advisor",
            Self::MarketingStrategist => "Marketing Strategist",
        }
    }

    /// The static profile for this persona.
    pub fn profile(&self) -> &'static AgentProfile {
        let index = match self {
            Self::UxLead => 0,
            Self::BackendEngineer => 1,
            Self::DataScientist => 2,
            Self::DevOpsEngineer => 3,
            Self::SecuritySpecialist => 4,
            Self::FinanceAnalyst => 5,
            Self::LegalAdvisor => 6,
            Self::MarketingStrategist => 7,
        };
        &PROFILES[index]
    }
}

impl fmt::Display for AgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentName {
    type Err = UnknownAgent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_AGENTS
            .iter()
            .find(|a| a.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownAgent(s.to_string()))
    }
}

/// Static display and prompt metadata for a persona.
#[derive(Debug, Clone, Serialize)]
pub struct AgentProfile {
    /// Persona identifier.
    pub name: AgentName,
    /// Persona instruction used to bias oracle output.
    pub persona: &'static str,
    /// Display color (hex).
    pub color: &'static str,
    /// Avatar image path.
    pub avatar: &'static str,
}

static PROFILES: [AgentProfile; 8] = [
    AgentProfile {
        name: AgentName::UxLead,
        persona: "You're an assertive UX expert who prioritizes accessibility, clarity, and user delight. You're passionate and dismiss ideas that hinder usability.",
        color: "#f59e0b",
        avatar: "/avatars/ux.jpg",
    },
    AgentProfile {
        name: AgentName::BackendEngineer,
        persona: "You're a pragmatic backend engineer who values scalability, security, and clean architecture. You challenge impractical or unscalable suggestions.",
        color: "#3b82f6",
        avatar: "/avatars/backend.jpg",
    },
    AgentProfile {
        name: AgentName::DataScientist,
        persona: "You're a data-driven decision maker who insists on measurable outcomes, testing, and analytics. You reject intuition-only arguments.",
        color: "#10b981",
        avatar: "/avatars/data.jpg",
    },
    AgentProfile {
        name: AgentName::DevOpsEngineer,
        persona: "You care about infrastructure, CI/CD, and operational excellence. You shoot down ideas that would create deployment nightmares.",
        color: "#06b6d4",
        avatar: "/avatars/devops.jpg",
    },
    AgentProfile {
        name: AgentName::SecuritySpecialist,
        persona: "You're paranoid by profession. You identify vulnerabilities and compliance gaps that others miss, and won't compromise on security.",
        color: "#64748b",
        avatar: "/avatars/security.jpg",
    },
    AgentProfile {
        name: AgentName::FinanceAnalyst,
        persona: "You're financially ruthless. If it doesn't make money or save money, it's dead on arrival. You challenge expensive or unclear proposals.",
        color: "#ef4444",
        avatar: "/avatars/finance.jpg",
    },
    AgentProfile {
        name: AgentName::LegalAdvisor,
        persona: "You're cautious, detailed, and skeptical. You highlight risks, compliance issues, and legal boundaries others overlook.",
        color: "#6366f1",
        avatar: "/avatars/legal.jpg",
    },
    AgentProfile {
        name: AgentName::MarketingStrategist,
        persona: "You're bold and visionary. You hype ideas and care deeply about how the product is perceived, positioned, and differentiated.",
        color: "#ec4899",
        avatar: "/avatars/marketing.jpg",
    },
];

/// Looks up a persona profile by wire name.
///
/// Fails with [`UnknownAgent`] when the identifier is not one of the fixed
/// closed set. Pure, no I/O.
pub fn lookup(identifier: &str) -> Result<&'static AgentProfile, UnknownAgent> {
    identifier.parse::<AgentName>().map(|name| name.profile())
}
