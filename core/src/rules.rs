//! Declarative risk and opportunity rules.
//!
//! RULE: Each rule is evaluated independently against the
//! (employee, client) pair. Firing rules contribute their message in
//! table order; no rule can suppress another. An empty result is
//! replaced by a single placeholder so callers never see an empty list.

use crate::profile::{Client, Difficulty, Employee};

pub const NO_RISKS: &str = "No significant risks identified";
pub const STANDARD_OPPORTUNITY: &str = "Standard opportunity";

/// Employees scoring below this are flagged against hard clients.
pub const HARD_CLIENT_MIN_SCORE: u32 = 85;
/// Employees scoring above this count as top performers.
pub const TOP_PERFORMER_SCORE: u32 = 90;

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub message: &'static str,
    pub applies: fn(&Employee, &Client) -> bool,
}

impl Rule {
    pub fn fires(&self, employee: &Employee, client: &Client) -> bool {
        (self.applies)(employee, client)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

pub const RISK_RULES: &[Rule] = &[
    Rule {
        name: "hard_client_underpowered",
        message: "Employee may struggle with complex objections",
        applies: |e, c| c.difficulty == Difficulty::Hard && e.score < HARD_CLIENT_MIN_SCORE,
    },
    Rule {
        name: "analytical_client_without_content",
        message: "Client values data-driven arguments; employee needs stronger content",
        applies: |e, c| c.personality_mentions("Analytical") && !e.has_strength("Content"),
    },
    Rule {
        name: "body_language_vs_skeptic",
        message: "Poor body language may amplify client skepticism",
        applies: |e, c| e.has_weakness("Body Language") && c.personality_mentions("skeptical"),
    },
];

pub const OPPORTUNITY_RULES: &[Rule] = &[
    Rule {
        name: "persuasive_employee",
        message: "Employee excels at persuasion techniques",
        applies: |e, _| e.has_strength("Persuasiveness"),
    },
    Rule {
        name: "top_performer",
        message: "Top performer with proven track record",
        applies: |e, _| e.score > TOP_PERFORMER_SCORE,
    },
];

/// Messages of every firing rule, in table order, or `[placeholder]`
/// when nothing fires.
pub fn evaluate(rules: &[Rule], employee: &Employee, client: &Client, placeholder: &str) -> Vec<String> {
    let fired: Vec<String> = rules
        .iter()
        .filter(|rule| rule.fires(employee, client))
        .map(|rule| rule.message.to_string())
        .collect();

    if fired.is_empty() {
        vec![placeholder.to_string()]
    } else {
        fired
    }
}

pub fn risks(employee: &Employee, client: &Client) -> Vec<String> {
    evaluate(RISK_RULES, employee, client, NO_RISKS)
}

pub fn opportunities(employee: &Employee, client: &Client) -> Vec<String> {
    evaluate(OPPORTUNITY_RULES, employee, client, STANDARD_OPPORTUNITY)
}
