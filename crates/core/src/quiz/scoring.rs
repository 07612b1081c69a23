//! Additive tier scoring for quiz answers.

use std::collections::BTreeMap;

use serde::Serialize;

use super::questions::*;
use crate::domain::plan::Tier;
use crate::errors::DomainError;

/// Tier chosen when no tier scores above zero.
pub const DEFAULT_TIER: Tier = Tier::Pro;

struct AnswerRule {
    option: &'static str,
    awards: &'static [(Tier, u32)],
}

const fn rule(option: &'static str, awards: &'static [(Tier, u32)]) -> AnswerRule {
    AnswerRule { option, awards }
}

// The last rule of each table also applies to answers that match no option.
const TEAM_SIZE_RULES: [AnswerRule; 4] = [
    rule(TEAM_SOLO, &[(Tier::Free, 3), (Tier::Pro, 1)]),
    rule(TEAM_SMALL, &[(Tier::Pro, 3), (Tier::Business, 1)]),
    rule(TEAM_MEDIUM, &[(Tier::Business, 3), (Tier::Enterprise, 1)]),
    rule(TEAM_LARGE, &[(Tier::Enterprise, 3)]),
];

const GOAL_RULES: [AnswerRule; 4] = [
    rule(GOAL_BASIC, &[(Tier::Free, 3), (Tier::Pro, 1)]),
    rule(GOAL_GROWTH, &[(Tier::Pro, 3), (Tier::Business, 1)]),
    rule(GOAL_COLLABORATION, &[(Tier::Business, 3), (Tier::Pro, 1)]),
    rule(GOAL_ENTERPRISE, &[(Tier::Enterprise, 3), (Tier::Business, 1)]),
];

const SUPPORT_RULES: [AnswerRule; 4] = [
    rule(SUPPORT_NOT_IMPORTANT, &[(Tier::Free, 2), (Tier::Pro, 1)]),
    rule(SUPPORT_SOMEWHAT, &[(Tier::Pro, 2), (Tier::Business, 1)]),
    rule(SUPPORT_VERY, &[(Tier::Business, 2), (Tier::Enterprise, 1)]),
    rule(SUPPORT_CRITICAL, &[(Tier::Enterprise, 3)]),
];

const RULE_TABLES: [&[AnswerRule; 4]; QUESTION_COUNT] =
    [&TEAM_SIZE_RULES, &GOAL_RULES, &SUPPORT_RULES];

/// Accumulated points per tier for one scoring run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    scores: BTreeMap<Tier, u32>,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self { scores: Tier::ALL.into_iter().map(|tier| (tier, 0)).collect() }
    }
}

impl ScoreTable {
    pub fn get(&self, tier: Tier) -> u32 {
        self.scores.get(&tier).copied().unwrap_or(0)
    }

    /// Scores in tier enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, u32)> + '_ {
        self.scores.iter().map(|(tier, score)| (*tier, *score))
    }

    fn award(&mut self, tier: Tier, points: u32) {
        *self.scores.entry(tier).or_insert(0) += points;
    }

    /// Highest-scoring tier. Ties go to the tier enumerated first because the
    /// comparison is strict, and an all-zero table keeps [`DEFAULT_TIER`].
    pub fn best(&self) -> Tier {
        let mut highest = 0;
        let mut best = DEFAULT_TIER;

        for (tier, score) in self.iter() {
            if score > highest {
                highest = score;
                best = tier;
            }
        }

        best
    }
}

/// Scores the first three answers. Answers past the third are ignored.
pub fn score_answers<S: AsRef<str>>(answers: &[S]) -> Result<ScoreTable, DomainError> {
    if answers.len() < QUESTION_COUNT {
        return Err(DomainError::IncompleteQuiz {
            expected: QUESTION_COUNT,
            actual: answers.len(),
        });
    }

    let mut table = ScoreTable::default();
    for (answer, rules) in answers.iter().zip(RULE_TABLES) {
        let answer = answer.as_ref();
        let matched = rules.iter().find(|rule| rule.option == answer).unwrap_or(&rules[3]);
        for (tier, points) in matched.awards {
            table.award(*tier, *points);
        }
    }

    Ok(table)
}

/// Best-fit tier for a completed quiz.
pub fn recommend<S: AsRef<str>>(answers: &[S]) -> Result<Tier, DomainError> {
    score_answers(answers).map(|table| table.best())
}
