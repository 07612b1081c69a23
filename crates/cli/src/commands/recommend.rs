use subscripter_core::catalog::Catalog;
use subscripter_core::domain::plan::Tier;
use subscripter_core::quiz::{score_answers, ScoreTable};
use tracing::info;

use super::CommandResult;

pub fn run(answers: &[String]) -> CommandResult {
    let scores = match score_answers(answers) {
        Ok(scores) => scores,
        Err(error) => return CommandResult::domain_failure("recommend", error),
    };
    let tier = scores.best();

    info!(
        event_name = "quiz.recommendation.computed",
        tier = tier.as_str(),
        answers = answers.len(),
        "recommendation computed"
    );

    CommandResult::success("recommend", summary(&Catalog::standard(), tier, &scores))
}

/// `recommended: Pro (pro); scores: free=1 pro=5 business=2 enterprise=0`
pub(crate) fn summary(catalog: &Catalog, tier: Tier, scores: &ScoreTable) -> String {
    let breakdown = scores
        .iter()
        .map(|(tier, score)| format!("{tier}={score}"))
        .collect::<Vec<_>>()
        .join(" ");
    let name = catalog.plan_name_or_default(&tier.plan_id());
    format!("recommended: {name} ({tier}); scores: {breakdown}")
}
