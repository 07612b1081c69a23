use std::io::{self, BufRead, Write};

use subscripter_core::catalog::Catalog;
use subscripter_core::domain::plan::Tier;
use subscripter_core::pricing::{BillingCycle, PriceTag};
use subscripter_core::quiz::{Question, QuizSession, QuizStep, QUESTION_COUNT};
use subscripter_core::DomainError;
use tracing::info;

use super::CommandResult;

pub fn run() -> CommandResult {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(stdin.lock(), stdout.lock())
}

/// Asks each question on `output` and reads the chosen option number from
/// `input`. Running out of input before the last answer is an incomplete quiz.
pub fn run_with_io<R: BufRead, W: Write>(mut input: R, mut output: W) -> CommandResult {
    let catalog = Catalog::standard();
    let mut session = QuizSession::new();

    let tier = loop {
        let Some(question) = session.current_question() else {
            return CommandResult::domain_failure("quiz", DomainError::QuizAlreadyComplete);
        };
        if let Err(error) = ask(&mut output, &session, question) {
            return CommandResult::io_failure("quiz", error);
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                let error = DomainError::IncompleteQuiz {
                    expected: QUESTION_COUNT,
                    actual: session.answers().len(),
                };
                return CommandResult::domain_failure("quiz", error);
            }
            Ok(_) => {}
            Err(error) => return CommandResult::io_failure("quiz", error),
        }

        let choice = match line.trim().parse::<usize>() {
            Ok(number) if (1..=question.options.len()).contains(&number) => number - 1,
            _ => {
                let count = question.options.len();
                let hint = format!("please answer with a number from 1 to {count}");
                if let Err(error) = writeln!(output, "{hint}") {
                    return CommandResult::io_failure("quiz", error);
                }
                continue;
            }
        };

        match session.select_index(choice) {
            Ok(QuizStep::Next(_)) => continue,
            Ok(QuizStep::Recommended(tier)) => break tier,
            Err(error) => return CommandResult::domain_failure("quiz", error),
        }
    };

    info!(
        event_name = "quiz.recommendation.computed",
        tier = tier.as_str(),
        answers = session.answers().len(),
        "recommendation computed"
    );

    let message = recommendation_message(&catalog, tier);
    if let Err(error) = writeln!(output, "\n{message}") {
        return CommandResult::io_failure("quiz", error);
    }

    CommandResult { exit_code: 0, output: String::new() }
}

fn ask<W: Write>(output: &mut W, session: &QuizSession, question: &Question) -> io::Result<()> {
    writeln!(
        output,
        "\nQuestion {} of {} ({}%)",
        session.question_number(),
        QUESTION_COUNT,
        session.progress_percent()
    )?;
    writeln!(output, "{}", question.text)?;
    for (index, option) in question.options.iter().enumerate() {
        writeln!(output, "  {}. {option}", index + 1)?;
    }
    write!(output, "> ")?;
    output.flush()
}

fn recommendation_message(catalog: &Catalog, tier: Tier) -> String {
    let plan_id = tier.plan_id();
    let name = catalog.plan_name_or_default(&plan_id);
    match catalog.find(&plan_id) {
        Some(plan) => {
            let price = PriceTag::for_plan(plan, BillingCycle::Monthly).headline();
            format!("We recommend the {name} plan ({price}): {}", plan.description)
        }
        None => format!("We recommend the {name} plan"),
    }
}
