use crate::domain::plan::Tier;
use crate::errors::DomainError;

use super::questions::{Question, QUESTIONS, QUESTION_COUNT};
use super::scoring::recommend;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizStep {
    Next(&'static Question),
    Recommended(Tier),
}

/// Progress through the three-question quiz for one visitor.
///
/// Scoring runs exactly once, when the third answer is recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSession {
    answers: Vec<String>,
    recommendation: Option<Tier>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        if self.recommendation.is_some() {
            return None;
        }
        QUESTIONS.get(self.answers.len())
    }

    /// 1-based number of the question being asked.
    pub fn question_number(&self) -> usize {
        (self.answers.len() + 1).min(QUESTION_COUNT)
    }

    pub fn progress_percent(&self) -> u8 {
        let current = self.question_number();
        ((current * 100 + QUESTION_COUNT / 2) / QUESTION_COUNT) as u8
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn recommendation(&self) -> Option<Tier> {
        self.recommendation
    }

    pub fn is_complete(&self) -> bool {
        self.recommendation.is_some()
    }

    pub fn select(&mut self, option: &str) -> Result<QuizStep, DomainError> {
        let question = self.current_question().ok_or(DomainError::QuizAlreadyComplete)?;
        if !question.offers(option) {
            return Err(DomainError::UnknownQuizOption {
                question: usize::from(question.id),
                option: option.to_string(),
            });
        }

        self.answers.push(option.to_string());

        if self.answers.len() < QUESTION_COUNT {
            return Ok(QuizStep::Next(&QUESTIONS[self.answers.len()]));
        }

        let tier = recommend(&self.answers)?;
        self.recommendation = Some(tier);
        Ok(QuizStep::Recommended(tier))
    }

    /// Picks the option at `index` (0-based) of the current question.
    pub fn select_index(&mut self, index: usize) -> Result<QuizStep, DomainError> {
        let question = self.current_question().ok_or(DomainError::QuizAlreadyComplete)?;
        let option = question.options.get(index).copied().ok_or_else(|| {
            DomainError::UnknownQuizOption {
                question: usize::from(question.id),
                option: format!("#{}", index + 1),
            }
        })?;
        self.select(option)
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.recommendation = None;
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::plan::Tier;
    use crate::errors::DomainError;
    use crate::quiz::questions::{QUESTIONS, TEAM_SOLO};

    use super::{QuizSession, QuizStep};

    #[test]
    fn walks_three_questions_then_recommends() {
        let mut session = QuizSession::new();
        assert_eq!(session.current_question(), Some(&QUESTIONS[0]));
        assert_eq!(session.progress_percent(), 33);

        assert_eq!(session.select("Just me"), Ok(QuizStep::Next(&QUESTIONS[1])));
        assert_eq!(session.progress_percent(), 67);
        assert_eq!(session.select("Basic needs"), Ok(QuizStep::Next(&QUESTIONS[2])));
        assert_eq!(session.progress_percent(), 100);
        assert_eq!(session.select("Not important"), Ok(QuizStep::Recommended(Tier::Free)));

        assert!(session.is_complete());
        assert_eq!(session.recommendation(), Some(Tier::Free));
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn no_recommendation_before_the_third_answer() {
        let mut session = QuizSession::new();
        session.select_index(3).expect("15+ people");
        session.select_index(3).expect("enterprise-grade");

        assert_eq!(session.recommendation(), None);
        assert_eq!(session.select_index(3), Ok(QuizStep::Recommended(Tier::Enterprise)));
    }

    #[test]
    fn rejects_options_from_other_questions() {
        let mut session = QuizSession::new();
        let error = session.select("Basic needs").expect_err("not a team size option");

        assert_eq!(
            error,
            DomainError::UnknownQuizOption { question: 1, option: "Basic needs".to_string() }
        );
        assert!(session.answers().is_empty());
        assert!(session.select_index(4).is_err());
    }

    #[test]
    fn completed_quiz_must_be_reset_before_reuse() {
        let mut session = QuizSession::new();
        for _ in 0..3 {
            session.select_index(0).expect("valid option");
        }

        assert_eq!(session.select(TEAM_SOLO), Err(DomainError::QuizAlreadyComplete));

        session.reset();
        assert_eq!(session.answers().len(), 0);
        assert_eq!(session.recommendation(), None);
        assert_eq!(session.current_question(), Some(&QUESTIONS[0]));
    }
}
