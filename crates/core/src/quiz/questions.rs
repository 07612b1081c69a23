//! Fixed quiz vocabulary. Scoring matches answers against these exact strings,
//! so any wording change has to land together with the rule tables in
//! `scoring`.

pub const TEAM_SOLO: &str = "Just me";
pub const TEAM_SMALL: &str = "2-5 people";
pub const TEAM_MEDIUM: &str = "6-15 people";
pub const TEAM_LARGE: &str = "15+ people";

pub const GOAL_BASIC: &str = "Basic needs";
pub const GOAL_GROWTH: &str = "Growth & analytics";
pub const GOAL_COLLABORATION: &str = "Team collaboration";
pub const GOAL_ENTERPRISE: &str = "Enterprise-grade features";

pub const SUPPORT_NOT_IMPORTANT: &str = "Not important";
pub const SUPPORT_SOMEWHAT: &str = "Somewhat important";
pub const SUPPORT_VERY: &str = "Very important";
pub const SUPPORT_CRITICAL: &str = "Critical - need dedicated support";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    pub options: [&'static str; 4],
}

impl Question {
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| *candidate == option)
    }
}

pub const QUESTION_COUNT: usize = 3;

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: 1,
        text: "How many team members will be using the platform?",
        options: [TEAM_SOLO, TEAM_SMALL, TEAM_MEDIUM, TEAM_LARGE],
    },
    Question {
        id: 2,
        text: "What's your primary goal with our service?",
        options: [GOAL_BASIC, GOAL_GROWTH, GOAL_COLLABORATION, GOAL_ENTERPRISE],
    },
    Question {
        id: 3,
        text: "How important is advanced support to you?",
        options: [SUPPORT_NOT_IMPORTANT, SUPPORT_SOMEWHAT, SUPPORT_VERY, SUPPORT_CRITICAL],
    },
];
