pub mod catalog;
pub mod comparison;
pub mod config;
pub mod domain;
pub mod errors;
pub mod pricing;
pub mod quiz;

pub use catalog::Catalog;
pub use comparison::{filter_rows, highlighted_index, CategoryFilter, ComparisonView, ViewMode};
pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::chat::{ChatMessage, MessageId, Sender};
pub use domain::feature::{FeatureCategory, FeatureRow, FeatureValue};
pub use domain::plan::{Plan, PlanId, Tier};
pub use domain::testimonial::Testimonial;
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use pricing::{BillingCycle, PriceTag};
pub use quiz::{recommend, score_answers, QuizSession, QuizStep, ScoreTable};
