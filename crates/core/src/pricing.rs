use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::plan::Plan;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn from_yearly_flag(is_yearly: bool) -> Self {
        if is_yearly {
            Self::Yearly
        } else {
            Self::Monthly
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    pub fn period_label(self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => f.write_str("monthly"),
            Self::Yearly => f.write_str("yearly"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported billing cycle `{0}` (expected monthly|yearly)")]
pub struct UnknownBillingCycle(pub String);

impl FromStr for BillingCycle {
    type Err = UnknownBillingCycle;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" | "annual" => Ok(Self::Yearly),
            other => Err(UnknownBillingCycle(other.to_string())),
        }
    }
}

pub fn price_for(plan: &Plan, cycle: BillingCycle) -> Decimal {
    match cycle {
        BillingCycle::Monthly => plan.monthly_price,
        BillingCycle::Yearly => plan.yearly_price,
    }
}

/// What a yearly subscriber saves against twelve monthly payments.
pub fn yearly_savings(plan: &Plan) -> Decimal {
    plan.monthly_price * Decimal::from(12) - plan.yearly_price
}

/// Price block of a plan card for the selected billing cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTag {
    pub amount: Decimal,
    pub period: String,
    /// Present only in yearly mode.
    pub savings: Option<Decimal>,
}

impl PriceTag {
    pub fn for_plan(plan: &Plan, cycle: BillingCycle) -> Self {
        let savings = match cycle {
            BillingCycle::Monthly => None,
            BillingCycle::Yearly => Some(yearly_savings(plan).round_dp(2)),
        };

        Self { amount: price_for(plan, cycle), period: cycle.period_label().to_string(), savings }
    }

    /// `$190/year`
    pub fn headline(&self) -> String {
        format!("${}/{}", self.amount.normalize(), self.period)
    }

    /// `$38.00 saved annually`
    pub fn savings_line(&self) -> Option<String> {
        self.savings.map(|savings| format!("${savings:.2} saved annually"))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::catalog::Catalog;
    use crate::domain::plan::PlanId;

    use super::{price_for, yearly_savings, BillingCycle, PriceTag};

    fn pro() -> crate::domain::plan::Plan {
        Catalog::standard().find(&PlanId("pro".to_string())).cloned().expect("pro plan exists")
    }

    #[test]
    fn price_follows_billing_cycle() {
        let plan = pro();
        assert_eq!(price_for(&plan, BillingCycle::Monthly), Decimal::new(19, 0));
        assert_eq!(price_for(&plan, BillingCycle::Yearly), Decimal::new(190, 0));
    }

    #[test]
    fn yearly_savings_compares_against_twelve_months() {
        assert_eq!(yearly_savings(&pro()), Decimal::new(38, 0));
    }

    #[test]
    fn savings_only_shown_for_yearly_tags() {
        let plan = pro();
        let monthly = PriceTag::for_plan(&plan, BillingCycle::Monthly);
        let yearly = PriceTag::for_plan(&plan, BillingCycle::Yearly);

        assert_eq!(monthly.headline(), "$19/month");
        assert_eq!(monthly.savings_line(), None);
        assert_eq!(yearly.headline(), "$190/year");
        assert_eq!(yearly.savings_line().as_deref(), Some("$38.00 saved annually"));
    }

    #[test]
    fn cycle_parses_and_toggles() {
        assert_eq!("Yearly".parse::<BillingCycle>(), Ok(BillingCycle::Yearly));
        assert!("weekly".parse::<BillingCycle>().is_err());
        assert_eq!(BillingCycle::Monthly.toggled(), BillingCycle::Yearly);
        assert_eq!(BillingCycle::from_yearly_flag(false), BillingCycle::Monthly);
    }
}
