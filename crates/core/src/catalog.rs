use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::domain::feature::{FeatureCategory, FeatureRow, FeatureValue};
use crate::domain::plan::{CallToAction, CtaVariant, Plan, PlanId};
use crate::domain::testimonial::Testimonial;
use crate::errors::DomainError;

/// Display name used when a plan id has no entry in the catalog.
pub const FALLBACK_PLAN_NAME: &str = "Pro";

pub const PAID_TRIAL_DAYS: u32 = 14;

/// Immutable reference data for the pricing page. Built once and shared by
/// reference; nothing mutates it after construction.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    plans: Vec<Plan>,
    features: Vec<FeatureRow>,
    testimonials: Vec<Testimonial>,
}

impl Catalog {
    pub fn new(
        plans: Vec<Plan>,
        features: Vec<FeatureRow>,
        testimonials: Vec<Testimonial>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for plan in &plans {
            if !seen.insert(plan.id.clone()) {
                return Err(DomainError::DuplicatePlan(plan.id.clone()));
            }
        }

        if let Some(row) = features.iter().find(|row| row.values.len() != plans.len()) {
            return Err(DomainError::FeatureArity {
                feature: row.name.clone(),
                expected: plans.len(),
                actual: row.values.len(),
            });
        }

        Ok(Self { plans, features, testimonials })
    }

    /// The catalog shipped with the pricing page.
    pub fn standard() -> Self {
        Self {
            plans: standard_plans(),
            features: standard_features(),
            testimonials: standard_testimonials(),
        }
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn features(&self) -> &[FeatureRow] {
        &self.features
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn find(&self, plan_id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|plan| &plan.id == plan_id)
    }

    /// Recommendations may name a tier the catalog no longer carries; callers
    /// get a stable label instead of a failure.
    pub fn plan_name_or_default(&self, plan_id: &PlanId) -> &str {
        self.find(plan_id).map(|plan| plan.name.as_str()).unwrap_or(FALLBACK_PLAN_NAME)
    }
}

fn plan(
    id: &str,
    name: &str,
    description: &str,
    monthly: i64,
    yearly: i64,
    features: &[&str],
    cta: (&str, CtaVariant),
) -> Plan {
    Plan {
        id: PlanId(id.to_string()),
        name: name.to_string(),
        description: description.to_string(),
        monthly_price: Decimal::new(monthly, 0),
        yearly_price: Decimal::new(yearly, 0),
        features: features.iter().map(|feature| feature.to_string()).collect(),
        popular: false,
        best_value: false,
        cta: CallToAction { label: cta.0.to_string(), variant: cta.1 },
        trial_days: None,
        audience: None,
    }
}

fn standard_plans() -> Vec<Plan> {
    let free = Plan {
        audience: Some("Individuals".to_string()),
        ..plan(
            "free",
            "Free",
            "Perfect for individuals just getting started",
            0,
            0,
            &["1 user", "5 GB storage", "Basic analytics", "24/7 email support"],
            ("Get Started", CtaVariant::Outline),
        )
    };

    let pro = Plan {
        popular: true,
        trial_days: Some(PAID_TRIAL_DAYS),
        audience: Some("Small teams".to_string()),
        ..plan(
            "pro",
            "Pro",
            "For small teams and growing businesses",
            19,
            190,
            &[
                "5 users",
                "50 GB storage",
                "Advanced analytics",
                "API access",
                "Priority email support",
            ],
            ("Upgrade Now", CtaVariant::Default),
        )
    };

    let business = Plan {
        best_value: true,
        trial_days: Some(PAID_TRIAL_DAYS),
        audience: Some("Growing companies".to_string()),
        ..plan(
            "business",
            "Business",
            "For larger teams with advanced needs",
            49,
            490,
            &[
                "15 users",
                "250 GB storage",
                "Advanced analytics",
                "API access",
                "Custom branding",
                "SSO integration",
                "Priority 24/7 support",
            ],
            ("Upgrade Now", CtaVariant::Default),
        )
    };

    let enterprise = Plan {
        trial_days: Some(PAID_TRIAL_DAYS),
        audience: Some("Large organizations".to_string()),
        ..plan(
            "enterprise",
            "Enterprise",
            "Custom solutions for large organizations",
            99,
            990,
            &[
                "Unlimited users",
                "Unlimited storage",
                "Custom analytics dashboard",
                "Dedicated account manager",
                "Custom onboarding",
                "Audit logs",
                "24/7 phone support",
            ],
            ("Contact Sales", CtaVariant::Enterprise),
        )
    };

    vec![free, pro, business, enterprise]
}

fn texts(values: [&str; 4]) -> Vec<FeatureValue> {
    values.into_iter().map(FeatureValue::from).collect()
}

fn flags(values: [bool; 4]) -> Vec<FeatureValue> {
    values.into_iter().map(FeatureValue::from).collect()
}

fn standard_features() -> Vec<FeatureRow> {
    use FeatureCategory::{Analytics, Basic, Security, Support};

    vec![
        FeatureRow::new(
            "Number of Users",
            Basic,
            texts(["1 user", "5 users", "15 users", "Unlimited"]),
        ),
        FeatureRow::new("Storage Space", Basic, texts(["5 GB", "50 GB", "250 GB", "Unlimited"])),
        FeatureRow::new(
            "Support Response Time",
            Support,
            texts(["48 hours", "24 hours", "12 hours", "1 hour"]),
        )
        .with_description("Target time to first response on a support ticket"),
        FeatureRow::new("API Access", Basic, flags([false, true, true, true])),
        FeatureRow::new("Custom Branding", Basic, flags([false, false, true, true])).advanced(),
        FeatureRow::new("Advanced Analytics", Analytics, flags([false, false, true, true]))
            .advanced(),
        FeatureRow::new("Dedicated Account Manager", Support, flags([false, false, false, true]))
            .advanced(),
        FeatureRow::new("Priority Support", Support, flags([false, false, true, true])),
        FeatureRow::new("SSO Integration", Security, flags([false, false, true, true]))
            .with_description("Single sign-on through your identity provider")
            .advanced(),
        FeatureRow::new("Audit Logs", Security, flags([false, false, true, true])).advanced(),
    ]
}

fn testimonial(
    id: &str,
    name: &str,
    role: &str,
    company: &str,
    quote: &str,
    rating: u8,
) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        avatar_url: None,
        quote: quote.to_string(),
        rating,
    }
}

fn standard_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "1",
            "Alex Morgan",
            "Marketing Director",
            "TechCorp",
            "Switching to this platform has transformed our team's productivity. The Business plan provides all the features we need at a fraction of the cost of competitors.",
            5,
        ),
        testimonial(
            "2",
            "Jamie Chen",
            "Startup Founder",
            "InnovateLabs",
            "As a startup founder, I appreciate the value the Pro plan offers. It's the perfect balance of features and affordability as we scale our business.",
            4,
        ),
        testimonial(
            "3",
            "Sam Wilson",
            "Product Manager",
            "GrowthX",
            "The Enterprise tier has everything our large team needs. The dedicated support alone is worth the investment. Highly recommend!",
            5,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use crate::domain::feature::{FeatureCategory, FeatureRow, FeatureValue};
    use crate::domain::plan::{PlanId, Tier};
    use crate::errors::DomainError;

    use super::Catalog;

    #[test]
    fn standard_catalog_satisfies_its_own_invariants() {
        let standard = Catalog::standard();
        let rebuilt = Catalog::new(
            standard.plans().to_vec(),
            standard.features().to_vec(),
            standard.testimonials().to_vec(),
        );

        assert!(rebuilt.is_ok());
        assert_eq!(standard.plans().len(), 4);
        assert_eq!(standard.features().len(), 10);
        assert_eq!(standard.testimonials().len(), 3);
    }

    #[test]
    fn standard_plans_follow_tier_order() {
        let catalog = Catalog::standard();
        let ids: Vec<PlanId> = catalog.plans().iter().map(|plan| plan.id.clone()).collect();
        let tiers: Vec<PlanId> = Tier::ALL.iter().map(|tier| tier.plan_id()).collect();
        assert_eq!(ids, tiers);
    }

    #[test]
    fn rejects_rows_with_wrong_value_count() {
        let standard = Catalog::standard();
        let mut features = standard.features().to_vec();
        features.push(FeatureRow::new(
            "Webhooks",
            FeatureCategory::Basic,
            vec![FeatureValue::Flag(false), FeatureValue::Flag(true)],
        ));

        let error = Catalog::new(standard.plans().to_vec(), features, Vec::new())
            .expect_err("arity mismatch should be rejected");
        assert_eq!(
            error,
            DomainError::FeatureArity { feature: "Webhooks".to_string(), expected: 4, actual: 2 }
        );
    }

    #[test]
    fn rejects_duplicate_plan_ids() {
        let standard = Catalog::standard();
        let mut plans = standard.plans().to_vec();
        plans.push(plans[1].clone());

        let error = Catalog::new(plans, Vec::new(), Vec::new()).expect_err("duplicate id");
        assert_eq!(error, DomainError::DuplicatePlan(PlanId("pro".to_string())));
    }

    #[test]
    fn unknown_plan_ids_fall_back_to_default_label() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.plan_name_or_default(&PlanId("business".to_string())), "Business");
        assert_eq!(catalog.plan_name_or_default(&PlanId("starter".to_string())), "Pro");

        let empty = Catalog::default();
        assert_eq!(empty.plan_name_or_default(&Tier::Enterprise.plan_id()), "Pro");
    }
}
