use serde::Serialize;
use subscripter_core::catalog::Catalog;
use subscripter_core::config::AppConfig;
use subscripter_core::domain::plan::Plan;
use subscripter_core::pricing::{BillingCycle, PriceTag};

use super::{render_json, CommandResult};

#[derive(Debug, Serialize)]
struct PlanCard {
    id: String,
    name: String,
    description: String,
    price: String,
    savings: Option<String>,
    badges: Vec<&'static str>,
    features: Vec<String>,
    cta: String,
    trial_days: Option<u32>,
}

#[derive(Debug, Serialize)]
struct PlansReport {
    billing_cycle: BillingCycle,
    plans: Vec<PlanCard>,
}

/// `--yearly` forces yearly pricing; otherwise the configured default cycle applies.
pub fn run(config: &AppConfig, yearly: bool, json_output: bool) -> CommandResult {
    let cycle = if yearly { BillingCycle::Yearly } else { config.pricing.default_cycle };
    let report = build_report(&Catalog::standard(), cycle);

    if json_output {
        return render_json("plans", &report);
    }

    CommandResult::text(render_human(&report))
}

fn build_report(catalog: &Catalog, cycle: BillingCycle) -> PlansReport {
    PlansReport {
        billing_cycle: cycle,
        plans: catalog.plans().iter().map(|plan| plan_card(plan, cycle)).collect(),
    }
}

fn plan_card(plan: &Plan, cycle: BillingCycle) -> PlanCard {
    let tag = PriceTag::for_plan(plan, cycle);
    PlanCard {
        id: plan.id.to_string(),
        name: plan.name.clone(),
        description: plan.description.clone(),
        price: tag.headline(),
        savings: tag.savings_line(),
        badges: plan.badges(),
        features: plan.features.clone(),
        cta: plan.cta.label.clone(),
        trial_days: plan.trial_days,
    }
}

fn render_human(report: &PlansReport) -> String {
    let mut lines = vec![format!("plans ({} billing):", report.billing_cycle)];

    for card in &report.plans {
        lines.push(String::new());
        let badges = if card.badges.is_empty() {
            String::new()
        } else {
            format!(" [{}]", card.badges.join(", "))
        };
        lines.push(format!("{}{badges}: {}", card.name, card.price));
        if let Some(savings) = &card.savings {
            lines.push(format!("  {savings}"));
        }
        lines.push(format!("  {}", card.description));
        for feature in &card.features {
            lines.push(format!("  - {feature}"));
        }
        let trial = card
            .trial_days
            .map(|days| format!(" ({days}-day free trial)"))
            .unwrap_or_default();
        lines.push(format!("  > {}{trial}", card.cta));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use subscripter_core::catalog::Catalog;
    use subscripter_core::pricing::BillingCycle;

    use super::{build_report, render_human};

    #[test]
    fn monthly_cards_have_no_savings() {
        let report = build_report(&Catalog::standard(), BillingCycle::Monthly);

        assert_eq!(report.plans.len(), 4);
        assert!(report.plans.iter().all(|card| card.savings.is_none()));
        assert_eq!(report.plans[1].price, "$19/month");
        assert_eq!(report.plans[1].badges, vec!["Most Popular"]);
    }

    #[test]
    fn yearly_cards_show_savings() {
        let report = build_report(&Catalog::standard(), BillingCycle::Yearly);
        let rendered = render_human(&report);

        assert!(rendered.contains("Business [Best Value]: $490/year"));
        assert!(rendered.contains("$98.00 saved annually"));
    }
}
