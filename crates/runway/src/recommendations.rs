//! Threshold-based advice
//!
//! Reads the derived metrics and matches them against fixed thresholds.
//! Does no calculation of its own beyond formatting.

use runway_core::analysis::{SHORT_RUNWAY_MONTHS, TARGET_RUNWAY_MONTHS};
use runway_core::model::{DerivedMetrics, InputAssumptions, RevenueModel};
use serde::Serialize;

use crate::util::format::{format_currency, format_percent};

/// People cost share above which hiring should be phased
const HIGH_PEOPLE_PCT: f64 = 75.0;
/// People cost share considered normal at seed stage
const HEALTHY_PEOPLE_PCT: f64 = 60.0;
const MIN_ENG_RATIO: f64 = 40.0;
const HIGH_MARKETING_PCT: f64 = 25.0;
const LEAN_MARKETING_PCT: f64 = 5.0;
const MIN_TARGET_HOTELS: u32 = 100;
const MAX_COMMISSION_PCT: f64 = 5.0;
/// Monthly revenue per hotel below which scale is needed
const MIN_REVENUE_PER_HOTEL: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Success,
    Warning,
    Info,
}

impl RecommendationKind {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub message: String,
}

impl Recommendation {
    fn new(kind: RecommendationKind, title: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

fn runway_advice(metrics: &DerivedMetrics) -> Recommendation {
    let runway = metrics.actual_runway;
    if runway < SHORT_RUNWAY_MONTHS {
        Recommendation::new(
            RecommendationKind::Warning,
            "Short Runway",
            "Runway is under 18 months. Most seed-stage startups need 18-24 months to hit \
             their next milestones. Either raise more or cut burn, or expect to be \
             fundraising again within a year.",
        )
    } else if runway < TARGET_RUNWAY_MONTHS {
        Recommendation::new(
            RecommendationKind::Info,
            "Acceptable Runway",
            format!(
                "Runway of {runway:.0} months is acceptable but tight. Aim for 24 months \
                 so there is buffer for slow quarters."
            ),
        )
    } else {
        Recommendation::new(
            RecommendationKind::Success,
            "Strong Runway",
            format!(
                "Runway of {runway:.0} months is strong. There is room to iterate without \
                 fundraising pressure."
            ),
        )
    }
}

fn people_advice(metrics: &DerivedMetrics) -> Option<Recommendation> {
    let pct = format_percent(metrics.people_pct);
    if metrics.people_pct > HIGH_PEOPLE_PCT {
        Some(Recommendation::new(
            RecommendationKind::Warning,
            "High People Costs",
            format!(
                "People costs are {pct} of burn. Consider whether every role is a day-one \
                 hire or whether some can be phased in at months 6-12."
            ),
        ))
    } else if metrics.people_pct > HEALTHY_PEOPLE_PCT {
        Some(Recommendation::new(
            RecommendationKind::Success,
            "Healthy People Allocation",
            format!("People costs are {pct} of burn, normal for a seed-stage startup."),
        ))
    } else {
        None
    }
}

fn engineering_advice(metrics: &DerivedMetrics) -> Recommendation {
    let pct = format_percent(metrics.eng_ratio);
    if metrics.eng_ratio < MIN_ENG_RATIO {
        Recommendation::new(
            RecommendationKind::Warning,
            "Low Engineering Ratio",
            format!(
                "Engineering is only {pct} of the team. An integration-heavy product \
                 (PMS connectors, real-time availability) likely needs 50-60% engineers \
                 at this stage."
            ),
        )
    } else {
        Recommendation::new(
            RecommendationKind::Success,
            "Good Engineering Ratio",
            format!(
                "Engineering is {pct} of the team, a good ratio for a technical product."
            ),
        )
    }
}

fn marketing_advice(inputs: &InputAssumptions, metrics: &DerivedMetrics) -> Option<Recommendation> {
    if metrics.marketing_pct > HIGH_MARKETING_PCT {
        Some(Recommendation::new(
            RecommendationKind::Warning,
            "High Marketing Spend",
            format!(
                "Marketing is {} of spend. Early growth should be mostly BD-driven \
                 (direct hotel outreach and platform partnerships), not paid marketing.",
                format_percent(metrics.marketing_pct)
            ),
        ))
    } else if metrics.marketing_pct < LEAN_MARKETING_PCT && inputs.spend.marketing_monthly > 0.0 {
        Some(Recommendation::new(
            RecommendationKind::Success,
            "Lean Marketing",
            "Marketing budget is lean. That works if go-to-market is partnership-driven; \
             point it at travel industry conferences and developer relations.",
        ))
    } else {
        None
    }
}

fn strategy_notes() -> [Recommendation; 3] {
    [
        Recommendation::new(
            RecommendationKind::Info,
            "Hire PMS Integration Lead",
            "The moat is connecting hotel property management systems to booking \
             platforms. One senior engineer focused on PMS connectors speeds up onboarding.",
        ),
        Recommendation::new(
            RecommendationKind::Info,
            "Focus on Key Chains",
            "Prioritize 3-5 mid-size hotel chains for launch and integrate deeply before \
             spreading out.",
        ),
        Recommendation::new(
            RecommendationKind::Info,
            "Race Against OTAs",
            "Large online travel agencies are building the same layer. Speed to market \
             is the argument for a larger raise.",
        ),
    ]
}

fn revenue_model_advice(inputs: &InputAssumptions, metrics: &DerivedMetrics) -> Recommendation {
    let pricing = &inputs.revenue;
    let description = match pricing.model {
        RevenueModel::Hybrid => format!(
            "SaaS ${}/mo + {}% per booking",
            pricing.monthly_subscription, pricing.commission_pct
        ),
        RevenueModel::Saas => format!("SaaS ${}/mo per property", pricing.monthly_subscription),
        RevenueModel::Commission => format!("{}% commission per booking", pricing.commission_pct),
    };
    Recommendation::new(
        RecommendationKind::Success,
        "Revenue Model Clarity",
        format!(
            "Current model: {description}. At {} hotels: ${:.2}M ARR potential, well below \
             the 15-25% commissions OTAs charge.",
            inputs.adoption.target_hotels,
            metrics.revenue.target_annual_revenue / 1e6
        ),
    )
}

fn unit_economics_advice(inputs: &InputAssumptions, metrics: &DerivedMetrics) -> Recommendation {
    let per_hotel = metrics.avg_monthly_revenue_per_hotel;
    if per_hotel < MIN_REVENUE_PER_HOTEL {
        Recommendation::new(
            RecommendationKind::Warning,
            "Low Revenue per Hotel",
            format!(
                "Low revenue per hotel ({}/mo). Meaningful ARR needs more than 1,000 hotels; \
                 consider value-add services such as dynamic pricing or guest messaging.",
                format_currency(per_hotel)
            ),
        )
    } else {
        Recommendation::new(
            RecommendationKind::Success,
            "Strong Unit Economics",
            format!(
                "{} monthly revenue per hotel. At {} hotels that is ${:.0}K MRR potential.",
                format_currency(per_hotel),
                inputs.adoption.target_hotels,
                per_hotel * f64::from(inputs.adoption.target_hotels) / 1e3
            ),
        )
    }
}

fn breakeven_advice(metrics: &DerivedMetrics) -> Recommendation {
    match metrics.breakeven_month {
        Some(month) => Recommendation::new(
            RecommendationKind::Success,
            "Path to Breakeven",
            format!(
                "Breakeven projection: month {month}. {} hotels generating {}/mo cover {} \
                 burn.",
                metrics.revenue.hotels_by_month[month],
                format_currency(metrics.revenue.monthly_revenue[month]),
                format_currency(metrics.monthly_burn())
            ),
        ),
        None => Recommendation::new(
            RecommendationKind::Warning,
            "No Breakeven in Runway",
            "Revenue does not cover burn by the end of the runway, so another raise comes \
             before profitability. Levers: higher SaaS fees, faster hotel acquisition, or a \
             larger raise.",
        ),
    }
}

/// Build the recommendation list for one projection
pub fn generate_recommendations(
    inputs: &InputAssumptions,
    metrics: &DerivedMetrics,
) -> Vec<Recommendation> {
    let mut recs = vec![runway_advice(metrics)];
    recs.extend(people_advice(metrics));
    recs.push(engineering_advice(metrics));
    recs.extend(marketing_advice(inputs, metrics));
    recs.extend(strategy_notes());
    recs.push(revenue_model_advice(inputs, metrics));

    if inputs.adoption.target_hotels < MIN_TARGET_HOTELS {
        recs.push(Recommendation::new(
            RecommendationKind::Warning,
            "Conservative Hotel Target",
            format!(
                "A target of {} hotels may be too conservative; each PMS integration \
                 unlocks thousands of properties.",
                inputs.adoption.target_hotels
            ),
        ));
    }

    if inputs.revenue.commission_pct > MAX_COMMISSION_PCT {
        recs.push(Recommendation::new(
            RecommendationKind::Warning,
            "High Commission Rate",
            format!(
                "{}% commission approaches OTA levels. Keep commissions under 5% to stay \
                 clearly cheaper than the incumbents.",
                inputs.revenue.commission_pct
            ),
        ));
    }

    recs.push(unit_economics_advice(inputs, metrics));
    recs.push(breakeven_advice(metrics));

    tracing::debug!(count = recs.len(), "Generated recommendations");
    recs
}
