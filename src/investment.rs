//! Investment recommendations.
//!
//! Monthly income picks one of three segments (nearest income centroid).
//! Each segment has a plan whose options are filtered by the requested risk
//! tolerance, plus a suggested monthly amount and advice for the investment
//! duration and goal.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Centroids of the trained income segmentation, in LKR per month.
pub const DEFAULT_CENTROIDS: [f64; 3] = [31_000.0, 82_000.0, 129_000.0];

/// Nearest-centroid income segmenter.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmenter {
    centroids: Vec<f64>,
}

impl Segmenter {
    pub fn new(centroids: Vec<f64>) -> Result<Self> {
        if centroids.is_empty() {
            bail!("At least one income centroid is required");
        }
        if let Some(bad) = centroids.iter().find(|c| !c.is_finite()) {
            bail!("Income centroid must be a finite number, got {}", bad);
        }
        Ok(Self { centroids })
    }

    /// Parse a comma separated list such as `31000,82000,129000`.
    pub fn parse(list: &str) -> Result<Self> {
        let centroids = list
            .split(',')
            .map(|value| {
                value
                    .trim()
                    .parse::<f64>()
                    .with_context(|| format!("Invalid income centroid: '{}'", value.trim()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(centroids)
    }

    pub fn centroids(&self) -> &[f64] {
        &self.centroids
    }

    /// Index of the closest centroid; ties go to the lower index.
    pub fn segment(&self, monthly_income: f64) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (index, centroid) in self.centroids.iter().enumerate() {
            let distance = (monthly_income - centroid).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            centroids: DEFAULT_CENTROIDS.to_vec(),
        }
    }
}

// ==================== Plans ====================

/// One investment product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestmentOption {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub risk: &'static str,
    pub expected_return: &'static str,
    pub min_investment: &'static str,
    pub description: &'static str,
}

/// Plan for one income segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentPlan {
    pub segment: &'static str,
    pub recommended_savings_rate: &'static str,
    pub options: &'static [InvestmentOption],
}

const fn option(
    name: &'static str,
    kind: &'static str,
    risk: &'static str,
    expected_return: &'static str,
    min_investment: &'static str,
    description: &'static str,
) -> InvestmentOption {
    InvestmentOption {
        name,
        kind,
        risk,
        expected_return,
        min_investment,
        description,
    }
}

static PLANS: [SegmentPlan; 3] = [
    SegmentPlan {
        segment: "Conservative Saver",
        recommended_savings_rate: "15-20%",
        options: &[
            option(
                "National Savings Bank Fixed Deposit",
                "Fixed Deposit",
                "Low",
                "8-10% p.a.",
                "Rs. 1,000",
                "Safe government-backed savings with guaranteed returns",
            ),
            option(
                "Employee Provident Fund (EPF)",
                "Retirement Fund",
                "Low",
                "9-12% p.a.",
                "Salary-based",
                "Mandatory retirement savings with employer contribution",
            ),
            option(
                "Post Office Savings",
                "Savings Account",
                "Very Low",
                "5-7% p.a.",
                "Rs. 500",
                "Easily accessible savings with government guarantee",
            ),
        ],
    },
    SegmentPlan {
        segment: "Balanced Investor",
        recommended_savings_rate: "20-30%",
        options: &[
            option(
                "Unit Trust Funds",
                "Mutual Fund",
                "Medium",
                "12-15% p.a.",
                "Rs. 5,000",
                "Diversified portfolio managed by professionals",
            ),
            option(
                "Corporate Debentures",
                "Fixed Income",
                "Medium-Low",
                "10-13% p.a.",
                "Rs. 25,000",
                "Higher returns than FDs with moderate risk",
            ),
            option(
                "Treasury Bonds",
                "Government Securities",
                "Low",
                "11-14% p.a.",
                "Rs. 10,000",
                "Government-backed securities with steady returns",
            ),
            option(
                "Gold Investment (ETF/Physical)",
                "Commodity",
                "Medium",
                "8-12% p.a.",
                "Rs. 10,000",
                "Hedge against inflation and currency fluctuation",
            ),
        ],
    },
    SegmentPlan {
        segment: "Growth Investor",
        recommended_savings_rate: "30-40%",
        options: &[
            option(
                "Colombo Stock Exchange (CSE) Stocks",
                "Equity",
                "High",
                "15-25% p.a.",
                "Rs. 50,000",
                "Direct stock investment for long-term wealth growth",
            ),
            option(
                "Real Estate Investment",
                "Property",
                "Medium-High",
                "10-20% p.a.",
                "Rs. 500,000",
                "Land or property investment for capital appreciation",
            ),
            option(
                "Equity Mutual Funds",
                "Mutual Fund",
                "High",
                "15-20% p.a.",
                "Rs. 25,000",
                "Professionally managed stock portfolio",
            ),
            option(
                "Dollar-Denominated Investments",
                "Foreign Currency",
                "Medium-High",
                "5-8% + FX gains",
                "$500",
                "Protect against LKR depreciation",
            ),
            option(
                "Business/Startup Investment",
                "Entrepreneurship",
                "Very High",
                "20-50%+ p.a.",
                "Rs. 100,000+",
                "High-risk, high-reward business opportunities",
            ),
        ],
    },
];

/// Plan of a segment; unknown segments get the balanced plan.
pub fn plan(segment: usize) -> &'static SegmentPlan {
    PLANS.get(segment).unwrap_or(&PLANS[1])
}

/// Risk tolerance of the investor. Anything that is not `conservative` or
/// `moderate` counts as aggressive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub fn parse(value: &str) -> Self {
        match value {
            "conservative" => Self::Conservative,
            "moderate" => Self::Moderate,
            _ => Self::Aggressive,
        }
    }

    /// Share of monthly income suggested for investing.
    pub fn savings_rate(&self) -> f64 {
        match self {
            Self::Conservative => 0.15,
            Self::Moderate => 0.25,
            Self::Aggressive => 0.35,
        }
    }

    fn accepts(&self, risk: &str) -> bool {
        let risk = risk.to_lowercase();
        match self {
            Self::Conservative => risk.contains("low"),
            Self::Moderate => !risk.contains("high") || risk.contains("medium"),
            Self::Aggressive => true,
        }
    }
}

/// Options of a plan suited to a risk tolerance. When fewer than two
/// remain, the first three options of the plan are returned instead.
pub fn filter_options(plan: &SegmentPlan, risk: RiskTolerance) -> Vec<InvestmentOption> {
    let kept: Vec<InvestmentOption> = plan
        .options
        .iter()
        .filter(|option| risk.accepts(option.risk))
        .cloned()
        .collect();

    if kept.len() < 2 {
        return plan.options.iter().take(3).cloned().collect();
    }
    kept
}

pub fn duration_tip(duration: &str) -> &'static str {
    match duration {
        "short" => "Focus on liquid investments like Fixed Deposits and Treasury Bills that can be easily accessed within 1-3 years.",
        "long" => "Maximize growth potential with equity investments and real estate. Time in market reduces volatility risk over 7+ years.",
        _ => "Balance between growth and security. Consider a mix of Unit Trusts and Corporate Debentures for 3-7 year goals.",
    }
}

pub fn goal_advice(goal: &str) -> &'static str {
    match goal {
        "retirement" => "Prioritize EPF/ETF contributions and long-term equity investments. Consider pension plans for tax benefits.",
        "education" => "Start a dedicated education fund early. Consider child education insurance plans with guaranteed returns.",
        "home-purchase" => "Build a down payment fund in safe instruments. Aim for 20% of property value to avoid high interest.",
        "emergency-fund" => "Keep 6 months of expenses in easily accessible savings. NSB or high-yield savings accounts are ideal.",
        "passive-income" => "Focus on dividend-paying stocks, rental properties, and fixed income securities for regular income.",
        "business" => "Build capital gradually. Consider business loans with your savings as collateral for leverage.",
        _ => "Diversify across asset classes. Reinvest dividends and compound your returns over time.",
    }
}

/// First character uppercased, the rest lowercased.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

// ==================== Recommendations ====================

/// A numeric form field. Browsers post form state as text, API clients
/// post numbers; both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormNumber {
    Number(f64),
    Text(String),
}

impl FormNumber {
    /// `Ok(None)` for blank text.
    fn value(&self, field: &'static str) -> Result<Option<f64>, FormError> {
        match self {
            FormNumber::Number(value) => Ok(Some(*value)),
            FormNumber::Text(text) if text.trim().is_empty() => Ok(None),
            FormNumber::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| FormError::NotANumber { field }),
        }
    }
}

/// A form field that parsed but cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be a non-negative number")]
    Negative { field: &'static str },
}

/// Body of `POST /api/investment-recommend`, as posted by the portal form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentForm {
    pub age: Option<FormNumber>,
    pub monthly_income: Option<FormNumber>,
    pub savings_amount: Option<FormNumber>,
    pub investment_goal: Option<String>,
    pub risk_tolerance: Option<String>,
    pub investment_duration: Option<String>,
}

fn non_negative(
    field: &'static str,
    value: Option<&FormNumber>,
    default: f64,
) -> Result<f64, FormError> {
    let value = match value {
        Some(number) => number.value(field)?.unwrap_or(default),
        None => default,
    };
    if !value.is_finite() || value < 0.0 {
        return Err(FormError::Negative { field });
    }
    Ok(value)
}

fn choice(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl InvestmentForm {
    /// Validate the form, filling blank or missing fields with defaults.
    pub fn into_request(self) -> Result<InvestmentRequest, FormError> {
        let defaults = InvestmentRequest::default();

        Ok(InvestmentRequest {
            age: non_negative("age", self.age.as_ref(), f64::from(defaults.age))? as u32,
            monthly_income: non_negative(
                "monthlyIncome",
                self.monthly_income.as_ref(),
                defaults.monthly_income,
            )?,
            savings_amount: non_negative(
                "savingsAmount",
                self.savings_amount.as_ref(),
                defaults.savings_amount,
            )?,
            investment_goal: choice(self.investment_goal, &defaults.investment_goal),
            risk_tolerance: choice(self.risk_tolerance, &defaults.risk_tolerance),
            investment_duration: choice(self.investment_duration, &defaults.investment_duration),
        })
    }
}

/// A validated investment request.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentRequest {
    pub age: u32,
    pub monthly_income: f64,
    pub savings_amount: f64,
    pub investment_goal: String,
    pub risk_tolerance: String,
    pub investment_duration: String,
}

impl Default for InvestmentRequest {
    fn default() -> Self {
        Self {
            age: 30,
            monthly_income: 50_000.0,
            savings_amount: 100_000.0,
            investment_goal: "wealth-growth".to_string(),
            risk_tolerance: "moderate".to_string(),
            investment_duration: "medium".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvestmentRecommendations {
    pub segment: &'static str,
    pub cluster: usize,
    pub monthly_income: f64,
    pub suggested_monthly_investment: i64,
    pub recommended_savings_rate: &'static str,
    pub investment_options: Vec<InvestmentOption>,
    pub duration_tip: &'static str,
    pub goal_advice: &'static str,
    pub risk_profile: String,
    pub current_savings: f64,
}

impl Segmenter {
    pub fn recommend(&self, request: &InvestmentRequest) -> InvestmentRecommendations {
        let cluster = self.segment(request.monthly_income);
        let plan = plan(cluster);
        let risk = RiskTolerance::parse(&request.risk_tolerance);

        InvestmentRecommendations {
            segment: plan.segment,
            cluster,
            monthly_income: request.monthly_income,
            suggested_monthly_investment: (request.monthly_income * risk.savings_rate()) as i64,
            recommended_savings_rate: plan.recommended_savings_rate,
            investment_options: filter_options(plan, risk),
            duration_tip: duration_tip(&request.investment_duration),
            goal_advice: goal_advice(&request.investment_goal),
            risk_profile: capitalize(&request.risk_tolerance),
            current_savings: request.savings_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(options: &[InvestmentOption]) -> Vec<&'static str> {
        options.iter().map(|o| o.name).collect()
    }

    // ==================== Segmentation ====================

    #[test]
    fn test_segments_by_nearest_centroid() {
        let segmenter = Segmenter::default();
        assert_eq!(segmenter.segment(15_000.0), 0);
        assert_eq!(segmenter.segment(60_000.0), 1);
        assert_eq!(segmenter.segment(250_000.0), 2);
    }

    #[test]
    fn test_segment_tie_goes_to_lower() {
        // midway between 31000 and 82000
        assert_eq!(Segmenter::default().segment(56_500.0), 0);
    }

    #[test]
    fn test_parse_centroids() {
        let segmenter = Segmenter::parse("10000, 20000").unwrap();
        assert_eq!(segmenter.centroids(), [10_000.0, 20_000.0]);
        assert!(Segmenter::parse("10000,abc").is_err());
        assert!(Segmenter::parse("").is_err());
        assert!(Segmenter::new(vec![]).is_err());
        assert!(Segmenter::new(vec![f64::NAN]).is_err());
    }

    #[test]
    fn test_unknown_segment_gets_balanced_plan() {
        assert_eq!(plan(7).segment, "Balanced Investor");
        assert_eq!(plan(0).segment, "Conservative Saver");
    }

    // ==================== Risk Filtering ====================

    #[test]
    fn test_conservative_keeps_low_risk() {
        let kept = filter_options(plan(1), RiskTolerance::Conservative);
        assert_eq!(names(&kept), ["Corporate Debentures", "Treasury Bonds"]);
    }

    #[test]
    fn test_moderate_filter() {
        let kept = filter_options(plan(2), RiskTolerance::Moderate);
        assert_eq!(
            names(&kept),
            ["Real Estate Investment", "Dollar-Denominated Investments"]
        );
    }

    #[test]
    fn test_aggressive_keeps_everything() {
        assert_eq!(filter_options(plan(2), RiskTolerance::Aggressive).len(), 5);
    }

    #[test]
    fn test_too_few_options_restores_first_three() {
        // Growth plan has no "low" option
        let kept = filter_options(plan(2), RiskTolerance::Conservative);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].name, "Colombo Stock Exchange (CSE) Stocks");
    }

    #[test]
    fn test_risk_tolerance_parse() {
        assert_eq!(RiskTolerance::parse("conservative"), RiskTolerance::Conservative);
        assert_eq!(RiskTolerance::parse("moderate"), RiskTolerance::Moderate);
        assert_eq!(RiskTolerance::parse("yolo"), RiskTolerance::Aggressive);
    }

    // ==================== Advice ====================

    #[test]
    fn test_advice_defaults() {
        assert!(duration_tip("forever").contains("3-7 year"));
        assert!(goal_advice("lottery").starts_with("Diversify"));
        assert!(goal_advice("retirement").contains("EPF"));
        assert!(duration_tip("short").contains("1-3 years"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("moderate"), "Moderate");
        assert_eq!(capitalize("AGGRESSIVE"), "Aggressive");
        assert_eq!(capitalize(""), "");
    }

    // ==================== Recommendations ====================

    #[test]
    fn test_recommend_low_income_conservative() {
        let request = InvestmentRequest {
            monthly_income: 30_000.0,
            risk_tolerance: "conservative".to_string(),
            investment_goal: "emergency-fund".to_string(),
            investment_duration: "short".to_string(),
            ..InvestmentRequest::default()
        };
        let result = Segmenter::default().recommend(&request);

        assert_eq!(result.segment, "Conservative Saver");
        assert_eq!(result.cluster, 0);
        assert_eq!(result.suggested_monthly_investment, 4_500);
        assert_eq!(result.investment_options.len(), 3);
        assert_eq!(result.risk_profile, "Conservative");
        assert!(result.goal_advice.contains("6 months"));
    }

    #[test]
    fn test_recommend_truncates_suggested_amount() {
        let request = InvestmentRequest {
            monthly_income: 82_001.0,
            ..InvestmentRequest::default()
        };
        let result = Segmenter::default().recommend(&request);
        // 82001 * 0.25 = 20500.25
        assert_eq!(result.suggested_monthly_investment, 20_500);
        assert_eq!(result.recommended_savings_rate, "20-30%");
    }

    #[test]
    fn test_request_defaults_and_serialization() {
        let form: InvestmentForm = serde_json::from_str("{}").unwrap();
        let request = form.into_request().unwrap();
        let result = Segmenter::default().recommend(&request);
        let json = serde_json::to_value(&result).unwrap();

        // 50000 is closer to 31000 than to 82000
        assert_eq!(json["segment"], "Conservative Saver");
        assert_eq!(json["risk_profile"], "Moderate");
        assert_eq!(json["current_savings"], 100_000.0);
        assert_eq!(json["suggested_monthly_investment"], 12_500);
        assert_eq!(json["investment_options"][0]["type"], "Fixed Deposit");
    }

    // ==================== Form Parsing ====================

    fn form(json: &str) -> Result<InvestmentRequest, FormError> {
        serde_json::from_str::<InvestmentForm>(json).unwrap().into_request()
    }

    #[test]
    fn test_form_accepts_numeric_text() {
        let request = form(
            r#"{"age":"35","monthlyIncome":"75000","savingsAmount":" 200000 ","riskTolerance":"aggressive"}"#,
        )
        .unwrap();

        assert_eq!(request.age, 35);
        assert_eq!(request.monthly_income, 75_000.0);
        assert_eq!(request.savings_amount, 200_000.0);
        assert_eq!(request.risk_tolerance, "aggressive");
    }

    #[test]
    fn test_form_accepts_numbers() {
        let request = form(r#"{"age":41,"monthlyIncome":130000.5}"#).unwrap();
        assert_eq!(request.age, 41);
        assert_eq!(request.monthly_income, 130_000.5);
    }

    #[test]
    fn test_form_blank_fields_use_defaults() {
        let request = form(
            r#"{"age":"","monthlyIncome":"","savingsAmount":"","investmentGoal":"","riskTolerance":"","investmentDuration":""}"#,
        )
        .unwrap();
        assert_eq!(request, InvestmentRequest::default());
    }

    #[test]
    fn test_form_rejects_non_numeric_text() {
        assert_eq!(
            form(r#"{"monthlyIncome":"lots"}"#),
            Err(FormError::NotANumber {
                field: "monthlyIncome"
            })
        );
        assert_eq!(
            form(r#"{"age":"thirty"}"#),
            Err(FormError::NotANumber { field: "age" })
        );
    }

    #[test]
    fn test_form_rejects_negative_and_non_finite() {
        assert_eq!(
            form(r#"{"monthlyIncome":-5}"#),
            Err(FormError::Negative {
                field: "monthlyIncome"
            })
        );
        assert_eq!(
            form(r#"{"savingsAmount":"NaN"}"#),
            Err(FormError::Negative {
                field: "savingsAmount"
            })
        );
    }

    #[test]
    fn test_form_rejects_wrong_json_type() {
        assert!(serde_json::from_str::<InvestmentForm>(r#"{"monthlyIncome":true}"#).is_err());
    }

    proptest! {
        #[test]
        fn prop_segment_in_range(income in 0.0f64..1_000_000.0) {
            let segmenter = Segmenter::default();
            prop_assert!(segmenter.segment(income) < 3);
        }

        #[test]
        fn prop_at_least_two_options(segment in 0usize..3, risk in "[a-z]{0,12}") {
            let kept = filter_options(plan(segment), RiskTolerance::parse(&risk));
            prop_assert!(kept.len() >= 2);
        }
    }
}
