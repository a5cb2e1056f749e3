use super::cash_flow::CashFlow;
use super::feed::Feed;
use super::production::Production;
use super::revenue::Revenue;
use shared::models::InputSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicators {
    /// Net profit plus depreciation plus the financing provision; an
    /// approximation, not accounting EBITDA.
    pub ebitda: f64,
    pub total_outflow: f64,
    pub cost_per_liter: f64,
    /// Financing provision over gross revenue, as a percentage.
    pub debt_ratio: f64,
    pub variable_cost: f64,
    pub unit_margin: f64,
    pub break_even_cash_cost: f64,
    pub break_even_total_cost: f64,
    pub break_even_full_cost: f64,
}

/// Guarded division: zero whenever the denominator is not strictly
/// positive, so degenerate scenarios render as zeros instead of
/// infinities.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

pub fn indicators(
    inputs: &InputSet,
    production: &Production,
    revenue: &Revenue,
    feed: &Feed,
    cash_flow: &CashFlow,
) -> Indicators {
    let total_outflow = cash_flow.disbursement + cash_flow.total_provisions;
    let variable_cost = feed.total_concentrate + feed.pulp_cost + inputs.silage_provision;
    let unit_margin = ratio(
        revenue.net_revenue - variable_cost,
        production.monthly_delivered,
    );

    Indicators {
        ebitda: cash_flow.net_profit + inputs.depreciation + inputs.financing_provision,
        total_outflow,
        cost_per_liter: ratio(total_outflow, production.monthly_delivered),
        debt_ratio: ratio(inputs.financing_provision, revenue.gross_revenue) * 100.0,
        variable_cost,
        unit_margin,
        break_even_cash_cost: ratio(cash_flow.disbursement, unit_margin),
        break_even_total_cost: ratio(cash_flow.disbursement + inputs.depreciation, unit_margin),
        break_even_full_cost: ratio(total_outflow, unit_margin),
    }
}
