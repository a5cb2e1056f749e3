// Monthly DRE computation. `compute` is a pure function over a fully
// populated InputSet; no input combination errors, divisions guard their
// denominators, and degenerate herds simply produce zeroed indicators.

pub mod cash_flow;
pub mod feed;
pub mod indicators;
pub mod payroll;
pub mod production;
pub mod revenue;

use shared::models::{InputSet, OutputSet};

/// Every daily rate is converted with a fixed 30-day month.
pub const MONTH_DAYS: f64 = 30.0;

/// Tax rate applied to the gross milk check.
pub const TAX_RATE: f64 = 0.015;

/// Statutory labor-charge rate on the burdened payroll base.
pub const PAYROLL_BURDEN_RATE: f64 = 0.212;

pub fn compute(inputs: &InputSet) -> OutputSet {
    let production = production::production(inputs);
    let revenue = revenue::revenue(inputs, &production);
    let payroll = payroll::payroll(inputs);
    let feed = feed::feed(inputs);
    let cash_flow = cash_flow::cash_flow(inputs, &revenue, &payroll, &feed);
    let indicators = indicators::indicators(inputs, &production, &revenue, &feed, &cash_flow);

    OutputSet {
        daily_production: production.daily_production,
        internal_consumption: production.internal_consumption,
        daily_delivered: production.daily_delivered,
        delivered_twice_daily: production.delivered_twice_daily,
        monthly_forecast: production.monthly_forecast,
        monthly_delivered: production.monthly_delivered,

        gross_revenue: revenue.gross_revenue,
        taxes: revenue.taxes,
        net_revenue: revenue.net_revenue,

        payroll_base: payroll.base,
        payroll_burden: payroll.burden,
        payroll_total: payroll.total,

        concentrate_lactation: feed.concentrate_lactation,
        concentrate_pre_partum: feed.concentrate_pre_partum,
        rearing_allowance: feed.rearing_allowance,
        total_concentrate: feed.total_concentrate,
        pulp_cost: feed.pulp_cost,

        disbursement: cash_flow.disbursement,
        operating_balance: cash_flow.operating_balance,
        total_provisions: cash_flow.total_provisions,
        net_profit: cash_flow.net_profit,

        ebitda: indicators.ebitda,
        total_outflow: indicators.total_outflow,
        cost_per_liter: indicators.cost_per_liter,
        debt_ratio: indicators.debt_ratio,
        variable_cost: indicators.variable_cost,
        unit_margin: indicators.unit_margin,
        break_even_cash_cost: indicators.break_even_cash_cost,
        break_even_total_cost: indicators.break_even_total_cost,
        break_even_full_cost: indicators.break_even_full_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_reference_scenario_figures() {
        let outputs = compute(&InputSet::default());

        assert!(close(outputs.monthly_delivered, 28800.0, 0.01));
        assert!(close(outputs.gross_revenue, 74879.98, 0.01));
        assert!(close(outputs.payroll_burden, 1817.30, 0.01));
        assert!(close(outputs.payroll_total, 12848.62, 0.01));
        assert!(close(outputs.total_concentrate, 29827.50, 0.01));
        assert!(close(outputs.disbursement, 55285.39, 0.01));
        assert!(close(outputs.total_provisions, 14308.74, 0.01));
        assert!(close(outputs.net_profit, 4162.65, 0.01));
        assert!(close(outputs.ebitda, 7314.09, 0.01));
        assert!(close(outputs.cost_per_liter, 2.4165, 0.0001));
        assert!(close(outputs.debt_ratio, 1.5377, 0.0001));
        assert!(close(outputs.break_even_cash_cost, 48857.0, 10.0));
        assert!(close(outputs.break_even_full_cost, 61502.0, 10.0));
    }

    #[test]
    fn test_cash_flow_identity() {
        let cases = [
            InputSet::default(),
            InputSet {
                lactating_cows: 0.0,
                ..InputSet::default()
            },
            InputSet {
                milk_price: 0.0,
                silage_provision: 0.0,
                ..InputSet::default()
            },
            InputSet {
                nursing_calves: 500.0,
                ..InputSet::default()
            },
        ];

        for inputs in &cases {
            let o = compute(inputs);
            assert!(
                close(o.net_profit, o.net_revenue - o.disbursement - o.total_provisions, 1e-9),
                "identity broken for {:?}",
                inputs
            );
        }
    }

    #[test]
    fn test_zero_delivery_guards() {
        // Calves drink more than the herd produces: delivery clamps to
        // zero and every per-liter figure follows.
        let inputs = InputSet {
            lactating_cows: 1.0,
            liters_per_cow: 5.0,
            nursing_calves: 10.0,
            milk_per_calf: 6.0,
            ..InputSet::default()
        };
        let o = compute(&inputs);

        assert_eq!(o.daily_delivered, 0.0);
        assert_eq!(o.monthly_delivered, 0.0);
        assert_eq!(o.cost_per_liter, 0.0);
        assert_eq!(o.unit_margin, 0.0);
        assert_eq!(o.break_even_cash_cost, 0.0);
        assert_eq!(o.break_even_total_cost, 0.0);
        assert_eq!(o.break_even_full_cost, 0.0);
        assert_eq!(o.debt_ratio, 0.0);
        assert!(o.net_profit.is_finite());
    }

    #[test]
    fn test_all_zero_inputs_stay_finite() {
        let mut inputs = InputSet::default();
        for key in shared::models::INPUT_FIELD_KEYS {
            inputs.set(key, 0.0);
        }
        let o = compute(&inputs);
        assert_eq!(o.net_profit, 0.0);
        assert_eq!(o.cost_per_liter, 0.0);
        assert_eq!(o.debt_ratio, 0.0);
        assert!(o.ebitda.is_finite());
    }

    #[test]
    fn test_idempotence_bit_identical() {
        let inputs = InputSet::default();
        let first = compute(&inputs);
        let second = compute(&inputs);
        assert_eq!(first, second);
    }
}
