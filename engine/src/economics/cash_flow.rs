use super::feed::Feed;
use super::payroll::Payroll;
use super::revenue::Revenue;
use shared::models::InputSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlow {
    pub disbursement: f64,
    pub operating_balance: f64,
    pub total_provisions: f64,
    pub net_profit: f64,
}

/// The statutory burden appears twice on purpose: once inside the payroll
/// outlay (disbursement) and again as a cash reserve inside the
/// provisions. Every downstream total that combines the two sees it
/// twice.
pub fn cash_flow(inputs: &InputSet, revenue: &Revenue, payroll: &Payroll, feed: &Feed) -> CashFlow {
    let disbursement = feed.total_concentrate
        + feed.pulp_cost
        + inputs.maintenance
        + inputs.supply_store
        + inputs.genetics_service
        + payroll.total
        + inputs.other_fixed_costs;

    let operating_balance = revenue.net_revenue - disbursement;

    let total_provisions = inputs.silage_provision
        + inputs.financing_provision
        + inputs.fertilizer_provision
        + payroll.burden;

    CashFlow {
        disbursement,
        operating_balance,
        total_provisions,
        net_profit: operating_balance - total_provisions,
    }
}
