use super::PAYROLL_BURDEN_RATE;
use shared::models::InputSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payroll {
    /// Salaries and bonuses subject to the statutory charge.
    pub base: f64,
    pub burden: f64,
    /// Full monthly outlay: base, non-burdened salary, and the charge.
    pub total: f64,
}

pub fn payroll(inputs: &InputSet) -> Payroll {
    let base =
        inputs.milker_salary + inputs.handler_salary + inputs.milker_bonus + inputs.handler_bonus;
    let burden = base * PAYROLL_BURDEN_RATE;

    Payroll {
        base,
        burden,
        total: base + inputs.other_salary + burden,
    }
}
