use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete set of editable inputs for one scenario.
///
/// Every field has a reference default, so a freshly constructed set is
/// always safe to feed to the engine even when spreadsheet resolution
/// failed for some (or all) of the fields. Values are monthly figures
/// unless the name says otherwise (per-head, per-day, per-kg rates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSet {
    // Herd and production
    pub lactating_cows: f64,
    pub liters_per_cow: f64,
    pub milk_price: f64,
    pub nursing_calves: f64,
    pub milk_per_calf: f64,
    pub pre_partum_cows: f64,
    pub dry_cows: f64,
    pub rearing_stock: f64,

    // Payroll. The first four form the statutory-burden base; other_salary
    // is paid out but carries no burden.
    pub milker_salary: f64,
    pub milker_bonus: f64,
    pub handler_salary: f64,
    pub handler_bonus: f64,
    pub other_salary: f64,

    // Feed prices (R$/kg, silage R$/ton)
    pub conc_price_lactation: f64,
    pub conc_price_pre_partum: f64,
    pub pulp_price: f64,
    pub silage_price_per_ton: f64,

    // Consumption (kg/head/day). The silage figures are reference values
    // carried on the form; silage spend enters the cash flow as a monthly
    // provision instead.
    pub conc_kg_lactation: f64,
    pub conc_kg_pre_partum: f64,
    pub pulp_kg: f64,
    pub silage_kg_lactation: f64,
    pub silage_kg_pre_partum: f64,
    pub silage_kg_dry: f64,

    // Fixed operating costs (R$/month)
    pub maintenance: f64,
    pub supply_store: f64,
    pub genetics_service: f64,
    pub other_fixed_costs: f64,
    pub rearing_fixed_cost: f64,

    // Monthly provisions and depreciation (R$/month)
    pub silage_provision: f64,
    pub financing_provision: f64,
    pub fertilizer_provision: f64,
    pub depreciation: f64,
}

impl Default for InputSet {
    fn default() -> Self {
        InputSet {
            lactating_cows: 40.0,
            liters_per_cow: 25.0,
            milk_price: 2.6,
            nursing_calves: 6.6667,
            milk_per_calf: 6.0,
            pre_partum_cows: 8.0,
            dry_cows: 4.0,
            rearing_stock: 20.0,

            milker_salary: 3278.88,
            milker_bonus: 1007.20,
            handler_salary: 3278.88,
            handler_bonus: 1007.20,
            other_salary: 2459.16,

            conc_price_lactation: 2.0,
            conc_price_pre_partum: 2.7,
            pulp_price: 1.6,
            silage_price_per_ton: 180.0,

            conc_kg_lactation: 10.0,
            conc_kg_pre_partum: 3.0,
            pulp_kg: 0.0,
            silage_kg_lactation: 34.0,
            silage_kg_pre_partum: 25.0,
            silage_kg_dry: 25.0,

            maintenance: 816.61,
            supply_store: 3324.64,
            genetics_service: 782.22,
            other_fixed_costs: 7685.80,
            rearing_fixed_cost: 3883.50,

            silage_provision: 11340.0,
            financing_provision: 1151.44,
            fertilizer_provision: 0.0,
            depreciation: 2000.0,
        }
    }
}

/// Field keys accepted by [`InputSet::get`] and [`InputSet::set`], in
/// declaration order. These match the serde field names and are the
/// vocabulary used by scenario bindings, CLI overrides, and the export.
pub const INPUT_FIELD_KEYS: &[&str] = &[
    "lactating_cows",
    "liters_per_cow",
    "milk_price",
    "nursing_calves",
    "milk_per_calf",
    "pre_partum_cows",
    "dry_cows",
    "rearing_stock",
    "milker_salary",
    "milker_bonus",
    "handler_salary",
    "handler_bonus",
    "other_salary",
    "conc_price_lactation",
    "conc_price_pre_partum",
    "pulp_price",
    "silage_price_per_ton",
    "conc_kg_lactation",
    "conc_kg_pre_partum",
    "pulp_kg",
    "silage_kg_lactation",
    "silage_kg_pre_partum",
    "silage_kg_dry",
    "maintenance",
    "supply_store",
    "genetics_service",
    "other_fixed_costs",
    "rearing_fixed_cost",
    "silage_provision",
    "financing_provision",
    "fertilizer_provision",
    "depreciation",
];

impl InputSet {
    /// Looks up a field by its key. Returns `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<f64> {
        let value = match key {
            "lactating_cows" => self.lactating_cows,
            "liters_per_cow" => self.liters_per_cow,
            "milk_price" => self.milk_price,
            "nursing_calves" => self.nursing_calves,
            "milk_per_calf" => self.milk_per_calf,
            "pre_partum_cows" => self.pre_partum_cows,
            "dry_cows" => self.dry_cows,
            "rearing_stock" => self.rearing_stock,
            "milker_salary" => self.milker_salary,
            "milker_bonus" => self.milker_bonus,
            "handler_salary" => self.handler_salary,
            "handler_bonus" => self.handler_bonus,
            "other_salary" => self.other_salary,
            "conc_price_lactation" => self.conc_price_lactation,
            "conc_price_pre_partum" => self.conc_price_pre_partum,
            "pulp_price" => self.pulp_price,
            "silage_price_per_ton" => self.silage_price_per_ton,
            "conc_kg_lactation" => self.conc_kg_lactation,
            "conc_kg_pre_partum" => self.conc_kg_pre_partum,
            "pulp_kg" => self.pulp_kg,
            "silage_kg_lactation" => self.silage_kg_lactation,
            "silage_kg_pre_partum" => self.silage_kg_pre_partum,
            "silage_kg_dry" => self.silage_kg_dry,
            "maintenance" => self.maintenance,
            "supply_store" => self.supply_store,
            "genetics_service" => self.genetics_service,
            "other_fixed_costs" => self.other_fixed_costs,
            "rearing_fixed_cost" => self.rearing_fixed_cost,
            "silage_provision" => self.silage_provision,
            "financing_provision" => self.financing_provision,
            "fertilizer_provision" => self.fertilizer_provision,
            "depreciation" => self.depreciation,
            _ => return None,
        };
        Some(value)
    }

    /// Sets a field by its key. Returns `false` for unknown keys.
    pub fn set(&mut self, key: &str, value: f64) -> bool {
        let slot = match key {
            "lactating_cows" => &mut self.lactating_cows,
            "liters_per_cow" => &mut self.liters_per_cow,
            "milk_price" => &mut self.milk_price,
            "nursing_calves" => &mut self.nursing_calves,
            "milk_per_calf" => &mut self.milk_per_calf,
            "pre_partum_cows" => &mut self.pre_partum_cows,
            "dry_cows" => &mut self.dry_cows,
            "rearing_stock" => &mut self.rearing_stock,
            "milker_salary" => &mut self.milker_salary,
            "milker_bonus" => &mut self.milker_bonus,
            "handler_salary" => &mut self.handler_salary,
            "handler_bonus" => &mut self.handler_bonus,
            "other_salary" => &mut self.other_salary,
            "conc_price_lactation" => &mut self.conc_price_lactation,
            "conc_price_pre_partum" => &mut self.conc_price_pre_partum,
            "pulp_price" => &mut self.pulp_price,
            "silage_price_per_ton" => &mut self.silage_price_per_ton,
            "conc_kg_lactation" => &mut self.conc_kg_lactation,
            "conc_kg_pre_partum" => &mut self.conc_kg_pre_partum,
            "pulp_kg" => &mut self.pulp_kg,
            "silage_kg_lactation" => &mut self.silage_kg_lactation,
            "silage_kg_pre_partum" => &mut self.silage_kg_pre_partum,
            "silage_kg_dry" => &mut self.silage_kg_dry,
            "maintenance" => &mut self.maintenance,
            "supply_store" => &mut self.supply_store,
            "genetics_service" => &mut self.genetics_service,
            "other_fixed_costs" => &mut self.other_fixed_costs,
            "rearing_fixed_cost" => &mut self.rearing_fixed_cost,
            "silage_provision" => &mut self.silage_provision,
            "financing_provision" => &mut self.financing_provision,
            "fertilizer_provision" => &mut self.fertilizer_provision,
            "depreciation" => &mut self.depreciation,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Complete derived result of one engine run. Recomputed fresh from an
/// [`InputSet`] on every request; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSet {
    // Production (liters)
    pub daily_production: f64,
    pub internal_consumption: f64,
    pub daily_delivered: f64,
    pub delivered_twice_daily: f64,
    pub monthly_forecast: f64,
    pub monthly_delivered: f64,

    // Revenue (R$/month)
    pub gross_revenue: f64,
    pub taxes: f64,
    pub net_revenue: f64,

    // Payroll (R$/month)
    pub payroll_base: f64,
    pub payroll_burden: f64,
    pub payroll_total: f64,

    // Feed (R$/month)
    pub concentrate_lactation: f64,
    pub concentrate_pre_partum: f64,
    pub rearing_allowance: f64,
    pub total_concentrate: f64,
    pub pulp_cost: f64,

    // Disbursement and cash flow (R$/month)
    pub disbursement: f64,
    pub operating_balance: f64,
    pub total_provisions: f64,
    pub net_profit: f64,

    // Indicators
    pub ebitda: f64,
    pub total_outflow: f64,
    pub cost_per_liter: f64,
    pub debt_ratio: f64,
    pub variable_cost: f64,
    pub unit_margin: f64,
    pub break_even_cash_cost: f64,
    pub break_even_total_cost: f64,
    pub break_even_full_cost: f64,
}

/// Outcome of one spreadsheet lookup: either the sheet yielded a usable
/// number, or the caller-supplied default was used. Either way the caller
/// gets a value, but the distinction feeds the audit view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    Found(f64),
    Defaulted(f64),
}

impl Resolution {
    pub fn value(&self) -> f64 {
        match *self {
            Resolution::Found(v) | Resolution::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Resolution::Defaulted(_))
    }
}

/// One input field together with how its value was obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldResolution {
    pub field: String,
    pub resolution: Resolution,
}

/// A timestamped snapshot of one computation, handed to the export writer
/// and the report renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub generated_at: DateTime<Utc>,
    pub inputs: InputSet,
    pub outputs: OutputSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_figures() {
        let inputs = InputSet::default();
        assert_eq!(inputs.lactating_cows, 40.0);
        assert_eq!(inputs.milk_price, 2.6);
        assert_eq!(inputs.silage_provision, 11340.0);
        assert_eq!(inputs.fertilizer_provision, 0.0);
    }

    #[test]
    fn get_covers_every_declared_key() {
        let inputs = InputSet::default();
        for key in INPUT_FIELD_KEYS {
            assert!(inputs.get(key).is_some(), "missing field key: {}", key);
        }
    }

    #[test]
    fn set_then_get_roundtrip() {
        let mut inputs = InputSet::default();
        assert!(inputs.set("milk_price", 3.1));
        assert_eq!(inputs.get("milk_price"), Some(3.1));
        assert_eq!(inputs.milk_price, 3.1);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut inputs = InputSet::default();
        assert_eq!(inputs.get("horsepower"), None);
        assert!(!inputs.set("horsepower", 1.0));
    }

    #[test]
    fn resolution_value_and_audit_flag() {
        assert_eq!(Resolution::Found(2.6).value(), 2.6);
        assert_eq!(Resolution::Defaulted(40.0).value(), 40.0);
        assert!(Resolution::Defaulted(0.0).is_defaulted());
        assert!(!Resolution::Found(0.0).is_defaulted());
    }
}
