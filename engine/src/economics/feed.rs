use super::MONTH_DAYS;
use shared::models::InputSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feed {
    pub concentrate_lactation: f64,
    pub concentrate_pre_partum: f64,
    /// Fixed monthly allowance for heifer rearing (feed plus mineral salt),
    /// not a per-head computation.
    pub rearing_allowance: f64,
    pub total_concentrate: f64,
    pub pulp_cost: f64,
}

/// Per-class cost is head count × kg/day × 30 × price/kg. Pulp is fed to
/// the lactating group only.
pub fn feed(inputs: &InputSet) -> Feed {
    let concentrate_lactation =
        inputs.lactating_cows * inputs.conc_kg_lactation * MONTH_DAYS * inputs.conc_price_lactation;
    let concentrate_pre_partum = inputs.pre_partum_cows
        * inputs.conc_kg_pre_partum
        * MONTH_DAYS
        * inputs.conc_price_pre_partum;
    let rearing_allowance = inputs.rearing_fixed_cost;

    Feed {
        concentrate_lactation,
        concentrate_pre_partum,
        rearing_allowance,
        total_concentrate: concentrate_lactation + concentrate_pre_partum + rearing_allowance,
        pulp_cost: inputs.lactating_cows * inputs.pulp_kg * MONTH_DAYS * inputs.pulp_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_feed_cost() {
        let f = feed(&InputSet::default());
        assert!((f.concentrate_lactation - 24000.0).abs() < 1e-9);
        assert!((f.concentrate_pre_partum - 1944.0).abs() < 1e-9);
        assert!((f.rearing_allowance - 3883.50).abs() < 1e-9);
        assert!((f.total_concentrate - 29827.50).abs() < 1e-9);
        assert_eq!(f.pulp_cost, 0.0);
    }

    #[test]
    fn test_pulp_cost_scales_with_herd() {
        let inputs = InputSet {
            pulp_kg: 2.0,
            ..InputSet::default()
        };
        let f = feed(&inputs);
        // 40 cows × 2 kg × 30 days × R$1,60
        assert!((f.pulp_cost - 3840.0).abs() < 1e-9);
    }
}
