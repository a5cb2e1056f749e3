use super::production::Production;
use super::TAX_RATE;
use shared::models::InputSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Revenue {
    pub gross_revenue: f64,
    pub taxes: f64,
    pub net_revenue: f64,
}

pub fn revenue(inputs: &InputSet, production: &Production) -> Revenue {
    let gross_revenue = production.monthly_delivered * inputs.milk_price;
    let taxes = gross_revenue * TAX_RATE;

    Revenue {
        gross_revenue,
        taxes,
        net_revenue: gross_revenue - taxes,
    }
}

#[cfg(test)]
mod tests {
    use super::super::production::production;
    use super::*;

    #[test]
    fn test_reference_revenue() {
        let inputs = InputSet::default();
        let r = revenue(&inputs, &production(&inputs));
        assert!((r.gross_revenue - 74879.9844).abs() < 1e-3);
        assert!((r.taxes - 1123.1998).abs() < 1e-3);
        assert!((r.net_revenue - 73756.7846).abs() < 1e-3);
    }

    #[test]
    fn test_zero_price_zero_revenue() {
        let inputs = InputSet {
            milk_price: 0.0,
            ..InputSet::default()
        };
        let r = revenue(&inputs, &production(&inputs));
        assert_eq!(r.gross_revenue, 0.0);
        assert_eq!(r.taxes, 0.0);
        assert_eq!(r.net_revenue, 0.0);
    }
}
