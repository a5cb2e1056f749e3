use super::MONTH_DAYS;
use shared::models::InputSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Production {
    pub daily_production: f64,
    pub internal_consumption: f64,
    pub daily_delivered: f64,
    pub delivered_twice_daily: f64,
    pub monthly_forecast: f64,
    pub monthly_delivered: f64,
}

/// Delivered volume is theoretical production minus what the nursing
/// calves drink, clamped at zero.
pub fn production(inputs: &InputSet) -> Production {
    let daily_production = inputs.lactating_cows * inputs.liters_per_cow;
    let internal_consumption = inputs.nursing_calves * inputs.milk_per_calf;
    let daily_delivered = (daily_production - internal_consumption).max(0.0);

    Production {
        daily_production,
        internal_consumption,
        daily_delivered,
        delivered_twice_daily: daily_delivered * 2.0,
        monthly_forecast: daily_production * MONTH_DAYS,
        monthly_delivered: daily_delivered * MONTH_DAYS,
    }
}
