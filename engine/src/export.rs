// Flat report export: `;`-delimited rows of secao;item;valor, covering
// every input and every derived figure of one scenario run.

use crate::error::EngineError;
use csv::WriterBuilder;
use shared::models::{OutputSet, ScenarioReport, INPUT_FIELD_KEYS};
use shared::utils::brazilian_format::format_decimal;
use std::path::Path;

/// Output line items in report order, keyed like the struct fields.
fn output_rows(outputs: &OutputSet) -> Vec<(&'static str, f64)> {
    vec![
        ("daily_production", outputs.daily_production),
        ("internal_consumption", outputs.internal_consumption),
        ("daily_delivered", outputs.daily_delivered),
        ("delivered_twice_daily", outputs.delivered_twice_daily),
        ("monthly_forecast", outputs.monthly_forecast),
        ("monthly_delivered", outputs.monthly_delivered),
        ("gross_revenue", outputs.gross_revenue),
        ("taxes", outputs.taxes),
        ("net_revenue", outputs.net_revenue),
        ("payroll_base", outputs.payroll_base),
        ("payroll_burden", outputs.payroll_burden),
        ("payroll_total", outputs.payroll_total),
        ("concentrate_lactation", outputs.concentrate_lactation),
        ("concentrate_pre_partum", outputs.concentrate_pre_partum),
        ("rearing_allowance", outputs.rearing_allowance),
        ("total_concentrate", outputs.total_concentrate),
        ("pulp_cost", outputs.pulp_cost),
        ("disbursement", outputs.disbursement),
        ("operating_balance", outputs.operating_balance),
        ("total_provisions", outputs.total_provisions),
        ("net_profit", outputs.net_profit),
        ("ebitda", outputs.ebitda),
        ("total_outflow", outputs.total_outflow),
        ("cost_per_liter", outputs.cost_per_liter),
        ("debt_ratio", outputs.debt_ratio),
        ("variable_cost", outputs.variable_cost),
        ("unit_margin", outputs.unit_margin),
        ("break_even_cash_cost", outputs.break_even_cash_cost),
        ("break_even_total_cost", outputs.break_even_total_cost),
        ("break_even_full_cost", outputs.break_even_full_cost),
    ]
}

pub fn write_report<P: AsRef<Path>>(path: P, report: &ScenarioReport) -> Result<(), EngineError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .from_path(path.as_ref())?;

    writer.write_record(["secao", "item", "valor"])?;
    writer.write_record(["cenario", "nome", report.scenario.as_str()])?;
    let generated_at = report.generated_at.to_rfc3339();
    writer.write_record(["cenario", "gerado_em", generated_at.as_str()])?;

    for &key in INPUT_FIELD_KEYS {
        let value = format_decimal(report.inputs.get(key).unwrap_or(0.0), 4);
        writer.write_record(["entrada", key, value.as_str()])?;
    }
    for (key, value) in output_rows(&report.outputs) {
        let value = format_decimal(value, 2);
        writer.write_record(["saida", key, value.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economics;
    use chrono::Utc;
    use shared::models::InputSet;
    use std::fs;

    fn sample_report() -> ScenarioReport {
        let inputs = InputSet::default();
        let outputs = economics::compute(&inputs);
        ScenarioReport {
            scenario: "Cenário Atual".to_string(),
            generated_at: Utc::now(),
            inputs,
            outputs,
        }
    }

    #[test]
    fn test_written_file_contains_every_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relatorio.csv");

        write_report(&path, &sample_report()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();

        assert!(contents.starts_with("secao;item;valor"));
        assert!(contents.contains("cenario;nome;Cenário Atual"));
        assert!(contents.contains("entrada;milk_price;2,6000"));
        assert!(contents.contains("entrada;silage_provision;11.340,0000"));
        assert!(contents.contains("saida;net_profit;4.162,66"));
        assert!(contents.contains("saida;break_even_full_cost;"));

        // header + 2 scenario rows + inputs + outputs
        let lines = contents.lines().count();
        assert_eq!(lines, 3 + INPUT_FIELD_KEYS.len() + 30);
    }

    #[test]
    fn test_unwritable_path_errors() {
        let result = write_report("/nonexistent-dir/relatorio.csv", &sample_report());
        assert!(result.is_err());
    }
}
