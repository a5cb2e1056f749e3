// Scenario orchestration: owns the open workbook, hands out sessions.
//
// A session is the working copy of one scenario: the inputs resolved from
// its sheet (or defaulted), the user's edits on top, and a pure compute.
// The sheet is read once per load; edits and recomputes never go back to
// the file.

use crate::data::bindings::{Lookup, FIELD_BINDINGS};
use crate::data::grid::ScenarioGrid;
use crate::data::resolver;
use crate::data::workbook::ScenarioWorkbook;
use crate::economics;
use crate::error::EngineError;
use chrono::Utc;
use shared::models::{FieldResolution, InputSet, OutputSet, ScenarioReport};
use std::path::Path;

pub struct ScenarioService {
    workbook: ScenarioWorkbook,
}

impl ScenarioService {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let workbook = ScenarioWorkbook::open(path)?;
        tracing::info!(
            path = %workbook.path().display(),
            scenarios = workbook.scenario_names().len(),
            "Opened scenario workbook"
        );
        Ok(ScenarioService { workbook })
    }

    pub fn scenario_names(&self) -> Vec<String> {
        self.workbook.scenario_names()
    }

    pub fn load_scenario(&mut self, name: &str) -> Result<ScenarioSession, EngineError> {
        let grid = self.workbook.load_grid(name)?;
        let session = ScenarioSession::from_grid(name, &grid);
        tracing::info!(
            scenario = %name,
            rows = grid.row_count(),
            defaulted_fields = session.defaulted_fields().len(),
            "Loaded scenario"
        );
        Ok(session)
    }
}

pub struct ScenarioSession {
    scenario: String,
    inputs: InputSet,
    resolutions: Vec<FieldResolution>,
}

impl ScenarioSession {
    /// Resolves every bound field against the grid. Lookup failures fall
    /// back to the field's reference default, so the session is always
    /// fully populated.
    pub fn from_grid(name: &str, grid: &ScenarioGrid) -> Self {
        let defaults = InputSet::default();
        let mut inputs = InputSet::default();
        let mut resolutions = Vec::with_capacity(FIELD_BINDINGS.len());

        for binding in FIELD_BINDINGS {
            let default = defaults.get(binding.key).unwrap_or(0.0);
            let resolution = match binding.lookup {
                Lookup::Cell { offset } => resolver::resolve(grid, binding.label, offset, default),
                Lookup::ColumnSum => resolver::resolve_column_sum(grid, binding.label, default),
            };
            inputs.set(binding.key, resolution.value());
            resolutions.push(FieldResolution {
                field: binding.key.to_string(),
                resolution,
            });
        }

        ScenarioSession {
            scenario: name.to_string(),
            inputs,
            resolutions,
        }
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    /// Applies a user edit. Returns false (and changes nothing) for an
    /// unknown field key.
    pub fn set_input(&mut self, key: &str, value: f64) -> bool {
        let known = self.inputs.set(key, value);
        if known {
            tracing::debug!(field = %key, value, "Input edited");
        } else {
            tracing::warn!(field = %key, "Ignoring edit to unknown field");
        }
        known
    }

    /// Runs the full formula chain. Cheap and pure; called on every view.
    pub fn compute(&self) -> OutputSet {
        economics::compute(&self.inputs)
    }

    pub fn report(&self) -> ScenarioReport {
        ScenarioReport {
            scenario: self.scenario.clone(),
            generated_at: Utc::now(),
            inputs: self.inputs.clone(),
            outputs: self.compute(),
        }
    }

    pub fn resolutions(&self) -> &[FieldResolution] {
        &self.resolutions
    }

    /// Field keys that fell back to their defaults during resolution.
    pub fn defaulted_fields(&self) -> Vec<&str> {
        self.resolutions
            .iter()
            .filter(|f| f.resolution.is_defaulted())
            .map(|f| f.field.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::grid::Cell;

    fn t(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn n(v: f64) -> Cell {
        Cell::Number(v)
    }

    fn partial_grid() -> ScenarioGrid {
        ScenarioGrid::from_rows(vec![
            vec![t("Vacas em Lactação"), n(50.0)],
            vec![t("Preço do Leite"), t("R$ 3,00")],
            vec![t("Financiamentos")],
            vec![t("Trator"), Cell::Empty],
            vec![n(800.0)],
            vec![n(351.44)],
        ])
    }

    #[test]
    fn test_resolved_fields_override_defaults() {
        let session = ScenarioSession::from_grid("Teste", &partial_grid());
        assert_eq!(session.inputs().lactating_cows, 50.0);
        assert_eq!(session.inputs().milk_price, 3.0);
        // column sum: 800 + 351.44 in the Financiamentos column
        assert!((session.inputs().financing_provision - 1151.44).abs() < 1e-9);
    }

    #[test]
    fn test_unresolved_fields_keep_defaults() {
        let session = ScenarioSession::from_grid("Teste", &partial_grid());
        let defaults = InputSet::default();
        assert_eq!(session.inputs().liters_per_cow, defaults.liters_per_cow);
        assert_eq!(session.inputs().silage_provision, defaults.silage_provision);

        let defaulted = session.defaulted_fields();
        assert!(defaulted.contains(&"liters_per_cow"));
        assert!(!defaulted.contains(&"lactating_cows"));
        assert!(!defaulted.contains(&"milk_price"));
    }

    #[test]
    fn test_every_field_gets_a_resolution() {
        let session = ScenarioSession::from_grid("Teste", &ScenarioGrid::default());
        assert_eq!(
            session.resolutions().len(),
            shared::models::INPUT_FIELD_KEYS.len()
        );
        // empty grid: everything defaulted, compute still total
        assert_eq!(
            session.defaulted_fields().len(),
            shared::models::INPUT_FIELD_KEYS.len()
        );
        assert!(session.compute().net_profit.is_finite());
    }

    #[test]
    fn test_edit_then_recompute() {
        let mut session = ScenarioSession::from_grid("Teste", &ScenarioGrid::default());
        let before = session.compute();

        assert!(session.set_input("milk_price", 3.0));
        let after = session.compute();
        assert!(after.gross_revenue > before.gross_revenue);

        assert!(!session.set_input("turbina", 1.0));
        assert_eq!(session.compute(), after);
    }

    #[test]
    fn test_report_carries_inputs_and_outputs() {
        let session = ScenarioSession::from_grid("Cenário Atual", &ScenarioGrid::default());
        let report = session.report();
        assert_eq!(report.scenario, "Cenário Atual");
        assert_eq!(report.inputs, *session.inputs());
        assert_eq!(report.outputs, session.compute());
    }
}
