// Scenario workbook access (.xlsx): one worksheet per named scenario.
use crate::data::grid::ScenarioGrid;
use crate::error::EngineError;
use calamine::{open_workbook, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Summary/aggregation sheets that are never offered as scenarios.
/// Compared case-insensitively.
const RESERVED_SHEETS: &[&str] = &["resumo", "dre", "consolidado", "gráficos"];

pub struct ScenarioWorkbook {
    workbook: Xlsx<BufReader<File>>,
    path: PathBuf,
}

impl ScenarioWorkbook {
    /// A missing file is the one fatal startup error this tool has; every
    /// later lookup failure degrades to defaults instead.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EngineError::WorkbookNotFound(path.display().to_string()));
        }

        let workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| EngineError::WorkbookRead(e.to_string()))?;

        Ok(ScenarioWorkbook {
            workbook,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Worksheet names selectable as scenarios, in workbook order.
    pub fn scenario_names(&self) -> Vec<String> {
        self.workbook
            .sheet_names()
            .iter()
            .filter(|name| {
                let lower = name.to_lowercase();
                !RESERVED_SHEETS.contains(&lower.as_str())
            })
            .cloned()
            .collect()
    }

    /// Reads one scenario sheet into a grid. Reserved sheets are not
    /// loadable as scenarios.
    pub fn load_grid(&mut self, scenario: &str) -> Result<ScenarioGrid, EngineError> {
        if !self.scenario_names().iter().any(|n| n == scenario) {
            return Err(EngineError::ScenarioNotFound(scenario.to_string()));
        }

        let range = self
            .workbook
            .worksheet_range(scenario)
            .map_err(|e| EngineError::WorkbookRead(e.to_string()))?;

        Ok(ScenarioGrid::from_range(&range))
    }
}
