// Raw scenario worksheet held as an immutable matrix of cells.
use calamine::{Data, Range};

/// One worksheet cell, reduced to the three shapes the resolver cares
/// about. Booleans, dates, and error cells count as empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    fn from_data(data: &Data) -> Cell {
        match data {
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(trimmed.to_string())
                }
            }
            _ => Cell::Empty,
        }
    }
}

/// The grid read from one scenario sheet. Produced once per scenario
/// selection and never mutated; rows may have different lengths.
#[derive(Debug, Clone, Default)]
pub struct ScenarioGrid {
    rows: Vec<Vec<Cell>>,
}

impl ScenarioGrid {
    pub fn from_range(range: &Range<Data>) -> Self {
        let rows = range
            .rows()
            .map(|row| row.iter().map(Cell::from_data).collect())
            .collect();
        ScenarioGrid { rows }
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        ScenarioGrid { rows }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_shapes() {
        assert_eq!(Cell::from_data(&Data::Int(40)), Cell::Number(40.0));
        assert_eq!(Cell::from_data(&Data::Float(2.6)), Cell::Number(2.6));
        assert_eq!(
            Cell::from_data(&Data::String("  Preço do Leite ".to_string())),
            Cell::Text("Preço do Leite".to_string())
        );
        assert_eq!(Cell::from_data(&Data::String("   ".to_string())), Cell::Empty);
        assert_eq!(Cell::from_data(&Data::Bool(true)), Cell::Empty);
        assert_eq!(Cell::from_data(&Data::Empty), Cell::Empty);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = ScenarioGrid::from_rows(vec![vec![Cell::Number(1.0)]]);
        assert_eq!(grid.get(0, 0), Some(&Cell::Number(1.0)));
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(1, 0), None);
    }
}
