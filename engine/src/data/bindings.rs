// The recognized input vocabulary: which label each InputSet field is
// scraped from, and how. This table is the only place the sheet layout is
// known; defaults come from InputSet::default().

/// How a field's value is located once its label is matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    /// Read the cell `offset` columns to the right of the label.
    Cell { offset: usize },
    /// Sum every numeric cell in the label's column below the label row.
    ColumnSum,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldBinding {
    pub key: &'static str,
    pub label: &'static str,
    pub lookup: Lookup,
}

const CELL: Lookup = Lookup::Cell { offset: 1 };

pub const FIELD_BINDINGS: &[FieldBinding] = &[
    // Herd and production
    FieldBinding { key: "lactating_cows", label: "Vacas em Lactação", lookup: CELL },
    FieldBinding { key: "liters_per_cow", label: "Litros/Vaca", lookup: CELL },
    FieldBinding { key: "milk_price", label: "Preço do Leite", lookup: CELL },
    FieldBinding { key: "nursing_calves", label: "Bezerras em Aleitamento", lookup: CELL },
    FieldBinding { key: "milk_per_calf", label: "Leite/Bezerra", lookup: CELL },
    FieldBinding { key: "pre_partum_cows", label: "Vacas Pré-Parto", lookup: CELL },
    FieldBinding { key: "dry_cows", label: "Vacas Secas", lookup: CELL },
    FieldBinding { key: "rearing_stock", label: "Recria Total", lookup: CELL },
    // Payroll
    FieldBinding { key: "milker_salary", label: "Salário Ordenhador", lookup: CELL },
    FieldBinding { key: "milker_bonus", label: "Bonificação Ordenhador", lookup: CELL },
    FieldBinding { key: "handler_salary", label: "Salário Tratador", lookup: CELL },
    FieldBinding { key: "handler_bonus", label: "Bonificação Tratador", lookup: CELL },
    FieldBinding { key: "other_salary", label: "Outros Salários", lookup: CELL },
    // Feed prices
    FieldBinding { key: "conc_price_lactation", label: "Preço Conc. Lactação", lookup: CELL },
    FieldBinding { key: "conc_price_pre_partum", label: "Preço Conc. Pré-Parto", lookup: CELL },
    FieldBinding { key: "pulp_price", label: "Preço Polpa", lookup: CELL },
    FieldBinding { key: "silage_price_per_ton", label: "Preço Silagem", lookup: CELL },
    // Consumption
    FieldBinding { key: "conc_kg_lactation", label: "Consumo Conc. Lactação", lookup: CELL },
    FieldBinding { key: "conc_kg_pre_partum", label: "Consumo Conc. Pré-Parto", lookup: CELL },
    FieldBinding { key: "pulp_kg", label: "Consumo Polpa", lookup: CELL },
    FieldBinding { key: "silage_kg_lactation", label: "Silagem Lactação", lookup: CELL },
    FieldBinding { key: "silage_kg_pre_partum", label: "Silagem Pré-Parto", lookup: CELL },
    FieldBinding { key: "silage_kg_dry", label: "Silagem Seca", lookup: CELL },
    // Fixed operating costs
    FieldBinding { key: "maintenance", label: "Manutenção GEA", lookup: CELL },
    FieldBinding { key: "supply_store", label: "Lojas Agropecuárias", lookup: CELL },
    FieldBinding { key: "genetics_service", label: "Alta Genetics", lookup: CELL },
    FieldBinding { key: "other_fixed_costs", label: "Outros Fixos", lookup: CELL },
    FieldBinding { key: "rearing_fixed_cost", label: "Custo Recria", lookup: CELL },
    // Provisions and depreciation
    FieldBinding { key: "silage_provision", label: "Provisão Silagem", lookup: CELL },
    FieldBinding { key: "financing_provision", label: "Financiamentos", lookup: Lookup::ColumnSum },
    FieldBinding { key: "fertilizer_provision", label: "Adubação", lookup: CELL },
    FieldBinding { key: "depreciation", label: "Depreciação", lookup: Lookup::ColumnSum },
];
