// Text rendering of the five report sections, Brazilian formatting
// throughout. The engine never formats anything; this is the only place
// numbers become strings for the screen.

use shared::models::ScenarioReport;
use shared::utils::brazilian_format::{format_currency, format_decimal, format_int};

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}

fn line(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<28}{:>18}\n", label, value));
}

pub fn render(report: &ScenarioReport) -> String {
    let i = &report.inputs;
    let o = &report.outputs;
    let mut out = String::new();

    out.push_str(&format!(
        "Demonstrativo de Resultados - {}\nGerado em {}\n",
        report.scenario,
        report.generated_at.format("%d/%m/%Y %H:%M")
    ));

    section(&mut out, "1. Indicadores Financeiros");
    line(&mut out, "EBITDA", &format_currency(o.ebitda));
    line(&mut out, "Custo por litro", &format_currency(o.cost_per_liter));
    line(
        &mut out,
        "Endividamento",
        &format!("{}%", format_decimal(o.debt_ratio, 1)),
    );
    line(
        &mut out,
        "P.E. (C.O.E)",
        &format!("{} L", format_int(o.break_even_cash_cost)),
    );
    line(
        &mut out,
        "P.E. (C.O.T)",
        &format!("{} L", format_int(o.break_even_total_cost)),
    );
    line(
        &mut out,
        "P.E. (C.T)",
        &format!("{} L", format_int(o.break_even_full_cost)),
    );

    section(&mut out, "2. Desembolso Mensal");
    line(&mut out, "Concentrado Total", &format_currency(o.total_concentrate));
    line(&mut out, "Polpa + Caroço", &format_currency(o.pulp_cost));
    line(&mut out, "GEA", &format_currency(i.maintenance));
    line(&mut out, "Lojas Agropec.", &format_currency(i.supply_store));
    line(&mut out, "Alta Genetics", &format_currency(i.genetics_service));
    line(&mut out, "Pessoal (+ Encargos)", &format_currency(o.payroll_total));
    line(&mut out, "Outros", &format_currency(i.other_fixed_costs));
    line(&mut out, "TOTAL", &format_currency(o.disbursement));

    section(&mut out, "3. Fluxo de Caixa");
    line(&mut out, "Receita Líquida", &format_currency(o.net_revenue));
    line(&mut out, "(+) Saldo Operacional", &format_currency(o.operating_balance));
    line(&mut out, "(-) Provisionar", &format_currency(o.total_provisions));
    line(&mut out, "  . Silagem", &format_currency(i.silage_provision));
    line(&mut out, "  . Financ.", &format_currency(i.financing_provision));
    line(&mut out, "  . Adubação", &format_currency(i.fertilizer_provision));
    line(&mut out, "  . Encargos (21,2%)", &format_currency(o.payroll_burden));
    line(&mut out, "(=) Lucro Líquido", &format_currency(o.net_profit));

    section(&mut out, "4. Produção");
    line(&mut out, "Vacas Lactação", &format_int(i.lactating_cows));
    line(&mut out, "Litros/Vaca", &format_decimal(i.liters_per_cow, 1));
    line(
        &mut out,
        "Prod. Prevista",
        &format!("{} L", format_int(o.monthly_forecast)),
    );
    line(
        &mut out,
        "Prod. Entregue x2",
        &format!("{} L", format_int(o.delivered_twice_daily)),
    );
    line(
        &mut out,
        "Prod. Entregue Mês",
        &format!("{} L", format_int(o.monthly_delivered)),
    );

    section(&mut out, "5. Gasto Concentrado");
    line(&mut out, "Lactação", &format_currency(o.concentrate_lactation));
    line(&mut out, "Pré-Parto", &format_currency(o.concentrate_pre_partum));
    line(&mut out, "Recria/Sal", &format_currency(o.rearing_allowance));

    out
}
