use colored::Color;
use fineasy_core::{CategoryTotals, Summary, SummaryService};
use fineasy_domain::Transaction;

use crate::cli::chart::{palette_color, Bar, BarChart, INFLOW_COLOR, OUTFLOW_COLOR};
use crate::cli::format::Formatter;
use crate::cli::table::visible_width;

pub const NO_OUTFLOWS: &str = "Nenhuma saída registrada.";
const POSITIVE_BALANCE: Color = Color::TrueColor {
    r: 0x4f,
    g: 0x46,
    b: 0xe5,
};
const NEGATIVE_BALANCE: Color = Color::TrueColor {
    r: 0xea,
    g: 0x58,
    b: 0x0c,
};

/// Summary cards, inflow/outflow comparison, and spending per category.
pub fn render(transactions: &[Transaction], fmt: &Formatter, chart_width: usize) -> String {
    let summary = SummaryService::overview(transactions);
    let by_category = SummaryService::outflow_by_category(transactions);

    [
        render_cards(&summary, fmt),
        fmt.bold("Comparativo Mensal"),
        render_comparison(&summary, fmt, chart_width),
        String::new(),
        fmt.bold("Gastos por Categoria"),
        render_categories(&by_category, fmt, chart_width),
    ]
    .join("\n")
}

pub fn render_cards(summary: &Summary, fmt: &Formatter) -> String {
    let balance_color = if summary.balance >= 0.0 {
        POSITIVE_BALANCE
    } else {
        NEGATIVE_BALANCE
    };
    let cards = [
        ("ENTRADAS", fmt.money(summary.total_inflow), INFLOW_COLOR),
        ("SAÍDAS", fmt.money(summary.total_outflow), OUTFLOW_COLOR),
        ("SALDO TOTAL", fmt.money(summary.balance), balance_color),
    ];
    let label_width = cards
        .iter()
        .map(|(label, _, _)| visible_width(label))
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = cards
        .iter()
        .map(|(label, value, color)| {
            let pad = " ".repeat(label_width - visible_width(label));
            format!("{}{}  {}", fmt.dim(label), pad, fmt.paint(value, *color))
        })
        .collect();
    lines.push(String::new());
    lines.join("\n")
}

pub fn render_comparison(summary: &Summary, fmt: &Formatter, chart_width: usize) -> String {
    let mut chart = BarChart::new(chart_width);
    chart.push(Bar {
        label: "Entradas".into(),
        value: summary.total_inflow,
        caption: fmt.money(summary.total_inflow),
        color: INFLOW_COLOR,
    });
    chart.push(Bar {
        label: "Saídas".into(),
        value: summary.total_outflow,
        caption: fmt.money(summary.total_outflow),
        color: OUTFLOW_COLOR,
    });
    chart.render(fmt)
}

pub fn render_categories(totals: &CategoryTotals, fmt: &Formatter, chart_width: usize) -> String {
    if totals.is_empty() {
        return fmt.dim(NO_OUTFLOWS);
    }
    let mut chart = BarChart::new(chart_width);
    for (idx, share) in totals.shares().into_iter().enumerate() {
        chart.push(Bar {
            label: share.category,
            value: share.amount,
            caption: format!("{}  {}", fmt.money(share.amount), fmt.percent(share.percent)),
            color: palette_color(idx),
        });
    }
    chart.render(fmt)
}
