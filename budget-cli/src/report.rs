//! Plain-text rendering of engine results.

use std::fmt::Write;

use budget_core::calculations::allocation::UNNAMED_LABEL;
use budget_core::{AffordabilityCheck, NetWorth, Period, RentRule, TaxResult};
use rust_decimal::Decimal;

use crate::state::BudgetState;
use crate::utils::{format_money, opt_decimal_display};

pub fn render_tax(
    result: &TaxResult,
    period: Period,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Gross Annual Salary:  ${}", format_money(result.gross_income));
    let _ = writeln!(out, "  Federal tax:        ${}", format_money(result.federal_tax));
    let _ = writeln!(out, "  State tax:          ${}", format_money(result.state_tax));
    let _ = writeln!(out, "  Local tax:          ${}", format_money(result.local_tax));
    let _ = writeln!(out, "  Total tax:          ${}", format_money(result.total_tax));
    let _ = writeln!(out, "  Effective rate:     {}%", format_money(result.effective_rate()));
    let _ = writeln!(
        out,
        "Estimated {} Take Home Pay: ${}",
        period.label(),
        format_money(period.scale_annual(result.net_income))
    );
    out
}

pub fn render_affordability(
    check: &AffordabilityCheck,
    rule: RentRule,
) -> String {
    match check.required_income {
        Some(required) => {
            let mark = if check.is_valid { "✅" } else { "❌" };
            format!("{mark} {check} (needs ${} gross)", format_money(required))
        }
        None => format!("Enter gross income and monthly rent to check the {rule} rule"),
    }
}

pub fn render_net_worth(net_worth: &NetWorth) -> String {
    format!(
        "Assets: ${}  Liabilities: ${}  Net Worth: ${}",
        format_money(net_worth.total_assets),
        format_money(net_worth.total_liabilities),
        format_money(net_worth.net_worth)
    )
}

/// Full budget report: take-home pay, rent rule, expense rows, monthly total
/// and the chart breakdown.
pub fn render_plan(state: &BudgetState) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Estimated {} Take Home Pay: ${}",
        state.display_period().label(),
        format_money(state.take_home_pay())
    );
    let _ = writeln!(
        out,
        "Monthly Rent: {}",
        opt_decimal_display(state.monthly_rent())
    );
    let _ = writeln!(
        out,
        "{}",
        render_affordability(&state.affordability(), state.rent_rule())
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<24} {:>12} {:<8} {:>8}", "Expense", "Amount", "Period", "%");
    for item in state.items() {
        let name = if item.name.is_empty() { UNNAMED_LABEL } else { item.name.as_str() };
        let _ = writeln!(
            out,
            "{:<24} {:>12} {:<8} {:>8}",
            name,
            opt_decimal_display(item.amount),
            item.period().label(),
            opt_decimal_display(item.percentage)
        );
    }

    let summary = state.summary();
    let _ = writeln!(
        out,
        "Total Monthly Expenses: ${}",
        format_money(summary.total_monthly_expense)
    );

    let slices = state.breakdown();
    if !slices.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Breakdown:");
        let total = slices
            .iter()
            .map(|slice| slice.value)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        for slice in &slices {
            let share = slice
                .value
                .checked_div(total)
                .and_then(|fraction| fraction.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO);
            let _ = writeln!(
                out,
                "  {} {:<24} ${:>10} {:>6}%",
                slice.color,
                slice.label,
                format_money(slice.value),
                format_money(share)
            );
        }
    }

    out
}
