//! Table rows for the plain and pretty report modes.

use statements_core::report::{
    AccountBalance, AccountTrialBalance, BalanceSheetLine, TrialBalanceLine, TrialBalanceTotals,
};

use crate::ui::{amount, UiContext};

pub fn trial_balance_rows(ctx: &UiContext, lines: &[TrialBalanceLine]) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| {
            vec![
                line.section.clone(),
                line.account_name.clone(),
                amount(ctx, line.debit),
                amount(ctx, line.credit),
            ]
        })
        .collect()
}

/// Footer row aligned under the debit and credit columns.
///
/// `leading` is the number of label columns before the amounts.
pub fn trial_balance_footer(
    ctx: &UiContext,
    totals: &TrialBalanceTotals,
    leading: usize,
) -> Vec<String> {
    let mut footer = vec!["Total".to_string()];
    footer.extend(std::iter::repeat(String::new()).take(leading.saturating_sub(1)));
    footer.push(amount(ctx, totals.total_debit));
    footer.push(amount(ctx, totals.total_credit));
    footer
}

pub fn trial_balance_short_rows(
    ctx: &UiContext,
    rows: &[AccountTrialBalance],
) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.account_id.to_string(),
                row.account_name.clone(),
                row.account_type.to_string(),
                amount(ctx, row.debit),
                amount(ctx, row.credit),
            ]
        })
        .collect()
}

pub fn account_balance_rows(ctx: &UiContext, rows: &[AccountBalance]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.account_id.to_string(),
                row.account_name.clone(),
                row.account_type.to_string(),
                amount(ctx, row.total_debit),
                amount(ctx, row.total_credit),
                amount(ctx, row.balance),
            ]
        })
        .collect()
}

pub fn balance_sheet_rows(ctx: &UiContext, lines: &[BalanceSheetLine]) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| {
            vec![
                line.section.clone(),
                line.account_name.clone(),
                amount(ctx, line.balance),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode,
        }
    }

    #[test]
    fn test_trial_balance_rows_by_mode() {
        let lines = vec![TrialBalanceLine {
            section: "Assets".to_string(),
            account_name: "Cash".to_string(),
            debit: dec!(44000),
            credit: Decimal::ZERO,
        }];

        let pretty = trial_balance_rows(&ctx(OutputMode::Pretty), &lines);
        assert_eq!(pretty[0], vec!["Assets", "Cash", "44,000.00", "0.00"]);

        let plain = trial_balance_rows(&ctx(OutputMode::Plain), &lines);
        assert_eq!(plain[0], vec!["Assets", "Cash", "44000.00", "0.00"]);
    }

    #[test]
    fn test_footer_pads_label_columns() {
        let totals = TrialBalanceTotals {
            total_debit: dec!(10),
            total_credit: dec!(10),
            is_balanced: true,
        };
        let footer = trial_balance_footer(&ctx(OutputMode::Plain), &totals, 3);
        assert_eq!(footer, vec!["Total", "", "", "10.00", "10.00"]);
    }
}
