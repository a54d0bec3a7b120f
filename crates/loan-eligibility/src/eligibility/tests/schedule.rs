use super::common::*;
use crate::eligibility::round_currency;

#[test]
fn reference_table_covers_configured_tenures() {
    let table = estimator().reference_table(10_000.0);

    assert_eq!(table.loan_amount, 10_000.0);
    assert_eq!(table.flat_rate_percent, 4.88);
    assert_eq!(table.rows.len(), 10);
    assert_eq!(table.rows.first().map(|row| row.tenure_years), Some(1));
    assert_eq!(table.rows.last().map(|row| row.tenure_years), Some(10));

    let one_year = &table.rows[0];
    assert_close(one_year.total_interest, 488.0);
    assert_close(one_year.monthly_payment, 874.0);
    assert_close(one_year.total_repayment, 10_488.0);
}

#[test]
fn longer_tenures_lower_payments_and_raise_interest() {
    let table = estimator().reference_table(50_000.0);

    for pair in table.rows.windows(2) {
        assert!(pair[1].monthly_payment < pair[0].monthly_payment);
        assert!(pair[1].total_interest > pair[0].total_interest);
    }
}

#[test]
fn reference_rows_match_estimator_instalments() {
    let estimator = estimator();
    let table = estimator.reference_table(50_000.0);
    let result = estimator.estimate(&salaried_applicant());

    let five_years = &table.rows[4];
    assert_eq!(five_years.tenure_years, 5);
    assert_close(five_years.monthly_payment, result.monthly_payment);
    assert_close(five_years.total_interest, result.total_interest);
}

#[test]
fn csv_export_formats_money_to_cents() {
    let csv = estimator()
        .reference_table(10_000.0)
        .to_csv()
        .expect("csv renders");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(
        lines[0],
        "tenure_years,monthly_payment,total_interest,total_repayment"
    );
    assert_eq!(lines[1], "1,874.00,488.00,10488.00");
}

#[test]
fn round_currency_rounds_to_cents() {
    assert_eq!(round_currency(1_036.666_666), 1_036.67);
    assert_eq!(round_currency(874.0), 874.0);
    assert_eq!(round_currency(0.004), 0.0);
}
