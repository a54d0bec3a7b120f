use super::common::*;
use crate::eligibility::config::UNAFFORDABLE_DSR;
use crate::eligibility::{estimate, EligibilityStatus};

#[test]
fn salaried_applicant_is_pre_approved() {
    let result = estimator().estimate(&salaried_applicant());

    assert_eq!(result.status, EligibilityStatus::Approved);
    assert_eq!(result.status.label(), "Pre-Approved!");
    assert_close(result.total_interest, 12_200.0);
    assert_close(result.monthly_payment, 62_200.0 / 60.0);
    assert_close(result.dsr, (1_500.0 + 62_200.0 / 60.0) * 100.0 / 8_000.0);
    assert_close(result.max_loan_amount, 3_300.0 * 60.0 / 1.244);
}

#[test]
fn overextended_applicant_is_declined_without_headroom() {
    let result = estimator().estimate(&overextended_applicant());

    assert_eq!(result.status, EligibilityStatus::Declined);
    assert!(result.dsr > 60.0);
    assert_eq!(result.max_loan_amount, 0.0);
}

#[test]
fn stretched_applicant_is_conditional() {
    let result = estimator().estimate(&stretched_applicant());

    assert_eq!(result.status, EligibilityStatus::Conditional);
    assert!(result.dsr > 50.0 && result.dsr <= 60.0);
    assert!(result.max_loan_amount > 40_000.0);
}

#[test]
fn zero_income_short_circuits_to_declined() {
    let result = estimate(&input(0.0, 0.0, 10_000.0, 5));

    assert_eq!(result.status, EligibilityStatus::Declined);
    assert_eq!(result.max_loan_amount, 0.0);
    assert_eq!(result.dsr, UNAFFORDABLE_DSR);
    assert_close(result.total_interest, 2_440.0);
    assert_close(result.monthly_payment, 12_440.0 / 60.0);
    assert!(result.monthly_payment.is_finite());
}

#[test]
fn ratio_on_approved_ceiling_is_approved() {
    let result = interest_free_estimator().estimate(&input(4_000.0, 1_000.0, 12_000.0, 1));

    assert_eq!(result.dsr, 50.0);
    assert_eq!(result.status, EligibilityStatus::Approved);
}

#[test]
fn ratio_on_conditional_ceiling_is_conditional() {
    let estimator = interest_free_estimator();

    let on_ceiling = estimator.estimate(&input(4_000.0, 1_400.0, 12_000.0, 1));
    assert_eq!(on_ceiling.dsr, 60.0);
    assert_eq!(on_ceiling.status, EligibilityStatus::Conditional);

    let above_ceiling = estimator.estimate(&input(4_000.0, 1_401.0, 12_000.0, 1));
    assert_eq!(above_ceiling.status, EligibilityStatus::Declined);
}

#[test]
fn max_loan_amount_lands_on_conditional_ceiling() {
    let estimator = estimator();
    let baseline = estimator.estimate(&salaried_applicant());
    let max = baseline.max_loan_amount;

    let at_max = estimator.estimate(&input(8_000.0, 1_500.0, max, 5));
    assert_close(at_max.dsr, 60.0);

    let below = estimator.estimate(&input(8_000.0, 1_500.0, max - 1.0, 5));
    assert_eq!(below.status, EligibilityStatus::Conditional);

    let above = estimator.estimate(&input(8_000.0, 1_500.0, max + 1.0, 5));
    assert_eq!(above.status, EligibilityStatus::Declined);
}

#[test]
fn identical_inputs_produce_identical_results() {
    let estimator = estimator();
    let first = estimator.estimate(&stretched_applicant());
    let second = estimator.estimate(&stretched_applicant());

    assert_eq!(first, second);
    assert_eq!(first.dsr.to_bits(), second.dsr.to_bits());
}

#[test]
fn contract_violations_still_yield_finite_output() {
    let estimator = estimator();
    let cases = [
        input(f64::NAN, 100.0, 10_000.0, 5),
        input(5_000.0, -100.0, 10_000.0, 5),
        input(5_000.0, 100.0, f64::INFINITY, 5),
        input(5_000.0, 100.0, 10_000.0, 0),
        input(1e-300, 1_000.0, 10_000.0, 1),
    ];

    for case in cases {
        let result = estimator.estimate(&case);
        for value in [
            result.dsr,
            result.max_loan_amount,
            result.monthly_payment,
            result.total_interest,
        ] {
            assert!(value.is_finite() && value >= 0.0, "{case:?} -> {result:?}");
        }
    }
}

#[test]
fn classify_partitions_ratios() {
    let estimator = estimator();
    assert_eq!(estimator.classify(0.0), EligibilityStatus::Approved);
    assert_eq!(estimator.classify(50.0), EligibilityStatus::Approved);
    assert_eq!(estimator.classify(50.01), EligibilityStatus::Conditional);
    assert_eq!(estimator.classify(60.0), EligibilityStatus::Conditional);
    assert_eq!(estimator.classify(60.01), EligibilityStatus::Declined);
}
