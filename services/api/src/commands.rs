use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use loan_eligibility::config::{AppConfig, ConfigError};
use loan_eligibility::eligibility::{
    parse_loan_amount, round_currency, EligibilityForm, EligibilityInput, EligibilityResult,
    EstimateResponse, Estimator, FormValue, ReferenceTable,
};
use loan_eligibility::error::AppError;
use std::fmt::Write;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Monthly net income
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) income: String,
    /// Monthly sum of existing debt commitments
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) commitments: String,
    /// Desired loan principal
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) loan_amount: String,
    /// Loan tenure in whole years
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) tenure_years: String,
    /// Print the estimate as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum TableFormat {
    #[default]
    Text,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct TableArgs {
    /// Loan principal to quote
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) loan_amount: String,
    /// Output format
    #[arg(long, value_enum, default_value_t = TableFormat::Text)]
    pub(crate) format: TableFormat,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let estimator = estimator_from(config)?;

    let form = EligibilityForm::from_text(
        &args.income,
        &args.commitments,
        &args.loan_amount,
        &args.tenure_years,
    );
    let input = form.parse(estimator.config())?;
    let result = estimator.estimate(&input);

    if args.json {
        let response = EstimateResponse::new(input, result);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let today = Local::now().date_naive();
        print!("{}", render_estimate(&input, &result, today));
    }

    Ok(())
}

pub(crate) fn run_reference_table(args: TableArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let estimator = estimator_from(config)?;

    let loan_amount = parse_loan_amount(Some(&FormValue::from(args.loan_amount.as_str())))?;
    let table = estimator.reference_table(loan_amount);

    match args.format {
        TableFormat::Text => print!("{}", render_reference_table(&table)),
        TableFormat::Csv => print!("{}", table.to_csv()?),
    }

    Ok(())
}

fn estimator_from(config: AppConfig) -> Result<Estimator, AppError> {
    let estimator =
        Estimator::new(config.estimator).map_err(|source| ConfigError::Estimator { source })?;
    Ok(estimator)
}

pub(crate) fn render_estimate(
    input: &EligibilityInput,
    result: &EligibilityResult,
    evaluated_on: NaiveDate,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Loan eligibility estimate (evaluated {evaluated_on})");
    let _ = writeln!(
        out,
        "Income {:.2}/month, commitments {:.2}/month",
        input.income, input.commitments
    );
    let _ = writeln!(
        out,
        "Requested {:.2} over {} year(s)",
        input.loan_amount, input.tenure_years
    );
    let _ = writeln!(out, "\n{}", result.status.label());
    let _ = writeln!(
        out,
        "- Monthly payment: {:.2}",
        round_currency(result.monthly_payment)
    );
    let _ = writeln!(
        out,
        "- Total interest: {:.2}",
        round_currency(result.total_interest)
    );
    let _ = writeln!(out, "- Debt service ratio: {:.1}%", result.dsr);
    let _ = writeln!(
        out,
        "- Maximum qualifying loan: {:.2}",
        round_currency(result.max_loan_amount)
    );
    let _ = writeln!(out, "\n{}", result.summary());
    out
}

pub(crate) fn render_reference_table(table: &ReferenceTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Instalments for {:.2} at {:.2}% flat",
        table.loan_amount, table.flat_rate_percent
    );
    for row in &table.rows {
        let _ = writeln!(
            out,
            "- {:>2} year(s): {:.2}/month, interest {:.2}, total {:.2}",
            row.tenure_years,
            round_currency(row.monthly_payment),
            round_currency(row.total_interest),
            round_currency(row.total_repayment)
        );
    }
    out
}
