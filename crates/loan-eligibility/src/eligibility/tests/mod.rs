mod common;
mod estimator;
mod schedule;
