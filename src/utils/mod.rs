pub mod calculator;
pub mod catalog;
pub mod ledger;
pub mod planner;
pub mod validation;
