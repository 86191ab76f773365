pub mod alerts;
pub mod browser;
pub mod execute;
pub mod ledger;
pub mod notifications;
pub mod protect;
pub mod recommend;
