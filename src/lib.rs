//! Point-in-time valuation of investor portfolios made of equities, real estate and
//! (possibly nested) funds.

pub mod app;
pub mod db;
pub mod models;
pub mod services;

#[cfg(test)]
mod test;
