//! Company profile management under `/company`.

pub mod client;
pub mod queries;
pub mod types;

pub use client::CompaniesClient;
pub use queries::CompanyQueries;
pub use types::Company;
