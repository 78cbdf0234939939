pub mod errors;
pub mod features;
pub mod generator;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod validation;

#[cfg(test)]
mod tests;
