
mod derivation_tests;
