mod literal_value_tests;
mod reentrancy_tests;
mod source_position_tests;
pub(crate) mod utils;
