mod arguments_tests;
mod values_tests;
