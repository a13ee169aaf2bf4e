mod concurrency_tests;
mod strategies;
mod variable_definition_tests;
