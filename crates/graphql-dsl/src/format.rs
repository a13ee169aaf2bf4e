mod arguments;
mod directives;
mod formatter;
mod values;
mod variable_definitions;

pub use arguments::format_arguments;
pub use directives::format_directive;
pub use directives::format_directives;
pub use formatter::Formatter;
pub use values::format_value;
pub use variable_definitions::format_variable_definition;
pub use variable_definitions::format_variable_definitions;

#[cfg(test)]
mod tests;
