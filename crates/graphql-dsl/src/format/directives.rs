use crate::Directive;
use crate::FormatError;
use crate::format::format_arguments;

type Result<T> = std::result::Result<T, FormatError>;

/// Render one directive as `@name` or `@name(arguments)`.
pub fn format_directive(directive: &Directive, is_const: bool) -> Result<String> {
    let name = directive.name();
    let at_sign = if name.starts_with('@') { "" } else { "@" };
    let arguments = format_arguments(directive.arguments(), is_const)?;
    Ok(format!("{at_sign}{name}{arguments}"))
}

/// Render a directive list joined by single spaces, or `None` when there are
/// no directives.
pub fn format_directives(
    directives: &[Directive],
    is_const: bool,
) -> Result<Option<String>> {
    if directives.is_empty() {
        return Ok(None);
    }

    let directives =
        directives.iter()
            .map(|directive| format_directive(directive, is_const))
            .collect::<Result<Vec<_>>>()?;

    Ok(Some(directives.join(" ")))
}
