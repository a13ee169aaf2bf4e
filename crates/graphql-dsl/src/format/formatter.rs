use crate::Document;
use crate::Field;
use crate::FormatError;
use crate::FragmentDefinition;
use crate::FragmentSpread;
use crate::InlineFragment;
use crate::Node;
use crate::Operation;
use crate::OperationKind;
use crate::SelectionSet;
use crate::format::format_arguments;
use crate::format::format_directives;
use crate::format::format_variable_definitions;
use std::borrow::Cow;

type Result<T> = std::result::Result<T, FormatError>;

const DEFAULT_INDENT_UNIT: &str = "  ";

/// Renders document nodes as indented GraphQL text.
///
/// A [`Formatter`] holds nothing but its indent unit, so one instance can be
/// shared across threads and reused for any number of documents.
///
/// Layout rules:
///
/// - Documents join their definitions with a blank line.
/// - Operations and fragment definitions print a signature line followed by
///   a brace block on its own lines. The signature of an anonymous query
///   without variables or directives is elided entirely.
/// - Fields print a brace block only when they have sub-selections.
/// - Fragment spreads are always a single line.
#[derive(Clone, Debug, PartialEq)]
pub struct Formatter {
    indent_unit: Cow<'static, str>,
}
impl Formatter {
    /// A [`Formatter`] indenting with two spaces per level.
    pub fn new() -> Self {
        Self {
            indent_unit: Cow::Borrowed(DEFAULT_INDENT_UNIT),
        }
    }

    /// A [`Formatter`] using `indent_unit` for each indentation level.
    pub fn with_indent_unit(indent_unit: impl Into<String>) -> Self {
        Self {
            indent_unit: Cow::Owned(indent_unit.into()),
        }
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// Render `node` with every line indented by `level` units.
    pub fn format_node(&self, node: Node<'_>, level: usize) -> Result<String> {
        log::trace!("Formatting {} at indent level {level}.", node.kind_name());
        match node {
            Node::Document(document) => self.format_document(document, level),
            Node::Field(field) => self.format_field(field, level),
            Node::FragmentDefinition(fragment) =>
                self.format_fragment_definition(fragment, level),
            Node::FragmentSpread(spread) => self.format_fragment_spread(spread, level),
            Node::InlineFragment(inline) => self.format_inline_fragment(inline, level),
            Node::Operation(operation) => self.format_operation(operation, level),
        }
    }

    fn format_document(&self, document: &Document, level: usize) -> Result<String> {
        let definitions =
            document.definitions()
                .iter()
                .map(|definition| self.format_node(definition.try_into()?, level))
                .collect::<Result<Vec<_>>>()?;
        Ok(definitions.join("\n\n"))
    }

    fn format_field(&self, field: &Field, level: usize) -> Result<String> {
        let mut signature = String::new();
        if let Some(alias) = field.alias() {
            signature.push_str(alias);
            signature.push_str(": ");
        }
        signature.push_str(field.name());
        signature.push_str(&format_arguments(field.arguments(), false)?);
        if let Some(directives) = format_directives(field.directives(), false)? {
            signature.push(' ');
            signature.push_str(&directives);
        }

        let mut lines = vec![self.indent(level) + &signature];
        if !field.selection_set().is_empty() {
            self.append_selection_block(&mut lines, field.selection_set(), level)?;
        }
        Ok(lines.join("\n"))
    }

    fn format_fragment_definition(
        &self,
        fragment: &FragmentDefinition,
        level: usize,
    ) -> Result<String> {
        let mut signature = vec![
            format!("fragment {}", fragment.name()),
            format!("on {}", fragment.type_condition()),
        ];
        if let Some(directives) = format_directives(fragment.directives(), false)? {
            signature.push(directives);
        }

        let mut lines = vec![self.indent(level) + &signature.join(" ")];
        self.append_selection_block(&mut lines, fragment.selection_set(), level)?;
        Ok(lines.join("\n"))
    }

    fn format_fragment_spread(
        &self,
        spread: &FragmentSpread,
        level: usize,
    ) -> Result<String> {
        let mut line = format!("{}...{}", self.indent(level), spread.name());
        if let Some(directives) = format_directives(spread.directives(), false)? {
            line.push(' ');
            line.push_str(&directives);
        }
        Ok(line)
    }

    fn format_inline_fragment(
        &self,
        inline: &InlineFragment,
        level: usize,
    ) -> Result<String> {
        let mut signature = vec!["...".to_string()];
        if let Some(type_condition) = inline.type_condition() {
            signature.push(format!("on {type_condition}"));
        }
        if let Some(directives) = format_directives(inline.directives(), false)? {
            signature.push(directives);
        }

        let mut lines = vec![self.indent(level) + &signature.join(" ")];
        self.append_selection_block(&mut lines, inline.selection_set(), level)?;
        Ok(lines.join("\n"))
    }

    fn format_operation(&self, operation: &Operation, level: usize) -> Result<String> {
        let mut lines = vec![];
        if let Some(signature) = self.format_operation_signature(operation)? {
            lines.push(self.indent(level) + &signature);
        }
        self.append_selection_block(&mut lines, operation.selection_set(), level)?;
        Ok(lines.join("\n"))
    }

    /// `None` when the operation is an anonymous query with neither
    /// variables nor directives.
    fn format_operation_signature(
        &self,
        operation: &Operation,
    ) -> Result<Option<String>> {
        let variable_definitions =
            format_variable_definitions(operation.variable_definitions())?;
        let directives = format_directives(operation.directives(), false)?;

        if operation.kind() == OperationKind::Query
            && operation.name().is_none()
            && variable_definitions.is_none()
            && directives.is_none() {
            return Ok(None);
        }

        let mut signature = vec![operation.kind().as_str().to_string()];
        match (operation.name(), variable_definitions) {
            (Some(name), Some(variable_definitions)) =>
                signature.push(format!("{name}{variable_definitions}")),
            (Some(name), None) => signature.push(name.to_string()),
            (None, Some(variable_definitions)) => signature.push(variable_definitions),
            (None, None) => (),
        }
        if let Some(directives) = directives {
            signature.push(directives);
        }

        Ok(Some(signature.join(" ")))
    }

    /// Append `{`, each selection one level deeper, and `}`.
    fn append_selection_block(
        &self,
        lines: &mut Vec<String>,
        selection_set: &SelectionSet,
        level: usize,
    ) -> Result<()> {
        lines.push(self.indent(level) + "{");
        for selection in selection_set {
            lines.push(self.format_node(selection.try_into()?, level + 1)?);
        }
        lines.push(self.indent(level) + "}");
        Ok(())
    }

    fn indent(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }
}
impl std::default::Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
