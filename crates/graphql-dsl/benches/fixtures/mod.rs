use graphql_dsl::Document;
use graphql_dsl::Field;
use graphql_dsl::prelude::*;

/// Builds a query whose selections nest `depth` fields deep.
///
/// Each level selects `id` and a `child` field holding the next level. The
/// innermost level selects `id` and `name`.
pub fn deeply_nested_query(depth: usize) -> Result<Document, BuildError> {
    fn nest(field: &mut Field, remaining: usize) -> Result<(), BuildError> {
        field.field("id")?;
        if remaining == 0 {
            field.field("name")?;
            return Ok(());
        }
        field.field_with("child", |child| nest(child, remaining - 1))?;
        Ok(())
    }

    graphql_dsl::document(|doc| {
        doc.query(Some("DeeplyNested"), |query| {
            query.field_with("root", |root| nest(root, depth))?;
            Ok(())
        })?;
        Ok(())
    })
}

/// Builds a document containing `count` named query operations plus one
/// shared fragment.
pub fn many_operations(count: usize) -> Result<Document, BuildError> {
    graphql_dsl::document(|doc| {
        for i in 0..count {
            let name = format!("Operation{i}");
            doc.query(Some(name.as_str()), |query| {
                query.add_variable("id", "ID!")?;
                query.add_directive(("cached", arguments! { ttl: 60 }))?;
                query.field_with("node", |node| {
                    node.add_argument("id", Value::variable("id"))?;
                    node.field("id")?;
                    node.fragment_spread("nodeDetails")?;
                    node.field_with(format!("field{i}"), |field| {
                        field.set_alias("description")?;
                        field.add_argument("filter", Value::object([
                            ("tags", Value::from(vec!["a", "b", "c"])),
                            ("minScore", Value::from(0.5)),
                        ]))?;
                        Ok(())
                    })?;
                    Ok(())
                })?;
                Ok(())
            })?;
        }
        doc.fragment("nodeDetails", "Node", |fragment| {
            fragment.field("name")?;
            fragment.inline_fragment(Some("User"), |user| {
                user.field("email")?;
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })
}
