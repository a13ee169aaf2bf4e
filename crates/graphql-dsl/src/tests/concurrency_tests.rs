use crate::Formatter;
use crate::SelectionSetBuilder;
use crate::Value;
use rayon::prelude::IntoParallelIterator;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;

#[test]
fn documents_build_and_format_in_parallel() {
    let rendered =
        (0..64)
            .into_par_iter()
            .map(|index| {
                let query = crate::query(Some(format!("q{index}").as_str()), |query| {
                    query.field_with("animal", |animal| {
                        animal.add_argument("index", index)?;
                        animal.field("name")?;
                        Ok(())
                    })?;
                    Ok(())
                }).expect("query builds");
                query.to_graphql().expect("query formats")
            })
            .collect::<Vec<_>>();

    for (index, text) in rendered.iter().enumerate() {
        assert_eq!(
            text,
            &format!("query q{index}\n{{\n  animal(index: {index})\n  {{\n    name\n  }}\n}}"),
        );
    }
}

#[test]
fn one_document_formats_identically_across_threads() {
    let document = crate::document(|doc| {
        doc.query(None, |query| {
            query.field_with("animals", |animals| {
                animals.add_argument("type", Value::tag("SHEEP"))?;
                animals.field("name")?.field("age")?;
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    }).expect("document builds");
    let formatter = Formatter::with_indent_unit("    ");
    let expected = document.to_graphql_with(&formatter, 0).expect("document formats");

    let levels = vec![0usize; 32];
    let rendered =
        levels.par_iter()
            .map(|level| document.to_graphql_with(&formatter, *level))
            .collect::<Result<Vec<_>, _>>()
            .expect("document formats");

    assert!(rendered.iter().all(|text| text == &expected));
}
