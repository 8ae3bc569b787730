//! The single serializer from the structured contract model to GraphQL SDL.
//! Generation logic never concatenates SDL text itself; everything funnels
//! through here.

use std::fmt::{self, Write};

use super::{MetaField, Registry};

pub(super) fn to_sdl(registry: &Registry) -> String {
    Render(registry).to_string()
}

struct Render<'a>(&'a Registry);

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.0;

        render_type(f, "Query", registry.query_fields.iter())?;

        if !registry.mutation_fields.is_empty() {
            f.write_char('\n')?;
            render_type(f, "Mutation", registry.mutation_fields.iter())?;
        }

        for object_type in &registry.object_types {
            f.write_char('\n')?;
            render_type(f, object_type.name(), object_type.fields.iter())?;
        }

        Ok(())
    }
}

fn render_type<'a>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    fields: impl Iterator<Item = &'a MetaField>,
) -> fmt::Result {
    writeln!(f, "type {name} {{")?;

    for field in fields {
        f.write_str("  ")?;
        f.write_str(&field.name)?;

        if !field.args.is_empty() {
            f.write_char('(')?;

            for (position, arg) in field.args.values().enumerate() {
                if position > 0 {
                    f.write_str(", ")?;
                }

                write!(f, "{}: {}", arg.name, arg.r#type)?;
            }

            f.write_char(')')?;
        }

        writeln!(f, ": {}", field.r#type)?;
    }

    writeln!(f, "}}")
}
