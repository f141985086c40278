use crate::context::{CrewMember, CrewRole};
use crate::error::TagError;
use crate::expander::Scope;
use crate::registry::TagRegistryBuilder;

pub(super) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    builder
        .tag("Crew", |out: &mut String, scope: &Scope<'_>, args: &[String]| {
            push_crew(out, scope, args, |_| true)
        })
        .tag("Pilots", |out: &mut String, scope: &Scope<'_>, args: &[String]| {
            push_crew(out, scope, args, |m| m.role == CrewRole::Pilot)
        })
        .tag("Engineers", |out: &mut String, scope: &Scope<'_>, args: &[String]| {
            push_crew(out, scope, args, |m| m.role == CrewRole::Engineer)
        })
        .tag("Scientists", |out: &mut String, scope: &Scope<'_>, args: &[String]| {
            push_crew(out, scope, args, |m| m.role == CrewRole::Scientist)
        })
        .tag("Tourists", |out: &mut String, scope: &Scope<'_>, args: &[String]| {
            push_crew(out, scope, args, |m| m.role == CrewRole::Tourist)
        })
}

/// Comma separated crew names. `(short)` prints first names only.
fn push_crew(
    out: &mut String,
    scope: &Scope<'_>,
    args: &[String],
    keep: impl Fn(&CrewMember) -> bool,
) -> Result<(), TagError> {
    let short = match args.first().map(String::as_str) {
        None | Some("") | Some("full") => false,
        Some("short") => true,
        Some(other) => {
            return Err(TagError::InvalidArgument {
                tag: "Crew",
                value: other.to_string(),
            })
        }
    };

    let names: Vec<&str> = scope
        .vessel()?
        .crew
        .iter()
        .filter(|member| keep(member))
        .map(|member| {
            if short {
                member.short_name()
            } else {
                member.name.as_str()
            }
        })
        .collect();

    out.push_str(&names.join(", "));
    Ok(())
}
