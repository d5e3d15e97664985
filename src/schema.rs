//! Static field schema over [`Note`], used by the CLI to build table
//! columns without any runtime introspection.

use crate::model::Note;

/// One displayable field of a [`Note`]: its name and an accessor.
pub struct Field {
    pub name: &'static str,
    pub get: fn(&Note) -> &str,
}

impl Field {
    /// The field name formatted for display.
    pub fn label(&self) -> String {
        pretty_label(self.name)
    }
}

fn field_id(note: &Note) -> &str {
    note.id()
}

fn field_content(note: &Note) -> &str {
    note.content()
}

/// Ordered list of displayable [`Note`] fields.
pub const FIELDS: &[Field] = &[
    Field {
        name: "id",
        get: field_id,
    },
    Field {
        name: "content",
        get: field_content,
    },
];

/// Format a camel-case field name for display: capitalize the first letter
/// and insert a space before every subsequent upper-case letter, so
/// `"thisIsAVariable"` becomes `"This Is A Variable"`.
pub fn pretty_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        label.extend(first.to_uppercase());
    }
    for ch in chars {
        if ch.is_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }
    label
}
