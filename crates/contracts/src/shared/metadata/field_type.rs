//! Field kinds for the form schema

/// Widget used to edit a field in a modal form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    /// Numeric input; `step` is passed through to the `<input>`
    Number { step: &'static str },
    /// `datetime-local` input, values in `YYYY-MM-DDTHH:MM`
    DateTime,
    /// Fixed list of options
    Select(&'static [&'static str]),
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number { .. } => "number",
            Self::DateTime => "datetime-local",
            Self::Select(_) => "select",
        }
    }

    /// Options for `Select`, empty for every other kind
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Select(options) => options,
            _ => &[],
        }
    }
}

/// Horizontal alignment of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}
