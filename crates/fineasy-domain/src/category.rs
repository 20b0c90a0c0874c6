//! Predefined category tags offered by the entry form.

use std::fmt;

/// Label used when the user does not pick a category.
pub const DEFAULT_CATEGORY: &str = "Outros";

/// Categories offered out of the box. Users may also type a custom tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefaultCategory {
    Salario,
    Aluguel,
    Alimento,
    Transporte,
    Lazer,
    #[default]
    Outros,
}

impl DefaultCategory {
    pub const ALL: [DefaultCategory; 6] = [
        DefaultCategory::Salario,
        DefaultCategory::Aluguel,
        DefaultCategory::Alimento,
        DefaultCategory::Transporte,
        DefaultCategory::Lazer,
        DefaultCategory::Outros,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DefaultCategory::Salario => "Salário",
            DefaultCategory::Aluguel => "Aluguel",
            DefaultCategory::Alimento => "Alimento",
            DefaultCategory::Transporte => "Transporte",
            DefaultCategory::Lazer => "Lazer",
            DefaultCategory::Outros => DEFAULT_CATEGORY,
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        let needle = label.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.label().to_lowercase() == needle)
    }

    /// Labels in presentation order.
    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(DefaultCategory::label)
    }
}

impl fmt::Display for DefaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
