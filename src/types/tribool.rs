use serde::Serialize;

/// Three-valued boolean for fields that distinguish "never set" from an
/// explicit yes or no. Decodes from the same literal set as `bool`; a
/// field left out of the document keeps `Indeterminate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Tribool {
    False,
    True,
    #[default]
    Indeterminate,
}

impl Tribool {
    pub fn is_true(self) -> bool {
        self == Tribool::True
    }

    pub fn is_false(self) -> bool {
        self == Tribool::False
    }

    pub fn is_indeterminate(self) -> bool {
        self == Tribool::Indeterminate
    }
}

impl From<bool> for Tribool {
    fn from(value: bool) -> Self {
        if value {
            Tribool::True
        } else {
            Tribool::False
        }
    }
}

impl From<Tribool> for Option<bool> {
    fn from(value: Tribool) -> Self {
        match value {
            Tribool::True => Some(true),
            Tribool::False => Some(false),
            Tribool::Indeterminate => None,
        }
    }
}
