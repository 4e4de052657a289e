//! Survey form data - the record the user edits
//!
//! `FormData` holds every field value. Enumerated fields keep their
//! short wire codes (`h`, `js`, ...) in snapshots.

use serde::{Serialize, Serializer};

/// Maximum value of the satisfaction rating
pub const MAX_RATING: u8 = 5;

/// Suggested bounds for the age field (display hint only)
pub const AGE_HINT: (u16, u16) = (0, 120);

/// A fixed set of options with a short code and a display label
pub trait Choice: Copy + PartialEq + 'static {
    /// All options in display order
    const ALL: &'static [Self];

    /// Short code used in snapshots
    fn code(&self) -> &'static str;

    /// Human-readable label
    fn label(&self) -> &'static str;

    /// Position of this option in `ALL`
    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female, Gender::Other];

    fn code(&self) -> &'static str {
        match self {
            Gender::Male => "h",
            Gender::Female => "m",
            Gender::Other => "o",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Hombre",
            Gender::Female => "Mujer",
            Gender::Other => "Otro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    Python,
    Java,
    Cpp,
}

impl Choice for Language {
    const ALL: &'static [Self] = &[
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
    ];

    fn code(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::Python => "py",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
        }
    }
}

/// Identifier of a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Surname,
    Age,
    Gender,
    Language,
    Rating,
    Terms,
}

impl Field {
    pub fn all() -> Vec<Field> {
        vec![
            Field::Name,
            Field::Surname,
            Field::Age,
            Field::Gender,
            Field::Language,
            Field::Rating,
            Field::Terms,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nombre",
            Field::Surname => "Apellidos",
            Field::Age => "Edad",
            Field::Gender => "Género",
            Field::Language => "Lenguaje favorito",
            Field::Rating => "Satisfacción",
            Field::Terms => "Acepto las condiciones",
        }
    }

    /// Fields whose emptiness is flagged after a submit attempt
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Name | Field::Gender | Field::Language)
    }

    /// Fields drawn with a required marker. Surname and age carry the
    /// marker but are never checked.
    pub fn shows_required_marker(&self) -> bool {
        matches!(
            self,
            Field::Name | Field::Surname | Field::Age | Field::Gender | Field::Language
        )
    }
}

/// A new value for exactly one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Surname(String),
    Age(String),
    Gender(Option<Gender>),
    Language(Option<Language>),
    Rating(u8),
    Terms(bool),
}

impl FieldChange {
    pub fn field(&self) -> Field {
        match self {
            FieldChange::Name(_) => Field::Name,
            FieldChange::Surname(_) => Field::Surname,
            FieldChange::Age(_) => Field::Age,
            FieldChange::Gender(_) => Field::Gender,
            FieldChange::Language(_) => Field::Language,
            FieldChange::Rating(_) => Field::Rating,
            FieldChange::Terms(_) => Field::Terms,
        }
    }
}

/// All values entered in the survey
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub surname: String,
    pub age: String,
    #[serde(serialize_with = "code_or_empty")]
    pub gender: Option<Gender>,
    #[serde(serialize_with = "code_or_empty")]
    pub language: Option<Language>,
    pub rating: u8,
    pub terms: bool,
}

impl FormData {
    /// Replace a single field, leaving the others untouched
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Name(value) => self.name = value,
            FieldChange::Surname(value) => self.surname = value,
            FieldChange::Age(value) => self.age = value,
            FieldChange::Gender(value) => self.gender = value,
            FieldChange::Language(value) => self.language = value,
            FieldChange::Rating(value) => self.rating = value.min(MAX_RATING),
            FieldChange::Terms(value) => self.terms = value,
        }
    }

    /// Presence check: does the field hold its empty/default value?
    pub fn is_empty(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name.trim().is_empty(),
            Field::Surname => self.surname.is_empty(),
            Field::Age => self.age.is_empty(),
            Field::Gender => self.gender.is_none(),
            Field::Language => self.language.is_none(),
            Field::Rating => self.rating == 0,
            Field::Terms => !self.terms,
        }
    }

    /// Required fields currently left empty, in display order
    pub fn missing_required(&self) -> Vec<Field> {
        Field::all()
            .into_iter()
            .filter(|f| f.is_required() && self.is_empty(*f))
            .collect()
    }
}

fn code_or_empty<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Choice,
{
    serializer.serialize_str(value.map(|v| v.code()).unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_empty() {
        let data = FormData::default();
        for field in Field::all() {
            assert!(data.is_empty(field), "{:?} should start empty", field);
        }
        assert_eq!(data.rating, 0);
        assert!(!data.terms);
    }

    #[test]
    fn test_apply_is_point_update() {
        let mut data = FormData {
            name: "Ana".to_string(),
            surname: "López".to_string(),
            age: "31".to_string(),
            gender: Some(Gender::Female),
            language: Some(Language::Python),
            rating: 4,
            terms: true,
        };
        let before = data.clone();

        data.apply(FieldChange::Surname("García".to_string()));

        assert_eq!(data.surname, "García");
        assert_eq!(data.name, before.name);
        assert_eq!(data.age, before.age);
        assert_eq!(data.gender, before.gender);
        assert_eq!(data.language, before.language);
        assert_eq!(data.rating, before.rating);
        assert_eq!(data.terms, before.terms);
    }

    #[test]
    fn test_rating_is_clamped() {
        let mut data = FormData::default();
        data.apply(FieldChange::Rating(9));
        assert_eq!(data.rating, MAX_RATING);
    }

    #[test]
    fn test_whitespace_name_counts_as_empty() {
        let mut data = FormData::default();
        data.apply(FieldChange::Name("   ".to_string()));
        assert!(data.is_empty(Field::Name));

        data.apply(FieldChange::Name(" Luis ".to_string()));
        assert!(!data.is_empty(Field::Name));
    }

    #[test]
    fn test_missing_required() {
        let mut data = FormData::default();
        assert_eq!(
            data.missing_required(),
            vec![Field::Name, Field::Gender, Field::Language]
        );

        data.apply(FieldChange::Language(Some(Language::Cpp)));
        assert_eq!(data.missing_required(), vec![Field::Name, Field::Gender]);
    }

    #[test]
    fn test_choice_codes() {
        let codes: Vec<_> = Gender::ALL.iter().map(|g| g.code()).collect();
        assert_eq!(codes, vec!["h", "m", "o"]);

        let codes: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["js", "py", "java", "cpp"]);
        assert_eq!(Language::Cpp.label(), "C++");
        assert_eq!(Language::Java.index(), 2);
    }

    #[test]
    fn test_serialize_uses_codes() {
        let data = FormData {
            gender: Some(Gender::Other),
            ..FormData::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["gender"], "o");
        assert_eq!(json["language"], "");
        assert_eq!(json["rating"], 0);
        assert_eq!(json["terms"], false);
    }
}
