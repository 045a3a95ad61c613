//! Attribute parsing using darling for the `#[env(...)]` attributes.
//!
//! Container attributes sit on the struct, field attributes on each field.

use darling::{FromDeriveInput, FromField, FromMeta};
use syn::Ident;

/// Option appended to a tag by the `omitempty` shorthand.
const OMIT_EMPTY: &str = "omitempty";

/// Container-level attributes parsed from `#[env(...)]` on the struct.
#[derive(Debug, Clone, FromDeriveInput)]
#[darling(attributes(env), supports(struct_any))]
pub struct ContainerAttrs {
    /// The identifier of the type
    pub ident: Ident,

    /// Case convention for identifiers used in derived variable names
    #[darling(default)]
    pub rename_all: Option<RenameRule>,

    /// Path of the runtime crate, for re-exports
    #[darling(default, rename = "crate")]
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes parsed from `#[env(...)]` on struct fields.
#[derive(Debug, Clone, Default, FromField)]
#[darling(attributes(env))]
pub struct FieldAttrs {
    /// Field identifier (None for tuple struct fields)
    pub ident: Option<Ident>,

    /// Raw tag, `name[,option...]`
    #[darling(default)]
    pub tag: Option<String>,

    /// Declared variable name
    #[darling(default)]
    pub name: Option<String>,

    /// Leave the variable out when the value is empty
    #[darling(default)]
    pub omitempty: bool,

    /// Leave the field out of the record
    #[darling(default)]
    pub skip: bool,
}

impl FieldAttrs {
    /// Compose the raw tag carried by the generated field.
    ///
    /// `tag` is passed through untouched. Otherwise the tag is assembled
    /// from the `name` and `omitempty` shorthands.
    pub fn tag(&self) -> Result<String, String> {
        if let Some(tag) = &self.tag {
            if self.name.is_some() || self.omitempty {
                return Err("`tag` cannot be combined with `name` or `omitempty`".to_string());
            }
            return Ok(tag.clone());
        }

        let name = self.name.as_deref().unwrap_or_default();
        if name.contains(',') {
            return Err(format!("variable name `{name}` must not contain a comma"));
        }

        if self.omitempty {
            Ok(format!("{name},{OMIT_EMPTY}"))
        } else {
            Ok(name.to_string())
        }
    }
}

/// Rename rule for identifiers used in derived variable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromMeta)]
pub enum RenameRule {
    /// camelCase
    #[darling(rename = "camelCase")]
    CamelCase,

    /// snake_case
    #[darling(rename = "snake_case")]
    SnakeCase,

    /// PascalCase
    #[darling(rename = "PascalCase")]
    PascalCase,

    /// SCREAMING_SNAKE_CASE
    #[darling(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,

    /// kebab-case
    #[darling(rename = "kebab-case")]
    KebabCase,
}

impl RenameRule {
    /// Apply the rename rule to a string.
    pub fn apply(&self, name: &str) -> String {
        use convert_case::{Case, Casing};

        match self {
            RenameRule::CamelCase => name.to_case(Case::Camel),
            RenameRule::SnakeCase => name.to_case(Case::Snake),
            RenameRule::PascalCase => name.to_case(Case::Pascal),
            RenameRule::ScreamingSnakeCase => name.to_case(Case::UpperSnake),
            RenameRule::KebabCase => name.to_case(Case::Kebab),
        }
    }
}
