//! Serde attribute compatibility.
//!
//! With the `serde-compat` feature enabled, fields that serde never
//! serializes are left out of the record as well, even when they carry
//! `#[env(...)]` attributes. Other serde options such as `rename` have no
//! effect on variable names.

use syn::meta::ParseNestedMeta;
use syn::Attribute;

/// Serde field attributes extracted from `#[serde(...)]`.
#[derive(Debug, Clone, Default)]
pub struct SerdeFieldAttrs {
    /// Skip this field
    pub skip: bool,

    /// Skip serializing this field
    pub skip_serializing: bool,
}

impl SerdeFieldAttrs {
    /// Parse serde attributes from a list of attributes.
    ///
    /// Unrelated serde options are consumed and ignored, so a `skip` that
    /// follows `rename = "..."` or `with = "..."` is still seen.
    pub fn from_attrs(attrs: &[Attribute]) -> Self {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("serde") {
                continue;
            }

            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    result.skip = true;
                } else if meta.path.is_ident("skip_serializing") {
                    result.skip_serializing = true;
                } else {
                    ignore_value(&meta)?;
                }
                Ok(())
            });
        }

        result
    }

    /// Whether serde leaves this field out of its serialized form.
    pub fn should_skip(&self) -> bool {
        self.skip || self.skip_serializing
    }
}

/// Consume `= value` or `(nested, ...)` after an option we don't handle.
fn ignore_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| ignore_value(&nested))?;
    }
    Ok(())
}
