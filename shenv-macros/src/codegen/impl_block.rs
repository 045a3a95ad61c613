//! Impl block generation for the ShellEnv trait.
//!
//! This module generates the `impl ShellEnv for Type` blocks that are
//! emitted by the derive macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Generics, Member, Path};

use crate::ir::{FieldIR, RecordIR};

/// Generates the impl block for the ShellEnv trait.
///
/// The generated `kind()` returns a record listing every encoded field in
/// declaration order, together with its identifier and raw tag.
pub struct ImplBlockGenerator {
    /// Path of the runtime crate used when the record doesn't name one.
    default_crate: Path,
}

impl Default for ImplBlockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ImplBlockGenerator {
    /// Create a new ImplBlockGenerator referring to `::shenv`.
    pub fn new() -> Self {
        Self {
            default_crate: parse_quote!(::shenv),
        }
    }

    /// Generate the complete impl block for a record.
    ///
    /// `generics` are the generics of the original item; each type
    /// parameter gets a `ShellEnv` bound.
    pub fn generate(&self, record: &RecordIR, generics: &Generics) -> syn::Result<TokenStream> {
        let krate = self.crate_path(record)?;
        let name: syn::Ident = syn::parse_str(&record.rust_name)?;

        let generics = Self::add_trait_bounds(generics.clone(), &krate);
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let fields = record
            .fields
            .iter()
            .map(|field| Self::generate_field(field, &krate))
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(quote! {
            #[automatically_derived]
            impl #impl_generics #krate::ShellEnv for #name #ty_generics #where_clause {
                fn kind(&self) -> #krate::Kind<'_> {
                    #krate::Kind::Record(::std::vec![#(#fields),*])
                }
            }
        })
    }

    /// Generate the `Field::new(...)` expression for one field.
    ///
    /// A renamed identifier also carries the field's own name, which is
    /// what errors report.
    fn generate_field(field: &FieldIR, krate: &Path) -> syn::Result<TokenStream> {
        let member: Member = syn::parse_str(&field.member)?;
        let ident = &field.ident;
        let tag = &field.tag;

        let mut tokens = quote! {
            #krate::Field::new(#ident, #tag, &self.#member)
        };
        if field.field_name != field.ident {
            let field_name = &field.field_name;
            tokens.extend(quote!(.with_member(#field_name)));
        }
        Ok(tokens)
    }

    fn crate_path(&self, record: &RecordIR) -> syn::Result<Path> {
        match &record.crate_path {
            Some(path) => syn::parse_str(path),
            None => Ok(self.default_crate.clone()),
        }
    }

    fn add_trait_bounds(mut generics: Generics, krate: &Path) -> Generics {
        for param in generics.type_params_mut() {
            param.bounds.push(parse_quote!(#krate::ShellEnv));
        }
        generics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_simple_record(name: &str) -> RecordIR {
        RecordIR::new(name).with_fields(vec![
            FieldIR::new("greeting").with_tag("MYVAR"),
            FieldIR::new("count").with_tag("B,omitempty"),
        ])
    }

    fn generate(record: &RecordIR, generics: Generics) -> String {
        ImplBlockGenerator::new()
            .generate(record, &generics)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_impl_block_generator_default() {
        let generator = ImplBlockGenerator::default();
        let code = generator
            .generate(&create_simple_record("Config"), &Generics::default())
            .unwrap()
            .to_string();
        assert!(code.contains(":: shenv :: ShellEnv for Config"));
    }

    #[test]
    fn test_generate_simple_record() {
        let code = generate(&create_simple_record("Config"), Generics::default());

        assert!(code.contains("automatically_derived"));
        assert!(code.contains("fn kind (& self) -> :: shenv :: Kind < '_ >"));
        assert!(code.contains(":: shenv :: Kind :: Record (:: std :: vec !"));
        assert!(code.contains(
            ":: shenv :: Field :: new (\"greeting\" , \"MYVAR\" , & self . greeting)"
        ));
        assert!(code.contains(
            ":: shenv :: Field :: new (\"count\" , \"B,omitempty\" , & self . count)"
        ));
    }

    #[test]
    fn test_generate_preserves_field_order() {
        let code = generate(&create_simple_record("Config"), Generics::default());
        let greeting = code.find("\"greeting\"").unwrap();
        let count = code.find("\"count\"").unwrap();
        assert!(greeting < count);
    }

    #[test]
    fn test_generate_renamed_field_reports_field_name() {
        let record = RecordIR::new("Server").with_fields(vec![
            FieldIR::new("allowed_hosts").with_ident("ALLOWED_HOSTS"),
            FieldIR::new("port").with_tag("PORT"),
        ]);
        let code = generate(&record, Generics::default());
        assert!(code.contains(
            ":: shenv :: Field :: new (\"ALLOWED_HOSTS\" , \"\" , & self . allowed_hosts) . with_member (\"allowed_hosts\")"
        ));
        assert_eq!(code.matches("with_member").count(), 1);
    }

    #[test]
    fn test_generate_tuple_record() {
        let record = RecordIR::new("Pair").with_fields(vec![FieldIR::new("0").with_tag("FIRST")]);
        let code = generate(&record, Generics::default());
        assert!(code.contains("& self . 0"));
    }

    #[test]
    fn test_generate_raw_identifier() {
        let record = RecordIR::new("Item").with_fields(vec![FieldIR::new("r#type")
            .with_field_name("type")
            .with_ident("type")]);
        let code = generate(&record, Generics::default());
        assert!(code.contains("\"type\""));
        assert!(code.contains("& self . r#type"));
    }

    #[test]
    fn test_generate_unit_record() {
        let record = RecordIR::new("Marker");
        let code = generate(&record, Generics::default());
        assert!(code.contains(":: shenv :: Kind :: Record (:: std :: vec ! [])"));
    }

    #[test]
    fn test_generate_with_generics() {
        let generics: Generics = parse_quote!(<'a, T: Clone, const N: usize>);
        let record = RecordIR::new("Wrapper")
            .with_fields(vec![FieldIR::new("value").with_tag("VALUE")]);
        let code = generate(&record, generics);

        assert!(code.contains("impl < 'a , T : Clone + :: shenv :: ShellEnv , const N : usize >"));
        assert!(code.contains("for Wrapper < 'a , T , N >"));
    }

    #[test]
    fn test_generate_keeps_where_clause() {
        let mut generics: Generics = parse_quote!(<T>);
        generics.where_clause = Some(parse_quote!(where T: Default));
        let record = RecordIR::new("Wrapper");
        let code = generate(&record, generics);
        assert!(code.contains("where T : Default"));
    }

    #[test]
    fn test_generate_with_crate_path() {
        let record = create_simple_record("Config").with_crate_path("my_app::env");
        let code = generate(&record, Generics::default());
        assert!(code.contains("my_app :: env :: ShellEnv for Config"));
        assert!(!code.contains(":: shenv ::"));
    }

    #[test]
    fn test_generate_rejects_invalid_member() {
        let record = RecordIR::new("Broken")
            .with_fields(vec![FieldIR::new("not a member")]);
        let result = ImplBlockGenerator::new().generate(&record, &Generics::default());
        assert!(result.is_err());
    }
}
