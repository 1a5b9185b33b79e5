//! Field information structures and parsing.

use syn::Type;

use crate::resolve::attr::{get_custom_name, get_serde_rename, has_attr};

/// How the walker treats a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Path leaf, rewritten in place.
    Resolve,
    /// Nested config, walked recursively.
    Sub,
    /// Untouched.
    Plain,
}

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub key: String,
    pub role: FieldRole,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    ///
    /// Fails when a field is marked both `resolve` and `sub`.
    pub fn from_field(field: &syn::Field) -> syn::Result<Option<Self>> {
        let Some(ident) = field.ident.as_ref() else {
            return Ok(None);
        };
        let attrs = &field.attrs;

        let role = match (has_attr(attrs, "resolve"), has_attr(attrs, "sub")) {
            (true, true) => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "a field cannot be both `resolve` and `sub`",
                ));
            }
            (true, false) => FieldRole::Resolve,
            (false, true) => FieldRole::Sub,
            (false, false) => FieldRole::Plain,
        };

        let key = get_custom_name(attrs)
            .or_else(|| get_serde_rename(attrs))
            .unwrap_or_else(|| unraw(ident));

        Ok(Some(Self {
            name: ident.clone(),
            key,
            role,
            ty: field.ty.clone(),
        }))
    }
}

/// `r#type` is keyed as `type` in documents.
fn unraw(ident: &syn::Ident) -> String {
    let s = ident.to_string();
    s.strip_prefix("r#").map(str::to_string).unwrap_or(s)
}
