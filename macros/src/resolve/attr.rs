//! Attribute parsing helpers for the Resolvable derive macro.

use syn::Attribute;

/// Get custom key from #[xconf(name = "xxx")].
pub fn get_custom_name(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "xconf", "name")
}

/// Get serde key from #[serde(rename = "xxx")].
pub fn get_serde_rename(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename")
}

/// Get string value from #[ns(key = "value")].
fn get_string_attr(attrs: &[Attribute], ns: &str, key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident(ns) {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) && meta.input.peek(syn::Token![=]) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else {
                skip_meta_value(&meta)?;
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check if attribute has a flag like #[xconf(resolve)].
pub fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("xconf") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            skip_meta_value(&meta)?;
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

/// Consume `= value` or `(...)` so the next nested item can be parsed.
fn skip_meta_value(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Token![=] = meta.input.parse()?;
        // Try literal first, then path (e.g. `with = module::name`)
        if meta.input.parse::<syn::Lit>().is_err() {
            let _: syn::Path = meta.input.parse()?;
        }
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip_meta_value(&inner))?;
    }
    Ok(())
}
