//! Resolvable derive macro - generates resolve_paths() and collect_fields().

mod attr;
mod field;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use field::{FieldInfo, FieldRole};

/// Generate Resolvable implementation.
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => return quote! {
                impl #impl_generics ::xconf::Resolvable for #name #ty_generics #where_clause {
                    fn resolve_paths(
                        &mut self,
                        _resolver: &::xconf::PathResolver,
                    ) -> ::core::result::Result<(), ::xconf::ResolveError> {
                        ::core::result::Result::Ok(())
                    }
                }
            },
            Fields::Unnamed(_) => {
                return quote! { compile_error!("Resolvable only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Resolvable only works on structs"); },
    };

    // Collect field info
    let mut field_infos = Vec::with_capacity(fields.len());
    for field in fields {
        match FieldInfo::from_field(field) {
            Ok(Some(info)) => field_infos.push(info),
            Ok(None) => {}
            Err(err) => return err.to_compile_error(),
        }
    }

    // Walk calls in declaration order, tagging errors with the field key
    let walk_calls = field_infos.iter().filter_map(|f| {
        let field_name = &f.name;
        let key = &f.key;
        match f.role {
            FieldRole::Resolve => Some(quote! {
                ::xconf::PathField::resolve_field(&mut self.#field_name, resolver)
                    .map_err(|e| e.within(#key))?;
            }),
            FieldRole::Sub => Some(quote! {
                ::xconf::Resolvable::resolve_paths(&mut self.#field_name, resolver)
                    .map_err(|e| e.within(#key))?;
            }),
            FieldRole::Plain => None,
        }
    });

    // Field paths for dynamic documents
    let collect_calls = field_infos.iter().filter_map(|f| {
        let key = &f.key;
        let ty = &f.ty;
        match f.role {
            FieldRole::Resolve => Some(quote! {
                out.push(::xconf::field_path(prefix, #key));
            }),
            FieldRole::Sub => Some(quote! {
                <#ty as ::xconf::Resolvable>::collect_fields(
                    &::xconf::field_path(prefix, #key),
                    out,
                );
            }),
            FieldRole::Plain => None,
        }
    });

    quote! {
        impl #impl_generics ::xconf::Resolvable for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn resolve_paths(
                &mut self,
                resolver: &::xconf::PathResolver,
            ) -> ::core::result::Result<(), ::xconf::ResolveError> {
                #(#walk_calls)*
                ::core::result::Result::Ok(())
            }

            #[allow(unused_variables)]
            fn collect_fields(
                prefix: &str,
                out: &mut ::std::vec::Vec<::std::string::String>,
            ) {
                #(#collect_calls)*
            }
        }
    }
}
