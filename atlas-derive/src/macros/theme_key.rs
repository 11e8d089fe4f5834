use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, parse2};

/// Options collected from a variant's `#[theme(...)]` attribute.
#[derive(Default)]
struct VariantOptions {
    name: Option<String>,
    no_default: bool,
}

/// Expand `#[derive(ThemeKey)]`.
///
/// This derive turns a fieldless enum into a semantic key vocabulary that
/// implements `atlas::theme::ThemeKey`. It generates:
/// - `NAMESPACE` from the required `#[theme(namespace = "...")]` attribute
/// - `ALL`, every variant in declaration order
/// - `name()` / `from_name()` mapping variants to their key names
/// - `default_class()`, the built-in `<namespace>__<name>` class
///
/// Key names default to the variant name in lower camel case. A variant can
/// carry `#[theme(name = "...")]` to pick another name, and
/// `#[theme(no_default)]` to opt out of a built-in class.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ThemeKey)]
/// #[theme(namespace = "ra_progressBar")]
/// enum ProgressKey {
///     Buffer,
///     #[theme(name = "circular-indeterminate-bar-dash")]
///     CircularIndeterminateBarDash,
///     #[theme(no_default)]
///     Determinate,
/// }
/// ```
pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(input) => input,
        Err(e) => return e.to_compile_error(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let namespace = match container_namespace(&input.attrs) {
        Ok(Some(namespace)) => namespace,
        Ok(None) => {
            return syn::Error::new_spanned(
                name,
                "#[derive(ThemeKey)] requires #[theme(namespace = \"...\")]",
            )
            .to_compile_error();
        }
        Err(e) => return e.to_compile_error(),
    };

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return syn::Error::new_spanned(&input, "#[derive(ThemeKey)] only supports enums")
                .to_compile_error();
        }
    };

    let mut idents: Vec<&Ident> = Vec::new();
    let mut names: Vec<String> = Vec::new();
    let mut defaults: Vec<TokenStream> = Vec::new();
    let mut seen = HashSet::new();

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(
                variant,
                "#[derive(ThemeKey)] only supports fieldless variants",
            )
            .to_compile_error();
        }

        let options = match variant_options(&variant.attrs) {
            Ok(options) => options,
            Err(e) => return e.to_compile_error(),
        };

        let ident = &variant.ident;
        let key_name = options
            .name
            .unwrap_or_else(|| lower_camel(&ident.to_string()));

        if !seen.insert(key_name.clone()) {
            return syn::Error::new_spanned(
                variant,
                format!("duplicate theme key name `{key_name}`"),
            )
            .to_compile_error();
        }

        defaults.push(if options.no_default {
            quote! { Self::#ident => None }
        } else {
            let class = format!("{namespace}__{key_name}");
            quote! { Self::#ident => Some(#class) }
        });
        idents.push(ident);
        names.push(key_name);
    }

    quote! {
        impl #impl_generics ::atlas::theme::ThemeKey for #name #ty_generics #where_clause {
            const NAMESPACE: &'static str = #namespace;

            const ALL: &'static [Self] = &[#(Self::#idents),*];

            fn name(self) -> &'static str {
                match self {
                    #(Self::#idents => #names,)*
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    #(#names => Some(Self::#idents),)*
                    _ => None,
                }
            }

            fn default_class(self) -> Option<&'static str> {
                match self {
                    #(#defaults,)*
                }
            }
        }
    }
}

/// Read `namespace` from the enum-level `#[theme(...)]` attribute.
fn container_namespace(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut namespace = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("theme")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("namespace") {
                let lit: LitStr = meta.value()?.parse()?;
                namespace = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("expected `namespace = \"...\"`"))
            }
        })?;
    }
    Ok(namespace)
}

fn variant_options(attrs: &[Attribute]) -> syn::Result<VariantOptions> {
    let mut options = VariantOptions::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("theme")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                options.name = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("no_default") {
                options.no_default = true;
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"` or `no_default`"))
            }
        })?;
    }
    Ok(options)
}

/// `SliderSmall` -> `sliderSmall`
fn lower_camel(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_camel() {
        assert_eq!(lower_camel("Buffer"), "buffer");
        assert_eq!(lower_camel("SliderSmall"), "sliderSmall");
        assert_eq!(lower_camel(""), "");
    }

    #[test]
    fn test_expand_rejects_structs() {
        let output = expand(quote! {
            #[theme(namespace = "ns")]
            struct NotAnEnum;
        });
        assert!(output.to_string().contains("compile_error"));
    }

    #[test]
    fn test_expand_requires_namespace() {
        let output = expand(quote! {
            enum Keys { A }
        });
        assert!(output.to_string().contains("compile_error"));
    }

    #[test]
    fn test_expand_rejects_duplicate_names() {
        let output = expand(quote! {
            #[theme(namespace = "ns")]
            enum Keys {
                Value,
                #[theme(name = "value")]
                Other,
            }
        });
        assert!(output.to_string().contains("duplicate theme key name"));
    }

    #[test]
    fn test_expand_default_class_literals() {
        let output = expand(quote! {
            #[theme(namespace = "ra_progressBar")]
            enum Keys {
                Buffer,
                #[theme(no_default)]
                Determinate,
            }
        })
        .to_string();
        assert!(output.contains("\"ra_progressBar__buffer\""));
        assert!(!output.contains("ra_progressBar__determinate"));
    }
}
