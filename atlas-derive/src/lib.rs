mod macros;

use proc_macro::TokenStream;

/// Derive the semantic key vocabulary of a themeable widget.
///
/// See `atlas::theme::ThemeKey` for the generated contract.
#[proc_macro_derive(ThemeKey, attributes(theme))]
pub fn derive_theme_key(input: TokenStream) -> TokenStream {
    macros::theme_key::expand(input.into()).into()
}
