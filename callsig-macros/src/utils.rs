use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Error};

/// Parse the crate path from attributes, defaulting to `::callsig`.
///
/// Looks for `#[callsig(crate = "...")]` attribute and uses the specified crate path.
/// If no such attribute is found, defaults to `::callsig`.
///
/// # Examples
///
/// ```ignore
/// #[derive(Decay)]
/// #[callsig(crate = "crate")]
/// struct MyStruct;
/// ```
pub(crate) fn parse_crate_path(attrs: &[Attribute]) -> Result<TokenStream2, Error> {
    for attr in attrs {
        if attr.path().is_ident("callsig") {
            let mut result = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("crate") {
                    let value = meta.value()?;
                    let lit_str: syn::LitStr = value.parse()?;
                    let crate_path = lit_str.value();
                    result = Some(syn::parse_str(&crate_path)?);
                    Ok(())
                } else {
                    Err(meta.error("unknown callsig attribute, expected `crate`"))
                }
            })?;

            if let Some(path) = result {
                return Ok(path);
            }
        }
    }
    // Default to ::callsig
    Ok(quote! { ::callsig })
}
