//! Common parsing utilities

use std::collections::HashSet;

use quote::ToTokens;
use syn::{Attribute, Path, Token, punctuated::Punctuated};

/// Name of the helper attribute listing capability traits.
pub const CAPABILITIES_ATTR: &str = "capabilities";

// =============================================================================
// #[capabilities(A, B, ...)] Parsing
// =============================================================================

/// Collect capability trait paths from every `#[capabilities(...)]` attribute.
///
/// Several attributes are merged in order. An empty list is allowed and
/// yields a behavior with no capabilities.
pub fn parse_capabilities(attrs: &[Attribute]) -> syn::Result<Vec<Path>> {
    let mut caps = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident(CAPABILITIES_ATTR)) {
        if matches!(attr.meta, syn::Meta::Path(_)) {
            continue;
        }
        let list = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
        caps.extend(list);
    }
    Ok(caps)
}

/// Reject a capability listed more than once.
pub fn check_duplicates(caps: &[Path]) -> syn::Result<()> {
    let mut seen = HashSet::new();
    for cap in caps {
        let key = cap.to_token_stream().to_string().replace(' ', "");
        if !seen.insert(key.clone()) {
            return Err(syn::Error::new_spanned(
                cap,
                format!(
                    "duplicate capability `{}`\n\
                     \n\
                     Each capability should appear only once per behavior.",
                    key
                ),
            ));
        }
    }
    Ok(())
}
