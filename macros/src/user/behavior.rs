use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

use crate::common::{check_duplicates, parse_capabilities};

/// #[derive(Behavior)] implements `Behavior` with a static capability table.
///
/// For each listed capability `Cap` the table gets an entry keyed by
/// `dyn Cap` whose caster downcasts `&dyn Any` back to the deriving type and
/// re-borrows it as `&dyn Cap`. The cast is what makes an unimplemented
/// capability fail to compile.
pub fn expand_derive_behavior(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Behavior)] does not support generic types\n\
             \n\
             Each behavior owns one static capability table; implement \
             `Behavior` by hand for generic types.",
        ));
    }

    let caps = parse_capabilities(&input.attrs)?;
    check_duplicates(&caps)?;

    let ident = &input.ident;
    let name = ident.to_string();

    Ok(quote! {
        impl ::tola_patterns::dispatch::Behavior for #ident {
            fn name(&self) -> &'static str {
                #name
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn capabilities(&self) -> &::tola_patterns::dispatch::Capabilities {
                static TABLE: ::std::sync::OnceLock<::tola_patterns::dispatch::Capabilities> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    ::tola_patterns::dispatch::Capabilities::new()
                        #(
                            .with::<dyn #caps>(|behavior| {
                                behavior
                                    .downcast_ref::<#ident>()
                                    .map(|this| this as &(dyn #caps + 'static))
                            })
                        )*
                })
            }
        }
    })
}
