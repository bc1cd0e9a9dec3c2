// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Expansion of `#[verdict::test]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{FnArg, ItemFn, Lit, Meta, Pat, ReturnType, Token};

/// Parsed `#[verdict::test(...)]` arguments.
#[derive(Debug, Default)]
pub struct TestAttrs {
    /// Panic on the first failed check
    pub fail_fast: bool,
}

impl TestAttrs {
    pub fn parse(attr: TokenStream) -> syn::Result<Self> {
        let mut result = TestAttrs::default();

        if attr.is_empty() {
            return Ok(result);
        }

        let parser = Punctuated::<Meta, Token![,]>::parse_terminated;
        let nested = parser.parse2(attr)?;

        for meta in nested {
            match meta {
                Meta::Path(path) if path.is_ident("fail_fast") => result.fail_fast = true,
                Meta::NameValue(nv) if nv.path.is_ident("fail_fast") => match &nv.value {
                    syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Bool(lit_bool),
                        ..
                    }) => result.fail_fast = lit_bool.value,
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "`fail_fast` expects `true` or `false`",
                        ))
                    }
                },
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown `verdict::test` argument (expected `fail_fast`)",
                    ))
                }
            }
        }

        Ok(result)
    }
}

pub fn process(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let attrs = TestAttrs::parse(attr)?;
    let func: ItemFn = syn::parse2(item)?;
    let sig = &func.sig;

    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "`verdict::test` functions cannot be generic",
        ));
    }
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "`verdict::test` functions cannot be async",
        ));
    }
    if let ReturnType::Type(_, ty) = &sig.output {
        return Err(syn::Error::new_spanned(
            ty,
            "`verdict::test` functions must not return a value",
        ));
    }
    if sig.inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "`verdict::test` functions take exactly one parameter: `t: &mut Recorder`",
        ));
    }

    let (pat, ty) = match sig.inputs.first() {
        Some(FnArg::Typed(pat_type)) => match &*pat_type.pat {
            Pat::Ident(_) => (&pat_type.pat, &pat_type.ty),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "the recorder parameter must be a plain identifier",
                ))
            }
        },
        Some(receiver) => {
            return Err(syn::Error::new_spanned(
                receiver,
                "`verdict::test` functions cannot take `self`",
            ))
        }
        None => unreachable!("checked above"),
    };

    let fn_attrs = &func.attrs;
    let vis = &func.vis;
    let name = &sig.ident;
    let body = &func.block;
    let fail_fast = attrs.fail_fast;

    // Early `return` in the body skips `finish`; the recorder's drop still
    // fails the test in that case.
    Ok(quote! {
        #(#fn_attrs)*
        #[::core::prelude::v1::test]
        #vis fn #name() {
            let mut __verdict_recorder = ::verdict::Recorder::with_settings(::verdict::Settings {
                fail_fast: #fail_fast,
                ..::core::default::Default::default()
            });
            {
                let #pat: #ty = &mut __verdict_recorder;
                #body
            }
            __verdict_recorder.finish();
        }
    })
}
