//! Capability-related macros.
//!
//! This module contains:
//! - `#[capability]` - Attribute macro turning a function into a Capability implementation

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    FnArg, GenericArgument, Ident, ItemFn, Lifetime, LitStr, PathArguments, ReturnType, Token,
    Type, TypeReference,
    parse::Parse,
    parse_macro_input,
    visit::{self, Visit},
};

/// Arguments for the `#[capability]` macro.
pub(crate) struct CapabilityArgs {
    pub name: Option<String>,
    pub key: Option<LitStr>,
}

impl Parse for CapabilityArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut key = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                "key" => {
                    key = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(CapabilityArgs { name, key })
    }
}

/// Extracts `O` from a `Result<O, E>` return type.
fn result_ok_type(output: &ReturnType) -> Option<&Type> {
    let ReturnType::Type(_, ty) = output else {
        return None;
    };
    let Type::Path(type_path) = &**ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(ok) => Some(ok),
        _ => None,
    }
}

/// Finds the first reference type whose lifetime is elided or `'_`.
///
/// The argument and output types become trait parameters of the generated
/// impl, where an elided lifetime no longer refers to the function's own.
#[derive(Default)]
struct ElidedLifetime<'ast> {
    found: Option<&'ast TypeReference>,
}

impl<'ast> Visit<'ast> for ElidedLifetime<'ast> {
    fn visit_type_reference(&mut self, reference: &'ast TypeReference) {
        let elided = match &reference.lifetime {
            None => true,
            Some(Lifetime { ident, .. }) => ident == "_",
        };
        if elided && self.found.is_none() {
            self.found = Some(reference);
        }
        visit::visit_type_reference(self, reference);
    }
}

fn elided_lifetime(ty: &Type) -> Option<&TypeReference> {
    let mut finder = ElidedLifetime::default();
    finder.visit_type(ty);
    finder.found
}

/// Implementation of the `#[capability]` macro.
pub fn capability_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as CapabilityArgs);
    let input = parse_macro_input!(item as ItemFn);

    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;
    let fn_output = &input.sig.output;

    if let Some(asyncness) = &input.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "Capability function must not be async")
            .to_compile_error()
            .into();
    }

    let generics = &input.sig.generics;
    if !generics.params.is_empty() || generics.where_clause.is_some() {
        let where_clause = &generics.where_clause;
        return syn::Error::new_spanned(
            quote! { #generics #where_clause },
            "Capability function must not be generic",
        )
        .to_compile_error()
        .into();
    }

    let inputs = &input.sig.inputs;
    if inputs.len() != 1 {
        return syn::Error::new_spanned(
            &input.sig,
            "Capability function must take exactly one argument: fn(input: Input)",
        )
        .to_compile_error()
        .into();
    }

    let (input_pat, input_type) = match inputs.first() {
        Some(FnArg::Typed(pat_type)) => (&pat_type.pat, &pat_type.ty),
        _ => {
            return syn::Error::new_spanned(inputs, "Capability function must not take `self`")
                .to_compile_error()
                .into();
        }
    };

    let Some(output_type) = result_ok_type(&input.sig.output) else {
        return syn::Error::new_spanned(
            &input.sig.output,
            "Capability function must return Result<Output, OperationError>",
        )
        .to_compile_error()
        .into();
    };

    for ty in [&**input_type, output_type] {
        if let Some(reference) = elided_lifetime(ty) {
            return syn::Error::new_spanned(
                reference,
                "Capability function types must name their lifetimes, e.g. `&'static str`",
            )
            .to_compile_error()
            .into();
        }
    }

    if let Some(key) = args.key.as_ref().filter(|_| cfg!(not(feature = "inventory"))) {
        return syn::Error::new_spanned(
            key,
            "`key = ...` requires the `inventory` feature of switchyard",
        )
        .to_compile_error()
        .into();
    }

    let struct_name = if let Some(ref custom_name) = args.name {
        Ident::new(custom_name, fn_name.span())
    } else {
        fn_name.clone()
    };

    let registration = args.key.as_ref().map(|key| {
        quote! {
            const _: () = {
                fn __switchyard_build()
                    -> ::std::boxed::Box<dyn ::std::any::Any + ::core::marker::Send + ::core::marker::Sync>
                {
                    ::switchyard::collected::erase::<#input_type, #struct_name>(#struct_name)
                }

                ::switchyard::inventory::submit! {
                    ::switchyard::collected::CapabilityRegistration::new(#key, __switchyard_build)
                }
            };
        }
    });

    let key_impl = args.key.as_ref().map(|key| {
        quote! {
            impl #struct_name {
                /// The key this capability is collected under.
                pub const KEY: &'static str = #key;
            }
        }
    });

    let expanded = quote! {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Auto-generated Capability from `#[switchyard::capability]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #struct_name;

        #key_impl

        impl ::switchyard::Capability<#input_type> for #struct_name {
            type Output = #output_type;

            fn execute(&self, #input_pat: #input_type) #fn_output #fn_block
        }

        #registration
    };

    TokenStream::from(expanded)
}
