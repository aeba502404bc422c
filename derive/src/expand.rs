use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields};

use crate::attr::{OptAttr, OptionsAttr, doc_description};

pub(crate) fn expand(input: &DeriveInput) -> TokenStream {
    let container = match OptionsAttr::from_derive_input(input) {
        Ok(container) => container,
        Err(e) => return e.write_errors(),
    };
    expand_options(input, &container).unwrap_or_else(Error::into_compile_error)
}

fn expand_options(input: &DeriveInput, container: &OptionsAttr) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields_named) => &fields_named.named,
            Fields::Unit => return Ok(expand_impl(input, container, Vec::new())),
            Fields::Unnamed(_) => {
                return Err(Error::new_spanned(
                    struct_name,
                    "`Options` needs named fields to bind flags to",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                struct_name,
                "`Options` can only be derived for structs",
            ));
        }
    };

    // Lowercased flags seen so far. Flags match case-insensitively at runtime.
    let mut seen: Vec<String> = Vec::new();
    let mut metas = Vec::new();

    for field in fields {
        let mut opt: Option<OptAttr> = None;
        for attr in &field.attrs {
            if attr.path().is_ident("opt") {
                if opt.is_some() {
                    return Err(Error::new_spanned(attr, "duplicate `opt` attribute"));
                }
                let syn::Meta::List(meta_list) = &attr.meta else {
                    return Err(Error::new_spanned(
                        attr,
                        "expected a flag list, e.g. #[opt(\"--name\", \"-n\")]",
                    ));
                };
                opt = Some(syn::parse2(meta_list.tokens.clone())?);
            }
        }
        let Some(opt) = opt else {
            continue;
        };
        let field_ident = field
            .ident
            .as_ref()
            .expect("Named fields should always have an identifier");
        if opt.flags.is_empty() {
            return Err(Error::new_spanned(
                field_ident,
                "an option needs at least one flag, e.g. #[opt(\"--name\")]",
            ));
        }

        let flags: Vec<String> = opt.flags.iter().map(|f| f.value()).collect();
        for (lit, flag) in opt.flags.iter().zip(&flags) {
            let folded = flag.to_lowercase();
            if seen.contains(&folded) {
                return Err(Error::new_spanned(
                    lit,
                    format!("flag `{flag}` is already used by another option"),
                ));
            }
            seen.push(folded);
        }

        let field_type = &field.ty;
        let required = opt.required;
        let description = opt
            .description
            .or_else(|| doc_description(&field.attrs))
            .map(|text| quote! { .description(#text) });
        let setter = (!opt.read_only).then(|| {
            quote! {
                .setter(|c: &mut Self, v: ::flagbind::Value| {
                    <#field_type as ::flagbind::OptionValue>::from_value(v)
                        .map(|value| c.#field_ident = value)
                })
            }
        });

        metas.push(quote! {
            ::flagbind::OptionMeta::new(
                &[#(#flags),*],
                <#field_type as ::flagbind::OptionValue>::VALUE_TYPE,
            )
            .required(#required)
            #description
            .getter(|c: &Self| ::flagbind::OptionValue::to_value(&c.#field_ident))
            #setter
        });
    }

    Ok(expand_impl(input, container, metas))
}

fn expand_impl(
    input: &DeriveInput,
    container: &OptionsAttr,
    metas: Vec<TokenStream>,
) -> TokenStream {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = opt_str(container.name.as_deref());
    let about = opt_str(container.about.as_deref());

    quote! {
        #[automatically_derived]
        impl #impl_generics ::flagbind::Options for #struct_name #ty_generics #where_clause {
            const NAME: ::core::option::Option<&'static str> = #name;
            const ABOUT: ::core::option::Option<&'static str> = #about;

            fn options() -> ::std::vec::Vec<::flagbind::OptionMeta<Self>> {
                ::std::vec![#(#metas),*]
            }
        }
    }
}

fn opt_str(s: Option<&str>) -> TokenStream {
    match s {
        Some(s) => quote! { ::core::option::Option::Some(#s) },
        None => quote! { ::core::option::Option::None },
    }
}
