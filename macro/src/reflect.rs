use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, Generics, parse_quote};

/// Adds a `Reflect` bound to every type parameter.
pub(crate) fn bounded(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let params = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect::<Vec<_>>();
    let where_clause = generics.make_where_clause();
    for ident in params {
        where_clause
            .predicates
            .push(parse_quote!(#ident: ::value::Reflect));
    }
    generics
}

/// Newtypes are transparent: same kind as the wrapped type, own identity.
pub(crate) fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let inner = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Unnamed(fields),
            ..
        }) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Reflect can only be derived for newtype structs, derive Record for structs with several fields",
            ));
        }
    };

    let generics = bounded(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::value::Reflect for #ident #ty_generics #where_clause {
            fn type_info() -> ::value::TypeInfo {
                ::value::TypeInfo::wrapping::<Self>(<#inner as ::value::Reflect>::type_info())
            }

            fn to_value(&self) -> ::value::Value {
                ::value::Reflect::to_value(&self.0)
            }

            fn from_value(
                value: ::value::Value,
            ) -> ::core::result::Result<Self, ::value::ValueError> {
                <#inner as ::value::Reflect>::from_value(value).map(|inner| Self(inner))
            }
        }
    })
}
