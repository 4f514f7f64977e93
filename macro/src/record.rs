use crate::reflect::bounded;
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Index, Member};

pub(crate) fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Record can only be derived for structs",
            ));
        }
    };

    let members = fields
        .iter()
        .enumerate()
        .map(|(i, field)| match &field.ident {
            Some(name) => Member::Named(name.clone()),
            None => Member::Unnamed(Index::from(i)),
        })
        .collect::<Vec<_>>();
    let names = fields
        .iter()
        .enumerate()
        .map(|(i, field)| match &field.ident {
            Some(name) => name.unraw().to_string(),
            None => i.to_string(),
        })
        .collect::<Vec<_>>();
    let types = fields.iter().map(|field| &field.ty).collect::<Vec<_>>();
    let indices = (0..fields.len())
        .map(Literal::usize_unsuffixed)
        .collect::<Vec<_>>();
    let count = fields.len();

    let generics = bounded(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::value::Reflect for #ident #ty_generics #where_clause {
            fn type_info() -> ::value::TypeInfo {
                ::value::TypeInfo::of::<Self>(::value::Kind::Record)
            }

            fn to_value(&self) -> ::value::Value {
                ::value::Value::Record(::value::RecordValue::new(
                    <Self as ::value::Reflect>::type_info(),
                    ::std::vec![#(::value::Reflect::to_value(&self.#members)),*],
                ))
            }

            fn from_value(
                value: ::value::Value,
            ) -> ::core::result::Result<Self, ::value::ValueError> {
                #[allow(unused_mut, unused_variables)]
                let mut values = ::value::RecordValue::expect::<Self>(value)?;
                ::core::result::Result::Ok(Self {
                    #(#members: ::value::Reflect::from_value(values.next().ok_or(
                        ::value::ValueError::MissingField {
                            record: ::core::any::type_name::<Self>(),
                            field: #names,
                        },
                    )?)?),*
                })
            }

            fn as_record(&self) -> ::core::option::Option<&dyn ::value::Record> {
                ::core::option::Option::Some(self)
            }

            fn as_record_mut(&mut self) -> ::core::option::Option<&mut dyn ::value::Record> {
                ::core::option::Option::Some(self)
            }
        }

        impl #impl_generics ::value::Record for #ident #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::value::Field> {
                ::std::vec![#(::value::Field::new(#names, <#types as ::value::Reflect>::type_info())),*]
            }

            fn field_count(&self) -> usize {
                #count
            }

            fn field(&self, index: usize) -> ::core::option::Option<::value::Value> {
                match index {
                    #(#indices => ::core::option::Option::Some(::value::Reflect::to_value(&self.#members)),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn set_field(
                &mut self,
                index: usize,
                value: ::value::Value,
            ) -> ::core::result::Result<(), ::value::ValueError> {
                match index {
                    #(#indices => {
                        self.#members = ::value::Reflect::from_value(value)?;
                        ::core::result::Result::Ok(())
                    })*
                    _ => ::core::result::Result::Err(::value::ValueError::NoField {
                        record: ::core::any::type_name::<Self>(),
                        index,
                    }),
                }
            }
        }
    })
}
