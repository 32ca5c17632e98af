//! `PropertyField` derive macro implementation
//!
//! The generated code is a match over property names; value conversion is
//! delegated to the `PropertyValue` trait in the host crate, so the macro
//! never needs to inspect field types.

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Receiver for the struct that derives `PropertyField`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(property), supports(struct_named))]
pub struct PropertyFieldReceiver {
    /// The struct identifier
    ident: syn::Ident,
    /// The struct data with parsed fields
    data: ast::Data<(), PropertyFieldFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(property))]
pub struct PropertyFieldFieldReceiver {
    /// The field identifier
    ident: Option<syn::Ident>,
    /// Property name attribute; defaults to the field identifier
    #[darling(default, rename = "name")]
    property_name: Option<String>,
    /// Column documentation carried through to `property_description`
    #[darling(default)]
    description: Option<String>,
    /// Exclude the field from the reflected surface
    #[darling(default)]
    skip: bool,
}

/// Process the `PropertyField` derive macro
pub fn process_derive_property_field(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let receiver = match PropertyFieldReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    let struct_name = &receiver.ident;
    TokenStream::from(generate_property_access_impl(struct_name, fields))
}

/// Generate the `PropertyAccess` implementation
fn generate_property_access_impl(
    struct_name: &syn::Ident,
    fields: &ast::Fields<PropertyFieldFieldReceiver>,
) -> proc_macro2::TokenStream {
    let entity = struct_name.to_string();

    let included: Vec<(&syn::Ident, String, Option<&String>)> = fields
        .iter()
        .filter(|field| !field.skip)
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            let name = field
                .property_name
                .clone()
                .unwrap_or_else(|| ident.to_string());
            Some((ident, name, field.description.as_ref()))
        })
        .collect();

    let names = included.iter().map(|(_, name, _)| name);

    let get_arms = included.iter().map(|(ident, name, _)| {
        quote! {
            #name => ::core::option::Option::Some(
                registry_models::schema::PropertyValue::into_value(
                    ::core::clone::Clone::clone(&self.#ident),
                ),
            ),
        }
    });

    let set_arms = included.iter().map(|(ident, name, _)| {
        quote! {
            #name => {
                self.#ident = registry_models::schema::PropertyValue::from_value(value)
                    .ok_or(registry_models::schema::PropertyError::TypeMismatch {
                        entity: #entity,
                        property: #name,
                    })?;
                ::core::result::Result::Ok(())
            }
        }
    });

    let description_arms = included.iter().filter_map(|(_, name, description)| {
        description.map(|description| {
            quote! {
                #name => ::core::option::Option::Some(#description),
            }
        })
    });

    quote! {
        impl registry_models::schema::PropertyAccess for #struct_name {
            fn entity() -> &'static str {
                #entity
            }

            fn property_names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn property(
                &self,
                name: &str,
            ) -> ::core::option::Option<registry_models::schema::FieldValue> {
                match name {
                    #(#get_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn set_property(
                &mut self,
                name: &str,
                value: registry_models::schema::FieldValue,
            ) -> ::core::result::Result<(), registry_models::schema::PropertyError> {
                match name {
                    #(#set_arms)*
                    _ => ::core::result::Result::Err(
                        registry_models::schema::PropertyError::Unknown {
                            entity: #entity,
                            property: name.to_string(),
                        },
                    ),
                }
            }

            fn property_description(name: &str) -> ::core::option::Option<&'static str> {
                match name {
                    #(#description_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
