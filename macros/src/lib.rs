//! Procedural macros for the registry-models crate
//!
//! This crate provides the `PropertyField` derive macro, which generates the
//! string-keyed property reflection impl used by the alias layer and the
//! schema compatibility verifier.

use proc_macro::TokenStream;

mod property_field_impl;

/// `PropertyField` derive macro
///
/// Generates an implementation of `registry_models::schema::PropertyAccess`
/// for a struct, allowing fields to be read and written through their stored
/// column names.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(PropertyField)]
/// struct Patient {
///     #[property(name = "pid")]
///     pub pid: String,
///
///     #[property(name = "birthtime", description = "Patient's date of birth.")]
///     pub birth_time: Option<chrono::NaiveDateTime>,
/// }
/// ```
///
/// A field without `#[property(name = ...)]` uses its Rust identifier as the
/// property name. `#[property(skip)]` removes a field from the reflected
/// surface entirely.
#[proc_macro_derive(PropertyField, attributes(property))]
pub fn derive_property_field(input: TokenStream) -> TokenStream {
    property_field_impl::process_derive_property_field(input)
}
