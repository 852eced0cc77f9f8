use super::Expand;
use crate::schema::Field;

use proc_macro2::{Literal, TokenStream};
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_field_def(&self, field: &Field) -> TokenStream {
        let ormlet = &self.ormlet;
        let name = field.ident.to_string();
        let position = Literal::usize_unsuffixed(field.id);
        let key = field.attrs.key;
        let annotation = field
            .attrs
            .tag
            .as_ref()
            .map(|tag| tag.value())
            .unwrap_or_default();
        let visibility = if field.public {
            quote!(#ormlet::Visibility::Public)
        } else {
            quote!(#ormlet::Visibility::Private)
        };

        let (ty, kind) = if !field.public {
            self.expand_skipped(field)
        } else if field.attrs.embed {
            self.expand_embed(field)
        } else {
            self.expand_accessor(field)
        };

        quote! {
            #ormlet::FieldDef {
                name: #name,
                position: #position,
                visibility: #visibility,
                ty: #ty,
                key: #key,
                annotation: #annotation,
                kind: #kind,
            }
        }
    }

    fn expand_accessor(&self, field: &Field) -> (TokenStream, TokenStream) {
        let ormlet = &self.ormlet;
        let record = &self.record.ident;
        let ident = &field.ident;
        let ty = &field.ty;

        let field_ty = quote!(<#ty as #ormlet::Primitive>::ty());
        let kind = quote! {
            #ormlet::FieldKind::Value(#ormlet::Accessor {
                get: |any| {
                    any.downcast_ref::<#record>()
                        .map(|record| #ormlet::Primitive::to_value(&record.#ident))
                },
                set: |any, value| {
                    let record = any.downcast_mut::<#record>()?;
                    Some(#ormlet::Primitive::assign(&mut record.#ident, value))
                },
            })
        };

        (field_ty, kind)
    }

    fn expand_skipped(&self, field: &Field) -> (TokenStream, TokenStream) {
        let ormlet = &self.ormlet;
        let ty = &field.ty;

        (
            quote!(#ormlet::Type::Opaque(::std::any::type_name::<#ty>())),
            quote!(#ormlet::FieldKind::Skipped),
        )
    }

    fn expand_embed(&self, field: &Field) -> (TokenStream, TokenStream) {
        let ormlet = &self.ormlet;
        let record = &self.record.ident;
        let ident = &field.ident;
        let ty = &field.ty;

        let field_ty = quote!(#ormlet::Type::Record(<#ty as #ormlet::Record>::record_type()));
        let kind = quote! {
            #ormlet::FieldKind::Embed(#ormlet::Projection {
                project: |any| {
                    any.downcast_ref::<#record>()
                        .map(|record| &record.#ident as &dyn ::std::any::Any)
                },
                project_mut: |any| {
                    any.downcast_mut::<#record>()
                        .map(|record| &mut record.#ident as &mut dyn ::std::any::Any)
                },
            })
        };

        (field_ty, kind)
    }
}
