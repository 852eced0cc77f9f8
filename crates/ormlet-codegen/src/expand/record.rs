use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let ormlet = &self.ormlet;
        let ident = &self.record.ident;
        let name = ident.to_string();
        let fields = self
            .record
            .fields
            .iter()
            .map(|field| self.expand_field_def(field));

        quote! {
            impl #ormlet::Record for #ident {
                fn record_type() -> &'static #ormlet::RecordType {
                    static TY: ::std::sync::OnceLock<#ormlet::RecordType> = ::std::sync::OnceLock::new();

                    TY.get_or_init(|| {
                        #ormlet::RecordType::new::<#ident>(#name, vec![ #( #fields ),* ])
                    })
                }

                fn descriptor(&self) -> &'static #ormlet::RecordType {
                    <Self as #ormlet::Record>::record_type()
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                    self
                }
            }

            impl #ormlet::Primitive for #ident {
                fn ty() -> #ormlet::Type {
                    #ormlet::Type::Record(<Self as #ormlet::Record>::record_type())
                }

                fn to_value(&self) -> #ormlet::Value {
                    #ormlet::record_value(self)
                }

                fn load(value: #ormlet::Value) -> #ormlet::Result<Self> {
                    #ormlet::load_record(value)
                }

                fn assign(&mut self, value: #ormlet::Value) -> #ormlet::Result<()> {
                    #ormlet::assign_record(self, value)
                }
            }
        }
    }
}
