pub mod mapping {
    pub use ormlet_core::mapping::{build, build_of, Mapping, Primitive, Property};
}
pub use mapping::{Mapping, Property};

pub mod schema {
    pub use ormlet_core::schema::{Column, Table};
}

pub mod stmt {
    pub use ormlet_core::stmt::*;
}

pub mod sql {
    pub use ormlet_sql::*;
}
pub use sql::{bind, Dialect, Translator};

pub use ormlet_core::{Error, Record, Result};

pub use ormlet_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use ormlet_core::{
        mapping::{
            assign_record, load_record, record_value, Accessor, FieldDef, FieldKind, Primitive,
            Projection, Record, RecordType, Visibility,
        },
        stmt::{Type, Value},
        Result,
    };
}
