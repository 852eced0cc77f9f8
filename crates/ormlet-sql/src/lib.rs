mod auto_key;
pub use auto_key::AutoKeyStrategy;

mod criteria;
pub use criteria::key_filter;

mod delim;

mod dialect;
pub use dialect::{Dialect, Options};

pub mod generic;
pub use generic::{GenericTranslator, UpdateBuilder, UpdateProcessor};

mod params;
pub use params::{bind, Bound};

mod postgresql;
pub use postgresql::{PgUpdateBuilder, PostgresqlTranslator};

mod translator;
pub use translator::Translator;

pub use ormlet_core::stmt::DmlKind;
