use ormlet::{
    mapping::{self, Primitive},
    stmt::{Type, Value},
    Mapping, Record,
};

use pretty_assertions::assert_eq;

#[derive(Debug, Default, Record)]
struct User {
    #[key]
    pub id: i64,

    #[tag = "column=USER_NAME"]
    pub name: String,

    pub email: Option<String>,

    pub roles: Vec<String>,

    password_hash: String,
}

#[derive(Debug, Default, Record)]
struct Stamp {
    pub at: i64,
    pub by: Option<String>,
}

#[derive(Debug, Default, Record)]
struct Audit {
    pub version: i32,

    #[embed]
    pub stamp: Stamp,
}

#[derive(Debug, Default, Record)]
struct Document {
    #[key]
    pub id: uuid::Uuid,

    pub title: String,

    #[embed]
    pub audit: Audit,

    #[embed]
    internal: Stamp,
}

#[derive(Debug, Default, Record)]
struct Cached {
    #[key]
    pub id: i64,

    cache: std::collections::HashMap<String, Vec<u8>>,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Address {
    pub street: String,
    pub zip: Option<String>,
}

#[derive(Debug, Default, Record)]
struct Person {
    #[key]
    pub id: i64,

    pub home: Address,

    pub scores: [i32; 3],
}

#[test]
fn flat_record_has_one_property_per_public_field() {
    let mapping = Mapping::of::<User>("");

    let keys: Vec<_> = mapping.keys().collect();
    assert_eq!(keys, ["id", "name", "email", "roles"]);

    let id = mapping.get("id").unwrap();
    assert!(id.key);
    assert_eq!(id.position, 0);
    assert_eq!(id.ty, Type::option(Type::I64));

    let name = mapping.get("name").unwrap();
    assert_eq!(name.annotation, "column=USER_NAME");
    assert_eq!(name.ty, Type::option(Type::String));

    let email = mapping.get("email").unwrap();
    assert_eq!(email.ty, Type::option(Type::String));
    assert!(!email.key);
}

#[test]
fn private_fields_are_skipped() {
    let mapping = Mapping::of::<User>("");
    assert!(!mapping.contains_key("password_hash"));

    // `internal` is private, so only the stamp nested in `audit` is mapped
    let mapping = Mapping::of::<Document>("");
    assert_eq!(mapping.keys().filter(|key| *key == "at").count(), 1);
}

#[test]
fn private_field_of_unmapped_type() {
    let mapping = Mapping::of::<Cached>("");

    let keys: Vec<_> = mapping.keys().collect();
    assert_eq!(keys, ["id"]);

    let mut cached = Cached::default();
    cached.cache.insert("k".to_string(), vec![1]);
    assert!(mapping.get("id").unwrap().set(&mut cached, Value::I64(5)).unwrap());
    assert_eq!(cached.id, 5);
    assert_eq!(cached.cache.len(), 1);
}

#[test]
fn collections() {
    let mapping = Mapping::of::<User>("");

    let roles = mapping.get("roles").unwrap();
    assert!(roles.is_collection());
    assert_eq!(roles.element_ty, Some(Type::String));
    assert_eq!(roles.ty, Type::list(Type::String));
    assert_eq!(roles.allocate(), Value::List(vec![]));

    let id = mapping.get("id").unwrap();
    assert!(!id.is_collection());
    assert_eq!(id.allocate(), Value::Null);
}

#[test]
fn embedded_fields_are_flattened() {
    let mapping = Mapping::of::<Document>("");

    let keys: Vec<_> = mapping.keys().collect();
    assert_eq!(keys, ["id", "title", "version", "at", "by"]);
    assert!(mapping.keys().all(|key| !key.contains("audit") && !key.contains("stamp")));

    assert_eq!(mapping.get("version").unwrap().position, 0);
    assert_eq!(mapping.get("by").unwrap().position, 1);
    assert_eq!(mapping.key_properties().count(), 1);
}

#[test]
fn prefix_applies_to_nested_fields() {
    let mapping = Mapping::of::<Document>("doc_");

    let keys: Vec<_> = mapping.keys().collect();
    assert_eq!(keys, ["doc_id", "doc_title", "doc_version", "doc_at", "doc_by"]);
    assert_eq!(mapping.get("doc_at").unwrap().name, "at");
}

#[test]
fn set_then_get() {
    let mapping = Mapping::of::<User>("");
    let mut user = User::default();

    assert!(mapping.get("id").unwrap().set(&mut user, Value::I64(9)).unwrap());
    assert!(mapping
        .get("email")
        .unwrap()
        .set(&mut user, Value::from("carl@example.com"))
        .unwrap());
    assert!(mapping
        .get("roles")
        .unwrap()
        .set(&mut user, Value::from(vec!["admin", "dev"]))
        .unwrap());

    assert_eq!(user.id, 9);
    assert_eq!(user.email.as_deref(), Some("carl@example.com"));
    assert_eq!(user.roles, ["admin", "dev"]);

    assert_eq!(mapping.get("id").unwrap().get(&user).unwrap(), Value::I64(9));
    assert_eq!(
        mapping.get("email").unwrap().get(&user).unwrap(),
        Value::from("carl@example.com")
    );
    assert_eq!(
        mapping.get("roles").unwrap().get(&user).unwrap(),
        Value::from(vec!["admin", "dev"])
    );
}

#[test]
fn set_null_leaves_field_unchanged() {
    let mapping = Mapping::of::<User>("");
    let mut user = User {
        id: 3,
        name: "carl".to_string(),
        email: Some("carl@example.com".to_string()),
        roles: vec!["admin".to_string()],
        password_hash: String::new(),
    };

    for (_, property) in &mapping {
        assert!(!property.set(&mut user, Value::Null).unwrap());
    }

    assert_eq!(user.id, 3);
    assert_eq!(user.name, "carl");
    assert_eq!(user.email.as_deref(), Some("carl@example.com"));
    assert_eq!(user.roles, ["admin"]);
}

#[test]
fn unset_option_reads_as_null() {
    let mapping = Mapping::of::<User>("");
    let user = User::default();

    assert_eq!(mapping.get("email").unwrap().get(&user).unwrap(), Value::Null);
}

#[test]
fn nested_set_and_get() {
    let mapping = Mapping::of::<Document>("");
    let mut doc = Document::default();
    let id = uuid::Uuid::new_v4();

    mapping.get("id").unwrap().set(&mut doc, Value::Uuid(id)).unwrap();
    mapping.get("at").unwrap().set(&mut doc, Value::I64(1_700_000_000)).unwrap();
    mapping.get("by").unwrap().set(&mut doc, Value::from("carl")).unwrap();

    assert_eq!(doc.id, id);
    assert_eq!(doc.audit.stamp.at, 1_700_000_000);
    assert_eq!(doc.audit.stamp.by.as_deref(), Some("carl"));
    assert_eq!(doc.internal.at, 0);

    assert_eq!(
        mapping.get("by").unwrap().get(&doc).unwrap(),
        Value::from("carl")
    );
}

#[test]
fn boxed_instance() {
    let mapping = Mapping::of::<User>("");
    let mut user = Box::new(User::default());

    assert!(mapping.get("name").unwrap().set(&mut user, Value::from("carl")).unwrap());
    assert_eq!(user.name, "carl");
    assert_eq!(mapping.get("name").unwrap().get(&user).unwrap(), Value::from("carl"));
}

#[test]
fn wrong_value_type_is_an_error() {
    let mapping = Mapping::of::<User>("");
    let mut user = User::default();

    let err = mapping
        .get("id")
        .unwrap()
        .set(&mut user, Value::from("not a number"))
        .unwrap_err();
    assert!(err.to_string().starts_with("cannot set `id` of `User`: cannot convert"));
    assert_eq!(user.id, 0);
}

#[test]
fn wrong_record_is_an_error() {
    let mapping = Mapping::of::<User>("");
    let mut doc = Document::default();

    let id = mapping.get("id").unwrap();
    assert!(id.set(&mut doc, Value::I64(1)).unwrap_err().is_record_mismatch());
    assert!(id.get(&doc).unwrap_err().is_record_mismatch());
}

#[test]
fn non_record_types_map_to_nothing() {
    assert!(mapping::build("", &Type::I64).is_empty());
    assert!(mapping::build("", &<Vec<String> as Primitive>::ty()).is_empty());
}

#[test]
fn optional_record_is_unwrapped() {
    let ty = Type::option(Type::Record(User::record_type()));
    assert_eq!(mapping::build("", &ty).len(), 4);
}

#[test]
fn build_from_instance() {
    let doc = Document::default();
    let mapping = mapping::build_of("", &doc);
    assert_eq!(mapping.len(), 5);
}

#[test]
fn record_field_without_embed_is_a_leaf() {
    let mapping = Mapping::of::<Person>("");

    let keys: Vec<_> = mapping.keys().collect();
    assert_eq!(keys, ["id", "home", "scores"]);

    let home = mapping.get("home").unwrap();
    assert_eq!(home.ty, Type::option(Type::Record(Address::record_type())));
    assert!(!home.is_collection());

    let mut person = Person::default();
    let value = Value::Record(
        [
            ("street".to_string(), Value::from("1 Main St")),
            ("zip".to_string(), Value::from("90210")),
        ]
        .into_iter()
        .collect(),
    );
    assert!(home.set(&mut person, value.clone()).unwrap());

    assert_eq!(
        person.home,
        Address {
            street: "1 Main St".to_string(),
            zip: Some("90210".to_string()),
        }
    );
    assert_eq!(home.get(&person).unwrap(), value);
}

#[test]
fn record_field_rejects_unknown_keys() {
    let mapping = Mapping::of::<Person>("");
    let mut person = Person::default();

    let value = Value::Record([("city".to_string(), Value::from("Paris"))].into_iter().collect());
    let err = mapping.get("home").unwrap().set(&mut person, value).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot set `home` of `Person`: record `Address` has no field `city`"
    );

    let err = mapping
        .get("home")
        .unwrap()
        .set(&mut person, Value::from("1 Main St"))
        .unwrap_err();
    assert!(err.to_string().starts_with("cannot set `home` of `Person`: cannot convert"));
}

#[test]
fn array_field_is_a_collection() {
    let mapping = Mapping::of::<Person>("");
    let scores = mapping.get("scores").unwrap();

    assert!(scores.is_collection());
    assert_eq!(scores.ty, Type::list(Type::I32));
    assert_eq!(scores.allocate(), Value::List(vec![]));

    let mut person = Person::default();
    assert!(scores.set(&mut person, Value::from(vec![7i32, 8, 9])).unwrap());
    assert_eq!(person.scores, [7, 8, 9]);
    assert_eq!(scores.get(&person).unwrap(), Value::from(vec![7i32, 8, 9]));

    assert!(scores.set(&mut person, Value::from(vec![1i32])).is_err());
    assert_eq!(person.scores, [7, 8, 9]);
}
