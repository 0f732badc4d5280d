use tyname::{type_name, type_names, Const, Object, Type, TypeName, Volatile};

#[test]
fn named_struct_type_name() {
    assert_eq!(*Person::TYPE, Type::Object(Object::Named("Person")));
    assert_eq!(type_name::<Person>(), "Person");
    assert_eq!(type_name::<&Person>(), "Person const&");
    assert_eq!(type_name::<*mut Const<*const Person>>(), "Person const* const*");
}

#[test]
fn unit_and_tuple_struct_type_name() {
    assert_eq!(type_name::<Unit>(), "Unit");
    assert_eq!(type_name::<[Point; 3]>(), "Point [3]");
}

#[test]
fn enum_and_union_type_name() {
    assert_eq!(type_name::<Volatile<Status>>(), "Status volatile");
    assert_eq!(type_name::<&mut Bits>(), "Bits&");
}

#[test]
fn renamed_type_name() {
    assert_eq!(type_name::<Renamed>(), "app::Widget");
    assert_eq!(type_names::<(Renamed, *mut Renamed)>(), "app::Widget, app::Widget*");
}

#[test]
fn crate_path_type_name() {
    assert_eq!(type_name::<Local>(), "Local");
    assert_eq!(type_name::<Both>(), "ns::Both");
}

#[derive(TypeName)]
#[allow(unused)]
struct Person {
    name: String,
    age: i32,
}

#[derive(TypeName)]
struct Unit;

#[derive(TypeName)]
#[allow(unused)]
struct Point(f32, f32);

#[derive(TypeName)]
#[allow(unused)]
enum Status {
    Active,
    Inactive,
}

#[derive(TypeName)]
#[allow(unused)]
union Bits {
    int: u32,
    float: f32,
}

#[derive(TypeName)]
#[tyname(rename = "app::Widget")]
struct Renamed;

mod reexport {
    pub use tyname as names;
}

#[derive(TypeName)]
#[tyname(crate = "crate::reexport::names")]
struct Local;

#[derive(TypeName)]
#[tyname(crate = "::tyname", rename = "ns::Both")]
struct Both;
