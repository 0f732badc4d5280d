//! End-to-end tests of the exact and deduced renderings.

use tyname::{
    exact, forward_as_tuple, forwarded, full, type_name, type_names, Const, Forwarded, RRef,
    TypeList, Volatile,
};

#[test]
fn plain_value() {
    let v = 5;
    assert_eq!(exact!(v), "int");
    // Binding to a forwarding parameter adds a reference.
    assert_eq!(full!(v), "int&");
}

#[test]
fn reference() {
    let mut a = 5;
    let v = &mut a;
    assert_eq!(exact!(v), "int&");
    assert_eq!(full!(v), "int&");
}

#[test]
fn const_reference() {
    let a = 5;
    let v = &a;
    assert_eq!(exact!(v), "int const&");
    assert_eq!(full!(v), "int const&");
}

#[test]
fn pointer_to_const() {
    let a = 5;
    let v: *const i32 = &a;
    assert_eq!(exact!(v), "int const*");
    assert_eq!(full!(v), "int const*&");
}

#[test]
fn const_pointer() {
    let mut a = 5;
    let v = Const::new(&mut a as *mut i32);
    assert_eq!(exact!(v), "int* const");
    assert_eq!(full!(v), "int* const&");
}

#[test]
fn volatile() {
    let v = Volatile::new(5);
    assert_eq!(exact!(v), "int volatile");
    assert_eq!(full!(v), "int volatile&");
}

#[test]
fn literals() {
    assert_eq!(exact!(42), "int");
    assert_eq!(full!(42), "int");
    assert_eq!(forwarded!(42), "int&&");
    assert_eq!(exact!(1.5), "double");
    assert_eq!(full!(true), "bool");
}

#[test]
fn rvalue_references() {
    // The declared type of a forwarding parameter, then the type of naming it.
    fn received<T: tyname::TypeName>(arg: Forwarded) -> [String; 2] {
        let named = Forwarded::new::<RRef<T>>(tyname::ValueCategory::Lvalue);
        [arg.parameter().to_string(), named.deduced().to_string()]
    }

    let mut a = 5;
    assert_eq!(received::<i32>(Forwarded::lvalue(&a)), ["int&", "int&"]);
    assert_eq!(
        received::<&mut i32>(Forwarded::lvalue(&&mut a)),
        ["int&", "int&"]
    );
    assert_eq!(received::<&i32>(Forwarded::lvalue(&&a)), ["int const&", "int const&"]);
    assert_eq!(received::<i32>(Forwarded::rvalue(&42)), ["int&&", "int&"]);
}

#[test]
fn exact_does_not_evaluate() {
    fn unreachable() -> u8 {
        panic!("evaluated");
    }

    assert_eq!(exact!(unreachable()), "unsigned char");
}

#[test]
fn deduced_adds_one_reference() {
    let a = 5u16;
    let p: *const u16 = &a;
    let c = Const::new(2i64);

    assert_eq!(full!(a), format!("{}&", exact!(a)));
    assert_eq!(full!(p), format!("{}&", exact!(p)));
    assert_eq!(full!(c), format!("{}&", exact!(c)));
    assert_eq!(forwarded!(7u64), format!("{}&&", exact!(7u64)));
}

#[test]
fn fields_and_elements_are_lvalues() {
    struct Pair {
        first: i32,
        second: *mut i32,
    }

    let mut a = 1;
    let pair = Pair {
        first: 1,
        second: &mut a,
    };
    let array = [1u8, 2, 3];

    assert_eq!(full!(pair.first, pair.second), "int&, int*&");
    assert_eq!(full!(array, array[0]), "unsigned char [3]&, unsigned char&");
    assert_eq!(full!((pair.first)), "int&");
    assert_eq!(full!(pair.first + 1), "int");
}

#[test]
fn multiple_explicit_types() {
    // The same list through a generic wrapper, as a class template would receive it.
    struct Wrapper<L>(core::marker::PhantomData<L>);

    impl<L: TypeList> Wrapper<L> {
        fn full_type() -> String {
            type_names::<L>()
        }
    }

    fn check<L: TypeList>(expected: &str) {
        assert_eq!(type_names::<L>(), expected);
        assert_eq!(Wrapper::<L>::full_type(), expected);
    }

    check::<(i32, Const<i32>)>("int, int const");
    check::<(&mut i32, &i32)>("int&, int const&");
    check::<(RRef<i32>,)>("int&&");
    check::<(*mut i32, *const i32, Const<*mut i32>)>("int*, int const*, int* const");
    check::<()>("");
}

#[test]
fn multiple_values() {
    assert_eq!(full!(1), "int");
    assert_eq!(full!(1, 1), "int, int");
    assert_eq!(full!(1, "hello"), "int, char [6] const&");
    assert_eq!(full!(), "");
    assert_eq!(exact!(1, "hello"), "int, char [6] const&");
}

#[test]
fn value_and_type_forms_agree() {
    let a = 5;
    let c = &a;
    let p: *const i32 = &a;

    assert_eq!(exact!(a, c, p), type_names::<(i32, &i32, *const i32)>());
    assert_eq!(full!(1, c, 2u8), type_names::<(i32, &i32, u8)>());

    let joined = [exact!(a), exact!(c), exact!(p)].join(", ");
    assert_eq!(exact!(a, c, p), joined);
}

#[test]
fn deterministic() {
    let a = 5;
    assert_eq!(full!(a, "x"), full!(a, "x"));
    assert_eq!(type_name::<&*const i32>(), type_name::<&*const i32>());
}

#[test_log::test]
fn tuple_forwarding_loses_qualifiers_past_second_argument() {
    let a = 5;
    let c = &a;

    assert_eq!(forward_as_tuple(&(1, c)), "int, int const&");
    // Known limitation: the third argument is reported decayed.
    assert_eq!(forward_as_tuple(&(1, 2, c)), "int, int, int");
    assert_ne!(forward_as_tuple(&(1, 2, c)), full!(1, 2, c));
    assert_eq!(full!(1, 2, c), "int, int, int const&");
}

#[test]
fn serialization() {
    let descriptor = tyname::descriptor::<Const<*mut i32>>();
    assert_eq!(
        serde_json::to_string(&descriptor).unwrap(),
        r#""int* const""#
    );

    let list = tyname::ArgumentList::of::<(i32, &i32)>();
    assert_eq!(
        serde_json::to_value(&list).unwrap(),
        serde_json::json!("int, int const&")
    );
}
