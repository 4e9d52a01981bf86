//! Tests for type identity, assignability, convertibility and
//! interface satisfaction.

use gomatch_ast::ChanDir;
use rstest::{fixture, rstest};

use crate::{BasicKind, TypeId, Universe};

struct Fixture {
    universe: Universe,
    int: TypeId,
    string: TypeId,
    celsius: TypeId,
    stringer: TypeId,
    named_value: TypeId,
    named_pointer: TypeId,
}

#[fixture]
fn types() -> Fixture {
    let mut universe = Universe::new();
    let pkg = universe.new_package("example.com/temp", "temp");
    let int = universe.basic(BasicKind::Int);
    let string = universe.basic(BasicKind::String);
    let float = universe.basic(BasicKind::Float64);

    let (_, celsius) = universe.new_named(Some(pkg), "Celsius");
    universe.set_underlying(celsius, float);

    let (_, stringer) = universe.new_named(Some(pkg), "Stringer");
    let iface = universe.new_interface(Vec::new());
    universe.set_underlying(stringer, iface);
    let result = universe.new_var(Some(pkg), "", string);
    universe.add_interface_method(stringer, "String", Vec::new(), vec![result]);

    let (_, named_value) = universe.new_named(Some(pkg), "ByValue");
    let empty = universe.new_struct(Vec::new(), Vec::new());
    universe.set_underlying(named_value, empty);
    let result = universe.new_var(Some(pkg), "", string);
    universe.add_method(named_value, "String", Vec::new(), vec![result], false);

    let (_, named_pointer) = universe.new_named(Some(pkg), "ByPointer");
    universe.set_underlying(named_pointer, empty);
    let result = universe.new_var(Some(pkg), "", string);
    universe.add_method(named_pointer, "String", Vec::new(), vec![result], true);

    Fixture {
        universe,
        int,
        string,
        celsius,
        stringer,
        named_value,
        named_pointer,
    }
}

#[rstest]
fn composite_types_are_identical_structurally(types: Fixture) {
    let mut universe = types.universe;
    let a = universe.slice(types.int);
    let b = universe.slice(types.int);
    let c = universe.slice(types.string);
    assert!(universe.identical(a, b));
    assert!(!universe.identical(a, c));
}

#[rstest]
fn defined_types_are_identical_only_to_themselves(types: Fixture) {
    let mut universe = types.universe;
    let (_, other) = universe.new_named(None, "Fahrenheit");
    let float = universe.basic(BasicKind::Float64);
    universe.set_underlying(other, float);
    assert!(universe.identical(types.celsius, types.celsius));
    assert!(!universe.identical(types.celsius, other));
    assert!(!universe.identical(types.celsius, float));
}

#[rstest]
fn struct_tags_matter_unless_ignored(types: Fixture) {
    let mut universe = types.universe;
    let a_field = universe.new_field(None, "Name", types.string, false);
    let b_field = universe.new_field(None, "Name", types.string, false);
    let tagged = universe.new_struct(vec![a_field], vec!["json:\"name\"".to_owned()]);
    let plain = universe.new_struct(vec![b_field], Vec::new());
    assert!(!universe.identical(tagged, plain));
    assert!(universe.identical_ignore_tags(tagged, plain));
}

#[rstest]
fn untyped_constants_assign_by_category(types: Fixture) {
    let universe = &types.universe;
    let untyped_int = universe.basic(BasicKind::UntypedInt);
    let untyped_string = universe.basic(BasicKind::UntypedString);
    let untyped_nil = universe.basic(BasicKind::UntypedNil);
    assert!(universe.assignable(untyped_int, types.int));
    assert!(universe.assignable(untyped_int, types.celsius));
    assert!(!universe.assignable(untyped_string, types.int));
    assert!(!universe.assignable(untyped_nil, types.int));
    assert!(universe.assignable(untyped_nil, types.stringer));
}

#[rstest]
fn named_and_unnamed_with_same_underlying_assign(types: Fixture) {
    let mut universe = types.universe;
    let (_, ints) = universe.new_named(None, "Ints");
    let slice = universe.slice(types.int);
    universe.set_underlying(ints, slice);
    let other = universe.slice(types.int);
    assert!(universe.assignable(other, ints));
    assert!(universe.assignable(ints, other));
    let float = universe.basic(BasicKind::Float64);
    assert!(!universe.assignable(float, types.celsius));
}

#[rstest]
fn bidirectional_channels_assign_to_directional(types: Fixture) {
    let mut universe = types.universe;
    let both = universe.chan(ChanDir::Both, types.int);
    let send = universe.chan(ChanDir::Send, types.int);
    assert!(universe.assignable(both, send));
    assert!(!universe.assignable(send, both));
}

#[rstest]
fn conversions_follow_the_language_rules(types: Fixture) {
    let mut universe = types.universe;
    let float = universe.basic(BasicKind::Float64);
    let bytes = universe.basic(BasicKind::Uint8);
    let byte_slice = universe.slice(bytes);
    let int_slice = universe.slice(types.int);
    let unsafe_pointer = universe.basic(BasicKind::UnsafePointer);
    let int_pointer = universe.pointer(types.int);
    let array = universe.array(4, types.int);

    assert!(universe.convertible(types.int, float));
    assert!(universe.convertible(float, types.celsius));
    assert!(universe.convertible(types.int, types.string));
    assert!(universe.convertible(byte_slice, types.string));
    assert!(universe.convertible(types.string, byte_slice));
    assert!(!universe.convertible(int_slice, types.string));
    assert!(universe.convertible(int_pointer, unsafe_pointer));
    assert!(universe.convertible(int_slice, array));
    assert!(!universe.convertible(types.string, types.int));
}

#[rstest]
fn value_receivers_implement_for_values_and_pointers(types: Fixture) {
    let mut universe = types.universe;
    assert!(universe.implements(types.named_value, types.stringer));
    let pointer = universe.pointer(types.named_value);
    assert!(universe.implements(pointer, types.stringer));
}

#[rstest]
fn pointer_receivers_implement_only_for_pointers(types: Fixture) {
    let mut universe = types.universe;
    assert!(!universe.implements(types.named_pointer, types.stringer));
    assert!(universe.pointer_implements(types.named_pointer, types.stringer));
    let pointer = universe.pointer(types.named_pointer);
    assert!(universe.implements(pointer, types.stringer));
}

#[rstest]
fn error_interface_is_predeclared(types: Fixture) {
    let universe = &types.universe;
    let error = universe
        .lookup("error")
        .and_then(|obj| universe.object(obj))
        .map(crate::Object::ty)
        .expect("error is predeclared");
    assert!(universe.is_interface(error));
    assert!(!universe.implements(types.named_value, error));
    assert!(universe.implements(types.stringer, types.stringer));
}

#[rstest]
#[case("append")]
#[case("len")]
#[case("recover")]
fn builtins_are_in_the_universe_scope(#[case] name: &str) {
    let universe = Universe::new();
    let obj = universe.lookup(name).expect("builtin should resolve");
    assert!(universe.object(obj).is_some_and(crate::Object::is_builtin));
}
