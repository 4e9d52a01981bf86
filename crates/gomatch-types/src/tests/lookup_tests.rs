//! Tests for field and method lookup.

use rstest::rstest;

use crate::{BasicKind, Universe};

#[test]
fn promoted_fields_are_found_through_embedding() {
    let mut universe = Universe::new();
    let int = universe.basic(BasicKind::Int);
    let (_, inner) = universe.new_named(None, "Inner");
    let count = universe.new_field(None, "Count", int, false);
    let inner_struct = universe.new_struct(vec![count], Vec::new());
    universe.set_underlying(inner, inner_struct);

    let (_, outer) = universe.new_named(None, "Outer");
    let embedded = universe.new_field(None, "Inner", inner, true);
    let outer_struct = universe.new_struct(vec![embedded], Vec::new());
    universe.set_underlying(outer, outer_struct);

    let hit = universe
        .lookup_field_or_method(outer, false, "Count")
        .expect("promoted field");
    assert_eq!(hit.obj, count);
    assert_eq!(hit.index, vec![0, 0]);
    assert!(!hit.indirect);
}

#[rstest]
#[case(false, false)]
#[case(true, true)]
fn pointer_methods_need_addressable_receivers(#[case] addressable: bool, #[case] found: bool) {
    let mut universe = Universe::new();
    let (_, buffer) = universe.new_named(None, "Buffer");
    let empty = universe.new_struct(Vec::new(), Vec::new());
    universe.set_underlying(buffer, empty);
    universe.add_method(buffer, "Reset", Vec::new(), Vec::new(), true);

    assert_eq!(
        universe
            .lookup_field_or_method(buffer, addressable, "Reset")
            .is_some(),
        found
    );
}

#[test]
fn pointer_receivers_are_found_through_pointers() {
    let mut universe = Universe::new();
    let (_, buffer) = universe.new_named(None, "Buffer");
    let empty = universe.new_struct(Vec::new(), Vec::new());
    universe.set_underlying(buffer, empty);
    let reset = universe.add_method(buffer, "Reset", Vec::new(), Vec::new(), true);
    let pointer = universe.pointer(buffer);

    let hit = universe
        .lookup_field_or_method(pointer, false, "Reset")
        .expect("method through pointer");
    assert_eq!(hit.obj, reset);
    assert!(hit.indirect);
}

#[test]
fn same_depth_duplicates_are_ambiguous() {
    let mut universe = Universe::new();
    let int = universe.basic(BasicKind::Int);
    let embed = |universe: &mut Universe, name: &str| {
        let (_, named) = universe.new_named(None, name);
        let field = universe.new_field(None, "ID", int, false);
        let data = universe.new_struct(vec![field], Vec::new());
        universe.set_underlying(named, data);
        universe.new_field(None, name, named, true)
    };
    let a = embed(&mut universe, "A");
    let b = embed(&mut universe, "B");
    let both = universe.new_struct(vec![a, b], Vec::new());
    assert!(universe.lookup_field_or_method(both, false, "ID").is_none());
}

#[test]
fn interface_method_sets_include_embedded_interfaces() {
    let mut universe = Universe::new();
    let reader = universe.new_interface(Vec::new());
    universe.add_interface_method(reader, "Read", Vec::new(), Vec::new());
    let closer = universe.new_interface(Vec::new());
    universe.add_interface_method(closer, "Close", Vec::new(), Vec::new());
    let read_closer = universe.new_interface(vec![reader, closer]);

    let names: Vec<_> = universe
        .interface_methods(read_closer)
        .into_iter()
        .filter_map(|method| universe.object(method).map(|obj| obj.name().to_owned()))
        .collect();
    assert_eq!(names, ["Read", "Close"]);
    assert!(
        universe
            .lookup_field_or_method(read_closer, false, "Close")
            .is_some()
    );
}
