use super::person;
use crate::fixtures::Address;
use dynprop::prelude::*;

#[test]
fn get_string_property() {
    let value = person().get("name", false).unwrap();
    assert_eq!(
        value.downcast_ref::<String>().map(String::as_str),
        Some("Max")
    );
}

#[test]
fn get_numeric_property() {
    let value = person().get("age", false).unwrap();
    assert_eq!(value.downcast_ref::<u32>(), Some(&34));
}

#[test]
fn get_nested_struct_property() {
    let person = person();
    let value = person.get("address", false).unwrap();

    assert_eq!(value.downcast_ref::<Address>(), Some(&person.address));
}

#[test]
fn get_ignores_casing_on_request() {
    let person = person();
    let exact = person.get("last_name", false).unwrap();
    let relaxed = person.get("LAST_NAME", true).unwrap();

    assert_eq!(
        exact.downcast_ref::<String>(),
        relaxed.downcast_ref::<String>()
    );
}

#[test]
fn casing_matters_by_default() {
    let err = person().get("NAME", false).unwrap_err();

    assert!(matches!(
        err,
        AccessError::UnknownProperty { ref name, .. } if name == "NAME"
    ));
}

#[test]
fn unknown_property_names_the_type() {
    let err = person().get("__nonexistent__", false).unwrap_err();

    assert!(matches!(
        err,
        AccessError::UnknownProperty { ref ty, .. } if ty == "crate::fixtures::Person"
    ));
}

#[test]
fn unknown_property_fails_even_with_relaxed_casing() {
    assert!(person().get("__nonexistent__", true).is_err());
}

#[test]
fn excluded_property_is_not_served() {
    assert!(person().get("legacy", false).is_err());
    assert!(person().get("legacy", true).is_err());
}
