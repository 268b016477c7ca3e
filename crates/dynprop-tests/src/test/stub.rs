use crate::AccessStub;
use dynprop::prelude::*;

#[test]
fn stub_gets_return_a_neutral_value() {
    let stub = AccessStub;
    let value = stub.get("anything", false).unwrap();

    assert!(value.downcast_ref::<()>().is_some());
}

#[test]
fn stub_path_get_succeeds() {
    let stub = AccessStub;
    assert!(stub.get_dotted("a.b.c", true).is_ok());
}

#[test]
fn stub_sets_are_no_ops() {
    let mut stub = AccessStub;

    assert!(stub.set_str("x", "y", false).is_ok());
    assert!(stub.set_str_dotted("a.b", "y", true).is_ok());
    assert!(stub.set_obj("x", Box::new(1_u8), false).is_ok());
}
