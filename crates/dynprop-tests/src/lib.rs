//! End-to-end coverage for generated dynamic property accessors: the
//! build script scans `fixtures` for usage markers, generates accessor
//! impls for every reachable fixture type, and the suites below exercise
//! them through the public trait surface.

pub mod fixtures;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/dynamic_access.rs"));
}

mod generated_stub {
    include!(concat!(env!("OUT_DIR"), "/dynamic_access_stub.rs"));
}

pub use generated_stub::AccessStub;

#[cfg(test)]
mod test;
