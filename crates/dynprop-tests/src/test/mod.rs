mod get;
mod stub;

use crate::fixtures::{Address, Container, Money, Person};

pub(crate) fn person() -> Person {
    Person {
        name: "Max".to_string(),
        last_name: "Mustermann".to_string(),
        age: 34,
        address: Address {
            street: "Mainzer Landstrasse".to_string(),
            number: 50,
        },
        salary: Money { cents: 123_400 },
        legacy: String::new(),
    }
}

pub(crate) fn container() -> Container {
    Container {
        inner: person(),
        label: "crate".to_string(),
    }
}
