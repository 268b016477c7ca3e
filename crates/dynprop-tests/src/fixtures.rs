use std::str::FromStr;
use thiserror::Error as ThisError;

dynprop::dynamic_access!(crate::fixtures::Container);

///
/// Container
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Container {
    pub inner: Person,
    pub label: String,
}

///
/// Person
///
/// `legacy` exists on the struct but is excluded from the schema, so no
/// generated dispatch table may reach it.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Person {
    pub name: String,
    pub last_name: String,
    pub age: u32,
    pub address: Address,
    pub salary: Money,
    pub legacy: String,
}

///
/// Address
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub number: u32,
}

///
/// Money
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Money {
    pub cents: u64,
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cents = s
            .parse::<u64>()
            .map_err(|_| ParseMoneyError(s.to_string()))?;

        Ok(Self { cents })
    }
}

///
/// ParseMoneyError
///

#[derive(Debug, ThisError)]
#[error("invalid money amount '{0}'")]
pub struct ParseMoneyError(String);
