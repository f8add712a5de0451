use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use error::Error;

pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Blank values count as unset.
pub fn optional(lookup: Lookup, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn required(lookup: Lookup, name: &'static str) -> Result<String, Error> {
    optional(lookup, name).ok_or(Error::Configuration(name))
}

pub fn parse<T>(lookup: Lookup, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    optional(lookup, name)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|err| anyhow!("config -> {name} {err} > {value}"))
        })
        .transpose()
}
