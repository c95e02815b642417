//! Ready-made fair dice.

use once_cell::sync::Lazy;

use crate::value::DefaultValue;
use crate::{Die, Error, Result};

pub static D4: Lazy<Die> = Lazy::new(|| from_distinct(1..=4));
pub static D6: Lazy<Die> = Lazy::new(|| from_distinct(1..=6));
pub static D8: Lazy<Die> = Lazy::new(|| from_distinct(1..=8));
pub static D10: Lazy<Die> = Lazy::new(|| from_distinct(1..=10));
pub static D12: Lazy<Die> = Lazy::new(|| from_distinct(1..=12));
pub static D20: Lazy<Die> = Lazy::new(|| from_distinct(1..=20));
pub static D100: Lazy<Die> = Lazy::new(|| from_distinct(1..=100));
pub static COIN: Lazy<Die<&'static str>> = Lazy::new(|| from_distinct(["H", "T"]));

/// Fair die with faces `1..=size`.
pub fn uniform(size: DefaultValue) -> Result<Die> {
    if size < 1 {
        return Err(Error::InvalidArgument(format!(
            "die size must be at least 1, got {size}"
        )));
    }
    Die::new(1..=size)
}

fn from_distinct<T, I>(faces: I) -> Die<T>
where
    T: crate::Value,
    I: IntoIterator<Item = T>,
{
    match Die::new(faces) {
        Ok(die) => die,
        Err(e) => unreachable!("preset faces are distinct and non-empty: {e}"),
    }
}

pub fn d4() -> Die {
    D4.clone()
}

pub fn d6() -> Die {
    D6.clone()
}

pub fn d8() -> Die {
    D8.clone()
}

pub fn d10() -> Die {
    D10.clone()
}

pub fn d12() -> Die {
    D12.clone()
}

pub fn d20() -> Die {
    D20.clone()
}

pub fn d100() -> Die {
    D100.clone()
}

pub fn coin() -> Die<&'static str> {
    COIN.clone()
}
