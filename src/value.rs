use std::fmt::Debug;

pub type DefaultValue = i32;

/// Anything that can label a die face: integers, strings, enums.
pub trait Value: Sized + Send + Sync + Debug + Clone + PartialEq + Eq + PartialOrd + Ord {}

impl<T> Value for T where T: Sized + Send + Sync + Debug + Clone + Eq + Ord {}
