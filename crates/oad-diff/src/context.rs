//! Context labels and identity keys.
//!
//! [`ApiContext`] lets a value describe itself when it appears as a
//! collection element or map key. [`Identifiable`] marks element types whose
//! collections are matched by identity instead of position.

use indexmap::IndexMap;
use url::Url;

/// A value that can describe itself for use as a diff context label.
pub trait ApiContext {
    fn api_context(&self) -> String;
}

/// A collection element with a stable identity key.
///
/// Two elements with equal identities are the same logical item even if
/// their position or content differs.
pub trait Identifiable {
    fn identity(&self) -> String;
}

macro_rules! display_context {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ApiContext for $ty {
                fn api_context(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_context!(String, str, bool, i64, u64, f64, Url);

impl<T: ApiContext + ?Sized> ApiContext for &T {
    fn api_context(&self) -> String {
        (**self).api_context()
    }
}

/// Maps have no meaningful short description.
impl<K, V> ApiContext for IndexMap<K, V> {
    fn api_context(&self) -> String {
        String::new()
    }
}

/// English ordinal for a zero-based index: `0` is `1st`.
pub fn ordinal(index: usize) -> String {
    let n = index + 1;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
