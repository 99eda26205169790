//! Macros used by this crate.
//!
//! All of these are automatically in-scope within this crate.

#![allow(unused_macros)]

/// Only compiles the given items if the `serde` feature is enabled.
macro_rules! cfg_serde {
	($($item:item)*) => {
		$(
			#[cfg(feature = "serde")]
			$item
		)*
	};
}
