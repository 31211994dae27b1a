//! `Display` / `FromStr` for the small label enums of the domain
//!
//! ```rust
//! use saleslens_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Facebook,
//!     Line,
//! }
//!
//! impl_domain_label_conversions!(Channel {
//!     Facebook => "facebook",
//!     Line => "line",
//! });
//!
//! assert_eq!("LINE".parse::<Channel>().unwrap(), Channel::Line);
//! ```

/// Implements `Display` (lowercase label) and case-insensitive `FromStr`.
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::SalesLensError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::SalesLensError::InvalidInput(format!(
                        "invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
