//! Serde helpers for string-keyed enums

/// Implements case-insensitive deserialization for a unit-only enum.
///
/// Each variant is listed with every spelling it accepts; the first spelling
/// is the one reported back in the error message.
///
/// ```
/// # use art_explorer_core::impl_case_insensitive_deserialize;
/// #[derive(Debug, PartialEq)]
/// enum Mode { Fast, Slow }
///
/// impl_case_insensitive_deserialize!(
///     Mode,
///     Fast => "fast" | "quick",
///     Slow => "slow"
/// );
///
/// let mode: Mode = serde_json::from_str(r#""QUICK""#).unwrap();
/// assert_eq!(mode, Mode::Fast);
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $first:literal $(| $alias:literal)*),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <::std::string::String as serde::Deserialize>::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $first $(| $alias)* => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($first),+].join(", ")
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Flavor {
        Plain,
        ExtraHot,
    }

    impl_case_insensitive_deserialize!(
        Flavor,
        Plain => "plain",
        ExtraHot => "extra-hot" | "extrahot"
    );

    #[test]
    fn test_case_insensitive_deserialize() {
        let result: Flavor = serde_json::from_str(r#""PLAIN""#).unwrap();
        assert_eq!(result, Flavor::Plain);

        let result: Flavor = serde_json::from_str(r#""ExtraHot""#).unwrap();
        assert_eq!(result, Flavor::ExtraHot);
    }

    #[test]
    fn test_unknown_variant_lists_choices() {
        let err = serde_json::from_str::<Flavor>(r#""mild""#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unknown variant 'mild'"));
        assert!(msg.contains("plain, extra-hot"));
    }
}
