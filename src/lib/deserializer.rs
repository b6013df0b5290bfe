// SPDX-License-Identifier: Apache-2.0

use std::marker::PhantomData;

use serde::{de, de::SeqAccess, de::Visitor, Deserializer};

// This function is inspired by https://serde.rs/string-or-struct.html
// The VLAN field holds either a numeric tag or a list of child names, hence
// integers are kept as their decimal string form and interpreted later.
pub(crate) fn option_string_or_u64<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntegerOrString(PhantomData<fn() -> Option<String>>);

    impl<'de> Visitor<'de> for IntegerOrString {
        type Value = Option<String>;

        fn expecting(
            &self,
            formatter: &mut std::fmt::Formatter,
        ) -> std::fmt::Result {
            formatter.write_str("integer or string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(IntegerOrString(PhantomData))
}

// Accepts both `[a, b]` and `"a b"`.
pub(crate) fn option_vec_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct VecOrString(PhantomData<fn() -> Option<Vec<String>>>);

    impl<'de> Visitor<'de> for VecOrString {
        type Value = Option<Vec<String>>;

        fn expecting(
            &self,
            formatter: &mut std::fmt::Formatter,
        ) -> std::fmt::Result {
            formatter.write_str("list of strings or space separated string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.split_whitespace().map(String::from).collect()))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut ret = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                ret.push(item);
            }
            Ok(Some(ret))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(VecOrString(PhantomData))
}

pub(crate) fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolOrString(PhantomData<fn() -> bool>);

    impl<'de> Visitor<'de> for BoolOrString {
        type Value = bool;

        fn expecting(
            &self,
            formatter: &mut std::fmt::Formatter,
        ) -> std::fmt::Result {
            formatter.write_str("boolean: yes/no/true/false/on/off/1/0")
        }

        fn visit_bool<E>(self, value: bool) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<bool, E>
        where
            E: de::Error,
        {
            match value {
                1 => Ok(true),
                0 => Ok(false),
                _ => Err(de::Error::invalid_value(
                    de::Unexpected::Unsigned(value),
                    &self,
                )),
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<bool, E>
        where
            E: de::Error,
        {
            match value.to_lowercase().as_str() {
                "1" | "true" | "yes" | "y" | "on" => Ok(true),
                "0" | "false" | "no" | "n" | "off" => Ok(false),
                _ => Err(de::Error::invalid_value(
                    de::Unexpected::Str(value),
                    &self,
                )),
            }
        }
    }

    deserializer.deserialize_any(BoolOrString(PhantomData))
}
