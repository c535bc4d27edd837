//! Serde support and JSON projection for [`Sequence`].
//!
//! A sequence serializes as a plain list. Absent and empty sequences both
//! serialize as `[]`; a JSON `null` deserializes to an absent sequence.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::Sequence;
use crate::error::SliceError;

// =============================================================================
// Serialize
// =============================================================================

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

// =============================================================================
// Deserialize
// =============================================================================

struct SequenceVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> SequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for SequenceVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence or null")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Sequence::new())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Sequence::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Sequence::from_vec(elements))
    }
}

impl<'de, T> Deserialize<'de> for Sequence<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(SequenceVisitor::new())
    }
}

// =============================================================================
// JSON Projection
// =============================================================================

impl<T: Serialize> Sequence<T> {
    /// Renders the sequence as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::Json`] if an element fails to serialize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::Sequence;
    ///
    /// let absent: Sequence<i32> = Sequence::new();
    /// assert_eq!(absent.to_json_string().unwrap(), "[]");
    ///
    /// let numbers: Sequence<i32> = vec![1, 2].into();
    /// assert_eq!(numbers.to_json_string().unwrap(), "[1,2]");
    /// ```
    pub fn to_json_string(&self) -> Result<String, SliceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders the sequence as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::Json`] if an element fails to serialize.
    pub fn to_json_string_pretty(&self) -> Result<String, SliceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    #[case::absent(Sequence::new())]
    #[case::empty(Sequence::from_vec(Vec::new()))]
    fn test_absent_and_empty_render_as_empty_list(#[case] sequence: Sequence<String>) {
        assert_eq!(sequence.to_json_string().unwrap(), "[]");
        assert_eq!(sequence.to_json_string_pretty().unwrap(), "[]");
    }

    #[rstest]
    fn test_pretty_output_is_indented() {
        let sequence: Sequence<&str> = vec!["foo", "bar"].into();
        assert_eq!(
            sequence.to_json_string_pretty().unwrap(),
            "[\n  \"foo\",\n  \"bar\"\n]"
        );
    }

    #[rstest]
    fn test_null_deserializes_to_absent() {
        let sequence: Sequence<i32> = serde_json::from_str("null").unwrap();
        assert!(sequence.is_absent());
    }

    #[rstest]
    fn test_empty_list_deserializes_to_present_empty() {
        let sequence: Sequence<i32> = serde_json::from_str("[]").unwrap();
        assert!(!sequence.is_absent());
        assert!(sequence.is_empty());
    }

    #[rstest]
    fn test_non_string_map_key_fails() {
        let mut entry = HashMap::new();
        entry.insert(vec![1], 1);
        let sequence: Sequence<HashMap<Vec<i32>, i32>> = vec![entry].into();

        let error = sequence.to_json_string().unwrap_err();
        assert!(matches!(error, SliceError::Json(_)));
        assert!(!error.is_invalid_parameter());
    }
}
