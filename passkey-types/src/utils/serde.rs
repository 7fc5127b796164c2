//! Utilities to be used in serde derives for more robust (de)serializations.

use serde::{Deserialize, Deserializer};

/// Many fields in the webauthn spec have the following wording.
///
/// > The values SHOULD be members of `T` but client platforms MUST ignore unknown values.
///
/// This method is a simple way of ignoring unknown values without failing deserialization.
pub fn ignore_unknown<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match T::deserialize(de) {
        Ok(val) => val,
        Err(_) => T::default(),
    })
}

/// Same as [`ignore_unknown`] but for an optional list, where only the unknown entries are dropped
/// instead of the whole list.
pub fn ignore_unknown_opt_vec<'de, D, T>(de: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let Some(values) = Option::<Vec<serde_json::Value>>::deserialize(de)? else {
        return Ok(None);
    };
    Ok(Some(
        values
            .into_iter()
            .filter_map(|v| T::deserialize(v).ok())
            .collect(),
    ))
}

/// Some Relying Parties send numbers as strings or floats, i.e. `"timeout": "60000"` or
/// `"timeout": 60000.0`. Values that cannot be represented are truncated or saturated rather than
/// failing the whole request.
pub fn maybe_stringified_num<'de, D>(de: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Num {
        Int(u64),
        Float(f64),
        Str(String),
    }

    fn from_float(f: f64) -> u32 {
        if f.is_nan() || f <= 0.0 {
            0
        } else if f >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            // SAFETY: the value has been bounded to the range of u32 above
            #[allow(clippy::as_conversions)]
            let truncated = f.trunc() as u32;
            truncated
        }
    }

    let Some(num) = Option::<Num>::deserialize(de)? else {
        return Ok(None);
    };
    Ok(Some(match num {
        Num::Int(i) => u32::try_from(i).unwrap_or(u32::MAX),
        Num::Float(f) => from_float(f),
        Num::Str(s) => s.parse::<f64>().map(from_float).unwrap_or_default(),
    }))
}
