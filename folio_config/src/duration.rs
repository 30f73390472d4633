use std::ops::Deref;

use serde::Deserialize;

/// Duration in the compact `"1d 2h 3m 4s"` config format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut out = std::time::Duration::default();
        for part in s.split_whitespace() {
            let (value, factor) = if let Some(value) = part.strip_suffix('s') {
                (value, 1)
            } else if let Some(value) = part.strip_suffix('m') {
                (value, 60)
            } else if let Some(value) = part.strip_suffix('h') {
                (value, 60 * 60)
            } else if let Some(value) = part.strip_suffix('d') {
                (value, 24 * 60 * 60)
            } else {
                return Err(serde::de::Error::custom("Invalid duration"));
            };
            let value = value
                .parse::<u64>()
                .map_err(|_| serde::de::Error::custom("Invalid duration"))?;
            out += std::time::Duration::from_secs(value * factor);
        }
        Ok(Self(out))
    }
}
