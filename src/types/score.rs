use std::fmt;
use std::ops::{Add, AddAssign};

/// Weighted score: points achieved out of the ruleset's total weight.
///
/// A non-numeric `:score(..)` tag makes the weight `NaN`, which carries
/// through the arithmetic here instead of being masked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[must_use]
pub struct Score {
    achieved: f64,
    total: f64,
}

impl Score {
    pub fn new(achieved: f64, total: f64) -> Self {
        Self { achieved, total }
    }

    #[must_use]
    pub fn achieved(&self) -> f64 {
        self.achieved
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// `achieved / total`; `NaN` for an empty ruleset.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.achieved / self.total
    }

    /// Whether every point was achieved.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.achieved == self.total
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score::new(self.achieved + rhs.achieved, self.total + rhs.total)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl From<Score> for (f64, f64) {
    fn from(s: Score) -> Self {
        (s.achieved, s.total)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.achieved, self.total)
    }
}

/// Achieved points per field, shaped like the ruleset. Returned by
/// [`RuleSet::score_breakdown()`](super::RuleSet::score_breakdown).
#[derive(Debug, Clone, PartialEq, Default)]
#[must_use]
pub struct ScoreBreakdown {
    entries: Vec<(String, Points)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Points {
    Leaf(f64),
    Nested(ScoreBreakdown),
}

impl Points {
    #[must_use]
    pub fn achieved(&self) -> f64 {
        match self {
            Points::Leaf(p) => *p,
            Points::Nested(inner) => inner.achieved(),
        }
    }
}

impl ScoreBreakdown {
    pub(crate) fn new(entries: Vec<(String, Points)>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Points> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Points)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Sum of every leaf. Equal to `score(..).achieved()` for the same subject.
    #[must_use]
    pub fn achieved(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p.achieved()).sum()
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, points)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match points {
                Points::Leaf(p) => write!(f, "{key}: {p}")?,
                Points::Nested(inner) => write!(f, "{key}: {inner}")?,
            }
        }
        write!(f, "}}")
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::ser::{Serialize, SerializeMap, SerializeTuple, Serializer};

    use super::{Points, Score, ScoreBreakdown};

    /// A `[achieved, total]` pair.
    impl Serialize for Score {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(2)?;
            tuple.serialize_element(&self.achieved)?;
            tuple.serialize_element(&self.total)?;
            tuple.end()
        }
    }

    impl Serialize for ScoreBreakdown {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.entries.len()))?;
            for (key, points) in &self.entries {
                map.serialize_entry(key, points)?;
            }
            map.end()
        }
    }

    impl Serialize for Points {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Points::Leaf(p) => serializer.serialize_f64(*p),
                Points::Nested(inner) => inner.serialize(serializer),
            }
        }
    }
}
