use std::{fs::File, io::Read, path::Path};

use csv::Trim;
use hashbrown::HashMap;
use log::debug;

use crate::error::{Error, Result};
use crate::logbook::{csv_reader, record_line};

pub type Rank = i32;

/// Bidirectional lookup between grade labels ("7a+") and their position on
/// the difficulty scale. Both directions are unique.
#[derive(Debug, Clone, Default)]
pub struct GradeScale {
    grades: Vec<(String, Rank)>,
    ranks: HashMap<String, Rank>,
    labels: HashMap<Rank, String>,
}

impl GradeScale {
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Rank)>,
        S: Into<String>,
    {
        let mut scale = Self::default();

        for (label, rank) in pairs {
            let label = label.into();

            if scale.ranks.contains_key(&label) {
                return Err(Error::DuplicateLabel(label));
            }
            if scale.labels.contains_key(&rank) {
                return Err(Error::DuplicateRank(rank));
            }

            scale.ranks.insert(label.clone(), rank);
            scale.labels.insert(rank, label.clone());
            scale.grades.push((label, rank));
        }

        Ok(scale)
    }

    /// Reads a headerless `label,rank` table.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut pairs = Vec::new();

        for record in csv_reader(reader, Trim::All).records() {
            let record = record?;
            let line = record_line(&record);

            if record.len() != 2 {
                return Err(Error::MalformedRow {
                    line,
                    expected: 2,
                    found: record.len(),
                });
            }

            let rank: Rank = record[1].parse().map_err(|_| Error::InvalidRank {
                line,
                value: record[1].to_string(),
            })?;
            pairs.push((record[0].to_string(), rank));
        }

        let scale = Self::new(pairs)?;
        debug!("loaded grade scale with {} grades", scale.len());
        Ok(scale)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path).map_err(csv::Error::from)?;
        Self::from_reader(file)
    }

    pub fn to_rank(&self, label: &str) -> Result<Rank> {
        self.ranks
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownGrade(label.to_string()))
    }

    pub fn to_label(&self, rank: Rank) -> Result<&str> {
        self.labels
            .get(&rank)
            .map(String::as_str)
            .ok_or(Error::UnknownRank(rank))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ranks.contains_key(label)
    }

    /// Pairs in the order they were supplied.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rank)> {
        self.grades.iter().map(|(label, rank)| (label.as_str(), *rank))
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}

#[cfg(test)]
pub(crate) const FRENCH: &[(&str, Rank)] = &[
    ("3", 1),
    ("4", 2),
    ("4+", 3),
    ("5", 4),
    ("5+", 5),
    ("6a", 6),
    ("6a+", 7),
    ("6b", 8),
    ("6b+", 9),
    ("6c", 10),
    ("6c+", 11),
    ("7a", 12),
    ("7a+", 13),
    ("7b", 14),
    ("7b+", 15),
    ("7c", 16),
    ("7c+", 17),
    ("8a", 18),
    ("8a+", 19),
    ("8b", 20),
    ("8b+", 21),
    ("8c", 22),
    ("8c+", 23),
    ("9a", 24),
    ("9a+", 25),
    ("9b", 26),
    ("9b+", 27),
    ("9c", 28),
];
