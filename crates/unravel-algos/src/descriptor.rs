//! Static metadata about each algorithm page.

use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::entanglement::Scheme;
use crate::error::{AlgoError, AlgoResult};
use crate::request::AlgorithmRequest;
use crate::{bernstein_vazirani, deutsch_jozsa, entanglement};

/// The algorithms this crate can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Constant-vs-balanced oracle decision.
    DeutschJozsa,
    /// Hidden bit-string recovery.
    BernsteinVazirani,
    /// GHZ and W state preparation.
    Entanglement,
}

/// A link to further reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Link text.
    pub title: &'static str,
    /// Target URL.
    pub url: &'static str,
}

/// One source file shown on an algorithm page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceListing {
    /// File name.
    pub file: &'static str,
    /// File contents, without its unit tests.
    pub code: &'static str,
}

/// Everything a presentation layer needs to know about an algorithm.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmDescriptor {
    /// Which algorithm.
    pub kind: AlgorithmKind,
    /// URL path segment.
    pub slug: &'static str,
    /// Page title.
    pub title: &'static str,
    /// One-paragraph introduction.
    pub summary: &'static str,
    /// Smallest qubit count offered.
    pub min_qubits: u32,
    /// Largest qubit count offered.
    pub max_qubits: u32,
    /// Initial qubit count.
    pub default_qubits: u32,
    /// Further reading.
    pub references: &'static [Reference],
    /// Builder source code.
    #[serde(skip)]
    pub sources: Vec<SourceListing>,
}

impl AlgorithmDescriptor {
    /// Supported qubit counts.
    pub fn qubit_range(&self) -> RangeInclusive<u32> {
        self.min_qubits..=self.max_qubits
    }

    /// Fail unless `n` is a supported qubit count.
    pub fn check_qubits(&self, n: u32) -> AlgoResult<()> {
        if self.qubit_range().contains(&n) {
            Ok(())
        } else {
            Err(AlgoError::QubitCountOutOfRange {
                algorithm: self.title,
                got: n,
                min: self.min_qubits,
                max: self.max_qubits,
            })
        }
    }
}

/// Strip the unit-test module from an embedded source file.
fn listing(file: &'static str, source: &'static str) -> SourceListing {
    let code = source
        .find("#[cfg(test)]")
        .map_or(source, |end| &source[..end])
        .trim_end();
    SourceListing { file, code }
}

const KICKBACK_SOURCE: &str = include_str!("kickback.rs");

impl AlgorithmKind {
    /// Every algorithm, in navigation order.
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::DeutschJozsa,
        AlgorithmKind::BernsteinVazirani,
        AlgorithmKind::Entanglement,
    ];

    /// URL path segment.
    pub fn slug(self) -> &'static str {
        match self {
            AlgorithmKind::DeutschJozsa => "deutsch-jozsa",
            AlgorithmKind::BernsteinVazirani => "bernstein-vazirani",
            AlgorithmKind::Entanglement => "entanglement",
        }
    }

    /// Page title.
    pub fn title(self) -> &'static str {
        match self {
            AlgorithmKind::DeutschJozsa => "Deutsch-Jozsa Algorithm",
            AlgorithmKind::BernsteinVazirani => "Bernstein-Vazirani Algorithm",
            AlgorithmKind::Entanglement => "Quantum Entanglement: GHZ and W States",
        }
    }

    /// Metadata for this algorithm.
    pub fn descriptor(self) -> AlgorithmDescriptor {
        match self {
            AlgorithmKind::DeutschJozsa => AlgorithmDescriptor {
                kind: self,
                slug: self.slug(),
                title: self.title(),
                summary: "Given an oracle promised to be either constant or balanced, \
                    Deutsch-Jozsa decides which with a single query. A constant oracle \
                    always reads out all zeros; a balanced oracle never does.",
                min_qubits: *deutsch_jozsa::QUBIT_RANGE.start(),
                max_qubits: *deutsch_jozsa::QUBIT_RANGE.end(),
                default_qubits: 3,
                references: &[
                    Reference {
                        title: "Deutsch-Jozsa Algorithm - Qiskit Textbook",
                        url: "https://learn.qiskit.org/course/ch-algorithms/deutsch-jozsa-algorithm",
                    },
                    Reference {
                        title: "Deutsch-Jozsa Algorithm - Classiq",
                        url: "https://www.classiq.io/insights/the-deutsch-jozsa-algorithm-explained",
                    },
                ],
                sources: vec![
                    listing("deutsch_jozsa.rs", include_str!("deutsch_jozsa.rs")),
                    listing("kickback.rs", KICKBACK_SOURCE),
                ],
            },
            AlgorithmKind::BernsteinVazirani => AlgorithmDescriptor {
                kind: self,
                slug: self.slug(),
                title: self.title(),
                summary: "The oracle computes the dot product of its input with a hidden \
                    bit-string. One query recovers the whole secret, which is the only \
                    outcome in the readout.",
                min_qubits: *bernstein_vazirani::QUBIT_RANGE.start(),
                max_qubits: *bernstein_vazirani::QUBIT_RANGE.end(),
                default_qubits: 3,
                references: &[Reference {
                    title: "Bernstein-Vazirani Algorithm - Q-munity",
                    url: "https://www.qmunity.tech/tutorials/bernstein-vazirani-algorithm",
                }],
                sources: vec![
                    listing("bernstein_vazirani.rs", include_str!("bernstein_vazirani.rs")),
                    listing("kickback.rs", KICKBACK_SOURCE),
                ],
            },
            AlgorithmKind::Entanglement => AlgorithmDescriptor {
                kind: self,
                slug: self.slug(),
                title: self.title(),
                summary: "A GHZ state reads out all zeros or all ones with equal odds. The W \
                    option runs the RY and CX cascade of the W-state construction and shows \
                    the distribution it prepares.",
                min_qubits: *entanglement::QUBIT_RANGE.start(),
                max_qubits: *entanglement::QUBIT_RANGE.end(),
                default_qubits: 3,
                references: &[
                    Reference {
                        title: "Greenberger-Horne-Zeilinger state - Wikipedia",
                        url: "https://en.wikipedia.org/wiki/Greenberger%E2%80%93Horne%E2%80%93Zeilinger_state",
                    },
                    Reference {
                        title: "W state - Wikipedia",
                        url: "https://en.wikipedia.org/wiki/W_state",
                    },
                ],
                sources: vec![listing("entanglement.rs", include_str!("entanglement.rs"))],
            },
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for AlgorithmKind {
    type Err = AlgoError;

    /// Accepts the slug or a short alias (`dj`, `bv`, `ghz`, `w`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deutsch-jozsa" | "deutsch_jozsa" | "dj" => Ok(AlgorithmKind::DeutschJozsa),
            "bernstein-vazirani" | "bernstein_vazirani" | "bv" => {
                Ok(AlgorithmKind::BernsteinVazirani)
            }
            "entanglement" | "ghz" | "w" => Ok(AlgorithmKind::Entanglement),
            _ => Err(AlgoError::UnknownSelection {
                what: "algorithm",
                value: s.to_string(),
            }),
        }
    }
}

/// An algorithm as named by a user, with the state its alias implies.
///
/// `ghz` and `w` both select [`AlgorithmKind::Entanglement`]; the alias also
/// fixes the scheme unless one is given explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmSelection {
    /// The selected algorithm.
    pub kind: AlgorithmKind,
    /// Scheme named by the alias, if any.
    pub scheme: Option<Scheme>,
}

impl AlgorithmSelection {
    /// Default request for the selection, honouring the alias scheme.
    pub fn request(self) -> AlgorithmRequest {
        let mut request = AlgorithmRequest::default_for(self.kind);
        if let (AlgorithmRequest::Entanglement { scheme, .. }, Some(implied)) =
            (&mut request, self.scheme)
        {
            *scheme = implied;
        }
        request
    }

    /// The scheme to build: an explicit choice wins over the alias.
    pub fn scheme_or(self, explicit: Option<Scheme>) -> Scheme {
        explicit.or(self.scheme).unwrap_or_default()
    }
}

impl From<AlgorithmKind> for AlgorithmSelection {
    fn from(kind: AlgorithmKind) -> Self {
        Self { kind, scheme: None }
    }
}

impl FromStr for AlgorithmSelection {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.parse()?;
        let scheme = match s.to_ascii_lowercase().as_str() {
            "ghz" => Some(Scheme::Ghz),
            "w" => Some(Scheme::W),
            _ => None,
        };
        Ok(Self { kind, scheme })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_ranges() {
        let dj = AlgorithmKind::DeutschJozsa.descriptor();
        assert_eq!(dj.qubit_range(), 1..=10);
        assert_eq!(dj.default_qubits, 3);
        assert!(dj.check_qubits(11).is_err());

        let ent = AlgorithmKind::Entanglement.descriptor();
        assert_eq!(ent.min_qubits, 2);
        assert!(ent.check_qubits(1).is_err());
    }

    #[test]
    fn test_listings_exclude_tests() {
        for kind in AlgorithmKind::ALL {
            let descriptor = kind.descriptor();
            assert!(!descriptor.sources.is_empty());
            for source in &descriptor.sources {
                assert!(source.code.contains("pub"));
                assert!(!source.code.contains("mod tests"));
            }
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("bv".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::BernsteinVazirani);
        assert_eq!(
            "deutsch-jozsa".parse::<AlgorithmKind>().unwrap(),
            AlgorithmKind::DeutschJozsa
        );
        assert!("grover".parse::<AlgorithmKind>().is_err());
    }

    #[test]
    fn test_selection_aliases() {
        let w: AlgorithmSelection = "W".parse().unwrap();
        assert_eq!(w.kind, AlgorithmKind::Entanglement);
        assert_eq!(w.scheme, Some(Scheme::W));
        assert_eq!(
            w.request(),
            AlgorithmRequest::Entanglement {
                qubits: 3,
                scheme: Scheme::W
            }
        );
        assert_eq!(w.scheme_or(None), Scheme::W);
        assert_eq!(w.scheme_or(Some(Scheme::Ghz)), Scheme::Ghz);

        let plain: AlgorithmSelection = "entanglement".parse().unwrap();
        assert_eq!(plain.scheme, None);
        assert_eq!(plain.scheme_or(None), Scheme::Ghz);
        assert_eq!("bv".parse::<AlgorithmSelection>().unwrap().scheme, None);
        assert!("shor".parse::<AlgorithmSelection>().is_err());
    }
}
