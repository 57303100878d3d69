use std::fmt::Display;

use super::ElementId;
use crate::containers::StorageKey;

/// Describes how much trust can be put into an [`ApproximationRatio`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CertificateKind {
    /// The solution is known to be a maximum common independent set.
    Optimal,
    /// The ratio is a proven lower bound on `|solution| / |optimum|`.
    Proven,
    /// The ratio comes from an empirical fit; it is reported but not guaranteed.
    Conjectural,
    /// Nothing was established before the search was stopped.
    Uncertified,
}

impl Display for CertificateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertificateKind::Optimal => write!(f, "optimal"),
            CertificateKind::Proven => write!(f, "proven"),
            CertificateKind::Conjectural => write!(f, "conjectural"),
            CertificateKind::Uncertified => write!(f, "uncertified"),
        }
    }
}

/// A lower bound on the ratio between the size of a solution and the size of an optimal one,
/// together with the kind of argument backing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproximationRatio {
    value: f64,
    kind: CertificateKind,
}

impl ApproximationRatio {
    pub fn optimal() -> ApproximationRatio {
        ApproximationRatio {
            value: 1.0,
            kind: CertificateKind::Optimal,
        }
    }

    pub fn proven(value: f64) -> ApproximationRatio {
        ApproximationRatio {
            value,
            kind: CertificateKind::Proven,
        }
    }

    pub fn conjectural(value: f64) -> ApproximationRatio {
        ApproximationRatio {
            value,
            kind: CertificateKind::Conjectural,
        }
    }

    pub fn uncertified() -> ApproximationRatio {
        ApproximationRatio {
            value: 0.0,
            kind: CertificateKind::Uncertified,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn kind(&self) -> CertificateKind {
        self.kind
    }
}

/// An immutable snapshot of a common independent set together with its certificate.
#[derive(Clone, Debug, PartialEq)]
pub struct ApproximationSolution {
    ratio: ApproximationRatio,
    /// The selected elements, sorted in increasing order.
    elements: Vec<ElementId>,
}

impl ApproximationSolution {
    pub fn new(ratio: ApproximationRatio, mut elements: Vec<ElementId>) -> ApproximationSolution {
        elements.sort_unstable();
        ApproximationSolution { ratio, elements }
    }

    pub fn ratio(&self) -> ApproximationRatio {
        self.ratio
    }

    pub fn approximation_ratio(&self) -> f64 {
        self.ratio.value()
    }

    /// The selected elements as plain ground-set indices.
    pub fn indices(&self) -> Vec<usize> {
        self.elements.iter().map(StorageKey::index).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
