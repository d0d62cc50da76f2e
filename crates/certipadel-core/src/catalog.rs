//! Modalities and their category catalogs.

use std::fmt;

/// Competition modality (division) of a promotion certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modalidad {
    #[default]
    Caballeros,
    Damas,
    Mixtos,
}

/// Valid categories per modality. Order matters: it is the order the
/// category selector presents them in.
const CATEGORIAS_CABALLEROS: &[&str] = &["C3/C4", "C4", "C5", "C6", "C7", "C8", "C9"];
const CATEGORIAS_DAMAS: &[&str] = &["D4/D5", "D6", "D7/D8", "D8"];
const CATEGORIAS_MIXTOS: &[&str] = &[
    "Suma 9", "Suma 10", "Suma 11", "Suma 12", "Suma 13", "Suma 14", "Suma 15", "Suma 16",
];

impl Modalidad {
    /// All modalities, in display order.
    pub const ALL: [Modalidad; 3] = [Modalidad::Caballeros, Modalidad::Damas, Modalidad::Mixtos];

    /// Display label for this modality.
    pub fn label(self) -> &'static str {
        match self {
            Modalidad::Caballeros => "Caballeros",
            Modalidad::Damas => "Damas",
            Modalidad::Mixtos => "Mixtos",
        }
    }

    /// The ordered list of valid category labels for this modality.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Modalidad::Caballeros => CATEGORIAS_CABALLEROS,
            Modalidad::Damas => CATEGORIAS_DAMAS,
            Modalidad::Mixtos => CATEGORIAS_MIXTOS,
        }
    }

    /// Exact, case-sensitive membership test against this modality's catalog.
    pub fn is_valid_category(self, categoria: &str) -> bool {
        self.categories().contains(&categoria)
    }

    /// The highest category a player can reach in this modality.
    ///
    /// Only used to pick between the two congratulation-message templates.
    pub fn categoria_maxima(self) -> &'static str {
        match self {
            Modalidad::Caballeros => "C3",
            Modalidad::Damas => "D4",
            Modalidad::Mixtos => "Suma 7",
        }
    }
}

impl fmt::Display for Modalidad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_modality_has_categories() {
        for m in Modalidad::ALL {
            assert!(!m.categories().is_empty(), "{m} has no categories");
        }
    }

    #[test]
    fn test_no_duplicate_categories() {
        for m in Modalidad::ALL {
            let unique: HashSet<_> = m.categories().iter().collect();
            assert_eq!(unique.len(), m.categories().len(), "{m} has duplicates");
        }
    }

    #[test]
    fn test_membership_is_exact() {
        assert!(Modalidad::Caballeros.is_valid_category("C5"));
        assert!(!Modalidad::Caballeros.is_valid_category("c5"));
        assert!(!Modalidad::Caballeros.is_valid_category(""));
        assert!(Modalidad::Mixtos.is_valid_category("Suma 12"));
        assert!(!Modalidad::Mixtos.is_valid_category("Suma  12"));
    }

    #[test]
    fn test_categories_do_not_cross_modalities() {
        for m in Modalidad::ALL {
            for other in Modalidad::ALL {
                if m == other {
                    continue;
                }
                for c in other.categories() {
                    assert!(!m.is_valid_category(c), "{c} leaked from {other} into {m}");
                }
            }
        }
    }

    #[test]
    fn test_categoria_maxima() {
        assert_eq!(Modalidad::Caballeros.categoria_maxima(), "C3");
        assert_eq!(Modalidad::Damas.categoria_maxima(), "D4");
        assert_eq!(Modalidad::Mixtos.categoria_maxima(), "Suma 7");
    }

    #[test]
    fn test_default_modality() {
        assert_eq!(Modalidad::default(), Modalidad::Caballeros);
    }
}
