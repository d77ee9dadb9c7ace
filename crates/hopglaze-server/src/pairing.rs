//! Beer-to-donut pairing.
//!
//! The pairing feature is intentionally inert: no scoring, filtering, or
//! tie-break criteria have been defined, so [`best_match`] never selects a
//! donut. The HTTP surface answers `200 OK` regardless of the outcome.

use hopglaze_types::{Beer, Donut};

/// Select the donut that best pairs with the given beer.
///
/// Always returns `None`: the selection criteria are not yet defined and
/// guessing them here would invent semantics the catalog does not have.
pub fn best_match<'a>(_beer: &Beer, _donuts: &'a [Donut]) -> Option<&'a Donut> {
    None
}

#[cfg(test)]
mod tests {
    use hopglaze_types::{BeerId, DonutId};

    use super::*;

    #[test]
    fn best_match_never_selects_a_donut() {
        let beer = Beer {
            id: BeerId::from(1),
            name: String::from("Lager"),
        };
        let donuts = vec![
            Donut {
                id: DonutId::from(1),
                name: String::from("Glazed"),
            },
            Donut {
                id: DonutId::from(2),
                name: String::from("Jelly"),
            },
        ];

        assert!(best_match(&beer, &donuts).is_none());
        assert!(best_match(&beer, &[]).is_none());
    }
}
