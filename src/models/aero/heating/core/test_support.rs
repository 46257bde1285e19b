use crate::support::thermo::{
    fluid::Air,
    model::{PowerLawConductivity, Sutherland},
};

use super::{HeatingChain, HeatingParameters};

/// The standard air chain with default constants.
pub(super) fn chain() -> HeatingChain<Sutherland<Air>, PowerLawConductivity<Air>> {
    HeatingChain::new(&HeatingParameters::default()).expect("default constants are valid")
}
