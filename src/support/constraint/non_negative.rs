use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use aeroheat_models::support::constraint::NonNegative;
///
/// let flux = NonNegative::new(17_332.9).unwrap();
/// assert_eq!(flux.into_inner(), 17_332.9);
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter};

    #[test]
    fn heat_fluxes() {
        let q = HeatFluxDensity::new::<watt_per_square_meter>(50_395.0);
        assert!(NonNegative::new(q).is_ok());

        let zero = NonNegative::zero::<HeatFluxDensity>();
        assert_eq!(zero.into_inner().get::<watt_per_square_meter>(), 0.0);

        let q = HeatFluxDensity::new::<watt_per_square_meter>(-1.0);
        assert_eq!(NonNegative::new(q).unwrap_err(), ConstraintError::Negative);
    }
}
