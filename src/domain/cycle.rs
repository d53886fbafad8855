//! Billing cycles and monthly cost normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::Decoded;

/// Recurrence period of a subscription. The set is closed; there is no
/// custom-interval variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BillingCycle {
    Weekly,
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 3] = [
        BillingCycle::Weekly,
        BillingCycle::Monthly,
        BillingCycle::Yearly,
    ];

    /// Normalizes a cycle-native price to its monthly-equivalent value.
    ///
    /// Weekly uses the `52 / 12` average-weeks-per-month constant. Totals
    /// shown to users depend on this exact figure, so it must not be
    /// replaced with a rounded or calendar-exact average.
    pub fn monthly_equivalent(&self, price: f64) -> f64 {
        match self {
            BillingCycle::Weekly => price * 52.0 / 12.0,
            BillingCycle::Monthly => price,
            BillingCycle::Yearly => price / 12.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BillingCycle::Weekly => "Weekly",
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }

    /// Decodes a raw string, degrading to `Monthly` when unrecognized.
    pub fn decode(raw: &str) -> Decoded<BillingCycle> {
        for cycle in BillingCycle::ALL {
            if cycle.display_name() == raw {
                return Decoded::Recognized(cycle);
            }
        }
        Decoded::Defaulted(BillingCycle::Monthly)
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_normalization_uses_average_week_count() {
        assert_eq!(
            BillingCycle::Weekly.monthly_equivalent(10.0),
            10.0 * 52.0 / 12.0
        );
    }

    #[test]
    fn monthly_normalization_is_identity() {
        assert_eq!(BillingCycle::Monthly.monthly_equivalent(10.0), 10.0);
    }

    #[test]
    fn yearly_normalization_divides_by_twelve() {
        assert_eq!(BillingCycle::Yearly.monthly_equivalent(120.0), 10.0);
    }

    #[test]
    fn decode_defaults_unknown_values_to_monthly() {
        let decoded = BillingCycle::decode("Fortnightly");
        assert_eq!(decoded.value(), BillingCycle::Monthly);
        assert!(decoded.is_defaulted());
        assert_eq!(
            BillingCycle::decode("Yearly"),
            Decoded::Recognized(BillingCycle::Yearly)
        );
    }
}
