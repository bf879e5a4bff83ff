//! Carrier normalization and per-day carrier breakdown.

use tracing::info;

use crate::analyzers::types::{CarrierCategory, CarrierDayRow};
use crate::analyzers::utility::pivot_by_date;
use crate::cleaner::PackageRecord;

/// Known spellings after trimming and upper-casing.
static CARRIER_ALIASES: &[(&str, CarrierCategory)] = &[
    ("USPS", CarrierCategory::Usps),
    ("UNITED STATES POSTAL SERVICE", CarrierCategory::Usps),
    ("UPS", CarrierCategory::Ups),
    ("UNITED PARCEL SERVICE", CarrierCategory::Ups),
    ("FEDEX", CarrierCategory::Fedex),
    ("AMAZON", CarrierCategory::Amazon),
];

/// Maps free-text carrier names onto a [`CarrierCategory`].
///
/// Total: missing, empty and unrecognised values all become `Other`.
pub fn normalize_carrier(raw: Option<&str>) -> CarrierCategory {
    let Some(raw) = raw else {
        return CarrierCategory::Other;
    };
    let normalized = raw.trim().to_uppercase();
    CARRIER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, category)| *category)
        .unwrap_or(CarrierCategory::Other)
}

/// Result of the carrier breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarrierBreakdown {
    pub rows: Vec<CarrierDayRow>,
}

impl CarrierBreakdown {
    /// Packages per category across every day.
    pub fn category_total(&self, category: CarrierCategory) -> u64 {
        self.rows.iter().map(|row| row.count(category)).sum()
    }
}

/// Builds the `Date,USPS,UPS,FEDEX,AMAZON,OTHER,Total` table from both
/// cleaned sets. Every cleaned record lands in exactly one column.
#[tracing::instrument(skip_all, fields(rows_2324 = year_2324.len(), rows_2425 = year_2425.len()))]
pub fn carrier_breakdown(
    year_2324: &[PackageRecord],
    year_2425: &[PackageRecord],
) -> CarrierBreakdown {
    let categorized = year_2324.iter().chain(year_2425).map(|record| {
        let category = normalize_carrier(record.carrier.as_deref());
        (record.date, category.index())
    });

    let rows: Vec<CarrierDayRow> = pivot_by_date::<5>(categorized)
        .into_iter()
        .map(|(date, counts)| CarrierDayRow::from_counts(date, counts))
        .collect();
    let breakdown = CarrierBreakdown { rows };

    info!(
        days = breakdown.rows.len(),
        other = breakdown.category_total(CarrierCategory::Other),
        "Built daily carrier breakdown"
    );
    breakdown
}
