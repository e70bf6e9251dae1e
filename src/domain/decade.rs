// Decade aggregation of observations
use crate::domain::error::Result;
use crate::domain::observation::{validate_points, ObservationPoint};
use crate::domain::units::{round2, to_display, Unit};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeBucket {
    pub decade_start: i32,
    pub mean_display_value: f64,
    pub count: usize,
}

impl DecadeBucket {
    pub fn label(&self) -> String {
        format!("{}s", self.decade_start)
    }
}

/// First year of the decade containing `year`
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Group observations by decade and average their display values.
///
/// Buckets come back ascending by decade; decades without observations are
/// not synthesized.
pub fn aggregate_by_decade(points: &[ObservationPoint], unit: Unit) -> Result<Vec<DecadeBucket>> {
    validate_points(points)?;

    let mut groups: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for point in points {
        let entry = groups.entry(decade_of(point.year)).or_insert((0.0, 0));
        entry.0 += to_display(point.celsius_deviation, unit);
        entry.1 += 1;
    }

    let buckets: Vec<DecadeBucket> = groups
        .into_iter()
        .map(|(decade_start, (total, count))| DecadeBucket {
            decade_start,
            mean_display_value: round2(total / count as f64),
            count,
        })
        .collect();

    tracing::debug!("Aggregated {} points into {} decades", points.len(), buckets.len());
    Ok(buckets)
}
