// Embedded observation dataset
use crate::application::observation_repository::ObservationRepository;
use crate::domain::observation::{ObservationPoint, ObservationSeries};

/// Annual temperature deviations for Canada, °C, relative to the reference baseline.
///
/// Source: Environment and Climate Change Canada, temperature change indicator.
const OBSERVATIONS: [(i32, f64); 76] = [
    (1948, -0.2), (1949, -0.2), (1950, -1.2), (1951, -0.6),
    (1952, 0.8), (1953, 0.8), (1954, 0.0), (1955, -0.2),
    (1956, -0.8), (1957, -0.3), (1958, 0.5), (1959, -0.4),
    (1960, 0.4), (1961, -0.2), (1962, 0.0), (1963, 0.2),
    (1964, -0.6), (1965, -0.6), (1966, -0.3), (1967, -0.4),
    (1968, 0.2), (1969, 0.4), (1970, -0.2), (1971, 0.0),
    (1972, -2.0), (1973, 0.6), (1974, -0.8), (1975, -0.1),
    (1976, 0.0), (1977, 1.0), (1978, -0.5), (1979, -0.2),
    (1980, 0.4), (1981, 2.0), (1982, -1.0), (1983, 0.1),
    (1984, 0.2), (1985, 0.0), (1986, 0.0), (1987, 1.5),
    (1988, 0.8), (1989, -0.2), (1990, -0.1), (1991, 0.4),
    (1992, -0.1), (1993, 0.4), (1994, 0.5), (1995, 0.5),
    (1996, -0.1), (1997, 0.6), (1998, 2.3), (1999, 1.7),
    (2000, 0.8), (2001, 1.8), (2002, 0.5), (2003, 1.0),
    (2004, 0.0), (2005, 1.6), (2006, 2.4), (2007, 0.8),
    (2008, 0.6), (2009, 0.7), (2010, 3.0), (2011, 1.3),
    (2012, 1.8), (2013, 0.7), (2014, 0.6), (2015, 1.3),
    (2016, 2.1), (2017, 1.5), (2018, 0.6), (2019, 1.1),
    (2020, 1.2), (2021, 2.1), (2022, 1.2), (2023, 2.8),
];

pub fn embedded_points() -> Vec<ObservationPoint> {
    OBSERVATIONS
        .iter()
        .map(|&(year, value)| ObservationPoint::new(year, value))
        .collect()
}

/// Repository over the compiled-in table
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl ObservationRepository for EmbeddedDataset {
    fn load_series(&self) -> anyhow::Result<ObservationSeries> {
        Ok(ObservationSeries::new(embedded_points())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let series = EmbeddedDataset.load_series().unwrap();
        assert_eq!(series.len(), 76);
        assert_eq!(series.first_year(), 1948);
        assert_eq!(series.last_year(), 2023);
        assert!(series.windows(2).all(|w| w[1].year == w[0].year + 1));
    }

    #[test]
    fn test_known_values() {
        let points = embedded_points();
        let value = |year: i32| {
            points
                .iter()
                .find(|p| p.year == year)
                .map(|p| p.celsius_deviation)
        };
        assert_eq!(value(1950), Some(-1.2));
        assert_eq!(value(1972), Some(-2.0));
        assert_eq!(value(1998), Some(2.3));
        assert_eq!(value(2010), Some(3.0));
        assert_eq!(value(1947), None);
    }
}
