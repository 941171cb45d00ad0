//! Station store: the canonical dataset and its filtered/sorted view
//!
//! The store owns the reading set exclusively. Everything else in the
//! application works on the snapshots returned by [`StationStore::all`] and
//! [`StationStore::filtered`]; nothing outside this module mutates a
//! reading.

use rand::Rng;
use tracing::debug;

use crate::reading::StationReading;

/// Sort direction applied on top of the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The sort currently applied to the filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Per-field half-widths of the simulated refresh perturbation.
const TEMPERATURE_BOUND: f64 = 1.0;
const HUMIDITY_BOUND: f64 = 2.5;
const PRESSURE_BOUND: f64 = 1.5;

/// Holds the full reading set plus the filtered/sorted view derived from it.
///
/// Both views are index lists into the full set, so refreshed values show
/// through without re-deriving, and the full set keeps its insertion order
/// no matter what the view does. `filter_order` is the raw filter result;
/// `filtered` is that order with the sort applied on top, which lets a sort
/// toggle re-sort without re-running the text match.
pub struct StationStore {
    readings: Vec<StationReading>,
    filter: String,
    filter_order: Vec<usize>,
    filtered: Vec<usize>,
    sort: Option<SortSpec>,
}

impl StationStore {
    pub fn new(readings: Vec<StationReading>) -> Self {
        let filter_order: Vec<usize> = (0..readings.len()).collect();
        Self {
            readings,
            filter: String::new(),
            filtered: filter_order.clone(),
            filter_order,
            sort: None,
        }
    }

    /// The full dataset in insertion order.
    pub fn all(&self) -> &[StationReading] {
        &self.readings
    }

    /// The current filtered (and, if set, sorted) view.
    pub fn filtered(&self) -> Vec<&StationReading> {
        self.filtered.iter().map(|&i| &self.readings[i]).collect()
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Apply a case-insensitive substring filter on station names.
    ///
    /// An empty filter matches everything. The full set is never mutated;
    /// only the view changes. The current sort stays applied on top.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
        self.derive_filtered();
        self.apply_sort();
        debug!(
            filter = %self.filter,
            matched = self.filtered.len(),
            "filter applied"
        );
    }

    /// Stable-sort the current filtered view by `field`.
    ///
    /// If every present value of the field parses as a number the comparison
    /// is numeric, otherwise case-sensitive string. Missing values (unknown
    /// field ids included) sort after present ones; rows with equal keys keep
    /// their relative order, so re-sorting by the same field is idempotent.
    pub fn set_sort(&mut self, field: &str, direction: SortDirection) {
        self.sort = Some(SortSpec {
            field: field.to_string(),
            direction,
        });
        self.apply_sort();
    }

    /// Header-click behavior: same field flips direction, a new field starts
    /// ascending. Reverses the comparison without re-deriving the filter.
    pub fn toggle_sort(&mut self, field: &str) {
        let direction = match &self.sort {
            Some(spec) if spec.field == field => spec.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.set_sort(field, direction);
    }

    /// Simulated live feed: perturb temperature, humidity and pressure of
    /// every reading within their field-specific bounds, rounded to one
    /// decimal place. Identity, spatial and remaining observation fields are
    /// untouched.
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for reading in &mut self.readings {
            perturb(&mut reading.temperature, TEMPERATURE_BOUND, rng);
            perturb(&mut reading.humidity, HUMIDITY_BOUND, rng);
            perturb(&mut reading.pressure, PRESSURE_BOUND, rng);
        }
        // Values changed under the view; keep the derived order consistent.
        self.apply_sort();
        debug!(stations = self.readings.len(), "readings refreshed");
    }

    fn derive_filtered(&mut self) {
        let needle = self.filter.to_lowercase();
        self.filter_order = self
            .readings
            .iter()
            .enumerate()
            .filter(|(_, r)| needle.is_empty() || r.name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        self.filtered = self.filter_order.clone();
    }

    fn apply_sort(&mut self) {
        let Some(spec) = self.sort.clone() else {
            return;
        };

        // Sorting always starts from the filter order, never from the
        // previous sort result: equal keys keep the filtered view's relative
        // order and re-sorting by the same field stays idempotent.
        let keys: Vec<Option<String>> = self
            .filter_order
            .iter()
            .map(|&i| self.readings[i].value_of(&spec.field))
            .collect();

        let parsed: Vec<Option<f64>> = keys
            .iter()
            .map(|k| k.as_deref().and_then(|v| v.trim().parse::<f64>().ok()))
            .collect();

        let numeric = keys.iter().any(Option::is_some)
            && keys
                .iter()
                .zip(&parsed)
                .all(|(k, p)| k.is_none() || p.is_some());

        let mut rows: Vec<(usize, Option<String>, Option<f64>)> = self
            .filter_order
            .iter()
            .zip(keys)
            .zip(parsed)
            .map(|((&i, k), p)| (i, k, p))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = if numeric {
                compare_keys(&a.2, &b.2, |x, y| {
                    x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal)
                })
            } else {
                compare_keys(&a.1, &b.1, |x, y| x.cmp(y))
            };
            match spec.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        self.filtered = rows.into_iter().map(|(i, _, _)| i).collect();
    }
}

/// Missing keys compare greater than present ones so they sort to the end
/// (ascending); equal keys report `Equal` and the stable sort keeps their
/// relative order.
fn compare_keys<T, F>(a: &Option<T>, b: &Option<T>, cmp: F) -> std::cmp::Ordering
where
    F: Fn(&T, &T) -> std::cmp::Ordering,
{
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}

fn perturb<R: Rng + ?Sized>(raw: &mut String, bound: f64, rng: &mut R) {
    if let Ok(value) = raw.trim().parse::<f64>() {
        let next = value + rng.gen_range(-bound..=bound);
        *raw = format!("{:.1}", next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::columns;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reading(id: &str, name: &str, temp: &str, humidity: &str) -> StationReading {
        StationReading {
            station_id: id.to_string(),
            name: name.to_string(),
            date: "2025-08-13".to_string(),
            hour: "18".to_string(),
            temperature: temp.to_string(),
            wind_speed: "2".to_string(),
            wind_direction: "90".to_string(),
            humidity: humidity.to_string(),
            precipitation: "0".to_string(),
            pressure: "1019.5".to_string(),
            lat: 52.0,
            lon: 19.0,
        }
    }

    fn store() -> StationStore {
        StationStore::new(vec![
            reading("1", "Białystok", "20.3", "62.3"),
            reading("2", "Warszawa", "24.8", "55.2"),
            reading("3", "Kraków", "25.1", "52.8"),
            reading("4", "Nowa Warszawa", "24.8", "48.0"),
        ])
    }

    fn names(view: &[&StationReading]) -> Vec<String> {
        view.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn empty_filter_returns_full_set_in_order() {
        let mut store = store();
        store.set_filter("");
        assert_eq!(
            names(&store.filtered()),
            vec!["Białystok", "Warszawa", "Kraków", "Nowa Warszawa"]
        );
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut store = store();
        store.set_filter("warsz");
        assert_eq!(names(&store.filtered()), vec!["Warszawa", "Nowa Warszawa"]);

        store.set_filter("WARSZ");
        assert_eq!(names(&store.filtered()), vec!["Warszawa", "Nowa Warszawa"]);
    }

    #[test]
    fn filter_does_not_mutate_full_set() {
        let mut store = store();
        store.set_filter("kraków");
        assert_eq!(store.all().len(), 4);
        assert_eq!(names(&store.filtered()), vec!["Kraków"]);
    }

    #[test]
    fn numeric_sort_ascending_then_toggled_is_exact_reverse() {
        let mut store = StationStore::new(vec![
            reading("1", "A", "20.3", "60"),
            reading("2", "B", "25.1", "60"),
            reading("3", "C", "19.5", "60"),
            reading("4", "D", "24.8", "60"),
        ]);
        store.toggle_sort(columns::TEMPERATURE);
        let ascending = names(&store.filtered());
        assert_eq!(ascending, vec!["C", "A", "D", "B"]);

        store.toggle_sort(columns::TEMPERATURE);
        let descending = names(&store.filtered());
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut store = store();
        // Warszawa and Nowa Warszawa share temperature 24.8; their relative
        // order must survive the sort.
        store.set_sort(columns::TEMPERATURE, SortDirection::Ascending);
        assert_eq!(
            names(&store.filtered()),
            vec!["Białystok", "Warszawa", "Nowa Warszawa", "Kraków"]
        );

        // Re-sorting by the same field is idempotent.
        store.set_sort(columns::TEMPERATURE, SortDirection::Ascending);
        assert_eq!(
            names(&store.filtered()),
            vec!["Białystok", "Warszawa", "Nowa Warszawa", "Kraków"]
        );
    }

    #[test]
    fn string_sort_is_case_sensitive() {
        let mut store = StationStore::new(vec![
            reading("1", "b-station", "x", "60"),
            reading("2", "A-station", "x", "60"),
            reading("3", "B-station", "x", "60"),
        ]);
        store.set_sort(columns::NAME, SortDirection::Ascending);
        assert_eq!(
            names(&store.filtered()),
            vec!["A-station", "B-station", "b-station"]
        );
    }

    #[test]
    fn unknown_field_keeps_view_order() {
        let mut store = store();
        store.set_filter("warsz");
        store.set_sort("no_such_field", SortDirection::Ascending);
        assert_eq!(names(&store.filtered()), vec!["Warszawa", "Nowa Warszawa"]);
    }

    #[test]
    fn unparseable_values_sort_to_the_end() {
        let mut store = StationStore::new(vec![
            reading("1", "A", "n/a", "60"),
            reading("2", "B", "19.5", "60"),
            reading("3", "C", "25.1", "60"),
        ]);
        store.set_sort(columns::TEMPERATURE, SortDirection::Ascending);
        // "n/a" fails to parse; the column falls back to string comparison
        // where every value is present, so it participates normally there.
        assert_eq!(names(&store.filtered()), vec!["B", "C", "A"]);
    }

    #[test]
    fn sort_survives_refilter() {
        let mut store = store();
        store.set_sort(columns::TEMPERATURE, SortDirection::Descending);
        store.set_filter("warsz");
        assert_eq!(names(&store.filtered()), vec!["Warszawa", "Nowa Warszawa"]);
        assert_eq!(
            store.sort(),
            Some(&SortSpec {
                field: columns::TEMPERATURE.to_string(),
                direction: SortDirection::Descending,
            })
        );
    }

    #[test]
    fn refresh_perturbs_only_mutable_fields_within_bounds() {
        let mut store = store();
        let before = store.all().to_vec();
        let mut rng = StdRng::seed_from_u64(7);
        store.refresh(&mut rng);

        for (old, new) in before.iter().zip(store.all()) {
            assert_eq!(old.station_id, new.station_id);
            assert_eq!(old.name, new.name);
            assert_eq!(old.lat, new.lat);
            assert_eq!(old.lon, new.lon);
            assert_eq!(old.date, new.date);
            assert_eq!(old.hour, new.hour);
            assert_eq!(old.wind_speed, new.wind_speed);
            assert_eq!(old.wind_direction, new.wind_direction);
            assert_eq!(old.precipitation, new.precipitation);

            let dt = (new.temperature_value().unwrap() - old.temperature_value().unwrap()).abs();
            let dh = (new.humidity_value().unwrap() - old.humidity_value().unwrap()).abs();
            let dp = (new.pressure_value().unwrap() - old.pressure_value().unwrap()).abs();
            // 0.05 headroom for the one-decimal rounding of the result.
            assert!(dt <= 1.05, "temperature moved by {dt}");
            assert!(dh <= 2.55, "humidity moved by {dh}");
            assert!(dp <= 1.55, "pressure moved by {dp}");

            // Written back as one-decimal strings, like the feed delivers.
            assert!(new.temperature.contains('.'));
        }
    }

    #[test]
    fn refresh_skips_unparseable_values() {
        let mut store = StationStore::new(vec![reading("1", "A", "n/a", "60")]);
        let mut rng = StdRng::seed_from_u64(1);
        store.refresh(&mut rng);
        assert_eq!(store.all()[0].temperature, "n/a");
    }
}
