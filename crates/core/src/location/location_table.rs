//! Static city cost-of-living table.

use super::location_model::LocationProfile;

/// Profile applied when a city is not in the table. Every multiplier is 1.0,
/// so the goal amount is left unchanged.
pub const DEFAULT_LOCATION: LocationProfile = LocationProfile::new("Default", 100, 100, 100);

// (city, property, living, general) in hundredths.
static LOCATIONS: &[LocationProfile] = &[
    LocationProfile::new("Mumbai", 220, 140, 150),
    LocationProfile::new("Delhi", 180, 130, 135),
    LocationProfile::new("Bangalore", 170, 125, 130),
    LocationProfile::new("Gurgaon", 170, 130, 135),
    LocationProfile::new("Noida", 140, 115, 120),
    LocationProfile::new("Hyderabad", 140, 115, 120),
    LocationProfile::new("Pune", 140, 115, 120),
    LocationProfile::new("Chennai", 140, 115, 120),
    LocationProfile::new("Kolkata", 110, 100, 105),
    LocationProfile::new("Chandigarh", 110, 100, 105),
    LocationProfile::new("Ahmedabad", 100, 95, 100),
    LocationProfile::new("Kochi", 100, 90, 95),
    LocationProfile::new("Jaipur", 90, 90, 90),
    LocationProfile::new("Lucknow", 85, 85, 88),
    LocationProfile::new("Indore", 85, 85, 88),
    LocationProfile::new("Bhubaneswar", 80, 85, 85),
    LocationProfile::new("Patna", 75, 80, 80),
];

// Alternate and historical names, already normalized.
static CITY_ALIASES: &[(&str, &str)] = &[
    ("bengaluru", "Bangalore"),
    ("bombay", "Mumbai"),
    ("new delhi", "Delhi"),
    ("gurugram", "Gurgaon"),
    ("madras", "Chennai"),
    ("calcutta", "Kolkata"),
    ("cochin", "Kochi"),
    ("ernakulam", "Kochi"),
];

/// Every known city profile, in table order.
pub fn all_locations() -> &'static [LocationProfile] {
    LOCATIONS
}

/// Case-insensitive lookup of a city, ignoring surrounding and repeated
/// whitespace. Aliases resolve to their canonical city.
pub fn find_location(city: &str) -> Option<&'static LocationProfile> {
    let key = normalize_city(city);
    if key.is_empty() {
        return None;
    }

    let canonical = CITY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, name)| *name);

    match canonical {
        Some(name) => LOCATIONS.iter().find(|profile| profile.city == name),
        None => LOCATIONS
            .iter()
            .find(|profile| profile.city.eq_ignore_ascii_case(&key)),
    }
}

/// Like [`find_location`], but unknown cities resolve to [`DEFAULT_LOCATION`].
pub fn resolve_location(city: &str) -> &'static LocationProfile {
    find_location(city).unwrap_or(&DEFAULT_LOCATION)
}

fn normalize_city(city: &str) -> String {
    city.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Multiplier;
    use std::collections::HashSet;

    #[test]
    fn lookup_is_case_insensitive() {
        let mumbai = find_location("mumbai").unwrap();
        assert_eq!(mumbai.city, "Mumbai");
        assert_eq!(find_location("MUMBAI"), Some(mumbai));
        assert_eq!(find_location("  Mumbai \n"), Some(mumbai));
    }

    #[test]
    fn aliases_resolve_to_canonical_city() {
        assert_eq!(find_location("Bengaluru").unwrap().city, "Bangalore");
        assert_eq!(find_location("new   delhi").unwrap().city, "Delhi");
        assert_eq!(find_location("Cochin").unwrap().city, "Kochi");
    }

    #[test]
    fn known_multipliers() {
        let mumbai = find_location("mumbai").unwrap();
        assert_eq!(mumbai.property, Multiplier::from_hundredths(220));

        let kochi = find_location("kochi").unwrap();
        assert_eq!(kochi.living, Multiplier::from_hundredths(90));
    }

    #[test]
    fn unknown_city_falls_back_to_default() {
        assert!(find_location("Atlantis").is_none());
        assert!(find_location("").is_none());
        assert!(find_location("   ").is_none());

        let fallback = resolve_location("Atlantis");
        assert_eq!(fallback, &DEFAULT_LOCATION);
        assert_eq!(fallback.property, Multiplier::ONE);
        assert_eq!(fallback.living, Multiplier::ONE);
        assert_eq!(fallback.general, Multiplier::ONE);
    }

    #[test]
    fn table_multipliers_are_strictly_positive() {
        for profile in all_locations() {
            assert!(profile.property.is_positive(), "{}", profile.city);
            assert!(profile.living.is_positive(), "{}", profile.city);
            assert!(profile.general.is_positive(), "{}", profile.city);
        }
    }

    #[test]
    fn city_names_are_unique_and_aliases_point_at_table_entries() {
        let mut seen = HashSet::new();
        for profile in all_locations() {
            assert!(seen.insert(profile.city.to_lowercase()), "{}", profile.city);
        }
        for (alias, name) in CITY_ALIASES {
            assert!(!seen.contains(*alias), "alias {} shadows a city", alias);
            assert!(
                all_locations().iter().any(|p| p.city == *name),
                "alias {} points at missing city {}",
                alias,
                name
            );
        }
    }
}
