use serde::Deserialize;

use crate::properties::catalog::Property;

/// Listing filter criteria as they arrive on the query string. Every field
/// is optional and arrives as raw text; an absent, blank, or unparseable
/// value is treated as unconstrained rather than as zero.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_bedrooms: Option<String>,
    pub min_bathrooms: Option<String>,
    /// Comma-separated amenity names. Blank tokens are not criteria, so
    /// they are dropped here (unlike the profile CSV fields, where they are
    /// user data and kept).
    pub amenities: Option<String>,
}

impl ListingQuery {
    fn min_price(&self) -> Option<f64> {
        parse_bound(self.min_price.as_deref())
    }

    fn max_price(&self) -> Option<f64> {
        parse_bound(self.max_price.as_deref())
    }

    fn min_bedrooms(&self) -> Option<u32> {
        parse_bound(self.min_bedrooms.as_deref())
    }

    fn min_bathrooms(&self) -> Option<u32> {
        parse_bound(self.min_bathrooms.as_deref())
    }

    pub fn required_amenities(&self) -> Vec<&str> {
        self.amenities
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .collect()
    }

    /// Conjunction of all present bounds; vacuously true when none are set.
    pub fn matches(&self, property: &Property) -> bool {
        let meets_min_price = self.min_price().map_or(true, |min| property.price >= min);
        let meets_max_price = self.max_price().map_or(true, |max| property.price <= max);
        let meets_bedrooms = self
            .min_bedrooms()
            .map_or(true, |min| property.bedrooms >= min);
        let meets_bathrooms = self
            .min_bathrooms()
            .map_or(true, |min| property.bathrooms >= min);
        let meets_amenities = self
            .required_amenities()
            .iter()
            .all(|required| property.amenities.iter().any(|a| a == required));

        meets_min_price && meets_max_price && meets_bedrooms && meets_bathrooms && meets_amenities
    }
}

fn parse_bound<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}

/// Narrow `properties` to those matching `query`, preserving the incoming
/// order. Pure; no I/O.
pub fn filter_properties(query: &ListingQuery, properties: &[Property]) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| query.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::catalog::seed_properties;

    fn query(
        min_price: Option<&str>,
        max_price: Option<&str>,
        min_bedrooms: Option<&str>,
        min_bathrooms: Option<&str>,
        amenities: Option<&str>,
    ) -> ListingQuery {
        ListingQuery {
            min_price: min_price.map(String::from),
            max_price: max_price.map(String::from),
            min_bedrooms: min_bedrooms.map(String::from),
            min_bathrooms: min_bathrooms.map(String::from),
            amenities: amenities.map(String::from),
        }
    }

    #[test]
    fn empty_criteria_return_everything_in_order() {
        let all = seed_properties();
        let result = filter_properties(&ListingQuery::default(), &all);
        assert_eq!(result.len(), all.len());
        let ids: Vec<_> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn min_price_keeps_only_the_expensive_listing() {
        let all = seed_properties();
        let result = filter_properties(&query(Some("2000"), None, None, None, None), &all);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].price, 2500.0);
    }

    #[test]
    fn max_price_keeps_only_the_cheap_listing() {
        let all = seed_properties();
        let result = filter_properties(&query(None, Some("2000"), None, None, None), &all);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].price, 1800.0);
    }

    #[test]
    fn amenity_requirement_must_be_contained() {
        let all = seed_properties();
        let result = filter_properties(&query(None, None, None, None, Some("Pool")), &all);
        assert_eq!(result.len(), 1);
        assert!(result[0].amenities.iter().any(|a| a == "Pool"));

        // both seeds have parking
        let result = filter_properties(&query(None, None, None, None, Some("Parking")), &all);
        assert_eq!(result.len(), 2);

        let result = filter_properties(&query(None, None, None, None, Some("Pool,Laundry")), &all);
        assert!(result.is_empty());
    }

    #[test]
    fn bedroom_and_bathroom_bounds_are_inclusive_minimums() {
        let all = seed_properties();
        let result = filter_properties(&query(None, None, Some("2"), None, None), &all);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].bedrooms, 2);

        let result = filter_properties(&query(None, None, Some("1"), Some("1"), None), &all);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn blank_criteria_are_unconstrained_not_zero() {
        let all = seed_properties();
        let result = filter_properties(&query(Some(""), Some(" "), None, None, Some("")), &all);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn survivors_satisfy_every_active_predicate() {
        let all = seed_properties();
        let q = query(Some("1000"), Some("3000"), Some("1"), Some("1"), Some("Parking"));
        for p in filter_properties(&q, &all) {
            assert!(p.price >= 1000.0 && p.price <= 3000.0);
            assert!(p.bedrooms >= 1 && p.bathrooms >= 1);
            assert!(p.amenities.iter().any(|a| a == "Parking"));
        }
    }
}
