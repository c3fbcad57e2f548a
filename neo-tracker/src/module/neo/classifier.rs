//! Partition records into named / dangerous / non-dangerous groups

use neo_common::{AsteroidGroups, AsteroidRecord};

use super::catalog::Catalog;

/// Sort largest first. The sort is stable, so equal diameters keep their
/// input order (catalog first, then feed order).
fn sort_by_diameter_desc(records: &mut [AsteroidRecord]) {
    records.sort_by(|a, b| b.diameter.total_cmp(&a.diameter));
}

/// Split `records` into the three groups. Catalog membership wins over
/// the hazard flag; every input record lands in exactly one group.
pub fn classify(records: Vec<AsteroidRecord>, catalog: &Catalog) -> AsteroidGroups {
    let mut groups = AsteroidGroups::default();

    for record in records {
        if catalog.contains(&record.name) {
            groups.named.push(record);
        } else if record.is_dangerous {
            groups.dangerous.push(record);
        } else {
            groups.non_dangerous.push(record);
        }
    }

    sort_by_diameter_desc(&mut groups.named);
    sort_by_diameter_desc(&mut groups.dangerous);
    sort_by_diameter_desc(&mut groups.non_dangerous);

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(name: &str, diameter: f64, dangerous: bool) -> AsteroidRecord {
        AsteroidRecord::feed(name, diameter, dangerous, None, "1000")
    }

    fn combined(catalog: &Catalog, feed_records: Vec<AsteroidRecord>) -> Vec<AsteroidRecord> {
        let mut all = catalog.entries().to_vec();
        all.extend(feed_records);
        all
    }

    fn is_non_increasing(records: &[AsteroidRecord]) -> bool {
        records.windows(2).all(|w| w[0].diameter >= w[1].diameter)
    }

    #[test]
    fn test_two_feed_records_with_catalog() {
        let catalog = Catalog::bundled();
        let all = combined(&catalog, vec![feed("(A)", 100.0, true), feed("(B)", 50.0, false)]);

        let groups = classify(all, &catalog);
        assert_eq!(groups.named.len(), 3);
        assert_eq!(groups.dangerous.len(), 1);
        assert_eq!(groups.dangerous[0].diameter, 100.0);
        assert_eq!(groups.non_dangerous.len(), 1);
        assert_eq!(groups.non_dangerous[0].diameter, 50.0);

        let named: Vec<&str> = groups.named.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(named, vec!["Ceres", "Vesta", "Pallas"]);
    }

    #[test]
    fn test_partition_is_complete_and_exclusive() {
        let catalog = Catalog::bundled();
        let feed_records = vec![
            feed("(1)", 12.5, true),
            feed("(2)", 300.0, false),
            feed("(3)", 7.0, true),
            feed("(4)", 7.0, false),
            feed("(5)", 1200.0, true),
            feed("(6)", 0.4, false),
        ];
        let all = combined(&catalog, feed_records);
        let total = all.len();

        let groups = classify(all.clone(), &catalog);
        assert_eq!(groups.len(), total);

        for record in &all {
            let hits = groups.iter().filter(|r| *r == record).count();
            assert_eq!(hits, 1, "{} should appear exactly once", record.name);
        }

        assert!(groups.dangerous.iter().all(|r| r.is_dangerous && !catalog.contains(&r.name)));
        assert!(groups.non_dangerous.iter().all(|r| !r.is_dangerous && !catalog.contains(&r.name)));
        assert!(groups.named.iter().all(|r| catalog.contains(&r.name)));
    }

    #[test]
    fn test_groups_sorted_by_diameter() {
        let catalog = Catalog::bundled();
        let all = combined(
            &catalog,
            vec![
                feed("(s)", 3.0, true),
                feed("(l)", 30.0, true),
                feed("(m)", 10.0, true),
                feed("(x)", 1.0, false),
                feed("(y)", 2.0, false),
            ],
        );

        let groups = classify(all, &catalog);
        assert!(is_non_increasing(&groups.named));
        assert!(is_non_increasing(&groups.dangerous));
        assert!(is_non_increasing(&groups.non_dangerous));
        assert_eq!(groups.dangerous[0].name, "(l)");
        assert_eq!(groups.non_dangerous[0].name, "(y)");
    }

    #[test]
    fn test_catalog_name_wins_over_hazard_flag() {
        let catalog = Catalog::bundled();
        let mut hazardous_vesta = catalog.entries()[1].clone();
        hazardous_vesta.is_dangerous = true;

        let groups = classify(vec![hazardous_vesta, feed("Ceres", 5.0, true)], &catalog);
        assert_eq!(groups.named.len(), 2);
        assert!(groups.dangerous.is_empty());
        assert_eq!(groups.named[0].name, "Vesta");
    }

    #[test]
    fn test_equal_diameters_keep_input_order() {
        let catalog = Catalog::new(Vec::new());
        let groups = classify(
            vec![feed("first", 5.0, false), feed("second", 5.0, false), feed("third", 9.0, false)],
            &catalog,
        );

        let names: Vec<&str> = groups.non_dangerous.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_custom_catalog_membership() {
        let catalog = Catalog::new(vec![AsteroidRecord::catalog("Hygiea", 434.0, "1849-04-12", "")]);
        let groups = classify(
            vec![feed("Hygiea", 434.0, false), feed("Ceres", 939.4, false)],
            &catalog,
        );

        assert_eq!(groups.named.len(), 1);
        assert_eq!(groups.non_dangerous[0].name, "Ceres");
    }
}
