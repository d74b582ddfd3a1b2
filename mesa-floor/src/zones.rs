//! Zone occupancy aggregation (区域统计)

use shared::models::{Mesa, SIN_ZONA, ZoneStat};
use std::collections::HashMap;

/// Reduce a flat table list into one summary per zone.
///
/// Zones appear in order of first appearance. Tables without a zone label
/// (missing or blank) land in [`SIN_ZONA`]. There is no live state feed for
/// tables yet, so every table is counted as free and the occupancy
/// percentage is 0.
pub fn aggregate_zones(mesas: &[Mesa]) -> Vec<ZoneStat> {
    let mut stats: Vec<ZoneStat> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for mesa in mesas {
        let zona = mesa
            .zona
            .as_deref()
            .map(str::trim)
            .filter(|z| !z.is_empty())
            .unwrap_or(SIN_ZONA);

        let slot = *index.entry(zona).or_insert_with(|| {
            stats.push(ZoneStat::new(zona));
            stats.len() - 1
        });

        let stat = &mut stats[slot];
        stat.total_mesas += 1;
        stat.mesas_libres += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesa(id: i64, zona: Option<&str>) -> Mesa {
        Mesa {
            id,
            numero: id.to_string(),
            capacidad: 4,
            zona: zona.map(String::from),
            activa: true,
            estado: Default::default(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_zones(&[]).is_empty());
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let mesas = vec![
            mesa(1, Some("Interior")),
            mesa(2, Some("Interior")),
            mesa(3, Some("Terraza")),
        ];
        let stats = aggregate_zones(&mesas);
        assert_eq!(stats.len(), 2);

        assert_eq!(stats[0].zona, "Interior");
        assert_eq!(stats[0].total_mesas, 2);
        assert_eq!(stats[1].zona, "Terraza");
        assert_eq!(stats[1].total_mesas, 1);

        for stat in &stats {
            assert_eq!(stat.porcentaje_ocupacion, 0.0);
            assert_eq!(stat.mesas_libres, stat.total_mesas);
            assert_eq!(stat.mesas_ocupadas, 0);
            assert_eq!(stat.mesas_reservadas, 0);
            assert_eq!(stat.mesas_limpieza, 0);
        }
    }

    #[test]
    fn test_unlabelled_tables_share_sentinel_bucket() {
        let mesas = vec![
            mesa(1, Some("Terraza")),
            mesa(2, None),
            mesa(3, Some("  ")),
            mesa(4, Some("Barra")),
        ];
        let zonas: Vec<(String, u32)> = aggregate_zones(&mesas)
            .into_iter()
            .map(|s| (s.zona, s.total_mesas))
            .collect();
        assert_eq!(
            zonas,
            vec![
                ("Terraza".to_string(), 1),
                (SIN_ZONA.to_string(), 2),
                ("Barra".to_string(), 1),
            ]
        );
    }
}
