use crate::models::{Density, RiskSlice, Zone, ZoneStatus, ZoneTouristCount};

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneBreakdown {
    pub zone_id: String,
    pub name: String,
    pub status: ZoneStatus,
    pub tourists: usize,
    pub sos_count: usize,
    pub unregistered: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub tourists_by_zone: Vec<ZoneTouristCount>,
    pub risk_distribution: Vec<RiskSlice>,
    pub zone_breakdown: Vec<ZoneBreakdown>,
    pub total_tourists: usize,
    pub active_sos: usize,
    pub unregistered: usize,
    /// Rounded mean of safety scores with missing scores counted as 0.
    /// Defined as 0 for an empty roster.
    pub average_safety_score: u32,
}

/// Pure summary of the zone list; same input, same output, no side effects.
pub fn aggregate(zones: &[Zone]) -> Statistics {
    let tourists_by_zone = zones
        .iter()
        .map(|zone| ZoneTouristCount {
            zone_id: zone.zone_id.clone(),
            name: zone.name.clone(),
            tourists: zone.tourists.len(),
            status: zone.status,
        })
        .collect();

    let risk_distribution = [ZoneStatus::Safe, ZoneStatus::Moderate, ZoneStatus::Risky]
        .into_iter()
        .map(|status| RiskSlice {
            status,
            zones: zones.iter().filter(|z| z.status == status).count(),
        })
        .collect();

    let zone_breakdown = zones
        .iter()
        .map(|zone| ZoneBreakdown {
            zone_id: zone.zone_id.clone(),
            name: zone.name.clone(),
            status: zone.status,
            tourists: zone.tourists.len(),
            sos_count: zone.tourists.iter().filter(|t| t.sos_active).count(),
            unregistered: zone.tourists.iter().filter(|t| !t.id_issued).count(),
        })
        .collect();

    let all = || zones.iter().flat_map(|zone| zone.tourists.iter());
    let total_tourists = all().count();
    let active_sos = all().filter(|t| t.sos_active).count();
    let unregistered = all().filter(|t| !t.id_issued).count();

    let score_sum: u32 = all().map(|t| u32::from(t.safety_score.unwrap_or(0))).sum();
    let average_safety_score = if total_tourists == 0 {
        0
    } else {
        (f64::from(score_sum) / total_tourists as f64).round() as u32
    };

    Statistics {
        tourists_by_zone,
        risk_distribution,
        zone_breakdown,
        total_tourists,
        active_sos,
        unregistered,
        average_safety_score,
    }
}

/// Marker density tier used by the zone overview: three or more tourists
/// crowd a marker, two share one, otherwise it stands alone.
pub fn density(tourist_count: usize) -> Density {
    if tourist_count >= 3 {
        Density::High
    } else if tourist_count >= 2 {
        Density::Medium
    } else {
        Density::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_zones;
    use crate::models::{Coordinate, RiskLevel, Tourist};

    fn scored_tourist(id: &str, safety_score: Option<u8>) -> Tourist {
        Tourist {
            id: id.to_string(),
            name: format!("Tourist {id}"),
            location: Coordinate { lat: 0.0, lng: 0.0 },
            risk_level: RiskLevel::Low,
            id_issued: true,
            blockchain_id: None,
            sos_active: false,
            nationality: None,
            emergency_contact: None,
            itinerary: None,
            safety_score,
            last_active: None,
        }
    }

    fn bare_zone(tourists: Vec<Tourist>) -> Zone {
        Zone {
            zone_id: "Z900".into(),
            name: "Test Strip".into(),
            status: ZoneStatus::Safe,
            tourists,
            nearby_help_centers: vec![],
            coordinates: None,
            radius_meters: None,
        }
    }

    #[test]
    fn seeded_headline_numbers() {
        let stats = aggregate(&seed_zones());
        assert_eq!(stats.total_tourists, 10);
        assert_eq!(stats.active_sos, 2);
        assert_eq!(stats.unregistered, 2);
        assert_eq!(stats.average_safety_score, 72);
    }

    #[test]
    fn risk_distribution_covers_all_buckets_in_order() {
        let stats = aggregate(&seed_zones());
        let buckets: Vec<(ZoneStatus, usize)> = stats
            .risk_distribution
            .iter()
            .map(|slice| (slice.status, slice.zones))
            .collect();
        assert_eq!(
            buckets,
            vec![
                (ZoneStatus::Safe, 2),
                (ZoneStatus::Moderate, 1),
                (ZoneStatus::Risky, 2),
            ]
        );
    }

    #[test]
    fn zone_breakdown_computes_per_zone_counts() {
        let stats = aggregate(&seed_zones());
        let riverfront = stats
            .zone_breakdown
            .iter()
            .find(|z| z.zone_id == "Z002")
            .unwrap();
        assert_eq!(riverfront.tourists, 3);
        assert_eq!(riverfront.sos_count, 1);
        assert_eq!(riverfront.unregistered, 1);

        let hilltop = stats
            .zone_breakdown
            .iter()
            .find(|z| z.zone_id == "Z001")
            .unwrap();
        assert_eq!(hilltop.sos_count, 0);
        assert_eq!(hilltop.unregistered, 0);
    }

    #[test]
    fn empty_roster_average_is_sentinel_zero() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_tourists, 0);
        assert_eq!(stats.average_safety_score, 0);

        let stats = aggregate(&[bare_zone(vec![])]);
        assert_eq!(stats.average_safety_score, 0);
    }

    #[test]
    fn missing_scores_count_as_zero() {
        let zones = vec![bare_zone(vec![
            scored_tourist("A", Some(80)),
            scored_tourist("B", None),
        ])];
        assert_eq!(aggregate(&zones).average_safety_score, 40);
    }

    #[test]
    fn average_rounds_to_nearest() {
        let zones = vec![bare_zone(vec![
            scored_tourist("A", Some(50)),
            scored_tourist("B", Some(51)),
        ])];
        // 50.5 rounds up
        assert_eq!(aggregate(&zones).average_safety_score, 51);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let zones = seed_zones();
        assert_eq!(aggregate(&zones), aggregate(&zones));
    }

    #[test]
    fn density_tiers() {
        assert_eq!(density(0), Density::Low);
        assert_eq!(density(1), Density::Low);
        assert_eq!(density(2), Density::Medium);
        assert_eq!(density(3), Density::High);
        assert_eq!(density(7), Density::High);
    }
}
