use crate::models::{AlertKind, Tourist};

pub const DEFAULT_STALE_MINUTES: u32 = 20;

/// Minutes of inactivity parsed from the leading token of a relative-time
/// string ("25 minutes ago" -> 25). Unparseable input fails open to `None`,
/// never an error.
pub fn stale_minutes(last_active: &str) -> Option<u32> {
    let lead = last_active.split_whitespace().next()?;
    match lead.parse() {
        Ok(minutes) => Some(minutes),
        Err(_) => {
            tracing::debug!(text = last_active, "ignoring unparseable last-active time");
            None
        }
    }
}

fn is_stale(tourist: &Tourist, threshold_minutes: u32) -> bool {
    tourist
        .last_active
        .as_deref()
        .and_then(stale_minutes)
        .is_some_and(|minutes| minutes > threshold_minutes)
}

/// Tourists needing attention: everyone with an active SOS, then everyone
/// else inactive beyond the threshold. Roster order is preserved within
/// each group.
pub fn derive_alerts(tourists: &[Tourist], threshold_minutes: u32) -> Vec<Tourist> {
    let sos = tourists.iter().filter(|t| t.sos_active);
    let inactive = tourists
        .iter()
        .filter(|t| !t.sos_active && is_stale(t, threshold_minutes));
    sos.chain(inactive).cloned().collect()
}

/// Display classification for a tourist, independent of whether the tourist
/// is on the alert board at all.
pub fn alert_kind(tourist: &Tourist) -> AlertKind {
    if tourist.sos_active {
        AlertKind::Sos
    } else if !tourist.id_issued {
        AlertKind::Unregistered
    } else {
        AlertKind::Inactive
    }
}

pub fn describe_alert(tourist: &Tourist) -> String {
    match alert_kind(tourist) {
        AlertKind::Sos => "SOS alert active".to_string(),
        AlertKind::Unregistered => "no digital identity issued".to_string(),
        AlertKind::Inactive => match tourist.last_active.as_deref().and_then(stale_minutes) {
            Some(minutes) => format!("no activity for {minutes} minutes"),
            None => "no recent activity".to_string(),
        },
    }
}

/// The transient alert list an officer works through. Acknowledging removes
/// an entry from this board only; the roster keeps its SOS flags, so a
/// fresh derivation brings the entry back.
#[derive(Debug, Clone)]
pub struct AlertBoard {
    entries: Vec<Tourist>,
}

impl AlertBoard {
    pub fn derive(tourists: &[Tourist], threshold_minutes: u32) -> Self {
        Self {
            entries: derive_alerts(tourists, threshold_minutes),
        }
    }

    pub fn entries(&self) -> &[Tourist] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes exactly the matching entry; an unknown id is a no-op.
    /// Returns whether anything was removed.
    pub fn acknowledge(&mut self, tourist_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != tourist_id);
        self.entries.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::models::{Coordinate, RiskLevel};

    fn sample_tourist(id: &str, sos_active: bool, last_active: Option<&str>) -> Tourist {
        Tourist {
            id: id.to_string(),
            name: format!("Tourist {id}"),
            location: Coordinate { lat: 0.0, lng: 0.0 },
            risk_level: RiskLevel::Low,
            id_issued: true,
            blockchain_id: None,
            sos_active,
            nationality: None,
            emergency_contact: None,
            itinerary: None,
            safety_score: Some(80),
            last_active: last_active.map(str::to_string),
        }
    }

    #[test]
    fn stale_minutes_parses_leading_integer() {
        assert_eq!(stale_minutes("25 minutes ago"), Some(25));
        assert_eq!(stale_minutes("1 minute ago"), Some(1));
        assert_eq!(stale_minutes("just now"), None);
        assert_eq!(stale_minutes("about 5 minutes ago"), None);
        assert_eq!(stale_minutes(""), None);
    }

    #[test]
    fn derivation_is_exactly_sos_union_stale() {
        let tourists = vec![
            sample_tourist("A", false, Some("25 minutes ago")),
            sample_tourist("B", true, Some("1 minute ago")),
            sample_tourist("C", false, Some("5 minutes ago")),
            sample_tourist("D", false, Some("just now")),
            sample_tourist("E", false, None),
        ];
        let derived = derive_alerts(&tourists, DEFAULT_STALE_MINUTES);
        let ids: Vec<&str> = derived.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn sos_entries_precede_inactivity_entries() {
        let tourists = vec![
            sample_tourist("stale-1", false, Some("30 minutes ago")),
            sample_tourist("sos-1", true, None),
            sample_tourist("stale-2", false, Some("45 minutes ago")),
            sample_tourist("sos-2", true, None),
        ];
        let derived = derive_alerts(&tourists, 20);
        let ids: Vec<&str> = derived.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["sos-1", "sos-2", "stale-1", "stale-2"]);
    }

    #[test]
    fn threshold_is_a_strict_bound() {
        let tourists = vec![sample_tourist("edge", false, Some("20 minutes ago"))];
        assert!(derive_alerts(&tourists, 20).is_empty());
        assert_eq!(derive_alerts(&tourists, 19).len(), 1);
    }

    #[test]
    fn classification_is_independent_of_inclusion() {
        let mut fresh = sample_tourist("F", false, Some("2 minutes ago"));
        fresh.id_issued = false;
        assert_eq!(alert_kind(&fresh), AlertKind::Unregistered);
        assert!(derive_alerts(&[fresh], DEFAULT_STALE_MINUTES).is_empty());
    }

    #[test]
    fn seeded_board_lists_sos_then_inactive() {
        let dataset = Dataset::seeded();
        let board = AlertBoard::derive(&dataset.flattened_tourists(), DEFAULT_STALE_MINUTES);
        let ids: Vec<&str> = board.entries().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T003", "T008", "T007"]);
    }

    #[test]
    fn acknowledgement_suppresses_only_the_board_entry() {
        let dataset = Dataset::seeded();
        let tourists = dataset.flattened_tourists();
        let mut board = AlertBoard::derive(&tourists, DEFAULT_STALE_MINUTES);

        assert!(board.acknowledge("T003"));
        let ids: Vec<&str> = board.entries().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T008", "T007"]);

        // The roster is untouched, so the same derivation surfaces T003 again.
        let (_, t003) = dataset.find_tourist("T003").unwrap();
        assert!(t003.sos_active);
        assert_eq!(alert_kind(t003), AlertKind::Sos);
        let rederived = AlertBoard::derive(&tourists, DEFAULT_STALE_MINUTES);
        assert!(rederived.entries().iter().any(|t| t.id == "T003"));
    }

    #[test]
    fn acknowledging_unknown_id_is_a_no_op() {
        let dataset = Dataset::seeded();
        let mut board = AlertBoard::derive(&dataset.flattened_tourists(), DEFAULT_STALE_MINUTES);
        let before = board.len();
        assert!(!board.acknowledge("T999"));
        assert_eq!(board.len(), before);
    }

    #[test]
    fn alert_descriptions_follow_kind() {
        let dataset = Dataset::seeded();
        let (_, sos) = dataset.find_tourist("T008").unwrap();
        assert_eq!(describe_alert(sos), "SOS alert active");
        let (_, unregistered) = dataset.find_tourist("T007").unwrap();
        assert_eq!(describe_alert(unregistered), "no digital identity issued");
        let (_, inactive) = dataset.find_tourist("T006").unwrap();
        assert_eq!(describe_alert(inactive), "no activity for 15 minutes");
    }
}
