use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStatus {
    Safe,
    Moderate,
    Risky,
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneStatus::Safe => write!(f, "Safe"),
            ZoneStatus::Moderate => write!(f, "Moderate"),
            ZoneStatus::Risky => write!(f, "Risky"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tourist {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    pub risk_level: RiskLevel,
    pub id_issued: bool,
    pub blockchain_id: Option<String>,
    pub sos_active: bool,
    pub nationality: Option<String>,
    pub emergency_contact: Option<String>,
    pub itinerary: Option<String>,
    /// 0-100; absent when the tourist has not been scored yet.
    pub safety_score: Option<u8>,
    /// Free-text relative time as reported by the tracking feed,
    /// e.g. "5 minutes ago".
    pub last_active: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Zone {
    pub zone_id: String,
    pub name: String,
    pub status: ZoneStatus,
    pub tourists: Vec<Tourist>,
    pub nearby_help_centers: Vec<String>,
    pub coordinates: Option<Coordinate>,
    pub radius_meters: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub dept_id: String,
    pub role: String,
}

/// The single persisted document the session repository reads and writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub officer: Officer,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Sos,
    Unregistered,
    Inactive,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Sos => write!(f, "SOS"),
            AlertKind::Unregistered => write!(f, "Unregistered"),
            AlertKind::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Marker density tier for a zone on the overview map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    Low,
    Medium,
    High,
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Density::Low => write!(f, "low"),
            Density::Medium => write!(f, "medium"),
            Density::High => write!(f, "high"),
        }
    }
}

// One record type per chart kind; charting consumers get named fields
// instead of loose key-value rows.

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTouristCount {
    pub zone_id: String,
    pub name: String,
    pub tourists: usize,
    pub status: ZoneStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskSlice {
    pub status: ZoneStatus,
    pub zones: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityPoint {
    pub time: String,
    pub tourists: u32,
}
